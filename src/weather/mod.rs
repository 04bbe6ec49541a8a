mod client;

pub use client::{
    CurrentConditions, CurrentUnits, ForecastClient, HourlySeries, HourlyUnits,
};
