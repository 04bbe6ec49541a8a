use crate::tools::core::{Render, Tool, ToolContext, ToolResult, ToolSpec};
use crate::ui::{TableBuilder, UiElement};
use crate::weather::{HourlySeries, HourlyUnits};
use anyhow::Result;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherForecastInput {
    pub latitude: f64,
    pub longitude: f64,
    pub location_name: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherForecastOutput {
    pub location_name: String,
    pub hourly: HourlySeries,
    pub units: HourlyUnits,
}

/// Forecast timestamps arrive as ISO 8601 without seconds; show just the
/// clock time when they parse.
fn format_hour(timestamp: &str) -> String {
    NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M")
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_else(|_| timestamp.to_string())
}

impl Render for WeatherForecastOutput {
    fn status(&self) -> String {
        format!(
            "Fetched {} hourly forecast entries for {}",
            self.hourly.time.len(),
            self.location_name
        )
    }

    fn render(&self) -> String {
        format!(
            "Hourly forecast for {} with {} entries displayed",
            self.location_name,
            self.hourly.time.len()
        )
    }

    fn ui(&self) -> Option<UiElement> {
        let rows = self
            .hourly
            .time
            .iter()
            .zip(self.hourly.temperature_2m.iter())
            .zip(self.hourly.precipitation_probability.iter())
            .map(|((time, temperature), precipitation)| {
                json!({
                    "time": format_hour(time),
                    "temperature": format!("{}{}", temperature, self.units.temperature_2m),
                    "precipitation": format!("{}{}", precipitation, self.units.precipitation_probability),
                })
            })
            .collect();

        Some(
            TableBuilder::new()
                .column("time", "Time", "text")
                .column("temperature", "Temperature", "text")
                .column("precipitation", "Precipitation", "text")
                .rows(rows)
                .build(),
        )
    }
}

impl ToolResult for WeatherForecastOutput {
    fn is_success(&self) -> bool {
        true
    }
}

pub struct WeatherForecastTool;

#[async_trait::async_trait]
impl Tool for WeatherForecastTool {
    type Input = WeatherForecastInput;
    type Output = WeatherForecastOutput;

    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: "get-weather-forecast",
            description: "Get the hourly weather forecast at a location",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "latitude": {
                        "type": "number",
                        "description": "Latitude coordinate"
                    },
                    "longitude": {
                        "type": "number",
                        "description": "Longitude coordinate"
                    },
                    "locationName": {
                        "type": "string",
                        "description": "Name of the location"
                    }
                },
                "required": ["latitude", "longitude", "locationName"]
            }),
            output_schema: json!({
                "type": "object",
                "properties": {
                    "locationName": {"type": "string"},
                    "hourly": {"type": "object"},
                    "units": {"type": "object"}
                },
                "required": ["locationName", "hourly", "units"]
            }),
        }
    }

    async fn execute<'a>(
        &self,
        context: &mut ToolContext<'a>,
        input: Self::Input,
    ) -> Result<Self::Output> {
        let (hourly, units) = context
            .forecast
            .hourly(input.latitude, input.longitude)
            .await?;

        Ok(WeatherForecastOutput {
            location_name: input.location_name,
            hourly,
            units,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hour() {
        assert_eq!(format_hour("2025-03-22T14:00"), "14:00");
        assert_eq!(format_hour("not a timestamp"), "not a timestamp");
    }

    #[test]
    fn test_table_zips_parallel_series() {
        let output = WeatherForecastOutput {
            location_name: "Long Beach".to_string(),
            hourly: HourlySeries {
                time: vec![
                    "2025-03-22T00:00".to_string(),
                    "2025-03-22T01:00".to_string(),
                ],
                temperature_2m: vec![12.0, 11.4],
                precipitation_probability: vec![5.0, 10.0],
            },
            units: HourlyUnits {
                temperature_2m: "°C".to_string(),
                precipitation_probability: "%".to_string(),
            },
        };

        match output.ui() {
            Some(UiElement::Table(table)) => {
                assert_eq!(table.rows.len(), 2);
                assert_eq!(table.rows[0]["time"], "00:00");
                assert_eq!(table.rows[1]["temperature"], "11.4°C");
                assert_eq!(table.rows[1]["precipitation"], "10%");
            }
            other => panic!("expected a table, got {other:?}"),
        }
    }
}
