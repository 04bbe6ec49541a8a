use crate::tools::core::{Render, Tool, ToolContext, ToolResult, ToolSpec};
use crate::ui::{CardBuilder, UiElement};
use crate::weather::{CurrentConditions, CurrentUnits};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentWeatherInput {
    pub latitude: f64,
    pub longitude: f64,
    pub location_name: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentWeatherOutput {
    pub location_name: String,
    pub current: CurrentConditions,
    pub units: CurrentUnits,
}

impl Render for CurrentWeatherOutput {
    fn status(&self) -> String {
        format!("Fetched current weather for {}", self.location_name)
    }

    fn render(&self) -> String {
        format!(
            "Current weather in {}: {}{} (feels like {}{}), wind {}{}",
            self.location_name,
            self.current.temperature_2m,
            self.units.temperature_2m,
            self.current.apparent_temperature,
            self.units.apparent_temperature,
            self.current.wind_speed_10m,
            self.units.wind_speed_10m,
        )
    }

    fn ui(&self) -> Option<UiElement> {
        Some(
            CardBuilder::new()
                .title(format!("Weather in {}", self.location_name))
                .content(format!(
                    "Temperature: {}{}\nFeels like: {}{}\nHumidity: {}{}\nWind: {}{}",
                    self.current.temperature_2m,
                    self.units.temperature_2m,
                    self.current.apparent_temperature,
                    self.units.apparent_temperature,
                    self.current.relative_humidity_2m,
                    self.units.relative_humidity_2m,
                    self.current.wind_speed_10m,
                    self.units.wind_speed_10m,
                ))
                .build(),
        )
    }
}

impl ToolResult for CurrentWeatherOutput {
    fn is_success(&self) -> bool {
        true
    }
}

pub struct CurrentWeatherTool;

#[async_trait::async_trait]
impl Tool for CurrentWeatherTool {
    type Input = CurrentWeatherInput;
    type Output = CurrentWeatherOutput;

    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: "get-weather",
            description: "Get the current weather at a location",
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
                    "current": {"type": "object"},
                    "units": {"type": "object"}
                },
                "required": ["locationName", "current", "units"]
            }),
        }
    }

    async fn execute<'a>(
        &self,
        context: &mut ToolContext<'a>,
        input: Self::Input,
    ) -> Result<Self::Output> {
        let (current, units) = context
            .forecast
            .current(input.latitude, input.longitude)
            .await?;

        Ok(CurrentWeatherOutput {
            location_name: input.location_name,
            current,
            units,
        })
    }
}
