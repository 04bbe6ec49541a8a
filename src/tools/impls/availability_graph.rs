use crate::tools::core::{Render, Tool, ToolContext, ToolResult, ToolSpec};
use crate::ui::{ChartBuilder, UiElement};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Deserialize, Serialize)]
pub struct AvailabilityGraphInput {}

#[derive(Debug, Serialize, Deserialize)]
pub struct AvailabilityGraphOutput {}

impl Render for AvailabilityGraphOutput {
    fn status(&self) -> String {
        "Displayed availability graph".to_string()
    }

    fn render(&self) -> String {
        "Now generate-schedule using the day and availabilities.".to_string()
    }

    fn ui(&self) -> Option<UiElement> {
        // Placeholder series until the stored availability strings are
        // aggregated into real per-hour counts.
        Some(
            ChartBuilder::new("bar")
                .title("Employee Availability")
                .render_mode("page")
                .chart_data(vec![
                    json!({"hour": "00:00", "employees": 1}),
                    json!({"hour": "01:00", "employees": 1}),
                    json!({"hour": "02:00", "employees": 2}),
                    json!({"hour": "03:00", "employees": 2}),
                    json!({"hour": "04:00", "employees": 3}),
                ])
                .data_keys("hour", "employees")
                .description("Employee availability displayed for 3/22")
                .build(),
        )
    }
}

impl ToolResult for AvailabilityGraphOutput {
    fn is_success(&self) -> bool {
        true
    }
}

pub struct AvailabilityGraphTool;

#[async_trait::async_trait]
impl Tool for AvailabilityGraphTool {
    type Input = AvailabilityGraphInput;
    type Output = AvailabilityGraphOutput;

    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: "display-graph-availability",
            description: "Display a graph of everyone's availability",
            input_schema: json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
            output_schema: json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        }
    }

    async fn execute<'a>(
        &self,
        _context: &mut ToolContext<'a>,
        _input: Self::Input,
    ) -> Result<Self::Output> {
        Ok(AvailabilityGraphOutput {})
    }
}
