use crate::tools::core::{Render, Tool, ToolContext, ToolResult, ToolSpec};
use crate::types::Employee;
use crate::ui::{CardBuilder, UiElement};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Deserialize, Serialize)]
pub struct GenerateScheduleInput {
    /// Requested window; no scheduling algorithm consumes it yet.
    #[allow(dead_code)]
    pub start: String,
    #[allow(dead_code)]
    pub end: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateScheduleOutput {
    /// The raw roster; no conflict resolution or interval math is applied.
    pub schedule: Vec<Employee>,
}

impl Render for GenerateScheduleOutput {
    fn status(&self) -> String {
        format!("Echoed roster of {} employees as schedule", self.schedule.len())
    }

    fn render(&self) -> String {
        "Generate schedule for the employees based on the availability.".to_string()
    }

    fn ui(&self) -> Option<UiElement> {
        Some(
            CardBuilder::new()
                .title("Schedule Generated")
                .content(format!(
                    "Schedule generated for {} employees",
                    self.schedule.len()
                ))
                .build(),
        )
    }
}

impl ToolResult for GenerateScheduleOutput {
    fn is_success(&self) -> bool {
        true
    }
}

pub struct GenerateScheduleTool;

#[async_trait::async_trait]
impl Tool for GenerateScheduleTool {
    type Input = GenerateScheduleInput;
    type Output = GenerateScheduleOutput;

    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: "generate-schedule",
            description: "Generate a schedule for the employees.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "start": {
                        "type": "string",
                        "description": "Start time"
                    },
                    "end": {
                        "type": "string",
                        "description": "End time"
                    }
                },
                "required": ["start", "end"]
            }),
            output_schema: json!({
                "type": "object",
                "properties": {
                    "schedule": {"type": "array"}
                },
                "required": ["schedule"]
            }),
        }
    }

    async fn execute<'a>(
        &self,
        context: &mut ToolContext<'a>,
        _input: Self::Input,
    ) -> Result<Self::Output> {
        let schedule = context.store.fetch_all().await?;
        Ok(GenerateScheduleOutput { schedule })
    }
}
