use crate::tools::core::{Render, Tool, ToolContext, ToolResult, ToolSpec};
use crate::ui::{FormBuilder, UiElement};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Deserialize, Serialize)]
pub struct CreateScheduleInput {
    /// Declared in the schema; the form does not depend on it yet.
    #[allow(dead_code)]
    pub day: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateScheduleOutput {}

impl Render for CreateScheduleOutput {
    fn status(&self) -> String {
        "Presented schedule creation form".to_string()
    }

    fn render(&self) -> String {
        "Do not output anything. Wait for the form submission, then generate a schedule."
            .to_string()
    }

    fn ui(&self) -> Option<UiElement> {
        Some(
            FormBuilder::new()
                .title("Create New Schedule")
                .description("Create a new schedule for the employees.")
                .render_mode("page")
                .text_field("start", "Start Time", true)
                .text_field("end", "End Time", true)
                .on_submit("display-graph-availability")
                .build(),
        )
    }
}

impl ToolResult for CreateScheduleOutput {
    fn is_success(&self) -> bool {
        true
    }
}

pub struct CreateScheduleTool;

#[async_trait::async_trait]
impl Tool for CreateScheduleTool {
    type Input = CreateScheduleInput;
    type Output = CreateScheduleOutput;

    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: "create-new-schedule",
            description: "Create a new schedule for the employees.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "day": {
                        "type": "string",
                        "description": "Day of the week"
                    }
                },
                "required": ["day"]
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
        context: &mut ToolContext<'a>,
        _input: Self::Input,
    ) -> Result<Self::Output> {
        // The roster fetch only surfaces store errors; the form itself is
        // static until schedule generation is data-driven.
        let _roster = context.store.fetch_all().await?;

        Ok(CreateScheduleOutput {})
    }
}
