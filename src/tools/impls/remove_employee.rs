use crate::tools::core::{Render, Tool, ToolContext, ToolResult, ToolSpec};
use crate::ui::{CardBuilder, UiElement};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Deserialize, Serialize)]
pub struct RemoveEmployeeInput {
    pub name: String,
    /// Accepted for symmetry with the other employee tools; the delete
    /// matches on `name` alone.
    #[serde(default)]
    pub id: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RemoveEmployeeOutput {
    pub id: i64,
    pub name: String,
    /// Name as supplied in the request, used only for display.
    #[serde(skip)]
    pub requested_name: String,
}

impl Render for RemoveEmployeeOutput {
    fn status(&self) -> String {
        format!("Removed employee {}", self.requested_name)
    }

    fn render(&self) -> String {
        "Employee successfully removed. Show user a success screen".to_string()
    }

    fn ui(&self) -> Option<UiElement> {
        Some(
            CardBuilder::new()
                .title("User Removed")
                .content(format!("Name {}", self.requested_name))
                .build(),
        )
    }
}

impl ToolResult for RemoveEmployeeOutput {
    fn is_success(&self) -> bool {
        true
    }
}

pub struct RemoveEmployeeTool;

#[async_trait::async_trait]
impl Tool for RemoveEmployeeTool {
    type Input = RemoveEmployeeInput;
    type Output = RemoveEmployeeOutput;

    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: "remove-employee",
            description: "Remove a user from the schedule",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "name": {
                        "type": "string",
                        "description": "Name of the employee"
                    },
                    "id": {
                        "type": "number",
                        "description": "ID of the employee"
                    }
                },
                "required": ["name"]
            }),
            output_schema: json!({
                "type": "object",
                "properties": {
                    "id": {"type": "number"},
                    "name": {"type": "string"}
                },
                "required": ["id", "name"]
            }),
        }
    }

    async fn execute<'a>(
        &self,
        context: &mut ToolContext<'a>,
        input: Self::Input,
    ) -> Result<Self::Output> {
        context.store.delete_by_name(&input.name).await?;

        Ok(RemoveEmployeeOutput {
            id: 0,
            name: "removed".to_string(),
            requested_name: input.name,
        })
    }
}
