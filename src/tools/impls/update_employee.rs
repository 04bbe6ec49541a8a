use crate::llm::convert_availability;
use crate::store::EmployeePatch;
use crate::tools::core::{Render, Tool, ToolContext, ToolResult, ToolSpec};
use crate::ui::{CardBuilder, UiElement};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateEmployeeInput {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub availability: Option<String>,
    /// Which field is being updated: "id", "name" or "availability". Any
    /// other value selects no branch.
    pub updater: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateEmployeeOutput {
    pub success: bool,
    /// Name involved in the update, used only for display.
    #[serde(skip)]
    pub display_name: String,
}

impl Render for UpdateEmployeeOutput {
    fn status(&self) -> String {
        format!("Updated employee {}", self.display_name)
    }

    fn render(&self) -> String {
        "Employee successfully updated. Show user a success screen".to_string()
    }

    fn ui(&self) -> Option<UiElement> {
        Some(
            CardBuilder::new()
                .title("User Updated")
                .content(format!("Name {}", self.display_name))
                .build(),
        )
    }
}

impl ToolResult for UpdateEmployeeOutput {
    fn is_success(&self) -> bool {
        self.success
    }
}

pub struct UpdateEmployeeTool;

#[async_trait::async_trait]
impl Tool for UpdateEmployeeTool {
    type Input = UpdateEmployeeInput;
    type Output = UpdateEmployeeOutput;

    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: "update-employee",
            description: "Update a user in the schedule",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "id": {
                        "type": "number",
                        "description": "ID of the employee"
                    },
                    "name": {
                        "type": "string",
                        "description": "Name of the employee"
                    },
                    "availability": {
                        "type": "string",
                        "description": "Availability of the employee"
                    },
                    "updater": {
                        "type": "string",
                        "description": "What parameter is being updated?"
                    }
                },
                "required": ["updater"]
            }),
            output_schema: json!({
                "type": "object",
                "properties": {
                    "success": {"type": "boolean"}
                },
                "required": ["success"]
            }),
        }
    }

    async fn execute<'a>(
        &self,
        context: &mut ToolContext<'a>,
        input: Self::Input,
    ) -> Result<Self::Output> {
        let name = input.name.clone().unwrap_or_default();

        // At most one branch runs. The write outcome is not consulted; the
        // tool reports success either way.
        match input.updater.as_str() {
            "id" => {
                let _ = context
                    .store
                    .update("name", &name, EmployeePatch::id(input.id))
                    .await;
            }
            "name" => {
                let filter = input.id.map(|id| id.to_string()).unwrap_or_default();
                let _ = context
                    .store
                    .update("id", &filter, EmployeePatch::name(input.name.clone()))
                    .await;
            }
            "availability" => {
                let text = input.availability.as_deref().unwrap_or_default();
                let converted = convert_availability(context.generator, text).await?;
                let _ = context
                    .store
                    .update("name", &name, EmployeePatch::availability(Some(converted)))
                    .await;
            }
            _ => {}
        }

        Ok(UpdateEmployeeOutput {
            success: true,
            display_name: name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_reports_success_only() {
        let output = UpdateEmployeeOutput {
            success: true,
            display_name: "Alice".to_string(),
        };

        let data = serde_json::to_value(&output).unwrap();
        assert_eq!(data, json!({"success": true}));
    }

    #[test]
    fn test_rendering() {
        let output = UpdateEmployeeOutput {
            success: true,
            display_name: "Alice".to_string(),
        };

        assert_eq!(
            output.render(),
            "Employee successfully updated. Show user a success screen"
        );
        match output.ui() {
            Some(UiElement::Card(card)) => assert_eq!(card.title, "User Updated"),
            other => panic!("expected a card, got {other:?}"),
        }
    }
}
