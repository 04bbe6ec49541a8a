use crate::llm::convert_availability;
use crate::tools::core::{Render, Tool, ToolContext, ToolResult, ToolSpec};
use crate::types::NewEmployee;
use crate::ui::{CardBuilder, UiElement};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Stored availability when the caller did not supply one.
const AVAILABILITY_UNSET: &str = "None";

#[derive(Debug, Deserialize, Serialize)]
pub struct CreateEmployeeInput {
    pub name: String,
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub availability: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateEmployeeOutput {
    pub id: i64,
    pub name: String,
    pub availability: String,
}

impl Render for CreateEmployeeOutput {
    fn status(&self) -> String {
        format!("Created employee {}", self.name)
    }

    fn render(&self) -> String {
        format!("User created: {}", self.name)
    }

    fn ui(&self) -> Option<UiElement> {
        Some(
            CardBuilder::new()
                .title("User Created")
                .content(format!("Name {}", self.name))
                .build(),
        )
    }
}

impl ToolResult for CreateEmployeeOutput {
    fn is_success(&self) -> bool {
        true
    }
}

pub struct CreateEmployeeTool;

#[async_trait::async_trait]
impl Tool for CreateEmployeeTool {
    type Input = CreateEmployeeInput;
    type Output = CreateEmployeeOutput;

    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: "create-employee",
            description: "Create a user in the employee schedule",
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
                    }
                },
                "required": ["name"]
            }),
            output_schema: json!({
                "type": "object",
                "properties": {
                    "id": {"type": "number"},
                    "name": {"type": "string"},
                    "availability": {"type": "string"}
                },
                "required": ["id", "name", "availability"]
            }),
        }
    }

    async fn execute<'a>(
        &self,
        context: &mut ToolContext<'a>,
        input: Self::Input,
    ) -> Result<Self::Output> {
        let availability = match input.availability.as_deref() {
            Some(text) => convert_availability(context.generator, text).await?,
            None => AVAILABILITY_UNSET.to_string(),
        };

        let stored = context
            .store
            .insert(NewEmployee {
                id: input.id,
                name: input.name,
                availability,
            })
            .await?;

        Ok(CreateEmployeeOutput {
            id: stored.id,
            name: stored.name,
            availability: stored.availability,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rendering() {
        let output = CreateEmployeeOutput {
            id: 1,
            name: "Alice".to_string(),
            availability: "None".to_string(),
        };

        assert_eq!(output.render(), "User created: Alice");
        match output.ui() {
            Some(UiElement::Card(card)) => {
                assert_eq!(card.title, "User Created");
                assert_eq!(card.content, "Name Alice");
            }
            other => panic!("expected a card, got {other:?}"),
        }
    }

    #[test]
    fn test_data_shape() {
        let output = CreateEmployeeOutput {
            id: 1,
            name: "Alice".to_string(),
            availability: "None".to_string(),
        };

        let data = serde_json::to_value(&output).unwrap();
        assert_eq!(
            data,
            json!({"id": 1, "name": "Alice", "availability": "None"})
        );
    }
}
