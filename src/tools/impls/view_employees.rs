use crate::tools::core::{Render, Tool, ToolContext, ToolResult, ToolSpec};
use crate::types::Employee;
use crate::ui::{TableBuilder, UiElement};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Deserialize, Serialize)]
pub struct ViewEmployeesInput {}

#[derive(Debug, Serialize, Deserialize)]
pub struct ViewEmployeesOutput {
    pub database: Vec<Employee>,
}

impl Render for ViewEmployeesOutput {
    fn status(&self) -> String {
        format!("Listed {} employees", self.database.len())
    }

    fn render(&self) -> String {
        "Employee roster displayed".to_string()
    }

    fn ui(&self) -> Option<UiElement> {
        Some(
            TableBuilder::new()
                .column("id", "ID", "number")
                .column("name", "Name", "text")
                .column("availability", "Availability", "text")
                .rows(
                    self.database
                        .iter()
                        .map(|employee| {
                            json!({
                                "id": employee.id,
                                "name": employee.name,
                                "availability": employee.availability,
                            })
                        })
                        .collect(),
                )
                .build(),
        )
    }
}

impl ToolResult for ViewEmployeesOutput {
    fn is_success(&self) -> bool {
        true
    }
}

pub struct ViewEmployeesTool;

#[async_trait::async_trait]
impl Tool for ViewEmployeesTool {
    type Input = ViewEmployeesInput;
    type Output = ViewEmployeesOutput;

    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: "view-employee-userbase",
            description: "View all employees in the roster. Show a table of the availability of each employee.",
            input_schema: json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
            output_schema: json!({
                "type": "object",
                "properties": {
                    "database": {"type": "array"}
                },
                "required": ["database"]
            }),
        }
    }

    async fn execute<'a>(
        &self,
        context: &mut ToolContext<'a>,
        _input: Self::Input,
    ) -> Result<Self::Output> {
        let database = context.store.fetch_all().await?;
        Ok(ViewEmployeesOutput { database })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_mirrors_roster() {
        let output = ViewEmployeesOutput {
            database: vec![
                Employee {
                    id: 1,
                    name: "Alice".to_string(),
                    availability: "None".to_string(),
                },
                Employee {
                    id: 2,
                    name: "Bob".to_string(),
                    availability: "{\"0\": []}".to_string(),
                },
            ],
        };

        match output.ui() {
            Some(UiElement::Table(table)) => {
                assert_eq!(table.columns.len(), 3);
                assert_eq!(table.columns[2].key, "availability");
                assert_eq!(table.rows.len(), 2);
                assert_eq!(table.rows[1]["name"], "Bob");
            }
            other => panic!("expected a table, got {other:?}"),
        }
    }

    #[test]
    fn test_data_wraps_rows_in_database_field() {
        let output = ViewEmployeesOutput { database: vec![] };

        let data = serde_json::to_value(&output).unwrap();
        assert_eq!(data, json!({"database": []}));
    }
}
