use std::collections::HashMap;

use crate::tools::core::dyn_tool::DynTool;
use crate::types::ToolDefinition;

/// Central registry for all tools in the service
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn DynTool>>,
}

impl ToolRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Create a registry with every tool the service exposes
    pub fn with_default_tools() -> Self {
        use crate::tools::impls::{
            AvailabilityGraphTool, CreateEmployeeTool, CreateScheduleTool, CurrentWeatherTool,
            GenerateScheduleTool, RemoveEmployeeTool, UpdateEmployeeTool, ViewEmployeesTool,
            WeatherForecastTool,
        };

        let mut registry = Self::new();
        registry.register(Box::new(CreateEmployeeTool));
        registry.register(Box::new(RemoveEmployeeTool));
        registry.register(Box::new(UpdateEmployeeTool));
        registry.register(Box::new(ViewEmployeesTool));
        registry.register(Box::new(CreateScheduleTool));
        registry.register(Box::new(GenerateScheduleTool));
        registry.register(Box::new(AvailabilityGraphTool));
        registry.register(Box::new(CurrentWeatherTool));
        registry.register(Box::new(WeatherForecastTool));
        registry
    }

    /// Register a tool in the registry
    pub fn register(&mut self, tool: Box<dyn DynTool>) {
        self.tools.insert(tool.spec().name.to_string(), tool);
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<&dyn DynTool> {
        self.tools.get(name).map(|tool| tool.as_ref())
    }

    /// Number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Tool definitions advertised to the host, sorted by name for a stable
    /// listing
    pub fn tool_definitions(&self) -> Vec<ToolDefinition> {
        let mut definitions: Vec<ToolDefinition> = self
            .tools
            .values()
            .map(|tool| {
                let spec = tool.spec();
                ToolDefinition {
                    name: spec.name.to_string(),
                    description: spec.description.to_string(),
                    input_schema: spec.input_schema.clone(),
                    output_schema: spec.output_schema.clone(),
                }
            })
            .collect();
        definitions.sort_by(|a, b| a.name.cmp(&b.name));
        definitions
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_contains_all_tools() {
        let registry = ToolRegistry::with_default_tools();

        assert_eq!(registry.len(), 9);
        for name in [
            "create-employee",
            "remove-employee",
            "update-employee",
            "view-employee-userbase",
            "create-new-schedule",
            "generate-schedule",
            "display-graph-availability",
            "get-weather",
            "get-weather-forecast",
        ] {
            assert!(registry.get(name).is_some(), "missing tool {name}");
        }
    }

    #[test]
    fn test_tool_definitions_are_sorted_and_schematized() {
        let registry = ToolRegistry::with_default_tools();
        let definitions = registry.tool_definitions();

        assert_eq!(definitions.len(), 9);
        let names: Vec<_> = definitions.iter().map(|d| d.name.clone()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);

        for definition in &definitions {
            assert_eq!(definition.input_schema["type"], "object");
            assert!(!definition.description.is_empty());
        }
    }

    #[test]
    fn test_unknown_tool_lookup() {
        let registry = ToolRegistry::with_default_tools();
        assert!(registry.get("does-not-exist").is_none());
    }
}
