//! JSON Schema tool converter.
//!
//! Default implementation of [`ToolSchemaPort`] that describes each tool as
//! a JSON Schema object, plus the classifications that gate it.

use cloudops_application::ports::tool_schema::ToolSchemaPort;
use cloudops_domain::tool::entities::{ToolDefinition, ToolSpec};
use serde_json::{Map, Value, json};

/// Default implementation producing JSON Schema.
///
/// Handles param_type → JSON Schema type mapping:
/// - `"integer"`, `"number"`, `"boolean"` → same name
/// - `"array"` → `"array"`; `bucket_access` items are objects, others strings
/// - anything else → `"string"`
pub struct JsonSchemaToolConverter;

impl JsonSchemaToolConverter {
    fn parameter_schema(name: &str, param_type: &str, description: &str) -> Value {
        match param_type {
            "integer" | "number" | "boolean" => json!({
                "type": param_type,
                "description": description,
            }),
            "array" => {
                let items = if name == "bucket_access" {
                    json!({
                        "type": "object",
                        "properties": {
                            "bucket_name": {"type": "string"},
                            "region": {"type": "string"},
                            "permissions": {"type": "string", "enum": ["read_only", "read_write"]},
                        },
                        "required": ["bucket_name", "region", "permissions"],
                    })
                } else {
                    json!({"type": "string"})
                };
                json!({
                    "type": "array",
                    "items": items,
                    "description": description,
                })
            }
            _ => json!({
                "type": "string",
                "description": description,
            }),
        }
    }

    fn sorted<'a>(tools: impl Iterator<Item = &'a ToolDefinition>) -> Vec<&'a ToolDefinition> {
        let mut tools: Vec<&ToolDefinition> = tools.collect();
        tools.sort_by_key(|t| &t.name);
        tools
    }
}

impl ToolSchemaPort for JsonSchemaToolConverter {
    fn tool_to_schema(&self, tool: &ToolDefinition) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for param in &tool.parameters {
            properties.insert(
                param.name.clone(),
                Self::parameter_schema(&param.name, &param.param_type, &param.description),
            );
            if param.required {
                required.push(json!(param.name));
            }
        }

        json!({
            "name": tool.name,
            "description": tool.description,
            "classifications": tool.classifications,
            "input_schema": {
                "type": "object",
                "properties": properties,
                "required": required,
            }
        })
    }

    fn all_tools_schema(&self, spec: &ToolSpec) -> Vec<Value> {
        Self::sorted(spec.all())
            .into_iter()
            .map(|t| self.tool_to_schema(t))
            .collect()
    }

    fn read_only_tools_schema(&self, spec: &ToolSpec) -> Vec<Value> {
        Self::sorted(spec.read_only_tools())
            .into_iter()
            .map(|t| self.tool_to_schema(t))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::{default_tool_spec, object_storage, volumes};

    #[test]
    fn test_tool_to_schema() {
        let converter = JsonSchemaToolConverter;
        let schema = converter.tool_to_schema(&volumes::resize_volume_definition());

        assert_eq!(schema["name"], "resize_volume");
        assert_eq!(schema["classifications"], json!(["billable"]));
        assert_eq!(schema["input_schema"]["type"], "object");

        let props = &schema["input_schema"]["properties"];
        assert_eq!(props["volume_id"]["type"], "integer");
        assert_eq!(props["size"]["type"], "integer");
        assert_eq!(props["confirm"]["type"], "boolean");

        let required = schema["input_schema"]["required"].as_array().unwrap();
        assert_eq!(required, &vec![json!("volume_id"), json!("size")]);
    }

    #[test]
    fn test_bucket_access_items() {
        let schema =
            JsonSchemaToolConverter.tool_to_schema(&object_storage::create_access_key_definition());
        let items = &schema["input_schema"]["properties"]["bucket_access"]["items"];
        assert_eq!(items["type"], "object");
        assert_eq!(
            items["properties"]["permissions"]["enum"],
            json!(["read_only", "read_write"])
        );
    }

    #[test]
    fn test_all_tools_schema_sorted() {
        let converter = JsonSchemaToolConverter;
        let tools = converter.all_tools_schema(&default_tool_spec());
        assert_eq!(tools.len(), 41);
        let names: Vec<&str> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_read_only_tools_schema() {
        let converter = JsonSchemaToolConverter;
        let tools = converter.read_only_tools_schema(&default_tool_spec());
        assert!(tools.iter().all(|t| t["classifications"] == json!([])));
        assert!(tools.iter().any(|t| t["name"] == "create_presigned_url"));
    }
}
