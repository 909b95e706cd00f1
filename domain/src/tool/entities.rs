//! Tool domain entities

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::filter::{FieldFilter, FilterSet, MatchMode};
use crate::gate::{CONFIRM_PARAM, OperationClassification};
use crate::operation::CompositeValidator;
use crate::validation::{ErrorKind, ValidationError};

/// Definition of a tool that can be called by the agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique name of the tool (e.g., "create_volume")
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Why the tool is gated; empty for read-only tools
    #[serde(default)]
    pub classifications: Vec<OperationClassification>,
    /// Parameter specifications
    pub parameters: Vec<ToolParameter>,
    /// Filters a list tool applies to its result
    #[serde(default)]
    pub filters: Vec<FilterField>,
    /// Argument rules checked after the gate
    #[serde(skip)]
    pub validator: Option<CompositeValidator>,
}

/// Parameter specification for a tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolParameter {
    /// Parameter name
    pub name: String,
    /// Parameter description
    pub description: String,
    /// Whether this parameter is required
    pub required: bool,
    /// Parameter type hint (e.g., "string", "integer", "boolean", "array")
    pub param_type: String,
}

/// A filter argument of a list tool, mapped onto a field of each result item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterField {
    /// Argument name in the tool call
    pub param: String,
    /// Field of each returned item
    pub field: String,
    pub mode: MatchMode,
}

impl ToolDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            classifications: Vec::new(),
            parameters: Vec::new(),
            filters: Vec::new(),
            validator: None,
        }
    }

    pub fn with_parameter(mut self, param: ToolParameter) -> Self {
        self.parameters.push(param);
        self
    }

    /// Gate the tool behind `confirm=true`.
    ///
    /// Adds the boolean `confirm` parameter on first use.
    pub fn with_classification(mut self, classification: OperationClassification) -> Self {
        if !self.classifications.contains(&classification) {
            self.classifications.push(classification);
        }
        if !self.parameters.iter().any(|p| p.name == CONFIRM_PARAM) {
            self.parameters.push(
                ToolParameter::new(
                    CONFIRM_PARAM,
                    "Must be true to acknowledge the consequences of this operation",
                    false,
                )
                .with_type("boolean"),
            );
        }
        self
    }

    /// Declare an optional filter argument (also registered as a parameter).
    pub fn with_filter(
        mut self,
        param: impl Into<String>,
        field: impl Into<String>,
        mode: MatchMode,
    ) -> Self {
        let param = param.into();
        let description = match mode {
            MatchMode::Exact => "Only return items whose value equals this (case-insensitive)",
            MatchMode::Contains => "Only return items whose value contains this (case-insensitive)",
        };
        self.parameters
            .push(ToolParameter::new(param.clone(), description, false));
        self.filters.push(FilterField {
            param,
            field: field.into(),
            mode,
        });
        self
    }

    pub fn with_validator(mut self, validator: CompositeValidator) -> Self {
        self.validator = Some(validator);
        self
    }

    pub fn is_gated(&self) -> bool {
        !self.classifications.is_empty()
    }

    pub fn is_list(&self) -> bool {
        !self.filters.is_empty()
    }

    /// Build the filter set selected by the call's filter arguments.
    pub fn filter_set(&self, call: &ToolCall) -> FilterSet<serde_json::Value> {
        self.filters.iter().fold(FilterSet::new(), |set, filter| {
            let query = call.get_string(&filter.param).unwrap_or("");
            set.with(FieldFilter::json_field(filter.field.clone(), query, filter.mode))
        })
    }
}

impl ToolParameter {
    pub fn new(name: impl Into<String>, description: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required,
            param_type: "string".to_string(),
        }
    }

    pub fn with_type(mut self, param_type: impl Into<String>) -> Self {
        self.param_type = param_type.into();
        self
    }
}

/// Registry of available tools and their aliases
#[derive(Debug, Clone, Default)]
pub struct ToolSpec {
    tools: HashMap<String, ToolDefinition>,
    /// Alias → canonical name mapping (e.g. "create_nodebalancer" → "create_load_balancer")
    aliases: HashMap<String, String>,
}

impl ToolSpec {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
            aliases: HashMap::new(),
        }
    }

    pub fn register(mut self, tool: ToolDefinition) -> Self {
        self.tools.insert(tool.name.clone(), tool);
        self
    }

    /// Register several tools at once (builder pattern)
    pub fn register_all(self, tools: impl IntoIterator<Item = ToolDefinition>) -> Self {
        tools.into_iter().fold(self, |spec, tool| spec.register(tool))
    }

    /// Register a single alias mapping (builder pattern)
    pub fn register_alias(mut self, alias: impl Into<String>, canonical: impl Into<String>) -> Self {
        self.aliases.insert(alias.into(), canonical.into());
        self
    }

    /// Register multiple aliases at once (builder pattern)
    pub fn register_aliases(mut self, mappings: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        for (alias, canonical) in mappings {
            self.aliases.insert(alias.into(), canonical.into());
        }
        self
    }

    /// Resolve an alias to its canonical name (aliases only, not canonical names)
    pub fn resolve_alias(&self, name: &str) -> Option<&str> {
        self.aliases.get(name).map(|s| s.as_str())
    }

    /// Resolve a name: returns canonical name if it's a registered tool,
    /// or resolves alias, or None if unknown
    pub fn resolve<'a>(&'a self, name: &'a str) -> Option<&'a str> {
        if self.tools.contains_key(name) {
            Some(name)
        } else {
            self.resolve_alias(name)
        }
    }

    /// Get tool definition by canonical name or alias
    pub fn get_resolved(&self, name: &str) -> Option<&ToolDefinition> {
        self.resolve(name).and_then(|canonical| self.tools.get(canonical))
    }

    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.get(name)
    }

    pub fn all(&self) -> impl Iterator<Item = &ToolDefinition> {
        self.tools.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tools.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn gated_tools(&self) -> impl Iterator<Item = &ToolDefinition> {
        self.tools.values().filter(|t| t.is_gated())
    }

    pub fn read_only_tools(&self) -> impl Iterator<Item = &ToolDefinition> {
        self.tools.values().filter(|t| !t.is_gated())
    }
}

/// A call to a tool with arguments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    /// Name of the tool to call
    pub tool_name: String,
    /// Arguments passed to the tool
    #[serde(default)]
    pub arguments: HashMap<String, serde_json::Value>,
}

impl ToolCall {
    pub fn new(tool_name: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            arguments: HashMap::new(),
        }
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }

    /// Get a string argument
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.arguments.get(key).and_then(|v| v.as_str())
    }

    /// Get an optional bool argument
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.arguments.get(key).and_then(|v| v.as_bool())
    }

    /// Read an integer argument, accepting JSON integers and numeric strings.
    ///
    /// `Ok(None)` when absent; `InvalidFormat` for anything else.
    pub fn parse_i64(&self, key: &str) -> Result<Option<i64>, ValidationError> {
        let invalid = |value: &serde_json::Value| {
            ValidationError::new(
                ErrorKind::InvalidFormat,
                format!("got {}: {} must be an integer", value, key),
            )
        };
        match self.arguments.get(key) {
            None | Some(serde_json::Value::Null) => Ok(None),
            Some(value @ serde_json::Value::Number(n)) => {
                n.as_i64().map(Some).ok_or_else(|| invalid(value))
            }
            Some(value @ serde_json::Value::String(s)) => {
                s.trim().parse().map(Some).map_err(|_| invalid(value))
            }
            Some(value) => Err(invalid(value)),
        }
    }

    /// The caller's acknowledgment. Absent or non-boolean means `false`.
    pub fn confirmation(&self) -> bool {
        self.get_bool(CONFIRM_PARAM).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::OperationClassification::*;

    #[test]
    fn test_tool_definition() {
        let tool = ToolDefinition::new("get_volume", "Get a volume").with_parameter(
            ToolParameter::new("volume_id", "Volume ID", true).with_type("integer"),
        );

        assert_eq!(tool.name, "get_volume");
        assert!(!tool.is_gated());
        assert_eq!(tool.parameters.len(), 1);
        assert_eq!(tool.parameters[0].name, "volume_id");
    }

    #[test]
    fn test_classification_adds_confirm_once() {
        let tool = ToolDefinition::new("create_access_key", "Create key")
            .with_classification(Billable)
            .with_classification(SecretExposure)
            .with_classification(Billable);

        assert!(tool.is_gated());
        assert_eq!(tool.classifications, vec![Billable, SecretExposure]);
        let confirms = tool
            .parameters
            .iter()
            .filter(|p| p.name == CONFIRM_PARAM)
            .count();
        assert_eq!(confirms, 1);
        assert!(!tool.parameters[0].required);
    }

    #[test]
    fn test_with_filter_registers_parameter() {
        let tool = ToolDefinition::new("list_vpcs", "List VPCs")
            .with_filter("label", "label", MatchMode::Contains);
        assert!(tool.is_list());
        assert_eq!(tool.parameters[0].name, "label");
        assert!(!tool.parameters[0].required);
    }

    #[test]
    fn test_filter_set_from_call() {
        let tool = ToolDefinition::new("list_domains", "List domains")
            .with_filter("domain", "domain", MatchMode::Contains)
            .with_filter("type", "type", MatchMode::Exact);

        let call = ToolCall::new("list_domains").with_arg("domain", "prod");
        let set = tool.filter_set(&call);
        assert_eq!(set.len(), 1);

        let none = tool.filter_set(&ToolCall::new("list_domains"));
        assert!(none.is_empty());
    }

    #[test]
    fn test_tool_spec() {
        let spec = ToolSpec::new()
            .register(ToolDefinition::new("list_volumes", "List volumes"))
            .register(ToolDefinition::new("delete_volume", "Delete volume").with_classification(Irreversible));

        assert!(spec.get("list_volumes").is_some());
        assert!(spec.get("delete_volume").is_some());
        assert!(spec.get("unknown").is_none());

        assert_eq!(spec.gated_tools().count(), 1);
        assert_eq!(spec.read_only_tools().count(), 1);
        assert_eq!(spec.len(), 2);
    }

    #[test]
    fn test_tool_spec_aliases() {
        let spec = ToolSpec::new()
            .register(ToolDefinition::new("create_load_balancer", "Create LB"))
            .register(ToolDefinition::new("list_instances", "List instances"))
            .register_aliases([
                ("create_nodebalancer", "create_load_balancer"),
                ("list_linodes", "list_instances"),
            ]);

        // resolve_alias only resolves aliases, not canonical names
        assert_eq!(spec.resolve_alias("create_nodebalancer"), Some("create_load_balancer"));
        assert_eq!(spec.resolve_alias("create_load_balancer"), None);

        // resolve returns canonical for both registered tools and aliases
        assert_eq!(spec.resolve("list_linodes"), Some("list_instances"));
        assert_eq!(spec.resolve("list_instances"), Some("list_instances"));
        assert_eq!(spec.resolve("unknown"), None);

        assert_eq!(
            spec.get_resolved("create_nodebalancer").unwrap().name,
            "create_load_balancer"
        );
        // get() is exact match only - aliases don't work
        assert!(spec.get("create_nodebalancer").is_none());
    }

    #[test]
    fn test_canonical_name_takes_priority_over_alias() {
        let spec = ToolSpec::new()
            .register(ToolDefinition::new("list_vpcs", "List VPCs"))
            .register(ToolDefinition::new("vpcs", "Other tool"))
            .register_alias("vpcs", "list_vpcs");

        assert_eq!(spec.resolve("vpcs"), Some("vpcs"));
        assert_eq!(spec.get_resolved("vpcs").unwrap().name, "vpcs");
    }

    #[test]
    fn test_tool_call() {
        let call = ToolCall::new("create_volume")
            .with_arg("label", "data-01")
            .with_arg("size", 20);

        assert_eq!(call.tool_name, "create_volume");
        assert_eq!(call.get_string("label"), Some("data-01"));
        assert_eq!(call.get_string("size"), None);
        assert_eq!(call.get_string("missing"), None);
    }

    #[test]
    fn test_confirmation_defaults_to_false() {
        assert!(!ToolCall::new("delete_volume").confirmation());
        assert!(!ToolCall::new("delete_volume").with_arg("confirm", "true").confirmation());
        assert!(!ToolCall::new("delete_volume").with_arg("confirm", 1).confirmation());
        assert!(!ToolCall::new("delete_volume").with_arg("confirm", false).confirmation());
        assert!(ToolCall::new("delete_volume").with_arg("confirm", true).confirmation());
    }

    #[test]
    fn test_parse_i64() {
        let call = ToolCall::new("resize_volume")
            .with_arg("size", 20)
            .with_arg("volume_id", "123")
            .with_arg("bad", "12GB")
            .with_arg("float", 1.5);

        assert_eq!(call.parse_i64("size").unwrap(), Some(20));
        assert_eq!(call.parse_i64("volume_id").unwrap(), Some(123));
        assert_eq!(call.parse_i64("missing").unwrap(), None);
        assert_eq!(
            call.parse_i64("bad").unwrap_err().kind(),
            ErrorKind::InvalidFormat
        );
        assert_eq!(
            call.parse_i64("float").unwrap_err().kind(),
            ErrorKind::InvalidFormat
        );
    }
}
