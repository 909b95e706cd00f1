//! Tool domain traits
//!
//! Contains pure domain logic traits for tool validation.
//! The async `CloudGateway` port is defined in the application layer.

use super::entities::{ToolCall, ToolDefinition};
use crate::validation::{ErrorKind, ValidationError};

/// Validator for tool calls
///
/// This is a pure domain trait that validates tool calls
/// against their definitions without any I/O operations.
pub trait ToolValidator {
    /// Validate a tool call against its definition
    fn validate(&self, call: &ToolCall, definition: &ToolDefinition) -> Result<(), ValidationError>;
}

/// Structural check: required parameters present, no unknown parameters.
///
/// List tools tolerate unknown arguments since callers routinely pass
/// filter names a given list does not support.
#[derive(Debug, Clone, Default)]
pub struct DefaultToolValidator;

impl ToolValidator for DefaultToolValidator {
    fn validate(&self, call: &ToolCall, definition: &ToolDefinition) -> Result<(), ValidationError> {
        if let Some(param) = definition
            .parameters
            .iter()
            .find(|p| p.required && !call.arguments.contains_key(&p.name))
        {
            return Err(ValidationError::required(&param.name));
        }

        if definition.is_list() {
            return Ok(());
        }

        let mut unknown: Vec<&str> = call
            .arguments
            .keys()
            .map(String::as_str)
            .filter(|arg| !definition.parameters.iter().any(|p| p.name == *arg))
            .collect();
        unknown.sort_unstable();

        match unknown.first() {
            Some(arg) => Err(ValidationError::new(
                ErrorKind::InvalidFormat,
                format!("unknown parameter '{}' for tool '{}'", arg, definition.name),
            )),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::MatchMode;
    use crate::gate::OperationClassification;
    use crate::tool::entities::ToolParameter;

    #[test]
    fn test_validator_missing_required() {
        let validator = DefaultToolValidator;
        let definition = ToolDefinition::new("test", "test tool")
            .with_parameter(ToolParameter::new("required_param", "A required param", true));

        let call = ToolCall::new("test");
        let err = validator.validate(&call, &definition).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Required);
        assert_eq!(err.message(), "required_param is required");
    }

    #[test]
    fn test_validator_unknown_param() {
        let validator = DefaultToolValidator;
        let definition = ToolDefinition::new("test", "test tool")
            .with_parameter(ToolParameter::new("known_param", "A known param", false));

        let call = ToolCall::new("test").with_arg("unknown_param", "value");
        let err = validator.validate(&call, &definition).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);
        assert!(err.message().contains("unknown parameter 'unknown_param'"));
    }

    #[test]
    fn test_validator_list_tool_ignores_unknown() {
        let definition = ToolDefinition::new("list_volumes", "List volumes").with_filter(
            "label",
            "label",
            MatchMode::Contains,
        );
        let call = ToolCall::new("list_volumes").with_arg("tags", "prod");
        assert!(DefaultToolValidator.validate(&call, &definition).is_ok());
    }

    #[test]
    fn test_validator_accepts_confirm_on_gated_tool() {
        let definition = ToolDefinition::new("delete_volume", "Delete a volume")
            .with_parameter(ToolParameter::new("volume_id", "Volume ID", true).with_type("integer"))
            .with_classification(OperationClassification::Irreversible);
        let call = ToolCall::new("delete_volume")
            .with_arg("volume_id", 7)
            .with_arg("confirm", true);
        assert!(DefaultToolValidator.validate(&call, &definition).is_ok());
    }

    #[test]
    fn test_validator_valid_call() {
        let validator = DefaultToolValidator;
        let definition = ToolDefinition::new("test", "test tool")
            .with_parameter(ToolParameter::new("param1", "First param", true))
            .with_parameter(ToolParameter::new("param2", "Second param", false));

        let call = ToolCall::new("test")
            .with_arg("param1", "value1")
            .with_arg("param2", "value2");

        assert!(validator.validate(&call, &definition).is_ok());
    }
}
