//! Composite validators: per-operation argument rules.
//!
//! A [`CompositeValidator`] is a fixed, ordered list of [`Rule`]s. Rules run
//! in declaration order and the first failure is returned; later rules may
//! rely on earlier ones having passed (the access key grant list is only
//! decoded once the key label is known to be valid).
//!
//! Validators only ever see calls that already passed the confirmation gate.
//!
//! | Module | Operations |
//! |--------|------------|
//! | [`compute`] | instances, SSH keys, volumes |
//! | [`dns`] | domains, domain records |
//! | [`network`] | firewalls, load balancers, VPCs |
//! | [`storage`] | buckets, access keys, presigned URLs |

pub mod compute;
pub mod dns;
pub mod network;
pub mod storage;

use crate::tool::entities::ToolCall;
use crate::validation::{ErrorKind, ValidationError};
use crate::validation::resources::{validate_region, validate_resource_id};

/// One argument check of an operation.
pub type Rule = fn(&ToolCall) -> Result<(), ValidationError>;

/// Ordered rule list for one operation.
#[derive(Debug, Clone, Copy)]
pub struct CompositeValidator {
    pub operation: &'static str,
    pub rules: &'static [Rule],
}

impl CompositeValidator {
    /// Run every rule in order, stopping at the first failure.
    pub fn validate(&self, call: &ToolCall) -> Result<(), ValidationError> {
        self.rules.iter().try_for_each(|rule| rule(call))
    }
}

/// String argument, with absent and non-string values read as empty so the
/// primitive rule reports them as missing.
pub(crate) fn str_arg<'a>(call: &'a ToolCall, key: &str) -> &'a str {
    call.get_string(key).unwrap_or("")
}

pub(crate) fn require_non_empty(call: &ToolCall, key: &str) -> Result<(), ValidationError> {
    if str_arg(call, key).trim().is_empty() {
        return Err(ValidationError::required(key));
    }
    Ok(())
}

pub(crate) fn require_int(call: &ToolCall, key: &str) -> Result<i64, ValidationError> {
    call.parse_i64(key)?
        .ok_or_else(|| ValidationError::required(key))
}

pub(crate) fn require_id(call: &ToolCall, key: &str) -> Result<(), ValidationError> {
    validate_resource_id(key, require_int(call, key)?)
}

pub(crate) fn require_region(call: &ToolCall, key: &str) -> Result<(), ValidationError> {
    validate_region(key, str_arg(call, key))
}

/// Run `check` only when the argument is present. A present value that is
/// not a string is rejected rather than skipped.
pub(crate) fn if_present(
    call: &ToolCall,
    key: &str,
    check: fn(&str) -> Result<(), ValidationError>,
) -> Result<(), ValidationError> {
    match call.arguments.get(key) {
        None | Some(serde_json::Value::Null) => Ok(()),
        Some(serde_json::Value::String(value)) => check(value),
        Some(other) => Err(ValidationError::new(
            ErrorKind::InvalidFormat,
            format!("got {}: {} must be a string", other, key),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ErrorKind;

    fn always_ok(_: &ToolCall) -> Result<(), ValidationError> {
        Ok(())
    }

    fn fail_required(_: &ToolCall) -> Result<(), ValidationError> {
        Err(ValidationError::required("first"))
    }

    fn fail_format(_: &ToolCall) -> Result<(), ValidationError> {
        Err(ValidationError::new(ErrorKind::InvalidFormat, "second"))
    }

    #[test]
    fn test_first_failure_wins() {
        const VALIDATOR: CompositeValidator = CompositeValidator {
            operation: "test",
            rules: &[always_ok, fail_required, fail_format],
        };
        let err = VALIDATOR.validate(&ToolCall::new("test")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Required);
    }

    #[test]
    fn test_all_pass() {
        const VALIDATOR: CompositeValidator = CompositeValidator {
            operation: "test",
            rules: &[always_ok, always_ok],
        };
        assert!(VALIDATOR.validate(&ToolCall::new("test")).is_ok());
    }

    #[test]
    fn test_require_id() {
        let call = ToolCall::new("x").with_arg("volume_id", 0).with_arg("ok_id", "12");
        assert_eq!(
            require_id(&call, "volume_id").unwrap_err().kind(),
            ErrorKind::OutOfRange
        );
        assert!(require_id(&call, "ok_id").is_ok());
        assert_eq!(
            require_id(&call, "missing_id").unwrap_err().kind(),
            ErrorKind::Required
        );
    }

    #[test]
    fn test_if_present_skips_absent() {
        fn reject(_: &str) -> Result<(), ValidationError> {
            Err(ValidationError::new(ErrorKind::InvalidFormat, "rejected"))
        }
        let call = ToolCall::new("x").with_arg("acl", "private");
        assert!(if_present(&call, "missing", reject).is_ok());
        assert!(if_present(&call, "acl", reject).is_err());
    }

    #[test]
    fn test_if_present_rejects_non_strings() {
        fn accept(_: &str) -> Result<(), ValidationError> {
            Ok(())
        }
        let call = ToolCall::new("x")
            .with_arg("label", 42)
            .with_arg("acl", serde_json::Value::Null);
        let err = if_present(&call, "label", accept).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);
        assert_eq!(err.message(), "got 42: label must be a string");
        assert!(if_present(&call, "acl", accept).is_ok());
    }
}
