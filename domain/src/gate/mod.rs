//! Confirmation gate for state-changing operations.
//!
//! Every mutating tool carries one or more [`OperationClassification`]s.
//! Before anything else happens to such a call (argument validation,
//! credential lookup, network I/O), [`require_confirmation`] checks the
//! caller's explicit `confirm` flag. A missing or `false` flag stops the
//! call with a [`GateError`] explaining what the operation would do.
//!
//! ```text
//! arguments ─▶ require_confirmation ─▶ composite validator ─▶ dispatch
//!                    │ confirm=false
//!                    ▼
//!               GateError (nothing else runs)
//! ```
//!
//! Callers should know that the gate runs first: a request that is both
//! unconfirmed and malformed reports only the confirmation error, and the
//! structural problem surfaces on resubmission with `confirm=true`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validation::{ErrorKind, ValidationError};

/// Name of the acknowledgment argument on gated tools.
pub const CONFIRM_PARAM: &str = "confirm";

/// Why an operation needs explicit confirmation.
///
/// Declaration order is the order warnings appear in gate messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationClassification {
    /// Deletes a resource or its data for good.
    Irreversible,
    /// Creates or grows a resource that is charged for.
    Billable,
    /// Returns a credential that is visible only once.
    SecretExposure,
    /// Changes a live resource without destroying it.
    ConfigurationChange,
}

impl OperationClassification {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationClassification::Irreversible => "irreversible",
            OperationClassification::Billable => "billable",
            OperationClassification::SecretExposure => "secret_exposure",
            OperationClassification::ConfigurationChange => "configuration_change",
        }
    }

    /// Warning sentence shown when confirmation is missing.
    pub fn warning(&self) -> &'static str {
        match self {
            OperationClassification::Irreversible => {
                "This operation is irreversible: the resource and its data are permanently destroyed and cannot be recovered."
            }
            OperationClassification::Billable => "This operation creates a billable resource.",
            OperationClassification::SecretExposure => {
                "The response contains a secret (such as the secret_key of an access key) that is shown exactly once and cannot be retrieved again; store it securely."
            }
            OperationClassification::ConfigurationChange => {
                "This operation changes the configuration of a live resource."
            }
        }
    }
}

impl std::fmt::Display for OperationClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The caller did not acknowledge a gated operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct GateError {
    classifications: Vec<OperationClassification>,
    message: String,
}

impl GateError {
    fn new(classifications: &[OperationClassification]) -> Self {
        let mut classes = classifications.to_vec();
        classes.sort();
        classes.dedup();

        let mut message = classes
            .iter()
            .map(|c| c.warning())
            .collect::<Vec<_>>()
            .join(" ");
        message.push_str(" Set confirm=true to proceed.");

        Self {
            classifications: classes,
            message,
        }
    }

    /// The distinct classifications that triggered the gate, in warning order.
    pub fn classifications(&self) -> &[OperationClassification] {
        &self.classifications
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<GateError> for ValidationError {
    fn from(err: GateError) -> Self {
        ValidationError::new(ErrorKind::GateNotConfirmed, err.message)
    }
}

/// Require explicit confirmation for a classified operation.
///
/// Operations without classifications are not gated and always pass.
pub fn require_confirmation(
    confirm: bool,
    classifications: &[OperationClassification],
) -> Result<(), GateError> {
    if confirm || classifications.is_empty() {
        return Ok(());
    }
    Err(GateError::new(classifications))
}

#[cfg(test)]
mod tests {
    use super::*;
    use OperationClassification::*;

    #[test]
    fn test_confirmed_passes() {
        assert!(require_confirmation(true, &[Irreversible, Billable]).is_ok());
    }

    #[test]
    fn test_ungated_passes_without_confirm() {
        assert!(require_confirmation(false, &[]).is_ok());
    }

    #[test]
    fn test_billable_message() {
        let err = require_confirmation(false, &[Billable]).unwrap_err();
        assert_eq!(
            err.message(),
            "This operation creates a billable resource. Set confirm=true to proceed."
        );
    }

    #[test]
    fn test_irreversible_message() {
        let err = require_confirmation(false, &[Irreversible]).unwrap_err();
        assert!(err.message().contains("permanently"));
        assert!(err.message().ends_with("Set confirm=true to proceed."));
    }

    #[test]
    fn test_union_of_warnings() {
        let err = require_confirmation(false, &[SecretExposure, Billable]).unwrap_err();
        // warnings follow declaration order, not argument order
        assert_eq!(err.classifications(), &[Billable, SecretExposure]);
        let billable = err.message().find("billable").unwrap();
        let secret = err.message().find("secret_key").unwrap();
        assert!(billable < secret);
        assert_eq!(err.message().matches("confirm=true").count(), 1);
    }

    #[test]
    fn test_duplicates_collapse() {
        let err = require_confirmation(false, &[Billable, Billable]).unwrap_err();
        assert_eq!(err.classifications(), &[Billable]);
        assert_eq!(err.message().matches("billable").count(), 1);
    }

    #[test]
    fn test_converts_to_validation_error() {
        let err: ValidationError = require_confirmation(false, &[ConfigurationChange])
            .unwrap_err()
            .into();
        assert_eq!(err.kind(), ErrorKind::GateNotConfirmed);
        assert!(err.message().contains("confirm=true"));
    }
}
