//! Validation error kinds
//!
//! Every rule in this crate fails with a [`ValidationError`]: a closed
//! [`ErrorKind`] tag plus a self-contained message. Callers branch on the
//! kind; the message is for the agent or human on the other end.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classification of a validation failure.
///
/// Compare errors by kind, never by message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Required,
    InvalidFormat,
    InvalidLength,
    TooShort,
    TooLong,
    TooSmall,
    TooLarge,
    InvalidCharacters,
    InvalidBoundary,
    InvalidEnumValue,
    OutOfRange,
    InvalidAddress,
    PrivateAddressRejected,
    MissingCharacterClass,
    /// The operation is gated and `confirm` was not set to `true`.
    GateNotConfirmed,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Required => "required",
            ErrorKind::InvalidFormat => "invalid_format",
            ErrorKind::InvalidLength => "invalid_length",
            ErrorKind::TooShort => "too_short",
            ErrorKind::TooLong => "too_long",
            ErrorKind::TooSmall => "too_small",
            ErrorKind::TooLarge => "too_large",
            ErrorKind::InvalidCharacters => "invalid_characters",
            ErrorKind::InvalidBoundary => "invalid_boundary",
            ErrorKind::InvalidEnumValue => "invalid_enum_value",
            ErrorKind::OutOfRange => "out_of_range",
            ErrorKind::InvalidAddress => "invalid_address",
            ErrorKind::PrivateAddressRejected => "private_address_rejected",
            ErrorKind::MissingCharacterClass => "missing_character_class",
            ErrorKind::GateNotConfirmed => "gate_not_confirmed",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A failed validation rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    kind: ErrorKind,
    message: String,
}

impl ValidationError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// `"{field} is required"`
    pub fn required(field: &str) -> Self {
        Self::new(ErrorKind::Required, format!("{} is required", field))
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }

    /// Fold a zero-based list position into the message, keeping the kind.
    pub fn in_entry(self, index: usize) -> Self {
        Self {
            kind: self.kind,
            message: format!("entry {}: {}", index, self.message),
        }
    }
}
