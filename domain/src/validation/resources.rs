//! General resource rules: labels, volume sizes, firewall policies, ids.

use super::error::{ErrorKind, ValidationError};
use super::matching::{describe_allowed, one_of_fold};

/// Volume size bounds in GB.
pub const VOLUME_SIZE_MIN_GB: i64 = 10;
pub const VOLUME_SIZE_MAX_GB: i64 = 10_240;

pub const FIREWALL_POLICIES: [&str; 2] = ["ACCEPT", "DROP"];

pub const RESOURCE_LABEL_MIN_LEN: usize = 3;
pub const RESOURCE_LABEL_MAX_LEN: usize = 64;

pub const REGION_MAX_LEN: usize = 32;

pub fn validate_volume_size(size_gb: i64) -> Result<(), ValidationError> {
    if size_gb < VOLUME_SIZE_MIN_GB {
        return Err(ValidationError::new(
            ErrorKind::TooSmall,
            format!(
                "got {}: size must be at least {} GB",
                size_gb, VOLUME_SIZE_MIN_GB
            ),
        ));
    }
    if size_gb > VOLUME_SIZE_MAX_GB {
        return Err(ValidationError::new(
            ErrorKind::TooLarge,
            format!(
                "got {}: size must be at most {} GB",
                size_gb, VOLUME_SIZE_MAX_GB
            ),
        ));
    }
    Ok(())
}

/// Validate a firewall inbound/outbound policy (case-insensitive).
pub fn validate_firewall_policy(policy: &str) -> Result<(), ValidationError> {
    if one_of_fold(policy, &FIREWALL_POLICIES).is_some() {
        return Ok(());
    }
    Err(ValidationError::new(
        ErrorKind::InvalidEnumValue,
        format!(
            "got '{}': policy must be {}",
            policy,
            describe_allowed(&FIREWALL_POLICIES)
        ),
    ))
}

/// Validate a label for instances, volumes, firewalls, load balancers and
/// VPCs: 3 to 64 characters of letters, digits, `-`, `_` and `.`, starting
/// with a letter or digit.
pub fn validate_resource_label(label: &str) -> Result<(), ValidationError> {
    if label.is_empty() {
        return Err(ValidationError::required("label"));
    }
    let len = label.chars().count();
    if len < RESOURCE_LABEL_MIN_LEN {
        return Err(ValidationError::new(
            ErrorKind::TooShort,
            format!(
                "got '{}': label must be at least {} characters",
                label, RESOURCE_LABEL_MIN_LEN
            ),
        ));
    }
    if len > RESOURCE_LABEL_MAX_LEN {
        return Err(ValidationError::new(
            ErrorKind::TooLong,
            format!(
                "label is {} characters long; it must be at most {} characters",
                len, RESOURCE_LABEL_MAX_LEN
            ),
        ));
    }
    if let Some(bad) = label
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
    {
        return Err(ValidationError::new(
            ErrorKind::InvalidCharacters,
            format!(
                "got '{}': label may only contain letters, digits, '-', '_' and '.' (found '{}')",
                label, bad
            ),
        ));
    }
    if !label.starts_with(|c: char| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::new(
            ErrorKind::InvalidBoundary,
            format!("got '{}': label must start with a letter or digit", label),
        ));
    }
    Ok(())
}

/// Validate a region or object storage cluster id such as `us-east` or
/// `us-east-1`. These end up as URL path segments, so only lowercase
/// letters, digits and `-` are accepted.
pub fn validate_region(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::required(field));
    }
    let len = value.chars().count();
    if len > REGION_MAX_LEN {
        return Err(ValidationError::new(
            ErrorKind::TooLong,
            format!(
                "{} is {} characters long; it must be at most {} characters",
                field, len, REGION_MAX_LEN
            ),
        ));
    }
    if let Some(bad) = value
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
    {
        return Err(ValidationError::new(
            ErrorKind::InvalidCharacters,
            format!(
                "got '{}': {} may only contain lowercase letters, digits and hyphens (found '{}')",
                value, field, bad
            ),
        ));
    }
    if value.starts_with('-') || value.ends_with('-') {
        return Err(ValidationError::new(
            ErrorKind::InvalidBoundary,
            format!(
                "got '{}': {} must start and end with a letter or digit",
                value, field
            ),
        ));
    }
    Ok(())
}

/// Validate a numeric resource identifier.
pub fn validate_resource_id(field: &str, id: i64) -> Result<(), ValidationError> {
    if id > 0 {
        return Ok(());
    }
    Err(ValidationError::new(
        ErrorKind::OutOfRange,
        format!("got {}: {} must be a positive integer", id, field),
    ))
}
