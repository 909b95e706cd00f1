//! Object storage rules: bucket labels, ACLs and presigned URLs.
//!
//! Bucket labels become part of a DNS hostname on the provider side, so they
//! follow the DNS-compatible bucket naming convention: 3 to 63 characters of
//! lowercase letters, digits and hyphens, starting and ending alphanumeric.

use super::error::{ErrorKind, ValidationError};
use super::matching::{describe_allowed, one_of_fold};

pub const BUCKET_LABEL_MIN_LEN: usize = 3;
pub const BUCKET_LABEL_MAX_LEN: usize = 63;

pub const BUCKET_ACLS: [&str; 4] = [
    "private",
    "public-read",
    "authenticated-read",
    "public-read-write",
];

pub const PRESIGNED_METHODS: [&str; 2] = ["GET", "PUT"];

/// Presigned URL lifetime bounds in seconds (up to 7 days).
pub const PRESIGNED_EXPIRY_MIN: i64 = 1;
pub const PRESIGNED_EXPIRY_MAX: i64 = 604_800;

pub fn validate_bucket_label(label: &str) -> Result<(), ValidationError> {
    if label.is_empty() {
        return Err(ValidationError::required("bucket label"));
    }

    let len = label.chars().count();
    if len < BUCKET_LABEL_MIN_LEN {
        return Err(ValidationError::new(
            ErrorKind::TooShort,
            format!(
                "got '{}': bucket label must be at least {} characters",
                label, BUCKET_LABEL_MIN_LEN
            ),
        ));
    }
    if len > BUCKET_LABEL_MAX_LEN {
        return Err(ValidationError::new(
            ErrorKind::TooLong,
            format!(
                "bucket label is {} characters long; it must be at most {} characters",
                len, BUCKET_LABEL_MAX_LEN
            ),
        ));
    }

    if let Some(bad) = label
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
    {
        return Err(ValidationError::new(
            ErrorKind::InvalidCharacters,
            format!(
                "got '{}': bucket label may only contain lowercase letters, digits and hyphens (found '{}')",
                label, bad
            ),
        ));
    }

    if label.starts_with('-') || label.ends_with('-') {
        return Err(ValidationError::new(
            ErrorKind::InvalidBoundary,
            format!(
                "got '{}': bucket label must start and end with a letter or digit",
                label
            ),
        ));
    }

    Ok(())
}

/// Validate a bucket ACL. Matching is exact.
pub fn validate_bucket_acl(acl: &str) -> Result<(), ValidationError> {
    if BUCKET_ACLS.contains(&acl) {
        return Ok(());
    }
    Err(ValidationError::new(
        ErrorKind::InvalidEnumValue,
        format!(
            "got '{}': acl must be {}",
            acl,
            describe_allowed(&BUCKET_ACLS)
        ),
    ))
}

/// Validate a presigned URL HTTP method (case-insensitive).
pub fn validate_presigned_method(method: &str) -> Result<(), ValidationError> {
    if one_of_fold(method, &PRESIGNED_METHODS).is_some() {
        return Ok(());
    }
    Err(ValidationError::new(
        ErrorKind::InvalidEnumValue,
        format!(
            "got '{}': method must be {}",
            method,
            describe_allowed(&PRESIGNED_METHODS)
        ),
    ))
}

pub fn validate_presigned_expiry(seconds: i64) -> Result<(), ValidationError> {
    if (PRESIGNED_EXPIRY_MIN..=PRESIGNED_EXPIRY_MAX).contains(&seconds) {
        return Ok(());
    }
    Err(ValidationError::new(
        ErrorKind::OutOfRange,
        format!(
            "got {}: expires_in must be between {} and {} seconds (7 days)",
            seconds, PRESIGNED_EXPIRY_MIN, PRESIGNED_EXPIRY_MAX
        ),
    ))
}
