//! Credential rules: SSH public keys, root passwords and access keys.

use super::error::{ErrorKind, ValidationError};
use super::matching::describe_allowed;
use crate::core::string::truncate;

/// Recognized SSH public key types. A key must start with one of these
/// followed by a space.
pub const SSH_KEY_TYPES: [&str; 6] = [
    "ssh-rsa",
    "ssh-ed25519",
    "ecdsa-sha2-nistp256",
    "ecdsa-sha2-nistp384",
    "ecdsa-sha2-nistp521",
    "ssh-dss",
];

pub const SSH_KEY_MIN_LEN: usize = 80;
pub const SSH_KEY_MAX_LEN: usize = 16_000;

pub const PASSWORD_MIN_LEN: usize = 12;
pub const PASSWORD_MAX_LEN: usize = 128;

pub const ACCESS_KEY_LABEL_MAX_LEN: usize = 50;

pub const ACCESS_KEY_PERMISSIONS: [&str; 2] = ["read_only", "read_write"];

/// Validate an SSH public key in OpenSSH `authorized_keys` format.
///
/// Surrounding whitespace is ignored.
pub fn validate_ssh_public_key(key: &str) -> Result<(), ValidationError> {
    let key = key.trim();
    if key.is_empty() {
        return Err(ValidationError::required("ssh_key"));
    }

    let recognized = SSH_KEY_TYPES.iter().any(|key_type| {
        key.strip_prefix(key_type)
            .is_some_and(|rest| rest.starts_with(' '))
    });
    if !recognized {
        return Err(ValidationError::new(
            ErrorKind::InvalidFormat,
            format!(
                "got '{}': ssh_key must start with one of {} followed by a space",
                truncate(key, 40),
                describe_allowed(&SSH_KEY_TYPES)
            ),
        ));
    }

    let len = key.chars().count();
    if !(SSH_KEY_MIN_LEN..=SSH_KEY_MAX_LEN).contains(&len) {
        return Err(ValidationError::new(
            ErrorKind::InvalidLength,
            format!(
                "ssh_key is {} characters long; it must be between {} and {} characters",
                len, SSH_KEY_MIN_LEN, SSH_KEY_MAX_LEN
            ),
        ));
    }

    Ok(())
}

/// Validate a root password. An empty password means "not provided" and
/// passes.
///
/// The password itself never appears in the error message.
pub fn validate_root_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Ok(());
    }

    let len = password.chars().count();
    if len < PASSWORD_MIN_LEN {
        return Err(ValidationError::new(
            ErrorKind::TooShort,
            format!(
                "root_pass is {} characters long; it must be at least {} characters",
                len, PASSWORD_MIN_LEN
            ),
        ));
    }
    if len > PASSWORD_MAX_LEN {
        return Err(ValidationError::new(
            ErrorKind::TooLong,
            format!(
                "root_pass is {} characters long; it must be at most {} characters",
                len, PASSWORD_MAX_LEN
            ),
        ));
    }

    let mut missing = Vec::new();
    if !password.chars().any(char::is_uppercase) {
        missing.push("an uppercase letter");
    }
    if !password.chars().any(char::is_lowercase) {
        missing.push("a lowercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        missing.push("a digit");
    }
    if !missing.is_empty() {
        return Err(ValidationError::new(
            ErrorKind::MissingCharacterClass,
            format!(
                "root_pass must contain at least one uppercase letter, one lowercase letter and one digit (missing {})",
                missing.join(", ")
            ),
        ));
    }

    Ok(())
}

/// Validate an object storage access key label.
pub fn validate_access_key_label(label: &str) -> Result<(), ValidationError> {
    if label.is_empty() {
        return Err(ValidationError::required("label"));
    }
    let len = label.chars().count();
    if len > ACCESS_KEY_LABEL_MAX_LEN {
        return Err(ValidationError::new(
            ErrorKind::TooLong,
            format!(
                "label is {} characters long; access key labels must be at most {} characters",
                len, ACCESS_KEY_LABEL_MAX_LEN
            ),
        ));
    }
    Ok(())
}

/// Validate an access key bucket permission. Matching is exact.
pub fn validate_access_key_permission(permission: &str) -> Result<(), ValidationError> {
    if ACCESS_KEY_PERMISSIONS.contains(&permission) {
        return Ok(());
    }
    Err(ValidationError::new(
        ErrorKind::InvalidEnumValue,
        format!(
            "got '{}': permissions must be {}",
            permission,
            describe_allowed(&ACCESS_KEY_PERMISSIONS)
        ),
    ))
}
