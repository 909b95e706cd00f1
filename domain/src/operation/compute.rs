//! Instance, SSH key and volume operations.

use super::{
    CompositeValidator, if_present, require_id, require_int, require_non_empty, require_region,
    str_arg,
};
use crate::tool::entities::ToolCall;
use crate::validation::credentials::{validate_root_password, validate_ssh_public_key};
use crate::validation::resources::{validate_resource_label, validate_volume_size};
use crate::validation::{ErrorKind, ValidationError};

/// label?, region, type, root_pass?, authorized_keys?
pub const CREATE_INSTANCE: CompositeValidator = CompositeValidator {
    operation: "create_instance",
    rules: &[
        |call| if_present(call, "label", validate_resource_label),
        |call| require_region(call, "region"),
        |call| require_non_empty(call, "type"),
        |call| validate_root_password(str_arg(call, "root_pass")),
        authorized_keys,
    ],
};

pub const GET_INSTANCE: CompositeValidator = CompositeValidator {
    operation: "get_instance",
    rules: &[instance_id],
};

pub const DELETE_INSTANCE: CompositeValidator = CompositeValidator {
    operation: "delete_instance",
    rules: &[instance_id],
};

pub const REBOOT_INSTANCE: CompositeValidator = CompositeValidator {
    operation: "reboot_instance",
    rules: &[instance_id],
};

pub const SHUTDOWN_INSTANCE: CompositeValidator = CompositeValidator {
    operation: "shutdown_instance",
    rules: &[instance_id],
};

/// instance_id, type
pub const RESIZE_INSTANCE: CompositeValidator = CompositeValidator {
    operation: "resize_instance",
    rules: &[instance_id, |call| require_non_empty(call, "type")],
};

/// label, ssh_key
pub const CREATE_SSH_KEY: CompositeValidator = CompositeValidator {
    operation: "create_ssh_key",
    rules: &[
        |call| require_non_empty(call, "label"),
        |call| validate_ssh_public_key(str_arg(call, "ssh_key")),
    ],
};

pub const DELETE_SSH_KEY: CompositeValidator = CompositeValidator {
    operation: "delete_ssh_key",
    rules: &[|call| require_id(call, "ssh_key_id")],
};

/// label, size
pub const CREATE_VOLUME: CompositeValidator = CompositeValidator {
    operation: "create_volume",
    rules: &[|call| validate_resource_label(str_arg(call, "label")), volume_size],
};

/// volume_id, size
pub const RESIZE_VOLUME: CompositeValidator = CompositeValidator {
    operation: "resize_volume",
    rules: &[volume_id, volume_size],
};

/// volume_id, instance_id
pub const ATTACH_VOLUME: CompositeValidator = CompositeValidator {
    operation: "attach_volume",
    rules: &[volume_id, instance_id],
};

pub const DETACH_VOLUME: CompositeValidator = CompositeValidator {
    operation: "detach_volume",
    rules: &[volume_id],
};

pub const DELETE_VOLUME: CompositeValidator = CompositeValidator {
    operation: "delete_volume",
    rules: &[volume_id],
};

fn instance_id(call: &ToolCall) -> Result<(), ValidationError> {
    require_id(call, "instance_id")
}

fn volume_id(call: &ToolCall) -> Result<(), ValidationError> {
    require_id(call, "volume_id")
}

fn volume_size(call: &ToolCall) -> Result<(), ValidationError> {
    validate_volume_size(require_int(call, "size")?)
}

/// Each authorized key is checked on its own; failures carry the index.
fn authorized_keys(call: &ToolCall) -> Result<(), ValidationError> {
    let keys = match call.arguments.get("authorized_keys") {
        None | Some(serde_json::Value::Null) => return Ok(()),
        Some(serde_json::Value::Array(keys)) => keys,
        Some(other) => {
            return Err(ValidationError::new(
                ErrorKind::InvalidFormat,
                format!("got {}: authorized_keys must be an array of strings", other),
            ));
        }
    };
    keys.iter().enumerate().try_for_each(|(index, key)| {
        validate_ssh_public_key(key.as_str().unwrap_or("")).map_err(|e| e.in_entry(index))
    })
}
