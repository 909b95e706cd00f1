//! Compute tools: instances and SSH keys

use super::{id_param, label_filter, region_filter};
use cloudops_domain::filter::MatchMode;
use cloudops_domain::gate::OperationClassification::*;
use cloudops_domain::operation::compute;
use cloudops_domain::tool::entities::{ToolDefinition, ToolParameter};

/// Tool name constants
pub const LIST_INSTANCES: &str = "list_instances";
pub const GET_INSTANCE: &str = "get_instance";
pub const CREATE_INSTANCE: &str = "create_instance";
pub const DELETE_INSTANCE: &str = "delete_instance";
pub const REBOOT_INSTANCE: &str = "reboot_instance";
pub const SHUTDOWN_INSTANCE: &str = "shutdown_instance";
pub const RESIZE_INSTANCE: &str = "resize_instance";
pub const LIST_SSH_KEYS: &str = "list_ssh_keys";
pub const CREATE_SSH_KEY: &str = "create_ssh_key";
pub const DELETE_SSH_KEY: &str = "delete_ssh_key";

pub fn list_instances_definition() -> ToolDefinition {
    let tool = ToolDefinition::new(LIST_INSTANCES, "List compute instances on the account");
    region_filter(label_filter(tool)).with_filter("status", "status", MatchMode::Exact)
}

pub fn get_instance_definition() -> ToolDefinition {
    ToolDefinition::new(GET_INSTANCE, "Get one compute instance by ID")
        .with_parameter(id_param("instance_id", "ID of the instance"))
        .with_validator(compute::GET_INSTANCE)
}

pub fn create_instance_definition() -> ToolDefinition {
    ToolDefinition::new(
        CREATE_INSTANCE,
        "Create a compute instance. The instance is billed from the moment it exists.",
    )
    .with_parameter(ToolParameter::new("region", "Region to create the instance in (e.g. us-east)", true))
    .with_parameter(ToolParameter::new("type", "Instance plan (e.g. g6-nanode-1)", true))
    .with_parameter(ToolParameter::new("label", "Display label, 3-64 characters", false))
    .with_parameter(ToolParameter::new("image", "Image to deploy (e.g. linode/debian12)", false))
    .with_parameter(ToolParameter::new(
        "root_pass",
        "Root password: 12-128 characters with at least one uppercase letter, one lowercase letter and one digit",
        false,
    ))
    .with_parameter(
        ToolParameter::new("authorized_keys", "SSH public keys installed for root", false)
            .with_type("array"),
    )
    .with_classification(Billable)
    .with_validator(compute::CREATE_INSTANCE)
}

pub fn delete_instance_definition() -> ToolDefinition {
    ToolDefinition::new(
        DELETE_INSTANCE,
        "Delete a compute instance and all of its disks",
    )
    .with_parameter(id_param("instance_id", "ID of the instance to delete"))
    .with_classification(Irreversible)
    .with_validator(compute::DELETE_INSTANCE)
}

pub fn reboot_instance_definition() -> ToolDefinition {
    ToolDefinition::new(REBOOT_INSTANCE, "Reboot a running compute instance")
        .with_parameter(id_param("instance_id", "ID of the instance to reboot"))
        .with_classification(ConfigurationChange)
        .with_validator(compute::REBOOT_INSTANCE)
}

pub fn shutdown_instance_definition() -> ToolDefinition {
    ToolDefinition::new(SHUTDOWN_INSTANCE, "Power off a compute instance")
        .with_parameter(id_param("instance_id", "ID of the instance to power off"))
        .with_classification(ConfigurationChange)
        .with_validator(compute::SHUTDOWN_INSTANCE)
}

pub fn resize_instance_definition() -> ToolDefinition {
    ToolDefinition::new(
        RESIZE_INSTANCE,
        "Move a compute instance to another plan. The instance is rebooted.",
    )
    .with_parameter(id_param("instance_id", "ID of the instance to resize"))
    .with_parameter(ToolParameter::new("type", "Target plan", true))
    .with_classification(Billable)
    .with_classification(ConfigurationChange)
    .with_validator(compute::RESIZE_INSTANCE)
}

pub fn list_ssh_keys_definition() -> ToolDefinition {
    label_filter(ToolDefinition::new(LIST_SSH_KEYS, "List SSH keys on the profile"))
}

pub fn create_ssh_key_definition() -> ToolDefinition {
    ToolDefinition::new(CREATE_SSH_KEY, "Add an SSH public key to the profile")
        .with_parameter(ToolParameter::new("label", "Name for the key", true))
        .with_parameter(ToolParameter::new(
            "ssh_key",
            "Public key in OpenSSH format (e.g. ssh-ed25519 AAAA... user@host)",
            true,
        ))
        .with_classification(ConfigurationChange)
        .with_validator(compute::CREATE_SSH_KEY)
}

pub fn delete_ssh_key_definition() -> ToolDefinition {
    ToolDefinition::new(DELETE_SSH_KEY, "Remove an SSH key from the profile")
        .with_parameter(id_param("ssh_key_id", "ID of the SSH key"))
        .with_classification(Irreversible)
        .with_validator(compute::DELETE_SSH_KEY)
}

pub fn definitions() -> Vec<ToolDefinition> {
    vec![
        list_instances_definition(),
        get_instance_definition(),
        create_instance_definition(),
        delete_instance_definition(),
        reboot_instance_definition(),
        shutdown_instance_definition(),
        resize_instance_definition(),
        list_ssh_keys_definition(),
        create_ssh_key_definition(),
        delete_ssh_key_definition(),
    ]
}
