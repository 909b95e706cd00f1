//! Block storage tools: volumes

use super::{id_param, label_filter, region_filter};
use cloudops_domain::gate::OperationClassification::*;
use cloudops_domain::operation::compute;
use cloudops_domain::tool::entities::{ToolDefinition, ToolParameter};

/// Tool name constants
pub const LIST_VOLUMES: &str = "list_volumes";
pub const CREATE_VOLUME: &str = "create_volume";
pub const RESIZE_VOLUME: &str = "resize_volume";
pub const ATTACH_VOLUME: &str = "attach_volume";
pub const DETACH_VOLUME: &str = "detach_volume";
pub const DELETE_VOLUME: &str = "delete_volume";

fn size_param(description: &str) -> ToolParameter {
    ToolParameter::new("size", description, true).with_type("integer")
}

pub fn list_volumes_definition() -> ToolDefinition {
    region_filter(label_filter(ToolDefinition::new(
        LIST_VOLUMES,
        "List block storage volumes",
    )))
}

pub fn create_volume_definition() -> ToolDefinition {
    ToolDefinition::new(CREATE_VOLUME, "Create a block storage volume")
        .with_parameter(ToolParameter::new("label", "Volume label, 3-64 characters", true))
        .with_parameter(size_param("Size in GB (10-10240)"))
        .with_parameter(ToolParameter::new("region", "Region for an unattached volume", false))
        .with_parameter(
            ToolParameter::new("linode_id", "Instance to attach the new volume to", false)
                .with_type("integer"),
        )
        .with_classification(Billable)
        .with_validator(compute::CREATE_VOLUME)
}

pub fn resize_volume_definition() -> ToolDefinition {
    ToolDefinition::new(
        RESIZE_VOLUME,
        "Grow a volume. Volumes cannot shrink.",
    )
    .with_parameter(id_param("volume_id", "ID of the volume"))
    .with_parameter(size_param("New size in GB (10-10240)"))
    .with_classification(Billable)
    .with_validator(compute::RESIZE_VOLUME)
}

pub fn attach_volume_definition() -> ToolDefinition {
    ToolDefinition::new(ATTACH_VOLUME, "Attach a volume to a compute instance")
        .with_parameter(id_param("volume_id", "ID of the volume"))
        .with_parameter(id_param("instance_id", "ID of the instance"))
        .with_classification(ConfigurationChange)
        .with_validator(compute::ATTACH_VOLUME)
}

pub fn detach_volume_definition() -> ToolDefinition {
    ToolDefinition::new(DETACH_VOLUME, "Detach a volume from its instance")
        .with_parameter(id_param("volume_id", "ID of the volume"))
        .with_classification(ConfigurationChange)
        .with_validator(compute::DETACH_VOLUME)
}

pub fn delete_volume_definition() -> ToolDefinition {
    ToolDefinition::new(DELETE_VOLUME, "Delete a volume and the data on it")
        .with_parameter(id_param("volume_id", "ID of the volume to delete"))
        .with_classification(Irreversible)
        .with_validator(compute::DELETE_VOLUME)
}

pub fn definitions() -> Vec<ToolDefinition> {
    vec![
        list_volumes_definition(),
        create_volume_definition(),
        resize_volume_definition(),
        attach_volume_definition(),
        detach_volume_definition(),
        delete_volume_definition(),
    ]
}
