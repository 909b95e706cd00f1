//! Networking tools: firewalls, load balancers and VPCs

use super::{id_param, label_filter, region_filter};
use cloudops_domain::gate::OperationClassification::*;
use cloudops_domain::operation::network;
use cloudops_domain::tool::entities::{ToolDefinition, ToolParameter};

/// Tool name constants
pub const LIST_FIREWALLS: &str = "list_firewalls";
pub const CREATE_FIREWALL: &str = "create_firewall";
pub const UPDATE_FIREWALL: &str = "update_firewall";
pub const DELETE_FIREWALL: &str = "delete_firewall";
pub const LIST_LOAD_BALANCERS: &str = "list_load_balancers";
pub const CREATE_LOAD_BALANCER: &str = "create_load_balancer";
pub const DELETE_LOAD_BALANCER: &str = "delete_load_balancer";
pub const LIST_VPCS: &str = "list_vpcs";
pub const CREATE_VPC: &str = "create_vpc";
pub const DELETE_VPC: &str = "delete_vpc";

fn policy_param(name: &str, required: bool) -> ToolParameter {
    ToolParameter::new(name, "ACCEPT or DROP (case-insensitive)", required)
}

pub fn list_firewalls_definition() -> ToolDefinition {
    label_filter(ToolDefinition::new(LIST_FIREWALLS, "List cloud firewalls"))
}

pub fn create_firewall_definition() -> ToolDefinition {
    ToolDefinition::new(CREATE_FIREWALL, "Create a cloud firewall")
        .with_parameter(ToolParameter::new("label", "Firewall label, 3-64 characters", true))
        .with_parameter(policy_param("inbound_policy", true))
        .with_parameter(policy_param("outbound_policy", true))
        .with_classification(ConfigurationChange)
        .with_validator(network::CREATE_FIREWALL)
}

pub fn update_firewall_definition() -> ToolDefinition {
    ToolDefinition::new(
        UPDATE_FIREWALL,
        "Change a firewall's label or default policies. Takes effect immediately on attached instances.",
    )
    .with_parameter(id_param("firewall_id", "ID of the firewall"))
    .with_parameter(ToolParameter::new("label", "New label", false))
    .with_parameter(policy_param("inbound_policy", false))
    .with_parameter(policy_param("outbound_policy", false))
    .with_classification(ConfigurationChange)
    .with_validator(network::UPDATE_FIREWALL)
}

pub fn delete_firewall_definition() -> ToolDefinition {
    ToolDefinition::new(DELETE_FIREWALL, "Delete a cloud firewall")
        .with_parameter(id_param("firewall_id", "ID of the firewall"))
        .with_classification(Irreversible)
        .with_validator(network::DELETE_FIREWALL)
}

pub fn list_load_balancers_definition() -> ToolDefinition {
    region_filter(label_filter(ToolDefinition::new(
        LIST_LOAD_BALANCERS,
        "List load balancers",
    )))
}

pub fn create_load_balancer_definition() -> ToolDefinition {
    ToolDefinition::new(CREATE_LOAD_BALANCER, "Create a load balancer")
        .with_parameter(ToolParameter::new("region", "Region for the load balancer", true))
        .with_parameter(ToolParameter::new("label", "Load balancer label", false))
        .with_classification(Billable)
        .with_validator(network::CREATE_LOAD_BALANCER)
}

pub fn delete_load_balancer_definition() -> ToolDefinition {
    ToolDefinition::new(DELETE_LOAD_BALANCER, "Delete a load balancer")
        .with_parameter(id_param("load_balancer_id", "ID of the load balancer"))
        .with_classification(Irreversible)
        .with_validator(network::DELETE_LOAD_BALANCER)
}

pub fn list_vpcs_definition() -> ToolDefinition {
    region_filter(label_filter(ToolDefinition::new(LIST_VPCS, "List VPCs")))
}

pub fn create_vpc_definition() -> ToolDefinition {
    ToolDefinition::new(CREATE_VPC, "Create a VPC")
        .with_parameter(ToolParameter::new("label", "VPC label, 3-64 characters", true))
        .with_parameter(ToolParameter::new("region", "Region for the VPC", true))
        .with_parameter(ToolParameter::new("description", "Free-form description", false))
        .with_classification(ConfigurationChange)
        .with_validator(network::CREATE_VPC)
}

pub fn delete_vpc_definition() -> ToolDefinition {
    ToolDefinition::new(DELETE_VPC, "Delete a VPC and its subnets")
        .with_parameter(id_param("vpc_id", "ID of the VPC"))
        .with_classification(Irreversible)
        .with_validator(network::DELETE_VPC)
}

pub fn definitions() -> Vec<ToolDefinition> {
    vec![
        list_firewalls_definition(),
        create_firewall_definition(),
        update_firewall_definition(),
        delete_firewall_definition(),
        list_load_balancers_definition(),
        create_load_balancer_definition(),
        delete_load_balancer_definition(),
        list_vpcs_definition(),
        create_vpc_definition(),
        delete_vpc_definition(),
    ]
}
