//! DNS tools: domains and domain records

use super::id_param;
use cloudops_domain::filter::MatchMode;
use cloudops_domain::gate::OperationClassification::*;
use cloudops_domain::operation::dns;
use cloudops_domain::tool::entities::{ToolDefinition, ToolParameter};

/// Tool name constants
pub const LIST_DOMAINS: &str = "list_domains";
pub const CREATE_DOMAIN: &str = "create_domain";
pub const DELETE_DOMAIN: &str = "delete_domain";
pub const LIST_DOMAIN_RECORDS: &str = "list_domain_records";
pub const CREATE_DOMAIN_RECORD: &str = "create_domain_record";
pub const UPDATE_DOMAIN_RECORD: &str = "update_domain_record";
pub const DELETE_DOMAIN_RECORD: &str = "delete_domain_record";

const RECORD_TYPES: &str = "A, AAAA, CNAME, MX, NS, TXT, SRV or CAA";

fn ttl_param() -> ToolParameter {
    ToolParameter::new("ttl_sec", "TTL in seconds: 0 for the zone default, or 30-604800", false)
        .with_type("integer")
}

pub fn list_domains_definition() -> ToolDefinition {
    ToolDefinition::new(LIST_DOMAINS, "List DNS zones")
        .with_filter("domain", "domain", MatchMode::Contains)
        .with_filter("type", "type", MatchMode::Exact)
}

pub fn create_domain_definition() -> ToolDefinition {
    ToolDefinition::new(CREATE_DOMAIN, "Create a DNS zone")
        .with_parameter(ToolParameter::new("domain", "Zone name (e.g. example.com)", true))
        .with_parameter(ToolParameter::new("type", "master (default) or slave", false))
        .with_parameter(ToolParameter::new("soa_email", "SOA contact address, required for master zones", false))
        .with_parameter(
            ToolParameter::new("master_ips", "Primary servers for a slave zone", false)
                .with_type("array"),
        )
        .with_classification(ConfigurationChange)
        .with_validator(dns::CREATE_DOMAIN)
}

pub fn delete_domain_definition() -> ToolDefinition {
    ToolDefinition::new(DELETE_DOMAIN, "Delete a DNS zone and every record in it")
        .with_parameter(id_param("domain_id", "ID of the zone"))
        .with_classification(Irreversible)
        .with_validator(dns::DELETE_DOMAIN)
}

pub fn list_domain_records_definition() -> ToolDefinition {
    ToolDefinition::new(LIST_DOMAIN_RECORDS, "List the records of a DNS zone")
        .with_parameter(id_param("domain_id", "ID of the zone"))
        .with_filter("name", "name", MatchMode::Contains)
        .with_filter("type", "type", MatchMode::Exact)
        .with_validator(dns::LIST_DOMAIN_RECORDS)
}

pub fn create_domain_record_definition() -> ToolDefinition {
    ToolDefinition::new(CREATE_DOMAIN_RECORD, "Add a record to a DNS zone")
        .with_parameter(id_param("domain_id", "ID of the zone"))
        .with_parameter(ToolParameter::new("type", RECORD_TYPES, true))
        .with_parameter(ToolParameter::new("name", "Record name relative to the zone; @ for the apex", true))
        .with_parameter(ToolParameter::new(
            "target",
            "Public IPv4 (A), IPv6 (AAAA), hostname (CNAME, MX, NS) or free text (TXT, SRV, CAA)",
            true,
        ))
        .with_parameter(ttl_param())
        .with_parameter(ToolParameter::new("priority", "MX/SRV priority", false).with_type("integer"))
        .with_classification(ConfigurationChange)
        .with_validator(dns::CREATE_DOMAIN_RECORD)
}

pub fn update_domain_record_definition() -> ToolDefinition {
    ToolDefinition::new(
        UPDATE_DOMAIN_RECORD,
        "Change a DNS record. A new target must come with the record type.",
    )
    .with_parameter(id_param("domain_id", "ID of the zone"))
    .with_parameter(id_param("record_id", "ID of the record"))
    .with_parameter(ToolParameter::new("type", RECORD_TYPES, false))
    .with_parameter(ToolParameter::new("name", "New record name", false))
    .with_parameter(ToolParameter::new("target", "New target", false))
    .with_parameter(ttl_param())
    .with_classification(ConfigurationChange)
    .with_validator(dns::UPDATE_DOMAIN_RECORD)
}

pub fn delete_domain_record_definition() -> ToolDefinition {
    ToolDefinition::new(DELETE_DOMAIN_RECORD, "Delete a DNS record")
        .with_parameter(id_param("domain_id", "ID of the zone"))
        .with_parameter(id_param("record_id", "ID of the record"))
        .with_classification(Irreversible)
        .with_validator(dns::DELETE_DOMAIN_RECORD)
}

pub fn definitions() -> Vec<ToolDefinition> {
    vec![
        list_domains_definition(),
        create_domain_definition(),
        delete_domain_definition(),
        list_domain_records_definition(),
        create_domain_record_definition(),
        update_domain_record_definition(),
        delete_domain_record_definition(),
    ]
}
