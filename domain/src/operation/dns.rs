//! Domain and domain record operations.

use super::{CompositeValidator, if_present, require_id, str_arg};
use crate::tool::entities::ToolCall;
use crate::validation::ValidationError;
use crate::validation::dns::{
    RecordType, validate_domain_name, validate_domain_type, validate_record_name,
    validate_record_target, validate_soa_email, validate_ttl,
};

/// domain, type, soa_email (master zones only)
pub const CREATE_DOMAIN: CompositeValidator = CompositeValidator {
    operation: "create_domain",
    rules: &[
        |call| validate_domain_name(str_arg(call, "domain")),
        domain_type,
        soa_email,
    ],
};

pub const DELETE_DOMAIN: CompositeValidator = CompositeValidator {
    operation: "delete_domain",
    rules: &[domain_id],
};

pub const LIST_DOMAIN_RECORDS: CompositeValidator = CompositeValidator {
    operation: "list_domain_records",
    rules: &[domain_id],
};

/// domain_id, type, name, target, ttl_sec?
pub const CREATE_DOMAIN_RECORD: CompositeValidator = CompositeValidator {
    operation: "create_domain_record",
    rules: &[
        domain_id,
        |call| str_arg(call, "type").parse::<RecordType>().map(|_| ()),
        |call| validate_record_name(str_arg(call, "name")),
        |call| {
            let record_type = str_arg(call, "type").parse::<RecordType>()?;
            validate_record_target(record_type, str_arg(call, "target"))
        },
        ttl,
    ],
};

/// domain_id, record_id, name?, target? (needs type), ttl_sec?
pub const UPDATE_DOMAIN_RECORD: CompositeValidator = CompositeValidator {
    operation: "update_domain_record",
    rules: &[
        domain_id,
        record_id,
        |call| if_present(call, "name", validate_record_name),
        |call| {
            if !call.arguments.contains_key("target") {
                return Ok(());
            }
            let record_type = str_arg(call, "type").parse::<RecordType>()?;
            validate_record_target(record_type, str_arg(call, "target"))
        },
        ttl,
    ],
};

pub const DELETE_DOMAIN_RECORD: CompositeValidator = CompositeValidator {
    operation: "delete_domain_record",
    rules: &[domain_id, record_id],
};

fn domain_id(call: &ToolCall) -> Result<(), ValidationError> {
    require_id(call, "domain_id")
}

fn record_id(call: &ToolCall) -> Result<(), ValidationError> {
    require_id(call, "record_id")
}

/// Zone type defaults to master when omitted.
fn domain_type(call: &ToolCall) -> Result<(), ValidationError> {
    match call.get_string("type") {
        Some(domain_type) => validate_domain_type(domain_type),
        None => Ok(()),
    }
}

fn soa_email(call: &ToolCall) -> Result<(), ValidationError> {
    if call.get_string("type").unwrap_or("master") == "master" {
        validate_soa_email(str_arg(call, "soa_email"))
    } else {
        Ok(())
    }
}

fn ttl(call: &ToolCall) -> Result<(), ValidationError> {
    match call.parse_i64("ttl_sec")? {
        Some(ttl) => validate_ttl(ttl),
        None => Ok(()),
    }
}
