//! Firewall, load balancer and VPC operations.

use super::{CompositeValidator, if_present, require_id, require_non_empty, require_region, str_arg};
use crate::tool::entities::ToolCall;
use crate::validation::ValidationError;
use crate::validation::resources::{validate_firewall_policy, validate_resource_label};

/// label, inbound_policy, outbound_policy
pub const CREATE_FIREWALL: CompositeValidator = CompositeValidator {
    operation: "create_firewall",
    rules: &[
        |call| validate_resource_label(str_arg(call, "label")),
        |call| policy(call, "inbound_policy"),
        |call| policy(call, "outbound_policy"),
    ],
};

/// firewall_id, label?, inbound_policy?, outbound_policy?
pub const UPDATE_FIREWALL: CompositeValidator = CompositeValidator {
    operation: "update_firewall",
    rules: &[
        firewall_id,
        |call| if_present(call, "label", validate_resource_label),
        |call| if_present(call, "inbound_policy", validate_firewall_policy),
        |call| if_present(call, "outbound_policy", validate_firewall_policy),
    ],
};

pub const DELETE_FIREWALL: CompositeValidator = CompositeValidator {
    operation: "delete_firewall",
    rules: &[firewall_id],
};

/// region, label?
pub const CREATE_LOAD_BALANCER: CompositeValidator = CompositeValidator {
    operation: "create_load_balancer",
    rules: &[
        |call| require_region(call, "region"),
        |call| if_present(call, "label", validate_resource_label),
    ],
};

pub const DELETE_LOAD_BALANCER: CompositeValidator = CompositeValidator {
    operation: "delete_load_balancer",
    rules: &[|call| require_id(call, "load_balancer_id")],
};

/// label, region
pub const CREATE_VPC: CompositeValidator = CompositeValidator {
    operation: "create_vpc",
    rules: &[
        |call| validate_resource_label(str_arg(call, "label")),
        |call| require_region(call, "region"),
    ],
};

pub const DELETE_VPC: CompositeValidator = CompositeValidator {
    operation: "delete_vpc",
    rules: &[|call| require_id(call, "vpc_id")],
};

fn firewall_id(call: &ToolCall) -> Result<(), ValidationError> {
    require_id(call, "firewall_id")
}

fn policy(call: &ToolCall, key: &str) -> Result<(), ValidationError> {
    require_non_empty(call, key)?;
    validate_firewall_policy(str_arg(call, key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ErrorKind;

    #[test]
    fn test_create_firewall() {
        let call = ToolCall::new("create_firewall")
            .with_arg("label", "edge-fw")
            .with_arg("inbound_policy", "drop")
            .with_arg("outbound_policy", "ACCEPT");
        assert!(CREATE_FIREWALL.validate(&call).is_ok());

        let call = ToolCall::new("create_firewall")
            .with_arg("label", "edge-fw")
            .with_arg("inbound_policy", "DENY")
            .with_arg("outbound_policy", "ACCEPT");
        let err = CREATE_FIREWALL.validate(&call).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidEnumValue);
        assert!(err.message().contains("'DENY'"));

        let call = ToolCall::new("create_firewall").with_arg("label", "edge-fw");
        assert_eq!(
            CREATE_FIREWALL.validate(&call).unwrap_err().message(),
            "inbound_policy is required"
        );
    }

    #[test]
    fn test_update_firewall_optional_fields() {
        let call = ToolCall::new("update_firewall").with_arg("firewall_id", 9);
        assert!(UPDATE_FIREWALL.validate(&call).is_ok());

        let call = ToolCall::new("update_firewall")
            .with_arg("firewall_id", 9)
            .with_arg("outbound_policy", "maybe");
        assert_eq!(
            UPDATE_FIREWALL.validate(&call).unwrap_err().kind(),
            ErrorKind::InvalidEnumValue
        );
    }

    #[test]
    fn test_create_vpc() {
        let call = ToolCall::new("create_vpc")
            .with_arg("label", "prod-vpc")
            .with_arg("region", "us-east");
        assert!(CREATE_VPC.validate(&call).is_ok());

        let call = ToolCall::new("create_vpc").with_arg("region", "us-east");
        assert_eq!(
            CREATE_VPC.validate(&call).unwrap_err().kind(),
            ErrorKind::Required
        );
    }

    #[test]
    fn test_create_load_balancer() {
        let call = ToolCall::new("create_load_balancer").with_arg("region", "eu-west");
        assert!(CREATE_LOAD_BALANCER.validate(&call).is_ok());
        assert!(CREATE_LOAD_BALANCER
            .validate(&ToolCall::new("create_load_balancer"))
            .is_err());

        let call = ToolCall::new("create_load_balancer").with_arg("region", "EU West");
        assert_eq!(
            CREATE_LOAD_BALANCER.validate(&call).unwrap_err().kind(),
            ErrorKind::InvalidCharacters
        );
    }
}
