//! Object storage operations: buckets, access keys, presigned URLs.

use serde::{Deserialize, Serialize};

use super::{CompositeValidator, if_present, require_non_empty, require_region, str_arg};
use crate::tool::entities::ToolCall;
use crate::validation::credentials::{validate_access_key_label, validate_access_key_permission};
use crate::validation::storage::{
    validate_bucket_acl, validate_bucket_label, validate_presigned_expiry,
    validate_presigned_method,
};
use crate::validation::resources::validate_region;
use crate::validation::{ErrorKind, ValidationError};

/// One entry of an access key's `bucket_access` list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BucketGrant {
    pub bucket_name: String,
    #[serde(alias = "cluster")]
    pub region: String,
    pub permissions: String,
}

impl BucketGrant {
    /// bucket_name, region, permissions
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_bucket_label(&self.bucket_name)?;
        validate_region("region", &self.region)?;
        validate_access_key_permission(&self.permissions)
    }
}

/// label, cluster, acl?
pub const CREATE_BUCKET: CompositeValidator = CompositeValidator {
    operation: "create_bucket",
    rules: &[bucket_label, cluster, |call| if_present(call, "acl", validate_bucket_acl)],
};

/// cluster, label, acl
pub const UPDATE_BUCKET_ACL: CompositeValidator = CompositeValidator {
    operation: "update_bucket_acl",
    rules: &[cluster, bucket_label, |call| validate_bucket_acl(str_arg(call, "acl"))],
};

pub const DELETE_BUCKET: CompositeValidator = CompositeValidator {
    operation: "delete_bucket",
    rules: &[cluster, bucket_label],
};

/// label, bucket_access?
pub const CREATE_ACCESS_KEY: CompositeValidator = CompositeValidator {
    operation: "create_access_key",
    rules: &[
        |call| validate_access_key_label(str_arg(call, "label")),
        bucket_access,
    ],
};

pub const DELETE_ACCESS_KEY: CompositeValidator = CompositeValidator {
    operation: "delete_access_key",
    rules: &[|call| super::require_id(call, "access_key_id")],
};

/// cluster, label, name, method?, expires_in?
pub const CREATE_PRESIGNED_URL: CompositeValidator = CompositeValidator {
    operation: "create_presigned_url",
    rules: &[
        cluster,
        bucket_label,
        |call| require_non_empty(call, "name"),
        |call| if_present(call, "method", validate_presigned_method),
        |call| match call.parse_i64("expires_in")? {
            Some(seconds) => validate_presigned_expiry(seconds),
            None => Ok(()),
        },
    ],
};

fn bucket_label(call: &ToolCall) -> Result<(), ValidationError> {
    validate_bucket_label(str_arg(call, "label"))
}

fn cluster(call: &ToolCall) -> Result<(), ValidationError> {
    require_region(call, "cluster")
}

/// Decode the grant list from a JSON array or a JSON-encoded string and
/// check every entry.
fn bucket_access(call: &ToolCall) -> Result<(), ValidationError> {
    let grants = parse_bucket_access(call)?;
    grants
        .iter()
        .enumerate()
        .try_for_each(|(index, grant)| grant.validate().map_err(|e| e.in_entry(index)))
}

/// Grants requested by a `create_access_key` call; empty when none were given.
pub fn parse_bucket_access(call: &ToolCall) -> Result<Vec<BucketGrant>, ValidationError> {
    let invalid = |detail: String| {
        ValidationError::new(
            ErrorKind::InvalidFormat,
            format!(
                "bucket_access must be a list of {{bucket_name, region, permissions}} objects: {}",
                detail
            ),
        )
    };
    match call.arguments.get("bucket_access") {
        None | Some(serde_json::Value::Null) => Ok(Vec::new()),
        Some(serde_json::Value::String(raw)) if raw.trim().is_empty() => Ok(Vec::new()),
        Some(serde_json::Value::String(raw)) => {
            serde_json::from_str(raw).map_err(|e| invalid(e.to_string()))
        }
        Some(value) => serde_json::from_value(value.clone()).map_err(|e| invalid(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn access_key_call(grants: serde_json::Value) -> ToolCall {
        ToolCall::new("create_access_key")
            .with_arg("label", "ci-key")
            .with_arg("bucket_access", grants)
    }

    #[test]
    fn test_create_bucket() {
        let call = ToolCall::new("create_bucket")
            .with_arg("label", "my-bucket")
            .with_arg("cluster", "us-east-1")
            .with_arg("acl", "public-read");
        assert!(CREATE_BUCKET.validate(&call).is_ok());

        let call = ToolCall::new("create_bucket")
            .with_arg("label", "MyBucket")
            .with_arg("cluster", "us-east-1");
        assert_eq!(
            CREATE_BUCKET.validate(&call).unwrap_err().kind(),
            ErrorKind::InvalidCharacters
        );

        let call = ToolCall::new("create_bucket")
            .with_arg("label", "my-bucket")
            .with_arg("cluster", "us-east-1")
            .with_arg("acl", "world");
        assert_eq!(
            CREATE_BUCKET.validate(&call).unwrap_err().kind(),
            ErrorKind::InvalidEnumValue
        );
    }

    #[test]
    fn test_bucket_cluster_cannot_redirect_path() {
        // the cluster is a path segment; a crafted one must not smuggle in
        // another bucket ahead of the validated label
        let crafted = "us-east-1/Victim_Bucket?x=";
        for validator in [CREATE_BUCKET, UPDATE_BUCKET_ACL, DELETE_BUCKET, CREATE_PRESIGNED_URL] {
            let call = ToolCall::new(validator.operation)
                .with_arg("cluster", crafted)
                .with_arg("label", "my-bucket")
                .with_arg("acl", "private")
                .with_arg("name", "report.pdf");
            let err = validator.validate(&call).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidCharacters, "{}", validator.operation);
            assert!(err.message().contains("cluster"));
        }
    }

    #[test]
    fn test_access_key_grants_indexed() {
        let call = access_key_call(json!([
            {"bucket_name": "logs", "region": "us-east", "permissions": "read_only"},
            {"bucket_name": "media", "region": "us-east", "permissions": "admin"},
        ]));
        let err = CREATE_ACCESS_KEY.validate(&call).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidEnumValue);
        assert_eq!(
            err.message(),
            "entry 1: got 'admin': permissions must be 'read_only' or 'read_write'"
        );
    }

    #[test]
    fn test_access_key_grants_from_json_string() {
        let raw = r#"[{"bucket_name": "logs", "cluster": "us-east-1", "permissions": "read_write"}]"#;
        let call = access_key_call(json!(raw));
        assert!(CREATE_ACCESS_KEY.validate(&call).is_ok());

        let grants = parse_bucket_access(&call).unwrap();
        assert_eq!(grants[0].region, "us-east-1");
    }

    #[test]
    fn test_access_key_grants_malformed() {
        let call = access_key_call(json!("[{not json"));
        assert_eq!(
            CREATE_ACCESS_KEY.validate(&call).unwrap_err().kind(),
            ErrorKind::InvalidFormat
        );
    }

    #[test]
    fn test_access_key_label_checked_before_grants() {
        let call = ToolCall::new("create_access_key").with_arg("bucket_access", "[{not json");
        assert_eq!(
            CREATE_ACCESS_KEY.validate(&call).unwrap_err().kind(),
            ErrorKind::Required
        );
    }

    #[test]
    fn test_access_key_without_grants() {
        let call = ToolCall::new("create_access_key").with_arg("label", "all-buckets");
        assert!(CREATE_ACCESS_KEY.validate(&call).is_ok());
    }

    #[test]
    fn test_grant_missing_region() {
        let call = access_key_call(json!([{"bucket_name": "logs", "permissions": "read_only"}]));
        let err = CREATE_ACCESS_KEY.validate(&call).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Required);
        assert!(err.message().starts_with("entry 0: "));
    }

    #[test]
    fn test_presigned_url() {
        let base = ToolCall::new("create_presigned_url")
            .with_arg("cluster", "us-east-1")
            .with_arg("label", "my-bucket")
            .with_arg("name", "report.pdf");
        assert!(CREATE_PRESIGNED_URL.validate(&base).is_ok());

        let call = base.clone().with_arg("method", "post");
        assert_eq!(
            CREATE_PRESIGNED_URL.validate(&call).unwrap_err().kind(),
            ErrorKind::InvalidEnumValue
        );

        let call = base.clone().with_arg("method", "put").with_arg("expires_in", 604_801);
        assert_eq!(
            CREATE_PRESIGNED_URL.validate(&call).unwrap_err().kind(),
            ErrorKind::OutOfRange
        );
    }
}
