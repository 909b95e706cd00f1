//! Object storage tools: buckets, access keys and presigned URLs

use super::{id_param, label_filter};
use cloudops_domain::filter::MatchMode;
use cloudops_domain::gate::OperationClassification::*;
use cloudops_domain::operation::storage;
use cloudops_domain::tool::entities::{ToolDefinition, ToolParameter};

/// Tool name constants
pub const LIST_BUCKETS: &str = "list_buckets";
pub const CREATE_BUCKET: &str = "create_bucket";
pub const UPDATE_BUCKET_ACL: &str = "update_bucket_acl";
pub const DELETE_BUCKET: &str = "delete_bucket";
pub const LIST_ACCESS_KEYS: &str = "list_access_keys";
pub const CREATE_ACCESS_KEY: &str = "create_access_key";
pub const DELETE_ACCESS_KEY: &str = "delete_access_key";
pub const CREATE_PRESIGNED_URL: &str = "create_presigned_url";

const ACLS: &str = "private, public-read, authenticated-read or public-read-write";

fn cluster_param() -> ToolParameter {
    ToolParameter::new(
        "cluster",
        "Object storage cluster or region: lowercase letters, digits and '-' (e.g. us-east-1)",
        true,
    )
}

fn bucket_param() -> ToolParameter {
    ToolParameter::new("label", "Bucket name", true)
}

pub fn list_buckets_definition() -> ToolDefinition {
    label_filter(ToolDefinition::new(LIST_BUCKETS, "List object storage buckets"))
        .with_filter("cluster", "cluster", MatchMode::Exact)
}

pub fn create_bucket_definition() -> ToolDefinition {
    ToolDefinition::new(CREATE_BUCKET, "Create an object storage bucket")
        .with_parameter(ToolParameter::new(
            "label",
            "Bucket name: 3-63 lowercase letters, digits or '-', starting and ending with a letter or digit",
            true,
        ))
        .with_parameter(cluster_param())
        .with_parameter(ToolParameter::new("acl", ACLS, false))
        .with_classification(Billable)
        .with_validator(storage::CREATE_BUCKET)
}

pub fn update_bucket_acl_definition() -> ToolDefinition {
    ToolDefinition::new(UPDATE_BUCKET_ACL, "Change who can read or write a bucket")
        .with_parameter(cluster_param())
        .with_parameter(bucket_param())
        .with_parameter(ToolParameter::new("acl", ACLS, true))
        .with_classification(ConfigurationChange)
        .with_validator(storage::UPDATE_BUCKET_ACL)
}

pub fn delete_bucket_definition() -> ToolDefinition {
    ToolDefinition::new(DELETE_BUCKET, "Delete a bucket")
        .with_parameter(cluster_param())
        .with_parameter(bucket_param())
        .with_classification(Irreversible)
        .with_validator(storage::DELETE_BUCKET)
}

pub fn list_access_keys_definition() -> ToolDefinition {
    label_filter(ToolDefinition::new(LIST_ACCESS_KEYS, "List object storage access keys"))
}

pub fn create_access_key_definition() -> ToolDefinition {
    ToolDefinition::new(
        CREATE_ACCESS_KEY,
        "Create an object storage access key. The secret_key is returned once and never again.",
    )
    .with_parameter(ToolParameter::new("label", "Key label, at most 50 characters", true))
    .with_parameter(
        ToolParameter::new(
            "bucket_access",
            "Limit the key to these buckets: [{bucket_name, region, permissions: read_only|read_write}]",
            false,
        )
        .with_type("array"),
    )
    .with_classification(Billable)
    .with_classification(SecretExposure)
    .with_validator(storage::CREATE_ACCESS_KEY)
}

pub fn delete_access_key_definition() -> ToolDefinition {
    ToolDefinition::new(DELETE_ACCESS_KEY, "Revoke an object storage access key")
        .with_parameter(id_param("access_key_id", "ID of the access key"))
        .with_classification(Irreversible)
        .with_validator(storage::DELETE_ACCESS_KEY)
}

pub fn create_presigned_url_definition() -> ToolDefinition {
    ToolDefinition::new(
        CREATE_PRESIGNED_URL,
        "Create a time-limited URL to download or upload one object",
    )
    .with_parameter(cluster_param())
    .with_parameter(bucket_param())
    .with_parameter(ToolParameter::new("name", "Object key", true))
    .with_parameter(ToolParameter::new("method", "GET (default) or PUT", false))
    .with_parameter(
        ToolParameter::new("expires_in", "Lifetime in seconds (1-604800)", false).with_type("integer"),
    )
    .with_validator(storage::CREATE_PRESIGNED_URL)
}

pub fn definitions() -> Vec<ToolDefinition> {
    vec![
        list_buckets_definition(),
        create_bucket_definition(),
        update_bucket_acl_definition(),
        delete_bucket_definition(),
        list_access_keys_definition(),
        create_access_key_definition(),
        delete_access_key_definition(),
        create_presigned_url_definition(),
    ]
}
