//! Operation → REST endpoint mapping.
//!
//! Each canonical tool name maps to one HTTP method and path template.
//! Path placeholders (`{volume_id}`) are filled from the call's arguments,
//! which are then left out of the body.

use crate::tools::{compute, dns, networking, object_storage, volumes};
use cloudops_application::ports::cloud_gateway::GatewayError;
use cloudops_domain::operation::storage::parse_bucket_access;
use cloudops_domain::tool::entities::ToolCall;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    fn has_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put)
    }
}

/// Endpoint of one operation.
#[derive(Debug, Clone, Copy)]
pub struct Route {
    pub method: HttpMethod,
    pub path: &'static str,
    /// Argument name → API field name
    pub renames: &'static [(&'static str, &'static str)],
    /// Arguments moved into a nested object: (object name, arguments)
    pub nested: Option<(&'static str, &'static [&'static str])>,
}

/// A request ready to send.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub method: HttpMethod,
    pub path: String,
    pub body: Option<Value>,
}

const fn route(method: HttpMethod, path: &'static str) -> Route {
    Route {
        method,
        path,
        renames: &[],
        nested: None,
    }
}

const FIREWALL_RULES: Option<(&str, &[&str])> =
    Some(("rules", &["inbound_policy", "outbound_policy"]));

/// Look up the endpoint of a canonical operation name.
pub fn route_for(operation: &str) -> Option<Route> {
    use HttpMethod::*;

    let found = match operation {
        compute::LIST_INSTANCES => route(Get, "/linode/instances"),
        compute::GET_INSTANCE => route(Get, "/linode/instances/{instance_id}"),
        compute::CREATE_INSTANCE => route(Post, "/linode/instances"),
        compute::DELETE_INSTANCE => route(Delete, "/linode/instances/{instance_id}"),
        compute::REBOOT_INSTANCE => route(Post, "/linode/instances/{instance_id}/reboot"),
        compute::SHUTDOWN_INSTANCE => route(Post, "/linode/instances/{instance_id}/shutdown"),
        compute::RESIZE_INSTANCE => route(Post, "/linode/instances/{instance_id}/resize"),
        compute::LIST_SSH_KEYS => route(Get, "/profile/sshkeys"),
        compute::CREATE_SSH_KEY => route(Post, "/profile/sshkeys"),
        compute::DELETE_SSH_KEY => route(Delete, "/profile/sshkeys/{ssh_key_id}"),

        volumes::LIST_VOLUMES => route(Get, "/volumes"),
        volumes::CREATE_VOLUME => route(Post, "/volumes"),
        volumes::RESIZE_VOLUME => route(Post, "/volumes/{volume_id}/resize"),
        volumes::ATTACH_VOLUME => Route {
            renames: &[("instance_id", "linode_id")],
            ..route(Post, "/volumes/{volume_id}/attach")
        },
        volumes::DETACH_VOLUME => route(Post, "/volumes/{volume_id}/detach"),
        volumes::DELETE_VOLUME => route(Delete, "/volumes/{volume_id}"),

        dns::LIST_DOMAINS => route(Get, "/domains"),
        dns::CREATE_DOMAIN => route(Post, "/domains"),
        dns::DELETE_DOMAIN => route(Delete, "/domains/{domain_id}"),
        dns::LIST_DOMAIN_RECORDS => route(Get, "/domains/{domain_id}/records"),
        dns::CREATE_DOMAIN_RECORD => route(Post, "/domains/{domain_id}/records"),
        dns::UPDATE_DOMAIN_RECORD => route(Put, "/domains/{domain_id}/records/{record_id}"),
        dns::DELETE_DOMAIN_RECORD => route(Delete, "/domains/{domain_id}/records/{record_id}"),

        networking::LIST_FIREWALLS => route(Get, "/networking/firewalls"),
        networking::CREATE_FIREWALL => Route {
            nested: FIREWALL_RULES,
            ..route(Post, "/networking/firewalls")
        },
        networking::UPDATE_FIREWALL => Route {
            nested: FIREWALL_RULES,
            ..route(Put, "/networking/firewalls/{firewall_id}")
        },
        networking::DELETE_FIREWALL => route(Delete, "/networking/firewalls/{firewall_id}"),
        networking::LIST_LOAD_BALANCERS => route(Get, "/nodebalancers"),
        networking::CREATE_LOAD_BALANCER => route(Post, "/nodebalancers"),
        networking::DELETE_LOAD_BALANCER => route(Delete, "/nodebalancers/{load_balancer_id}"),
        networking::LIST_VPCS => route(Get, "/vpcs"),
        networking::CREATE_VPC => route(Post, "/vpcs"),
        networking::DELETE_VPC => route(Delete, "/vpcs/{vpc_id}"),

        object_storage::LIST_BUCKETS => route(Get, "/object-storage/buckets"),
        object_storage::CREATE_BUCKET => route(Post, "/object-storage/buckets"),
        object_storage::UPDATE_BUCKET_ACL => {
            route(Post, "/object-storage/buckets/{cluster}/{label}/access")
        }
        object_storage::DELETE_BUCKET => route(Delete, "/object-storage/buckets/{cluster}/{label}"),
        object_storage::LIST_ACCESS_KEYS => route(Get, "/object-storage/keys"),
        object_storage::CREATE_ACCESS_KEY => route(Post, "/object-storage/keys"),
        object_storage::DELETE_ACCESS_KEY => route(Delete, "/object-storage/keys/{access_key_id}"),
        object_storage::CREATE_PRESIGNED_URL => {
            route(Post, "/object-storage/buckets/{cluster}/{label}/object-url")
        }
        _ => return None,
    };
    Some(found)
}

/// Build the request for a validated call.
///
/// `bucket_access` given as a JSON string is sent as the decoded array.
pub fn prepare(operation: &str, call: &ToolCall) -> Result<PreparedRequest, GatewayError> {
    let route = route_for(operation).ok_or_else(|| GatewayError::Unsupported(operation.to_string()))?;
    if operation != object_storage::CREATE_ACCESS_KEY || !call.arguments.contains_key("bucket_access") {
        return route.prepare(call);
    }

    let grants = parse_bucket_access(call).map_err(|e| GatewayError::Unsupported(e.to_string()))?;
    let mut call = call.clone();
    if grants.is_empty() {
        call.arguments.remove("bucket_access");
    } else {
        let grants = serde_json::to_value(grants).map_err(|e| GatewayError::Unsupported(e.to_string()))?;
        call.arguments.insert("bucket_access".to_string(), grants);
    }
    route.prepare(&call)
}

impl Route {
    /// Fill the path template and build the JSON body from the remaining arguments.
    pub fn prepare(&self, call: &ToolCall) -> Result<PreparedRequest, GatewayError> {
        let mut args: Map<String, Value> = call
            .arguments
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        let mut path = String::with_capacity(self.path.len());
        let mut rest = self.path;
        while let Some(open) = rest.find('{') {
            let close = rest[open..].find('}').map(|i| open + i).ok_or_else(|| {
                GatewayError::Unsupported(format!("malformed path template {}", self.path))
            })?;
            let name = &rest[open + 1..close];
            let value = path_segment(name, args.remove(name))?;
            path.push_str(&rest[..open]);
            path.push_str(&value);
            rest = &rest[close + 1..];
        }
        path.push_str(rest);

        if !self.method.has_body() {
            return Ok(PreparedRequest {
                method: self.method,
                path,
                body: None,
            });
        }

        for (from, to) in self.renames {
            if let Some(value) = args.remove(*from) {
                args.insert(to.to_string(), value);
            }
        }
        if let Some((parent, fields)) = self.nested {
            let inner: Map<String, Value> = fields
                .iter()
                .filter_map(|f| args.remove(*f).map(|v| (f.to_string(), v)))
                .collect();
            if !inner.is_empty() {
                args.insert(parent.to_string(), Value::Object(inner));
            }
        }

        Ok(PreparedRequest {
            method: self.method,
            path,
            body: Some(Value::Object(args)),
        })
    }
}

/// One percent-encoded path segment. `*_id` placeholders are written as the
/// parsed integer, so `" 42"` and `"+42"` both become `42`.
fn path_segment(name: &str, value: Option<Value>) -> Result<String, GatewayError> {
    let invalid = |why: &str| GatewayError::Unsupported(format!("{} {}", name, why));
    let raw = match value {
        Some(Value::String(s)) if !s.is_empty() => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => return Err(invalid("is required in the path")),
    };
    if name.ends_with("_id") {
        return raw
            .trim()
            .parse::<i64>()
            .map(|id| id.to_string())
            .map_err(|_| invalid("must be an integer"));
    }
    if matches!(raw.as_str(), "." | "..") {
        return Err(invalid("is not a valid path segment"));
    }
    Ok(urlencoding::encode(&raw).into_owned())
}
