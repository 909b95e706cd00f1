//! Shared helpers for tool use cases.

use cloudops_domain::CONFIRM_PARAM;
use cloudops_domain::core::string::{is_secret_arg, mask, truncate};
use cloudops_domain::tool::entities::ToolCall;
use serde_json::{Map, Value};

/// Extract a short preview string from tool call arguments.
///
/// Looks for well-known keys (`label`, `domain`, `name`) first, then falls
/// back to the first non-secret string value, in key order.
pub(crate) fn tool_args_preview(call: &ToolCall) -> String {
    let keys = ["label", "domain", "name"];
    for key in &keys {
        if let Some(Value::String(s)) = call.arguments.get(*key) {
            return truncate(s, 50);
        }
    }
    let mut names: Vec<&String> = call.arguments.keys().collect();
    names.sort();
    names
        .into_iter()
        .filter(|name| !is_secret_arg(name))
        .find_map(|name| call.arguments.get(name).and_then(Value::as_str))
        .map(|s| truncate(s, 50))
        .unwrap_or_default()
}

/// Arguments as a JSON object with secret values masked.
pub(crate) fn redacted_arguments(call: &ToolCall) -> Value {
    let map: Map<String, Value> = call
        .arguments
        .iter()
        .map(|(name, value)| {
            let value = match value {
                Value::String(s) if is_secret_arg(name) => Value::String(mask(s)),
                other => other.clone(),
            };
            (name.clone(), value)
        })
        .collect();
    Value::Object(map)
}

/// Copy of the call addressed to `canonical`, without the confirmation flag.
pub(crate) fn dispatch_call(call: &ToolCall, canonical: &str) -> ToolCall {
    let mut out = call.clone();
    out.tool_name = canonical.to_string();
    out.arguments.remove(CONFIRM_PARAM);
    out
}
