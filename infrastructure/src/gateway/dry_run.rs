//! Gateway that describes requests instead of sending them.

use super::routes::prepare;
use async_trait::async_trait;
use cloudops_application::ports::cloud_gateway::{CloudGateway, GatewayError};
use cloudops_domain::tool::entities::ToolCall;
use serde_json::{Value, json};
use tracing::info;

/// Answers every call with the request that would have been sent.
///
/// List operations answer `{"data": [], "request": ...}` so filtering
/// still runs end to end.
#[derive(Debug, Clone, Default)]
pub struct DryRunGateway;

#[async_trait]
impl CloudGateway for DryRunGateway {
    async fn dispatch(&self, operation: &str, call: &ToolCall) -> Result<Value, GatewayError> {
        let request = prepare(operation, call)?;
        info!("dry run: {} {}", request.method.as_str(), request.path);

        let described = json!({
            "dry_run": true,
            "operation": operation,
            "method": request.method.as_str(),
            "path": request.path,
            "body": request.body,
        });

        if operation.starts_with("list_") {
            Ok(json!({ "data": [], "request": described }))
        } else {
            Ok(described)
        }
    }
}
