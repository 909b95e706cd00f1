//! Invoke Tool use case
//!
//! Runs one tool call through the full pipeline:
//!
//! ```text
//! resolve name ─▶ gate ─▶ structural check ─▶ composite validator ─▶ dispatch ─▶ filter
//! ```
//!
//! Each stage can stop the call with a [`ToolError`]; nothing after a
//! failing stage runs, so an unconfirmed or invalid call never reaches the
//! provider. Gated tools leave an audit record whatever the outcome.

use crate::config::BehaviorConfig;
use crate::ports::audit_logger::{AuditEvent, AuditLogger, NoAuditLogger};
use crate::ports::cloud_gateway::{CloudGateway, GatewayError};
use crate::ports::progress::{InvocationProgress, NoProgress};
use crate::use_cases::tool_helpers::{dispatch_call, redacted_arguments, tool_args_preview};
use cloudops_domain::gate::require_confirmation;
use cloudops_domain::tool::entities::{ToolCall, ToolDefinition, ToolSpec};
use cloudops_domain::tool::traits::{DefaultToolValidator, ToolValidator};
use cloudops_domain::tool::value_objects::{ToolError, ToolResult};
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Use case for invoking a cloud tool
pub struct InvokeToolUseCase<G: CloudGateway + 'static> {
    gateway: Arc<G>,
    spec: Arc<ToolSpec>,
    audit: Arc<dyn AuditLogger>,
    behavior: BehaviorConfig,
}

impl<G: CloudGateway + 'static> InvokeToolUseCase<G> {
    pub fn new(gateway: Arc<G>, spec: Arc<ToolSpec>) -> Self {
        Self {
            gateway,
            spec,
            audit: Arc::new(NoAuditLogger),
            behavior: BehaviorConfig::default(),
        }
    }

    pub fn with_audit_logger(mut self, audit: Arc<dyn AuditLogger>) -> Self {
        self.audit = audit;
        self
    }

    pub fn with_behavior(mut self, behavior: BehaviorConfig) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn spec(&self) -> &ToolSpec {
        &self.spec
    }

    /// Run every check without contacting the provider.
    pub fn check(&self, call: &ToolCall) -> ToolResult {
        let definition = match self.resolve(call) {
            Ok(definition) => definition,
            Err(error) => return ToolResult::failure(&call.tool_name, error),
        };
        match self.admit(definition, call) {
            Ok(()) => ToolResult::checked(&definition.name),
            Err(error) => ToolResult::failure(&definition.name, error),
        }
    }

    /// Execute the call with default (no-op) progress
    pub async fn execute(&self, call: &ToolCall) -> ToolResult {
        self.execute_with_progress(call, &NoProgress).await
    }

    /// Execute the call with progress callbacks
    pub async fn execute_with_progress(
        &self,
        call: &ToolCall,
        progress: &dyn InvocationProgress,
    ) -> ToolResult {
        let definition = match self.resolve(call) {
            Ok(definition) => definition,
            Err(error) => {
                warn!("Unknown tool '{}'", call.tool_name);
                return ToolResult::failure(&call.tool_name, error);
            }
        };

        if let Err(error) = self.admit(definition, call) {
            warn!("Tool {} rejected: {}", definition.name, error);
            if definition.is_gated() {
                self.audit_rejection(definition, call, &error);
            }
            return ToolResult::failure(&definition.name, error);
        }

        info!(
            "Dispatching {} ({})",
            definition.name,
            tool_args_preview(call)
        );
        let request = dispatch_call(call, &definition.name);
        progress.on_dispatch(&definition.name);
        let started = Instant::now();
        let outcome = self.dispatch(&definition.name, &request).await;
        let duration_ms = started.elapsed().as_millis() as u64;
        progress.on_complete(&definition.name, outcome.is_ok());

        let result = match outcome {
            Ok(response) if definition.is_list() => self.filter_list(definition, call, response),
            Ok(response) => ToolResult::success(&definition.name, response),
            Err(e) => {
                warn!("Tool {} failed after {}ms: {}", definition.name, duration_ms, e);
                ToolResult::failure(&definition.name, e.into())
            }
        }
        .with_duration(duration_ms);

        if definition.is_gated() {
            self.audit_outcome(definition, call, &result);
        }
        result
    }

    fn resolve(&self, call: &ToolCall) -> Result<&ToolDefinition, ToolError> {
        let definition = self
            .spec
            .get_resolved(&call.tool_name)
            .ok_or_else(|| ToolError::unknown_tool(&call.tool_name))?;
        if definition.name != call.tool_name {
            debug!("Resolved alias '{}' -> '{}'", call.tool_name, definition.name);
        }
        Ok(definition)
    }

    /// Gate, structural check, then the operation's composite validator.
    fn admit(&self, definition: &ToolDefinition, call: &ToolCall) -> Result<(), ToolError> {
        require_confirmation(call.confirmation(), &definition.classifications)
            .map_err(|e| ToolError::confirmation_required(&e))?;

        DefaultToolValidator
            .validate(call, definition)
            .map_err(|e| ToolError::from_validation(&e))?;

        if let Some(validator) = &definition.validator {
            validator
                .validate(call)
                .map_err(|e| ToolError::from_validation(&e))?;
        }
        Ok(())
    }

    async fn dispatch(&self, operation: &str, request: &ToolCall) -> Result<Value, GatewayError> {
        match self.behavior.timeout {
            Some(limit) => tokio::time::timeout(limit, self.gateway.dispatch(operation, request))
                .await
                .map_err(|_| GatewayError::Timeout)?,
            None => self.gateway.dispatch(operation, request).await,
        }
    }

    /// Apply the call's filter arguments to a list response.
    ///
    /// Accepts a bare array or a paginated `{"data": [...]}` envelope.
    fn filter_list(&self, definition: &ToolDefinition, call: &ToolCall, response: Value) -> ToolResult {
        let items = match response {
            Value::Array(items) => items,
            Value::Object(mut envelope) => match envelope.remove("data") {
                Some(Value::Array(items)) => items,
                _ => {
                    return ToolResult::failure(
                        &definition.name,
                        ToolError::execution_failed("provider returned an object without a data list"),
                    );
                }
            },
            other => {
                return ToolResult::failure(
                    &definition.name,
                    ToolError::execution_failed(format!("expected a list, got {}", other)),
                );
            }
        };

        let filters = definition.filter_set(call);
        let total = items.len();
        let kept = filters.apply(items);
        debug!(
            "{}: {} filter(s) kept {} of {} item(s)",
            definition.name,
            filters.len(),
            kept.len(),
            total
        );
        let returned = kept.len();
        ToolResult::success(&definition.name, Value::Array(kept)).with_counts(total, returned)
    }

    fn audit_rejection(&self, definition: &ToolDefinition, call: &ToolCall, error: &ToolError) {
        let event_type = if error.is_confirmation_required() {
            "gate_refused"
        } else {
            "validation_rejected"
        };
        self.audit.log(AuditEvent::new(
            event_type,
            json!({
                "tool": definition.name,
                "classifications": definition.classifications,
                "arguments": redacted_arguments(call),
                "code": error.code,
                "details": error.details,
                "message": error.message,
            }),
        ));
    }

    fn audit_outcome(&self, definition: &ToolDefinition, call: &ToolCall, result: &ToolResult) {
        let (event_type, error) = match result.error() {
            None => ("operation_completed", Value::Null),
            Some(e) => ("operation_failed", json!({"code": e.code, "message": e.message})),
        };
        self.audit.log(AuditEvent::new(
            event_type,
            json!({
                "tool": definition.name,
                "classifications": definition.classifications,
                "arguments": redacted_arguments(call),
                "duration_ms": result.metadata.duration_ms,
                "error": error,
            }),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use cloudops_domain::filter::MatchMode;
    use cloudops_domain::gate::OperationClassification::*;
    use cloudops_domain::operation::{compute, network, storage};
    use cloudops_domain::tool::entities::ToolParameter;
    use std::sync::Mutex;
    use std::time::Duration;

    // ==================== Test doubles ====================

    struct MockGateway {
        response: Value,
        delay: Option<Duration>,
        calls: Mutex<Vec<(String, ToolCall)>>,
    }

    impl MockGateway {
        fn returning(response: Value) -> Self {
            Self {
                response,
                delay: None,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn slow(delay: Duration) -> Self {
            Self {
                delay: Some(delay),
                ..Self::returning(json!({}))
            }
        }

        fn dispatched(&self) -> Vec<(String, ToolCall)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CloudGateway for MockGateway {
        async fn dispatch(&self, operation: &str, call: &ToolCall) -> Result<Value, GatewayError> {
            self.calls
                .lock()
                .unwrap()
                .push((operation.to_string(), call.clone()));
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            Ok(self.response.clone())
        }
    }

    #[derive(Default)]
    struct RecordingAudit {
        events: Mutex<Vec<AuditEvent>>,
    }

    impl AuditLogger for RecordingAudit {
        fn log(&self, event: AuditEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    impl RecordingAudit {
        fn types(&self) -> Vec<&'static str> {
            self.events.lock().unwrap().iter().map(|e| e.event_type).collect()
        }
    }

    fn test_spec() -> Arc<ToolSpec> {
        let spec = ToolSpec::new()
            .register(
                ToolDefinition::new("list_instances", "List instances")
                    .with_filter("label", "label", MatchMode::Contains)
                    .with_filter("region", "region", MatchMode::Exact),
            )
            .register(
                ToolDefinition::new("delete_volume", "Delete a volume")
                    .with_parameter(
                        ToolParameter::new("volume_id", "Volume ID", true).with_type("integer"),
                    )
                    .with_classification(Irreversible)
                    .with_validator(compute::DELETE_VOLUME),
            )
            .register(
                ToolDefinition::new("create_volume", "Create a volume")
                    .with_parameter(ToolParameter::new("label", "Label", true))
                    .with_parameter(ToolParameter::new("size", "Size in GB", true).with_type("integer"))
                    .with_classification(Billable)
                    .with_validator(compute::CREATE_VOLUME),
            )
            .register(
                ToolDefinition::new("create_access_key", "Create an access key")
                    .with_parameter(ToolParameter::new("label", "Label", true))
                    .with_parameter(
                        ToolParameter::new("bucket_access", "Grants", false).with_type("array"),
                    )
                    .with_classification(Billable)
                    .with_classification(SecretExposure)
                    .with_validator(storage::CREATE_ACCESS_KEY),
            )
            .register(
                ToolDefinition::new("create_load_balancer", "Create a load balancer")
                    .with_parameter(ToolParameter::new("region", "Region", true))
                    .with_parameter(ToolParameter::new("label", "Label", false))
                    .with_classification(Billable)
                    .with_validator(network::CREATE_LOAD_BALANCER),
            )
            .register_alias("create_nodebalancer", "create_load_balancer");
        Arc::new(spec)
    }

    fn use_case(gateway: Arc<MockGateway>) -> InvokeToolUseCase<MockGateway> {
        InvokeToolUseCase::new(gateway, test_spec())
    }

    // ==================== Gate ====================

    #[tokio::test]
    async fn test_unconfirmed_delete_never_dispatches() {
        let gateway = Arc::new(MockGateway::returning(json!({})));
        let audit = Arc::new(RecordingAudit::default());
        let uc = use_case(gateway.clone()).with_audit_logger(audit.clone());

        let call = ToolCall::new("delete_volume").with_arg("volume_id", 42);
        let result = uc.execute(&call).await;

        assert!(!result.is_success());
        assert_eq!(result.error().unwrap().code, ToolError::CONFIRMATION_REQUIRED);
        assert!(gateway.dispatched().is_empty());
        assert_eq!(audit.types(), vec!["gate_refused"]);
    }

    #[tokio::test]
    async fn test_access_key_warning_mentions_secret() {
        let gateway = Arc::new(MockGateway::returning(json!({})));
        let uc = use_case(gateway.clone());

        let call = ToolCall::new("create_access_key")
            .with_arg("label", "ci")
            .with_arg("confirm", false);
        let result = uc.execute(&call).await;

        let error = result.error().unwrap();
        assert!(error.message.contains("confirm=true"));
        assert!(error.message.contains("secret_key"));
        assert_eq!(error.details.as_deref(), Some("billable,secret_exposure"));
        assert!(gateway.dispatched().is_empty());
    }

    #[tokio::test]
    async fn test_gate_runs_before_validation() {
        let gateway = Arc::new(MockGateway::returning(json!({})));
        let uc = use_case(gateway);

        let call = ToolCall::new("create_volume")
            .with_arg("label", "data-01")
            .with_arg("size", 5);
        let result = uc.execute(&call).await;
        assert_eq!(result.error().unwrap().code, ToolError::CONFIRMATION_REQUIRED);
    }

    // ==================== Validation ====================

    #[tokio::test]
    async fn test_confirmed_invalid_call_is_rejected() {
        let gateway = Arc::new(MockGateway::returning(json!({})));
        let audit = Arc::new(RecordingAudit::default());
        let uc = use_case(gateway.clone()).with_audit_logger(audit.clone());

        let call = ToolCall::new("create_volume")
            .with_arg("label", "data-01")
            .with_arg("size", 5)
            .with_arg("confirm", true);
        let result = uc.execute(&call).await;

        let error = result.error().unwrap();
        assert_eq!(error.code, ToolError::INVALID_ARGUMENT);
        assert_eq!(error.details.as_deref(), Some("too_small"));
        assert!(gateway.dispatched().is_empty());
        assert_eq!(audit.types(), vec!["validation_rejected"]);
    }

    #[tokio::test]
    async fn test_missing_required_parameter() {
        let gateway = Arc::new(MockGateway::returning(json!({})));
        let uc = use_case(gateway);

        let call = ToolCall::new("delete_volume").with_arg("confirm", true);
        let error = uc.execute(&call).await.error().cloned().unwrap();
        assert_eq!(error.code, ToolError::INVALID_ARGUMENT);
        assert_eq!(error.message, "volume_id is required");
    }

    #[tokio::test]
    async fn test_grant_errors_are_indexed() {
        let gateway = Arc::new(MockGateway::returning(json!({})));
        let uc = use_case(gateway);

        let call = ToolCall::new("create_access_key")
            .with_arg("label", "ci")
            .with_arg(
                "bucket_access",
                json!([{"bucket_name": "logs", "region": "us-east", "permissions": "admin"}]),
            )
            .with_arg("confirm", true);
        let error = uc.execute(&call).await.error().cloned().unwrap();
        assert!(error.message.starts_with("entry 0: "));
    }

    // ==================== Dispatch ====================

    #[tokio::test]
    async fn test_confirmed_delete_dispatches_without_confirm() {
        let gateway = Arc::new(MockGateway::returning(json!({})));
        let audit = Arc::new(RecordingAudit::default());
        let uc = use_case(gateway.clone()).with_audit_logger(audit.clone());

        let call = ToolCall::new("delete_volume")
            .with_arg("volume_id", 42)
            .with_arg("confirm", true);
        let result = uc.execute(&call).await;

        assert!(result.is_success());
        assert!(result.metadata.duration_ms.is_some());
        let dispatched = gateway.dispatched();
        assert_eq!(dispatched.len(), 1);
        assert_eq!(dispatched[0].0, "delete_volume");
        assert!(!dispatched[0].1.arguments.contains_key("confirm"));
        assert_eq!(audit.types(), vec!["operation_completed"]);
    }

    #[tokio::test]
    async fn test_alias_dispatches_canonical_operation() {
        let gateway = Arc::new(MockGateway::returning(json!({"id": 7})));
        let uc = use_case(gateway.clone());

        let call = ToolCall::new("create_nodebalancer")
            .with_arg("region", "us-east")
            .with_arg("confirm", true);
        let result = uc.execute(&call).await;

        assert!(result.is_success());
        assert_eq!(result.tool_name, "create_load_balancer");
        assert_eq!(gateway.dispatched()[0].0, "create_load_balancer");
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let gateway = Arc::new(MockGateway::returning(json!({})));
        let uc = use_case(gateway.clone());

        let result = uc.execute(&ToolCall::new("format_disk")).await;
        assert_eq!(result.error().unwrap().code, ToolError::NOT_FOUND);
        assert!(gateway.dispatched().is_empty());
    }

    #[tokio::test]
    async fn test_timeout() {
        let gateway = Arc::new(MockGateway::slow(Duration::from_millis(200)));
        let uc = use_case(gateway).with_behavior(BehaviorConfig {
            timeout: Some(Duration::from_millis(10)),
        });

        let call = ToolCall::new("delete_volume")
            .with_arg("volume_id", 42)
            .with_arg("confirm", true);
        let result = uc.execute(&call).await;
        assert_eq!(result.error().unwrap().code, ToolError::TIMEOUT);
    }

    // ==================== List filtering ====================

    fn instances() -> Value {
        json!([
            {"label": "web-prod-1", "region": "us-east"},
            {"label": "web-dev-1", "region": "us-east"},
            {"label": "db-staging", "region": "eu-west"},
            {"label": "db-PROD-2", "region": "eu-west"},
        ])
    }

    #[tokio::test]
    async fn test_list_filter_contains_case_insensitive() {
        let gateway = Arc::new(MockGateway::returning(instances()));
        let uc = use_case(gateway);

        let call = ToolCall::new("list_instances").with_arg("label", "prod");
        let result = uc.execute(&call).await;

        let labels: Vec<&str> = result
            .output()
            .unwrap()
            .as_array()
            .unwrap()
            .iter()
            .map(|i| i["label"].as_str().unwrap())
            .collect();
        assert_eq!(labels, vec!["web-prod-1", "db-PROD-2"]);
        assert_eq!(result.metadata.total_items, Some(4));
        assert_eq!(result.metadata.returned_items, Some(2));
    }

    #[tokio::test]
    async fn test_list_filters_combine_with_and() {
        let gateway = Arc::new(MockGateway::returning(json!({"data": instances(), "page": 1})));
        let uc = use_case(gateway);

        let call = ToolCall::new("list_instances")
            .with_arg("label", "db")
            .with_arg("region", "EU-WEST")
            .with_arg("page_size", 100);
        let result = uc.execute(&call).await;

        assert!(result.is_success());
        assert_eq!(result.metadata.returned_items, Some(2));
    }

    #[tokio::test]
    async fn test_list_without_filters_returns_everything() {
        let gateway = Arc::new(MockGateway::returning(instances()));
        let uc = use_case(gateway);

        let result = uc.execute(&ToolCall::new("list_instances")).await;
        assert_eq!(result.output().unwrap().as_array().unwrap().len(), 4);
    }

    // ==================== Check ====================

    #[tokio::test]
    async fn test_check_never_dispatches() {
        let gateway = Arc::new(MockGateway::returning(json!({})));
        let uc = use_case(gateway.clone());

        let ok = ToolCall::new("delete_volume")
            .with_arg("volume_id", 42)
            .with_arg("confirm", true);
        let result = uc.check(&ok);
        assert!(result.is_success());
        assert!(result.metadata.dry_run);

        let unconfirmed = ToolCall::new("delete_volume").with_arg("volume_id", 42);
        assert!(!uc.check(&unconfirmed).is_success());
        assert!(gateway.dispatched().is_empty());
    }
}
