//! REST adapter for the provider API.

use super::routes::{HttpMethod, PreparedRequest, prepare};
use async_trait::async_trait;
use cloudops_application::ports::cloud_gateway::{CloudGateway, GatewayError};
use cloudops_domain::tool::entities::ToolCall;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Largest page the API hands out.
const PAGE_SIZE: u32 = 500;

/// Upper bound on pages fetched for one list call.
const MAX_PAGES: u32 = 50;

/// Sends validated operations to the provider's REST API.
///
/// List operations follow pagination and return one merged `data` array.
pub struct RestCloudGateway {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl RestCloudGateway {
    /// Build a gateway for `base_url`. Requests fail with
    /// [`GatewayError::MissingToken`] when no token is supplied.
    pub fn new(
        base_url: impl Into<String>,
        token: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, GatewayError> {
        let mut builder = Client::builder().user_agent(concat!("cloudops/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| GatewayError::ConnectionError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.trim().is_empty()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, token: &str, method: HttpMethod, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = match method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url),
            HttpMethod::Put => self.client.put(url),
            HttpMethod::Delete => self.client.delete(url),
        };
        builder.bearer_auth(token)
    }

    async fn send(&self, token: &str, request: &PreparedRequest, page: Option<u32>) -> Result<Value, GatewayError> {
        let mut builder = self.request(token, request.method, &request.path);
        if let Some(page) = page {
            builder = builder.query(&[("page", page), ("page_size", PAGE_SIZE)]);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        debug!("{} {}", request.method.as_str(), request.path);
        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status();
        let text = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            return Err(status_error(status, &request.path, &text));
        }
        if text.trim().is_empty() {
            return Ok(Value::Object(Default::default()));
        }
        serde_json::from_str(&text).map_err(|e| GatewayError::InvalidResponse(e.to_string()))
    }

    /// Fetch every page of a list endpoint.
    async fn fetch_all(&self, token: &str, request: &PreparedRequest) -> Result<Value, GatewayError> {
        let mut items = Vec::new();
        let mut page = 1;
        loop {
            let mut body = self.send(token, request, Some(page)).await?;
            match body.get_mut("data").map(Value::take) {
                Some(Value::Array(data)) => items.extend(data),
                _ => {
                    return Err(GatewayError::InvalidResponse(format!(
                        "{} returned no data list",
                        request.path
                    )));
                }
            }

            let pages = body.get("pages").and_then(Value::as_u64).unwrap_or(1);
            if u64::from(page) >= pages {
                break;
            }
            if page >= MAX_PAGES {
                warn!("{}: stopping after {} pages of {}", request.path, MAX_PAGES, pages);
                break;
            }
            page += 1;
        }
        Ok(Value::Array(items))
    }
}

#[async_trait]
impl CloudGateway for RestCloudGateway {
    async fn dispatch(&self, operation: &str, call: &ToolCall) -> Result<Value, GatewayError> {
        let request = prepare(operation, call)?;
        let token = self.token.as_deref().ok_or(GatewayError::MissingToken)?;

        if request.method == HttpMethod::Get && operation.starts_with("list_") {
            self.fetch_all(token, &request).await
        } else {
            self.send(token, &request, None).await
        }
    }
}

fn transport_error(err: reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        GatewayError::Timeout
    } else {
        GatewayError::ConnectionError(err.to_string())
    }
}

fn status_error(status: StatusCode, path: &str, body: &str) -> GatewayError {
    let message = provider_error_message(body)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown").to_string());
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => GatewayError::Unauthorized(message),
        StatusCode::NOT_FOUND => GatewayError::NotFound(path.to_string()),
        _ => GatewayError::RequestFailed {
            status: status.as_u16(),
            message,
        },
    }
}

/// Join the `errors[].reason` entries of an API error body, prefixing
/// each with its field when the API names one.
pub(crate) fn provider_error_message(body: &str) -> Option<String> {
    let parsed: Value = serde_json::from_str(body).ok()?;
    let reasons: Vec<String> = parsed
        .get("errors")?
        .as_array()?
        .iter()
        .filter_map(|e| {
            let reason = e.get("reason")?.as_str()?;
            Some(match e.get("field").and_then(Value::as_str) {
                Some(field) => format!("{}: {}", field, reason),
                None => reason.to_string(),
            })
        })
        .collect();
    if reasons.is_empty() {
        None
    } else {
        Some(reasons.join("; "))
    }
}
