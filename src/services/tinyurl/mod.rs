// TinyURL Tool
// URL-shortener actions over the TinyURL REST API

mod api;
mod types;

pub use api::{API_BASE, DEFAULT_DOMAIN};
pub use types::{
    AliasRequest, AliasResponse, CreateUrlRequest, ShortUrlResponse, UpdateLongUrlRequest,
    UpdateUrlRequest,
};

use async_trait::async_trait;
use reqwest::{Client, Method};
use schemars::{schema_for, Schema};
use serde_json::Value;

use super::{parse_request, Action, BoxedAction, Tool};
use crate::error::ActionResult;
use crate::models::auth::AuthContext;
use crate::models::outcome::ActionOutcome;

/// Create a shortened URL.
pub struct CreateUrl {
    client: Client,
    base_url: String,
}

impl CreateUrl {
    pub fn new() -> Self {
        Self::with_base_url(API_BASE)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for CreateUrl {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Action for CreateUrl {
    fn display_name(&self) -> &str {
        "Create URL"
    }

    fn request_schema(&self) -> Schema {
        schema_for!(CreateUrlRequest)
    }

    fn response_schema(&self) -> Schema {
        schema_for!(ShortUrlResponse)
    }

    async fn execute(&self, request: Value, auth: &AuthContext) -> ActionResult<ActionOutcome> {
        let request: CreateUrlRequest = parse_request(request)?;
        let credential = auth.bearer_credential()?;
        let response = api::create_url(&self.client, &self.base_url, &credential, &request)
            .await
            .unwrap_or_else(|err| {
                log::warn!("TinyURL create URL call failed: {}", err);
                ShortUrlResponse::failed(Value::String(err.to_string()))
            });
        ActionOutcome::from_response(&response)
    }
}

/// Update the settings of a shortened URL.
pub struct UpdateUrl {
    client: Client,
    base_url: String,
}

impl UpdateUrl {
    pub fn new() -> Self {
        Self::with_base_url(API_BASE)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for UpdateUrl {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Action for UpdateUrl {
    fn display_name(&self) -> &str {
        "Update URL"
    }

    fn request_schema(&self) -> Schema {
        schema_for!(UpdateUrlRequest)
    }

    fn response_schema(&self) -> Schema {
        schema_for!(ShortUrlResponse)
    }

    async fn execute(&self, request: Value, auth: &AuthContext) -> ActionResult<ActionOutcome> {
        let request: UpdateUrlRequest = parse_request(request)?;
        let credential = auth.bearer_credential()?;
        let response = api::update_url(&self.client, &self.base_url, &credential, &request)
            .await
            .unwrap_or_else(|err| {
                log::warn!("TinyURL update URL call failed: {}", err);
                ShortUrlResponse::failed(Value::String(err.to_string()))
            });
        ActionOutcome::from_response(&response)
    }
}

/// Point a shortened URL at a new long URL.
pub struct UpdateLongUrl {
    client: Client,
    base_url: String,
}

impl UpdateLongUrl {
    pub fn new() -> Self {
        Self::with_base_url(API_BASE)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for UpdateLongUrl {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Action for UpdateLongUrl {
    fn display_name(&self) -> &str {
        "Update Long URL"
    }

    fn request_schema(&self) -> Schema {
        schema_for!(UpdateLongUrlRequest)
    }

    fn response_schema(&self) -> Schema {
        schema_for!(ShortUrlResponse)
    }

    async fn execute(&self, request: Value, auth: &AuthContext) -> ActionResult<ActionOutcome> {
        let request: UpdateLongUrlRequest = parse_request(request)?;
        let credential = auth.bearer_credential()?;
        let response = api::update_long_url(&self.client, &self.base_url, &credential, &request)
            .await
            .unwrap_or_else(|err| {
                log::warn!("TinyURL update long URL call failed: {}", err);
                ShortUrlResponse::failed(Value::String(err.to_string()))
            });
        ActionOutcome::from_response(&response)
    }
}

/// Get information about a shortened URL.
pub struct GetUrl {
    client: Client,
    base_url: String,
}

impl GetUrl {
    pub fn new() -> Self {
        Self::with_base_url(API_BASE)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for GetUrl {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Action for GetUrl {
    fn display_name(&self) -> &str {
        "Get URL"
    }

    fn request_schema(&self) -> Schema {
        schema_for!(AliasRequest)
    }

    fn response_schema(&self) -> Schema {
        schema_for!(AliasResponse)
    }

    async fn execute(&self, request: Value, auth: &AuthContext) -> ActionResult<ActionOutcome> {
        let request: AliasRequest = parse_request(request)?;
        let credential = auth.bearer_credential()?;
        let response = api::alias_call(
            &self.client,
            &self.base_url,
            &credential,
            Method::GET,
            &request,
        )
        .await
        .unwrap_or_else(|err| {
            log::warn!("TinyURL get URL call failed: {}", err);
            AliasResponse::failed(Value::String(err.to_string()))
        });
        ActionOutcome::from_response(&response)
    }
}

/// Delete a shortened URL.
pub struct DeleteUrl {
    client: Client,
    base_url: String,
}

impl DeleteUrl {
    pub fn new() -> Self {
        Self::with_base_url(API_BASE)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for DeleteUrl {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Action for DeleteUrl {
    fn display_name(&self) -> &str {
        "Delete URL"
    }

    fn request_schema(&self) -> Schema {
        schema_for!(AliasRequest)
    }

    fn response_schema(&self) -> Schema {
        schema_for!(AliasResponse)
    }

    async fn execute(&self, request: Value, auth: &AuthContext) -> ActionResult<ActionOutcome> {
        let request: AliasRequest = parse_request(request)?;
        let credential = auth.bearer_credential()?;
        let response = api::alias_call(
            &self.client,
            &self.base_url,
            &credential,
            Method::DELETE,
            &request,
        )
        .await
        .unwrap_or_else(|err| {
            log::warn!("TinyURL delete URL call failed: {}", err);
            AliasResponse::failed(Value::String(err.to_string()))
        });
        ActionOutcome::from_response(&response)
    }
}

/// TinyURL provider tool.
pub struct TinyUrl {
    base_url: String,
}

impl TinyUrl {
    pub fn new() -> Self {
        Self::with_base_url(API_BASE)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for TinyUrl {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for TinyUrl {
    fn name(&self) -> &str {
        "tinyurl"
    }

    fn actions(&self) -> Vec<BoxedAction> {
        vec![
            Box::new(CreateUrl::with_base_url(self.base_url.clone())),
            Box::new(UpdateUrl::with_base_url(self.base_url.clone())),
            Box::new(UpdateLongUrl::with_base_url(self.base_url.clone())),
            Box::new(GetUrl::with_base_url(self.base_url.clone())),
            Box::new(DeleteUrl::with_base_url(self.base_url.clone())),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_display_names() {
        let tool = TinyUrl::new();
        let names: Vec<String> = tool
            .actions()
            .iter()
            .map(|a| a.display_name().to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "Create URL",
                "Update URL",
                "Update Long URL",
                "Get URL",
                "Delete URL"
            ]
        );
    }

    #[test]
    fn test_request_schema_marks_mandatory_fields() {
        let schema = CreateUrl::new().request_schema();
        let schema = serde_json::to_value(&schema).unwrap();
        let required = schema["required"].as_array().unwrap();
        assert!(required.iter().any(|v| v == "url"));
        assert!(!required.iter().any(|v| v == "domain"));
    }

    #[test]
    fn test_request_schema_carries_field_descriptions() {
        let schema = CreateUrl::new().request_schema();
        let schema = serde_json::to_value(&schema).unwrap();
        assert_eq!(schema["properties"]["url"]["description"], "URL to shorten");
    }

    #[tokio::test]
    async fn test_invalid_request_is_rejected_before_any_call() {
        let action = CreateUrl::new();
        let auth = AuthContext::bearer("tok");
        let result = action.execute(serde_json::json!({}), &auth).await;
        assert!(result.is_err());
    }
}
