// TinyURL API Types
// Request and response structures for the TinyURL actions

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::outcome::ActionResponse;

/// Request to shorten a URL.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateUrlRequest {
    /// URL to shorten
    pub url: String,
    /// Custom domain to use
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Description of the shortened URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Request to update the settings of a shortened URL.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UpdateUrlRequest {
    /// Custom domain to use
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// New custom domain to use
    pub new_domain: String,
    /// New description of the shortened URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_description: Option<String>,
    /// Whether to enable statistics for the shortened URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_stats: Option<bool>,
}

/// Request to point a shortened URL at a new long URL.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UpdateLongUrlRequest {
    /// Custom domain to use
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// New URL to shorten
    pub url: String,
}

/// Identifies a shortened URL by alias, optionally on a custom domain.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AliasRequest {
    /// Custom domain the alias lives on, defaults to tinyurl.com
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Alias of the shortened URL
    pub alias: String,
}

/// Response for actions that return a shortened URL.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ShortUrlResponse {
    /// Whether the request was successful
    pub success: bool,
    /// Shortened URL
    pub short_url: Option<String>,
    /// Data returned from the API
    pub data: Option<Value>,
}

impl ShortUrlResponse {
    pub(crate) fn failed(diagnostic: Value) -> Self {
        Self {
            success: false,
            short_url: None,
            data: Some(diagnostic),
        }
    }
}

impl ActionResponse for ShortUrlResponse {
    fn succeeded(&self) -> bool {
        self.success
    }
}

/// Response for alias lookup and delete actions.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AliasResponse {
    /// Whether the request was successful
    pub success: bool,
    /// Data returned from the API
    pub data: Option<Value>,
}

impl AliasResponse {
    pub(crate) fn failed(diagnostic: Value) -> Self {
        Self {
            success: false,
            data: Some(diagnostic),
        }
    }
}

impl ActionResponse for AliasResponse {
    fn succeeded(&self) -> bool {
        self.success
    }
}
