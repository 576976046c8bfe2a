// Action Services Module
// Action and Tool contracts plus the static provider registry

pub mod tinyurl;
pub mod twilio;
pub mod vercel;

use async_trait::async_trait;
use schemars::Schema;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub use tinyurl::TinyUrl;
pub use twilio::Twilio;
pub use vercel::Vercel;

use crate::error::{ActionError, ActionResult};
use crate::models::auth::AuthContext;
use crate::models::outcome::ActionOutcome;

/// One externally invocable operation mapping to exactly one remote REST
/// call.
///
/// Implementations validate the request value against their request schema,
/// perform the call, and normalize the response. Transport and HTTP failures
/// never escape `execute`; only request-shape and credential failures are
/// returned as errors, and those are raised before any network traffic.
#[async_trait]
pub trait Action: Send + Sync {
    /// Human-readable name shown by the embedding runtime.
    fn display_name(&self) -> &str;

    /// Classification tags, empty for most actions.
    fn tags(&self) -> &[&str] {
        &[]
    }

    /// JSON Schema describing the request value.
    fn request_schema(&self) -> Schema;

    /// JSON Schema describing the normalized response payload.
    fn response_schema(&self) -> Schema;

    /// Perform the remote call and return the normalized outcome.
    async fn execute(&self, request: Value, auth: &AuthContext) -> ActionResult<ActionOutcome>;
}

/// Boxed action type
pub type BoxedAction = Box<dyn Action>;

/// Event trigger placeholder. No provider implements triggers.
pub enum Trigger {}

/// A named group of related actions for one external provider.
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;

    /// Flat list of the provider's actions.
    fn actions(&self) -> Vec<BoxedAction>;

    /// Event triggers exposed by the provider. Always empty.
    fn triggers(&self) -> Vec<Trigger> {
        Vec::new()
    }
}

/// Boxed tool type
pub type BoxedTool = Box<dyn Tool>;

/// Enumerate every provider tool for discovery by an embedding runtime.
pub fn registry() -> Vec<BoxedTool> {
    vec![
        Box::new(TinyUrl::new()),
        Box::new(Twilio::new()),
        Box::new(Vercel::new()),
    ]
}

/// Deserialize an inbound request value into the action's typed request.
pub(crate) fn parse_request<T: DeserializeOwned>(request: Value) -> ActionResult<T> {
    serde_json::from_value(request).map_err(|err| ActionError::InvalidRequest(err.to_string()))
}

/// Decode a response body as JSON, falling back to the raw text when the
/// body does not parse.
pub(crate) async fn decode_json_body(response: reqwest::Response) -> Value {
    let text = response.text().await.unwrap_or_default();
    serde_json::from_str(&text).unwrap_or(Value::String(text))
}

/// Extract the conventional `data` payload when present, else the whole
/// body.
pub(crate) fn unwrap_data(body: Value) -> Value {
    match body {
        Value::Object(mut map) => match map.remove("data") {
            Some(data) => data,
            None => Value::Object(map),
        },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct SampleRequest {
        url: String,
    }

    #[test]
    fn test_registry_lists_every_tool() {
        let tools = registry();
        let names: Vec<&str> = tools.iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["tinyurl", "twilio", "vercel"]);
    }

    #[test]
    fn test_registry_action_counts() {
        let tools = registry();
        let counts: Vec<usize> = tools.iter().map(|t| t.actions().len()).collect();
        assert_eq!(counts, vec![5, 2, 10]);
    }

    #[test]
    fn test_no_tool_exposes_triggers() {
        for tool in registry() {
            assert!(tool.triggers().is_empty());
        }
    }

    #[test]
    fn test_parse_request_rejects_missing_mandatory_field() {
        let err = parse_request::<SampleRequest>(json!({})).unwrap_err();
        assert!(matches!(err, ActionError::InvalidRequest(_)));
    }

    #[test]
    fn test_parse_request_accepts_valid_value() {
        let request: SampleRequest =
            parse_request(json!({"url": "https://example.com"})).unwrap();
        assert_eq!(request.url, "https://example.com");
    }

    #[test]
    fn test_unwrap_data_prefers_data_key() {
        let body = json!({"data": {"tiny_url": "https://tiny.url/abc"}, "code": 0});
        assert_eq!(
            unwrap_data(body),
            json!({"tiny_url": "https://tiny.url/abc"})
        );
    }

    #[test]
    fn test_unwrap_data_falls_back_to_whole_body() {
        let body = json!({"code": 0, "errors": []});
        assert_eq!(unwrap_data(body), json!({"code": 0, "errors": []}));
    }
}
