// Twilio Tool
// SMS and WhatsApp messaging actions over the Twilio REST API

mod api;
mod types;

pub use api::{API_BASE, WHATSAPP_PREFIX};
pub use types::{MessageResponse, SendSmsRequest, SendWhatsAppMessageRequest};

use async_trait::async_trait;
use reqwest::Client;
use schemars::{schema_for, Schema};
use serde_json::Value;

use self::types::MessagePayload;
use super::{parse_request, Action, BoxedAction, Tool};
use crate::error::ActionResult;
use crate::models::auth::AuthContext;
use crate::models::outcome::ActionOutcome;

/// Send a text message through the Twilio Messages endpoint.
pub struct SendSms {
    client: Client,
    base_url: String,
}

impl SendSms {
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

impl Default for SendSms {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Action for SendSms {
    fn display_name(&self) -> &str {
        "Send SMS"
    }

    fn request_schema(&self) -> Schema {
        schema_for!(SendSmsRequest)
    }

    fn response_schema(&self) -> Schema {
        schema_for!(MessageResponse)
    }

    async fn execute(&self, request: Value, auth: &AuthContext) -> ActionResult<ActionOutcome> {
        let request: SendSmsRequest = parse_request(request)?;
        let credential = auth.basic_credential(&request.account_sid)?;
        let payload = MessagePayload {
            from: request.from_number.clone(),
            to: request.to_number.clone(),
            body: request.body.clone(),
        };
        let response = api::send_message(
            &self.client,
            &self.base_url,
            &credential,
            &request.account_sid,
            &payload,
        )
        .await
        .unwrap_or_else(|err| {
            log::warn!("Twilio SMS send failed: {}", err);
            MessageResponse::failed(Value::String(err.to_string()))
        });
        ActionOutcome::from_response(&response)
    }
}

/// Send a WhatsApp message through the Twilio Messages endpoint.
///
/// Shares the SMS endpoint; recipient and sender numbers carry the
/// `whatsapp:` channel tag.
pub struct SendWhatsAppMessage {
    client: Client,
    base_url: String,
}

impl SendWhatsAppMessage {
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

impl Default for SendWhatsAppMessage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Action for SendWhatsAppMessage {
    fn display_name(&self) -> &str {
        "Send WhatsApp Message"
    }

    fn request_schema(&self) -> Schema {
        schema_for!(SendWhatsAppMessageRequest)
    }

    fn response_schema(&self) -> Schema {
        schema_for!(MessageResponse)
    }

    async fn execute(&self, request: Value, auth: &AuthContext) -> ActionResult<ActionOutcome> {
        let request: SendWhatsAppMessageRequest = parse_request(request)?;
        let credential = auth.basic_credential(&request.account_sid)?;
        let payload = MessagePayload {
            from: api::ensure_whatsapp_prefix(&request.from_number),
            to: api::ensure_whatsapp_prefix(&request.to_number),
            body: request.body.clone(),
        };
        let response = api::send_message(
            &self.client,
            &self.base_url,
            &credential,
            &request.account_sid,
            &payload,
        )
        .await
        .unwrap_or_else(|err| {
            log::warn!("Twilio WhatsApp send failed: {}", err);
            MessageResponse::failed(Value::String(err.to_string()))
        });
        ActionOutcome::from_response(&response)
    }
}

/// Twilio provider tool.
pub struct Twilio {
    base_url: String,
}

impl Twilio {
    pub fn new() -> Self {
        Self::with_base_url(API_BASE)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for Twilio {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for Twilio {
    fn name(&self) -> &str {
        "twilio"
    }

    fn actions(&self) -> Vec<BoxedAction> {
        vec![
            Box::new(SendSms::with_base_url(self.base_url.clone())),
            Box::new(SendWhatsAppMessage::with_base_url(self.base_url.clone())),
        ]
    }
}
