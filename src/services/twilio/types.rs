// Twilio API Types
// Request and response structures for the Twilio messaging actions

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::outcome::ActionResponse;

/// Request to send an SMS message.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SendSmsRequest {
    /// The Twilio account SID to use for sending the SMS, in the format
    /// ACXXXXXXXX
    pub account_sid: String,
    /// The phone number to send the SMS to, in E.164 format
    pub to_number: String,
    /// The sender's Twilio phone number, alphanumeric sender ID, short code,
    /// or channel address hosted within the sending account
    pub from_number: String,
    /// The body of the message, at most 1600 characters
    pub body: String,
}

/// Request to send a WhatsApp message.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SendWhatsAppMessageRequest {
    /// The Twilio account SID to use for sending the message, in the format
    /// ACXXXXXXXX
    pub account_sid: String,
    /// The phone number to send the WhatsApp message to, in E.164 format
    pub to_number: String,
    /// The sender's Twilio phone number or channel address hosted within the
    /// sending account
    pub from_number: String,
    /// The body of the message, at most 1600 characters
    pub body: String,
}

/// Form-encoded body of the Messages endpoint.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct MessagePayload {
    #[serde(rename = "From")]
    pub from: String,
    #[serde(rename = "To")]
    pub to: String,
    #[serde(rename = "Body")]
    pub body: String,
}

/// Normalized response of the messaging actions.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MessageResponse {
    /// Whether the message was accepted by the API
    pub success: bool,
    /// The decoded API response, or a stringified error
    pub response: Option<Value>,
}

impl MessageResponse {
    pub(crate) fn failed(diagnostic: Value) -> Self {
        Self {
            success: false,
            response: Some(diagnostic),
        }
    }
}

impl ActionResponse for MessageResponse {
    fn succeeded(&self) -> bool {
        self.success
    }
}
