// Twilio API Operations
// Low-level call shared by both messaging actions

use reqwest::Client;

use super::types::{MessagePayload, MessageResponse};
use crate::error::ActionResult;
use crate::models::auth::BasicCredential;
use crate::services::decode_json_body;

/// Twilio API base URL
pub const API_BASE: &str = "https://api.twilio.com";

/// Channel tag for WhatsApp recipients and senders
pub const WHATSAPP_PREFIX: &str = "whatsapp:";

/// Prefix a number with the WhatsApp channel tag unless it already carries
/// it.
pub(crate) fn ensure_whatsapp_prefix(number: &str) -> String {
    if number.starts_with(WHATSAPP_PREFIX) {
        number.to_string()
    } else {
        format!("{}{}", WHATSAPP_PREFIX, number)
    }
}

/// POST a message to the account's Messages endpoint. Both SMS and WhatsApp
/// share this endpoint; the channel is carried by the number prefixes.
pub(crate) async fn send_message(
    client: &Client,
    base_url: &str,
    credential: &BasicCredential,
    account_sid: &str,
    payload: &MessagePayload,
) -> ActionResult<MessageResponse> {
    let url = format!(
        "{}/2010-04-01/Accounts/{}/Messages.json",
        base_url, account_sid
    );

    let response = credential
        .apply(client.post(&url))
        .form(payload)
        .send()
        .await?;

    let status = response.status();
    let body = decode_json_body(response).await;

    if !status.is_success() {
        log::warn!("Twilio message send returned status {}", status);
        return Ok(MessageResponse::failed(body));
    }

    Ok(MessageResponse {
        success: true,
        response: Some(body),
    })
}
