// TinyURL API Operations
// Low-level calls shared by the TinyURL actions

use reqwest::{Client, Method};
use serde::Serialize;
use serde_json::Value;

use super::types::{
    AliasRequest, AliasResponse, CreateUrlRequest, ShortUrlResponse, UpdateLongUrlRequest,
    UpdateUrlRequest,
};
use crate::error::ActionResult;
use crate::models::auth::BearerCredential;
use crate::services::{decode_json_body, unwrap_data};

/// TinyURL API base URL
pub const API_BASE: &str = "https://api.tinyurl.com";

/// Alias domain used when the caller does not supply one
pub const DEFAULT_DOMAIN: &str = "tinyurl.com";

/// POST a JSON payload to one of the shortener endpoints and normalize the
/// response into a `ShortUrlResponse`.
async fn shorten_call<T: Serialize>(
    client: &Client,
    base_url: &str,
    credential: &BearerCredential,
    path: &str,
    payload: &T,
) -> ActionResult<ShortUrlResponse> {
    let url = format!("{}{}", base_url, path);

    let response = credential
        .apply(client.post(&url))
        .json(payload)
        .send()
        .await?;

    let status = response.status();
    let body = decode_json_body(response).await;

    if !status.is_success() {
        log::warn!("TinyURL {} returned status {}", path, status);
        return Ok(ShortUrlResponse::failed(body));
    }

    let data = unwrap_data(body);
    let short_url = data
        .get("tiny_url")
        .and_then(Value::as_str)
        .map(str::to_string);

    Ok(ShortUrlResponse {
        success: true,
        short_url,
        data: Some(data),
    })
}

pub(crate) async fn create_url(
    client: &Client,
    base_url: &str,
    credential: &BearerCredential,
    request: &CreateUrlRequest,
) -> ActionResult<ShortUrlResponse> {
    shorten_call(client, base_url, credential, "/create", request).await
}

pub(crate) async fn update_url(
    client: &Client,
    base_url: &str,
    credential: &BearerCredential,
    request: &UpdateUrlRequest,
) -> ActionResult<ShortUrlResponse> {
    shorten_call(client, base_url, credential, "/update", request).await
}

pub(crate) async fn update_long_url(
    client: &Client,
    base_url: &str,
    credential: &BearerCredential,
    request: &UpdateLongUrlRequest,
) -> ActionResult<ShortUrlResponse> {
    shorten_call(client, base_url, credential, "/change", request).await
}

/// GET or DELETE an alias and normalize the response.
pub(crate) async fn alias_call(
    client: &Client,
    base_url: &str,
    credential: &BearerCredential,
    method: Method,
    request: &AliasRequest,
) -> ActionResult<AliasResponse> {
    let domain = request.domain.as_deref().unwrap_or(DEFAULT_DOMAIN);
    let url = format!("{}/alias/{}/{}", base_url, domain, request.alias);

    let response = credential
        .apply(client.request(method.clone(), &url))
        .send()
        .await?;

    let status = response.status();
    let body = decode_json_body(response).await;

    if !status.is_success() {
        log::warn!("TinyURL {} alias call returned status {}", method, status);
        return Ok(AliasResponse::failed(body));
    }

    Ok(AliasResponse {
        success: true,
        data: Some(unwrap_data(body)),
    })
}
