// Authorization Context
// Caller-supplied credential bundle and the typed credential holders
// derived from it

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::RequestBuilder;

use crate::error::{ActionError, ActionResult};

/// Caller-supplied authorization context.
///
/// Wraps the HTTP header map handed in by the embedding runtime. Adapters do
/// not consume the raw map; they derive a typed credential holder scoped to
/// their provider.
#[derive(Debug, Clone, Default)]
pub struct AuthContext {
    headers: HeaderMap,
}

impl AuthContext {
    /// Build a context from a caller-supplied header map.
    pub fn from_headers(headers: HeaderMap) -> Self {
        Self { headers }
    }

    /// Convenience constructor for a bearer-token context.
    pub fn bearer(token: &str) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token))
                .unwrap_or_else(|_| HeaderValue::from_static("")),
        );
        Self { headers }
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Derive a bearer credential from the `Authorization` entry.
    ///
    /// Accepts both `Bearer <token>` and a raw token value.
    pub fn bearer_credential(&self) -> ActionResult<BearerCredential> {
        let value = self.headers.get(AUTHORIZATION).ok_or_else(|| {
            ActionError::Credentials("missing Authorization header".to_string())
        })?;
        let value = value.to_str().map_err(|_| {
            ActionError::Credentials("Authorization header is not valid UTF-8".to_string())
        })?;
        let token = strip_bearer_scheme(value);
        if token.is_empty() {
            return Err(ActionError::Credentials(
                "empty bearer token in Authorization header".to_string(),
            ));
        }
        Ok(BearerCredential {
            token: token.to_string(),
        })
    }

    /// Derive HTTP Basic credentials for providers that authenticate with an
    /// account identifier plus the bearer token as the secret.
    pub fn basic_credential(&self, username: &str) -> ActionResult<BasicCredential> {
        let bearer = self.bearer_credential()?;
        Ok(BasicCredential {
            username: username.to_string(),
            secret: bearer.token,
        })
    }
}

fn strip_bearer_scheme(value: &str) -> &str {
    let trimmed = value.trim();
    match trimmed.split_once(' ') {
        Some((scheme, rest)) if scheme.eq_ignore_ascii_case("bearer") => rest.trim(),
        _ => trimmed,
    }
}

/// Bearer-token credential holder.
#[derive(Debug, Clone)]
pub struct BearerCredential {
    token: String,
}

impl BearerCredential {
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.bearer_auth(&self.token)
    }
}

/// HTTP Basic credential holder.
#[derive(Debug, Clone)]
pub struct BasicCredential {
    username: String,
    secret: String,
}

impl BasicCredential {
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.basic_auth(&self.username, Some(&self.secret))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_credential_from_prefixed_value() {
        let auth = AuthContext::bearer("tok_123");
        let credential = auth.bearer_credential().unwrap();
        assert_eq!(credential.token(), "tok_123");
    }

    #[test]
    fn test_bearer_credential_from_raw_token() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("tok_456"));
        let auth = AuthContext::from_headers(headers);
        let credential = auth.bearer_credential().unwrap();
        assert_eq!(credential.token(), "tok_456");
    }

    #[test]
    fn test_bearer_scheme_is_case_insensitive() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("bearer tok_789"));
        let auth = AuthContext::from_headers(headers);
        let credential = auth.bearer_credential().unwrap();
        assert_eq!(credential.token(), "tok_789");
    }

    #[test]
    fn test_missing_authorization_header() {
        let auth = AuthContext::from_headers(HeaderMap::new());
        assert!(auth.bearer_credential().is_err());
    }

    #[test]
    fn test_basic_credential_splits_token_out() {
        let auth = AuthContext::bearer("secret_token");
        let credential = auth.basic_credential("AC123").unwrap();
        assert_eq!(credential.username(), "AC123");
        assert_eq!(credential.secret(), "secret_token");
    }
}
