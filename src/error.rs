// Action Error Types
// Shared error surface for all provider actions

use thiserror::Error;

/// Action Error
#[derive(Error, Debug)]
pub enum ActionError {
    /// Remote service is unreachable
    #[error("Cannot connect to remote service: {0}")]
    ConnectionFailed(String),

    /// Request timed out
    #[error("Remote service response timeout")]
    Timeout,

    /// Transport-level failure other than connect/timeout
    #[error("Transport error: {0}")]
    Transport(String),

    /// Authorization context is missing or malformed
    #[error("Invalid authorization context: {0}")]
    Credentials(String),

    /// Request value does not match the action's request schema
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Response or payload serialization error
    #[error("Payload serialization error: {0}")]
    Serialization(String),
}

impl From<reqwest::Error> for ActionError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ActionError::Timeout
        } else if err.is_connect() {
            ActionError::ConnectionFailed(err.to_string())
        } else {
            ActionError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ActionError {
    fn from(err: serde_json::Error) -> Self {
        ActionError::Serialization(err.to_string())
    }
}

/// Result type for action operations
pub type ActionResult<T> = Result<T, ActionError>;

/// Action error codes for embedding runtimes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionErrorCode {
    ConnectionFailed,
    Timeout,
    Transport,
    Credentials,
    InvalidRequest,
    Serialization,
}

impl ActionErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionErrorCode::ConnectionFailed => "ACTION_CONNECTION_FAILED",
            ActionErrorCode::Timeout => "ACTION_TIMEOUT",
            ActionErrorCode::Transport => "ACTION_TRANSPORT_ERROR",
            ActionErrorCode::Credentials => "ACTION_CREDENTIALS",
            ActionErrorCode::InvalidRequest => "ACTION_INVALID_REQUEST",
            ActionErrorCode::Serialization => "ACTION_SERIALIZATION",
        }
    }
}

impl ActionError {
    pub fn code(&self) -> ActionErrorCode {
        match self {
            ActionError::ConnectionFailed(_) => ActionErrorCode::ConnectionFailed,
            ActionError::Timeout => ActionErrorCode::Timeout,
            ActionError::Transport(_) => ActionErrorCode::Transport,
            ActionError::Credentials(_) => ActionErrorCode::Credentials,
            ActionError::InvalidRequest(_) => ActionErrorCode::InvalidRequest,
            ActionError::Serialization(_) => ActionErrorCode::Serialization,
        }
    }
}

impl From<ActionError> for String {
    fn from(err: ActionError) -> Self {
        err.to_string()
    }
}
