// Normalized Action Outcome
// The uniform shape handed back to the embedding runtime regardless of
// which provider was called

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ActionResult;

/// Whether the remote call was carried through to a success response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionDetails {
    pub executed: bool,
}

/// Normalized result of one action invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionOutcome {
    pub execution_details: ExecutionDetails,
    pub response_data: Value,
}

/// Implemented by every per-action response type so outcome construction
/// lives in one place.
pub trait ActionResponse: Serialize {
    /// Whether the remote call completed with a success status.
    fn succeeded(&self) -> bool;
}

impl ActionOutcome {
    pub fn from_response<T: ActionResponse>(response: &T) -> ActionResult<Self> {
        Ok(Self {
            execution_details: ExecutionDetails {
                executed: response.succeeded(),
            },
            response_data: serde_json::to_value(response)?,
        })
    }

    pub fn succeeded(&self) -> bool {
        self.execution_details.executed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct SampleResponse {
        success: bool,
        detail: &'static str,
    }

    impl ActionResponse for SampleResponse {
        fn succeeded(&self) -> bool {
            self.success
        }
    }

    #[test]
    fn test_outcome_mirrors_success_flag() {
        let outcome = ActionOutcome::from_response(&SampleResponse {
            success: true,
            detail: "ok",
        })
        .unwrap();
        assert!(outcome.succeeded());
        assert_eq!(outcome.response_data["detail"], "ok");
    }

    #[test]
    fn test_failed_outcome_is_not_executed() {
        let outcome = ActionOutcome::from_response(&SampleResponse {
            success: false,
            detail: "remote said no",
        })
        .unwrap();
        assert!(!outcome.execution_details.executed);
        assert_eq!(outcome.response_data["success"], false);
    }
}
