// Shared model types for action adapters

pub mod auth;
pub mod outcome;

pub use auth::{AuthContext, BasicCredential, BearerCredential};
pub use outcome::{ActionOutcome, ActionResponse, ExecutionDetails};
