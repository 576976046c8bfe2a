//! tooldock
//!
//! Thin, uniform action adapters that expose third-party HTTP APIs
//! (TinyURL, Twilio, Vercel) as callable units with typed request and
//! response schemas. Each action validates a request value, performs one
//! remote call, and returns a normalized outcome; an embedding runtime
//! discovers the actions through the [`services::registry`] enumeration.

pub mod error;
pub mod models;
pub mod services;

pub use error::{ActionError, ActionErrorCode, ActionResult};
pub use models::auth::{AuthContext, BasicCredential, BearerCredential};
pub use models::outcome::{ActionOutcome, ActionResponse, ExecutionDetails};
pub use services::{registry, Action, BoxedAction, BoxedTool, Tool, Trigger};
