// Vercel Tool
// Project-management actions over the Vercel REST API

mod api;
mod types;

pub use api::API_BASE;
pub use types::{
    AddDomainRequest, CreateEnvVarRequest, CreateProjectRequest, DeleteProjectRequest,
    EditEnvVarRequest, FindProjectRequest, GetEnvVarsRequest, PauseProjectRequest,
    ProjectResponse, UnpauseProjectRequest, UpdateProjectRequest,
};

use async_trait::async_trait;
use reqwest::Client;
use schemars::{schema_for, Schema};
use serde_json::Value;

use super::{parse_request, Action, BoxedAction, Tool};
use crate::error::ActionResult;
use crate::models::auth::AuthContext;
use crate::models::outcome::ActionOutcome;

/// Create a project.
pub struct CreateProject {
    client: Client,
    base_url: String,
}

impl CreateProject {
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

impl Default for CreateProject {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Action for CreateProject {
    fn display_name(&self) -> &str {
        "Create Project"
    }

    fn tags(&self) -> &[&str] {
        &["vercel", "project"]
    }

    fn request_schema(&self) -> Schema {
        schema_for!(CreateProjectRequest)
    }

    fn response_schema(&self) -> Schema {
        schema_for!(ProjectResponse)
    }

    async fn execute(&self, request: Value, auth: &AuthContext) -> ActionResult<ActionOutcome> {
        let request: CreateProjectRequest = parse_request(request)?;
        let credential = auth.bearer_credential()?;
        let response = api::create_project(&self.client, &self.base_url, &credential, &request)
            .await
            .unwrap_or_else(|err| {
                log::warn!("Vercel create project call failed: {}", err);
                ProjectResponse::failed(Value::String(err.to_string()))
            });
        ActionOutcome::from_response(&response)
    }
}

/// Update a project's name or framework.
pub struct UpdateProject {
    client: Client,
    base_url: String,
}

impl UpdateProject {
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

impl Default for UpdateProject {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Action for UpdateProject {
    fn display_name(&self) -> &str {
        "Update Project"
    }

    fn tags(&self) -> &[&str] {
        &["vercel", "project"]
    }

    fn request_schema(&self) -> Schema {
        schema_for!(UpdateProjectRequest)
    }

    fn response_schema(&self) -> Schema {
        schema_for!(ProjectResponse)
    }

    async fn execute(&self, request: Value, auth: &AuthContext) -> ActionResult<ActionOutcome> {
        let request: UpdateProjectRequest = parse_request(request)?;
        let credential = auth.bearer_credential()?;
        let response = api::update_project(&self.client, &self.base_url, &credential, &request)
            .await
            .unwrap_or_else(|err| {
                log::warn!("Vercel update project call failed: {}", err);
                ProjectResponse::failed(Value::String(err.to_string()))
            });
        ActionOutcome::from_response(&response)
    }
}

/// Delete a project.
pub struct DeleteProject {
    client: Client,
    base_url: String,
}

impl DeleteProject {
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

impl Default for DeleteProject {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Action for DeleteProject {
    fn display_name(&self) -> &str {
        "Delete Project"
    }

    fn tags(&self) -> &[&str] {
        &["vercel", "project"]
    }

    fn request_schema(&self) -> Schema {
        schema_for!(DeleteProjectRequest)
    }

    fn response_schema(&self) -> Schema {
        schema_for!(ProjectResponse)
    }

    async fn execute(&self, request: Value, auth: &AuthContext) -> ActionResult<ActionOutcome> {
        let request: DeleteProjectRequest = parse_request(request)?;
        let credential = auth.bearer_credential()?;
        let response = api::delete_project(&self.client, &self.base_url, &credential, &request)
            .await
            .unwrap_or_else(|err| {
                log::warn!("Vercel delete project call failed: {}", err);
                ProjectResponse::failed(Value::String(err.to_string()))
            });
        ActionOutcome::from_response(&response)
    }
}

/// Look up a project by ID or name.
pub struct FindProject {
    client: Client,
    base_url: String,
}

impl FindProject {
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

impl Default for FindProject {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Action for FindProject {
    fn display_name(&self) -> &str {
        "Find Project"
    }

    fn tags(&self) -> &[&str] {
        &["vercel", "project"]
    }

    fn request_schema(&self) -> Schema {
        schema_for!(FindProjectRequest)
    }

    fn response_schema(&self) -> Schema {
        schema_for!(ProjectResponse)
    }

    async fn execute(&self, request: Value, auth: &AuthContext) -> ActionResult<ActionOutcome> {
        let request: FindProjectRequest = parse_request(request)?;
        let credential = auth.bearer_credential()?;
        let response = api::find_project(&self.client, &self.base_url, &credential, &request)
            .await
            .unwrap_or_else(|err| {
                log::warn!("Vercel find project call failed: {}", err);
                ProjectResponse::failed(Value::String(err.to_string()))
            });
        ActionOutcome::from_response(&response)
    }
}

/// Pause a project.
pub struct PauseProject {
    client: Client,
    base_url: String,
}

impl PauseProject {
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

impl Default for PauseProject {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Action for PauseProject {
    fn display_name(&self) -> &str {
        "Pause Project"
    }

    fn tags(&self) -> &[&str] {
        &["vercel", "project"]
    }

    fn request_schema(&self) -> Schema {
        schema_for!(PauseProjectRequest)
    }

    fn response_schema(&self) -> Schema {
        schema_for!(ProjectResponse)
    }

    async fn execute(&self, request: Value, auth: &AuthContext) -> ActionResult<ActionOutcome> {
        let request: PauseProjectRequest = parse_request(request)?;
        let credential = auth.bearer_credential()?;
        let response = api::pause_project(&self.client, &self.base_url, &credential, &request)
            .await
            .unwrap_or_else(|err| {
                log::warn!("Vercel pause project call failed: {}", err);
                ProjectResponse::failed(Value::String(err.to_string()))
            });
        ActionOutcome::from_response(&response)
    }
}

/// Unpause a project.
pub struct UnpauseProject {
    client: Client,
    base_url: String,
}

impl UnpauseProject {
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

impl Default for UnpauseProject {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Action for UnpauseProject {
    fn display_name(&self) -> &str {
        "Unpause Project"
    }

    fn tags(&self) -> &[&str] {
        &["vercel", "project"]
    }

    fn request_schema(&self) -> Schema {
        schema_for!(UnpauseProjectRequest)
    }

    fn response_schema(&self) -> Schema {
        schema_for!(ProjectResponse)
    }

    async fn execute(&self, request: Value, auth: &AuthContext) -> ActionResult<ActionOutcome> {
        let request: UnpauseProjectRequest = parse_request(request)?;
        let credential = auth.bearer_credential()?;
        let response = api::unpause_project(&self.client, &self.base_url, &credential, &request)
            .await
            .unwrap_or_else(|err| {
                log::warn!("Vercel unpause project call failed: {}", err);
                ProjectResponse::failed(Value::String(err.to_string()))
            });
        ActionOutcome::from_response(&response)
    }
}

/// Add a domain to a project.
pub struct AddDomain {
    client: Client,
    base_url: String,
}

impl AddDomain {
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

impl Default for AddDomain {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Action for AddDomain {
    fn display_name(&self) -> &str {
        "Add Domain to Project"
    }

    fn tags(&self) -> &[&str] {
        &["vercel", "domain"]
    }

    fn request_schema(&self) -> Schema {
        schema_for!(AddDomainRequest)
    }

    fn response_schema(&self) -> Schema {
        schema_for!(ProjectResponse)
    }

    async fn execute(&self, request: Value, auth: &AuthContext) -> ActionResult<ActionOutcome> {
        let request: AddDomainRequest = parse_request(request)?;
        let credential = auth.bearer_credential()?;
        let response = api::add_domain(&self.client, &self.base_url, &credential, &request)
            .await
            .unwrap_or_else(|err| {
                log::warn!("Vercel add domain call failed: {}", err);
                ProjectResponse::failed(Value::String(err.to_string()))
            });
        ActionOutcome::from_response(&response)
    }
}

/// Create an environment variable on a project.
pub struct CreateEnvVar {
    client: Client,
    base_url: String,
}

impl CreateEnvVar {
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

impl Default for CreateEnvVar {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Action for CreateEnvVar {
    fn display_name(&self) -> &str {
        "Create Environment Variables"
    }

    fn tags(&self) -> &[&str] {
        &["vercel", "environment"]
    }

    fn request_schema(&self) -> Schema {
        schema_for!(CreateEnvVarRequest)
    }

    fn response_schema(&self) -> Schema {
        schema_for!(ProjectResponse)
    }

    async fn execute(&self, request: Value, auth: &AuthContext) -> ActionResult<ActionOutcome> {
        let request: CreateEnvVarRequest = parse_request(request)?;
        let credential = auth.bearer_credential()?;
        let response = api::create_env_var(&self.client, &self.base_url, &credential, &request)
            .await
            .unwrap_or_else(|err| {
                log::warn!("Vercel create env var call failed: {}", err);
                ProjectResponse::failed(Value::String(err.to_string()))
            });
        ActionOutcome::from_response(&response)
    }
}

/// Edit an environment variable on a project.
pub struct EditEnvVar {
    client: Client,
    base_url: String,
}

impl EditEnvVar {
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

impl Default for EditEnvVar {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Action for EditEnvVar {
    fn display_name(&self) -> &str {
        "Edit Environment Variables"
    }

    fn tags(&self) -> &[&str] {
        &["vercel", "environment"]
    }

    fn request_schema(&self) -> Schema {
        schema_for!(EditEnvVarRequest)
    }

    fn response_schema(&self) -> Schema {
        schema_for!(ProjectResponse)
    }

    async fn execute(&self, request: Value, auth: &AuthContext) -> ActionResult<ActionOutcome> {
        let request: EditEnvVarRequest = parse_request(request)?;
        let credential = auth.bearer_credential()?;
        let response = api::edit_env_var(&self.client, &self.base_url, &credential, &request)
            .await
            .unwrap_or_else(|err| {
                log::warn!("Vercel edit env var call failed: {}", err);
                ProjectResponse::failed(Value::String(err.to_string()))
            });
        ActionOutcome::from_response(&response)
    }
}

/// List a project's environment variables.
pub struct GetEnvVars {
    client: Client,
    base_url: String,
}

impl GetEnvVars {
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

impl Default for GetEnvVars {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Action for GetEnvVars {
    fn display_name(&self) -> &str {
        "Get Environment Variables"
    }

    fn tags(&self) -> &[&str] {
        &["vercel", "environment"]
    }

    fn request_schema(&self) -> Schema {
        schema_for!(GetEnvVarsRequest)
    }

    fn response_schema(&self) -> Schema {
        schema_for!(ProjectResponse)
    }

    async fn execute(&self, request: Value, auth: &AuthContext) -> ActionResult<ActionOutcome> {
        let request: GetEnvVarsRequest = parse_request(request)?;
        let credential = auth.bearer_credential()?;
        let response = api::get_env_vars(&self.client, &self.base_url, &credential, &request)
            .await
            .unwrap_or_else(|err| {
                log::warn!("Vercel get env vars call failed: {}", err);
                ProjectResponse::failed(Value::String(err.to_string()))
            });
        ActionOutcome::from_response(&response)
    }
}

/// Vercel provider tool.
pub struct Vercel {
    base_url: String,
}

impl Vercel {
    pub fn new() -> Self {
        Self::with_base_url(API_BASE)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for Vercel {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for Vercel {
    fn name(&self) -> &str {
        "vercel"
    }

    fn actions(&self) -> Vec<BoxedAction> {
        vec![
            Box::new(GetEnvVars::with_base_url(self.base_url.clone())),
            Box::new(FindProject::with_base_url(self.base_url.clone())),
            Box::new(AddDomain::with_base_url(self.base_url.clone())),
            Box::new(CreateProject::with_base_url(self.base_url.clone())),
            Box::new(CreateEnvVar::with_base_url(self.base_url.clone())),
            Box::new(DeleteProject::with_base_url(self.base_url.clone())),
            Box::new(EditEnvVar::with_base_url(self.base_url.clone())),
            Box::new(PauseProject::with_base_url(self.base_url.clone())),
            Box::new(UnpauseProject::with_base_url(self.base_url.clone())),
            Box::new(UpdateProject::with_base_url(self.base_url.clone())),
        ]
    }
}
