// Vercel API Types
// Request, payload and response structures for the Vercel project actions

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::outcome::ActionResponse;

/// Request to create a project.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    /// The name of the project in less than 100 characters
    pub name: String,
    /// The description of the project
    pub description: Option<String>,
    /// The build command to run the project
    pub build_command: Option<String>,
    /// The command to ignore the build step
    pub command_for_ignoring_build_step: Option<String>,
    /// The dev command to run the project
    pub dev_command: Option<String>,
    /// The framework of the project, e.g. nextjs, astro or sveltekit
    pub framework: Option<String>,
    /// The name of the git repository, e.g. username/repo
    pub git_repository_name: String,
    /// The type of the git repository: github, gitlab or bitbucket
    pub git_repository_type: String,
    /// The install command to run the project
    pub install_command: Option<String>,
    /// The output directory of the project
    pub output_directory: Option<String>,
    /// Whether the source code and logs of the project's deployments should
    /// be public
    pub public_source: Option<bool>,
    /// The root directory of the project, defaults to the repository root
    pub root_directory: Option<String>,
    /// The region to deploy serverless functions to
    pub serverless_function_region: Option<String>,
}

impl CreateProjectRequest {
    pub(crate) fn payload(&self) -> CreateProjectPayload {
        CreateProjectPayload {
            name: self.name.clone(),
            description: self.description.clone(),
            build_command: self.build_command.clone(),
            command_for_ignoring_build_step: self.command_for_ignoring_build_step.clone(),
            dev_command: self.dev_command.clone(),
            framework: self.framework.clone(),
            git_repository: GitRepository {
                name: self.git_repository_name.clone(),
                kind: self.git_repository_type.clone(),
            },
            install_command: self.install_command.clone(),
            output_directory: self.output_directory.clone(),
            public_source: self.public_source,
            root_directory: self.root_directory.clone(),
            serverless_function_region: self.serverless_function_region.clone(),
        }
    }
}

/// Project creation payload
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateProjectPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_for_ignoring_build_step: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dev_command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framework: Option<String>,
    pub git_repository: GitRepository,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_directory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_source: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_directory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serverless_function_region: Option<String>,
}

/// Git repository reference inside the project creation payload
#[derive(Debug, Clone, Serialize)]
pub(crate) struct GitRepository {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Request to update a project's name or framework.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateProjectRequest {
    /// The ID of the project to update
    pub project_id: String,
    /// The new name of the project
    pub name: Option<String>,
    /// The framework of the project, e.g. nextjs, astro or sveltekit
    pub framework: Option<String>,
}

impl UpdateProjectRequest {
    pub(crate) fn payload(&self) -> UpdateProjectPayload {
        UpdateProjectPayload {
            name: self.name.clone(),
            framework: self.framework.clone(),
        }
    }
}

/// Project update payload
#[derive(Debug, Clone, Serialize)]
pub(crate) struct UpdateProjectPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framework: Option<String>,
}

/// Request to delete a project.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeleteProjectRequest {
    /// The ID or name of the project to delete
    pub project_id_or_name: String,
}

/// Request to look up a project.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FindProjectRequest {
    /// The ID or name of the project to look up
    pub project_id_or_name: String,
}

/// Request to pause a project.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PauseProjectRequest {
    /// The ID of the project to pause
    pub project_id: String,
}

/// Request to unpause a project.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UnpauseProjectRequest {
    /// The ID of the project to unpause
    pub project_id: String,
}

/// Request to add a domain to a project.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddDomainRequest {
    /// The ID or name of the project the domain is added to
    pub project_id_or_name: String,
    /// The domain name to add
    pub domain_name: String,
    /// Git branch the domain deploys from
    #[serde(rename = "gitBranch")]
    pub git_branch: Option<String>,
    /// Target destination the domain redirects to
    pub redirect: Option<String>,
    /// Status code used for the redirect
    #[serde(rename = "redirectStatusCode")]
    pub redirect_status_code: Option<u16>,
}

impl AddDomainRequest {
    pub(crate) fn payload(&self) -> AddDomainPayload {
        AddDomainPayload {
            name: self.domain_name.clone(),
            git_branch: self.git_branch.clone(),
            redirect: self.redirect.clone(),
            redirect_status_code: self.redirect_status_code,
        }
    }
}

/// Domain attachment payload
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AddDomainPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_status_code: Option<u16>,
}

/// Request to create an environment variable.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateEnvVarRequest {
    /// The ID or name of the project the variable belongs to
    pub project_id_or_name: String,
    /// The name of the environment variable
    pub key: String,
    /// The value of the environment variable
    pub value: String,
    /// The variable type: system, secret, encrypted, plain or sensitive
    pub type_of_env: String,
    /// Deployment targets the variable applies to: production, preview,
    /// development
    pub target: Option<Vec<String>>,
    /// A comment to attach to the variable
    pub comment: Option<String>,
}

impl CreateEnvVarRequest {
    pub(crate) fn payload(&self) -> CreateEnvVarPayload {
        CreateEnvVarPayload {
            key: self.key.clone(),
            value: self.value.clone(),
            kind: self.type_of_env.clone(),
            target: self.target.clone(),
            comment: self.comment.clone(),
        }
    }
}

/// Environment variable creation payload
#[derive(Debug, Clone, Serialize)]
pub(crate) struct CreateEnvVarPayload {
    pub key: String,
    pub value: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Request to edit an environment variable.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct EditEnvVarRequest {
    /// The ID or name of the project the variable belongs to
    pub project_id_or_name: String,
    /// The ID of the environment variable to edit
    pub env_var_id: String,
    /// The new name of the environment variable
    pub key: Option<String>,
    /// The new value of the environment variable
    pub value: Option<String>,
    /// The variable type: system, secret, encrypted, plain or sensitive
    pub type_of_env: Option<String>,
    /// Deployment targets the variable applies to: production, preview,
    /// development
    pub target: Option<Vec<String>>,
    /// A comment to attach to the variable
    pub comment: Option<String>,
}

impl EditEnvVarRequest {
    pub(crate) fn payload(&self) -> EditEnvVarPayload {
        EditEnvVarPayload {
            key: self.key.clone(),
            value: self.value.clone(),
            kind: self.type_of_env.clone(),
            target: self.target.clone(),
            comment: self.comment.clone(),
        }
    }
}

/// Environment variable edit payload
#[derive(Debug, Clone, Serialize)]
pub(crate) struct EditEnvVarPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Request to list a project's environment variables.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetEnvVarsRequest {
    /// The ID or name of the project to read environment variables from
    pub project_id_or_name: String,
}

/// Normalized response shared by every Vercel action.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ProjectResponse {
    /// Whether the operation succeeded
    pub success: bool,
    /// The decoded API response, or a stringified error
    pub response: Option<Value>,
}

impl ProjectResponse {
    pub(crate) fn failed(diagnostic: Value) -> Self {
        Self {
            success: false,
            response: Some(diagnostic),
        }
    }
}

impl ActionResponse for ProjectResponse {
    fn succeeded(&self) -> bool {
        self.success
    }
}
