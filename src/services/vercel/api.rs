// Vercel API Operations
// Low-level calls for the Vercel project-management actions
//
// Path versions are deliberately non-uniform; they mirror the endpoints the
// remote API documents per operation.

use reqwest::{Client, RequestBuilder};

use super::types::*;
use crate::error::ActionResult;
use crate::models::auth::BearerCredential;
use crate::services::decode_json_body;

/// Vercel API base URL
pub const API_BASE: &str = "https://api.vercel.com";

/// Issue a prepared request and normalize the response.
async fn dispatch(
    operation: &str,
    builder: RequestBuilder,
    credential: &BearerCredential,
) -> ActionResult<ProjectResponse> {
    let response = credential.apply(builder).send().await?;

    let status = response.status();
    let body = decode_json_body(response).await;

    if !status.is_success() {
        log::warn!("Vercel {} returned status {}", operation, status);
        return Ok(ProjectResponse::failed(body));
    }

    Ok(ProjectResponse {
        success: true,
        response: Some(body),
    })
}

pub(crate) async fn create_project(
    client: &Client,
    base_url: &str,
    credential: &BearerCredential,
    request: &CreateProjectRequest,
) -> ActionResult<ProjectResponse> {
    let url = format!("{}/v12/projects", base_url);
    dispatch(
        "create project",
        client.post(&url).json(&request.payload()),
        credential,
    )
    .await
}

pub(crate) async fn update_project(
    client: &Client,
    base_url: &str,
    credential: &BearerCredential,
    request: &UpdateProjectRequest,
) -> ActionResult<ProjectResponse> {
    let url = format!("{}/v5/projects/{}", base_url, request.project_id);
    dispatch(
        "update project",
        client.patch(&url).json(&request.payload()),
        credential,
    )
    .await
}

pub(crate) async fn delete_project(
    client: &Client,
    base_url: &str,
    credential: &BearerCredential,
    request: &DeleteProjectRequest,
) -> ActionResult<ProjectResponse> {
    let url = format!("{}/v9/projects/{}", base_url, request.project_id_or_name);
    dispatch("delete project", client.delete(&url), credential).await
}

pub(crate) async fn find_project(
    client: &Client,
    base_url: &str,
    credential: &BearerCredential,
    request: &FindProjectRequest,
) -> ActionResult<ProjectResponse> {
    let url = format!("{}/v5/projects/{}", base_url, request.project_id_or_name);
    dispatch("find project", client.get(&url), credential).await
}

pub(crate) async fn pause_project(
    client: &Client,
    base_url: &str,
    credential: &BearerCredential,
    request: &PauseProjectRequest,
) -> ActionResult<ProjectResponse> {
    let url = format!("{}/v1/projects/{}/pause", base_url, request.project_id);
    dispatch("pause project", client.post(&url), credential).await
}

pub(crate) async fn unpause_project(
    client: &Client,
    base_url: &str,
    credential: &BearerCredential,
    request: &UnpauseProjectRequest,
) -> ActionResult<ProjectResponse> {
    let url = format!("{}/v5/projects/{}/unpause", base_url, request.project_id);
    dispatch("unpause project", client.post(&url), credential).await
}

pub(crate) async fn add_domain(
    client: &Client,
    base_url: &str,
    credential: &BearerCredential,
    request: &AddDomainRequest,
) -> ActionResult<ProjectResponse> {
    let url = format!(
        "{}/v10/projects/{}/domains",
        base_url, request.project_id_or_name
    );
    dispatch(
        "add domain",
        client.post(&url).json(&request.payload()),
        credential,
    )
    .await
}

pub(crate) async fn create_env_var(
    client: &Client,
    base_url: &str,
    credential: &BearerCredential,
    request: &CreateEnvVarRequest,
) -> ActionResult<ProjectResponse> {
    let url = format!(
        "{}/v5/projects/{}/env",
        base_url, request.project_id_or_name
    );
    dispatch(
        "create env var",
        client.post(&url).json(&request.payload()),
        credential,
    )
    .await
}

pub(crate) async fn edit_env_var(
    client: &Client,
    base_url: &str,
    credential: &BearerCredential,
    request: &EditEnvVarRequest,
) -> ActionResult<ProjectResponse> {
    let url = format!(
        "{}/v9/projects/{}/env/{}",
        base_url, request.project_id_or_name, request.env_var_id
    );
    dispatch(
        "edit env var",
        client.patch(&url).json(&request.payload()),
        credential,
    )
    .await
}

pub(crate) async fn get_env_vars(
    client: &Client,
    base_url: &str,
    credential: &BearerCredential,
    request: &GetEnvVarsRequest,
) -> ActionResult<ProjectResponse> {
    let url = format!(
        "{}/v9/projects/{}/env",
        base_url, request.project_id_or_name
    );
    dispatch("get env vars", client.get(&url), credential).await
}
