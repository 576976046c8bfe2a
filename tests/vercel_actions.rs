// End-to-end tests for the Vercel project actions against a mock server

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tooldock::services::vercel::{
    AddDomain, CreateEnvVar, CreateProject, DeleteProject, EditEnvVar, FindProject, GetEnvVars,
    PauseProject, UnpauseProject, UpdateProject,
};
use tooldock::{Action, AuthContext};

#[tokio::test]
async fn create_project_nests_git_repository_in_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v12/projects"))
        .and(header("Authorization", "Bearer tok_v"))
        .and(body_json(json!({
            "name": "demo",
            "gitRepository": {"name": "user/demo", "type": "github"},
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "prj_1", "name": "demo"})),
        )
        .mount(&server)
        .await;

    let action = CreateProject::with_base_url(server.uri());
    let auth = AuthContext::bearer("tok_v");
    let outcome = action
        .execute(
            json!({
                "name": "demo",
                "gitRepositoryName": "user/demo",
                "gitRepositoryType": "github",
            }),
            &auth,
        )
        .await
        .unwrap();

    assert!(outcome.execution_details.executed);
    assert_eq!(outcome.response_data["success"], json!(true));
    assert_eq!(
        outcome.response_data["response"],
        json!({"id": "prj_1", "name": "demo"})
    );
}

#[tokio::test]
async fn find_project_returns_decoded_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v5/projects/demo"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "prj_1", "name": "demo"})),
        )
        .mount(&server)
        .await;

    let action = FindProject::with_base_url(server.uri());
    let auth = AuthContext::bearer("tok_v");
    let outcome = action
        .execute(json!({"project_id_or_name": "demo"}), &auth)
        .await
        .unwrap();

    assert_eq!(outcome.response_data["success"], json!(true));
    assert_eq!(outcome.response_data["response"]["id"], json!("prj_1"));
}

#[tokio::test]
async fn delete_project_normalizes_transport_errors() {
    // Nothing listens on this address, the connection is refused
    let action = DeleteProject::with_base_url("http://127.0.0.1:1");
    let auth = AuthContext::bearer("tok_v");
    let outcome = action
        .execute(json!({"project_id_or_name": "proj_1"}), &auth)
        .await
        .unwrap();

    assert!(!outcome.execution_details.executed);
    assert_eq!(outcome.response_data["success"], json!(false));
    assert!(outcome.response_data["response"].is_string());
}

#[tokio::test]
async fn find_project_reports_failure_on_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v5/projects/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {"code": "not_found", "message": "Project not found"},
        })))
        .mount(&server)
        .await;

    let action = FindProject::with_base_url(server.uri());
    let auth = AuthContext::bearer("tok_v");
    let outcome = action
        .execute(json!({"project_id_or_name": "missing"}), &auth)
        .await
        .unwrap();

    assert!(!outcome.execution_details.executed);
    assert_eq!(outcome.response_data["success"], json!(false));
    assert_eq!(
        outcome.response_data["response"]["error"]["code"],
        json!("not_found")
    );
}

#[tokio::test]
async fn pause_project_posts_to_versioned_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/projects/prj_1/pause"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let action = PauseProject::with_base_url(server.uri());
    let auth = AuthContext::bearer("tok_v");
    let outcome = action
        .execute(json!({"project_id": "prj_1"}), &auth)
        .await
        .unwrap();

    assert_eq!(outcome.response_data["success"], json!(true));
}

#[tokio::test]
async fn update_project_patches_supplied_fields_only() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/v5/projects/prj_1"))
        .and(body_json(json!({"framework": "nextjs"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "prj_1", "framework": "nextjs"})),
        )
        .mount(&server)
        .await;

    let action = UpdateProject::with_base_url(server.uri());
    let auth = AuthContext::bearer("tok_v");
    let outcome = action
        .execute(json!({"project_id": "prj_1", "framework": "nextjs"}), &auth)
        .await
        .unwrap();

    assert_eq!(outcome.response_data["success"], json!(true));
    assert_eq!(
        outcome.response_data["response"]["framework"],
        json!("nextjs")
    );
}

#[tokio::test]
async fn unpause_project_posts_to_versioned_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v5/projects/prj_1/unpause"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let action = UnpauseProject::with_base_url(server.uri());
    let auth = AuthContext::bearer("tok_v");
    let outcome = action
        .execute(json!({"project_id": "prj_1"}), &auth)
        .await
        .unwrap();

    assert_eq!(outcome.response_data["success"], json!(true));
}

#[tokio::test]
async fn add_domain_sends_domain_under_name_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v10/projects/prj_1/domains"))
        .and(body_json(json!({
            "name": "example.com",
            "gitBranch": "main",
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"name": "example.com"})),
        )
        .mount(&server)
        .await;

    let action = AddDomain::with_base_url(server.uri());
    let auth = AuthContext::bearer("tok_v");
    let outcome = action
        .execute(
            json!({
                "project_id_or_name": "prj_1",
                "domain_name": "example.com",
                "gitBranch": "main",
            }),
            &auth,
        )
        .await
        .unwrap();

    assert_eq!(outcome.response_data["success"], json!(true));
}

#[tokio::test]
async fn get_env_vars_reads_versioned_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v9/projects/prj_1/env"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"envs": [{"key": "API_KEY", "id": "env_9"}]})),
        )
        .mount(&server)
        .await;

    let action = GetEnvVars::with_base_url(server.uri());
    let auth = AuthContext::bearer("tok_v");
    let outcome = action
        .execute(json!({"project_id_or_name": "prj_1"}), &auth)
        .await
        .unwrap();

    assert_eq!(outcome.response_data["success"], json!(true));
    assert_eq!(
        outcome.response_data["response"]["envs"][0]["key"],
        json!("API_KEY")
    );
}

#[tokio::test]
async fn create_env_var_sends_mandatory_fields_and_omits_absent_optionals() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v5/projects/prj_1/env"))
        .and(body_json(json!({
            "key": "API_KEY",
            "value": "secret",
            "type": "encrypted",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"created": true})))
        .mount(&server)
        .await;

    let action = CreateEnvVar::with_base_url(server.uri());
    let auth = AuthContext::bearer("tok_v");
    let outcome = action
        .execute(
            json!({
                "project_id_or_name": "prj_1",
                "key": "API_KEY",
                "value": "secret",
                "type_of_env": "encrypted",
            }),
            &auth,
        )
        .await
        .unwrap();

    assert_eq!(outcome.response_data["success"], json!(true));
}

#[tokio::test]
async fn edit_env_var_patches_only_supplied_fields() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/v9/projects/prj_1/env/env_9"))
        .and(body_json(json!({"value": "rotated"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"updated": true})))
        .mount(&server)
        .await;

    let action = EditEnvVar::with_base_url(server.uri());
    let auth = AuthContext::bearer("tok_v");
    let outcome = action
        .execute(
            json!({
                "project_id_or_name": "prj_1",
                "env_var_id": "env_9",
                "value": "rotated",
            }),
            &auth,
        )
        .await
        .unwrap();

    assert_eq!(outcome.response_data["success"], json!(true));
    assert_eq!(
        outcome.response_data["response"],
        json!({"updated": true})
    );
}
