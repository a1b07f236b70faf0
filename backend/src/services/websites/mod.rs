//! # Website Service Module
//!
//! This module aggregates all API endpoints related to website generation.
//! It acts as a router, directing incoming HTTP requests under the
//! `/api/websites` path to the appropriate handler logic defined in its
//! sub-modules.
//!
//! ## Sub-modules:
//! - `pipeline`: the generation orchestrator (validate, select template,
//!   process, scan, scaffold).
//! - `processor`: pure placeholder substitution and per-request variable
//!   derivation.
//! - `scaffold`: the five static configuration files appended to every
//!   generated project.
//! - `intake`: chat-message to `WebsiteRequest` extraction.
//! - `generate`, `draft`, `get_site`, `status`, `preview`: the HTTP handlers.

mod draft;
mod generate;
mod get_site;
pub mod intake;
pub mod pipeline;
mod preview;
pub mod processor;
pub mod scaffold;
mod status;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

/// The base path for all website-related API endpoints.
const API_PATH: &str = "/api/websites";

/// Configures and returns the Actix `Scope` for all website-related routes.
///
/// # Registered Routes:
///
/// *   **`POST /generate`**:
///     - **Handler**: `generate::process`
///     - **Description**: Runs the full generation pipeline over a
///       `WebsiteRequest` body. Returns the `GeneratedWebsite` on success,
///       `400` with the `ValidationResult` on invalid input, and `400` with
///       an `UnsafeFilesResponse` when any generated file failed the
///       security scan. This is where the security gate lives; the pipeline
///       itself only reports findings.
///
/// *   **`POST /draft`**:
///     - **Handler**: `draft::process`
///     - **Description**: Extracts a `WebsiteRequest` draft from a raw chat
///       message, for the caller to review and submit to `/generate`.
///
/// *   **`GET /{project_id}`**:
///     - **Handler**: `get_site::process`
///     - **Description**: Returns the full stored `GeneratedWebsite`, or
///       `404` when it was never generated or has been evicted.
///
/// *   **`GET /{project_id}/status`**:
///     - **Handler**: `status::process`
///     - **Description**: Returns only the project id and lifecycle status.
///
/// *   **`GET /{project_id}/files/{file_path}`**:
///     - **Handler**: `preview::process`
///     - **Description**: Serves one generated file's raw content with a
///       guessed content type.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/generate", post().to(generate::process))
        .route("/draft", post().to(draft::process))
        .route("/{project_id}/status", get().to(status::process))
        .route("/{project_id}/files/{file_path:.*}", get().to(preview::process))
        .route("/{project_id}", get().to(get_site::process))
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};
    use common::model::generated::GeneratedWebsite;
    use common::model::validation::ValidationResult;
    use common::model::website::WebsiteRequest;
    use common::requests::UnsafeFilesResponse;
    use serde_json::json;
    use uuid::Uuid;

    use crate::generations::state::GenerationsState;
    use crate::services::analytics::{self, AnalyticsState};

    fn test_analytics() -> AnalyticsState {
        let db_path = std::env::temp_dir()
            .join(format!("sitegen-test-{}.sqlite", Uuid::new_v4().simple()))
            .to_string_lossy()
            .into_owned();
        analytics::init_db(&db_path).unwrap();
        AnalyticsState { db_path }
    }

    macro_rules! test_app {
        ($registry:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($registry))
                    .app_data(web::Data::new(test_analytics()))
                    .service(super::configure_routes()),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn generate_returns_the_ready_site_and_stores_it() {
        let registry = GenerationsState::new();
        let app = test_app!(registry.clone());

        let req = test::TestRequest::post()
            .uri("/api/websites/generate")
            .set_json(json!({
                "description": "a landing page for my product",
                "siteName": "Acme"
            }))
            .to_request();
        let site: GeneratedWebsite = test::call_and_read_body_json(&app, req).await;

        assert_eq!(site.files.len(), 8);
        assert!(registry.get(&site.project_id).await.is_some());

        let status_req = test::TestRequest::get()
            .uri(&format!("/api/websites/{}/status", site.project_id))
            .to_request();
        let status: serde_json::Value = test::call_and_read_body_json(&app, status_req).await;
        assert_eq!(status["status"], "ready");
    }

    #[actix_web::test]
    async fn generate_withholds_unsafe_files_and_does_not_store_them() {
        let registry = GenerationsState::new();
        let analytics_state = test_analytics();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(registry.clone()))
                .app_data(web::Data::new(analytics_state.clone()))
                .service(super::configure_routes()),
        )
        .await;

        // Feature text is not scanned up front, so dangerous code can reach
        // the generated page; the post-substitution scan has to catch it and
        // the gate has to withhold the content.
        let req = test::TestRequest::post()
            .uri("/api/websites/generate")
            .set_json(json!({
                "description": "a landing page for my product",
                "siteName": "Acme",
                "features": ["eval(payload)"]
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);

        let gate: UnsafeFilesResponse = test::read_body_json(resp).await;
        assert_eq!(gate.unsafe_files, vec!["app/page.tsx".to_string()]);
        assert!(!gate.error.is_empty());
        assert_eq!(registry.stored_count().await, 0);

        // The attempt is still recorded: the pipeline completed, so the
        // event keeps status "ready" and the unsafe count marks the gating.
        let conn = analytics_state.open().unwrap();
        let (status, unsafe_files): (String, i64) = conn
            .query_row(
                "SELECT status, unsafe_files FROM generations",
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .unwrap();
        assert_eq!(status, "ready");
        assert_eq!(unsafe_files, 1);
    }

    #[actix_web::test]
    async fn generate_rejects_invalid_requests_with_the_validation_result() {
        let app = test_app!(GenerationsState::new());

        let req = test::TestRequest::post()
            .uri("/api/websites/generate")
            .set_json(json!({ "description": "a landing page" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);

        let result: ValidationResult = test::read_body_json(resp).await;
        assert!(!result.valid);
        assert!(result
            .errors
            .iter()
            .any(|e| e.field.as_deref() == Some("siteName")));
    }

    #[actix_web::test]
    async fn draft_extracts_a_request_from_a_chat_message() {
        let app = test_app!(GenerationsState::new());

        let req = test::TestRequest::post()
            .uri("/api/websites/draft")
            .set_json(json!({
                "message": "Create a business website called Acme with blue and purple colors"
            }))
            .to_request();
        let draft: WebsiteRequest = test::call_and_read_body_json(&app, req).await;

        assert_eq!(draft.site_name, "Acme");
        let style = draft.style.unwrap();
        assert_eq!(style.primary_color.as_deref(), Some("blue"));
    }

    #[actix_web::test]
    async fn unknown_project_ids_return_not_found() {
        let app = test_app!(GenerationsState::new());

        for uri in [
            "/api/websites/site_missing",
            "/api/websites/site_missing/status",
            "/api/websites/site_missing/files/app/page.tsx",
        ] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND, "{}", uri);
        }
    }

    #[actix_web::test]
    async fn preview_serves_a_generated_file() {
        let registry = GenerationsState::new();
        let app = test_app!(registry.clone());

        let req = test::TestRequest::post()
            .uri("/api/websites/generate")
            .set_json(json!({
                "description": "a landing page for my product",
                "siteName": "Acme"
            }))
            .to_request();
        let site: GeneratedWebsite = test::call_and_read_body_json(&app, req).await;

        let preview_req = test::TestRequest::get()
            .uri(&format!("/api/websites/{}/files/README.md", site.project_id))
            .to_request();
        let body = test::call_and_read_body(&app, preview_req).await;
        assert!(std::str::from_utf8(&body).unwrap().starts_with("# Acme"));
    }
}
