//! # Website Generation Endpoint
//!
//! Handler for `POST /api/websites/generate`. Runs the synchronous pipeline
//! inside the request, applies the unsafe-file gate, stores successful
//! results in the in-memory registry and records an analytics event for
//! every attempt.
//!
//! ## Response mapping
//!
//! - Pipeline success, all files safe: `200 OK` with the `GeneratedWebsite`.
//! - Pipeline success, any file unsafe: `400 Bad Request` with an
//!   `UnsafeFilesResponse` naming the unsafe paths; the generated content is
//!   withheld and the site is not stored.
//! - Validation failure: `400 Bad Request` with the `ValidationResult`.
//! - Template lookup or internal failure: `500 Internal Server Error`.
//!
//! Every attempt is recorded in analytics: completed pipelines as `ready`
//! (gated ones included, distinguished by their unsafe-file count), failed
//! ones as `error`. Registry and analytics failures after a completed
//! generation are logged and never change the response.

use std::time::Instant;

use actix_web::{web, HttpResponse, Responder};
use common::model::website::WebsiteRequest;
use common::requests::UnsafeFilesResponse;
use log::warn;

use crate::generations::state::GenerationsState;
use crate::services::analytics::{self, AnalyticsState, GenerationEvent};
use crate::services::websites::pipeline::{self, GenerateError};

pub(crate) async fn process(
    registry: web::Data<GenerationsState>,
    analytics_state: web::Data<AnalyticsState>,
    payload: web::Json<WebsiteRequest>,
) -> impl Responder {
    let request = payload.into_inner();
    let started = Instant::now();

    match pipeline::generate_website(&request) {
        Ok(site) => {
            let unsafe_files: Vec<String> = site
                .files
                .iter()
                .filter(|f| !f.safe)
                .map(|f| f.path.clone())
                .collect();

            record(
                &analytics_state,
                GenerationEvent {
                    project_id: site.project_id.clone(),
                    template_id: pipeline::template_for(&request).map(str::to_string),
                    status: "ready".to_string(),
                    file_count: site.files.len(),
                    unsafe_files: unsafe_files.len(),
                    duration_ms: started.elapsed().as_millis() as u64,
                },
            );

            if !unsafe_files.is_empty() {
                return HttpResponse::BadRequest().json(UnsafeFilesResponse {
                    error: "Generated content failed the security scan".to_string(),
                    unsafe_files,
                });
            }

            registry.insert(site.clone()).await;
            HttpResponse::Ok().json(site)
        }
        Err(err) => {
            record(
                &analytics_state,
                GenerationEvent {
                    project_id: String::new(),
                    template_id: None,
                    status: "error".to_string(),
                    file_count: 0,
                    unsafe_files: 0,
                    duration_ms: started.elapsed().as_millis() as u64,
                },
            );
            match err {
                GenerateError::Validation(result) => HttpResponse::BadRequest().json(result),
                other => HttpResponse::InternalServerError().body(other.to_string()),
            }
        }
    }
}

fn record(state: &AnalyticsState, event: GenerationEvent) {
    let outcome = state
        .open()
        .and_then(|conn| analytics::record_generation(&conn, &event).map_err(|e| e.to_string()));
    if let Err(e) = outcome {
        warn!("failed to record generation event: {}", e);
    }
}
