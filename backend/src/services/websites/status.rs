use actix_web::{web, Responder};
use serde_json::json;

use crate::generations::state::GenerationsState;

/// Actix web handler for the `GET /api/websites/{project_id}/status` endpoint.
pub(crate) async fn process(
    project_id: web::Path<String>,
    state: web::Data<GenerationsState>,
) -> impl Responder {
    match state.get(&project_id).await {
        Some(site) => actix_web::HttpResponse::Ok().json(json!({
            "projectId": site.project_id,
            "status": site.status,
        })),
        None => actix_web::HttpResponse::NotFound().body("Project ID not found"),
    }
}
