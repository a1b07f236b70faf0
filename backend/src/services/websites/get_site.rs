use actix_web::{web, Responder};

use crate::generations::state::GenerationsState;

/// Actix web handler for the `GET /api/websites/{project_id}` endpoint.
/// Returns the full stored `GeneratedWebsite` or `404 Not Found`.
pub(crate) async fn process(
    project_id: web::Path<String>,
    state: web::Data<GenerationsState>,
) -> impl Responder {
    match state.get(&project_id).await {
        Some(site) => actix_web::HttpResponse::Ok().json(site),
        None => actix_web::HttpResponse::NotFound().body("Project ID not found"),
    }
}
