use actix_web::web;

use super::catalog;

/// Actix web handler for the `GET /api/templates/{template_id}` endpoint.
///
/// Returns the full template (files, sources and variable metadata) as JSON,
/// or `404 Not Found` when the catalog does not ship the requested id.
pub(crate) async fn process(template_id: web::Path<String>) -> impl actix_web::Responder {
    match catalog::get(&template_id) {
        Some(template) => actix_web::HttpResponse::Ok().json(template),
        None => actix_web::HttpResponse::NotFound().body("Template not found"),
    }
}
