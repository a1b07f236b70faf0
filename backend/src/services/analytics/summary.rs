use actix_web::web;

use super::AnalyticsState;

/// Actix web handler for the `GET /api/analytics/summary` endpoint.
///
/// Opens the analytics database and returns the aggregate statistics as
/// JSON, or `503 Service Unavailable` when the database cannot be read.
pub(crate) async fn process(state: web::Data<AnalyticsState>) -> impl actix_web::Responder {
    let summary = state
        .open()
        .and_then(|conn| super::load_summary(&conn).map_err(|e| e.to_string()));
    match summary {
        Ok(summary) => actix_web::HttpResponse::Ok().json(summary),
        Err(e) => actix_web::HttpResponse::ServiceUnavailable()
            .body(format!("Error loading analytics summary: {}", e)),
    }
}
