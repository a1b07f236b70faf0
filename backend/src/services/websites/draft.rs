use actix_web::{web, Responder};
use common::requests::DraftWebsiteRequest;

use super::intake;

/// Actix web handler for the `POST /api/websites/draft` endpoint.
///
/// Extracts a `WebsiteRequest` draft from the raw chat message and returns
/// it as JSON. The draft is not validated here; the caller reviews it and
/// submits it to `/generate`, which validates.
pub(crate) async fn process(payload: web::Json<DraftWebsiteRequest>) -> impl Responder {
    let request = intake::draft_request(&payload.message);
    actix_web::HttpResponse::Ok().json(request)
}
