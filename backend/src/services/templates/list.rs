use actix_web::Responder;
use serde::Serialize;

use super::catalog;

/// Summary of one catalog entry, as returned by `GET /api/templates`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TemplateSummary {
    id: String,
    name: String,
    description: String,
    category: common::model::template::TemplateCategory,
    safety_level: common::model::template::SafetyLevel,
    file_count: usize,
}

pub(crate) async fn process() -> impl Responder {
    let summaries: Vec<TemplateSummary> = catalog::all()
        .iter()
        .map(|template| TemplateSummary {
            id: template.id.clone(),
            name: template.name.clone(),
            description: template.description.clone(),
            category: template.category,
            safety_level: template.safety_level,
            file_count: template.files.len(),
        })
        .collect();
    actix_web::HttpResponse::Ok().json(summaries)
}
