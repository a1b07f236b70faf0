use actix_web::{web, HttpResponse, Responder};
use mime_guess::from_path;

use crate::generations::state::GenerationsState;

/// Actix web handler for `GET /api/websites/{project_id}/files/{file_path}`.
///
/// Serves one generated file's raw content with a content type guessed from
/// its path, for client-side previews. Returns `404 Not Found` when either
/// the project or the file path is unknown.
pub(crate) async fn process(
    path: web::Path<(String, String)>,
    state: web::Data<GenerationsState>,
) -> impl Responder {
    let (project_id, file_path) = path.into_inner();

    let Some(site) = state.get(&project_id).await else {
        return HttpResponse::NotFound().body("Project ID not found");
    };
    match site.files.iter().find(|f| f.path == file_path) {
        Some(file) => {
            let mime = from_path(&file.path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.content.clone())
        }
        None => HttpResponse::NotFound().body("File not found"),
    }
}
