use serde::{Deserialize, Serialize};

/// Request payload for `POST /api/websites/draft`.
/// Contains the raw chat message to extract a `WebsiteRequest` from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftWebsiteRequest {
    pub message: String,
}

/// Response body returned by the generation endpoint when any generated file
/// failed the security scan. The generated content itself is withheld.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnsafeFilesResponse {
    pub error: String,
    pub unsafe_files: Vec<String>,
}
