//! # Template Service Module
//!
//! This module owns the embedded template catalog and the API endpoints that
//! expose it. It acts as a router, directing incoming HTTP requests under the
//! `/api/templates` path to the appropriate handler logic defined in its
//! sub-modules.
//!
//! ## Sub-modules:
//! - `catalog`: the read-only, compiled-in template registry and the
//!   description-to-template selection heuristic.
//! - `list`: handles the catalog listing endpoint.
//! - `get`: handles the retrieval of a single template by id.

pub mod catalog;
mod get;
mod list;

use actix_web::web::{get, scope};
use actix_web::Scope;

/// The base path for all template-related API endpoints.
const API_PATH: &str = "/api/templates";

/// Configures and returns the Actix `Scope` for all template-related routes.
///
/// # Registered Routes:
///
/// *   **`GET /`**:
///     - **Handler**: `list::process`
///     - **Description**: Returns summaries of every template in the catalog
///       (id, name, description, category, safety level, file count).
///
/// *   **`GET /{template_id}`**:
///     - **Handler**: `get::process`
///     - **Description**: Returns the full `WebsiteTemplate`, including its
///       file sources and variable metadata, or `404 Not Found` when the
///       catalog does not ship the requested id.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("/{template_id}", get().to(get::process))
}
