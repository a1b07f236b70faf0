pub mod analytics;
pub mod security;
pub mod templates;
pub mod validation;
pub mod websites;
