pub mod analytics;
pub mod generated;
pub mod security;
pub mod template;
pub mod validation;
pub mod website;
