use crate::model::generated::GeneratedFileKind;
use serde::{Deserialize, Serialize};

/// A named, file-structured skeleton of generated output.
///
/// Templates are compiled into the backend binary and loaded once into a
/// read-only catalog; they are never mutated after load. Each template is a
/// list of `TemplateFile`s whose contents carry `{{placeholder}}` markers and
/// flat `{{#block}}...{{/block}}` repetition spans.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteTemplate {
    /// Unique identifier, e.g. "modern-landing".
    pub id: String,
    /// Human-readable name shown in catalog listings.
    pub name: String,
    /// Short description of what the template produces.
    pub description: String,
    /// The category used for catalog filtering and selection.
    pub category: TemplateCategory,
    /// The template source files, in generation order.
    pub files: Vec<TemplateFile>,
    /// npm packages the generated project depends on beyond the framework base.
    pub required_packages: Vec<String>,
    /// How much of the template body is static, developer-authored text.
    pub safety_level: SafetyLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateCategory {
    Business,
    Portfolio,
    Blog,
    Landing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SafetyLevel {
    High,
    Medium,
}

/// One source file inside a `WebsiteTemplate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateFile {
    /// Output path of the generated file, relative to the project root.
    pub path: String,
    /// Template text with placeholder markers, fully loaded at catalog init.
    pub content: String,
    /// What kind of file this template produces.
    pub kind: GeneratedFileKind,
    /// The placeholders this file consumes, for documentation and tooling.
    pub variables: Vec<TemplateVariable>,
}

/// Metadata for a single `{{name}}` placeholder used by a template file.
///
/// `max_length` is carried as declared by the template manifest but is not
/// enforced during substitution.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateVariable {
    pub name: String,
    pub kind: VariableKind,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableKind {
    Text,
    Color,
    Email,
    Phone,
}
