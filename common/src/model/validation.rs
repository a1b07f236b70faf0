use serde::{Deserialize, Serialize};

/// The outcome of validating a `WebsiteRequest` before generation.
///
/// One instance per validation call. `valid` is true exactly when `errors` is
/// empty. `warnings` is part of the contract but no code path populates it
/// today; clients should treat it as an always-empty list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
            warnings: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    /// The request field the error refers to, when it refers to one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub message: String,
}

impl ValidationError {
    pub fn syntax(field: &str, message: impl Into<String>) -> Self {
        Self {
            kind: ValidationErrorKind::Syntax,
            field: Some(field.to_string()),
            message: message.into(),
        }
    }

    pub fn security(field: &str, message: impl Into<String>) -> Self {
        Self {
            kind: ValidationErrorKind::Security,
            field: Some(field.to_string()),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationErrorKind {
    Syntax,
    Security,
}

/// A non-fatal validation finding. Defined by the contract but never
/// constructed by the current validator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationWarning {
    pub message: String,
}
