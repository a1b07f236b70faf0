use serde::{Deserialize, Serialize};

/// The verdict of one security scan over one piece of content.
///
/// Recomputed on every scan call and never stored. `passed` is true exactly
/// when `issues` is empty; `score` starts at 100 and loses a fixed penalty per
/// matched pattern entry, floored at 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityCheck {
    pub passed: bool,
    pub issues: Vec<SecurityIssue>,
    pub score: u32,
}

/// A flagged match against a known-dangerous code pattern.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityIssue {
    pub severity: IssueSeverity,
    pub category: IssueCategory,
    pub message: String,
    /// The filename (or logical field name) the content was scanned under.
    pub file: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueCategory {
    Xss,
    Injection,
    MaliciousCode,
}
