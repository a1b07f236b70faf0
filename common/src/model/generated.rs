use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single file produced by the generation pipeline.
///
/// Files live only in memory; the pipeline never writes them to disk. `safe`
/// reflects the post-substitution security scan (false implies at least one
/// `SecurityIssue` was recorded for this file), and `validated` is true for
/// every file the pipeline returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
    pub kind: GeneratedFileKind,
    pub safe: bool,
    pub validated: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneratedFileKind {
    Component,
    Page,
    Config,
    Style,
}

/// The lifecycle state of a generated website.
///
/// The only legal transitions are `Generating -> Ready` and
/// `Generating -> Error`; `Ready` and `Error` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WebsiteStatus {
    Generating,
    Ready,
    Error,
}

impl WebsiteStatus {
    /// Whether moving from `self` to `next` is a legal transition.
    pub fn can_transition(&self, next: WebsiteStatus) -> bool {
        matches!(
            (self, next),
            (WebsiteStatus::Generating, WebsiteStatus::Ready)
                | (WebsiteStatus::Generating, WebsiteStatus::Error)
        )
    }
}

/// The complete result of one generation request.
///
/// One instance exists per call to the pipeline; the caller owns it after
/// return and nothing is persisted by the pipeline itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedWebsite {
    pub project_id: String,
    pub project_name: String,
    pub description: String,
    pub files: Vec<GeneratedFile>,
    pub status: WebsiteStatus,
    pub created_at: DateTime<Utc>,
}

impl GeneratedWebsite {
    /// Creates an empty website in the `Generating` state.
    pub fn new(project_id: String, project_name: String, description: String) -> Self {
        Self {
            project_id,
            project_name,
            description,
            files: Vec::new(),
            status: WebsiteStatus::Generating,
            created_at: Utc::now(),
        }
    }

    /// Moves the website to `Ready`. Returns false (and leaves the status
    /// untouched) when the current state does not allow the transition.
    pub fn mark_ready(&mut self) -> bool {
        self.transition(WebsiteStatus::Ready)
    }

    /// Moves the website to `Error`, with the same transition rules.
    pub fn mark_error(&mut self) -> bool {
        self.transition(WebsiteStatus::Error)
    }

    fn transition(&mut self, next: WebsiteStatus) -> bool {
        if self.status.can_transition(next) {
            self.status = next;
            true
        } else {
            false
        }
    }
}
