use serde::{Deserialize, Serialize};

/// Aggregate statistics over recorded generation events, as returned by
/// `GET /api/analytics/summary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    /// Total number of recorded generation attempts.
    pub total: u64,
    /// Attempts whose pipeline ran to completion, including those whose
    /// content the unsafe-file gate withheld from the caller.
    pub ready: u64,
    /// Attempts that failed validation or generation.
    pub errors: u64,
    /// Mean pipeline duration across all attempts, in milliseconds.
    pub average_duration_ms: f64,
    /// Per-template attempt counts, most used first.
    pub by_template: Vec<TemplateCount>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateCount {
    pub template_id: String,
    pub count: u64,
}
