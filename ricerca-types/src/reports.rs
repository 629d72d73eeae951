//! Report envelopes produced by the orchestrator.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::result::SearchResult;

/// Terminal outcome of one source within one research request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStatus {
    /// The source returned a (possibly empty) ranked list.
    Succeeded,
    /// The source errored or timed out.
    Failed,
}

/// Per-source summary attached to a research report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeSummary {
    /// Whether the source succeeded or failed.
    pub status: OutcomeStatus,
    /// Raw results the source contributed (pre-fusion); `0` on failure.
    pub result_count: usize,
    /// Failure description when `status` is `Failed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

impl OutcomeSummary {
    /// Summary for a successful call that returned `result_count` items.
    #[must_use]
    pub const fn succeeded(result_count: usize) -> Self {
        Self {
            status: OutcomeStatus::Succeeded,
            result_count,
            failure: None,
        }
    }

    /// Summary for a failed call.
    #[must_use]
    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            status: OutcomeStatus::Failed,
            result_count: 0,
            failure: Some(reason.into()),
        }
    }
}

/// Result of one `research_topic` request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchReport {
    /// The topic, echoed back.
    pub topic: String,
    /// Fused, deduplicated results in final rank order.
    pub sources: Vec<SearchResult>,
    /// Projection of `sources` onto URLs, in the same order.
    pub source_urls: Vec<String>,
    /// Outcome of every registered source, keyed by registration name.
    pub per_source_outcome: BTreeMap<String, OutcomeSummary>,
    /// Coarse 0-100 quality indicator (informational only).
    pub quality_score: u8,
    /// When the request completed.
    pub researched_at: DateTime<Utc>,
}
