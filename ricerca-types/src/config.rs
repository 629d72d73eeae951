//! Configuration types shared across the orchestrator and source adapters.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Market/topic configuration for one research request.
///
/// All fields are optional; query specialization skips the cues it has no
/// value for. `feed_urls` is consumed only by feed-style (curated) sources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchConfig {
    /// Industry domain cue (e.g. "SaaS"); contributes to depth/trends queries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Geographic market cue (e.g. "Germany"); contributes to breadth queries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market: Option<String>,
    /// Vertical cue (e.g. "PropTech"); contributes to depth and trends queries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical: Option<String>,
    /// Language hint passed through to sources that accept one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Feed URLs consumed by feed-based sources, in priority order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub feed_urls: Vec<String>,
}

/// A keyword hint, accepted either as a bare string or as a
/// `{"keyword": …}` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeywordHint {
    /// Bare keyword string.
    Plain(String),
    /// Record form, as emitted by keyword-extraction tooling.
    Record {
        /// The keyword text.
        keyword: String,
    },
}

impl KeywordHint {
    /// The keyword text regardless of representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Plain(s) => s,
            Self::Record { keyword } => keyword,
        }
    }
}

impl From<&str> for KeywordHint {
    fn from(s: &str) -> Self {
        Self::Plain(s.to_string())
    }
}

/// A competitor-gap hint, accepted either as a bare string or as a
/// `{"gap": …}` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GapHint {
    /// Bare gap description.
    Plain(String),
    /// Record form.
    Record {
        /// The gap description text.
        gap: String,
    },
}

impl GapHint {
    /// The gap text regardless of representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Plain(s) => s,
            Self::Record { gap } => gap,
        }
    }
}

impl From<&str> for GapHint {
    fn from(s: &str) -> Self {
        Self::Plain(s.to_string())
    }
}

/// Optional steering hints for query specialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryHints {
    /// Keywords to focus on; at most two are folded into a query.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<KeywordHint>,
    /// Content gaps from competitor research; at most one is folded into the
    /// breadth query.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub competitor_gaps: Vec<GapHint>,
}

/// Parameters of the near-duplicate suppressor.
///
/// Construction-time tuning knobs; they are never varied per request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DedupConfig {
    /// Jaccard similarity threshold above which content is suppressed.
    pub threshold: f64,
    /// Number of MinHash permutations per signature.
    pub num_permutations: usize,
}

impl Default for DedupConfig {
    fn default() -> Self {
        Self {
            threshold: 0.80,
            num_permutations: 128,
        }
    }
}

/// Global configuration for the `Ricerca` orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrchestratorConfig {
    /// Timeout applied independently to each source call (search and health).
    pub source_timeout: Duration,
    /// Reciprocal Rank Fusion smoothing constant.
    pub rrf_k: f64,
    /// Near-duplicate suppressor parameters.
    pub dedup: DedupConfig,
    /// Allow construction with zero registered sources (tests only).
    pub testing_mode: bool,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            source_timeout: Duration::from_secs(30),
            rrf_k: 60.0,
            dedup: DedupConfig::default(),
            testing_mode: false,
        }
    }
}
