//! The standardized record describing one retrieved item.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One retrieved item as produced by a source adapter.
///
/// `url` is the canonical identity key for fusion and deduplication; a result
/// with an empty `url` is invalid and is dropped on entry to fusion.
///
/// `rrf_score` is reserved: adapters must leave it unset, the fusion engine
/// overwrites it unconditionally. `score` is an opaque source-native relevance
/// value and is never used for ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Canonical URL of the item.
    pub url: String,
    /// Human-readable title.
    pub title: String,
    /// Short description or excerpt.
    pub snippet: String,
    /// Full extracted text, when available. Required for near-dup detection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Registration name of the source that produced this result.
    pub source_name: String,
    /// Publication timestamp, when the source reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    /// Source-native relevance score (opaque; never used for fusion ordering).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    /// Accumulated Reciprocal Rank Fusion score, populated by the core.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rrf_score: Option<f64>,
    /// Open metadata bag for adapter-specific extras; preserved through the
    /// pipeline untouched.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl SearchResult {
    /// Create a result with the required fields; optional fields start empty.
    #[must_use]
    pub fn new(
        url: impl Into<String>,
        title: impl Into<String>,
        snippet: impl Into<String>,
        source_name: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            snippet: snippet.into(),
            content: None,
            source_name: source_name.into(),
            published_at: None,
            score: None,
            rrf_score: None,
            metadata: BTreeMap::new(),
        }
    }

    /// Attach full extracted text.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Attach a publication timestamp.
    #[must_use]
    pub const fn with_published_at(mut self, ts: DateTime<Utc>) -> Self {
        self.published_at = Some(ts);
        self
    }

    /// Attach a source-native relevance score.
    #[must_use]
    pub const fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    /// Insert one metadata entry.
    #[must_use]
    pub fn with_metadata(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}
