use core::fmt;
use serde::{Deserialize, Serialize};

/// Editorial specialty of a source.
///
/// Each registered source advertises exactly one horizon; the orchestrator
/// uses it to pick the query variant and pacing hint for that source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum Horizon {
    /// Authoritative, academic, peer-reviewed material.
    Depth,
    /// Wide coverage, recent content, diverse perspectives.
    Breadth,
    /// Emerging patterns, predictions, trend analysis.
    Trends,
    /// Editorially curated feeds (RSS and similar pollers).
    Curated,
    /// News-wire style breaking coverage.
    Breaking,
}

impl Horizon {
    /// Stable, kebab-case identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Depth => "depth",
            Self::Breadth => "breadth",
            Self::Trends => "trends",
            Self::Curated => "curated",
            Self::Breaking => "breaking",
        }
    }

    /// Default `max_results` pacing hint for this horizon.
    ///
    /// These are hints passed to the source, not hard caps on what the
    /// orchestrator accepts back.
    #[must_use]
    pub const fn default_max_results(self) -> usize {
        match self {
            Self::Depth => 10,
            Self::Breadth => 30,
            Self::Trends => 12,
            Self::Curated | Self::Breaking => 50,
        }
    }
}

impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operational status reported by a source health probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceHealth {
    /// Fully operational.
    Healthy,
    /// Partially operational (e.g., reachable but returning no results).
    Degraded,
    /// Not operational.
    Failed,
}

impl SourceHealth {
    /// Stable identifier for logs and health reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Degraded => "degraded",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for SourceHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
