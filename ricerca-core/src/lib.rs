//! ricerca-core
//!
//! Core traits and algorithms shared across the ricerca ecosystem.
//!
//! - `source`: the `Source` capability trait implemented by adapter crates.
//! - `query`: per-horizon query specialization.
//! - `fusion`: Reciprocal Rank Fusion and MinHash near-duplicate suppression.
//! - `quality`: the coarse quality indicator attached to reports.
#![warn(missing_docs)]

/// Core error type shared by the orchestrator and source adapters.
pub mod error;
/// Rank fusion and near-duplicate suppression.
pub mod fusion;
/// Quality scoring for completed requests.
pub mod quality;
/// Query specialization per source horizon.
pub mod query;
/// The `Source` capability trait and per-request options.
pub mod source;

pub use error::RicercaError;
pub use fusion::{DEFAULT_RRF_K, MinHashLshIndex, MinHashSignature, MinHasher, NearDuplicateSuppressor, fuse};
pub use quality::quality_score;
pub use source::{SearchOptions, Source, SourceKey};

pub use ricerca_types::{
    DedupConfig, GapHint, Horizon, KeywordHint, OrchestratorConfig, OutcomeStatus, OutcomeSummary,
    OverallStats, QueryHints, ResearchConfig, ResearchReport, SearchResult, SourceHealth,
    SourceStats, StatisticsReport,
};
