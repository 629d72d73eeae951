//! Ricerca orchestrates one research request across multiple search sources.
//!
//! Overview
//! - Fans a topic out to every registered source in parallel, each with the
//!   query variant for its horizon and an independent timeout.
//! - Degrades gracefully: any subset of sources may fail, up to all-but-one,
//!   and the request still completes; failures are visible in the report and
//!   in statistics, never as request errors.
//! - Merges ranked lists with Reciprocal Rank Fusion, so material confirmed
//!   by several sources outranks single-source material.
//! - Suppresses near-duplicate content (same text under different URLs) with
//!   MinHash signatures behind an LSH index.
//!
//! Key behaviors and trade-offs
//! - No short-circuiting: a failing source cancels nothing and the first
//!   success does not end the fan-out; the aggregation exists for diversity,
//!   not first-response latency.
//! - Determinism: outcomes are collected in registration order regardless of
//!   completion order, so identical inputs fuse to identical output order.
//! - Cancellation: source futures are joined inline; dropping a request
//!   drops every in-flight source call with it.
#![warn(missing_docs)]

pub(crate) mod core;
mod router;

pub use core::{Ricerca, RicercaBuilder};

pub use ricerca_core::{RicercaError, SearchOptions, Source, SourceKey};

// Re-export shared types for convenience
pub use ricerca_types::{
    DedupConfig, GapHint, Horizon, KeywordHint, OrchestratorConfig, OutcomeStatus, OutcomeSummary,
    OverallStats, QueryHints, ResearchConfig, ResearchReport, SearchResult, SourceHealth,
    SourceStats, StatisticsReport,
};
