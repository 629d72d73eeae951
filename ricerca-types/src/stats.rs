//! Per-source counters and statistics snapshots.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Monotonic per-source counters accumulated over the orchestrator lifetime.
///
/// Counters only increase; `reset` is the single sanctioned way back to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceStats {
    /// Number of calls that completed successfully (including empty lists).
    pub success_count: u64,
    /// Number of calls that failed or timed out.
    pub failure_count: u64,
    /// Total results returned across all successful calls.
    pub total_results_returned: u64,
}

impl SourceStats {
    /// Record one successful call that returned `results` items.
    pub const fn record_success(&mut self, results: u64) {
        self.success_count += 1;
        self.total_results_returned += results;
    }

    /// Record one failed call.
    pub const fn record_failure(&mut self) {
        self.failure_count += 1;
    }

    /// Total calls issued against this source.
    #[must_use]
    pub const fn calls_issued(&self) -> u64 {
        self.success_count + self.failure_count
    }

    /// Zero all counters.
    pub const fn reset(&mut self) {
        self.success_count = 0;
        self.failure_count = 0;
        self.total_results_returned = 0;
    }
}

/// Orchestrator-wide counters across all research requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OverallStats {
    /// Research requests accepted (past input validation).
    pub total_requests: u64,
    /// Requests that ended in `AllSourcesFailed`.
    pub failed_requests: u64,
    /// Fused, deduplicated results handed back across all requests.
    pub total_results_found: u64,
    /// `(total_requests - failed_requests) / total_requests`; `0.0` before the
    /// first request.
    pub success_rate: f64,
}

/// Snapshot of all statistics at a point in time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatisticsReport {
    /// Per-source counters keyed by registration name.
    pub per_source: BTreeMap<String, SourceStats>,
    /// Orchestrator-wide counters.
    pub overall: OverallStats,
}
