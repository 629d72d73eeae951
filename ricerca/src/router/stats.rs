use ricerca_types::StatisticsReport;

use crate::core::Ricerca;

impl Ricerca {
    /// Snapshot per-source counters and overall request statistics.
    #[must_use]
    pub fn statistics(&self) -> StatisticsReport {
        self.stats_mut().snapshot()
    }

    /// Zero all counters. No other observable effect.
    pub fn reset_statistics(&self) {
        let mut stats = self.stats_mut();
        stats.total_requests = 0;
        stats.failed_requests = 0;
        stats.total_results_found = 0;
        for entry in stats.per_source.values_mut() {
            entry.reset();
        }
    }
}
