use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use ricerca_core::{NearDuplicateSuppressor, RicercaError, Source};
use ricerca_types::{
    DedupConfig, OrchestratorConfig, OverallStats, SourceStats, StatisticsReport,
};

/// Orchestrator that fans one research request out across registered sources.
pub struct Ricerca {
    pub(crate) sources: Vec<Arc<dyn Source>>,
    pub(crate) cfg: OrchestratorConfig,
    pub(crate) suppressor: NearDuplicateSuppressor,
    pub(crate) stats: Mutex<StatsTable>,
}

impl std::fmt::Debug for Ricerca {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ricerca")
            .field("sources", &self.sources.iter().map(|s| s.name()).collect::<Vec<_>>())
            .field("cfg", &self.cfg)
            .field("suppressor", &self.suppressor)
            .field("stats", &self.stats)
            .finish()
    }
}

/// Mutable statistics owned by the orchestrator instance.
///
/// Mutated only in the collection phase after all source tasks have joined
/// and in `reset_statistics`; per-source counters are monotonic in between.
#[derive(Debug, Default)]
pub(crate) struct StatsTable {
    pub(crate) per_source: BTreeMap<String, SourceStats>,
    pub(crate) total_requests: u64,
    pub(crate) failed_requests: u64,
    pub(crate) total_results_found: u64,
}

impl StatsTable {
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn snapshot(&self) -> StatisticsReport {
        let success_rate = if self.total_requests == 0 {
            0.0
        } else {
            (self.total_requests - self.failed_requests) as f64 / self.total_requests as f64
        };
        StatisticsReport {
            per_source: self.per_source.clone(),
            overall: OverallStats {
                total_requests: self.total_requests,
                failed_requests: self.failed_requests,
                total_results_found: self.total_results_found,
                success_rate,
            },
        }
    }
}

/// Builder for constructing a `Ricerca` orchestrator with custom configuration.
pub struct RicercaBuilder {
    sources: Vec<Arc<dyn Source>>,
    cfg: OrchestratorConfig,
}

impl Default for RicercaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RicercaBuilder {
    /// Create a new builder with sensible defaults.
    ///
    /// Behavior and trade-offs:
    /// - Starts with no sources; register at least one via `with_source`
    ///   (or enable `testing_mode` to build an empty orchestrator for tests).
    /// - Defaults are conservative: 30s per-source timeout, the standard RRF
    ///   constant (60), and the stock suppressor parameters (0.80 / 128).
    #[must_use]
    pub fn new() -> Self {
        Self {
            sources: vec![],
            cfg: OrchestratorConfig::default(),
        }
    }

    /// Register a source.
    ///
    /// Behavior and trade-offs:
    /// - Registration order is the stable iteration order everywhere it
    ///   matters: fusion input ordering, tie-breaking, and report maps.
    /// - Each source must carry a unique name; duplicates are rejected at
    ///   build time.
    #[must_use]
    pub fn with_source(mut self, source: Arc<dyn Source>) -> Self {
        self.sources.push(source);
        self
    }

    /// Register a source from a fallible constructor, omitting it on failure.
    ///
    /// A source that cannot be constructed (missing credential, bad endpoint)
    /// is skipped and the orchestrator proceeds with the remaining ones. The
    /// usual at-least-one-source check still applies at build time.
    #[must_use]
    pub fn with_available_source(
        mut self,
        source: Result<Arc<dyn Source>, RicercaError>,
    ) -> Self {
        match source {
            Ok(source) => self.sources.push(source),
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    target = "ricerca::builder",
                    event = "source_skipped",
                    error = %_err,
                    "skipping unavailable source"
                );
            }
        }
        self
    }

    /// Set the timeout applied independently to every source call.
    ///
    /// Behavior and trade-offs:
    /// - Bounds both `search` fan-out calls and health probes.
    /// - A timed-out source is recorded as failed for that request; peers are
    ///   unaffected.
    #[must_use]
    pub const fn source_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.cfg.source_timeout = timeout;
        self
    }

    /// Set the Reciprocal Rank Fusion smoothing constant.
    ///
    /// Higher values flatten the advantage of top ranks from any single
    /// source; 60 is the standard choice.
    #[must_use]
    pub const fn rrf_k(mut self, k: f64) -> Self {
        self.cfg.rrf_k = k;
        self
    }

    /// Set the near-duplicate suppressor parameters.
    ///
    /// Construction-time tuning only; the parameters never vary per request.
    #[must_use]
    pub const fn dedup(mut self, cfg: DedupConfig) -> Self {
        self.cfg.dedup = cfg;
        self
    }

    /// Allow building with zero registered sources.
    ///
    /// Intended for tests that exercise construction and statistics paths
    /// without live sources.
    #[must_use]
    pub const fn testing_mode(mut self, yes: bool) -> Self {
        self.cfg.testing_mode = yes;
        self
    }

    /// Build the `Ricerca` orchestrator.
    ///
    /// # Errors
    /// - `InvalidInput` if no sources are registered and `testing_mode` is off.
    /// - `InvalidInput` if two sources share a registration name.
    pub fn build(self) -> Result<Ricerca, RicercaError> {
        if self.sources.is_empty() && !self.cfg.testing_mode {
            return Err(RicercaError::invalid_input(
                "no sources registered; add at least one via with_source(...)",
            ));
        }

        let mut seen = std::collections::HashSet::new();
        for source in &self.sources {
            if !seen.insert(source.name()) {
                return Err(RicercaError::invalid_input(format!(
                    "duplicate source name: {}",
                    source.name()
                )));
            }
        }

        let per_source = self
            .sources
            .iter()
            .map(|s| (s.name().to_string(), SourceStats::default()))
            .collect();

        Ok(Ricerca {
            suppressor: NearDuplicateSuppressor::new(self.cfg.dedup),
            sources: self.sources,
            cfg: self.cfg,
            stats: Mutex::new(StatsTable {
                per_source,
                ..StatsTable::default()
            }),
        })
    }
}

impl Ricerca {
    /// Start building a new `Ricerca` instance.
    ///
    /// Typical usage chains source registration and preferences, e.g.:
    ///
    /// ```rust,ignore
    /// let ricerca = ricerca::Ricerca::builder()
    ///     .with_source(depth_source)
    ///     .with_source(breadth_source)
    ///     .source_timeout(std::time::Duration::from_secs(20))
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> RicercaBuilder {
        RicercaBuilder::new()
    }

    /// Registration names of all sources, in registration order.
    #[must_use]
    pub fn source_names(&self) -> Vec<&'static str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    pub(crate) fn stats_mut(&self) -> MutexGuard<'_, StatsTable> {
        self.stats.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Wrap a source future with a timeout and standardized timeout error
    /// mapping.
    pub(crate) async fn source_call_with_timeout<T, Fut>(
        source_name: &'static str,
        timeout: std::time::Duration,
        fut: Fut,
    ) -> Result<T, RicercaError>
    where
        Fut: core::future::Future<Output = Result<T, RicercaError>>,
    {
        (tokio::time::timeout(timeout, fut).await)
            .unwrap_or_else(|_| Err(RicercaError::source_timeout(source_name)))
    }
}
