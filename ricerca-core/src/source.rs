use async_trait::async_trait;

use crate::RicercaError;
pub use ricerca_types::SourceKey;
use ricerca_types::{Horizon, ResearchConfig, SearchResult, SourceHealth};

/// Per-request options handed to every source call.
///
/// Sources read only the fields relevant to them: `language` is a hint for
/// backends that accept one, `feed_urls` is consumed by feed-style sources
/// and ignored by everything else.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Preferred result language (ISO code), when configured.
    pub language: Option<String>,
    /// Feed URLs for curated sources, in priority order.
    pub feed_urls: Vec<String>,
}

impl SearchOptions {
    /// Project the request-relevant fields out of a research configuration.
    #[must_use]
    pub fn from_config(cfg: &ResearchConfig) -> Self {
        Self {
            language: cfg.language.clone(),
            feed_urls: cfg.feed_urls.clone(),
        }
    }
}

/// Capability contract implemented by source adapters.
///
/// Outcome model: `search` surfaces internal failures (network, rate limit,
/// authentication, parse) as `Err`; the orchestrator contains every error
/// behind its fan-out join and records it as a failed outcome for that source
/// only. An `Ok(vec![])` is a *success* with zero results. Adapters must not
/// panic in the normal path.
///
/// Source futures are joined inline by the orchestrator, so dropping a
/// research request drops every in-flight `search` with it; no source call
/// outlives the request that launched it.
#[async_trait]
pub trait Source: Send + Sync {
    /// A stable identifier used for registration, statistics, and the
    /// `source_name` field of every result (e.g. "searxng", "newswire").
    fn name(&self) -> &'static str;

    /// Canonical source key constructed from the static name.
    fn key(&self) -> SourceKey {
        SourceKey::new(self.name())
    }

    /// Editorial specialty of this source; immutable over its lifetime.
    fn horizon(&self) -> Horizon;

    /// Cost in USD per query (`0.0` for free backends). Budget accounting
    /// only; never consulted for fusion.
    fn cost_per_query(&self) -> f64 {
        0.0
    }

    /// Pacing hint for `max_results`, not a hard cap on what the source may
    /// return. Defaults to the horizon's conventional value.
    fn max_results_hint(&self) -> usize {
        self.horizon().default_max_results()
    }

    /// Execute a search and return results in this source's own rank order
    /// (index 0 = most relevant).
    ///
    /// # Errors
    /// Returns an error on any internal failure; the orchestrator absorbs it.
    async fn search(
        &self,
        query: &str,
        max_results: usize,
        opts: &SearchOptions,
    ) -> Result<Vec<SearchResult>, RicercaError>;

    /// Side-effect-free health probe. Adapters map their own errors to
    /// [`SourceHealth::Failed`]; this call never errors.
    async fn health_check(&self) -> SourceHealth;
}
