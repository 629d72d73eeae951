use std::time::Duration;

use async_trait::async_trait;
use ricerca_core::{RicercaError, SearchOptions, Source};
use ricerca_types::{Horizon, SearchResult, SourceHealth};

mod fixtures;

pub use fixtures::results::for_horizon as fixture_results;

/// Mock source for CI-safe examples and tests.
///
/// By default it serves deterministic fixture data for its horizon; behavior
/// can be tailored per test with the builder-style modifiers below.
pub struct MockSource {
    name: &'static str,
    horizon: Horizon,
    results: Vec<SearchResult>,
    fail_with: Option<String>,
    delay: Option<Duration>,
    health: SourceHealth,
    cost_per_query: f64,
}

impl MockSource {
    /// Create a mock serving the fixture results for `horizon`.
    #[must_use]
    pub fn new(name: &'static str, horizon: Horizon) -> Self {
        Self {
            name,
            horizon,
            results: fixtures::results::for_horizon(horizon, name),
            fail_with: None,
            delay: None,
            health: SourceHealth::Healthy,
            cost_per_query: 0.0,
        }
    }

    /// Replace the fixture results with an explicit ranked list.
    #[must_use]
    pub fn with_results(mut self, results: Vec<SearchResult>) -> Self {
        self.results = results;
        self
    }

    /// Make every `search` call fail with the given reason; health probes
    /// report `Failed`.
    #[must_use]
    pub fn failing(mut self, reason: impl Into<String>) -> Self {
        self.fail_with = Some(reason.into());
        self.health = SourceHealth::Failed;
        self
    }

    /// Sleep for `delay` before answering, to exercise timeout paths.
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Override the health probe answer.
    #[must_use]
    pub const fn with_health(mut self, health: SourceHealth) -> Self {
        self.health = health;
        self
    }

    /// Override the advertised cost per query.
    #[must_use]
    pub const fn with_cost_per_query(mut self, cost: f64) -> Self {
        self.cost_per_query = cost;
        self
    }
}

#[async_trait]
impl Source for MockSource {
    fn name(&self) -> &'static str {
        self.name
    }

    fn horizon(&self) -> Horizon {
        self.horizon
    }

    fn cost_per_query(&self) -> f64 {
        self.cost_per_query
    }

    async fn search(
        &self,
        _query: &str,
        max_results: usize,
        _opts: &SearchOptions,
    ) -> Result<Vec<SearchResult>, RicercaError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(reason) = &self.fail_with {
            return Err(RicercaError::source(self.name, reason.clone()));
        }
        Ok(self.results.iter().take(max_results).cloned().collect())
    }

    async fn health_check(&self) -> SourceHealth {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.health
    }
}
