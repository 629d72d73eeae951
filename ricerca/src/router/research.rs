use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use ricerca_core::{RicercaError, SearchOptions, fusion, quality_score, query};
use ricerca_types::{OutcomeSummary, QueryHints, ResearchConfig, ResearchReport};

use crate::core::Ricerca;

impl Ricerca {
    /// Research a topic by fanning out to every registered source in
    /// parallel, then fusing, deduplicating, and scoring the results.
    ///
    /// Behavior and trade-offs:
    /// - Each source receives the query variant for its horizon and its own
    ///   pacing hint, bounded by an independent per-source timeout.
    /// - No short-circuiting in either direction: a failing source cancels
    ///   nothing, and the first success does not end the fan-out; the value
    ///   of the aggregation is diversity, not first-response latency.
    /// - Source failures are absorbed: they surface only through
    ///   `per_source_outcome` and statistics. The request fails only when
    ///   *every* source failed.
    ///
    /// # Errors
    /// - `InvalidInput` for an empty topic.
    /// - `AllSourcesFailed` when no source succeeded, carrying the individual
    ///   failure reasons.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "ricerca::router",
            skip(self, config, hints),
            fields(topic = %topic),
        )
    )]
    pub async fn research_topic(
        &self,
        topic: &str,
        config: &ResearchConfig,
        hints: &QueryHints,
    ) -> Result<ResearchReport, RicercaError> {
        if topic.trim().is_empty() {
            return Err(RicercaError::invalid_input("topic cannot be empty"));
        }

        self.stats_mut().total_requests += 1;

        let opts = SearchOptions::from_config(config);
        let timeout = self.cfg.source_timeout;

        let tasks = self.sources.iter().map(|s| {
            let source = Arc::clone(s);
            let query = query::query_for_horizon(source.horizon(), topic, config, hints);
            let opts = opts.clone();
            async move {
                let name = source.name();
                let max_results = source.max_results_hint();
                let outcome = Self::source_call_with_timeout(
                    name,
                    timeout,
                    source.search(&query, max_results, &opts),
                )
                .await;
                (name, outcome)
            }
        });

        // Join all tasks; outcome order is registration order regardless of
        // completion order, which keeps fusion deterministic.
        let joined = futures::future::join_all(tasks).await;

        let mut all_results = Vec::new();
        let mut successes = 0usize;
        let mut failures: Vec<RicercaError> = Vec::new();
        let mut per_source_outcome = BTreeMap::new();
        {
            let mut stats = self.stats_mut();
            for (name, outcome) in joined {
                let entry = stats.per_source.entry(name.to_string()).or_default();
                match outcome {
                    Ok(results) => {
                        entry.record_success(results.len() as u64);
                        per_source_outcome
                            .insert(name.to_string(), OutcomeSummary::succeeded(results.len()));
                        successes += 1;
                        // Tag with the registration name; adapters are
                        // expected to match it but the registry is the
                        // authority.
                        all_results.extend(results.into_iter().map(|mut r| {
                            r.source_name = name.to_string();
                            r
                        }));
                    }
                    Err(err) => {
                        entry.record_failure();
                        #[cfg(feature = "tracing")]
                        tracing::warn!(
                            target = "ricerca::router",
                            event = "source_failed",
                            source = name,
                            error = %err,
                            "source failed; continuing with remaining sources"
                        );
                        per_source_outcome
                            .insert(name.to_string(), OutcomeSummary::failed(err.to_string()));
                        failures.push(err);
                    }
                }
            }
        }

        if successes == 0 {
            self.stats_mut().failed_requests += 1;
            return Err(RicercaError::AllSourcesFailed(failures));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target = "ricerca::router",
            event = "sources_complete",
            successful = successes,
            failed = failures.len(),
            raw_results = all_results.len(),
            "fan-out complete"
        );

        let fused = fusion::fuse(all_results, self.cfg.rrf_k);
        let deduped = self.suppressor.suppress(fused);
        self.stats_mut().total_results_found += deduped.len() as u64;

        let quality = quality_score(deduped.len(), successes, failures.len());

        #[cfg(feature = "tracing")]
        tracing::info!(
            target = "ricerca::router",
            event = "research_complete",
            merged = deduped.len(),
            quality = quality,
            "research complete"
        );

        Ok(ResearchReport {
            topic: topic.to_string(),
            source_urls: deduped.iter().map(|r| r.url.clone()).collect(),
            sources: deduped,
            per_source_outcome,
            quality_score: quality,
            researched_at: Utc::now(),
        })
    }
}
