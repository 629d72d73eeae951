use std::collections::BTreeMap;
use std::sync::Arc;

use ricerca_types::SourceHealth;

use crate::core::Ricerca;

impl Ricerca {
    /// Probe every registered source concurrently and report its health.
    ///
    /// Behavior: each probe is bounded by the configured per-source timeout;
    /// a probe that times out reports `Failed`. Probing never fails the call
    /// itself.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "ricerca::router", skip(self))
    )]
    pub async fn source_health(&self) -> BTreeMap<String, SourceHealth> {
        let timeout = self.cfg.source_timeout;
        let probes = self.sources.iter().map(|s| {
            let source = Arc::clone(s);
            async move {
                let name = source.name();
                let health = match tokio::time::timeout(timeout, source.health_check()).await {
                    Ok(health) => health,
                    Err(_) => SourceHealth::Failed,
                };
                (name.to_string(), health)
            }
        });

        futures::future::join_all(probes).await.into_iter().collect()
    }
}
