use std::sync::Arc;
use std::time::Duration;

use ricerca::{Horizon, Ricerca, SourceHealth};

use crate::helpers::{TestSource, m_fail, m_results};

#[tokio::test]
async fn health_probe_reports_every_source() {
    let degraded = Arc::new(TestSource {
        name: "trends",
        horizon: Horizon::Trends,
        health: SourceHealth::Degraded,
        ..TestSource::default()
    });

    let ricerca = Ricerca::builder()
        .with_source(m_results("depth", Horizon::Depth, vec![]))
        .with_source(m_fail("breadth", Horizon::Breadth, "down"))
        .with_source(degraded)
        .build()
        .unwrap();

    let health = ricerca.source_health().await;
    assert_eq!(health["depth"], SourceHealth::Healthy);
    assert_eq!(health["breadth"], SourceHealth::Failed);
    assert_eq!(health["trends"], SourceHealth::Degraded);
    assert_eq!(health.len(), 3);
}

#[tokio::test(start_paused = true)]
async fn slow_probe_counts_as_failed() {
    let slow = Arc::new(TestSource {
        name: "molasses",
        horizon: Horizon::Depth,
        delay_ms: 500,
        ..TestSource::default()
    });

    let ricerca = Ricerca::builder()
        .with_source(slow)
        .with_source(m_results("breadth", Horizon::Breadth, vec![]))
        .source_timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let health = ricerca.source_health().await;
    assert_eq!(health["molasses"], SourceHealth::Failed);
    assert_eq!(health["breadth"], SourceHealth::Healthy);
}
