use std::time::Duration;

use ricerca::{Horizon, OutcomeStatus, QueryHints, ResearchConfig, Ricerca, RicercaError};

use crate::helpers::{m_results, m_slow, r};

// Timeout behavior runs on the paused virtual clock: sleeps and timeouts
// resolve in deterministic order with no wall-clock dependence.
#[tokio::test(start_paused = true)]
async fn slow_source_times_out_without_stalling_peers() {
    let ricerca = Ricerca::builder()
        .with_source(m_slow(
            "molasses",
            Horizon::Depth,
            500,
            vec![r("https://slow.example/1")],
        ))
        .with_source(m_results("breadth", Horizon::Breadth, vec![r("https://fast.example/1")]))
        .source_timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let report = ricerca
        .research_topic("latency", &ResearchConfig::default(), &QueryHints::default())
        .await
        .unwrap();

    // The fast peer's results are intact; the slow source counts as failed.
    assert_eq!(report.source_urls, vec!["https://fast.example/1"]);
    let outcome = &report.per_source_outcome["molasses"];
    assert_eq!(outcome.status, OutcomeStatus::Failed);
    assert!(outcome.failure.as_deref().unwrap().contains("timed out"));

    let stats = ricerca.statistics();
    assert_eq!(stats.per_source["molasses"].failure_count, 1);
    assert_eq!(stats.per_source["breadth"].success_count, 1);
}

#[tokio::test(start_paused = true)]
async fn every_source_timing_out_fails_the_request() {
    let ricerca = Ricerca::builder()
        .with_source(m_slow("a", Horizon::Depth, 500, vec![]))
        .with_source(m_slow("b", Horizon::Breadth, 500, vec![]))
        .source_timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let err = ricerca
        .research_topic("latency", &ResearchConfig::default(), &QueryHints::default())
        .await
        .unwrap_err();

    let RicercaError::AllSourcesFailed(reasons) = err else {
        panic!("expected AllSourcesFailed, got {err}");
    };
    assert_eq!(reasons.len(), 2);
    assert!(
        reasons
            .iter()
            .all(|e| matches!(e, RicercaError::SourceTimeout { .. }))
    );
}

#[tokio::test(start_paused = true)]
async fn sources_within_the_timeout_are_not_cut_short() {
    let ricerca = Ricerca::builder()
        .with_source(m_slow(
            "deliberate",
            Horizon::Depth,
            50,
            vec![r("https://ok.example/1")],
        ))
        .source_timeout(Duration::from_secs(5))
        .build()
        .unwrap();

    let report = ricerca
        .research_topic("latency", &ResearchConfig::default(), &QueryHints::default())
        .await
        .unwrap();
    assert_eq!(report.source_urls, vec!["https://ok.example/1"]);
}
