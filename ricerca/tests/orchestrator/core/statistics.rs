use ricerca::{Horizon, QueryHints, ResearchConfig, Ricerca};

use crate::helpers::{m_fail, m_results, r};

#[tokio::test]
async fn counters_accumulate_across_requests() {
    let ricerca = Ricerca::builder()
        .with_source(m_results(
            "depth",
            Horizon::Depth,
            vec![r("https://d.example/1"), r("https://d.example/2")],
        ))
        .with_source(m_fail("breadth", Horizon::Breadth, "down"))
        .build()
        .unwrap();

    let cfg = ResearchConfig::default();
    let hints = QueryHints::default();
    ricerca.research_topic("first", &cfg, &hints).await.unwrap();
    ricerca.research_topic("second", &cfg, &hints).await.unwrap();

    let stats = ricerca.statistics();
    assert_eq!(stats.overall.total_requests, 2);
    assert_eq!(stats.overall.failed_requests, 0);
    assert!((stats.overall.success_rate - 1.0).abs() < f64::EPSILON);
    // Two deduplicated results per request.
    assert_eq!(stats.overall.total_results_found, 4);

    let depth = &stats.per_source["depth"];
    assert_eq!(depth.success_count, 2);
    assert_eq!(depth.failure_count, 0);
    assert_eq!(depth.total_results_returned, 4);
    assert_eq!(depth.calls_issued(), 2);

    let breadth = &stats.per_source["breadth"];
    assert_eq!(breadth.success_count, 0);
    assert_eq!(breadth.failure_count, 2);
    assert_eq!(breadth.calls_issued(), 2);
}

#[tokio::test]
async fn reset_zeroes_everything() {
    let ricerca = Ricerca::builder()
        .with_source(m_results("depth", Horizon::Depth, vec![r("https://d.example/1")]))
        .build()
        .unwrap();

    ricerca
        .research_topic("warmup", &ResearchConfig::default(), &QueryHints::default())
        .await
        .unwrap();
    assert_eq!(ricerca.statistics().overall.total_requests, 1);

    ricerca.reset_statistics();
    let stats = ricerca.statistics();
    assert_eq!(stats.overall.total_requests, 0);
    assert_eq!(stats.overall.failed_requests, 0);
    assert_eq!(stats.overall.total_results_found, 0);
    assert!((stats.overall.success_rate - 0.0).abs() < f64::EPSILON);
    assert_eq!(stats.per_source["depth"].success_count, 0);
    // The source remains registered after a reset.
    assert!(stats.per_source.contains_key("depth"));
}

#[test]
fn fresh_orchestrator_reports_zeroed_statistics() {
    let ricerca = Ricerca::builder()
        .with_source(m_results("depth", Horizon::Depth, vec![]))
        .build()
        .unwrap();

    let stats = ricerca.statistics();
    assert_eq!(stats.overall.total_requests, 0);
    assert!((stats.overall.success_rate - 0.0).abs() < f64::EPSILON);
    assert_eq!(stats.per_source["depth"], ricerca::SourceStats::default());
}
