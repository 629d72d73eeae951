use ricerca::{Horizon, QueryHints, ResearchConfig, Ricerca};

use crate::helpers::{m_results, r};

#[tokio::test]
async fn five_sources_with_disjoint_results_merge_in_rank_order() {
    // 2 + 3 + 2 + 2 + 1 results, all URLs distinct.
    let depth = m_results(
        "depth",
        Horizon::Depth,
        vec![r("https://d.example/1"), r("https://d.example/2")],
    );
    let breadth = m_results(
        "breadth",
        Horizon::Breadth,
        vec![
            r("https://b.example/1"),
            r("https://b.example/2"),
            r("https://b.example/3"),
        ],
    );
    let trends = m_results(
        "trends",
        Horizon::Trends,
        vec![r("https://t.example/1"), r("https://t.example/2")],
    );
    let curated = m_results(
        "curated",
        Horizon::Curated,
        vec![r("https://c.example/1"), r("https://c.example/2")],
    );
    let breaking = m_results("breaking", Horizon::Breaking, vec![r("https://n.example/1")]);

    let ricerca = Ricerca::builder()
        .with_source(depth)
        .with_source(breadth)
        .with_source(trends)
        .with_source(curated)
        .with_source(breaking)
        .build()
        .unwrap();

    let report = ricerca
        .research_topic("PropTech 2025", &ResearchConfig::default(), &QueryHints::default())
        .await
        .unwrap();

    assert_eq!(report.topic, "PropTech 2025");
    assert_eq!(report.sources.len(), 10);

    // Rank-1 results of the five sources occupy the first five positions,
    // ties broken by registration order.
    let head: Vec<&str> = report.source_urls.iter().take(5).map(String::as_str).collect();
    assert_eq!(
        head,
        vec![
            "https://d.example/1",
            "https://b.example/1",
            "https://t.example/1",
            "https://c.example/1",
            "https://n.example/1",
        ]
    );

    // URL projection matches the fused list.
    let urls: Vec<&str> = report.sources.iter().map(|s| s.url.as_str()).collect();
    assert_eq!(report.source_urls, urls);

    // Every result carries the registration name and a fusion score.
    for result in &report.sources {
        assert!(["depth", "breadth", "trends", "curated", "breaking"]
            .contains(&result.source_name.as_str()));
        assert!(result.rrf_score.is_some());
    }

    // All five outcomes succeeded with their raw counts.
    let counts: Vec<usize> = ["breadth", "breaking", "curated", "depth", "trends"]
        .iter()
        .map(|name| report.per_source_outcome[*name].result_count)
        .collect();
    assert_eq!(counts, vec![3, 1, 2, 2, 2]);

    // Coverage 25 (10 of 20) + health 30 + diversity 20.
    assert_eq!(report.quality_score, 75);
}

#[tokio::test]
async fn fixture_mocks_cover_all_horizons() {
    let ricerca = Ricerca::builder()
        .with_source(std::sync::Arc::new(ricerca_mock::MockSource::new(
            "depth",
            Horizon::Depth,
        )))
        .with_source(std::sync::Arc::new(ricerca_mock::MockSource::new(
            "breadth",
            Horizon::Breadth,
        )))
        .with_source(std::sync::Arc::new(ricerca_mock::MockSource::new(
            "trends",
            Horizon::Trends,
        )))
        .build()
        .unwrap();

    let report = ricerca
        .research_topic("PropTech 2025", &ResearchConfig::default(), &QueryHints::default())
        .await
        .unwrap();

    // Fixture URLs are disjoint across horizons: 2 + 3 + 2.
    assert_eq!(report.sources.len(), 7);
    assert!(report.per_source_outcome.values().all(|o| o.failure.is_none()));
}
