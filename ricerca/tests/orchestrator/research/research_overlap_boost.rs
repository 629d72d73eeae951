use ricerca::{Horizon, QueryHints, ResearchConfig, Ricerca};

use crate::helpers::{m_results, r};

#[tokio::test]
async fn url_confirmed_by_three_sources_rises_to_the_top() {
    let x = "https://shared.example/x";

    // a: [X, a1], b: [b1, X], c: [c1, X].
    let a = m_results("a", Horizon::Depth, vec![r(x), r("https://a.example/1")]);
    let b = m_results("b", Horizon::Breadth, vec![r("https://b.example/1"), r(x)]);
    let c = m_results("c", Horizon::Trends, vec![r("https://c.example/1"), r(x)]);

    let ricerca = Ricerca::builder()
        .with_source(a)
        .with_source(b)
        .with_source(c)
        .build()
        .unwrap();

    let report = ricerca
        .research_topic("overlap", &ResearchConfig::default(), &QueryHints::default())
        .await
        .unwrap();

    assert_eq!(
        report.source_urls,
        vec![
            "https://shared.example/x",
            "https://a.example/1",
            "https://b.example/1",
            "https://c.example/1",
        ]
    );

    // X accumulates 1/61 + 1/62 + 1/62; singles sit at 1/61.
    let shared = &report.sources[0];
    let expected = 1.0 / 61.0 + 2.0 / 62.0;
    assert!((shared.rrf_score.unwrap() - expected).abs() < 1e-12);
    for single in &report.sources[1..] {
        assert!((single.rrf_score.unwrap() - 1.0 / 61.0).abs() < 1e-12);
    }

    // First-seen metadata: X was first produced by source "a".
    assert_eq!(shared.source_name, "a");
}
