use ricerca::{Horizon, QueryHints, ResearchConfig, Ricerca, SearchResult};

use crate::helpers::{m_results, r};

fn with_content(url: &str, content: &str) -> SearchResult {
    SearchResult::new(url, format!("title {url}"), "snippet", "unset").with_content(content)
}

fn long_text(prefix: &str) -> String {
    (0..80)
        .map(|i| format!("{prefix}{i}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[tokio::test]
async fn syndicated_content_under_two_urls_keeps_the_better_ranked_one() {
    // Same article text on two different URLs from two sources. Both land at
    // rank 1; the tie breaks by registration order, so the depth copy wins
    // fusion and the breadth copy is suppressed as a near-duplicate.
    let article = long_text("word");
    let ricerca = Ricerca::builder()
        .with_source(m_results(
            "depth",
            Horizon::Depth,
            vec![with_content("https://origin.example/article", &article)],
        ))
        .with_source(m_results(
            "breadth",
            Horizon::Breadth,
            vec![with_content("https://mirror.example/scraped-copy", &article)],
        ))
        .build()
        .unwrap();

    let report = ricerca
        .research_topic("syndication", &ResearchConfig::default(), &QueryHints::default())
        .await
        .unwrap();

    assert_eq!(report.source_urls, vec!["https://origin.example/article"]);
}

#[tokio::test]
async fn same_topic_in_different_languages_is_not_collapsed() {
    let english = "proptech startups are transforming the real estate market with \
                   digital platforms for property management and tenant services \
                   across european cities this year";
    let german = "proptech startups verändern den immobilienmarkt mit digitalen \
                  plattformen für hausverwaltung und mieterdienste in europäischen \
                  städten in diesem jahr";

    let ricerca = Ricerca::builder()
        .with_source(m_results(
            "depth",
            Horizon::Depth,
            vec![with_content("https://en.example/article", english)],
        ))
        .with_source(m_results(
            "breadth",
            Horizon::Breadth,
            vec![with_content("https://de.example/artikel", german)],
        ))
        .build()
        .unwrap();

    let report = ricerca
        .research_topic("languages", &ResearchConfig::default(), &QueryHints::default())
        .await
        .unwrap();

    assert_eq!(report.sources.len(), 2);
}

#[tokio::test]
async fn results_without_content_rank_but_do_not_survive() {
    // Fusion ranks the contentless result; the suppressor drops it.
    let bare = SearchResult::new("https://bare.example/1", "no content", "snippet", "unset");
    let ricerca = Ricerca::builder()
        .with_source(m_results("depth", Horizon::Depth, vec![bare, r("https://full.example/1")]))
        .build()
        .unwrap();

    let report = ricerca
        .research_topic("content", &ResearchConfig::default(), &QueryHints::default())
        .await
        .unwrap();

    assert_eq!(report.source_urls, vec!["https://full.example/1"]);
    // The raw per-source count still reflects both results.
    assert_eq!(report.per_source_outcome["depth"].result_count, 2);
}

#[tokio::test]
async fn exact_url_overlap_and_near_dup_content_compose() {
    // d and b agree on one URL (fused into one entry) and additionally carry
    // the same text under different URLs; one survivor per cluster remains.
    let shared_text = long_text("dup");
    let ricerca = Ricerca::builder()
        .with_source(m_results(
            "depth",
            Horizon::Depth,
            vec![
                with_content("https://both.example/x", &shared_text),
                r("https://unique.example/d"),
            ],
        ))
        .with_source(m_results(
            "breadth",
            Horizon::Breadth,
            vec![
                with_content("https://both.example/x", &shared_text),
                with_content("https://copy.example/x2", &shared_text),
            ],
        ))
        .build()
        .unwrap();

    let report = ricerca
        .research_topic("compose", &ResearchConfig::default(), &QueryHints::default())
        .await
        .unwrap();

    // both.example/x is boosted to the top by URL overlap; copy.example/x2 is
    // suppressed as near-duplicate content.
    assert_eq!(
        report.source_urls,
        vec!["https://both.example/x", "https://unique.example/d"]
    );
}
