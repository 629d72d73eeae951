use std::sync::Arc;

use ricerca::{Horizon, QueryHints, ResearchConfig, Ricerca};
use ricerca_mock::MockSource;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Register one mock source per horizon (deterministic fixture data).
    let ricerca = Ricerca::builder()
        .with_source(Arc::new(MockSource::new("depth", Horizon::Depth)))
        .with_source(Arc::new(MockSource::new("breadth", Horizon::Breadth)))
        .with_source(Arc::new(MockSource::new("trends", Horizon::Trends)))
        .build()?;

    // 2. Describe the market and steer the queries.
    let config = ResearchConfig {
        domain: Some("SaaS".into()),
        market: Some("Germany".into()),
        vertical: Some("PropTech".into()),
        language: Some("de".into()),
        feed_urls: vec![],
    };
    let hints = QueryHints {
        keywords: vec!["smart buildings".into()],
        competitor_gaps: vec![],
    };

    // 3. Research. Sources run in parallel; failures degrade gracefully.
    let report = ricerca
        .research_topic("PropTech Trends 2025", &config, &hints)
        .await?;

    // 4. Print the fused, deduplicated list.
    println!("quality score: {}/100", report.quality_score);
    for source in &report.sources {
        println!(
            "  {:.4}  [{}] {}",
            source.rrf_score.unwrap_or_default(),
            source.source_name,
            source.url
        );
    }

    Ok(())
}
