use std::sync::Arc;

use ricerca::{Horizon, QueryHints, ResearchConfig, Ricerca};
use ricerca_mock::MockSource;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A failing source never aborts the request; it only shows up in the
    // per-source outcomes, health, and statistics.
    let ricerca = Ricerca::builder()
        .with_source(Arc::new(MockSource::new("depth", Horizon::Depth)))
        .with_source(Arc::new(
            MockSource::new("breadth", Horizon::Breadth).failing("rate limited"),
        ))
        .build()?;

    let report = ricerca
        .research_topic(
            "PropTech Trends 2025",
            &ResearchConfig::default(),
            &QueryHints::default(),
        )
        .await?;

    println!("per-source outcomes:");
    for (name, outcome) in &report.per_source_outcome {
        println!("  {name}: {:?} ({} results)", outcome.status, outcome.result_count);
    }

    println!("health:");
    for (name, health) in ricerca.source_health().await {
        println!("  {name}: {health}");
    }

    let stats = ricerca.statistics();
    println!(
        "requests: {} (failed {}), results found: {}",
        stats.overall.total_requests, stats.overall.failed_requests, stats.overall.total_results_found
    );

    Ok(())
}
