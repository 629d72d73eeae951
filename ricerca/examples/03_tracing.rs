//! Run with `--features tracing` to see fan-out and fusion events:
//!
//! ```sh
//! RUST_LOG=debug cargo run -p ricerca --example 03_tracing --features tracing
//! ```

use std::sync::Arc;

use ricerca::{Horizon, QueryHints, ResearchConfig, Ricerca};
use ricerca_mock::MockSource;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let ricerca = Ricerca::builder()
        .with_source(Arc::new(MockSource::new("depth", Horizon::Depth)))
        .with_source(Arc::new(
            MockSource::new("breadth", Horizon::Breadth).failing("simulated outage"),
        ))
        .with_source(Arc::new(MockSource::new("trends", Horizon::Trends)))
        .build()?;

    let report = ricerca
        .research_topic(
            "PropTech Trends 2025",
            &ResearchConfig::default(),
            &QueryHints::default(),
        )
        .await?;

    println!("{} sources, quality {}", report.sources.len(), report.quality_score);
    Ok(())
}
