#![allow(dead_code)]


use std::sync::Arc;

pub use mock_source::TestSource;
use ricerca_types::{Horizon, SearchResult};

/// Result with enough distinct content to survive the suppressor without
/// colliding with results built from other URLs.
pub fn r(url: &str) -> SearchResult {
    let slug = url.replace(['/', ':', '.'], "-");
    let content: Vec<String> = (0..12).map(|i| format!("{slug}-w{i}")).collect();
    SearchResult::new(url, format!("title {url}"), format!("snippet {url}"), "unset")
        .with_content(content.join(" "))
}

/// Source returning a fixed ranked list.
pub fn m_results(name: &'static str, horizon: Horizon, results: Vec<SearchResult>) -> Arc<TestSource> {
    Arc::new(TestSource {
        name,
        horizon,
        results,
        ..TestSource::default()
    })
}

/// Source failing every search call.
pub fn m_fail(name: &'static str, horizon: Horizon, reason: &str) -> Arc<TestSource> {
    Arc::new(TestSource {
        name,
        horizon,
        fail_with: Some(reason.to_string()),
        ..TestSource::default()
    })
}

/// Source answering after an artificial delay.
pub fn m_slow(
    name: &'static str,
    horizon: Horizon,
    delay_ms: u64,
    results: Vec<SearchResult>,
) -> Arc<TestSource> {
    Arc::new(TestSource {
        name,
        horizon,
        results,
        delay_ms,
        ..TestSource::default()
    })
}
