//! ricerca-searxng
//!
//! Breadth-horizon source backed by a SearXNG metasearch instance's JSON API.
//! One instance federates results from many upstream engines, which makes it
//! a cheap way to widen coverage; the adapter maps the `results` array onto
//! the standard result record and keeps engine attribution in metadata.
#![warn(missing_docs)]

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use ricerca_core::{RicercaError, SearchOptions, Source};
use ricerca_types::{Horizon, SearchResult, SourceHealth};
use serde::Deserialize;
use url::Url;

const SOURCE_NAME: &str = "searxng";

/// Source adapter for a SearXNG instance.
///
/// Network, status, and decode failures surface as `Err`; the orchestrator
/// absorbs them as per-source failures. The adapter never panics.
#[derive(Debug)]
pub struct SearxngSource {
    http: reqwest::Client,
    endpoint: Url,
    time_range: String,
}

/// Builder for [`SearxngSource`].
pub struct SearxngBuilder {
    instance_url: String,
    timeout: Duration,
    time_range: String,
}

impl SearxngBuilder {
    /// Start a builder for the given instance root URL (e.g.
    /// `https://searx.example`).
    #[must_use]
    pub fn new(instance_url: impl Into<String>) -> Self {
        Self {
            instance_url: instance_url.into(),
            timeout: Duration::from_secs(20),
            time_range: "year".to_string(),
        }
    }

    /// HTTP client timeout for a single request.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Upstream `time_range` filter ("day", "month", "year"). Recency bias is
    /// the point of the breadth horizon, so "year" is the default.
    #[must_use]
    pub fn time_range(mut self, range: impl Into<String>) -> Self {
        self.time_range = range.into();
        self
    }

    /// Build the source.
    ///
    /// # Errors
    /// Returns `SourceUnavailable` when the instance URL is malformed or the
    /// HTTP client cannot be constructed; callers typically feed this into
    /// `with_available_source` so a broken configuration skips the source
    /// instead of failing the orchestrator.
    pub fn build(self) -> Result<SearxngSource, RicercaError> {
        let base = Url::parse(&self.instance_url).map_err(|e| {
            RicercaError::source_unavailable(SOURCE_NAME, format!("invalid instance url: {e}"))
        })?;
        let endpoint = base.join("search").map_err(|e| {
            RicercaError::source_unavailable(SOURCE_NAME, format!("invalid instance url: {e}"))
        })?;
        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| {
                RicercaError::source_unavailable(SOURCE_NAME, format!("http client: {e}"))
            })?;
        Ok(SearxngSource {
            http,
            endpoint,
            time_range: self.time_range,
        })
    }
}

impl SearxngSource {
    /// Start building a source for the given instance root URL.
    #[must_use]
    pub fn builder(instance_url: impl Into<String>) -> SearxngBuilder {
        SearxngBuilder::new(instance_url)
    }

    fn to_result(hit: ApiHit) -> SearchResult {
        let mut result = SearchResult::new(hit.url, hit.title, hit.content, SOURCE_NAME);
        if let Some(engine) = hit.engine {
            result = result.with_metadata("engine", engine);
        }
        if let Some(host) = Url::parse(&result.url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
        {
            result = result.with_metadata("domain", host);
        }
        if let Some(score) = hit.score {
            result = result.with_score(score);
        }
        if let Some(ts) = hit
            .published_date
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        {
            result = result.with_published_at(ts.with_timezone(&Utc));
        }
        result
    }
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    results: Vec<ApiHit>,
}

#[derive(Debug, Deserialize)]
struct ApiHit {
    #[serde(default)]
    url: String,
    #[serde(default)]
    title: String,
    /// SearXNG calls the snippet "content"; full text is never returned.
    #[serde(default)]
    content: String,
    #[serde(default)]
    engine: Option<String>,
    #[serde(default)]
    score: Option<f64>,
    #[serde(default, rename = "publishedDate")]
    published_date: Option<String>,
}

#[async_trait]
impl Source for SearxngSource {
    fn name(&self) -> &'static str {
        SOURCE_NAME
    }

    fn horizon(&self) -> Horizon {
        Horizon::Breadth
    }

    async fn search(
        &self,
        query: &str,
        max_results: usize,
        opts: &SearchOptions,
    ) -> Result<Vec<SearchResult>, RicercaError> {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("q", query);
            pairs.append_pair("format", "json");
            pairs.append_pair("time_range", &self.time_range);
            pairs.append_pair("safesearch", "0");
            if let Some(language) = &opts.language {
                pairs.append_pair("language", language);
            }
        }

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| RicercaError::source(SOURCE_NAME, format!("request failed: {e}")))?
            .error_for_status()
            .map_err(|e| RicercaError::source(SOURCE_NAME, format!("bad status: {e}")))?;

        let body: ApiResponse = response
            .json()
            .await
            .map_err(|e| RicercaError::source(SOURCE_NAME, format!("decode failed: {e}")))?;

        Ok(body
            .results
            .into_iter()
            .filter(|hit| !hit.url.is_empty())
            .take(max_results)
            .map(Self::to_result)
            .collect())
    }

    async fn health_check(&self) -> SourceHealth {
        match self.search("connectivity probe", 1, &SearchOptions::default()).await {
            Ok(results) if !results.is_empty() => SourceHealth::Healthy,
            Ok(_) => SourceHealth::Degraded,
            Err(_) => SourceHealth::Failed,
        }
    }
}
