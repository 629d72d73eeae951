//! Query specialization: expand one topic into per-horizon query variants.
//!
//! Pure functions of `(topic, config, hints)`; no I/O. Every variant is
//! clamped to [`MAX_QUERY_CHARS`] characters.

use ricerca_types::{Horizon, QueryHints, ResearchConfig};

/// Maximum length of any specialized query, in characters.
pub const MAX_QUERY_CHARS: usize = 300;

/// At most this many keyword hints are folded into a query.
const MAX_KEYWORDS: usize = 2;

/// Competitor-gap text is clamped to this many characters before folding.
const MAX_GAP_CHARS: usize = 80;

fn clamp_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

fn joined_keywords(hints: &QueryHints) -> Option<String> {
    if hints.keywords.is_empty() {
        return None;
    }
    Some(
        hints
            .keywords
            .iter()
            .take(MAX_KEYWORDS)
            .map(ricerca_types::KeywordHint::as_str)
            .collect::<Vec<_>>()
            .join(", "),
    )
}

/// Query for the depth horizon: authoritative phrasing with domain/vertical
/// cues and up to two keyword hints.
#[must_use]
pub fn depth_query(topic: &str, cfg: &ResearchConfig, hints: &QueryHints) -> String {
    let mut parts = vec![topic.to_string()];

    if let Some(vertical) = &cfg.vertical {
        parts.push(format!("{vertical} research"));
    }
    if let Some(domain) = &cfg.domain {
        parts.push(format!("{domain} industry analysis"));
    }
    if let Some(kw) = joined_keywords(hints) {
        parts.push(format!("focusing on: {kw}"));
    }

    clamp_chars(&parts.join(" "), MAX_QUERY_CHARS)
}

/// Query for the breadth horizon: recency plus the market cue and at most one
/// competitor-gap hint.
#[must_use]
pub fn breadth_query(topic: &str, cfg: &ResearchConfig, hints: &QueryHints) -> String {
    let mut parts = vec![topic.to_string(), "recent developments".to_string()];

    if let Some(market) = &cfg.market {
        parts.push(format!("in {market}"));
    }
    if let Some(gap) = hints.competitor_gaps.first() {
        parts.push(format!("covering: {}", clamp_chars(gap.as_str(), MAX_GAP_CHARS)));
    }

    clamp_chars(&parts.join(" "), MAX_QUERY_CHARS)
}

/// Query for the trends horizon: emerging patterns and future outlook with
/// domain and vertical cues.
#[must_use]
pub fn trends_query(topic: &str, cfg: &ResearchConfig) -> String {
    let mut parts = vec![
        topic.to_string(),
        "trends".to_string(),
        "emerging developments".to_string(),
        "future outlook".to_string(),
    ];

    if let Some(domain) = &cfg.domain {
        parts.push(format!("in {domain}"));
    }
    if let Some(vertical) = &cfg.vertical {
        parts.push(vertical.clone());
    }

    clamp_chars(&parts.join(" "), MAX_QUERY_CHARS)
}

/// Base query for horizons without their own specialization (curated feeds,
/// news wires): the topic plus up to two keyword hints.
#[must_use]
pub fn base_query(topic: &str, hints: &QueryHints) -> String {
    let q = match joined_keywords(hints) {
        Some(kw) => format!("{topic} {kw}"),
        None => topic.to_string(),
    };
    clamp_chars(&q, MAX_QUERY_CHARS)
}

/// Pick the query variant appropriate for a source's horizon.
#[must_use]
pub fn query_for_horizon(
    horizon: Horizon,
    topic: &str,
    cfg: &ResearchConfig,
    hints: &QueryHints,
) -> String {
    match horizon {
        Horizon::Depth => depth_query(topic, cfg, hints),
        Horizon::Breadth => breadth_query(topic, cfg, hints),
        Horizon::Trends => trends_query(topic, cfg),
        Horizon::Curated | Horizon::Breaking => base_query(topic, hints),
        _ => base_query(topic, hints),
    }
}
