//! Canned ranked lists, one set per horizon. URLs are disjoint across
//! horizons so multi-mock fan-outs exercise the no-overlap fusion path by
//! default.

use chrono::{TimeZone, Utc};
use ricerca_types::{Horizon, SearchResult};

fn result(
    url: &str,
    title: &str,
    snippet: &str,
    content: &str,
    source_name: &str,
    day: u32,
) -> SearchResult {
    SearchResult::new(url, title, snippet, source_name)
        .with_content(content)
        .with_published_at(Utc.with_ymd_and_hms(2025, 3, day, 9, 0, 0).unwrap())
}

/// Deterministic fixture list for one horizon, tagged with `source_name`.
#[must_use]
pub fn for_horizon(horizon: Horizon, source_name: &str) -> Vec<SearchResult> {
    match horizon {
        Horizon::Depth => vec![
            result(
                "https://research.example/proptech-market-structure",
                "PropTech market structure: a review",
                "Peer-reviewed overview of digital platforms in real estate.",
                "this review surveys how digital platforms reshape property \
                 transactions financing and management across european markets \
                 with particular attention to data standards and incumbent \
                 responses over the last decade",
                source_name,
                3,
            ),
            result(
                "https://institute.example/housing-digitization-report",
                "Housing digitization: institutional report",
                "Longitudinal study of technology adoption by housing providers.",
                "the institute tracked four hundred housing providers over six \
                 years measuring adoption of digital tenant services predictive \
                 maintenance and automated valuation models and reports adoption \
                 doubling in the observed period",
                source_name,
                4,
            ),
        ],
        Horizon::Breadth => vec![
            result(
                "https://news.example/proptech-funding-roundup",
                "PropTech funding roundup",
                "This week's venture rounds across the sector.",
                "venture funding in property technology rebounded this quarter \
                 with notable rounds in tenant experience platforms energy \
                 retrofit marketplaces and transaction automation startups \
                 according to several trackers",
                source_name,
                10,
            ),
            result(
                "https://blog.example/smart-building-retrofit",
                "Smart building retrofits gain momentum",
                "Retrofit programs expand beyond pilot projects.",
                "municipal retrofit programs that began as pilots are expanding \
                 to full building stocks pairing sensor networks with demand \
                 side energy management and reporting measurable consumption \
                 reductions in the first year",
                source_name,
                11,
            ),
            result(
                "https://portal.example/rental-market-analysis",
                "Rental market analysis",
                "Rents, vacancies, and platform effects in major cities.",
                "rental platforms now intermediate a majority of new leases in \
                 large cities shifting price discovery online while vacancy \
                 rates remain near historic lows in most tracked metropolitan \
                 areas",
                source_name,
                12,
            ),
        ],
        Horizon::Trends => vec![
            result(
                "https://outlook.example/proptech-2026-outlook",
                "PropTech outlook",
                "Emerging developments to watch next year.",
                "analysts expect artificial intelligence driven valuation \
                 energy performance disclosure requirements and tokenized \
                 ownership experiments to dominate the property technology \
                 agenda in the coming eighteen months",
                source_name,
                18,
            ),
            result(
                "https://signals.example/esg-reporting-wave",
                "ESG reporting wave reaches real estate",
                "Disclosure rules reshape asset management priorities.",
                "new disclosure rules push asset managers to collect granular \
                 energy and emissions data per building creating demand for \
                 metering integrations and standardized reporting pipelines \
                 across portfolios",
                source_name,
                19,
            ),
        ],
        Horizon::Curated => vec![
            result(
                "https://feeds.example/weekly-digest-1",
                "Curated weekly digest",
                "Hand-picked sector reading.",
                "this week the editors highlight a long read on modular \
                 construction economics a practitioner essay on digital twin \
                 maintenance workflows and an interview with a municipal \
                 housing data officer",
                source_name,
                24,
            ),
        ],
        Horizon::Breaking => vec![
            result(
                "https://wire.example/breaking-acquisition",
                "Platform acquisition announced",
                "Consolidation continues among listing platforms.",
                "two of the largest listing platforms announced a merger this \
                 morning pending regulatory approval a move analysts describe \
                 as the largest consolidation in the segment to date",
                source_name,
                28,
            ),
        ],
        _ => Vec::new(),
    }
}
