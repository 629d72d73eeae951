//! Reciprocal Rank Fusion: score(url) = Σ 1/(k + rank).
//!
//! Combines ranked lists from multiple sources into a single fused ranking
//! without normalizing scores across sources. URLs appearing in several lists
//! accumulate contributions and outrank single-list URLs (Cormack et al.,
//! 2009).

use std::collections::HashMap;

use ricerca_types::SearchResult;

/// Standard RRF smoothing constant. Higher values reduce the influence of
/// top-ranked items from any single list.
pub const DEFAULT_RRF_K: f64 = 60.0;

struct Fused {
    result: SearchResult,
    score: f64,
}

/// Fuse a tagged concatenation of per-source ranked lists.
///
/// Input carries results from all sources, each tagged with its
/// `source_name`; within-source order is that source's rank order. The
/// partition step preserves first-encounter order of source names, which for
/// orchestrator input equals registration order, so fusion is deterministic
/// given fixed inputs.
///
/// Results with an empty `url` are dropped. For URLs seen in more than one
/// list, the metadata of the first occurrence wins. Output is sorted by
/// accumulated score descending; the sort is stable, so score ties keep
/// first-seen order. `rrf_score` is overwritten on every emitted result.
#[must_use]
#[allow(clippy::cast_precision_loss)] // ranks are far below 2^52
pub fn fuse(results: Vec<SearchResult>, k: f64) -> Vec<SearchResult> {
    // Partition by source, preserving within-source rank order.
    let mut by_source: Vec<Vec<SearchResult>> = Vec::new();
    let mut source_index: HashMap<String, usize> = HashMap::new();
    for result in results {
        if result.url.is_empty() {
            continue;
        }
        let idx = match source_index.get(result.source_name.as_str()) {
            Some(&i) => i,
            None => {
                source_index.insert(result.source_name.clone(), by_source.len());
                by_source.push(Vec::new());
                by_source.len() - 1
            }
        };
        by_source[idx].push(result);
    }

    // Accumulate 1/(k + rank) per URL; first occurrence keeps the metadata.
    let mut fused: Vec<Fused> = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();
    for list in by_source {
        for (i, result) in list.into_iter().enumerate() {
            let contribution = 1.0 / (k + (i + 1) as f64);
            if let Some(&at) = seen.get(result.url.as_str()) {
                fused[at].score += contribution;
            } else {
                seen.insert(result.url.clone(), fused.len());
                fused.push(Fused {
                    result,
                    score: contribution,
                });
            }
        }
    }

    fused.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    fused
        .into_iter()
        .map(|mut f| {
            f.result.rrf_score = Some(f.score);
            f.result
        })
        .collect()
}
