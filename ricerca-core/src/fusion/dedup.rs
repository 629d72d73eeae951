//! Near-duplicate suppression over fused, rank-ordered results.
//!
//! Detects content that is essentially the same text under different URLs:
//! content is lowercased, split on whitespace, shingled into contiguous
//! 3-word triples, MinHash-signed, and checked against a request-local LSH
//! index. Because input arrives in fused rank order, the surviving
//! representative of every near-duplicate cluster is its best-ranked member.

use std::collections::HashSet;

use ricerca_types::{DedupConfig, SearchResult};
use xxhash_rust::xxh3::xxh3_64;

use super::minhash::{MinHashLshIndex, MinHasher};

/// Words per shingle.
const SHINGLE_WORDS: usize = 3;

/// Removes results whose `content` is approximately identical to an
/// earlier-ranked result's `content`.
///
/// Threshold and permutation count are fixed at construction and never varied
/// per request; the LSH index itself is rebuilt for every `suppress` call.
#[derive(Debug, Clone)]
pub struct NearDuplicateSuppressor {
    hasher: MinHasher,
    threshold: f64,
    num_permutations: usize,
}

impl Default for NearDuplicateSuppressor {
    fn default() -> Self {
        Self::new(DedupConfig::default())
    }
}

impl NearDuplicateSuppressor {
    /// Build a suppressor from tuning parameters. A permutation count below 1
    /// is clamped to 1.
    #[must_use]
    pub fn new(cfg: DedupConfig) -> Self {
        let num_permutations = cfg.num_permutations.max(1);
        Self {
            hasher: MinHasher::new(num_permutations),
            threshold: cfg.threshold,
            num_permutations,
        }
    }

    /// Scan `results` in order, emitting every result that is not a
    /// near-duplicate of an earlier emission.
    ///
    /// Rules, applied per result:
    /// - missing, empty, or whitespace-only `content` drops the result
    ///   (near-dup detection requires content);
    /// - fewer than three tokens yields no shingles: the result is kept but
    ///   not indexed, since nothing can match an empty shingle set;
    /// - otherwise the result is suppressed when any indexed signature
    ///   estimates Jaccard at or above the threshold, and indexed + emitted
    ///   when none does.
    #[must_use]
    pub fn suppress(&self, results: Vec<SearchResult>) -> Vec<SearchResult> {
        #[cfg(feature = "tracing")]
        let input_count = results.len();

        let mut index = MinHashLshIndex::new(self.threshold, self.num_permutations);
        let mut kept = Vec::with_capacity(results.len());

        for result in results {
            let Some(content) = result.content.as_deref() else {
                continue;
            };
            if content.trim().is_empty() {
                continue;
            }

            let shingles = shingle_hashes(content);
            if shingles.is_empty() {
                kept.push(result);
                continue;
            }

            let sig = self.hasher.signature(&shingles);
            if index.contains_near(&sig) {
                continue;
            }
            index.insert(sig);
            kept.push(result);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target = "ricerca::fusion",
            event = "near_dup_suppression",
            input = input_count,
            kept = kept.len(),
            threshold = self.threshold,
            "near-duplicate suppression complete"
        );

        kept
    }
}

/// Hash the 3-word shingle set of a text.
fn shingle_hashes(content: &str) -> HashSet<u64> {
    let lowered = content.to_lowercase();
    let tokens: Vec<&str> = lowered.split_whitespace().collect();
    tokens
        .windows(SHINGLE_WORDS)
        .map(|w| xxh3_64(w.join(" ").as_bytes()))
        .collect()
}
