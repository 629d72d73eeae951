//! MinHash signatures and a banded LSH index for approximate Jaccard lookup.
//!
//! Signatures use universal hashing `(a·x + b) mod p` over already-hashed set
//! elements, with `p = 2^61 - 1` and coefficients drawn from a fixed-seed
//! PRNG so signatures are stable across runs and processes. The LSH index
//! splits signatures into bands whose `(bands, rows)` shape is chosen to
//! minimize false positives plus false negatives at the configured threshold.

use std::collections::{HashMap, HashSet};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use xxhash_rust::xxh3::xxh3_64;

const MERSENNE_PRIME: u64 = (1u64 << 61) - 1;

/// Fixed seed for permutation coefficients. Changing it changes every
/// signature, so it is not exposed as a knob.
const PERMUTATION_SEED: u64 = 1;

/// Subdivisions used when integrating the LSH probability curves.
const INTEGRATION_STEPS: usize = 100;

/// Generates MinHash signatures with a fixed permutation family.
#[derive(Debug, Clone)]
pub struct MinHasher {
    permutations: Vec<(u64, u64)>,
}

impl MinHasher {
    /// Build a hasher with `num_permutations` universal-hash permutations.
    #[must_use]
    pub fn new(num_permutations: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(PERMUTATION_SEED);
        let permutations = (0..num_permutations)
            .map(|_| {
                (
                    rng.random_range(1..MERSENNE_PRIME),
                    rng.random_range(0..MERSENNE_PRIME),
                )
            })
            .collect();
        Self { permutations }
    }

    /// Number of permutations per signature.
    #[must_use]
    pub fn num_permutations(&self) -> usize {
        self.permutations.len()
    }

    /// Compute the signature of a set of element hashes.
    ///
    /// An empty set yields the all-sentinel signature; callers that care must
    /// keep such signatures out of any index, since two of them compare as
    /// identical regardless of provenance.
    #[must_use]
    pub fn signature(&self, element_hashes: &HashSet<u64>) -> MinHashSignature {
        let mut values = vec![u64::MAX; self.permutations.len()];
        for &x in element_hashes {
            for (i, &(a, b)) in self.permutations.iter().enumerate() {
                let h = ((u128::from(a) * u128::from(x) + u128::from(b))
                    % u128::from(MERSENNE_PRIME)) as u64;
                if h < values[i] {
                    values[i] = h;
                }
            }
        }
        MinHashSignature { values }
    }
}

/// A fixed-size vector of minimum hash values; the fraction of equal entries
/// between two signatures estimates the Jaccard similarity of the underlying
/// sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinHashSignature {
    values: Vec<u64>,
}

impl MinHashSignature {
    /// Estimated Jaccard similarity against another signature of the same
    /// permutation family. Signatures of differing lengths estimate `0.0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn estimate_jaccard(&self, other: &Self) -> f64 {
        if self.values.len() != other.values.len() || self.values.is_empty() {
            return 0.0;
        }
        let matching = self
            .values
            .iter()
            .zip(other.values.iter())
            .filter(|(a, b)| a == b)
            .count();
        matching as f64 / self.values.len() as f64
    }

    fn band_key(&self, band: usize, rows: usize) -> u64 {
        let start = band * rows;
        let mut bytes = Vec::with_capacity(rows * 8);
        for v in &self.values[start..start + rows] {
            bytes.extend_from_slice(&v.to_le_bytes());
        }
        xxh3_64(&bytes)
    }
}

/// LSH index over MinHash signatures supporting approximate-similarity
/// membership tests.
///
/// Query and insert are serial by design; the index is mutated while a result
/// stream is scanned and is request-local.
#[derive(Debug)]
pub struct MinHashLshIndex {
    threshold: f64,
    bands: usize,
    rows: usize,
    /// One bucket map per band: band hash → signature ids.
    buckets: Vec<HashMap<u64, Vec<usize>>>,
    signatures: Vec<MinHashSignature>,
}

impl MinHashLshIndex {
    /// Build an index tuned for the given similarity threshold and signature
    /// length.
    #[must_use]
    pub fn new(threshold: f64, num_permutations: usize) -> Self {
        let (bands, rows) = optimal_band_split(threshold, num_permutations);
        Self {
            threshold,
            bands,
            rows,
            buckets: vec![HashMap::new(); bands],
            signatures: Vec::new(),
        }
    }

    /// Band/row split chosen for this index.
    #[must_use]
    pub const fn band_split(&self) -> (usize, usize) {
        (self.bands, self.rows)
    }

    /// Whether any stored signature has estimated Jaccard ≥ the threshold.
    ///
    /// Candidates come from shared band buckets and are confirmed against the
    /// full signature before counting as near.
    #[must_use]
    pub fn contains_near(&self, sig: &MinHashSignature) -> bool {
        let mut checked: HashSet<usize> = HashSet::new();
        for band in 0..self.bands {
            let key = sig.band_key(band, self.rows);
            let Some(members) = self.buckets[band].get(&key) else {
                continue;
            };
            for &id in members {
                if checked.insert(id)
                    && self.signatures[id].estimate_jaccard(sig) >= self.threshold
                {
                    return true;
                }
            }
        }
        false
    }

    /// Store a signature.
    pub fn insert(&mut self, sig: MinHashSignature) {
        let id = self.signatures.len();
        for band in 0..self.bands {
            let key = sig.band_key(band, self.rows);
            self.buckets[band].entry(key).or_default().push(id);
        }
        self.signatures.push(sig);
    }

    /// Number of stored signatures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    /// Whether the index holds no signatures.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }
}

/// Probability that two sets with Jaccard similarity `s` share at least one
/// band: `1 - (1 - s^rows)^bands`.
fn collision_probability(s: f64, bands: usize, rows: usize) -> f64 {
    1.0 - (1.0 - s.powi(rows as i32)).powi(bands as i32)
}

fn false_positive_area(threshold: f64, bands: usize, rows: usize) -> f64 {
    integrate(0.0, threshold, |s| collision_probability(s, bands, rows))
}

fn false_negative_area(threshold: f64, bands: usize, rows: usize) -> f64 {
    integrate(threshold, 1.0, |s| {
        1.0 - collision_probability(s, bands, rows)
    })
}

fn integrate(a: f64, b: f64, f: impl Fn(f64) -> f64) -> f64 {
    let step = (b - a) / INTEGRATION_STEPS as f64;
    let mut area = 0.0;
    for i in 0..INTEGRATION_STEPS {
        area += f(a + (i as f64 + 0.5) * step) * step;
    }
    area
}

/// Pick `(bands, rows)` with `bands * rows <= num_permutations` minimizing
/// the equally weighted sum of false-positive and false-negative areas at
/// the threshold. Standard LSH construction.
fn optimal_band_split(threshold: f64, num_permutations: usize) -> (usize, usize) {
    let mut best = (1, num_permutations.max(1));
    let mut best_error = f64::INFINITY;
    for bands in 1..=num_permutations.max(1) {
        let max_rows = num_permutations.max(1) / bands;
        for rows in 1..=max_rows {
            let error = 0.5 * false_positive_area(threshold, bands, rows)
                + 0.5 * false_negative_area(threshold, bands, rows);
            if error < best_error {
                best_error = error;
                best = (bands, rows);
            }
        }
    }
    best
}
