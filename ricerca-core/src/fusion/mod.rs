//! Merging and deduplication of ranked result lists.
//!
//! - `rrf`: Reciprocal Rank Fusion of per-source ranked lists.
//! - `minhash`: MinHash signatures and the LSH index behind them.
//! - `dedup`: near-duplicate suppression over RRF-ordered results.

pub mod dedup;
pub mod minhash;
pub mod rrf;

pub use dedup::NearDuplicateSuppressor;
pub use minhash::{MinHashLshIndex, MinHashSignature, MinHasher};
pub use rrf::{DEFAULT_RRF_K, fuse};
