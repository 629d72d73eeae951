//! Coarse 0-100 quality indicator for a completed research request.

/// Compute the quality score from result coverage, source health, and source
/// diversity.
///
/// - Coverage (max 50): linear in fused result count, saturating at 20.
/// - Source health (max 30): fraction of sources that succeeded.
/// - Diversity (max 20): 20 for ≥3 successful sources, 13 for 2, 7 otherwise.
///
/// The returned value is the floor of the summed terms. Informational only.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn quality_score(fused_count: usize, successful_sources: usize, failed_sources: usize) -> u8 {
    let coverage = (fused_count as f64 / 20.0 * 50.0).min(50.0);

    let total_sources = successful_sources + failed_sources;
    let health = if total_sources == 0 {
        0.0
    } else {
        successful_sources as f64 / total_sources as f64 * 30.0
    };

    let diversity = if successful_sources >= 3 {
        20.0
    } else if successful_sources == 2 {
        13.0
    } else {
        7.0
    };

    (coverage + health + diversity).floor() as u8
}
