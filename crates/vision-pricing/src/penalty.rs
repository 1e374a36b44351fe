//! Edition penalty: stepped reduction for editions above the threshold.

use vision_core::config::PricingConfig;
use vision_core::constants::FACTOR_FLOOR;

/// Number of whole penalty steps for `total_editions`.
///
/// Zero at or below `edition_penalty_threshold`, otherwise
/// `floor((total_editions - threshold) / step)`. A zero step (rejected by
/// [`PricingConfig::validate`]) yields zero steps rather than a panic.
pub fn edition_penalty_steps(total_editions: u64, config: &PricingConfig) -> u64 {
    total_editions
        .saturating_sub(config.edition_penalty_threshold)
        .checked_div(config.edition_penalty_step)
        .unwrap_or(0)
}

/// Penalty multiplier: `1.0` at or below the threshold, otherwise
/// `max((1 - pct)^steps, 0.1)`.
pub fn edition_penalty_factor(total_editions: u64, config: &PricingConfig) -> f64 {
    if total_editions <= config.edition_penalty_threshold {
        return 1.0;
    }
    let steps = edition_penalty_steps(total_editions, config);
    let retention = 1.0 - config.edition_penalty_percentage;
    retention.powf(steps as f64).max(FACTOR_FLOOR)
}
