//! Pricing engine implementing the [`RewardCalculator`] trait.
//!
//! [`compute_reward`] is the free-function form taking the configuration
//! explicitly; [`PricingEngine`] binds a configuration for callers that price
//! many tokens with the same parameters.

use chrono::{DateTime, Utc};
use tracing::debug;
use vision_core::config::PricingConfig;
use vision_core::error::PricingError;
use vision_core::traits::RewardCalculator;
use vision_core::types::PricingFactors;

use crate::burn::scale_reward_for_burn;
use crate::decay::{months_elapsed, time_decay_factor};
use crate::penalty::{edition_penalty_factor, edition_penalty_steps};

/// Compute the per-edition reward and the factors behind it.
///
/// In order: base reward, elapsed months, time decay, penalty steps, edition
/// penalty, raw product, then the minimum-reward floor.
pub fn compute_reward(
    last_sale_price_tez: f64,
    last_sale_date: DateTime<Utc>,
    total_editions: u64,
    config: &PricingConfig,
    now: DateTime<Utc>,
) -> Result<PricingFactors, PricingError> {
    config.validate()?;
    if !last_sale_price_tez.is_finite() || last_sale_price_tez < 0.0 {
        return Err(PricingError::invalid(
            "last_sale_price_tez",
            format!("must be finite and non-negative, got {last_sale_price_tez}"),
        ));
    }

    let base_reward = last_sale_price_tez * config.base_reward_percentage;
    let months = months_elapsed(last_sale_date, now);
    let time_decay = time_decay_factor(months, config);
    let steps = edition_penalty_steps(total_editions, config);
    let edition_penalty = edition_penalty_factor(total_editions, config);

    let raw_reward = base_reward * time_decay * edition_penalty;
    let final_reward = raw_reward.max(config.minimum_reward);

    debug!(
        base_reward,
        months,
        time_decay,
        steps,
        edition_penalty,
        raw_reward,
        final_reward,
        "computed reward"
    );

    Ok(PricingFactors {
        base_reward,
        time_decay_factor: time_decay,
        edition_penalty_factor: edition_penalty,
        final_reward,
        months_since_last_sale: months,
        edition_penalty_steps: steps,
    })
}

/// The production reward calculator.
///
/// Holds an immutable [`PricingConfig`]; [`Default`] uses the default
/// configuration.
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    /// Create an engine with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with a validated custom configuration.
    pub fn with_config(config: PricingConfig) -> Result<Self, PricingError> {
        config.validate()?;
        Ok(Self { config })
    }
}

impl RewardCalculator for PricingEngine {
    fn config(&self) -> &PricingConfig {
        &self.config
    }

    fn months_elapsed(&self, reference: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
        months_elapsed(reference, now)
    }

    fn time_decay_factor(&self, months: u64) -> f64 {
        time_decay_factor(months, &self.config)
    }

    fn edition_penalty_factor(&self, total_editions: u64) -> f64 {
        edition_penalty_factor(total_editions, &self.config)
    }

    fn compute_reward(
        &self,
        last_sale_price_tez: f64,
        last_sale_date: DateTime<Utc>,
        total_editions: u64,
        now: DateTime<Utc>,
    ) -> Result<PricingFactors, PricingError> {
        compute_reward(
            last_sale_price_tez,
            last_sale_date,
            total_editions,
            &self.config,
            now,
        )
    }

    fn scale_for_burn(&self, per_edition_reward: f64, quantity: u64) -> Result<f64, PricingError> {
        scale_reward_for_burn(per_edition_reward, quantity)
    }
}
