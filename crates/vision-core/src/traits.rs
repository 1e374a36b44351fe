//! Trait interfaces between crates.
//!
//! - [`RewardCalculator`]: reward pricing math (vision-pricing implements)
//! - [`SaleHistory`]: sale and supply facts from an indexer (adapters implement)

use chrono::{DateTime, Utc};

use crate::config::PricingConfig;
use crate::error::{PricingError, VisionError};
use crate::types::{LastSale, PricingFactors, TokenRef};

/// Pure computation of burn rewards.
///
/// Every method is a function of its arguments and the calculator's
/// [`PricingConfig`]. Wall-clock time only enters through the `*_now`
/// default methods.
pub trait RewardCalculator: Send + Sync {
    /// Configuration this calculator prices with.
    fn config(&self) -> &PricingConfig;

    /// Whole months between `reference` and `now`, in either direction.
    fn months_elapsed(&self, reference: DateTime<Utc>, now: DateTime<Utc>) -> u64;

    /// Multiplier for `months` elapsed since the last sale, in `[0.1, 1]`.
    fn time_decay_factor(&self, months: u64) -> f64;

    /// Multiplier for a token with `total_editions` editions, in `[0.1, 1]`.
    fn edition_penalty_factor(&self, total_editions: u64) -> f64;

    /// Price one edition as of `now`.
    ///
    /// Fails with [`PricingError::InvalidInput`] on a non-finite or negative
    /// price, or an invalid configuration.
    fn compute_reward(
        &self,
        last_sale_price_tez: f64,
        last_sale_date: DateTime<Utc>,
        total_editions: u64,
        now: DateTime<Utc>,
    ) -> Result<PricingFactors, PricingError>;

    /// Price one edition as of the current wall-clock time.
    ///
    /// Default implementation: [`compute_reward`](Self::compute_reward) with `Utc::now()`.
    fn compute_reward_now(
        &self,
        last_sale_price_tez: f64,
        last_sale_date: DateTime<Utc>,
        total_editions: u64,
    ) -> Result<PricingFactors, PricingError> {
        self.compute_reward(last_sale_price_tez, last_sale_date, total_editions, Utc::now())
    }

    /// Reward for burning `quantity` editions at `per_edition_reward` each.
    fn scale_for_burn(&self, per_edition_reward: f64, quantity: u64) -> Result<f64, PricingError>;
}

/// Sale and supply facts for tokens, typically backed by a blockchain indexer.
///
/// Implementations normalize prices to tez. Missing data is reported as
/// `Ok(None)`; callers apply fallback defaults.
pub trait SaleHistory: Send + Sync {
    /// Most recent sale of `token`, or its mint when it never sold.
    fn last_sale(&self, token: &TokenRef) -> Result<Option<LastSale>, VisionError>;

    /// Total edition supply of `token`.
    fn total_supply(&self, token: &TokenRef) -> Result<Option<u64>, VisionError>;
}
