//! Burn quoting and the single rounding rule for reward amounts.
//!
//! Rewards stay fractional for display. The only place a reward becomes a
//! transferable amount is [`to_token_amount`], which floors to whole
//! True Vision editions.

use tracing::debug;
use vision_core::error::PricingError;
use vision_core::types::{BurnQuote, PricedNft};

/// Reward for burning `quantity` editions at `per_edition_reward` each.
///
/// `quantity` must be at least 1.
pub fn scale_reward_for_burn(per_edition_reward: f64, quantity: u64) -> Result<f64, PricingError> {
    if quantity == 0 {
        return Err(PricingError::invalid("quantity", "must be at least 1"));
    }
    if !per_edition_reward.is_finite() || per_edition_reward < 0.0 {
        return Err(PricingError::invalid(
            "per_edition_reward",
            format!("must be finite and non-negative, got {per_edition_reward}"),
        ));
    }
    Ok(per_edition_reward * quantity as f64)
}

/// Convert a reward amount to whole reward-token editions, rounding down.
pub fn to_token_amount(reward: f64) -> Result<u64, PricingError> {
    if !reward.is_finite() || reward < 0.0 {
        return Err(PricingError::invalid(
            "reward_amount",
            format!("must be finite and non-negative, got {reward}"),
        ));
    }
    let floored = reward.floor();
    // u64::MAX as f64 rounds up to 2^64
    if floored >= u64::MAX as f64 {
        return Err(PricingError::AmountOverflow);
    }
    Ok(floored as u64)
}

/// Quote the reward for burning `quantity` editions of a priced holding.
///
/// `quantity` must lie in `1..=balance`.
pub fn quote_burn(priced: &PricedNft, quantity: u64) -> Result<BurnQuote, PricingError> {
    let balance = priced.holding.balance;
    if quantity == 0 || quantity > balance {
        return Err(PricingError::BurnQuantityOutOfRange { quantity, balance });
    }

    let total_reward = scale_reward_for_burn(priced.reward_per_edition, quantity)?;
    let token_amount = to_token_amount(total_reward)?;
    debug!(
        token = %priced.holding.token,
        quantity,
        total_reward,
        token_amount,
        "quoted burn"
    );

    Ok(BurnQuote {
        token: priced.holding.token.clone(),
        quantity,
        reward_per_edition: priced.reward_per_edition,
        total_reward,
        token_amount,
    })
}
