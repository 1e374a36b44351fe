//! Enrich wallet holdings with pricing data.
//!
//! Sale facts come from a [`SaleHistory`]. Missing or failed lookups are
//! replaced with fallback defaults so every holding gets a price:
//! - no sale record, lookup error or unusable sale data: price
//!   [`FALLBACK_SALE_PRICE_TEZ`], sale date `now`, editions = wallet balance,
//!   reward = the configured minimum;
//! - sale record without an edition count: total supply lookup, then
//!   [`FALLBACK_TOTAL_EDITIONS`].

use chrono::{DateTime, Utc};
use tracing::{debug, warn};
use vision_core::constants::{FALLBACK_SALE_PRICE_TEZ, FALLBACK_TOTAL_EDITIONS};
use vision_core::traits::{RewardCalculator, SaleHistory};
use vision_core::types::{LastSale, NftHolding, PricedNft, TokenRef};

/// Price one holding as of `now`.
pub fn price_holding<C, S>(
    calculator: &C,
    source: &S,
    holding: &NftHolding,
    now: DateTime<Utc>,
) -> PricedNft
where
    C: RewardCalculator + ?Sized,
    S: SaleHistory + ?Sized,
{
    let sale = match source.last_sale(&holding.token) {
        Ok(Some(sale)) => sale,
        Ok(None) => {
            debug!(token = %holding.token, "no sale record, using fallback pricing");
            return fallback(calculator, holding, now);
        }
        Err(e) => {
            warn!(token = %holding.token, "sale lookup failed: {e}");
            return fallback(calculator, holding, now);
        }
    };

    let total_editions = resolve_editions(source, &holding.token, &sale);

    match calculator.compute_reward(sale.price_tez, sale.sale_date, total_editions, now) {
        Ok(factors) => PricedNft {
            holding: holding.clone(),
            last_sale_price_tez: sale.price_tez,
            last_sale_date: sale.sale_date,
            total_editions,
            factors: Some(factors),
            reward_per_edition: factors.final_reward,
            priced_at: now,
            fallback: false,
        },
        Err(e) => {
            warn!(token = %holding.token, "unusable sale data: {e}");
            fallback(calculator, holding, now)
        }
    }
}

/// Price every holding as of the same `now`.
///
/// Each holding is priced independently; one failed lookup does not affect
/// the others.
pub fn price_holdings<C, S>(
    calculator: &C,
    source: &S,
    holdings: &[NftHolding],
    now: DateTime<Utc>,
) -> Vec<PricedNft>
where
    C: RewardCalculator + ?Sized,
    S: SaleHistory + ?Sized,
{
    let priced: Vec<PricedNft> = holdings
        .iter()
        .map(|h| price_holding(calculator, source, h, now))
        .collect();
    let fallbacks = priced.iter().filter(|p| p.fallback).count();
    debug!(count = priced.len(), fallbacks, "priced holdings");
    priced
}

fn resolve_editions<S: SaleHistory + ?Sized>(source: &S, token: &TokenRef, sale: &LastSale) -> u64 {
    if let Some(editions) = sale.total_editions.filter(|n| *n > 0) {
        return editions;
    }
    match source.total_supply(token) {
        Ok(Some(supply)) if supply > 0 => supply,
        Ok(_) => FALLBACK_TOTAL_EDITIONS,
        Err(e) => {
            warn!(token = %token, "supply lookup failed: {e}");
            FALLBACK_TOTAL_EDITIONS
        }
    }
}

fn fallback<C: RewardCalculator + ?Sized>(
    calculator: &C,
    holding: &NftHolding,
    now: DateTime<Utc>,
) -> PricedNft {
    PricedNft {
        holding: holding.clone(),
        last_sale_price_tez: FALLBACK_SALE_PRICE_TEZ,
        last_sale_date: now,
        total_editions: holding.balance,
        factors: None,
        reward_per_edition: calculator.config().minimum_reward,
        priced_at: now,
        fallback: true,
    }
}
