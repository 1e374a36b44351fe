//! Domain types: pricing results, token identities, holdings and sale facts.
//!
//! Prices are tez as `f64`; reward amounts are True Vision editions as `f64`
//! until converted into a transferable whole amount.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::MUTEZ_PER_TEZ;

/// Factors derived for one reward computation.
///
/// Computed fresh on every call and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingFactors {
    /// `last_sale_price_tez * base_reward_percentage`.
    pub base_reward: f64,
    /// Time-decay multiplier in `[0.1, 1]`.
    pub time_decay_factor: f64,
    /// Edition-penalty multiplier in `[0.1, 1]`.
    pub edition_penalty_factor: f64,
    /// Reward per edition after decay, penalty and the minimum floor.
    pub final_reward: f64,
    /// Whole months between the last sale and the pricing instant.
    pub months_since_last_sale: u64,
    /// Number of penalty steps above the edition threshold.
    pub edition_penalty_steps: u64,
}

/// Identity of one FA2 token: contract address plus token id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TokenRef {
    pub contract: String,
    pub token_id: String,
}

impl TokenRef {
    pub fn new(contract: impl Into<String>, token_id: impl Into<String>) -> Self {
        Self {
            contract: contract.into(),
            token_id: token_id.into(),
        }
    }
}

impl fmt::Display for TokenRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.contract, self.token_id)
    }
}

/// An NFT held by a wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftHolding {
    pub token: TokenRef,
    pub name: String,
    /// Editions held by the wallet.
    pub balance: u64,
}

/// Last sale facts for a token, as reported by an indexer adapter.
///
/// When a token never sold, adapters report the mint timestamp as
/// `sale_date` together with a default price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastSale {
    pub price_tez: f64,
    pub sale_date: DateTime<Utc>,
    /// Total editions, if the sale record carries it.
    #[serde(default)]
    pub total_editions: Option<u64>,
}

/// A holding enriched with pricing data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedNft {
    pub holding: NftHolding,
    pub last_sale_price_tez: f64,
    pub last_sale_date: DateTime<Utc>,
    pub total_editions: u64,
    /// Factors behind `reward_per_edition`; `None` when priced by fallback.
    pub factors: Option<PricingFactors>,
    pub reward_per_edition: f64,
    pub priced_at: DateTime<Utc>,
    /// Whether fallback defaults replaced missing sale data.
    pub fallback: bool,
}

/// Reward owed for burning a number of editions of one token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BurnQuote {
    pub token: TokenRef,
    pub quantity: u64,
    pub reward_per_edition: f64,
    /// `reward_per_edition * quantity`, unrounded, for display.
    pub total_reward: f64,
    /// Whole reward-token editions to transfer: `total_reward` floored.
    pub token_amount: u64,
}

/// Convert mutez to tez.
pub fn tez_from_mutez(mutez: u64) -> f64 {
    mutez as f64 / MUTEZ_PER_TEZ as f64
}
