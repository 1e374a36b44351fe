//! Protocol constants. Prices are in tez (1 tez = 10^6 mutez); reward amounts
//! are in whole True Vision editions.

/// Mutez per tez.
pub const MUTEZ_PER_TEZ: u64 = 1_000_000;

/// Average month length used for elapsed-month computation: 30.44 days.
///
/// Avoids calendar month boundaries entirely.
pub const MONTH_MS: u64 = 2_630_016_000;

/// Lower bound shared by the time-decay and edition-penalty factors.
///
/// Neither mechanism alone removes more than 90% of the base reward.
pub const FACTOR_FLOOR: f64 = 0.1;

/// Default share of the last sale price granted as base reward.
pub const DEFAULT_BASE_REWARD_PERCENTAGE: f64 = 0.8;

/// Default reward reduction per elapsed month.
pub const DEFAULT_MONTHLY_DECAY_PERCENTAGE: f64 = 0.1;

/// Default edition count at or below which no penalty applies.
pub const DEFAULT_EDITION_PENALTY_THRESHOLD: u64 = 10;

/// Default grouping size for editions above the threshold.
pub const DEFAULT_EDITION_PENALTY_STEP: u64 = 10;

/// Default reduction applied per penalty step.
pub const DEFAULT_EDITION_PENALTY_PERCENTAGE: f64 = 0.05;

/// Default reward floor, in True Vision editions.
pub const DEFAULT_MINIMUM_REWARD: f64 = 1.0;

/// Price assumed when a token has no sale record at all.
pub const FALLBACK_SALE_PRICE_TEZ: f64 = 5.0;

/// Edition count assumed when token supply cannot be determined.
pub const FALLBACK_TOTAL_EDITIONS: u64 = 1;

/// Null address burned editions are sent to.
pub const BURN_ADDRESS: &str = "tz1burnburnburnburnburnburnburjAYjjX";

/// Creator whose NFTs are eligible for burning.
pub const CREATOR_ADDRESS: &str = "tz1ez9EzqaaZWWTuYiRsPKKm3UrDQP3owYva";

/// FA2 contract holding the True Vision reward token.
pub const REWARD_TOKEN_CONTRACT: &str = "KT1RJ6PbjHpwc3M5rw5s2Nbmefwbuwbdxton";

/// Token id of True Vision within [`REWARD_TOKEN_CONTRACT`].
pub const REWARD_TOKEN_ID: &str = "754916";

/// Reward token ticker, used in display output.
pub const REWARD_TOKEN_SYMBOL: &str = "TV";

/// Environment variable prefix for configuration overrides (`VISION_*`).
pub const ENV_PREFIX: &str = "VISION";

/// Characters kept at the start of a shortened address.
pub const ADDRESS_DISPLAY_START: usize = 6;

/// Characters kept at the end of a shortened address.
pub const ADDRESS_DISPLAY_END: usize = 4;
