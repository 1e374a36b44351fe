//! # vision-pricing: burn reward pricing engine.
//!
//! Converts a token's market history into a True Vision reward per edition:
//! - **Base reward**: a share of the last sale price.
//! - **Time decay**: compound reduction per whole month since the last sale,
//!   `(1 - decay)^months`, floored at 10%.
//! - **Edition penalty**: stepped reduction for every `step` editions above a
//!   threshold, `(1 - pct)^steps`, floored at 10%.
//! - **Minimum reward**: the final per-edition reward never drops below it.
//!
//! All functions are pure; the pricing instant `now` is always an explicit
//! argument, with wall-clock defaults only at the API boundary.

pub mod burn;
pub mod decay;
pub mod engine;
pub mod enrich;
pub mod explain;
pub mod memory;
pub mod penalty;

pub use burn::{quote_burn, scale_reward_for_burn, to_token_amount};
pub use decay::{months_elapsed, months_elapsed_since, time_decay_factor};
pub use engine::{compute_reward, PricingEngine};
pub use enrich::{price_holding, price_holdings};
pub use explain::{format_reward, pricing_explanation, PricingIndicator};
pub use memory::InMemorySaleHistory;
pub use penalty::{edition_penalty_factor, edition_penalty_steps};
