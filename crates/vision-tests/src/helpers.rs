//! Shared test helpers.

use chrono::{DateTime, Duration, TimeZone, Utc};
use vision_core::constants::MONTH_MS;
use vision_core::types::{LastSale, NftHolding, TokenRef};

/// The frozen pricing instant used across tests.
pub fn frozen_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
}

/// An instant exactly `months` average months before [`frozen_now`].
pub fn months_before_now(months: u64) -> DateTime<Utc> {
    frozen_now() - Duration::milliseconds((months * MONTH_MS) as i64)
}

/// A token of the test contract.
pub fn token(id: u64) -> TokenRef {
    TokenRef::new("KT1TestBrutalistiContract", id.to_string())
}

/// A holding of `balance` editions of [`token`]`(id)`.
pub fn holding(id: u64, balance: u64) -> NftHolding {
    NftHolding {
        token: token(id),
        name: format!("Brutalist #{id}"),
        balance,
    }
}

/// A sale `months` average months before [`frozen_now`].
pub fn sale(price_tez: f64, months: u64, total_editions: Option<u64>) -> LastSale {
    LastSale {
        price_tez,
        sale_date: months_before_now(months),
        total_editions,
    }
}
