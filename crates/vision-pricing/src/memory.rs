//! In-memory [`SaleHistory`] for tests and offline batch pricing.

use std::collections::{HashMap, HashSet};

use vision_core::error::VisionError;
use vision_core::traits::SaleHistory;
use vision_core::types::{LastSale, TokenRef};

/// Sale and supply facts held in maps.
///
/// Tokens registered with [`fail_for`](Self::fail_for) report a source error,
/// simulating an unreachable indexer.
#[derive(Debug, Clone, Default)]
pub struct InMemorySaleHistory {
    sales: HashMap<TokenRef, LastSale>,
    supplies: HashMap<TokenRef, u64>,
    failing: HashSet<TokenRef>,
}

impl InMemorySaleHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the last sale of `token`.
    pub fn with_sale(mut self, token: TokenRef, sale: LastSale) -> Self {
        self.sales.insert(token, sale);
        self
    }

    /// Record the total supply of `token`.
    pub fn with_supply(mut self, token: TokenRef, total_supply: u64) -> Self {
        self.supplies.insert(token, total_supply);
        self
    }

    /// Make every lookup for `token` fail.
    pub fn fail_for(mut self, token: TokenRef) -> Self {
        self.failing.insert(token);
        self
    }

    fn check(&self, token: &TokenRef) -> Result<(), VisionError> {
        if self.failing.contains(token) {
            return Err(VisionError::Source(format!("lookup failed for {token}")));
        }
        Ok(())
    }
}

impl SaleHistory for InMemorySaleHistory {
    fn last_sale(&self, token: &TokenRef) -> Result<Option<LastSale>, VisionError> {
        self.check(token)?;
        Ok(self.sales.get(token).cloned())
    }

    fn total_supply(&self, token: &TokenRef) -> Result<Option<u64>, VisionError> {
        self.check(token)?;
        Ok(self.supplies.get(token).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn unknown_token_is_none() {
        let h = InMemorySaleHistory::new();
        let t = TokenRef::new("KT1x", "1");
        assert_eq!(h.last_sale(&t).unwrap(), None);
        assert_eq!(h.total_supply(&t).unwrap(), None);
    }

    #[test]
    fn returns_recorded_facts() {
        let t = TokenRef::new("KT1x", "1");
        let sale = LastSale {
            price_tez: 12.0,
            sale_date: Utc.with_ymd_and_hms(2025, 5, 1, 0, 0, 0).unwrap(),
            total_editions: None,
        };
        let h = InMemorySaleHistory::new()
            .with_sale(t.clone(), sale.clone())
            .with_supply(t.clone(), 25);
        assert_eq!(h.last_sale(&t).unwrap(), Some(sale));
        assert_eq!(h.total_supply(&t).unwrap(), Some(25));
    }

    #[test]
    fn failing_token_errors() {
        let t = TokenRef::new("KT1x", "1");
        let h = InMemorySaleHistory::new().fail_for(t.clone());
        assert!(matches!(h.last_sale(&t), Err(VisionError::Source(_))));
        assert!(matches!(h.total_supply(&t), Err(VisionError::Source(_))));
    }
}
