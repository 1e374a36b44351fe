//! Batch input file: holdings plus the sale and supply facts to price them.
//!
//! ```json
//! {
//!   "holdings": [{ "token": { "contract": "KT1...", "token_id": "1" }, "name": "A", "balance": 2 }],
//!   "sales":    [{ "token": { ... }, "price_tez": 10.0, "sale_date": "2025-01-01T00:00:00Z" }],
//!   "supplies": [{ "token": { ... }, "total_supply": 35 }]
//! }
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use vision_core::types::{LastSale, NftHolding, TokenRef};
use vision_pricing::InMemorySaleHistory;

#[derive(Debug, Deserialize)]
pub struct BatchFile {
    pub holdings: Vec<NftHolding>,
    #[serde(default)]
    pub sales: Vec<SaleEntry>,
    #[serde(default)]
    pub supplies: Vec<SupplyEntry>,
}

#[derive(Debug, Deserialize)]
pub struct SaleEntry {
    pub token: TokenRef,
    #[serde(flatten)]
    pub sale: LastSale,
}

#[derive(Debug, Deserialize)]
pub struct SupplyEntry {
    pub token: TokenRef,
    pub total_supply: u64,
}

impl BatchFile {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read batch file: {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse batch file: {}", path.display()))
    }

    /// Split into the holdings to price and a sale history backing them.
    pub fn into_parts(self) -> (Vec<NftHolding>, InMemorySaleHistory) {
        let mut source = InMemorySaleHistory::new();
        for entry in self.sales {
            source = source.with_sale(entry.token, entry.sale);
        }
        for entry in self.supplies {
            source = source.with_supply(entry.token, entry.total_supply);
        }
        (self.holdings, source)
    }
}
