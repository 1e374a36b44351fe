//! Human-readable summaries of pricing results.

use std::fmt;

use serde::Serialize;
use vision_core::config::PricingConfig;
use vision_core::types::PricingFactors;

/// Format a reward with two decimals.
pub fn format_reward(reward: f64) -> String {
    format!("{reward:.2}")
}

/// One-line explanation of what reduced a reward.
///
/// e.g. `"3 months decay, high edition count"`, or
/// `"Recent sale, standard editions"` when nothing applied.
pub fn pricing_explanation(factors: &PricingFactors) -> String {
    let mut parts = Vec::new();

    match factors.months_since_last_sale {
        0 => {}
        1 => parts.push("1 month decay".to_string()),
        n => parts.push(format!("{n} months decay")),
    }
    if factors.edition_penalty_steps > 0 {
        parts.push("high edition count".to_string());
    }

    if parts.is_empty() {
        return "Recent sale, standard editions".to_string();
    }
    parts.join(", ")
}

/// Which reward reductions apply to a token, for badge-style display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PricingIndicator {
    /// Whole months since the last sale, when at least one.
    pub decay_months: Option<u64>,
    /// Total editions, when above the penalty threshold.
    pub high_editions: Option<u64>,
}

impl PricingIndicator {
    pub fn new(months_elapsed: u64, total_editions: u64, config: &PricingConfig) -> Self {
        Self {
            decay_months: (months_elapsed > 0).then_some(months_elapsed),
            high_editions: (total_editions > config.edition_penalty_threshold)
                .then_some(total_editions),
        }
    }

    /// No decay and no edition penalty.
    pub fn is_optimal(&self) -> bool {
        self.decay_months.is_none() && self.high_editions.is_none()
    }

    /// Full badge labels, e.g. `["3 MONTHS AGO", "35 EDITIONS"]`.
    pub fn badges(&self) -> Vec<String> {
        if self.is_optimal() {
            return vec!["OPTIMAL REWARD".to_string()];
        }
        let mut badges = Vec::new();
        if let Some(months) = self.decay_months {
            let plural = if months > 1 { "S" } else { "" };
            badges.push(format!("{months} MONTH{plural} AGO"));
        }
        if let Some(editions) = self.high_editions {
            badges.push(format!("{editions} EDITIONS"));
        }
        badges
    }

    /// Compact form, e.g. `"3M 35ED"`; empty when optimal.
    pub fn compact(&self) -> String {
        let mut parts = Vec::new();
        if let Some(months) = self.decay_months {
            parts.push(format!("{months}M"));
        }
        if let Some(editions) = self.high_editions {
            parts.push(format!("{editions}ED"));
        }
        parts.join(" ")
    }
}

impl fmt::Display for PricingIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.badges().join(" | "))
    }
}
