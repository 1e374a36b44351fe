//! Time decay: elapsed whole months and the compound decay multiplier.

use chrono::{DateTime, Utc};
use vision_core::config::PricingConfig;
use vision_core::constants::{FACTOR_FLOOR, MONTH_MS};

/// Whole months between `reference` and `now`.
///
/// Computed as `floor(|now - reference| / MONTH_MS)`, so a `reference` in the
/// future (clock skew, bad indexer data) still yields a non-negative count.
pub fn months_elapsed(reference: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
    let distance_ms = now
        .signed_duration_since(reference)
        .num_milliseconds()
        .unsigned_abs();
    distance_ms / MONTH_MS
}

/// [`months_elapsed`] measured against the current wall-clock time.
///
/// The result changes as time passes; prefer [`months_elapsed`] with a fixed
/// `now` wherever reproducibility matters.
pub fn months_elapsed_since(reference: DateTime<Utc>) -> u64 {
    months_elapsed(reference, Utc::now())
}

/// Decay multiplier after `months` whole months: `max((1 - decay)^months, 0.1)`.
///
/// Exactly `1.0` at zero months and non-increasing in `months`.
pub fn time_decay_factor(months: u64, config: &PricingConfig) -> f64 {
    let retention = 1.0 - config.monthly_decay_percentage;
    retention.powf(months as f64).max(FACTOR_FLOOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use proptest::prelude::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
    }

    fn cfg() -> PricingConfig {
        PricingConfig::default()
    }

    // --- months_elapsed ---

    #[test]
    fn same_instant_is_zero_months() {
        assert_eq!(months_elapsed(now(), now()), 0);
    }

    #[test]
    fn just_under_one_month_is_zero() {
        let reference = now() - Duration::milliseconds(MONTH_MS as i64 - 1);
        assert_eq!(months_elapsed(reference, now()), 0);
    }

    #[test]
    fn exactly_one_month() {
        let reference = now() - Duration::milliseconds(MONTH_MS as i64);
        assert_eq!(months_elapsed(reference, now()), 1);
    }

    #[test]
    fn twelve_average_months() {
        let reference = now() - Duration::milliseconds(12 * MONTH_MS as i64);
        assert_eq!(months_elapsed(reference, now()), 12);
    }

    #[test]
    fn thirty_days_is_not_a_month() {
        // 30 days < 30.44 days
        let reference = now() - Duration::days(30);
        assert_eq!(months_elapsed(reference, now()), 0);
        let reference = now() - Duration::days(31);
        assert_eq!(months_elapsed(reference, now()), 1);
    }

    #[test]
    fn future_reference_counts_forward() {
        let reference = now() + Duration::milliseconds(3 * MONTH_MS as i64);
        assert_eq!(months_elapsed(reference, now()), 3);
    }

    #[test]
    fn months_since_uses_wall_clock() {
        assert_eq!(months_elapsed_since(Utc::now()), 0);
        let two_years_ago = Utc::now() - Duration::milliseconds(24 * MONTH_MS as i64 + 60_000);
        assert_eq!(months_elapsed_since(two_years_ago), 24);
    }

    #[test]
    fn month_ms_is_30_44_days() {
        assert_eq!(MONTH_MS, (30.44 * 24.0 * 60.0 * 60.0 * 1000.0) as u64);
    }

    // --- time_decay_factor ---

    #[test]
    fn no_decay_at_zero_months() {
        assert_eq!(time_decay_factor(0, &cfg()), 1.0);
    }

    #[test]
    fn one_month_default() {
        assert!((time_decay_factor(1, &cfg()) - 0.9).abs() < 1e-12);
    }

    #[test]
    fn twelve_months_default() {
        let f = time_decay_factor(12, &cfg());
        assert!((f - 0.9f64.powi(12)).abs() < 1e-12, "factor {f}");
        assert!(f > FACTOR_FLOOR);
    }

    #[test]
    fn floors_after_long_holding() {
        // 0.9^22 ≈ 0.098 is the first value below the floor
        assert!(time_decay_factor(21, &cfg()) > FACTOR_FLOOR);
        assert_eq!(time_decay_factor(22, &cfg()), FACTOR_FLOOR);
        assert_eq!(time_decay_factor(100, &cfg()), FACTOR_FLOOR);
        assert_eq!(time_decay_factor(u64::MAX, &cfg()), FACTOR_FLOOR);
    }

    #[test]
    fn zero_decay_rate_never_decays() {
        let c = PricingConfig { monthly_decay_percentage: 0.0, ..cfg() };
        assert_eq!(time_decay_factor(0, &c), 1.0);
        assert_eq!(time_decay_factor(1_000, &c), 1.0);
    }

    // --- proptest ---

    proptest! {
        #[test]
        fn decay_bounded(months in 0u64..10_000, rate in 0.0f64..0.999) {
            let c = PricingConfig { monthly_decay_percentage: rate, ..PricingConfig::default() };
            let f = time_decay_factor(months, &c);
            prop_assert!((FACTOR_FLOOR..=1.0).contains(&f), "factor {} out of bounds", f);
        }

        #[test]
        fn decay_monotonic(a in 0u64..500, b in 0u64..500, rate in 0.0f64..0.999) {
            let c = PricingConfig { monthly_decay_percentage: rate, ..PricingConfig::default() };
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(
                time_decay_factor(lo, &c) >= time_decay_factor(hi, &c),
                "decay not monotonic: f({}) < f({})", lo, hi
            );
        }

        #[test]
        fn decay_identity_at_zero(rate in 0.0f64..0.999) {
            let c = PricingConfig { monthly_decay_percentage: rate, ..PricingConfig::default() };
            prop_assert_eq!(time_decay_factor(0, &c), 1.0);
        }

        #[test]
        fn months_symmetric(offset_ms in 0i64..1_000_000_000_000) {
            let base = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
            let later = base + Duration::milliseconds(offset_ms);
            prop_assert_eq!(months_elapsed(base, later), months_elapsed(later, base));
            prop_assert_eq!(months_elapsed(base, later), offset_ms as u64 / MONTH_MS);
        }
    }
}
