//! Pricing configuration.
//!
//! [`PricingConfig`] is an immutable value. [`PricingConfig::default`] is the
//! process-wide default; callers override it by passing a different value to
//! the engine. [`PricingConfig::load`] layers an optional file and `VISION_*`
//! environment variables over the defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BASE_REWARD_PERCENTAGE, DEFAULT_EDITION_PENALTY_PERCENTAGE,
    DEFAULT_EDITION_PENALTY_STEP, DEFAULT_EDITION_PENALTY_THRESHOLD, DEFAULT_MINIMUM_REWARD,
    DEFAULT_MONTHLY_DECAY_PERCENTAGE, ENV_PREFIX,
};
use crate::error::{PricingError, VisionError};

/// Parameters of the reward formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Share of the last sale price granted as base reward, in `(0, 1]`.
    pub base_reward_percentage: f64,
    /// Reward reduction per elapsed month, in `[0, 1)`.
    pub monthly_decay_percentage: f64,
    /// Edition count at or below which no penalty applies.
    pub edition_penalty_threshold: u64,
    /// Grouping size for editions above the threshold. Must be non-zero.
    pub edition_penalty_step: u64,
    /// Reduction applied per penalty step, in `[0, 1)`.
    pub edition_penalty_percentage: f64,
    /// Floor below which a reward never falls.
    pub minimum_reward: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            base_reward_percentage: DEFAULT_BASE_REWARD_PERCENTAGE,
            monthly_decay_percentage: DEFAULT_MONTHLY_DECAY_PERCENTAGE,
            edition_penalty_threshold: DEFAULT_EDITION_PENALTY_THRESHOLD,
            edition_penalty_step: DEFAULT_EDITION_PENALTY_STEP,
            edition_penalty_percentage: DEFAULT_EDITION_PENALTY_PERCENTAGE,
            minimum_reward: DEFAULT_MINIMUM_REWARD,
        }
    }
}

impl PricingConfig {
    /// Check every field against its documented range.
    ///
    /// Returns [`PricingError::InvalidInput`] naming the first offending field.
    pub fn validate(&self) -> Result<(), PricingError> {
        let base = self.base_reward_percentage;
        if !(base.is_finite() && base > 0.0 && base <= 1.0) {
            return Err(PricingError::invalid(
                "base_reward_percentage",
                format!("must be in (0, 1], got {base}"),
            ));
        }
        check_unit_fraction("monthly_decay_percentage", self.monthly_decay_percentage)?;
        if self.edition_penalty_step == 0 {
            return Err(PricingError::invalid("edition_penalty_step", "must be non-zero"));
        }
        check_unit_fraction("edition_penalty_percentage", self.edition_penalty_percentage)?;
        let min = self.minimum_reward;
        if !(min.is_finite() && min >= 0.0) {
            return Err(PricingError::invalid(
                "minimum_reward",
                format!("must be finite and non-negative, got {min}"),
            ));
        }
        Ok(())
    }

    /// Load configuration: defaults, then `path` (TOML, JSON or YAML by
    /// extension) if given, then `VISION_*` environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self, VisionError> {
        Self::load_from(path, None)
    }

    /// Like [`load`](Self::load), but reads environment overrides from `env`
    /// instead of the process environment when it is `Some`.
    pub fn load_from(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, VisionError> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }
        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .source(env),
        );

        let cfg: PricingConfig = builder
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| VisionError::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }
}

fn check_unit_fraction(field: &'static str, value: f64) -> Result<(), PricingError> {
    if value.is_finite() && (0.0..1.0).contains(&value) {
        Ok(())
    } else {
        Err(PricingError::invalid(field, format!("must be in [0, 1), got {value}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn no_env() -> Option<config::Map<String, String>> {
        Some(config::Map::new())
    }

    #[test]
    fn default_values() {
        let cfg = PricingConfig::default();
        assert_eq!(cfg.base_reward_percentage, 0.8);
        assert_eq!(cfg.monthly_decay_percentage, 0.1);
        assert_eq!(cfg.edition_penalty_threshold, 10);
        assert_eq!(cfg.edition_penalty_step, 10);
        assert_eq!(cfg.edition_penalty_percentage, 0.05);
        assert_eq!(cfg.minimum_reward, 1.0);
    }

    #[test]
    fn default_is_valid() {
        assert!(PricingConfig::default().validate().is_ok());
    }

    #[test]
    fn base_reward_bounds() {
        let full = PricingConfig { base_reward_percentage: 1.0, ..Default::default() };
        assert!(full.validate().is_ok());

        for bad in [0.0, -0.1, 1.01, f64::NAN, f64::INFINITY] {
            let cfg = PricingConfig { base_reward_percentage: bad, ..Default::default() };
            assert!(
                matches!(
                    cfg.validate(),
                    Err(PricingError::InvalidInput { field: "base_reward_percentage", .. })
                ),
                "accepted base_reward_percentage {bad}"
            );
        }
    }

    #[test]
    fn decay_must_be_below_one() {
        let zero = PricingConfig { monthly_decay_percentage: 0.0, ..Default::default() };
        assert!(zero.validate().is_ok());

        let one = PricingConfig { monthly_decay_percentage: 1.0, ..Default::default() };
        assert!(matches!(
            one.validate(),
            Err(PricingError::InvalidInput { field: "monthly_decay_percentage", .. })
        ));
    }

    #[test]
    fn zero_step_rejected() {
        let cfg = PricingConfig { edition_penalty_step: 0, ..Default::default() };
        assert!(matches!(
            cfg.validate(),
            Err(PricingError::InvalidInput { field: "edition_penalty_step", .. })
        ));
    }

    #[test]
    fn penalty_percentage_rejected_when_negative() {
        let cfg = PricingConfig { edition_penalty_percentage: -0.01, ..Default::default() };
        assert!(matches!(
            cfg.validate(),
            Err(PricingError::InvalidInput { field: "edition_penalty_percentage", .. })
        ));
    }

    #[test]
    fn minimum_reward_rejected_when_nan() {
        let cfg = PricingConfig { minimum_reward: f64::NAN, ..Default::default() };
        assert!(matches!(
            cfg.validate(),
            Err(PricingError::InvalidInput { field: "minimum_reward", .. })
        ));
    }

    #[test]
    fn load_without_sources_is_default() {
        let cfg = PricingConfig::load_from(None, no_env()).unwrap();
        assert_eq!(cfg, PricingConfig::default());
    }

    #[test]
    fn load_partial_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pricing.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "minimum_reward = 2.5").unwrap();
        writeln!(file, "edition_penalty_threshold = 20").unwrap();
        drop(file);

        let cfg = PricingConfig::load_from(Some(&path), no_env()).unwrap();
        assert_eq!(cfg.minimum_reward, 2.5);
        assert_eq!(cfg.edition_penalty_threshold, 20);
        assert_eq!(cfg.base_reward_percentage, 0.8);
    }

    #[test]
    fn env_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pricing.toml");
        std::fs::write(&path, "monthly_decay_percentage = 0.2\n").unwrap();

        let mut env = config::Map::new();
        env.insert("VISION_MONTHLY_DECAY_PERCENTAGE".to_string(), "0.05".to_string());

        let cfg = PricingConfig::load_from(Some(&path), Some(env)).unwrap();
        assert_eq!(cfg.monthly_decay_percentage, 0.05);
    }

    #[test]
    fn load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pricing.toml");
        std::fs::write(&path, "edition_penalty_step = 0\n").unwrap();

        let err = PricingConfig::load_from(Some(&path), no_env()).unwrap_err();
        assert!(matches!(
            err,
            VisionError::Pricing(PricingError::InvalidInput { field: "edition_penalty_step", .. })
        ));
    }

    #[test]
    fn load_missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = PricingConfig::load_from(Some(&path), no_env()).unwrap_err();
        assert!(matches!(err, VisionError::Config(_)));
    }

    #[test]
    fn serde_round_trip_json() {
        let cfg = PricingConfig { minimum_reward: 3.0, ..Default::default() };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: PricingConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }
}
