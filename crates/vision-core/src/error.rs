//! Error types for True Vision pricing.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    #[error("invalid input: {field} {reason}")] InvalidInput { field: &'static str, reason: String },
    #[error("burn quantity {quantity} out of range 1..={balance}")] BurnQuantityOutOfRange { quantity: u64, balance: u64 },
    #[error("reward amount overflow")] AmountOverflow,
}

impl PricingError {
    /// Shorthand for [`PricingError::InvalidInput`].
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput { field, reason: reason.into() }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("invalid length: {0}")] InvalidLength(usize),
    #[error("invalid character: {0}")] InvalidCharacter(char),
    #[error("invalid checksum")] InvalidChecksum,
    #[error("unknown prefix: {0}")] UnknownPrefix(String),
    #[error("invalid payload length: {0}")] InvalidPayloadLength(usize),
}

#[derive(Error, Debug)]
pub enum VisionError {
    #[error(transparent)] Pricing(#[from] PricingError),
    #[error(transparent)] Address(#[from] AddressError),
    #[error("config: {0}")] Config(String),
    #[error("sale source: {0}")] Source(String),
}
