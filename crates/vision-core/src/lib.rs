//! # vision-core
//! Foundation types, configuration and traits for True Vision burn rewards.

pub mod address;
pub mod config;
pub mod constants;
pub mod error;
pub mod traits;
pub mod types;
