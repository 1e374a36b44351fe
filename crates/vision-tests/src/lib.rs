//! Scenario and property tests for True Vision pricing.
//!
//! Integration tests live in `tests/`; every test prices against a frozen
//! `now` so results do not drift with the wall clock.

pub mod helpers;
