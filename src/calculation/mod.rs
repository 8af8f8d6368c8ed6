//! Calculation logic for the Toll Charge Calculation Engine.
//!
//! This module contains the calculation functions for determining toll
//! charges, including the tiered base charge by distance band, the
//! time-of-day multiplier with its Gold-member exception, final-charge
//! rounding, and the stateful calculator that ties them together.

mod base_charge;
mod engine;
mod rounding;
mod time_multiplier;

pub use base_charge::{BaseChargeResult, calculate_base_charge};
pub use engine::{TollCalculator, TollQuote, quote};
pub use rounding::round_charge;
pub use time_multiplier::{FinalChargeResult, apply_time_multiplier};
