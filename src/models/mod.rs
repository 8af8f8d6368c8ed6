//! Core data models for the Toll Charge Calculation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod breakdown;
mod membership;
mod time_period;

pub use breakdown::{LineItem, format_money, format_quantity};
pub use membership::MembershipTier;
pub use time_period::TimePeriod;
