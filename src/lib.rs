//! Toll Charge Calculation Engine
//!
//! This crate provides functionality for calculating toll charges based on
//! distance traveled, membership tier, and time-of-day period, producing a
//! line-item breakdown of how each charge was derived.

#![warn(missing_docs)]

pub mod calculation;
pub mod error;
pub mod models;
pub mod rates;
