//! The toll quote entry point and stateful calculator.
//!
//! [`quote`] is the pure entry point: it validates the distance, runs the
//! base charge and time multiplier rules, rounds the result, and returns
//! the charge together with its breakdown. [`TollCalculator`] wraps it
//! with the classic two-operation surface — calculate, then read back the
//! last breakdown — parsing membership and time-period tokens once at the
//! boundary.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

use super::base_charge::calculate_base_charge;
use super::rounding::round_charge;
use super::time_multiplier::apply_time_multiplier;
use crate::error::{TollError, TollResult};
use crate::models::{LineItem, MembershipTier, TimePeriod};

/// A computed toll charge together with its line-item breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TollQuote {
    /// The final charge, rounded half-up to 2 decimal places.
    pub total: Decimal,
    /// The ordered breakdown of how the charge was derived.
    pub breakdown: Vec<LineItem>,
}

/// Computes the toll charge for a journey.
///
/// The distance must be strictly positive; there is no upper bound, and
/// million-mile journeys are priced linearly. The returned quote carries
/// both the rounded charge and the breakdown, so callers that do not need
/// cross-call state never have to touch [`TollCalculator`].
///
/// # Arguments
///
/// * `distance` - The distance traveled in miles (must be > 0)
/// * `membership` - The membership tier of the party being charged
/// * `time_period` - The time-of-day period of the journey
///
/// # Returns
///
/// Returns a `TollQuote` with the final charge and breakdown, or
/// `TollError::InvalidDistance` if the distance is zero or negative.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use toll_engine::calculation::quote;
/// use toll_engine::models::{MembershipTier, TimePeriod};
///
/// let quote = quote(
///     Decimal::from(25),
///     MembershipTier::Gold,
///     TimePeriod::Peak,
/// ).unwrap();
/// assert_eq!(quote.total, Decimal::new(375, 2)); // $3.75
/// assert_eq!(quote.breakdown.len(), 3);
/// ```
pub fn quote(
    distance: Decimal,
    membership: MembershipTier,
    time_period: TimePeriod,
) -> TollResult<TollQuote> {
    if distance <= Decimal::ZERO {
        warn!(%distance, "rejected non-positive distance");
        return Err(TollError::InvalidDistance);
    }

    let base = calculate_base_charge(distance, membership);
    let result = apply_time_multiplier(base, time_period, membership, distance);
    let total = round_charge(result.charge);

    debug!(%distance, ?membership, ?time_period, %total, "calculated toll charge");

    Ok(TollQuote {
        total,
        breakdown: result.lines,
    })
}

/// A stateful toll calculator that remembers its last breakdown.
///
/// The calculator validates raw string tokens, computes the charge, and
/// stores the breakdown for retrieval via [`charge_breakdown`]. The stored
/// breakdown is cleared at the start of every call, so a failed call never
/// leaves a previous calculation's breakdown behind.
///
/// Instances are cheap to construct and provide no internal locking; use
/// one calculator per logical caller rather than sharing.
///
/// [`charge_breakdown`]: TollCalculator::charge_breakdown
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use toll_engine::calculation::TollCalculator;
///
/// let mut calculator = TollCalculator::new();
/// let charge = calculator
///     .calculate_toll(Decimal::from(10), "non", "normal")
///     .unwrap();
/// assert_eq!(charge, Decimal::from(20));
/// assert_eq!(calculator.charge_breakdown().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct TollCalculator {
    last_breakdown: Vec<LineItem>,
}

impl TollCalculator {
    /// Creates a calculator with an empty breakdown.
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculates the toll charge for a journey from raw string tokens.
    ///
    /// Validation runs in a fixed order and the first failure wins:
    /// distance must be strictly positive, then the membership token must
    /// be one of `"non"`, `"Silver"`, `"Gold"`, then the time-period token
    /// must be one of `"normal"`, `"busy"`, `"peak"`. Tokens are
    /// case-sensitive and matched exactly.
    ///
    /// # Arguments
    ///
    /// * `distance` - The distance traveled in miles
    /// * `membership` - The membership token
    /// * `time_period` - The time-period token
    ///
    /// # Returns
    ///
    /// Returns the final charge rounded half-up to 2 decimal places. On
    /// success the stored breakdown is replaced by this call's lines; on
    /// failure it is left empty.
    pub fn calculate_toll(
        &mut self,
        distance: Decimal,
        membership: &str,
        time_period: &str,
    ) -> TollResult<Decimal> {
        // A failed call must not expose a previous calculation's breakdown
        self.last_breakdown.clear();

        // Distance is checked before the tokens are parsed; the first
        // violated rule is the one reported
        if distance <= Decimal::ZERO {
            return Err(TollError::InvalidDistance);
        }
        let membership: MembershipTier = membership.parse()?;
        let time_period: TimePeriod = time_period.parse()?;

        let quote = quote(distance, membership, time_period)?;
        self.last_breakdown = quote.breakdown;

        Ok(quote.total)
    }

    /// Returns a copy of the breakdown from the most recent successful
    /// calculation, or an empty list if there has been none or the last
    /// call failed validation.
    pub fn charge_breakdown(&self) -> Vec<LineItem> {
        self.last_breakdown.clone()
    }
}
