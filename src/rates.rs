//! Rate tables for the Toll Charge Calculation Engine.
//!
//! All rates are fixed at compile time and never change at runtime: the
//! per-mile rate schedule for each membership tier, the time-of-day
//! multipliers, the distance-band boundary, and the Gold busy/peak
//! surcharge rate.

use rust_decimal::Decimal;

use crate::models::{MembershipTier, TimePeriod};

/// The per-mile rates for one membership tier, split by distance band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateSchedule {
    /// Rate per mile for miles within the first 20.
    pub first_20: Decimal,
    /// Rate per mile for miles beyond 20.
    pub beyond_20: Decimal,
}

/// Returns the rate schedule for a membership tier.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use toll_engine::models::MembershipTier;
/// use toll_engine::rates::rate_schedule;
///
/// let schedule = rate_schedule(MembershipTier::Silver);
/// assert_eq!(schedule.first_20, Decimal::new(100, 2)); // $1.00
/// assert_eq!(schedule.beyond_20, Decimal::new(50, 2)); // $0.50
/// ```
pub fn rate_schedule(tier: MembershipTier) -> RateSchedule {
    match tier {
        MembershipTier::NonMember => RateSchedule {
            first_20: Decimal::new(200, 2),
            beyond_20: Decimal::new(100, 2),
        },
        MembershipTier::Silver => RateSchedule {
            first_20: Decimal::new(100, 2),
            beyond_20: Decimal::new(50, 2),
        },
        MembershipTier::Gold => RateSchedule {
            first_20: Decimal::new(0, 2),
            beyond_20: Decimal::new(0, 2),
        },
    }
}

/// Returns the charge multiplier for a time period.
///
/// Normal is 1.0, Busy is 2.0, Peak is 3.0.
pub fn time_multiplier(period: TimePeriod) -> Decimal {
    match period {
        TimePeriod::Normal => Decimal::new(10, 1),
        TimePeriod::Busy => Decimal::new(20, 1),
        TimePeriod::Peak => Decimal::new(30, 1),
    }
}

/// Returns the distance-band boundary in miles (20).
pub fn band_boundary_miles() -> Decimal {
    Decimal::new(20, 0)
}

/// Returns the per-mile rate Gold members pay beyond 20 miles during
/// busy and peak times: 25% of the non-member beyond-20 rate ($0.25).
pub fn gold_surcharge_rate() -> Decimal {
    Decimal::new(25, 2)
}
