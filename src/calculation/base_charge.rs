//! Base charge calculation functionality.
//!
//! This module computes the toll charge before any time-of-day multiplier
//! is applied, using tiered per-mile rates: one rate for miles within the
//! first 20 and a lower rate for miles beyond 20.

use rust_decimal::Decimal;

use crate::models::{LineItem, MembershipTier, format_money, format_quantity};
use crate::rates;

/// The result of a base charge calculation, including the breakdown lines.
#[derive(Debug, Clone)]
pub struct BaseChargeResult {
    /// The exact base charge before any time multiplier.
    pub charge: Decimal,
    /// The breakdown lines recording how the base charge was derived.
    pub lines: Vec<LineItem>,
}

/// Calculates the base charge for a distance at a membership tier's rates.
///
/// Distances of 20 miles or less are charged entirely at the tier's
/// first-20 rate and produce a single breakdown line. Longer distances are
/// split at the 20-mile boundary, with the remainder charged at the tier's
/// beyond-20 rate, producing one breakdown line per segment.
///
/// The caller is responsible for rejecting non-positive distances before
/// calling this function.
///
/// # Arguments
///
/// * `distance` - The distance traveled in miles (must be > 0)
/// * `membership` - The membership tier whose rates apply
///
/// # Returns
///
/// Returns a `BaseChargeResult` containing the exact (unrounded) charge
/// and the breakdown lines for the distance band(s) used.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use toll_engine::calculation::calculate_base_charge;
/// use toll_engine::models::MembershipTier;
///
/// let result = calculate_base_charge(Decimal::from(25), MembershipTier::NonMember);
/// assert_eq!(result.charge, Decimal::from(45)); // 20 × $2.00 + 5 × $1.00
/// assert_eq!(result.lines.len(), 2);
/// ```
pub fn calculate_base_charge(distance: Decimal, membership: MembershipTier) -> BaseChargeResult {
    let schedule = rates::rate_schedule(membership);
    let boundary = rates::band_boundary_miles();

    if distance <= boundary {
        // All miles are in the first band
        let charge = distance * schedule.first_20;

        let lines = vec![LineItem {
            description: "Base charge".to_string(),
            calculation: format!(
                "{} miles × ${}",
                format_quantity(distance),
                schedule.first_20
            ),
            amount: format_money(charge),
        }];

        BaseChargeResult { charge, lines }
    } else {
        // Split between the first 20 miles and the remainder
        let first_20_charge = boundary * schedule.first_20;
        let remaining_miles = distance - boundary;
        let remaining_charge = remaining_miles * schedule.beyond_20;
        let remaining = format_quantity(remaining_miles);

        let lines = vec![
            LineItem {
                description: "First 20 miles (base)".to_string(),
                calculation: format!("20 miles × ${}", schedule.first_20),
                amount: format_money(first_20_charge),
            },
            LineItem {
                description: format!("Next {} miles (base)", remaining),
                calculation: format!("{} miles × ${}", remaining, schedule.beyond_20),
                amount: format_money(remaining_charge),
            },
        ];

        BaseChargeResult {
            charge: first_20_charge + remaining_charge,
            lines,
        }
    }
}
