//! Time multiplier application functionality.
//!
//! This module applies the time-of-day multiplier to a base charge,
//! including the Gold-member exception: Gold members ride free on the
//! first 20 miles at any time, and during busy/peak times pay a flat
//! surcharge of $0.25 per mile beyond 20, scaled by the multiplier,
//! instead of their (zero) base rates.

use rust_decimal::Decimal;

use super::base_charge::BaseChargeResult;
use crate::models::{LineItem, MembershipTier, TimePeriod, format_money, format_quantity};
use crate::rates;

/// The result of applying the time multiplier, including breakdown lines.
#[derive(Debug, Clone)]
pub struct FinalChargeResult {
    /// The exact final charge before rounding.
    pub charge: Decimal,
    /// The complete breakdown lines for the calculation.
    pub lines: Vec<LineItem>,
}

/// Applies the time-of-day multiplier to a base charge.
///
/// For Gold members outside normal times the base charge is overridden
/// entirely: trips of 20 miles or less are free (with the zero multiplier
/// step still shown), and longer trips pay the busy/peak surcharge on the
/// miles beyond 20, with the breakdown replaced wholesale by the
/// free/surcharge/multiplier lines.
///
/// For everyone else, normal time leaves the base charge untouched and
/// adds no lines. Busy/peak times multiply the base charge; when the
/// breakdown already holds the two-segment split, a "Total base charge"
/// summary line is appended before the multiplier line. A zero base
/// charge gets no multiplier line.
///
/// # Arguments
///
/// * `base` - The base charge result to build on
/// * `time_period` - The time-of-day period of the journey
/// * `membership` - The membership tier of the party being charged
/// * `distance` - The distance traveled in miles
///
/// # Returns
///
/// Returns a `FinalChargeResult` containing the exact (unrounded) final
/// charge and the complete breakdown lines.
pub fn apply_time_multiplier(
    base: BaseChargeResult,
    time_period: TimePeriod,
    membership: MembershipTier,
    distance: Decimal,
) -> FinalChargeResult {
    let multiplier = rates::time_multiplier(time_period);
    let boundary = rates::band_boundary_miles();

    // Gold members get special treatment outside normal times
    if membership == MembershipTier::Gold && time_period != TimePeriod::Normal {
        if distance <= boundary {
            // First 20 miles stay free; the multiplier step is still shown
            let mut lines = base.lines;
            lines.push(LineItem {
                description: format!("{} time multiplier", time_period.title()),
                calculation: format!(
                    "{} × {}",
                    format_money(base.charge),
                    format_quantity(multiplier)
                ),
                amount: format_money(Decimal::ZERO),
            });

            return FinalChargeResult {
                charge: Decimal::ZERO,
                lines,
            };
        }

        // Beyond 20 miles the surcharge rate replaces the base charge outright
        let remaining_miles = distance - boundary;
        let surcharge_rate = rates::gold_surcharge_rate();
        let surcharge = remaining_miles * surcharge_rate;
        let charge = surcharge * multiplier;
        let remaining = format_quantity(remaining_miles);

        let lines = vec![
            LineItem {
                description: "First 20 miles (free)".to_string(),
                calculation: "20 miles × $0.00".to_string(),
                amount: "$0.00".to_string(),
            },
            LineItem {
                description: format!("Next {} miles (base)", remaining),
                calculation: format!("{} miles × ${}", remaining, surcharge_rate),
                amount: format_money(surcharge),
            },
            LineItem {
                description: format!("{} time multiplier", time_period.title()),
                calculation: format!(
                    "{} × {}",
                    format_money(surcharge),
                    format_quantity(multiplier)
                ),
                amount: format_money(charge),
            },
        ];

        return FinalChargeResult { charge, lines };
    }

    if time_period == TimePeriod::Normal {
        return FinalChargeResult {
            charge: base.charge,
            lines: base.lines,
        };
    }

    let final_charge = base.charge * multiplier;
    let mut lines = base.lines;

    // The two-segment split gets a summary line before the multiplier step
    if lines.len() > 1 {
        let summed: Vec<String> = lines.iter().map(|line| line.amount.clone()).collect();
        lines.push(LineItem {
            description: "Total base charge".to_string(),
            calculation: summed.join(" + "),
            amount: format_money(base.charge),
        });
    }

    if base.charge > Decimal::ZERO {
        lines.push(LineItem {
            description: format!("{} time multiplier", time_period.title()),
            calculation: format!(
                "{} × {}",
                format_money(base.charge),
                format_quantity(multiplier)
            ),
            amount: format_money(final_charge),
        });
    }

    FinalChargeResult {
        charge: final_charge,
        lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::calculate_base_charge;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn apply(
        distance: &str,
        membership: MembershipTier,
        time_period: TimePeriod,
    ) -> FinalChargeResult {
        let distance = dec(distance);
        let base = calculate_base_charge(distance, membership);
        apply_time_multiplier(base, time_period, membership, distance)
    }

    /// TM-001: normal time leaves the base charge untouched
    #[test]
    fn test_normal_time_leaves_base_untouched() {
        let result = apply("10", MembershipTier::NonMember, TimePeriod::Normal);

        assert_eq!(result.charge, dec("20.00"));
        assert_eq!(result.lines.len(), 1);
    }

    /// TM-002: normal time adds no summary line after a split
    #[test]
    fn test_normal_time_adds_no_summary_after_split() {
        let result = apply("25", MembershipTier::NonMember, TimePeriod::Normal);

        assert_eq!(result.charge, dec("45.00"));
        assert_eq!(result.lines.len(), 2);
    }

    /// TM-003: busy time doubles a single-band charge
    #[test]
    fn test_busy_time_doubles_single_band_charge() {
        let result = apply("10", MembershipTier::Silver, TimePeriod::Busy);

        assert_eq!(result.charge, dec("20.00"));
        assert_eq!(result.lines.len(), 2);
        assert_eq!(result.lines[1].description, "Busy time multiplier");
        assert_eq!(result.lines[1].calculation, "$10.00 × 2");
        assert_eq!(result.lines[1].amount, "$20.00");
    }

    /// TM-004: busy time after a split adds the summary line first
    #[test]
    fn test_busy_time_after_split_adds_summary_line() {
        let result = apply("25", MembershipTier::NonMember, TimePeriod::Busy);

        assert_eq!(result.charge, dec("90.00"));
        assert_eq!(result.lines.len(), 4);
        assert_eq!(result.lines[2].description, "Total base charge");
        assert_eq!(result.lines[2].calculation, "$40.00 + $5.00");
        assert_eq!(result.lines[2].amount, "$45.00");
        assert_eq!(result.lines[3].description, "Busy time multiplier");
        assert_eq!(result.lines[3].calculation, "$45.00 × 2");
        assert_eq!(result.lines[3].amount, "$90.00");
    }

    /// TM-005: gold short trip is free at peak, multiplier step still shown
    #[test]
    fn test_gold_short_trip_free_at_peak() {
        let result = apply("10", MembershipTier::Gold, TimePeriod::Peak);

        assert_eq!(result.charge, Decimal::ZERO);
        assert_eq!(result.lines.len(), 2);
        assert_eq!(result.lines[0].description, "Base charge");
        assert_eq!(result.lines[1].description, "Peak time multiplier");
        assert_eq!(result.lines[1].calculation, "$0.00 × 3");
        assert_eq!(result.lines[1].amount, "$0.00");
    }

    /// TM-006: gold long trip at peak pays the surcharge beyond 20 miles
    #[test]
    fn test_gold_long_trip_pays_surcharge_at_peak() {
        let result = apply("25", MembershipTier::Gold, TimePeriod::Peak);

        assert_eq!(result.charge, dec("3.75"));
        assert_eq!(result.lines.len(), 3);
        assert_eq!(result.lines[0].description, "First 20 miles (free)");
        assert_eq!(result.lines[0].calculation, "20 miles × $0.00");
        assert_eq!(result.lines[0].amount, "$0.00");
        assert_eq!(result.lines[1].description, "Next 5 miles (base)");
        assert_eq!(result.lines[1].calculation, "5 miles × $0.25");
        assert_eq!(result.lines[1].amount, "$1.25");
        assert_eq!(result.lines[2].description, "Peak time multiplier");
        assert_eq!(result.lines[2].calculation, "$1.25 × 3");
        assert_eq!(result.lines[2].amount, "$3.75");
    }

    /// TM-007: gold long trip surcharge replaces the base breakdown wholesale
    #[test]
    fn test_gold_long_trip_replaces_breakdown() {
        let result = apply("30", MembershipTier::Gold, TimePeriod::Busy);

        // 10 × $0.25 × 2
        assert_eq!(result.charge, dec("5.00"));
        assert_eq!(result.lines.len(), 3);
        assert!(result.lines.iter().all(|l| l.description != "Base charge"));
    }

    /// TM-008: gold normal time keeps the free base charge, no multiplier line
    #[test]
    fn test_gold_normal_time_has_no_multiplier_line() {
        let result = apply("10", MembershipTier::Gold, TimePeriod::Normal);
        assert_eq!(result.charge, Decimal::ZERO);
        assert_eq!(result.lines.len(), 1);

        let long = apply("25", MembershipTier::Gold, TimePeriod::Normal);
        assert_eq!(long.charge, Decimal::ZERO);
        assert_eq!(long.lines.len(), 2);
    }

    /// TM-009: integer multipliers render without decimals
    #[test]
    fn test_integer_multipliers_render_without_decimals() {
        let busy = apply("10", MembershipTier::NonMember, TimePeriod::Busy);
        assert!(busy.lines[1].calculation.ends_with("× 2"));

        let peak = apply("10", MembershipTier::NonMember, TimePeriod::Peak);
        assert!(peak.lines[1].calculation.ends_with("× 3"));
    }
}
