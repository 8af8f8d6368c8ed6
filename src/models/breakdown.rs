//! Charge breakdown models and display formatting.
//!
//! This module defines the LineItem struct used to record the arithmetic
//! steps behind a computed charge, along with the formatting helpers that
//! keep breakdown text consistent across calculation rules.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A single line item in a charge breakdown.
///
/// Each line captures one arithmetic step of a toll calculation: what the
/// step was, the expression that was evaluated, and the resulting amount.
/// The `amount` field always uses the fixed pattern `$` followed by a
/// 2-decimal number (e.g. `"$12.00"`); consumers compare it verbatim.
///
/// # Example
///
/// ```
/// use toll_engine::models::LineItem;
///
/// let line = LineItem {
///     description: "Base charge".to_string(),
///     calculation: "10 miles × $2.00".to_string(),
///     amount: "$20.00".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// What this step of the calculation represents.
    pub description: String,
    /// The arithmetic expression that was evaluated.
    pub calculation: String,
    /// The resulting monetary amount, formatted as `$` + 2 decimals.
    pub amount: String,
}

/// Formats a monetary amount as `$` followed by exactly 2 decimals.
///
/// The amount is rounded half-up to the cent for display only; exact
/// values keep flowing through the calculation itself.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use toll_engine::models::format_money;
///
/// assert_eq!(format_money(Decimal::new(40, 0)), "$40.00");
/// assert_eq!(format_money(Decimal::new(375, 2)), "$3.75");
/// ```
pub fn format_money(amount: Decimal) -> String {
    let cents = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("${:.2}", cents)
}

/// Formats a mile count or multiplier for breakdown text.
///
/// Whole numbers render without a decimal point ("20", not "20.0");
/// fractional values keep their natural decimal representation.
pub fn format_quantity(value: Decimal) -> String {
    value.normalize().to_string()
}
