//! Time period model.
//!
//! This module defines the TimePeriod enum representing the time-of-day
//! bucket a journey falls into.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TollError;

/// Represents the time-of-day bucket for a journey.
///
/// Each period carries a charge multiplier applied on top of the base
/// charge (see [`crate::rates::time_multiplier`]).
///
/// # Example
///
/// ```
/// use toll_engine::models::TimePeriod;
///
/// let period: TimePeriod = "busy".parse().unwrap();
/// assert_eq!(period, TimePeriod::Busy);
/// assert_eq!(period.title(), "Busy");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimePeriod {
    /// Off-peak travel; no multiplier.
    Normal,
    /// Busy travel; charges are doubled.
    Busy,
    /// Peak travel; charges are tripled.
    Peak,
}

impl TimePeriod {
    /// Returns the wire token for this period, as accepted by [`FromStr`].
    pub fn token(&self) -> &'static str {
        match self {
            TimePeriod::Normal => "normal",
            TimePeriod::Busy => "busy",
            TimePeriod::Peak => "peak",
        }
    }

    /// Returns the title-cased display name used in breakdown lines.
    pub fn title(&self) -> &'static str {
        match self {
            TimePeriod::Normal => "Normal",
            TimePeriod::Busy => "Busy",
            TimePeriod::Peak => "Peak",
        }
    }
}

impl FromStr for TimePeriod {
    type Err = TollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(TimePeriod::Normal),
            "busy" => Ok(TimePeriod::Busy),
            "peak" => Ok(TimePeriod::Peak),
            _ => Err(TollError::InvalidTimePeriod {
                value: s.to_string(),
            }),
        }
    }
}
