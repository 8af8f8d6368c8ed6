//! Membership tier model.
//!
//! This module defines the MembershipTier enum representing the discount
//! level held by the party being charged.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TollError;

/// Represents the membership tier of the party being charged.
///
/// The tier determines the per-mile rates applied in each distance band,
/// and Gold members receive special treatment during busy and peak times.
///
/// Tiers are parsed once at the boundary from their exact, case-sensitive
/// tokens; all internal logic matches exhaustively on the enum.
///
/// # Example
///
/// ```
/// use toll_engine::models::MembershipTier;
///
/// let tier: MembershipTier = "Silver".parse().unwrap();
/// assert_eq!(tier, MembershipTier::Silver);
/// assert!("silver".parse::<MembershipTier>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MembershipTier {
    /// No membership; full rates apply.
    NonMember,
    /// Silver membership; half of the non-member rates.
    Silver,
    /// Gold membership; free travel, with a busy/peak surcharge beyond 20 miles.
    Gold,
}

impl MembershipTier {
    /// Returns the wire token for this tier, as accepted by [`FromStr`].
    pub fn token(&self) -> &'static str {
        match self {
            MembershipTier::NonMember => "non",
            MembershipTier::Silver => "Silver",
            MembershipTier::Gold => "Gold",
        }
    }
}

impl FromStr for MembershipTier {
    type Err = TollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "non" => Ok(MembershipTier::NonMember),
            "Silver" => Ok(MembershipTier::Silver),
            "Gold" => Ok(MembershipTier::Gold),
            _ => Err(TollError::InvalidMembership),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// MT-001: valid tokens parse
    #[test]
    fn test_valid_tokens_parse() {
        assert_eq!("non".parse::<MembershipTier>(), Ok(MembershipTier::NonMember));
        assert_eq!("Silver".parse::<MembershipTier>(), Ok(MembershipTier::Silver));
        assert_eq!("Gold".parse::<MembershipTier>(), Ok(MembershipTier::Gold));
    }

    /// MT-002: tokens are case-sensitive
    #[test]
    fn test_tokens_are_case_sensitive() {
        assert_eq!(
            "gold".parse::<MembershipTier>(),
            Err(TollError::InvalidMembership)
        );
        assert_eq!(
            "silver".parse::<MembershipTier>(),
            Err(TollError::InvalidMembership)
        );
        assert_eq!(
            "NON".parse::<MembershipTier>(),
            Err(TollError::InvalidMembership)
        );
    }

    /// MT-003: unknown token rejected
    #[test]
    fn test_unknown_token_rejected() {
        assert_eq!(
            "platinum".parse::<MembershipTier>(),
            Err(TollError::InvalidMembership)
        );
        assert_eq!(
            "".parse::<MembershipTier>(),
            Err(TollError::InvalidMembership)
        );
    }

    #[test]
    fn test_token_round_trips_through_from_str() {
        for tier in [
            MembershipTier::NonMember,
            MembershipTier::Silver,
            MembershipTier::Gold,
        ] {
            assert_eq!(tier.token().parse::<MembershipTier>(), Ok(tier));
        }
    }
}
