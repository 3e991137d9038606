//! # Birth Card Resolver
//!
//! Maps a birth month/day to its canonical card through the solar value:
//!
//! ```text
//! solar = 55 - (2 * month + day)
//! ```
//!
//! Solar values 1..=52 index the alphabet in suit-major order (1 = A♥,
//! 52 = K♠). Non-positive values resolve to the `NoCard` sentinel.

use crate::primitives::SOLAR_BASE;
use crate::{BirthCard, Card, SpreadError};

/// The Birth Card Resolver. Pure and total.
pub struct BirthCardResolver;

impl BirthCardResolver {
    /// Compute the raw solar value. Month and day are assumed valid.
    #[must_use]
    pub fn solar_value(month: u32, day: u32) -> i32 {
        SOLAR_BASE - (2 * month as i32 + day as i32)
    }

    /// Resolve a birth month/day to a card or the sentinel.
    #[must_use]
    pub fn resolve(month: u32, day: u32) -> BirthCard {
        let solar_value = Self::solar_value(month, day);
        match Card::from_solar_value(solar_value) {
            Some(card) => BirthCard::Assigned { card, solar_value },
            None => BirthCard::NoCard { solar_value },
        }
    }

    /// Resolve, treating the sentinel as `UnassignableBirthDate`.
    pub fn require(month: u32, day: u32) -> Result<Card, SpreadError> {
        match Self::resolve(month, day) {
            BirthCard::Assigned { card, .. } => Ok(card),
            BirthCard::NoCard { solar_value } => {
                tracing::debug!(month, day, solar_value, "birth date has no card");
                Err(SpreadError::UnassignableBirthDate {
                    month,
                    day,
                    solar_value,
                })
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
