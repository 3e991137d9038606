//! # Spread Generator
//!
//! Applies the quadration permutation `N` times to the base ordering.
//!
//! Every application builds a brand-new array; the reference spread and any
//! target spread computed in the same request never alias.

use crate::Card;
use crate::primitives::{BASE_ORDERING, CARD_COUNT, PERMUTATION};

/// A flat 52-card arrangement for one spread year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Spread {
    year: u32,
    cards: [Card; CARD_COUNT],
}

impl Spread {
    /// The year-zero life spread (the base ordering).
    #[must_use]
    pub const fn base() -> Self {
        Self {
            year: 0,
            cards: BASE_ORDERING,
        }
    }

    /// Generate the spread for year `n` by applying the permutation `n` times.
    #[must_use]
    pub fn generate(n: u32) -> Self {
        let mut spread = Self::base();
        for _ in 0..n {
            spread = spread.quadrate();
        }
        tracing::trace!(year = n, "spread generated");
        spread
    }

    /// Apply the permutation once, returning the next year's spread.
    #[must_use]
    pub fn quadrate(&self) -> Self {
        let cards = std::array::from_fn(|i| self.cards[PERMUTATION[i]]);
        Self {
            year: self.year.saturating_add(1),
            cards,
        }
    }

    /// Number of permutation applications this spread represents.
    #[must_use]
    pub const fn year(&self) -> u32 {
        self.year
    }

    /// The flat card sequence.
    #[must_use]
    pub const fn cards(&self) -> &[Card; CARD_COUNT] {
        &self.cards
    }
}

impl Default for Spread {
    fn default() -> Self {
        Self::base()
    }
}

// =============================================================================
// TESTS
// =============================================================================
