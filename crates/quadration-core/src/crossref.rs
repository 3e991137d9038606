//! # Cross-Reference Resolver
//!
//! Swaps position lookups between the reference (year-zero) layout and a
//! target-year layout:
//!
//! - **displacement**: the reference card at the anchor's *target* position
//! - **environment**: the target card at the anchor's *reference* position
//!
//! Grid positions map to identical `(row, col)`, crown slots to crown slots.
//! Anchors in [`NO_CROSS_REFERENCE`] receive neither card.

use crate::layout::Layout;
use crate::primitives::NO_CROSS_REFERENCE;
use crate::{Card, SpreadError};
use serde::{Deserialize, Serialize};

/// The pair of cross-referenced cards for one anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CrossReference {
    pub displacement: Card,
    pub environment: Card,
}

impl CrossReference {
    /// Check whether a card is excluded from cross-referencing.
    #[must_use]
    pub fn is_excluded(card: Card) -> bool {
        NO_CROSS_REFERENCE.contains(&card)
    }

    /// Resolve displacement and environment for `anchor`.
    ///
    /// Returns `Ok(None)` for excluded anchors and
    /// `SpreadError::AnchorNotFound` if either layout lacks the anchor.
    pub fn resolve(
        reference: &Layout,
        target: &Layout,
        anchor: Card,
    ) -> Result<Option<Self>, SpreadError> {
        if Self::is_excluded(anchor) {
            tracing::debug!(%anchor, "anchor excluded from cross-reference");
            return Ok(None);
        }

        let in_target = target
            .position_of(anchor)
            .ok_or(SpreadError::AnchorNotFound(anchor))?;
        let in_reference = reference
            .position_of(anchor)
            .ok_or(SpreadError::AnchorNotFound(anchor))?;

        let displacement = reference
            .card_at(in_target)
            .ok_or(SpreadError::AnchorNotFound(anchor))?;
        let environment = target
            .card_at(in_reference)
            .ok_or(SpreadError::AnchorNotFound(anchor))?;

        Ok(Some(Self {
            displacement,
            environment,
        }))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rank, Suit};

    #[test]
    fn year_zero_against_itself_is_identity() {
        let base = Layout::for_year(0);
        let anchor = Card::new(Rank::Eight, Suit::Diamonds);
        let xref = CrossReference::resolve(&base, &base, anchor)
            .expect("resolve")
            .expect("not excluded");
        assert_eq!(xref.displacement, anchor);
        assert_eq!(xref.environment, anchor);
    }

    #[test]
    fn excluded_anchor_has_no_cards() {
        let reference = Layout::for_year(0);
        let target = Layout::for_year(12);
        for card in NO_CROSS_REFERENCE {
            let xref = CrossReference::resolve(&reference, &target, card).expect("resolve");
            assert!(xref.is_none(), "{card} should be excluded");
        }
    }

    #[test]
    fn lookups_are_inverse_positions() {
        let reference = Layout::for_year(0);
        let target = Layout::for_year(7);
        let anchor = Card::new(Rank::Three, Suit::Clubs);

        let xref = CrossReference::resolve(&reference, &target, anchor)
            .expect("resolve")
            .expect("not excluded");

        let target_pos = target.position_of(anchor).expect("laid out");
        let reference_pos = reference.position_of(anchor).expect("laid out");
        assert_eq!(reference.card_at(target_pos), Some(xref.displacement));
        assert_eq!(target.card_at(reference_pos), Some(xref.environment));
    }
}
