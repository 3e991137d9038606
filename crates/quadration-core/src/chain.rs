//! # Chain Extractor
//!
//! Walks a layout leftward from an anchor card and collects the cards it
//! passes over.
//!
//! - The anchor is located once; every later move is a pure position
//!   transition ([`Position::next_left`]) independent of card identity.
//! - `chain[0]` is the card immediately left of the anchor, never the anchor.
//! - The walk is a 52-position cycle, so chains longer than 51 revisit cards.

use crate::layout::{Layout, Position};
use crate::{Card, SpreadError};
use serde::{Deserialize, Serialize};

/// An ordered sequence of period cards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chain {
    anchor: Card,
    cards: Vec<Card>,
}

impl Chain {
    /// Extract exactly `len` cards walking left from `anchor` in `layout`.
    ///
    /// Returns `SpreadError::AnchorNotFound` if the anchor is not laid out.
    pub fn extract(layout: &Layout, anchor: Card, len: usize) -> Result<Self, SpreadError> {
        let start = layout
            .position_of(anchor)
            .ok_or(SpreadError::AnchorNotFound(anchor))?;
        tracing::trace!(%anchor, %start, len, "chain anchor located");

        let cards = ChainWalk::new(start)
            .take(len)
            .map(|pos| {
                layout
                    .card_at(pos)
                    .ok_or(SpreadError::AnchorNotFound(anchor))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { anchor, cards })
    }

    /// The card the walk started from.
    #[must_use]
    pub const fn anchor(&self) -> Card {
        self.anchor
    }

    /// The collected cards.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Card at chain index `i`.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<Card> {
        self.cards.get(i).copied()
    }

    /// Last card collected.
    #[must_use]
    pub fn last(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Endless iterator of walk positions, starting one step left of an anchor.
#[derive(Debug, Clone, Copy)]
pub struct ChainWalk {
    current: Position,
}

impl ChainWalk {
    /// Begin a walk whose first yielded position is left of `anchor`.
    #[must_use]
    pub const fn new(anchor: Position) -> Self {
        Self { current: anchor }
    }
}

impl Iterator for ChainWalk {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        self.current = self.current.next_left();
        Some(self.current)
    }
}

// =============================================================================
// TESTS
// =============================================================================
