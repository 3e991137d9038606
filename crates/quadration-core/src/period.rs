//! # Period Assigner
//!
//! Maps elapsed days since the last anniversary onto one of seven 52-day
//! periods and picks that period's card from the chain. The seventh period
//! absorbs any overflow (a 365/366-day year is longer than 7 × 52).

use crate::chain::Chain;
use crate::primitives::{PERIOD_COUNT, PERIOD_LENGTH_DAYS};
use crate::{Card, Planet, SpreadError};
use serde::{Deserialize, Serialize};

/// The period a target date falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActivePeriod {
    pub card: Card,
    pub planet: Planet,
    pub days_since: u32,
}

impl ActivePeriod {
    /// Period index for a 1-based day count: `min((days - 1) / 52, 6)`.
    #[must_use]
    pub fn index_for(days_since: u32) -> usize {
        let index = (days_since.saturating_sub(1) / PERIOD_LENGTH_DAYS) as usize;
        index.min(PERIOD_COUNT - 1)
    }

    /// Select the active period card from a chain.
    ///
    /// Chains shorter than the period index (spread years below 7) yield
    /// their last card; the planet still follows the calendar period.
    pub fn assign(days_since: u32, chain: &Chain) -> Result<Self, SpreadError> {
        let index = Self::index_for(days_since);
        let planet = Planet::from_index(index)
            .ok_or(SpreadError::PeriodOutOfRange(index))?;
        let card = chain
            .get(index)
            .or_else(|| chain.last())
            .ok_or(SpreadError::EmptyChain)?;

        tracing::debug!(days_since, index, %planet, %card, "active period assigned");
        Ok(Self {
            card,
            planet,
            days_since,
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Layout;
    use crate::{Rank, Suit};

    #[test]
    fn period_boundaries() {
        assert_eq!(ActivePeriod::index_for(1), 0);
        assert_eq!(ActivePeriod::index_for(52), 0);
        assert_eq!(ActivePeriod::index_for(53), 1);
        assert_eq!(ActivePeriod::index_for(312), 5);
        assert_eq!(ActivePeriod::index_for(313), 6);
        assert_eq!(ActivePeriod::index_for(366), 6);
        assert_eq!(ActivePeriod::index_for(0), 0);
    }

    #[test]
    fn assign_reads_chain_at_period_index() {
        let layout = Layout::for_year(20);
        let chain = Chain::extract(&layout, Card::new(Rank::Six, Suit::Clubs), 20)
            .expect("extract");

        let period = ActivePeriod::assign(110, &chain).expect("assign");
        assert_eq!(period.planet, Planet::Mars);
        assert_eq!(Some(period.card), chain.get(2));
        assert_eq!(period.days_since, 110);
    }

    #[test]
    fn short_chain_uses_last_card() {
        let layout = Layout::for_year(2);
        let chain = Chain::extract(&layout, Card::new(Rank::Six, Suit::Clubs), 2)
            .expect("extract");

        let period = ActivePeriod::assign(340, &chain).expect("assign");
        assert_eq!(period.planet, Planet::Neptune);
        assert_eq!(Some(period.card), chain.last());
    }

    #[test]
    fn empty_chain_is_rejected() {
        let layout = Layout::for_year(1);
        let chain = Chain::extract(&layout, Card::new(Rank::Six, Suit::Clubs), 0)
            .expect("extract");
        assert!(matches!(
            ActivePeriod::assign(1, &chain),
            Err(SpreadError::EmptyChain)
        ));
    }
}
