//! # Spread Engine
//!
//! The top-level reading computation. Pure function of its input:
//!
//! ```text
//! birth card ─┐
//!             ├─► Spread(0)  ─► reference layout ─┐
//! anniversary ┴─► Spread(Y)  ─► target layout ────┼─► cross-reference
//!                                   │             │
//!                                   └─► chain ────┴─► period + year-long cards
//! ```
//!
//! Output is raw structure only; letter wording and rendering belong to the
//! caller.

use crate::birth::BirthCardResolver;
use crate::calendar::{Anniversary, BirthDate, SpreadYear};
use crate::chain::Chain;
use crate::crossref::CrossReference;
use crate::layout::Layout;
use crate::period::ActivePeriod;
use crate::{Card, SpreadError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Chain index of the first long-horizon card.
const PLUTO_INDEX: usize = 7;

/// Chain index of the second long-horizon card.
const RESULT_INDEX: usize = 8;

// =============================================================================
// INPUT
// =============================================================================

/// Everything a reading is computed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingInput {
    /// Personalization only; never used in computation.
    pub first_name: String,
    pub birth: BirthDate,
    pub target: NaiveDate,
}

impl ReadingInput {
    #[must_use]
    pub fn new(first_name: impl Into<String>, birth: BirthDate, target: NaiveDate) -> Self {
        Self {
            first_name: first_name.into(),
            birth,
            target,
        }
    }
}

// =============================================================================
// OUTPUT
// =============================================================================

/// Cards that hold for the whole spread year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearLong {
    /// Last card of the chain (`chain[spread_year - 1]`).
    pub long_range: Card,
    /// `chain[7]`, present from spread year 8.
    pub pluto: Option<Card>,
    /// `chain[8]`, present from spread year 9.
    pub result: Option<Card>,
    pub displacement: Option<Card>,
    pub environment: Option<Card>,
}

/// A complete reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    pub subscriber: String,
    pub birth_card: Card,
    pub solar_value: i32,
    pub age: i32,
    pub spread_year: SpreadYear,
    pub target_date: NaiveDate,
    pub last_anniversary: NaiveDate,
    pub period: ActivePeriod,
    pub year_long: YearLong,
}

// =============================================================================
// ENGINE
// =============================================================================

/// The Spread Engine. Stateless; safe to call from any thread.
pub struct SpreadEngine;

impl SpreadEngine {
    /// Compute a reading.
    ///
    /// Fails with `UnassignableBirthDate` when the birth date resolves to the
    /// sentinel, and with `AnchorNotFound` only if the fixed tables are corrupt.
    pub fn compute(input: &ReadingInput) -> Result<Reading, SpreadError> {
        let birth_card = BirthCardResolver::require(input.birth.month(), input.birth.day())?;
        let anniversary = Anniversary::locate(input.birth, input.target)?;
        let spread_year = anniversary.spread_year;

        let reference = Layout::for_year(0);
        let target = Layout::for_year(spread_year.get());

        let chain = Chain::extract(&target, birth_card, spread_year.chain_len())?;
        let period = ActivePeriod::assign(anniversary.days_since, &chain)?;
        let xref = CrossReference::resolve(&reference, &target, birth_card)?;

        let long_range = chain
            .last()
            .ok_or(SpreadError::EmptyChain)?;

        tracing::debug!(
            %birth_card,
            spread_year = spread_year.get(),
            days_since = anniversary.days_since,
            "reading computed"
        );

        Ok(Reading {
            subscriber: input.first_name.clone(),
            birth_card,
            solar_value: birth_card.solar_value(),
            age: anniversary.age,
            spread_year,
            target_date: input.target,
            last_anniversary: anniversary.date,
            period,
            year_long: YearLong {
                long_range,
                pluto: chain.get(PLUTO_INDEX),
                result: chain.get(RESULT_INDEX),
                displacement: xref.map(|x| x.displacement),
                environment: xref.map(|x| x.environment),
            },
        })
    }

    /// Chain for an arbitrary anchor and spread year (diagnostics).
    pub fn chain_for(anchor: Card, spread_year: SpreadYear) -> Result<Chain, SpreadError> {
        let layout = Layout::for_year(spread_year.get());
        Chain::extract(&layout, anchor, spread_year.chain_len())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn input(first_name: &str, y: i32, m: u32, d: u32, target: &str) -> ReadingInput {
        ReadingInput::new(
            first_name,
            BirthDate::new(y, m, d).expect("birth"),
            crate::calendar::parse_date(target).expect("target"),
        )
    }

    #[test]
    fn reference_scenario() {
        let reading =
            SpreadEngine::compute(&input("Cassidy", 1991, 2, 17, "2026-02-21")).expect("compute");

        assert_eq!(reading.subscriber, "Cassidy");
        assert_eq!(reading.birth_card.to_string(), "8♦");
        assert_eq!(reading.age, 35);
        assert_eq!(reading.spread_year.get(), 36);
        assert_eq!(reading.period.card.to_string(), "7♦");
        assert_eq!(reading.period.planet, crate::Planet::Mercury);
        assert_eq!(reading.period.days_since, 5);

        let yl = reading.year_long;
        assert_eq!(yl.long_range.to_string(), "4♦");
        assert_eq!(yl.pluto.map(|c| c.to_string()).as_deref(), Some("3♦"));
        assert_eq!(yl.result.map(|c| c.to_string()).as_deref(), Some("K♦"));
        assert_eq!(yl.displacement.map(|c| c.to_string()).as_deref(), Some("6♦"));
        assert_eq!(yl.environment.map(|c| c.to_string()).as_deref(), Some("8♠"));
    }

    #[test]
    fn unassignable_birth_date() {
        let err = SpreadEngine::compute(&input("Noel", 1990, 12, 31, "2026-03-15"));
        assert!(matches!(
            err,
            Err(SpreadError::UnassignableBirthDate { month: 12, day: 31, .. })
        ));
    }

    #[test]
    fn young_subscriber_has_no_long_horizon_cards() {
        let reading =
            SpreadEngine::compute(&input("Ada", 2020, 6, 1, "2026-03-15")).expect("compute");
        assert_eq!(reading.age, 5);
        assert_eq!(reading.spread_year.get(), 6);
        assert_eq!(reading.year_long.pluto, None);
        assert_eq!(reading.year_long.result, None);
    }

    #[test]
    fn first_year_period_keeps_calendar_planet() {
        let reading =
            SpreadEngine::compute(&input("Bo", 2025, 6, 1, "2026-03-15")).expect("compute");
        assert_eq!(reading.age, 0);
        assert_eq!(reading.spread_year.get(), 1);
        assert_eq!(reading.period.days_since, 288);

        // One-card chain: the sixth period still reports Uranus.
        assert_eq!(reading.period.planet, crate::Planet::Uranus);
        assert_eq!(reading.period.card, reading.year_long.long_range);

        let chain = SpreadEngine::chain_for(reading.birth_card, reading.spread_year)
            .expect("chain");
        assert_eq!(chain.cards(), &[reading.period.card]);
    }

    #[test]
    fn idempotent() {
        let req = input("Cassidy", 1991, 2, 17, "2026-02-21");
        let a = SpreadEngine::compute(&req).expect("first");
        let b = SpreadEngine::compute(&req).expect("second");
        assert_eq!(a, b);
    }
}
