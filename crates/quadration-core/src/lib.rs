//! # quadration-core
//!
//! The deterministic Spread Engine for Quadration - THE ENGINE.
//!
//! Given a birth date and a target date, this crate derives a birth card,
//! quadrates the year-zero life spread once per spread year, lays the result
//! out as a 7×7 grid plus crown, walks it into a chain of period cards, and
//! cross-references it against year zero.
//!
//! ## Pipeline
//!
//! - `birth` → birth card from month/day (solar value)
//! - `spread` → flat 52-card spread for year `N`
//! - `layout` → rows and crown, plus positions
//! - `chain` → leftward walk from the anchor card
//! - `crossref` → displacement and environment cards
//! - `period` → active 52-day period
//! - `engine` → the whole reading
//!
//! ## Architectural Constraints
//!
//! - Pure: no I/O, no clock reads, no async
//! - Stateless: tables are compile-time constants; every value is fresh
//! - Integer arithmetic only

// =============================================================================
// MODULES
// =============================================================================

pub mod birth;
pub mod calendar;
pub mod chain;
pub mod crossref;
pub mod engine;
pub mod layout;
pub mod period;
pub mod primitives;
pub mod spread;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{BirthCard, Card, Planet, Rank, SpreadError, Suit};

// =============================================================================
// RE-EXPORTS: Engine
// =============================================================================

pub use birth::BirthCardResolver;
pub use calendar::{Anniversary, BirthDate, SpreadYear};
pub use chain::{Chain, ChainWalk};
pub use crossref::CrossReference;
pub use engine::{Reading, ReadingInput, SpreadEngine, YearLong};
pub use layout::{Layout, Position};
pub use period::ActivePeriod;
pub use spread::Spread;
