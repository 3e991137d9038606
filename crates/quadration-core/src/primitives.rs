//! # Innate Primitives
//!
//! Hardcoded tables and geometry for the Quadration engine.
//!
//! These primitives are compiled into the binary and are immutable at runtime.
//! Every spread, layout and chain is derived from them alone.
//!
//! ## Primitives
//!
//! 1. **Base Ordering**: the year-zero life spread.
//! 2. **Permutation**: the quadration shuffle applied once per spread year.
//! 3. **Cross-Reference Exclusions**: cards that never receive a
//!    displacement or environment card.

use crate::types::Rank::{
    Ace, Eight, Five, Four, Jack, King, Nine, Queen, Seven, Six, Ten, Three, Two,
};
use crate::types::Suit::{Clubs, Diamonds, Hearts, Spades};
use crate::types::Card;

// =============================================================================
// GEOMETRY
// =============================================================================

/// Number of cards in a spread.
pub const CARD_COUNT: usize = 52;

/// Number of named grid rows.
pub const GRID_ROWS: usize = 7;

/// Number of columns per grid row.
pub const GRID_COLS: usize = 7;

/// Number of crown slots, occupying flat positions 49-51.
pub const CROWN_LEN: usize = 3;

/// Flat position of the first crown slot.
pub const CROWN_START: usize = GRID_ROWS * GRID_COLS;

/// Crown slot entered when the walk leaves the bottom-left grid cell.
pub const CROWN_ENTRY_INDEX: usize = 2;

// =============================================================================
// SPREAD YEAR & PERIODS
// =============================================================================

/// Lowest spread year (age 0).
pub const MIN_SPREAD_YEAR: u32 = 1;

/// Highest spread year. Older ages clamp here.
pub const MAX_SPREAD_YEAR: u32 = 90;

/// Length of one period in elapsed days.
pub const PERIOD_LENGTH_DAYS: u32 = 52;

/// Number of periods in a spread year. The last one absorbs overflow days.
pub const PERIOD_COUNT: usize = 7;

/// Solar value offset: `solar = SOLAR_BASE - (2 * month + day)`.
pub const SOLAR_BASE: i32 = 55;

/// Target date used when a caller supplies none, as (year, month, day).
pub const DEFAULT_TARGET_YMD: (i32, u32, u32) = (2026, 3, 15);

// =============================================================================
// FIXED TABLES
// =============================================================================

/// The year-zero life spread.
///
/// Rows are consecutive runs of seven (Mercury first); the last three cards
/// are the crown.
pub const BASE_ORDERING: [Card; CARD_COUNT] = [
    // Mercury
    Card::new(Seven, Hearts),
    Card::new(Six, Hearts),
    Card::new(Five, Hearts),
    Card::new(Four, Hearts),
    Card::new(Three, Hearts),
    Card::new(Two, Hearts),
    Card::new(Ace, Hearts),
    // Venus
    Card::new(Ace, Clubs),
    Card::new(King, Hearts),
    Card::new(Queen, Hearts),
    Card::new(Jack, Hearts),
    Card::new(Ten, Hearts),
    Card::new(Nine, Hearts),
    Card::new(Eight, Hearts),
    // Mars
    Card::new(Eight, Clubs),
    Card::new(Seven, Clubs),
    Card::new(Six, Clubs),
    Card::new(Five, Clubs),
    Card::new(Four, Clubs),
    Card::new(Three, Clubs),
    Card::new(Two, Clubs),
    // Jupiter
    Card::new(Two, Diamonds),
    Card::new(Ace, Diamonds),
    Card::new(King, Clubs),
    Card::new(Queen, Clubs),
    Card::new(Jack, Clubs),
    Card::new(Ten, Clubs),
    Card::new(Nine, Clubs),
    // Saturn
    Card::new(Nine, Diamonds),
    Card::new(Eight, Diamonds),
    Card::new(Seven, Diamonds),
    Card::new(Six, Diamonds),
    Card::new(Five, Diamonds),
    Card::new(Four, Diamonds),
    Card::new(Three, Diamonds),
    // Uranus
    Card::new(Three, Spades),
    Card::new(Two, Spades),
    Card::new(Ace, Spades),
    Card::new(King, Diamonds),
    Card::new(Queen, Diamonds),
    Card::new(Jack, Diamonds),
    Card::new(Ten, Diamonds),
    // Neptune
    Card::new(Ten, Spades),
    Card::new(Nine, Spades),
    Card::new(Eight, Spades),
    Card::new(Seven, Spades),
    Card::new(Six, Spades),
    Card::new(Five, Spades),
    Card::new(Four, Spades),
    // Crown
    Card::new(King, Spades),
    Card::new(Queen, Spades),
    Card::new(Jack, Spades),
];

/// The quadration shuffle.
///
/// Applying it maps `next[i] = prev[PERMUTATION[i]]`. Must be a bijection on
/// `0..52`.
pub const PERMUTATION: [usize; CARD_COUNT] = [
    37, 34, 17, 42, 24, 7, 4, //
    5, 43, 27, 10, 47, 30, 0, //
    14, 51, 21, 18, 1, 38, 8, //
    22, 6, 44, 41, 11, 48, 31, //
    32, 15, 12, 35, 19, 2, 39, //
    40, 23, 20, 45, 28, 25, 50, //
    9, 46, 16, 13, 36, 33, 3, //
    49, 29, 26,
];

/// Cards that never receive displacement or environment cards.
pub const NO_CROSS_REFERENCE: [Card; 7] = [
    Card::new(King, Spades),
    Card::new(Jack, Hearts),
    Card::new(Eight, Clubs),
    Card::new(Ace, Clubs),
    Card::new(Two, Hearts),
    Card::new(Seven, Diamonds),
    Card::new(Nine, Hearts),
];
