//! # Layout Mapper
//!
//! Reslices a flat spread into seven named rows of seven columns plus a
//! three-card crown.
//!
//! ## Column Convention
//!
//! Row `r` holds flat positions `[7r, 7r + 7)` with column index equal to the
//! offset inside that slice (no reversal). Crown slot `i` holds flat position
//! `49 + i`. The same convention governs the chain walk's "move left" rule
//! (decreasing column index) and both layouts of a cross-reference.

use crate::primitives::{CROWN_ENTRY_INDEX, CROWN_LEN, CROWN_START, GRID_COLS, GRID_ROWS};
use crate::spread::Spread;
use crate::{Card, Planet};
use serde::{Deserialize, Serialize};

// =============================================================================
// POSITION
// =============================================================================

/// A location inside a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Position {
    /// A grid cell. `row < 7`, `col < 7`.
    Grid { row: usize, col: usize },
    /// A crown slot. `index < 3`.
    Crown { index: usize },
}

impl Position {
    /// The walk's successor: one step left, wrapping through rows and crown.
    ///
    /// - `crown(i>0)` → `crown(i-1)`; `crown(0)` → `grid(0, 6)`
    /// - `grid(r, c>0)` → `grid(r, c-1)`
    /// - `grid(r<6, 0)` → `grid(r+1, 6)`; `grid(6, 0)` → `crown(2)`
    #[must_use]
    pub const fn next_left(self) -> Self {
        match self {
            Position::Crown { index } if index > 0 => Position::Crown { index: index - 1 },
            Position::Crown { .. } => Position::Grid {
                row: 0,
                col: GRID_COLS - 1,
            },
            Position::Grid { row, col } if col > 0 => Position::Grid { row, col: col - 1 },
            Position::Grid { row, .. } if row + 1 < GRID_ROWS => Position::Grid {
                row: row + 1,
                col: GRID_COLS - 1,
            },
            Position::Grid { .. } => Position::Crown {
                index: CROWN_ENTRY_INDEX,
            },
        }
    }

    /// Flat spread index of this position.
    #[must_use]
    pub const fn flat_index(self) -> usize {
        match self {
            Position::Grid { row, col } => row * GRID_COLS + col,
            Position::Crown { index } => CROWN_START + index,
        }
    }

    /// Position of a flat spread index, if in range.
    #[must_use]
    pub const fn from_flat_index(flat: usize) -> Option<Self> {
        if flat < CROWN_START {
            Some(Position::Grid {
                row: flat / GRID_COLS,
                col: flat % GRID_COLS,
            })
        } else if flat < CROWN_START + CROWN_LEN {
            Some(Position::Crown {
                index: flat - CROWN_START,
            })
        } else {
            None
        }
    }

    /// Row name for grid positions.
    #[must_use]
    pub fn planet(self) -> Option<Planet> {
        match self {
            Position::Grid { row, .. } => Planet::from_index(row),
            Position::Crown { .. } => None,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Position::Grid { row, col } => match self.planet() {
                Some(planet) => write!(f, "{} col {}", planet, col),
                None => write!(f, "row {} col {}", row, col),
            },
            Position::Crown { index } => write!(f, "crown {}", index),
        }
    }
}

// =============================================================================
// LAYOUT
// =============================================================================

/// A spread viewed as a 7×7 grid plus crown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layout {
    year: u32,
    rows: [[Card; GRID_COLS]; GRID_ROWS],
    crown: [Card; CROWN_LEN],
}

impl Layout {
    /// Slice a spread into rows and crown.
    #[must_use]
    pub fn from_spread(spread: &Spread) -> Self {
        let flat = spread.cards();
        let rows = std::array::from_fn(|r| std::array::from_fn(|c| flat[r * GRID_COLS + c]));
        let crown = std::array::from_fn(|i| flat[CROWN_START + i]);
        Self {
            year: spread.year(),
            rows,
            crown,
        }
    }

    /// Layout for spread year `n`.
    #[must_use]
    pub fn for_year(n: u32) -> Self {
        Self::from_spread(&Spread::generate(n))
    }

    /// The spread year this layout was cut from.
    #[must_use]
    pub const fn year(&self) -> u32 {
        self.year
    }

    /// Cards of a named row, columns 0..7.
    #[must_use]
    pub const fn row(&self, planet: Planet) -> &[Card; GRID_COLS] {
        &self.rows[planet.index()]
    }

    /// All rows, top to bottom.
    #[must_use]
    pub const fn rows(&self) -> &[[Card; GRID_COLS]; GRID_ROWS] {
        &self.rows
    }

    /// The three crown cards.
    #[must_use]
    pub const fn crown(&self) -> &[Card; CROWN_LEN] {
        &self.crown
    }

    /// Card at a position. Positions built by this module are always in range.
    #[must_use]
    pub fn card_at(&self, position: Position) -> Option<Card> {
        match position {
            Position::Grid { row, col } => self.rows.get(row).and_then(|r| r.get(col)).copied(),
            Position::Crown { index } => self.crown.get(index).copied(),
        }
    }

    /// Locate a card, scanning rows top to bottom, then the crown.
    #[must_use]
    pub fn position_of(&self, card: Card) -> Option<Position> {
        for (row, cards) in self.rows.iter().enumerate() {
            if let Some(col) = cards.iter().position(|&c| c == card) {
                return Some(Position::Grid { row, col });
            }
        }
        self.crown
            .iter()
            .position(|&c| c == card)
            .map(|index| Position::Crown { index })
    }

    /// Flatten back into spread order.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.rows
            .iter()
            .flat_map(|row| row.iter().copied())
            .chain(self.crown.iter().copied())
    }
}

// =============================================================================
// TESTS
// =============================================================================
