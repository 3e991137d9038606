//! # Core Type Definitions
//!
//! This module contains the value types shared by every stage of the engine:
//! - The 52-card alphabet (`Suit`, `Rank`, `Card`)
//! - The resolver's tagged result (`BirthCard`)
//! - Grid row names (`Planet`)
//! - Error types (`SpreadError`)
//!
//! ## Determinism Guarantees
//!
//! All types in this module:
//! - Are `Copy` value types with no interior mutability
//! - Implement `Ord` so collections of cards order deterministically
//! - Serialize to stable, human-readable text (`"8♦"`, `"Mercury"`)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// SUIT
// =============================================================================

/// Card suit, declared in solar order (solar values 1-13 are Hearts, 14-26
/// Clubs, 27-39 Diamonds, 40-52 Spades).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Clubs,
    Diamonds,
    Spades,
}

impl Suit {
    /// All suits in solar order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Clubs, Suit::Diamonds, Suit::Spades];

    /// The suit glyph used in card text.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Spades => '♠',
        }
    }

    /// The interpretive realm of this suit.
    #[must_use]
    pub const fn realm(self) -> &'static str {
        match self {
            Suit::Hearts => "Emotional",
            Suit::Clubs => "Behavioral",
            Suit::Diamonds => "Material",
            Suit::Spades => "Intellectual",
        }
    }

    /// Parse a suit from its glyph or ASCII initial (`H`, `C`, `D`, `S`).
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            '♥' | 'H' => Some(Suit::Hearts),
            '♣' | 'C' => Some(Suit::Clubs),
            '♦' | 'D' => Some(Suit::Diamonds),
            '♠' | 'S' => Some(Suit::Spades),
            _ => None,
        }
    }
}

// =============================================================================
// RANK
// =============================================================================

/// Card rank, declared in solar order (Ace low, King high).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks in solar order.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// The rank symbol used in card text.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    /// The interpretive archetype of this rank.
    #[must_use]
    pub const fn archetype(self) -> &'static str {
        match self {
            Rank::Ace => "Pioneer",
            Rank::Two => "Partner",
            Rank::Three => "Creator",
            Rank::Four => "Builder",
            Rank::Five => "Disruptor",
            Rank::Six => "Server",
            Rank::Seven => "Seeker",
            Rank::Eight => "Commander",
            Rank::Nine => "Completer",
            Rank::Ten => "Master",
            Rank::Jack => "Messenger",
            Rank::Queen => "Sovereign",
            Rank::King => "Authority",
        }
    }

    /// Parse a rank from its symbol. Face letters are case-insensitive.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let upper = symbol.to_ascii_uppercase();
        Rank::ALL.into_iter().find(|r| r.symbol() == upper)
    }
}

// =============================================================================
// CARD
// =============================================================================

/// One of the 52 playing cards.
///
/// Cards compare by exact value. Text form is rank symbol followed by the
/// suit glyph (`"8♦"`, `"10♠"`); serde uses the same text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Map a solar value in `1..=52` onto the alphabet.
    ///
    /// Returns `None` outside that range.
    #[must_use]
    pub fn from_solar_value(solar_value: i32) -> Option<Self> {
        if !(1..=52).contains(&solar_value) {
            return None;
        }
        let offset = (solar_value - 1) as usize;
        Some(Self::new(Rank::ALL[offset % 13], Suit::ALL[offset / 13]))
    }

    /// Inverse of [`Card::from_solar_value`].
    #[must_use]
    pub const fn solar_value(self) -> i32 {
        (self.suit as i32) * 13 + (self.rank as i32) + 1
    }

    /// Realm of this card's suit.
    #[must_use]
    pub const fn realm(self) -> &'static str {
        self.suit.realm()
    }

    /// Archetype of this card's rank.
    #[must_use]
    pub const fn archetype(self) -> &'static str {
        self.rank.archetype()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.glyph())
    }
}

impl FromStr for Card {
    type Err = SpreadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let mut chars = text.chars();
        let suit_char = chars
            .next_back()
            .ok_or_else(|| SpreadError::InvalidCard(s.to_string()))?;
        let suit =
            Suit::from_symbol(suit_char).ok_or_else(|| SpreadError::InvalidCard(s.to_string()))?;
        let rank = Rank::from_symbol(chars.as_str())
            .ok_or_else(|| SpreadError::InvalidCard(s.to_string()))?;
        Ok(Self::new(rank, suit))
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

impl TryFrom<String> for Card {
    type Error = SpreadError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// =============================================================================
// BIRTH CARD
// =============================================================================

/// Result of resolving a birth month/day.
///
/// `NoCard` is the sentinel for dates whose solar value is not positive
/// (late December). It is never equal to any real card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BirthCard {
    /// A real card, with the solar value it was drawn from.
    Assigned { card: Card, solar_value: i32 },
    /// No card is assignable; the solar value was zero or negative.
    NoCard { solar_value: i32 },
}

impl BirthCard {
    /// The assigned card, if any.
    #[must_use]
    pub const fn card(&self) -> Option<Card> {
        match self {
            BirthCard::Assigned { card, .. } => Some(*card),
            BirthCard::NoCard { .. } => None,
        }
    }

    /// The solar value, positive or not.
    #[must_use]
    pub const fn solar_value(&self) -> i32 {
        match self {
            BirthCard::Assigned { solar_value, .. } | BirthCard::NoCard { solar_value } => {
                *solar_value
            }
        }
    }

    /// Check for the sentinel.
    #[must_use]
    pub const fn is_no_card(&self) -> bool {
        matches!(self, BirthCard::NoCard { .. })
    }
}

impl fmt::Display for BirthCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BirthCard::Assigned { card, .. } => write!(f, "{}", card),
            BirthCard::NoCard { .. } => write!(f, "Joker"),
        }
    }
}

// =============================================================================
// PLANET (ROW NAMES)
// =============================================================================

/// Names of the seven grid rows, top to bottom. Period `i` of a spread year
/// is named after row `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Planet {
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Planet {
    /// All row names in row order.
    pub const ALL: [Planet; 7] = [
        Planet::Mercury,
        Planet::Venus,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
    ];

    /// Get the row name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Planet::Mercury => "Mercury",
            Planet::Venus => "Venus",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
            Planet::Uranus => "Uranus",
            Planet::Neptune => "Neptune",
        }
    }

    /// Row index of this planet (Mercury = 0).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Planet for a row index, if in range.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Planet::ALL.get(index).copied()
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the Quadration system.
///
/// - No silent failures
/// - Use `Result<T, SpreadError>` for fallible operations
/// - The engine never panics; both engine-originated kinds are terminal
#[derive(Debug, Error)]
pub enum SpreadError {
    /// The birth date's solar value is not positive; no spread is assignable.
    #[error("No card assignable for birth date {month:02}-{day:02} (solar value {solar_value})")]
    UnassignableBirthDate { month: u32, day: u32, solar_value: i32 },

    /// The anchor card is absent from a computed layout. Indicates a corrupted
    /// constant table.
    #[error("Anchor card {0} not found in layout")]
    AnchorNotFound(Card),

    /// A chain of length zero reached a stage that reads from it.
    #[error("Chain is empty")]
    EmptyChain,

    /// A period index fell outside the seven planetary periods.
    #[error("Period index {0} outside the seven periods")]
    PeriodOutOfRange(usize),

    /// A calendar date is invalid or unparseable.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Card text could not be parsed.
    #[error("Invalid card: {0:?}")]
    InvalidCard(String),

    /// A request field is missing or out of range.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A serialization or deserialization error occurred.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_display_uses_glyphs() {
        assert_eq!(Card::new(Rank::Eight, Suit::Diamonds).to_string(), "8♦");
        assert_eq!(Card::new(Rank::Ten, Suit::Spades).to_string(), "10♠");
        assert_eq!(Card::new(Rank::King, Suit::Hearts).to_string(), "K♥");
    }

    #[test]
    fn card_parse_accepts_glyphs_and_ascii() {
        let eight: Card = "8♦".parse().expect("parse");
        assert_eq!(eight, Card::new(Rank::Eight, Suit::Diamonds));

        let ten: Card = "10s".parse().expect("parse");
        assert_eq!(ten, Card::new(Rank::Ten, Suit::Spades));

        let queen: Card = " qh ".parse().expect("parse");
        assert_eq!(queen, Card::new(Rank::Queen, Suit::Hearts));
    }

    #[test]
    fn card_parse_rejects_garbage() {
        assert!(matches!("".parse::<Card>(), Err(SpreadError::InvalidCard(_))));
        assert!(matches!("11♦".parse::<Card>(), Err(SpreadError::InvalidCard(_))));
        assert!(matches!("8X".parse::<Card>(), Err(SpreadError::InvalidCard(_))));
        assert!(matches!("♦".parse::<Card>(), Err(SpreadError::InvalidCard(_))));
    }

    #[test]
    fn solar_value_bounds() {
        assert_eq!(
            Card::from_solar_value(1),
            Some(Card::new(Rank::Ace, Suit::Hearts))
        );
        assert_eq!(
            Card::from_solar_value(52),
            Some(Card::new(Rank::King, Suit::Spades))
        );
        assert_eq!(Card::from_solar_value(0), None);
        assert_eq!(Card::from_solar_value(53), None);
    }

    #[test]
    fn solar_value_inverse() {
        for sv in 1..=52 {
            let card = Card::from_solar_value(sv).expect("in range");
            assert_eq!(card.solar_value(), sv);
        }
    }

    #[test]
    fn card_serde_is_text() {
        let card = Card::new(Rank::Jack, Suit::Clubs);
        let json = serde_json::to_string(&card).expect("serialize");
        assert_eq!(json, "\"J♣\"");
        let back: Card = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, card);
    }

    #[test]
    fn interpretation_attributes() {
        let card = Card::new(Rank::Seven, Suit::Diamonds);
        assert_eq!(card.realm(), "Material");
        assert_eq!(card.archetype(), "Seeker");
    }

    #[test]
    fn no_card_displays_as_joker() {
        let sentinel = BirthCard::NoCard { solar_value: -1 };
        assert!(sentinel.is_no_card());
        assert_eq!(sentinel.card(), None);
        assert_eq!(sentinel.to_string(), "Joker");
    }

    #[test]
    fn planet_indices_follow_row_order() {
        for (i, planet) in Planet::ALL.iter().enumerate() {
            assert_eq!(planet.index(), i);
            assert_eq!(Planet::from_index(i), Some(*planet));
        }
        assert_eq!(Planet::from_index(7), None);
    }
}
