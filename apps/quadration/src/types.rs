//! # Request/Response Types
//!
//! JSON structures exchanged with callers: single reading requests, batch
//! records, and the diagnostic views printed by `birth-card`, `layout` and
//! `chain`.

use crate::config::AppConfig;
use quadration_core::{
    BirthCard, BirthDate, Card, Chain, Layout, Planet, Reading, ReadingInput, SpreadError,
    SpreadYear,
};
use serde::{Deserialize, Serialize};

/// Maximum accepted first-name length in bytes.
pub const MAX_NAME_LENGTH: usize = 128;

// =============================================================================
// READING REQUEST/RESPONSE
// =============================================================================

/// One subscriber's reading request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingRequest {
    pub first_name: String,
    /// `YYYY-MM-DD`
    pub birth_date: String,
    /// `YYYY-MM` or `YYYY-MM-DD`; absent uses the configured default.
    #[serde(default, alias = "target_month_year", skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl ReadingRequest {
    pub fn new(
        first_name: impl Into<String>,
        birth_date: impl Into<String>,
        target: Option<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            birth_date: birth_date.into(),
            target,
        }
    }

    /// Validate fields and resolve the target against `config`.
    pub fn to_input(&self, config: &AppConfig) -> Result<ReadingInput, SpreadError> {
        let name = self.first_name.trim();
        if name.is_empty() {
            return Err(SpreadError::InvalidInput("first_name is empty".to_string()));
        }
        if name.len() > MAX_NAME_LENGTH {
            return Err(SpreadError::InvalidInput(format!(
                "first_name length {} exceeds maximum {} bytes",
                name.len(),
                MAX_NAME_LENGTH
            )));
        }

        let birth = BirthDate::parse(self.birth_date.trim())?;
        let target = config.resolve_target(self.target.as_deref())?;
        Ok(ReadingInput::new(name, birth, target))
    }
}

/// Outcome of one reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingResponse {
    pub success: bool,
    pub subscriber: String,
    pub reading: Option<Reading>,
    pub error: Option<String>,
}

impl ReadingResponse {
    pub fn success(reading: Reading) -> Self {
        Self {
            success: true,
            subscriber: reading.subscriber.clone(),
            reading: Some(reading),
            error: None,
        }
    }

    pub fn error(subscriber: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            success: false,
            subscriber: subscriber.into(),
            reading: None,
            error: Some(msg.into()),
        }
    }
}

// =============================================================================
// BATCH
// =============================================================================

/// One entry of a batch result, numbered from 1 in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchRecord {
    pub record: usize,
    #[serde(flatten)]
    pub response: ReadingResponse,
}

/// Parse a JSON array of [`ReadingRequest`]s.
pub fn parse_json_batch(contents: &[u8]) -> Result<Vec<ReadingRequest>, SpreadError> {
    serde_json::from_slice(contents)
        .map_err(|e| SpreadError::SerializationError(format!("Batch JSON: {}", e)))
}

/// Parse subscriber CSV.
///
/// The header row names the columns; `first_name` and `birth_date` are
/// required, `target` (or `target_month_year`) is optional and unknown
/// columns are ignored. Quoted fields, surrounding whitespace and blank
/// lines are handled as any spreadsheet export writes them.
pub fn parse_csv_batch(text: &str) -> Result<Vec<ReadingRequest>, SpreadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers().map_err(csv_error)?;
    for required in ["first_name", "birth_date"] {
        if !headers.iter().any(|h| h == required) {
            return Err(SpreadError::SerializationError(format!(
                "CSV header lacks {}",
                required
            )));
        }
    }

    reader
        .deserialize()
        .map(|row| row.map_err(csv_error))
        .collect()
}

fn csv_error(e: csv::Error) -> SpreadError {
    SpreadError::SerializationError(format!("Batch CSV: {}", e))
}

// =============================================================================
// DIAGNOSTIC VIEWS
// =============================================================================

/// Birth card resolver output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthCardResponse {
    pub month: u32,
    pub day: u32,
    pub solar_value: i32,
    pub card: Option<Card>,
    pub realm: Option<String>,
    pub archetype: Option<String>,
}

impl BirthCardResponse {
    pub fn new(month: u32, day: u32, birth_card: BirthCard) -> Self {
        let card = birth_card.card();
        Self {
            month,
            day,
            solar_value: birth_card.solar_value(),
            card,
            realm: card.map(|c| c.realm().to_string()),
            archetype: card.map(|c| c.archetype().to_string()),
        }
    }
}

/// One named grid row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowJson {
    pub planet: Planet,
    pub cards: Vec<Card>,
}

/// A spread year's layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutResponse {
    pub year: u32,
    pub rows: Vec<RowJson>,
    pub crown: Vec<Card>,
}

impl From<&Layout> for LayoutResponse {
    fn from(layout: &Layout) -> Self {
        Self {
            year: layout.year(),
            rows: Planet::ALL
                .iter()
                .map(|&planet| RowJson {
                    planet,
                    cards: layout.row(planet).to_vec(),
                })
                .collect(),
            crown: layout.crown().to_vec(),
        }
    }
}

/// A chain walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainResponse {
    pub anchor: Card,
    pub spread_year: SpreadYear,
    pub cards: Vec<Card>,
}

impl ChainResponse {
    pub fn new(spread_year: SpreadYear, chain: &Chain) -> Self {
        Self {
            anchor: chain.anchor(),
            spread_year,
            cards: chain.cards().to_vec(),
        }
    }
}
