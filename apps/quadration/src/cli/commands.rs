//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use crate::config::AppConfig;
use crate::types::{
    BatchRecord, BirthCardResponse, ChainResponse, LayoutResponse, ReadingRequest,
    ReadingResponse, parse_csv_batch, parse_json_batch,
};
use quadration_core::primitives::MAX_SPREAD_YEAR;
use quadration_core::{
    BirthCardResolver, Card, Layout, Planet, Reading, SpreadEngine, SpreadError, SpreadYear,
};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Subscriber used when no subcommand is given.
pub const SAMPLE_SUBSCRIBER: &str = "Cassidy";

/// Birth date used when no subcommand is given.
pub const SAMPLE_BIRTH_DATE: &str = "1991-02-17";

// =============================================================================
// FILE VALIDATION
// =============================================================================

/// Validate file size before reading.
fn validate_file_size(path: &Path, max_size: u64) -> Result<(), SpreadError> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| SpreadError::IoError(format!("Cannot read file metadata: {}", e)))?;

    if metadata.len() > max_size {
        return Err(SpreadError::InvalidInput(format!(
            "File size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            max_size
        )));
    }
    Ok(())
}

/// Canonicalize an input path and require a regular file.
fn validate_file_path(path: &Path) -> Result<PathBuf, SpreadError> {
    let canonical = path.canonicalize().map_err(|e| {
        SpreadError::IoError(format!("Invalid file path '{}': {}", path.display(), e))
    })?;

    if !canonical.is_file() {
        return Err(SpreadError::IoError(format!(
            "Path '{}' is not a regular file",
            path.display()
        )));
    }

    Ok(canonical)
}

/// Require an output path whose parent directory exists.
fn validate_output_path(path: &Path) -> Result<PathBuf, SpreadError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let canonical_parent = parent.canonicalize().map_err(|e| {
        SpreadError::IoError(format!(
            "Invalid output directory '{}': {}",
            parent.display(),
            e
        ))
    })?;

    if !canonical_parent.is_dir() {
        return Err(SpreadError::IoError(format!(
            "Output parent '{}' is not a directory",
            parent.display()
        )));
    }

    let file_name = path.file_name().ok_or_else(|| {
        SpreadError::IoError(format!("Output path '{}' has no file name", path.display()))
    })?;

    Ok(canonical_parent.join(file_name))
}

fn to_json(value: &impl serde::Serialize) -> Result<String, SpreadError> {
    serde_json::to_string_pretty(value).map_err(|e| SpreadError::SerializationError(e.to_string()))
}

// =============================================================================
// READING
// =============================================================================

/// Compute the reading for one request.
pub fn compute_reading(
    config: &AppConfig,
    request: &ReadingRequest,
) -> Result<Reading, SpreadError> {
    let input = request.to_input(config)?;
    SpreadEngine::compute(&input)
}

/// Render a reading as a plain-text report.
pub fn render_reading(reading: &Reading) -> String {
    let card = reading.birth_card;
    let mut out = String::new();

    let _ = writeln!(out, "Reading for {}", reading.subscriber);
    let _ = writeln!(out, "{}", "=".repeat(12 + reading.subscriber.chars().count()));
    let _ = writeln!(
        out,
        "Birth Card:   {} ({}, {}) solar value {}",
        card,
        card.archetype(),
        card.realm(),
        reading.solar_value
    );
    let _ = writeln!(out, "Target Date:  {}", reading.target_date);
    let _ = writeln!(out, "Age:          {}", reading.age);
    let _ = writeln!(out, "Spread Year:  {}", reading.spread_year);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Period:       {} ({}) day {} since {}",
        reading.period.card,
        reading.period.planet,
        reading.period.days_since,
        reading.last_anniversary
    );

    let yl = &reading.year_long;
    let _ = writeln!(out, "Long Range:   {}", yl.long_range);
    for (label, value) in [
        ("Pluto", yl.pluto),
        ("Result", yl.result),
        ("Displacement", yl.displacement),
        ("Environment", yl.environment),
    ] {
        let shown = value.map_or_else(|| "-".to_string(), |c| c.to_string());
        let _ = writeln!(out, "{:<13} {}", format!("{}:", label), shown);
    }
    out
}

/// Compute and print one reading.
pub fn cmd_reading(
    config: &AppConfig,
    json_mode: bool,
    name: &str,
    birth: &str,
    target: Option<String>,
) -> Result<(), SpreadError> {
    let request = ReadingRequest::new(name, birth, target);
    tracing::info!("Computing reading for {}", request.first_name);

    let reading = compute_reading(config, &request)?;

    if json_mode {
        println!("{}", to_json(&reading)?);
        return Ok(());
    }

    print!("{}", render_reading(&reading));
    Ok(())
}

// =============================================================================
// BATCH
// =============================================================================

/// Read and parse a batch file.
pub fn load_batch(
    config: &AppConfig,
    file: &Path,
    format: &str,
) -> Result<Vec<ReadingRequest>, SpreadError> {
    let validated_path = validate_file_path(file)?;
    validate_file_size(&validated_path, config.batch.max_file_bytes)?;

    let contents = std::fs::read(&validated_path)
        .map_err(|e| SpreadError::IoError(format!("Read file: {}", e)))?;

    let requests = match format {
        "json" => parse_json_batch(&contents)?,
        "csv" => {
            let text = String::from_utf8(contents).map_err(|e| {
                SpreadError::SerializationError(format!("Batch CSV is not UTF-8: {}", e))
            })?;
            parse_csv_batch(&text)?
        }
        _ => {
            return Err(SpreadError::InvalidInput(format!(
                "Unknown format: {}",
                format
            )));
        }
    };

    if requests.len() > config.batch.max_records {
        return Err(SpreadError::InvalidInput(format!(
            "Record count {} exceeds maximum {}",
            requests.len(),
            config.batch.max_records
        )));
    }

    Ok(requests)
}

/// Compute every request; failures are recorded inline.
pub fn run_batch(config: &AppConfig, requests: &[ReadingRequest]) -> Vec<BatchRecord> {
    requests
        .iter()
        .enumerate()
        .map(|(i, request)| {
            let response = match compute_reading(config, request) {
                Ok(reading) => ReadingResponse::success(reading),
                Err(e) => {
                    tracing::warn!("Record {} ({}) failed: {}", i + 1, request.first_name, e);
                    ReadingResponse::error(request.first_name.trim(), e.to_string())
                }
            };
            BatchRecord {
                record: i + 1,
                response,
            }
        })
        .collect()
}

/// Compute readings for a subscriber file and emit a JSON array.
pub fn cmd_batch(
    config: &AppConfig,
    file: &Path,
    format: &str,
    output: Option<&Path>,
) -> Result<(), SpreadError> {
    tracing::info!("Batch from {:?} (format: {})", file, format);

    let requests = load_batch(config, file, format)?;
    let records = run_batch(config, &requests);
    let failed = records.iter().filter(|r| !r.response.success).count();
    let json = to_json(&records)?;

    match output {
        Some(path) => {
            let validated = validate_output_path(path)?;
            std::fs::write(&validated, json)
                .map_err(|e| SpreadError::IoError(format!("Write output: {}", e)))?;
            tracing::info!(
                "Wrote {} readings ({} failed) to {:?}",
                records.len(),
                failed,
                validated
            );
        }
        None => println!("{}", json),
    }

    Ok(())
}

// =============================================================================
// DIAGNOSTICS
// =============================================================================

/// Print the birth card for a month and day.
pub fn cmd_birth_card(json_mode: bool, month: u32, day: u32) -> Result<(), SpreadError> {
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(SpreadError::InvalidDate(format!("{:02}-{:02}", month, day)));
    }

    let response = BirthCardResponse::new(month, day, BirthCardResolver::resolve(month, day));

    if json_mode {
        println!("{}", to_json(&response)?);
        return Ok(());
    }

    println!("Month/Day:   {:02}-{:02}", month, day);
    println!("Solar Value: {}", response.solar_value);
    match response.card {
        Some(card) => println!(
            "Birth Card:  {} ({}, {})",
            card,
            card.archetype(),
            card.realm()
        ),
        None => println!("Birth Card:  none (Joker)"),
    }
    Ok(())
}

/// Render a layout as named rows and the crown.
pub fn render_layout(layout: &Layout) -> String {
    let cell = |c: &Card| format!("{:>4}", c.to_string());
    let mut out = String::new();

    let _ = writeln!(out, "Spread Year {}", layout.year());
    let crown: String = layout.crown().iter().map(cell).collect();
    let _ = writeln!(out, "{:<8}{}", "Crown", crown);
    for planet in Planet::ALL {
        let row: String = layout.row(planet).iter().map(cell).collect();
        let _ = writeln!(out, "{:<8}{}", planet.name(), row);
    }
    out
}

/// Print the grid and crown for a spread year.
pub fn cmd_layout(json_mode: bool, year: u32) -> Result<(), SpreadError> {
    if year > MAX_SPREAD_YEAR {
        return Err(SpreadError::InvalidInput(format!(
            "Spread year {} exceeds maximum {}",
            year, MAX_SPREAD_YEAR
        )));
    }

    let layout = Layout::for_year(year);

    if json_mode {
        println!("{}", to_json(&LayoutResponse::from(&layout))?);
        return Ok(());
    }

    print!("{}", render_layout(&layout));
    Ok(())
}

/// Print the chain walk from a card.
pub fn cmd_chain(json_mode: bool, card: &str, year: u32) -> Result<(), SpreadError> {
    if !(SpreadYear::MIN.get()..=SpreadYear::MAX.get()).contains(&year) {
        return Err(SpreadError::InvalidInput(format!(
            "Spread year {} outside {}..={}",
            year,
            SpreadYear::MIN,
            SpreadYear::MAX
        )));
    }

    let anchor: Card = card.parse()?;
    let spread_year = SpreadYear::clamped(year);
    let chain = SpreadEngine::chain_for(anchor, spread_year)?;

    if json_mode {
        println!("{}", to_json(&ChainResponse::new(spread_year, &chain))?);
        return Ok(());
    }

    println!("Chain from {} in spread year {}", anchor, spread_year);
    for (i, c) in chain.cards().iter().enumerate() {
        let planet = Planet::from_index(i).map_or("", |p| p.name());
        println!("{:>3}  {:<4} {}", i + 1, c.to_string(), planet);
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
