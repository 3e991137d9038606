//! # Quadration CLI Module
//!
//! ## Available Commands
//!
//! - `reading` - Compute one subscriber's reading
//! - `batch` - Compute readings for a JSON or CSV subscriber file
//! - `birth-card` - Resolve a birth card from month and day
//! - `layout` - Print a spread year's grid and crown
//! - `chain` - Print the chain walk from a card

mod commands;

use crate::config::AppConfig;
use clap::{Parser, Subcommand};
use quadration_core::SpreadError;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Quadration - deterministic card spread readings
///
/// Derives a birth card, quadrates the life spread for the subscriber's
/// spread year and reports the active period and year-long cards.
#[derive(Parser, Debug)]
#[command(name = "quadration")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Path to a TOML config file (default: ./quadration.toml if present)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute one reading
    Reading {
        /// Subscriber first name
        #[arg(short, long)]
        name: String,

        /// Birth date (YYYY-MM-DD)
        #[arg(short, long)]
        birth: String,

        /// Target month (YYYY-MM) or date (YYYY-MM-DD)
        #[arg(short, long)]
        target: Option<String>,
    },

    /// Compute readings for every record in a file
    Batch {
        /// Path to the subscriber file
        #[arg(short, long)]
        file: PathBuf,

        /// Input format (json, csv)
        #[arg(short = 't', long, default_value = "json")]
        format: String,

        /// Write the JSON results here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Resolve the birth card for a month and day
    BirthCard {
        #[arg(short, long)]
        month: u32,

        #[arg(short, long)]
        day: u32,
    },

    /// Print the layout of a spread year
    Layout {
        /// Spread year (0 is the life spread)
        #[arg(short, long, default_value = "0")]
        year: u32,
    },

    /// Print the chain walk from a card
    Chain {
        /// Anchor card, e.g. 8♦ or 8D
        #[arg(short, long)]
        card: String,

        /// Spread year; also the chain length
        #[arg(short, long)]
        year: u32,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), SpreadError> {
    let config = AppConfig::load(cli.config.as_deref())?;
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Reading {
            name,
            birth,
            target,
        }) => cmd_reading(&config, json_mode, &name, &birth, target),
        Some(Commands::Batch {
            file,
            format,
            output,
        }) => cmd_batch(&config, &file, &format, output.as_deref()),
        Some(Commands::BirthCard { month, day }) => cmd_birth_card(json_mode, month, day),
        Some(Commands::Layout { year }) => cmd_layout(json_mode, year),
        Some(Commands::Chain { card, year }) => cmd_chain(json_mode, &card, year),
        None => cmd_reading(
            &config,
            json_mode,
            SAMPLE_SUBSCRIBER,
            SAMPLE_BIRTH_DATE,
            None,
        ),
    }
}

// =============================================================================
// TESTS
// =============================================================================
