//! # Quadration
//!
//! The command-line driver for the deterministic Spread Engine.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────┐
//! │              apps/quadration (THE BINARY)         │
//! │                                                   │
//! │  ┌─────────────┐  ┌─────────────┐  ┌───────────┐  │
//! │  │   CLI       │  │   Config    │  │  Batch    │  │
//! │  │  (clap)     │  │ (toml, env) │  │ json/csv  │  │
//! │  └──────┬──────┘  └──────┬──────┘  └─────┬─────┘  │
//! │         └────────────────┼───────────────┘        │
//! │                          ▼                        │
//! │                ┌──────────────────┐               │
//! │                │ quadration-core  │               │
//! │                │   (THE ENGINE)   │               │
//! │                └──────────────────┘               │
//! └───────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! quadration reading --name Cassidy --birth 1991-02-17 --target 2026-02
//! quadration batch -f subscribers.csv -t csv -o readings.json
//! quadration layout --year 36
//! quadration chain --card 8D --year 36
//! ```

use clap::Parser;
use quadration::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    let cli = cli::Cli::parse();

    // QUADRATION_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("QUADRATION_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let default_filter = if cli.verbose {
        "quadration=debug,quadration_core=debug"
    } else {
        "quadration=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    // Logs go to stderr; stdout carries command output.
    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the Quadration startup banner.
fn print_banner() {
    println!(
        r#"
  ♥ ♣ ♦ ♠  QUADRATION v{}

  Birth Card • Spread Year • Period
"#,
        env!("CARGO_PKG_VERSION")
    );
}
