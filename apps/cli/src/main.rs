//! # breakfast-till
//!
//! Reads a price list and a batch of orders, prints the change owed per
//! order as JSON.
//!
//! ## Usage
//! ```bash
//! breakfast-till prices.json orders.json
//!
//! # Paths from the environment, pretty output
//! BREAKFAST_PRICE_LIST=prices.json BREAKFAST_ORDERS=orders.json \
//!     breakfast-till --pretty
//!
//! # See unknown-item warnings and catalog diagnostics
//! RUST_LOG=debug breakfast-till prices.json orders.json
//! ```
//!
//! stdout carries only the result JSON. Logs and the failure report go to
//! stderr.

mod config;
mod error;

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use breakfast_core::{OrderProcessor, TracingWarnings};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::{CliConfig, USAGE};
use crate::error::CliError;

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            let report = err.report();
            debug!(code = ?report.code, "Run failed");

            match serde_json::to_string(&report) {
                Ok(json) => eprintln!("{}", json),
                Err(_) => eprintln!("{}", report.message),
            }
            if matches!(err, CliError::Config(_)) {
                eprintln!("{}", USAGE);
            }

            ExitCode::from(report.code.exit_code())
        }
    }
}

fn run() -> Result<String, CliError> {
    let config = CliConfig::load()?;
    debug!(
        price_list = %config.price_list_path.display(),
        orders = %config.orders_path.display(),
        pretty = config.pretty,
        "Configuration loaded"
    );

    let price_list = read_payload(&config.price_list_path)?;
    let orders = read_payload(&config.orders_path)?;

    let output = OrderProcessor::new(TracingWarnings).process(&price_list, &orders)?;
    if !config.pretty {
        return Ok(output);
    }

    let value: serde_json::Value = serde_json::from_str(&output)?;
    Ok(serde_json::to_string_pretty(&value)?)
}

fn read_payload(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - Default: WARN, plus INFO from breakfast-core
///
/// Events go to stderr so stdout stays valid JSON.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,breakfast_core=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
