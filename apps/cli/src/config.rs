//! CLI configuration module.
//!
//! Configuration is loaded from environment variables, then overridden by
//! command-line arguments.
//!
//! ## Sources (Priority Order)
//! 1. Arguments: `breakfast-till [--pretty] [--prices PATH] [--orders PATH] [PRICES] [ORDERS]`
//! 2. Environment variables (`BREAKFAST_*`)
//! 3. Defaults (this file)

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

pub const PRICE_LIST_VAR: &str = "BREAKFAST_PRICE_LIST";
pub const ORDERS_VAR: &str = "BREAKFAST_ORDERS";
pub const PRETTY_VAR: &str = "BREAKFAST_PRETTY";

pub const USAGE: &str =
    "Usage: breakfast-till [--pretty] [--prices PATH] [--orders PATH] [PRICES] [ORDERS]";

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Price list JSON file
    pub price_list_path: PathBuf,

    /// Orders JSON file
    pub orders_path: PathBuf,

    /// Pretty-print the result JSON
    pub pretty: bool,
}

impl CliConfig {
    /// Load configuration from the process environment and arguments.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_sources(env::args().skip(1), |key| env::var(key).ok())
    }

    /// Load configuration from explicit sources.
    ///
    /// `args` excludes the program name; `var` looks up an env variable.
    pub fn from_sources<I, F>(args: I, var: F) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut price_list_path = var(PRICE_LIST_VAR).map(PathBuf::from);
        let mut orders_path = var(ORDERS_VAR).map(PathBuf::from);
        let mut pretty = match var(PRETTY_VAR) {
            Some(value) => value
                .parse::<bool>()
                .map_err(|_| ConfigError::InvalidValue(PRETTY_VAR.to_string()))?,
            None => false,
        };

        let mut positional = Vec::new();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--pretty" => pretty = true,
                "--prices" | "-p" => {
                    let path = args
                        .next()
                        .ok_or_else(|| ConfigError::MissingArgument(arg.clone()))?;
                    price_list_path = Some(PathBuf::from(path));
                }
                "--orders" | "-o" => {
                    let path = args
                        .next()
                        .ok_or_else(|| ConfigError::MissingArgument(arg.clone()))?;
                    orders_path = Some(PathBuf::from(path));
                }
                flag if flag.starts_with('-') => {
                    return Err(ConfigError::UnexpectedArgument(arg));
                }
                _ => positional.push(arg),
            }
        }

        let mut positional = positional.into_iter();
        if let Some(path) = positional.next() {
            price_list_path = Some(PathBuf::from(path));
        }
        if let Some(path) = positional.next() {
            orders_path = Some(PathBuf::from(path));
        }
        if let Some(extra) = positional.next() {
            return Err(ConfigError::UnexpectedArgument(extra));
        }

        Ok(CliConfig {
            price_list_path: price_list_path
                .ok_or_else(|| ConfigError::MissingRequired(PRICE_LIST_VAR.to_string()))?,
            orders_path: orders_path
                .ok_or_else(|| ConfigError::MissingRequired(ORDERS_VAR.to_string()))?,
            pretty,
        })
    }
}

/// Configuration error types.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0} (or pass the path as an argument)")]
    MissingRequired(String),

    #[error("Missing value after {0}")]
    MissingArgument(String),

    #[error("Unexpected argument: {0}")]
    UnexpectedArgument(String),
}
