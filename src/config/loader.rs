//! Configuration loading with defaults

use std::fmt::Write;
use std::path::Path;

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;

use crate::errors::{Result, StayboardError};
use crate::fs;
use crate::schemas::Config;

/// Load configuration for a board, falling back to defaults.
///
/// If config.json exists, it will be read and merged with defaults.
/// If it doesn't exist, default configuration is returned.
///
/// # Errors
/// * `ConfigError` - If the id format, data file name or date format is unusable
pub fn load_config(root: &Path) -> Result<Config> {
    let config = fs::read_config(root)?;
    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &Config) -> Result<()> {
    if config.id_width == 0 {
        return Err(StayboardError::ConfigError(
            "id_width must be at least 1".to_string(),
        ));
    }
    if config.data_file.trim().is_empty() {
        return Err(StayboardError::ConfigError(
            "data_file must not be empty".to_string(),
        ));
    }
    validate_date_format(&config.date_format)
}

/// A date format must parse and must only ask for fields a date has.
fn validate_date_format(format: &str) -> Result<()> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(StayboardError::ConfigError(format!(
            "date_format {:?} is not a valid format string",
            format
        )));
    }

    let mut rendered = String::new();
    if write!(rendered, "{}", NaiveDate::default().format(format)).is_err() {
        return Err(StayboardError::ConfigError(format!(
            "date_format {:?} needs fields a date does not have",
            format
        )));
    }
    Ok(())
}
