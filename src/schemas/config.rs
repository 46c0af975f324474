//! Config schema - Configuration for stayboard

use serde::{Deserialize, Serialize};

/// Main configuration for a board directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Schema version for forward compatibility
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Reservation data file, relative to the .stayboard directory
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Prefix of generated reservation ids (e.g., "res-")
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,

    /// Zero-padded width of the numeric id suffix
    #[serde(default = "default_id_width")]
    pub id_width: usize,

    /// Delay before the initial load completes, in milliseconds
    #[serde(default)]
    pub load_delay_ms: u64,

    /// chrono format string used when rendering dates on cards
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_data_file() -> String {
    "reservations.json".to_string()
}

fn default_id_prefix() -> String {
    "res-".to_string()
}

fn default_id_width() -> usize {
    3
}

fn default_date_format() -> String {
    "%d.%m.%Y".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            schema_version: default_schema_version(),
            data_file: default_data_file(),
            id_prefix: default_id_prefix(),
            id_width: default_id_width(),
            load_delay_ms: 0,
            date_format: default_date_format(),
        }
    }
}
