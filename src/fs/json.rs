//! JSON file operations
//!
//! Typed JSON reads, atomic JSON writes, and the reservation data file.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::{Result, StayboardError};
use crate::schemas::{Config, Reservation, ReservationRecord};

use super::paths::get_config_path;

/// Parse a JSON file into `T`.
///
/// # Errors
/// * `FileNotFound` - If there is nothing at `path`
/// * `InvalidJson` - If the content is not JSON of the expected shape
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(StayboardError::FileNotFound(path.display().to_string()));
        }
        Err(e) => return Err(StayboardError::Io(e)),
    };

    serde_json::from_str(&content)
        .map_err(|e| StayboardError::InvalidJson(format!("{}: {}", path.display(), e)))
}

/// Pretty-print `data` to `path`, replacing the file atomically.
///
/// The JSON goes to a hidden sibling file that is synced and then renamed
/// over the target, so readers never see a half-written file.
pub fn write_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    let mut content = serde_json::to_string_pretty(data)
        .map_err(|e| StayboardError::InvalidJson(e.to_string()))?;
    content.push('\n');

    let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
    if let Some(parent) = parent {
        fs::create_dir_all(parent)?;
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "data.json".to_string());
    let staging = path.with_file_name(format!(".{}.tmp", file_name));

    {
        let mut file = fs::File::create(&staging)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }
    fs::rename(&staging, path)?;

    Ok(())
}

/// Read the config.json file for a board, or defaults if it doesn't exist.
pub fn read_config(root: &Path) -> Result<Config> {
    let path = get_config_path(root);
    if !path.exists() {
        return Ok(Config::default());
    }
    read_json(&path)
}

/// Read a reservation data file: a JSON array of raw records.
///
/// Every record is mapped into a [`Reservation`]; one bad record fails
/// the whole read.
pub fn read_reservations(path: &Path) -> Result<Vec<Reservation>> {
    let records: Vec<ReservationRecord> = read_json(path)?;
    records.into_iter().map(Reservation::try_from).collect()
}

/// Write reservations back in the raw record shape.
pub fn write_reservations(path: &Path, reservations: &[Reservation]) -> Result<()> {
    let records: Vec<ReservationRecord> = reservations.iter().map(ReservationRecord::from).collect();
    write_json(path, &records)
}
