//! CLI command implementations

pub mod add;
pub mod board;
pub mod delete;
pub mod edit;
pub mod init;
pub mod list;
pub mod move_to;
pub mod show;
pub mod tui;

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::config::load_config;
use crate::errors::{Result, StayboardError};
use crate::fs::{find_board_root, get_data_path, read_reservations, resolve_cwd, write_reservations};
use crate::schemas::{Config, Reservation};
use crate::store::ReservationStore;

/// An opened board: its config, data file and the loaded store
#[derive(Debug)]
pub struct BoardSession {
    pub root: PathBuf,
    pub config: Config,
    pub data_path: PathBuf,
    pub store: ReservationStore,
}

impl BoardSession {
    /// Locate the board from `cwd` and load its reservations.
    ///
    /// A missing data file is an empty board.
    pub fn open(cwd: Option<&Path>) -> Result<Self> {
        let mut session = Self::locate(cwd)?;
        if session.data_path.exists() {
            let reservations = read_reservations(&session.data_path)?;
            session.store.replace_all(reservations);
        }
        debug!(
            root = %session.root.display(),
            count = session.store.len(),
            "board opened"
        );
        Ok(session)
    }

    /// Locate the board without reading the data file
    pub fn locate(cwd: Option<&Path>) -> Result<Self> {
        let root = find_board_root(&resolve_cwd(cwd))?;
        let config = load_config(&root)?;
        let data_path = get_data_path(&root, &config);
        let store = ReservationStore::from_config(&config);
        Ok(BoardSession {
            root,
            config,
            data_path,
            store,
        })
    }

    pub fn get(&self, id: &str) -> Result<&Reservation> {
        self.store
            .get(id)
            .ok_or_else(|| StayboardError::NotFound(id.to_string()))
    }

    /// Write the store back to the data file, unless this is a dry run.
    pub fn save(&self, dry_run: bool) -> Result<()> {
        if dry_run {
            info!(path = %self.data_path.display(), "dry run, data file not written");
            return Ok(());
        }
        write_reservations(&self.data_path, &self.store.list())?;
        debug!(path = %self.data_path.display(), count = self.store.len(), "data file written");
        Ok(())
    }
}

/// One-line summary of a reservation for text output
pub(crate) fn summary_line(reservation: &Reservation, date_format: &str) -> String {
    let mut line = format!(
        "{}  {}  {} - {}",
        reservation.id,
        reservation.guest_name,
        format_date(reservation.check_in_date, date_format),
        format_date(reservation.check_out_date, date_format),
    );
    if let Some(room) = &reservation.room_number {
        line.push_str(&format!("  room {}", room));
    }
    line
}

pub(crate) fn format_date(date: NaiveDate, date_format: &str) -> String {
    date.format(date_format).to_string()
}

pub(crate) fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| StayboardError::InvalidJson(e.to_string()))
}

/// Today's date in local time
pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
