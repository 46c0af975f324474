//! Initial bulk load of the reservation collection
//!
//! The only asynchronous step in the system: a one-shot task that reads the
//! data file and hands the whole collection over to the store. A failed
//! load is logged and leaves the store as it was.

use std::path::PathBuf;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::errors::{Result, StayboardError};
use crate::schemas::Reservation;
use crate::store::ReservationStore;

use super::json::read_reservations;

/// Start loading `path` on a background task, after `delay`.
pub fn spawn_initial_load(path: PathBuf, delay: Duration) -> JoinHandle<Result<Vec<Reservation>>> {
    tokio::spawn(async move {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        tokio::task::spawn_blocking(move || read_reservations(&path))
            .await
            .map_err(|e| StayboardError::wrap(e, "initial load task failed"))?
    })
}

/// Hand a finished load over to the store.
///
/// Returns true when the collection was replaced.
pub fn apply_initial_load(store: &mut ReservationStore, result: Result<Vec<Reservation>>) -> bool {
    match result {
        Ok(reservations) => {
            info!(count = reservations.len(), "reservations loaded");
            store.replace_all(reservations);
            true
        }
        Err(e) => {
            error!(code = e.code(), error = %e, "failed to load reservations, keeping current state");
            false
        }
    }
}
