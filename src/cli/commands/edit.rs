//! Edit command - Change the fields of a reservation that has not arrived

use std::path::Path;

use tracing::info;

use crate::board::Notice;
use crate::domain::{is_editable, ReservationEdit};
use crate::errors::{Result, StayboardError};
use crate::schemas::Reservation;

use super::BoardSession;

/// Apply an edit and persist the board
pub async fn run(cwd: Option<&Path>, id: &str, edit: ReservationEdit, dry_run: bool) -> Result<()> {
    let mut session = BoardSession::open(cwd)?;
    let updated = execute(&mut session, id, &edit)?;
    session.save(dry_run)?;

    info!(id = %updated.id, status = %updated.status, "reservation updated");
    println!("{}: {}", Notice::updated(), updated.id);
    Ok(())
}

/// Replace the reservation with its edited version.
///
/// Only `Reserved` and `Due In` reservations can be edited. A status given
/// in the edit is written as is.
pub fn execute(session: &mut BoardSession, id: &str, edit: &ReservationEdit) -> Result<Reservation> {
    let existing = session.get(id)?;
    if !is_editable(existing.status) {
        return Err(StayboardError::InvalidReservation(format!(
            "{} is {} and can no longer be edited",
            id, existing.status
        )));
    }
    if edit.is_empty() {
        return Ok(existing.clone());
    }

    let updated = edit.apply_to(existing);
    if !session.store.update(updated.clone())? {
        return Err(StayboardError::NotFound(id.to_string()));
    }
    Ok(updated)
}
