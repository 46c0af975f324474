//! List command - List reservations with optional filtering

use std::path::Path;

use crate::errors::Result;
use crate::schemas::{Reservation, ReservationStatus};

use super::{summary_line, to_json, BoardSession};

/// List reservations, optionally only those in one status
pub async fn run(cwd: Option<&Path>, json: bool, status: Option<ReservationStatus>) -> Result<()> {
    let session = BoardSession::open(cwd)?;
    let snapshot = session.store.list();
    let selected = filter(&snapshot, status);

    if json {
        println!("{}", to_json(&selected)?);
        return Ok(());
    }

    if selected.is_empty() {
        println!("No reservations");
        return Ok(());
    }
    for reservation in selected {
        println!(
            "{:<12} {}",
            reservation.status,
            summary_line(reservation, &session.config.date_format)
        );
    }
    Ok(())
}

/// Reservations in collection order, restricted to `status` when given
pub fn filter(reservations: &[Reservation], status: Option<ReservationStatus>) -> Vec<&Reservation> {
    reservations
        .iter()
        .filter(|r| status.is_none() || status == Some(r.status))
        .collect()
}
