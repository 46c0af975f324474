//! Show command - Show details of a specific reservation

use std::path::Path;

use crate::domain::{get_allowed_next_statuses, is_editable};
use crate::errors::Result;
use crate::schemas::Reservation;

use super::{format_date, to_json, BoardSession};

/// Show one reservation and where it can move next
pub async fn run(cwd: Option<&Path>, id: &str, json: bool) -> Result<()> {
    let session = BoardSession::open(cwd)?;
    let reservation = session.get(id)?;

    if json {
        println!("{}", to_json(reservation)?);
    } else {
        println!("{}", render(reservation, &session.config.date_format));
    }
    Ok(())
}

pub fn render(reservation: &Reservation, date_format: &str) -> String {
    let mut lines = vec![
        format!("ID:        {}", reservation.id),
        format!("Guest:     {}", reservation.guest_name),
        format!("Status:    {}", reservation.status),
        format!(
            "Stay:      {} - {} ({} nights)",
            format_date(reservation.check_in_date, date_format),
            format_date(reservation.check_out_date, date_format),
            reservation.nights()
        ),
    ];
    if let Some(room) = &reservation.room_number {
        lines.push(format!("Room:      {}", room));
    }
    if let Some(email) = &reservation.email {
        lines.push(format!("Email:     {}", email));
    }
    if let Some(notes) = &reservation.notes {
        lines.push(format!("Notes:     {}", notes));
    }

    let next = get_allowed_next_statuses(reservation.status);
    let next = if next.is_empty() {
        "none".to_string()
    } else {
        next.iter().map(|s| s.label()).collect::<Vec<_>>().join(", ")
    };
    lines.push(format!("Moves to:  {}", next));
    lines.push(format!(
        "Editable:  {}",
        if is_editable(reservation.status) { "yes" } else { "no" }
    ));
    lines.join("\n")
}
