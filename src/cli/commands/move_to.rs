//! Move command - A drag gesture from the command line

use std::path::Path;

use crate::board::{perform_drag, DragOutcome};
use crate::errors::{Result, StayboardError};
use crate::schemas::ReservationStatus;

use super::BoardSession;

/// Drop reservation `id` onto `target` and persist the result
pub async fn run(cwd: Option<&Path>, id: &str, target: &str, dry_run: bool) -> Result<()> {
    let mut session = BoardSession::open(cwd)?;
    let outcome = execute(&mut session, id, target)?;
    if outcome.is_moved() {
        session.save(dry_run)?;
    }

    match outcome {
        DragOutcome::Moved { reservation_id, from, to } => {
            println!("Moved {} from {} to {}", reservation_id, from, to);
        }
        DragOutcome::Unchanged { reservation_id } => {
            println!("{} is already in that column", reservation_id);
        }
        _ => {}
    }
    Ok(())
}

/// Run the gesture against the session store.
///
/// A target spelled like a status ("due-in", "Due In") is taken as that
/// column; anything else is passed through as a card id. Errors cover the
/// outcomes a command line must report: an unknown card, an unresolvable
/// target, and a rejected move.
pub fn execute(session: &mut BoardSession, id: &str, target: &str) -> Result<DragOutcome> {
    session.get(id)?;

    let target = target
        .parse::<ReservationStatus>()
        .map(|status| status.label().to_string())
        .unwrap_or_else(|_| target.to_string());

    let outcome = perform_drag(&mut session.store, id, Some(&target));
    match outcome {
        DragOutcome::Rejected { from, to, .. } => Err(StayboardError::IllegalTransition { from, to }),
        DragOutcome::Unresolved { .. } => Err(StayboardError::NotFound(target)),
        DragOutcome::Cancelled => Err(StayboardError::NotFound(id.to_string())),
        other => Ok(other),
    }
}
