//! Delete command - Remove a reservation

use std::path::Path;

use tracing::info;

use crate::board::Notice;
use crate::errors::{Result, StayboardError};

use super::BoardSession;

/// Delete a reservation and persist the board
pub async fn run(cwd: Option<&Path>, id: &str, dry_run: bool) -> Result<()> {
    let mut session = BoardSession::open(cwd)?;
    if !session.store.delete(id) {
        return Err(StayboardError::NotFound(id.to_string()));
    }
    session.save(dry_run)?;

    info!(id, "reservation deleted");
    println!("{}: {}", Notice::deleted(), id);
    Ok(())
}
