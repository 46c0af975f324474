//! Tui command - Open the interactive board

use std::path::Path;
use std::time::Duration;

use tracing::info;

use crate::errors::Result;
use crate::fs::spawn_initial_load;
use crate::tui::{TuiRunner, TuiState};

use super::BoardSession;

/// Open the board, load reservations in the background, and write any
/// changes back when the board closes.
pub async fn run(cwd: Option<&Path>, dry_run: bool) -> Result<()> {
    let mut session = BoardSession::locate(cwd)?;

    let load = spawn_initial_load(
        session.data_path.clone(),
        Duration::from_millis(session.config.load_delay_ms),
    );
    let state = TuiState::new(session.store, session.config.date_format.clone());
    let state = TuiRunner::new(state, load).run().await?;

    let dirty = state.is_dirty();
    session.store = state.into_store();
    if dirty {
        session.save(dry_run)?;
    } else {
        info!("no changes to write");
    }
    Ok(())
}
