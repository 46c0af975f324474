//! TUI state management
//!
//! All board interaction is plain state transitions on [`TuiState`], driven
//! by [`BoardCommand`]s. Nothing here touches the terminal.

use tracing::debug;

use crate::board::{group, Board, DragController, DragOutcome, Notice};
use crate::domain::is_terminal_status;
use crate::errors::Result;
use crate::fs::apply_initial_load;
use crate::schemas::Reservation;
use crate::store::ReservationStore;

use super::events::BoardCommand;

/// Progress of the initial load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded,
    Failed,
}

/// Cursor position: a column, and a card in it or the column header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub column: usize,
    /// `None` is the column header
    pub row: Option<usize>,
}

/// Main TUI state
#[derive(Debug)]
pub struct TuiState {
    store: ReservationStore,
    board: Board,
    drag: DragController,
    pub cursor: Cursor,
    pub notice: Option<Notice>,
    pub load: LoadState,
    pub date_format: String,
    pub should_quit: bool,
    baseline_revision: u64,
}

impl TuiState {
    /// Create a state that waits for the initial load
    pub fn new(store: ReservationStore, date_format: impl Into<String>) -> Self {
        let board = group(&store.list());
        let baseline_revision = store.revision();
        Self {
            store,
            board,
            drag: DragController::new(),
            cursor: Cursor::default(),
            notice: None,
            load: LoadState::Loading,
            date_format: date_format.into(),
            should_quit: false,
            baseline_revision,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn store(&self) -> &ReservationStore {
        &self.store
    }

    pub fn into_store(self) -> ReservationStore {
        self.store
    }

    pub fn is_loading(&self) -> bool {
        self.load == LoadState::Loading
    }

    /// Id of the card being dragged, if any
    pub fn dragged_id(&self) -> Option<&str> {
        self.drag.dragged_id()
    }

    /// Whether the store changed since the load and should be written back.
    ///
    /// A board whose load failed is never written, so a bad data file is
    /// not overwritten with an empty collection.
    pub fn is_dirty(&self) -> bool {
        self.load == LoadState::Loaded && self.store.revision() != self.baseline_revision
    }

    /// Hand over the result of the initial load
    pub fn finish_load(&mut self, result: Result<Vec<Reservation>>) {
        let failure = result.as_ref().err().map(|e| e.to_string());
        if apply_initial_load(&mut self.store, result) {
            self.load = LoadState::Loaded;
        } else {
            self.load = LoadState::Failed;
            self.notice = failure.map(|e| Notice::error(format!("Failed to load reservations: {}", e)));
        }
        self.baseline_revision = self.store.revision();
        self.refresh();
    }

    /// The card under the cursor
    pub fn selected(&self) -> Option<&Reservation> {
        let column = self.board.columns().get(self.cursor.column)?;
        column.reservations.get(self.cursor.row?)
    }

    /// The card under the cursor has no legal move left
    pub fn selected_is_terminal(&self) -> bool {
        self.selected().is_some_and(|r| is_terminal_status(r.status))
    }

    /// Drop target identifier under the cursor: the hovered card's id, or
    /// the column key when the header or an empty column is hovered.
    pub fn hovered_target(&self) -> String {
        match self.selected() {
            Some(reservation) => reservation.id.clone(),
            None => self.board.columns()[self.cursor.column].status.label().to_string(),
        }
    }

    pub fn handle(&mut self, command: BoardCommand) {
        if command == BoardCommand::Quit {
            self.should_quit = true;
            return;
        }
        if self.is_loading() {
            return;
        }

        match command {
            BoardCommand::Left => self.move_column(-1),
            BoardCommand::Right => self.move_column(1),
            BoardCommand::Up => self.move_up(),
            BoardCommand::Down => self.move_down(),
            BoardCommand::PickUp => self.pick_up(),
            BoardCommand::Drop => self.drop_on_hovered(),
            BoardCommand::Cancel => self.cancel_drag(),
            BoardCommand::Delete => self.delete_selected(),
            BoardCommand::Quit => {}
        }
    }

    // ===== CURSOR =====

    fn column_len(&self, column: usize) -> usize {
        self.board.columns().get(column).map_or(0, |c| c.len())
    }

    fn clamp_row(&mut self) {
        let len = self.column_len(self.cursor.column);
        self.cursor.row = match self.cursor.row {
            _ if len == 0 => None,
            Some(row) => Some(row.min(len - 1)),
            None => None,
        };
    }

    fn move_column(&mut self, delta: isize) {
        let last = self.board.columns().len().saturating_sub(1);
        self.cursor.column = self.cursor.column.saturating_add_signed(delta).min(last);
        self.clamp_row();
    }

    fn move_up(&mut self) {
        self.cursor.row = match self.cursor.row {
            Some(0) | None => None,
            Some(row) => Some(row - 1),
        };
    }

    fn move_down(&mut self) {
        let len = self.column_len(self.cursor.column);
        if len == 0 {
            return;
        }
        self.cursor.row = Some(self.cursor.row.map_or(0, |row| (row + 1).min(len - 1)));
    }

    /// Put the cursor on the card with this id, wherever it is now
    fn focus(&mut self, id: &str) {
        for (column_index, column) in self.board.columns().iter().enumerate() {
            if let Some(row) = column.reservations.iter().position(|r| r.id == id) {
                self.cursor = Cursor {
                    column: column_index,
                    row: Some(row),
                };
                return;
            }
        }
    }

    // ===== ACTIONS =====

    fn refresh(&mut self) {
        self.board = group(&self.store.list());
        self.clamp_row();
    }

    fn pick_up(&mut self) {
        if self.drag.is_dragging() {
            return;
        }
        let Some(id) = self.selected().map(|r| r.id.clone()) else {
            return;
        };
        self.drag.drag_start(&id, &self.store.list());
    }

    fn drop_on_hovered(&mut self) {
        if !self.drag.is_dragging() {
            return;
        }
        let target = self.hovered_target();
        let outcome = self.drag.drag_end(Some(&target), &mut self.store);
        debug!(?outcome, "drop handled");

        self.notice = outcome.notice();
        self.refresh();
        if let DragOutcome::Moved { reservation_id, .. } = &outcome {
            self.focus(reservation_id);
        }
    }

    fn cancel_drag(&mut self) {
        if self.drag.is_dragging() {
            self.drag.drag_end(None, &mut self.store);
        }
    }

    fn delete_selected(&mut self) {
        if self.drag.is_dragging() {
            return;
        }
        let Some(id) = self.selected().map(|r| r.id.clone()) else {
            return;
        };
        if self.store.delete(&id) {
            self.notice = Some(Notice::deleted());
            self.refresh();
        }
    }
}
