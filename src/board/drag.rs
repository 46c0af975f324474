//! Drag gesture handling
//!
//! A gesture is a pair of opaque identifiers: the card picked up, and
//! whatever it was dropped on (a column key, another card, or nothing).
//! Only drag end can mutate the store, and only through an approved move.

use tracing::{debug, info, warn};

use crate::domain::{approve_move, MoveDecision};
use crate::schemas::{Reservation, ReservationStatus};
use crate::store::ReservationStore;

use super::notice::Notice;

/// Controller state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    /// No gesture in progress
    #[default]
    Idle,
    /// A card has been picked up
    Dragging { reservation_id: String },
}

/// What a drop target identifier refers to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    /// A column key
    Column(ReservationStatus),
    /// Another reservation's card; the drop lands in that card's column
    Card(String),
    /// Nothing that resolves
    NoTarget,
}

/// Resolve a drop target identifier.
///
/// Column keys are tried first, then reservation ids.
pub fn resolve_drop_target(target: Option<&str>, reservations: &[Reservation]) -> DropTarget {
    let Some(target) = target else {
        return DropTarget::NoTarget;
    };

    if let Some(status) = ReservationStatus::from_label(target) {
        return DropTarget::Column(status);
    }

    if reservations.iter().any(|r| r.id == target) {
        return DropTarget::Card(target.to_string());
    }

    DropTarget::NoTarget
}

/// Result of a drag end
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOutcome {
    /// The move was legal and has been applied
    Moved {
        reservation_id: String,
        from: ReservationStatus,
        to: ReservationStatus,
    },
    /// The move is not in the transition table; nothing changed
    Rejected {
        reservation_id: String,
        from: ReservationStatus,
        to: ReservationStatus,
    },
    /// Dropped into the column it already was in
    Unchanged { reservation_id: String },
    /// No active drag, no drop target, or the dragged card is gone
    Cancelled,
    /// The drop target matched neither a column nor a card
    Unresolved { target: String },
}

impl DragOutcome {
    /// Check if the store was changed
    pub fn is_moved(&self) -> bool {
        matches!(self, DragOutcome::Moved { .. })
    }

    /// Check if the move was refused by the transition table
    pub fn is_rejected(&self) -> bool {
        matches!(self, DragOutcome::Rejected { .. })
    }

    /// User-facing notice, if the outcome warrants one.
    ///
    /// Only rejections are reported; everything else is silent.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            DragOutcome::Rejected { from, to, .. } => {
                Some(Notice::error(format!("Cannot move from {} to {}", from, to)))
            }
            _ => None,
        }
    }
}

/// Drag state machine: `Idle` → `Dragging` → `Idle`
#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Id of the card being dragged, if any
    pub fn dragged_id(&self) -> Option<&str> {
        match &self.state {
            DragState::Dragging { reservation_id } => Some(reservation_id),
            DragState::Idle => None,
        }
    }

    /// Pick up a card. Unknown ids leave the state as it was.
    pub fn drag_start(&mut self, source_id: &str, reservations: &[Reservation]) -> bool {
        if !reservations.iter().any(|r| r.id == source_id) {
            debug!(source_id, "drag start ignored, reservation not found");
            return false;
        }

        debug!(source_id, "drag started");
        self.state = DragState::Dragging {
            reservation_id: source_id.to_string(),
        };
        true
    }

    /// Abandon the gesture without a drop
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }

    /// Drop the dragged card on `target`.
    ///
    /// Always returns the controller to `Idle`. The store is changed only
    /// when the outcome is [`DragOutcome::Moved`].
    pub fn drag_end(&mut self, target: Option<&str>, store: &mut ReservationStore) -> DragOutcome {
        let DragState::Dragging { reservation_id } = std::mem::take(&mut self.state) else {
            return DragOutcome::Cancelled;
        };

        let Some(target) = target else {
            debug!(reservation_id, "drag cancelled without a drop target");
            return DragOutcome::Cancelled;
        };

        let snapshot = store.list();
        let Some(dragged) = snapshot.iter().find(|r| r.id == reservation_id) else {
            debug!(reservation_id, "dragged reservation no longer exists");
            return DragOutcome::Cancelled;
        };

        let target_status = match resolve_drop_target(Some(target), &snapshot) {
            DropTarget::Column(status) => Some(status),
            DropTarget::Card(card_id) => snapshot
                .iter()
                .find(|r| r.id == card_id)
                .map(|r| r.status),
            DropTarget::NoTarget => None,
        };
        let Some(target_status) = target_status else {
            debug!(reservation_id, drop_target = target, "drop target did not resolve");
            return DragOutcome::Unresolved {
                target: target.to_string(),
            };
        };

        match approve_move(dragged, target_status) {
            MoveDecision::Unchanged => DragOutcome::Unchanged { reservation_id },
            MoveDecision::Rejected { from, to } => {
                warn!(reservation_id, %from, %to, "move rejected by transition table");
                DragOutcome::Rejected {
                    reservation_id,
                    from,
                    to,
                }
            }
            MoveDecision::Approved(approved) => {
                if !store.apply_move(&approved) {
                    return DragOutcome::Cancelled;
                }
                info!(reservation_id, from = %approved.from(), to = %approved.to(), "reservation moved");
                DragOutcome::Moved {
                    reservation_id,
                    from: approved.from(),
                    to: approved.to(),
                }
            }
        }
    }
}

/// Run a whole gesture at once: pick up `source_id`, drop on `target`.
pub fn perform_drag(
    store: &mut ReservationStore,
    source_id: &str,
    target: Option<&str>,
) -> DragOutcome {
    let mut controller = DragController::new();
    if !controller.drag_start(source_id, &store.list()) {
        return DragOutcome::Cancelled;
    }
    controller.drag_end(target, store)
}
