//! Status transition checks
//!
//! Pure functions deciding whether a reservation may move between columns.
//! A legal move is handed out as an [`ApprovedMove`], the only value the
//! store's checked mutation path accepts.

use crate::schemas::{Reservation, ReservationStatus};

use super::states::get_allowed_next_statuses;

/// Returns true iff `to` is in the table row for `from`.
///
/// Self-transitions are short-circuited by callers and never reach this
/// function; if they do, they are not in the table and report false.
pub fn is_legal_transition(from: ReservationStatus, to: ReservationStatus) -> bool {
    get_allowed_next_statuses(from).contains(&to)
}

/// A status change that has passed the transition table.
///
/// Fields are private: the only constructor is [`approve_move`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApprovedMove {
    reservation_id: String,
    from: ReservationStatus,
    to: ReservationStatus,
}

impl ApprovedMove {
    pub fn reservation_id(&self) -> &str {
        &self.reservation_id
    }

    pub fn from(&self) -> ReservationStatus {
        self.from
    }

    pub fn to(&self) -> ReservationStatus {
        self.to
    }
}

/// Result of checking a requested move
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveDecision {
    /// The move is in the table
    Approved(ApprovedMove),
    /// Target equals the current status; nothing to do
    Unchanged,
    /// The move is not in the table
    Rejected {
        from: ReservationStatus,
        to: ReservationStatus,
    },
}

impl MoveDecision {
    /// Check if the move was approved
    pub fn is_approved(&self) -> bool {
        matches!(self, MoveDecision::Approved(_))
    }

    /// Check if the move was rejected
    pub fn is_rejected(&self) -> bool {
        matches!(self, MoveDecision::Rejected { .. })
    }

    /// Get the approval if there is one
    pub fn approved(self) -> Option<ApprovedMove> {
        match self {
            MoveDecision::Approved(approved) => Some(approved),
            _ => None,
        }
    }
}

/// Decide whether `reservation` may move to `target`.
///
/// Never mutates the reservation.
pub fn approve_move(reservation: &Reservation, target: ReservationStatus) -> MoveDecision {
    let current = reservation.status;
    if current == target {
        return MoveDecision::Unchanged;
    }

    if !is_legal_transition(current, target) {
        return MoveDecision::Rejected {
            from: current,
            to: target,
        };
    }

    MoveDecision::Approved(ApprovedMove {
        reservation_id: reservation.id.clone(),
        from: current,
        to: target,
    })
}
