//! Domain logic for reservation statuses and transitions

mod draft;
mod states;
mod transitions;
mod validation;


pub use draft::{ReservationDraft, ReservationEdit};
pub use states::{column_index, get_allowed_next_statuses, is_terminal_status, BOARD_COLUMNS};
pub use transitions::{approve_move, is_legal_transition, ApprovedMove, MoveDecision};
pub use validation::{
    initial_status_for, is_editable, validate_guest_name, validate_not_before,
    validate_reservation, validate_stay_dates, ValidationResult,
};
