//! Reservation status table
//!
//! Column order and the legal outgoing edges of every status:
//!
//! ```text
//! Reserved    ──▶ Canceled, Due In
//! Due In      ──▶ Canceled, No Show, In House
//! In House    ──▶ Checked Out
//! Due Out     ──▶ (none)
//! Checked Out ──▶ In House
//! Canceled    ──▶ Reserved
//! No Show     ──▶ (none)
//! ```

use crate::schemas::ReservationStatus;

/// The board columns, left to right.
///
/// IMPORTANT: This is the source of truth for column order.
pub const BOARD_COLUMNS: [ReservationStatus; 7] = [
    ReservationStatus::Reserved,
    ReservationStatus::DueIn,
    ReservationStatus::InHouse,
    ReservationStatus::DueOut,
    ReservationStatus::CheckedOut,
    ReservationStatus::Canceled,
    ReservationStatus::NoShow,
];

/// Get the 0-based column index of a status.
pub fn column_index(status: ReservationStatus) -> usize {
    match status {
        ReservationStatus::Reserved => 0,
        ReservationStatus::DueIn => 1,
        ReservationStatus::InHouse => 2,
        ReservationStatus::DueOut => 3,
        ReservationStatus::CheckedOut => 4,
        ReservationStatus::Canceled => 5,
        ReservationStatus::NoShow => 6,
    }
}

/// Returns the statuses a reservation may be moved to from `current`.
pub fn get_allowed_next_statuses(current: ReservationStatus) -> &'static [ReservationStatus] {
    use ReservationStatus::*;

    match current {
        Reserved => &[Canceled, DueIn],
        DueIn => &[Canceled, NoShow, InHouse],
        InHouse => &[CheckedOut],
        DueOut => &[],
        CheckedOut => &[InHouse],
        Canceled => &[Reserved],
        NoShow => &[],
    }
}

/// Check if a status has no outgoing edges.
pub fn is_terminal_status(status: ReservationStatus) -> bool {
    get_allowed_next_statuses(status).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_columns_order() {
        assert_eq!(BOARD_COLUMNS.len(), 7);
        assert_eq!(BOARD_COLUMNS[0], ReservationStatus::Reserved);
        assert_eq!(BOARD_COLUMNS[1], ReservationStatus::DueIn);
        assert_eq!(BOARD_COLUMNS[2], ReservationStatus::InHouse);
        assert_eq!(BOARD_COLUMNS[3], ReservationStatus::DueOut);
        assert_eq!(BOARD_COLUMNS[4], ReservationStatus::CheckedOut);
        assert_eq!(BOARD_COLUMNS[5], ReservationStatus::Canceled);
        assert_eq!(BOARD_COLUMNS[6], ReservationStatus::NoShow);
    }

    #[test]
    fn test_column_index_agrees_with_columns() {
        for (i, status) in BOARD_COLUMNS.iter().enumerate() {
            assert_eq!(column_index(*status), i);
        }
    }

    #[test]
    fn test_allowed_next_statuses() {
        use ReservationStatus::*;

        assert_eq!(get_allowed_next_statuses(Reserved), &[Canceled, DueIn]);
        assert_eq!(get_allowed_next_statuses(DueIn), &[Canceled, NoShow, InHouse]);
        assert_eq!(get_allowed_next_statuses(InHouse), &[CheckedOut]);
        assert!(get_allowed_next_statuses(DueOut).is_empty());
        assert_eq!(get_allowed_next_statuses(CheckedOut), &[InHouse]);
        assert_eq!(get_allowed_next_statuses(Canceled), &[Reserved]);
        assert!(get_allowed_next_statuses(NoShow).is_empty());
    }

    #[test]
    fn test_no_status_leads_into_due_out() {
        for status in BOARD_COLUMNS {
            assert!(!get_allowed_next_statuses(status).contains(&ReservationStatus::DueOut));
        }
    }

    #[test]
    fn test_is_terminal_status() {
        assert!(is_terminal_status(ReservationStatus::DueOut));
        assert!(is_terminal_status(ReservationStatus::NoShow));
        assert!(!is_terminal_status(ReservationStatus::Reserved));
        assert!(!is_terminal_status(ReservationStatus::CheckedOut));
        assert!(!is_terminal_status(ReservationStatus::Canceled));
    }
}
