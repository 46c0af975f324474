//! Board grouping and drag interaction
//!
//! A [`Board`] partitions a reservation snapshot into the seven status
//! columns. The [`DragController`] turns drag gestures into checked status
//! moves against the store.

mod drag;
mod notice;


use serde::Serialize;

use crate::domain::{column_index, BOARD_COLUMNS};
use crate::schemas::{Reservation, ReservationStatus};

pub use drag::{perform_drag, resolve_drop_target, DragController, DragOutcome, DragState, DropTarget};
pub use notice::{Notice, NoticeLevel};

/// Shown in place of cards when a column is empty
pub const EMPTY_COLUMN_PLACEHOLDER: &str = "No reservations";

/// Header color of a status column, as RGB
pub fn column_color(status: ReservationStatus) -> (u8, u8, u8) {
    match status {
        ReservationStatus::Reserved => (0x34, 0x98, 0xdb),
        ReservationStatus::DueIn => (0x2e, 0xcc, 0x71),
        ReservationStatus::InHouse => (0x9b, 0x59, 0xb6),
        ReservationStatus::DueOut => (0xf3, 0x9c, 0x12),
        ReservationStatus::CheckedOut => (0x7f, 0x8c, 0x8d),
        ReservationStatus::Canceled => (0xe7, 0x4c, 0x3c),
        ReservationStatus::NoShow => (0xc0, 0x39, 0x2b),
    }
}

/// One status column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    pub status: ReservationStatus,
    pub reservations: Vec<Reservation>,
}

impl Column {
    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }
}

/// Reservations grouped by status, columns in fixed board order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Board {
    columns: Vec<Column>,
}

impl Board {
    /// All seven columns, left to right
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The column for a status
    pub fn column(&self, status: ReservationStatus) -> &Column {
        &self.columns[column_index(status)]
    }

    /// Total number of reservations across all columns
    pub fn total(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }
}

/// Stable partition of `reservations` by status.
///
/// Every status gets a column, even when empty. Within a column,
/// reservations keep their relative order from the input.
pub fn group(reservations: &[Reservation]) -> Board {
    let mut columns: Vec<Column> = BOARD_COLUMNS
        .iter()
        .map(|&status| Column {
            status,
            reservations: Vec::new(),
        })
        .collect();

    for reservation in reservations {
        columns[column_index(reservation.status)]
            .reservations
            .push(reservation.clone());
    }

    Board { columns }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_reservation(id: &str, status: ReservationStatus) -> Reservation {
        Reservation::new(
            id,
            "Guest",
            NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 8, 2).unwrap(),
        )
        .with_status(status)
    }

    fn column_ids(board: &Board, status: ReservationStatus) -> Vec<&str> {
        board
            .column(status)
            .reservations
            .iter()
            .map(|r| r.id.as_str())
            .collect()
    }

    #[test]
    fn test_group_empty_has_all_columns() {
        let board = group(&[]);
        assert_eq!(board.columns().len(), 7);
        assert!(board.columns().iter().all(Column::is_empty));
        assert_eq!(board.total(), 0);
    }

    #[test]
    fn test_group_column_order_is_fixed() {
        let board = group(&[make_reservation("res-001", ReservationStatus::NoShow)]);
        let order: Vec<ReservationStatus> = board.columns().iter().map(|c| c.status).collect();
        assert_eq!(order, BOARD_COLUMNS.to_vec());
    }

    #[test]
    fn test_group_preserves_relative_order() {
        let reservations = vec![
            make_reservation("res-003", ReservationStatus::InHouse),
            make_reservation("res-001", ReservationStatus::Reserved),
            make_reservation("res-005", ReservationStatus::InHouse),
            make_reservation("res-002", ReservationStatus::Reserved),
            make_reservation("res-004", ReservationStatus::InHouse),
        ];
        let board = group(&reservations);

        assert_eq!(column_ids(&board, ReservationStatus::InHouse), vec!["res-003", "res-005", "res-004"]);
        assert_eq!(column_ids(&board, ReservationStatus::Reserved), vec!["res-001", "res-002"]);
        assert!(board.column(ReservationStatus::DueOut).is_empty());
        assert_eq!(board.total(), 5);
    }

    #[test]
    fn test_board_serializes_in_column_order() {
        let board = group(&[make_reservation("res-001", ReservationStatus::DueIn)]);
        let json = serde_json::to_value(&board).unwrap();
        let columns = json["columns"].as_array().unwrap();
        assert_eq!(columns.len(), 7);
        assert_eq!(columns[0]["status"], "Reserved");
        assert_eq!(columns[1]["status"], "Due In");
        assert_eq!(columns[1]["reservations"][0]["id"], "res-001");
    }

    #[test]
    fn test_column_colors_are_distinct() {
        let colors: std::collections::HashSet<_> =
            BOARD_COLUMNS.iter().map(|&s| column_color(s)).collect();
        assert_eq!(colors.len(), BOARD_COLUMNS.len());
        assert_eq!(column_color(ReservationStatus::Reserved), (0x34, 0x98, 0xdb));
    }
}
