//! Add command - Create a reservation

use std::path::Path;

use chrono::NaiveDate;
use tracing::info;

use crate::board::Notice;
use crate::domain::ReservationDraft;
use crate::errors::Result;
use crate::schemas::Reservation;

use super::{today, BoardSession};

/// Create a reservation and persist the board
pub async fn run(cwd: Option<&Path>, draft: ReservationDraft, dry_run: bool) -> Result<()> {
    let mut session = BoardSession::open(cwd)?;
    let reservation = execute(&mut session, draft, today())?;
    session.save(dry_run)?;

    info!(id = %reservation.id, status = %reservation.status, "reservation created");
    println!("{}: {} ({})", Notice::created(), reservation.id, reservation.status);
    Ok(())
}

pub fn execute(session: &mut BoardSession, draft: ReservationDraft, today: NaiveDate) -> Result<Reservation> {
    session.store.create(draft, today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::test_support::{date, reservation, seed_board};
    use crate::schemas::ReservationStatus;
    use tempfile::TempDir;

    #[test]
    fn test_add_continues_id_sequence() {
        let temp = TempDir::new().unwrap();
        seed_board(temp.path(), &[reservation("res-004", ReservationStatus::InHouse)]);
        let mut session = BoardSession::open(Some(temp.path())).unwrap();

        let today = date(2025, 9, 1);
        let created = execute(
            &mut session,
            ReservationDraft::new("Clara", today, date(2025, 9, 5)),
            today,
        )
        .unwrap();

        assert_eq!(created.id, "res-005");
        assert_eq!(created.status, ReservationStatus::DueIn);
        assert_eq!(session.store.len(), 2);
    }

    #[tokio::test]
    async fn test_add_persists() {
        let temp = TempDir::new().unwrap();
        seed_board(temp.path(), &[]);

        let draft = ReservationDraft::new("Clara", date(2030, 1, 10), date(2030, 1, 12));
        run(Some(temp.path()), draft, false).await.unwrap();

        let session = BoardSession::open(Some(temp.path())).unwrap();
        let stored = session.get("res-001").unwrap();
        assert_eq!(stored.guest_name, "Clara");
        assert_eq!(stored.status, ReservationStatus::Reserved);
    }

    #[tokio::test]
    async fn test_add_rejects_inverted_dates() {
        let temp = TempDir::new().unwrap();
        seed_board(temp.path(), &[]);

        let draft = ReservationDraft::new("Clara", date(2030, 1, 12), date(2030, 1, 10));
        let err = run(Some(temp.path()), draft, false).await.unwrap_err();
        assert_eq!(err.code(), "INVALID_RESERVATION");
    }

    #[tokio::test]
    async fn test_add_rejects_check_in_before_today() {
        let temp = TempDir::new().unwrap();
        seed_board(temp.path(), &[]);

        let draft = ReservationDraft::new("Clara", date(2001, 1, 1), date(2001, 1, 3));
        let err = run(Some(temp.path()), draft, false).await.unwrap_err();
        assert_eq!(err.code(), "INVALID_RESERVATION");

        let session = BoardSession::open(Some(temp.path())).unwrap();
        assert!(session.store.is_empty());
    }
}
