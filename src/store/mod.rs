//! In-memory reservation store
//!
//! The store owns the authoritative reservation collection. Readers get
//! immutable snapshots (`Arc`), and every mutation produces a new snapshot
//! while earlier ones stay untouched.
//!
//! The store is mechanism, not policy: [`ReservationStore::move_status`]
//! writes any status it is given. The checked path is
//! [`ReservationStore::apply_move`], which only accepts an
//! [`ApprovedMove`] from the transition table. Calling `move_status`
//! directly bypasses the table and is reserved for trusted callers.

use std::sync::Arc;

use tracing::debug;

use chrono::NaiveDate;

use crate::domain::{validate_reservation, ApprovedMove, ReservationDraft};
use crate::errors::{Result, StayboardError};
use crate::schemas::{Config, Reservation, ReservationStatus};

/// Immutable view of the collection at one point in time
pub type Snapshot = Arc<Vec<Reservation>>;

/// Single-writer reservation collection
#[derive(Debug, Clone)]
pub struct ReservationStore {
    reservations: Snapshot,
    id_prefix: String,
    id_width: usize,
    /// Highest id suffix ever issued or seen; never decreases.
    last_id_number: u64,
    revision: u64,
}

impl Default for ReservationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ReservationStore {
    /// Create an empty store issuing `res-NNN` ids
    pub fn new() -> Self {
        Self::with_id_format("res-", 3)
    }

    /// Create an empty store with a custom id prefix and suffix width
    pub fn with_id_format(prefix: impl Into<String>, width: usize) -> Self {
        ReservationStore {
            reservations: Arc::new(Vec::new()),
            id_prefix: prefix.into(),
            id_width: width,
            last_id_number: 0,
            revision: 0,
        }
    }

    /// Create an empty store using the configured id format
    pub fn from_config(config: &Config) -> Self {
        Self::with_id_format(config.id_prefix.clone(), config.id_width)
    }

    // ===== QUERIES =====

    /// Current collection in insertion order
    pub fn list(&self) -> Snapshot {
        Arc::clone(&self.reservations)
    }

    /// Look up a reservation by id
    pub fn get(&self, id: &str) -> Option<&Reservation> {
        self.reservations.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }

    /// Incremented by every mutation that changed the collection
    pub fn revision(&self) -> u64 {
        self.revision
    }

    // ===== MUTATIONS =====

    /// Append a reservation at the end of the collection.
    ///
    /// The id is not checked for duplicates; callers obtain it from
    /// [`generate_id`](Self::generate_id). Field validation still applies.
    pub fn add(&mut self, reservation: Reservation) -> Result<()> {
        ensure_valid(&reservation)?;
        self.absorb_id(&reservation.id);
        debug!(id = %reservation.id, status = %reservation.status, "adding reservation");
        Arc::make_mut(&mut self.reservations).push(reservation);
        self.revision += 1;
        Ok(())
    }

    /// Create a reservation from a draft: validate, issue an id, append.
    ///
    /// No id is consumed when the draft is invalid.
    pub fn create(&mut self, draft: ReservationDraft, today: NaiveDate) -> Result<Reservation> {
        let validation = draft.validate(today);
        if !validation.valid {
            return Err(StayboardError::InvalidReservation(
                validation.reason.unwrap_or_else(|| "validation failed".to_string()),
            ));
        }
        let reservation = draft.into_reservation(self.generate_id()?, today);
        self.add(reservation.clone())?;
        Ok(reservation)
    }

    /// Replace the entry with the same id, verbatim.
    ///
    /// Returns `Ok(false)` when no entry matches.
    pub fn update(&mut self, reservation: Reservation) -> Result<bool> {
        ensure_valid(&reservation)?;
        let Some(index) = self.position(&reservation.id) else {
            debug!(id = %reservation.id, "update ignored, reservation not found");
            return Ok(false);
        };

        debug!(id = %reservation.id, "updating reservation");
        Arc::make_mut(&mut self.reservations)[index] = reservation;
        self.revision += 1;
        Ok(true)
    }

    /// Remove the entry with this id. Returns false when absent.
    pub fn delete(&mut self, id: &str) -> bool {
        let Some(index) = self.position(id) else {
            debug!(id, "delete ignored, reservation not found");
            return false;
        };

        debug!(id, "deleting reservation");
        Arc::make_mut(&mut self.reservations).remove(index);
        self.revision += 1;
        true
    }

    /// Issue the next reservation id.
    ///
    /// Ids come from a counter that only grows, so an id is never handed out
    /// twice even after the reservation holding the highest one is deleted.
    /// Every call reserves the id it returns.
    ///
    /// # Errors
    /// * `IdsExhausted` - The counter already holds the largest suffix
    pub fn generate_id(&mut self) -> Result<String> {
        let next = self
            .last_id_number
            .checked_add(1)
            .ok_or_else(|| StayboardError::IdsExhausted(self.id_prefix.clone()))?;
        self.last_id_number = next;
        Ok(format!(
            "{}{:0width$}",
            self.id_prefix,
            next,
            width = self.id_width
        ))
    }

    /// Overwrite the status of the entry with this id, leaving other fields
    /// untouched. Returns false when absent.
    ///
    /// Performs no transition check. Prefer [`apply_move`](Self::apply_move).
    pub fn move_status(&mut self, id: &str, new_status: ReservationStatus) -> bool {
        let Some(index) = self.position(id) else {
            debug!(id, "status move ignored, reservation not found");
            return false;
        };

        let reservations = Arc::make_mut(&mut self.reservations);
        debug!(id, from = %reservations[index].status, to = %new_status, "moving reservation");
        reservations[index].status = new_status;
        self.revision += 1;
        true
    }

    /// Commit a move approved by the transition table.
    ///
    /// A stale approval (the reservation changed status since it was
    /// approved, or is gone) is not applied and returns false.
    pub fn apply_move(&mut self, approved: &ApprovedMove) -> bool {
        let is_current = self
            .get(approved.reservation_id())
            .is_some_and(|current| current.status == approved.from());
        if !is_current {
            debug!(id = approved.reservation_id(), "stale move approval ignored");
            return false;
        }
        self.move_status(approved.reservation_id(), approved.to())
    }

    /// Swap in a whole new collection, as delivered by the initial load.
    ///
    /// Loader input is taken as-is; the id counter absorbs every id so that
    /// later ids continue after the loaded ones.
    pub fn replace_all(&mut self, reservations: Vec<Reservation>) {
        for reservation in &reservations {
            self.absorb_id(&reservation.id);
        }
        debug!(count = reservations.len(), "replacing reservation collection");
        self.reservations = Arc::new(reservations);
        self.revision += 1;
    }

    // ===== PRIVATE HELPERS =====

    fn position(&self, id: &str) -> Option<usize> {
        self.reservations.iter().position(|r| r.id == id)
    }

    /// Parse the numeric suffix of an id in this store's format
    fn id_number(&self, id: &str) -> Option<u64> {
        let digits = id.strip_prefix(&self.id_prefix)?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    }

    fn absorb_id(&mut self, id: &str) {
        if let Some(number) = self.id_number(id) {
            self.last_id_number = self.last_id_number.max(number);
        }
    }
}

fn ensure_valid(reservation: &Reservation) -> Result<()> {
    let validation = validate_reservation(reservation);
    if !validation.valid {
        return Err(StayboardError::InvalidReservation(format!(
            "{}: {}",
            reservation.id,
            validation.reason.unwrap_or_else(|| "validation failed".to_string())
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::approve_move;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_reservation(id: &str, status: ReservationStatus) -> Reservation {
        Reservation::new(id, format!("Guest {}", id), date(2025, 4, 1), date(2025, 4, 5))
            .with_status(status)
    }

    fn ids(store: &ReservationStore) -> Vec<String> {
        store.list().iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_create_from_draft() {
        let mut store = ReservationStore::new();
        let today = date(2025, 4, 1);

        let arriving = store
            .create(ReservationDraft::new("Anna", today, date(2025, 4, 3)), today)
            .unwrap();
        let later = store
            .create(ReservationDraft::new("Ben", date(2025, 5, 1), date(2025, 5, 2)), today)
            .unwrap();

        assert_eq!(arriving.id, "res-001");
        assert_eq!(arriving.status, ReservationStatus::DueIn);
        assert_eq!(later.id, "res-002");
        assert_eq!(later.status, ReservationStatus::Reserved);
        assert_eq!(ids(&store), vec!["res-001", "res-002"]);
    }

    #[test]
    fn test_create_invalid_draft_keeps_id() {
        let mut store = ReservationStore::new();
        let today = date(2025, 4, 1);

        let err = store
            .create(ReservationDraft::new("  ", today, date(2025, 4, 3)), today)
            .unwrap_err();
        assert_eq!(err.code(), "INVALID_RESERVATION");
        assert!(store.is_empty());
        assert_eq!(store.generate_id().unwrap(), "res-001");
    }

    #[test]
    fn test_create_rejects_past_check_in() {
        let mut store = ReservationStore::new();
        let today = date(2025, 4, 10);

        let err = store
            .create(ReservationDraft::new("Anna", date(2025, 4, 9), date(2025, 4, 12)), today)
            .unwrap_err();
        assert_eq!(err.code(), "INVALID_RESERVATION");
        assert!(store.is_empty());
        assert_eq!(store.generate_id().unwrap(), "res-001");
    }

    #[test]
    fn test_update_accepts_past_dates() {
        let mut store = ReservationStore::new();
        store.add(make_reservation("res-001", ReservationStatus::Reserved)).unwrap();

        let moved_back = Reservation::new("res-001", "Anna", date(2001, 1, 1), date(2001, 1, 2));
        assert!(store.update(moved_back).unwrap());
    }

    #[test]
    fn test_generate_id_on_empty_store() {
        let mut store = ReservationStore::new();
        assert_eq!(store.generate_id().unwrap(), "res-001");
    }

    #[test]
    fn test_generate_id_follows_added_id() {
        let mut store = ReservationStore::new();
        store
            .add(make_reservation("res-007", ReservationStatus::Reserved))
            .unwrap();
        assert_eq!(store.generate_id().unwrap(), "res-008");
    }

    #[test]
    fn test_generate_id_not_reissued_after_delete() {
        let mut store = ReservationStore::new();
        for _ in 0..3 {
            let id = store.generate_id().unwrap();
            store.add(make_reservation(&id, ReservationStatus::Reserved)).unwrap();
        }
        assert!(store.delete("res-003"));
        assert_eq!(store.generate_id().unwrap(), "res-004");
    }

    #[test]
    fn test_generate_id_ignores_foreign_ids() {
        let mut store = ReservationStore::new();
        store
            .add(make_reservation("walk-in-42", ReservationStatus::Reserved))
            .unwrap();
        assert_eq!(store.generate_id().unwrap(), "res-001");
    }

    #[test]
    fn test_generate_id_grows_past_width() {
        let mut store = ReservationStore::new();
        store
            .add(make_reservation("res-999", ReservationStatus::Reserved))
            .unwrap();
        assert_eq!(store.generate_id().unwrap(), "res-1000");
    }

    #[test]
    fn test_generate_id_exhausted_counter() {
        let mut store = ReservationStore::new();
        store.replace_all(vec![make_reservation(
            "res-18446744073709551615",
            ReservationStatus::Reserved,
        )]);

        let err = store.generate_id().unwrap_err();
        assert_eq!(err.code(), "IDS_EXHAUSTED");

        let today = date(2025, 4, 1);
        let err = store
            .create(ReservationDraft::new("Anna", today, date(2025, 4, 3)), today)
            .unwrap_err();
        assert_eq!(err.code(), "IDS_EXHAUSTED");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_custom_id_format() {
        let mut store = ReservationStore::with_id_format("bk-", 5);
        assert_eq!(store.generate_id().unwrap(), "bk-00001");
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut store = ReservationStore::new();
        store.add(make_reservation("res-002", ReservationStatus::Reserved)).unwrap();
        store.add(make_reservation("res-001", ReservationStatus::DueIn)).unwrap();
        assert_eq!(ids(&store), vec!["res-002", "res-001"]);
    }

    #[test]
    fn test_add_does_not_check_duplicate_ids() {
        let mut store = ReservationStore::new();
        store.add(make_reservation("res-001", ReservationStatus::Reserved)).unwrap();
        store.add(make_reservation("res-001", ReservationStatus::DueIn)).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_add_rejects_invalid_dates() {
        let mut store = ReservationStore::new();
        let bad = Reservation::new("res-001", "Anna", date(2025, 4, 5), date(2025, 4, 5));
        let err = store.add(bad).unwrap_err();
        assert!(matches!(err, StayboardError::InvalidReservation(_)));
        assert!(store.is_empty());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_update_replaces_verbatim() {
        let mut store = ReservationStore::new();
        store.add(make_reservation("res-001", ReservationStatus::Reserved)).unwrap();

        let edited = make_reservation("res-001", ReservationStatus::Canceled)
            .with_room_number(Some("204".to_string()));
        assert!(store.update(edited.clone()).unwrap());
        assert_eq!(store.get("res-001"), Some(&edited));
    }

    #[test]
    fn test_update_missing_is_noop() {
        let mut store = ReservationStore::new();
        store.add(make_reservation("res-001", ReservationStatus::Reserved)).unwrap();
        let before = store.list();

        assert!(!store.update(make_reservation("res-404", ReservationStatus::Reserved)).unwrap());
        assert_eq!(store.list(), before);
    }

    #[test]
    fn test_update_rejects_invalid_reservation() {
        let mut store = ReservationStore::new();
        store.add(make_reservation("res-001", ReservationStatus::Reserved)).unwrap();

        let bad = Reservation::new("res-001", "  ", date(2025, 4, 1), date(2025, 4, 2));
        assert!(store.update(bad).is_err());
        assert_eq!(store.get("res-001").unwrap().guest_name, "Guest res-001");
    }

    #[test]
    fn test_delete_missing_leaves_list_unchanged() {
        let mut store = ReservationStore::new();
        store.add(make_reservation("res-001", ReservationStatus::Reserved)).unwrap();
        let before = store.list();
        let revision = store.revision();

        assert!(!store.delete("res-999"));
        assert_eq!(store.list(), before);
        assert_eq!(store.revision(), revision);
    }

    #[test]
    fn test_move_status_only_touches_status() {
        let mut store = ReservationStore::new();
        let original = make_reservation("res-001", ReservationStatus::Reserved)
            .with_notes(Some("vip".to_string()));
        store.add(original.clone()).unwrap();

        assert!(store.move_status("res-001", ReservationStatus::DueOut));
        let moved = store.get("res-001").unwrap();
        assert_eq!(moved.status, ReservationStatus::DueOut);
        assert_eq!(moved.clone().with_status(ReservationStatus::Reserved), original);
    }

    #[test]
    fn test_move_status_missing_is_noop() {
        let mut store = ReservationStore::new();
        assert!(!store.move_status("res-001", ReservationStatus::InHouse));
    }

    #[test]
    fn test_apply_move_commits_approved() {
        let mut store = ReservationStore::new();
        store.add(make_reservation("res-001", ReservationStatus::Reserved)).unwrap();

        let approved = approve_move(store.get("res-001").unwrap(), ReservationStatus::DueIn)
            .approved()
            .unwrap();
        assert!(store.apply_move(&approved));
        assert_eq!(store.get("res-001").unwrap().status, ReservationStatus::DueIn);
    }

    #[test]
    fn test_apply_move_ignores_stale_approval() {
        let mut store = ReservationStore::new();
        store.add(make_reservation("res-001", ReservationStatus::Reserved)).unwrap();

        let approved = approve_move(store.get("res-001").unwrap(), ReservationStatus::DueIn)
            .approved()
            .unwrap();
        store.move_status("res-001", ReservationStatus::Canceled);

        assert!(!store.apply_move(&approved));
        assert_eq!(store.get("res-001").unwrap().status, ReservationStatus::Canceled);
    }

    #[test]
    fn test_snapshots_are_not_mutated() {
        let mut store = ReservationStore::new();
        store.add(make_reservation("res-001", ReservationStatus::Reserved)).unwrap();

        let snapshot = store.list();
        store.move_status("res-001", ReservationStatus::DueIn);
        store.add(make_reservation("res-002", ReservationStatus::Reserved)).unwrap();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].status, ReservationStatus::Reserved);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_replace_all_advances_id_counter() {
        let mut store = ReservationStore::new();
        store.replace_all(vec![
            make_reservation("res-004", ReservationStatus::InHouse),
            make_reservation("res-012", ReservationStatus::Reserved),
        ]);
        assert_eq!(ids(&store), vec!["res-004", "res-012"]);
        assert_eq!(store.generate_id().unwrap(), "res-013");
    }

    #[test]
    fn test_revision_tracks_mutations() {
        let mut store = ReservationStore::new();
        assert_eq!(store.revision(), 0);
        store.add(make_reservation("res-001", ReservationStatus::Reserved)).unwrap();
        store.move_status("res-001", ReservationStatus::DueIn);
        store.delete("res-001");
        assert_eq!(store.revision(), 3);
    }
}
