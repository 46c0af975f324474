//! Create and edit forms
//!
//! Both are direct field writes: the status a draft starts in, and the
//! status an edit sets, do not go through the transition table.

use chrono::NaiveDate;

use crate::schemas::{Reservation, ReservationStatus};

use super::validation::{
    initial_status_for, validate_guest_name, validate_not_before, validate_stay_dates, ValidationResult,
};

/// Fields of a reservation that does not exist yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationDraft {
    pub guest_name: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub room_number: Option<String>,
    pub notes: Option<String>,
    pub email: Option<String>,
}

impl ReservationDraft {
    pub fn new(guest_name: impl Into<String>, check_in_date: NaiveDate, check_out_date: NaiveDate) -> Self {
        ReservationDraft {
            guest_name: guest_name.into(),
            check_in_date,
            check_out_date,
            room_number: None,
            notes: None,
            email: None,
        }
    }

    /// Form rules for a new booking. Both dates must be `today` or later;
    /// with check-out after check-in that reduces to the check-in date.
    pub fn validate(&self, today: NaiveDate) -> ValidationResult {
        let name = validate_guest_name(&self.guest_name);
        if !name.valid {
            return name;
        }
        let start = validate_not_before(self.check_in_date, today);
        if !start.valid {
            return start;
        }
        validate_stay_dates(self.check_in_date, self.check_out_date)
    }

    /// Build the reservation under `id`. Arrivals for `today` start as
    /// `Due In`, everything else as `Reserved`.
    pub fn into_reservation(self, id: impl Into<String>, today: NaiveDate) -> Reservation {
        let status = initial_status_for(self.check_in_date, today);
        Reservation::new(id, self.guest_name, self.check_in_date, self.check_out_date)
            .with_status(status)
            .with_room_number(blank_to_none(self.room_number))
            .with_notes(blank_to_none(self.notes))
            .with_email(blank_to_none(self.email))
    }
}

/// Changes to an existing reservation. `None` keeps the current value; an
/// empty string clears an optional field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationEdit {
    pub guest_name: Option<String>,
    pub check_in_date: Option<NaiveDate>,
    pub check_out_date: Option<NaiveDate>,
    pub status: Option<ReservationStatus>,
    pub room_number: Option<String>,
    pub notes: Option<String>,
    pub email: Option<String>,
}

impl ReservationEdit {
    pub fn is_empty(&self) -> bool {
        *self == ReservationEdit::default()
    }

    /// The full replacement record for `existing`
    pub fn apply_to(&self, existing: &Reservation) -> Reservation {
        let mut next = existing.clone();
        if let Some(guest_name) = &self.guest_name {
            next.guest_name = guest_name.clone();
        }
        if let Some(check_in) = self.check_in_date {
            next.check_in_date = check_in;
        }
        if let Some(check_out) = self.check_out_date {
            next.check_out_date = check_out;
        }
        if let Some(status) = self.status {
            next.status = status;
        }
        if let Some(room) = &self.room_number {
            next.room_number = blank_to_none(Some(room.clone()));
        }
        if let Some(notes) = &self.notes {
            next.notes = blank_to_none(Some(notes.clone()));
        }
        if let Some(email) = &self.email {
            next.email = blank_to_none(Some(email.clone()));
        }
        next
    }
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_draft_for_today_starts_due_in() {
        let today = date(2025, 5, 20);
        let draft = ReservationDraft::new("Anna", today, date(2025, 5, 22));
        let reservation = draft.into_reservation("res-001", today);
        assert_eq!(reservation.status, ReservationStatus::DueIn);
        assert_eq!(reservation.id, "res-001");
    }

    #[test]
    fn test_draft_for_later_starts_reserved() {
        let today = date(2025, 5, 20);
        let draft = ReservationDraft::new("Anna", date(2025, 6, 1), date(2025, 6, 3));
        assert_eq!(
            draft.into_reservation("res-002", today).status,
            ReservationStatus::Reserved
        );
    }

    #[test]
    fn test_draft_blank_optionals_are_dropped() {
        let mut draft = ReservationDraft::new("Anna", date(2025, 6, 1), date(2025, 6, 3));
        draft.room_number = Some("  ".to_string());
        draft.email = Some("anna@example.com".to_string());

        let reservation = draft.into_reservation("res-003", date(2025, 5, 1));
        assert!(reservation.room_number.is_none());
        assert_eq!(reservation.email.as_deref(), Some("anna@example.com"));
    }

    #[test]
    fn test_draft_validation() {
        let today = date(2025, 5, 20);
        assert!(ReservationDraft::new("Anna", date(2025, 6, 1), date(2025, 6, 2)).validate(today).valid);
        assert!(!ReservationDraft::new("", date(2025, 6, 1), date(2025, 6, 2)).validate(today).valid);
        assert!(!ReservationDraft::new("Anna", date(2025, 6, 2), date(2025, 6, 1)).validate(today).valid);
    }

    #[test]
    fn test_draft_check_in_in_past_is_rejected() {
        let today = date(2025, 5, 20);
        assert!(ReservationDraft::new("Anna", today, date(2025, 5, 21)).validate(today).valid);

        let result = ReservationDraft::new("Anna", date(2025, 5, 19), date(2025, 5, 21)).validate(today);
        assert!(!result.valid);
        assert!(result.reason.unwrap().contains("before today"));
    }

    #[test]
    fn test_edit_may_keep_past_dates() {
        let existing = Reservation::new("res-001", "Anna", date(2001, 1, 1), date(2001, 1, 3));
        let edit = ReservationEdit {
            check_in_date: Some(date(2000, 12, 31)),
            ..Default::default()
        };
        assert_eq!(edit.apply_to(&existing).check_in_date, date(2000, 12, 31));
    }

    #[test]
    fn test_edit_applies_only_given_fields() {
        let existing = Reservation::new("res-001", "Anna", date(2025, 6, 1), date(2025, 6, 3))
            .with_room_number(Some("12".to_string()))
            .with_notes(Some("quiet room".to_string()));

        let edit = ReservationEdit {
            guest_name: Some("Anna Nowak".to_string()),
            notes: Some(String::new()),
            ..Default::default()
        };
        let next = edit.apply_to(&existing);

        assert_eq!(next.guest_name, "Anna Nowak");
        assert_eq!(next.room_number.as_deref(), Some("12"));
        assert!(next.notes.is_none());
        assert_eq!(next.id, existing.id);
        assert_eq!(next.check_in_date, existing.check_in_date);
    }

    #[test]
    fn test_edit_writes_status_directly() {
        let existing = Reservation::new("res-001", "Anna", date(2025, 6, 1), date(2025, 6, 3));
        let edit = ReservationEdit {
            status: Some(ReservationStatus::DueOut),
            ..Default::default()
        };
        assert_eq!(edit.apply_to(&existing).status, ReservationStatus::DueOut);
    }

    #[test]
    fn test_edit_is_empty() {
        assert!(ReservationEdit::default().is_empty());
        let edit = ReservationEdit {
            email: Some("a@b.c".to_string()),
            ..Default::default()
        };
        assert!(!edit.is_empty());
    }
}
