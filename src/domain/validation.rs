//! Validation rules for reservation fields and direct edits

use chrono::NaiveDate;

use crate::schemas::{Reservation, ReservationStatus};

/// Result of a validation check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether the validation passed
    pub valid: bool,

    /// Reason for failure (if valid is false)
    pub reason: Option<String>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        ValidationResult {
            valid: true,
            reason: None,
        }
    }

    /// Create a failed validation result
    pub fn failure(reason: impl Into<String>) -> Self {
        ValidationResult {
            valid: false,
            reason: Some(reason.into()),
        }
    }
}

/// Validate the guest name
pub fn validate_guest_name(guest_name: &str) -> ValidationResult {
    if guest_name.trim().is_empty() {
        return ValidationResult::failure("guest name is required");
    }
    ValidationResult::success()
}

/// Validate that check-out is strictly after check-in
pub fn validate_stay_dates(check_in: NaiveDate, check_out: NaiveDate) -> ValidationResult {
    if check_out <= check_in {
        return ValidationResult::failure(format!(
            "check-out date {} must be after check-in date {}",
            check_out, check_in
        ));
    }
    ValidationResult::success()
}

/// Validate that a new booking does not start before `today`.
///
/// Only creation checks this; edits may keep or set past dates.
pub fn validate_not_before(check_in: NaiveDate, today: NaiveDate) -> ValidationResult {
    if check_in < today {
        return ValidationResult::failure(format!(
            "check-in date {} is before today ({})",
            check_in, today
        ));
    }
    ValidationResult::success()
}

/// Validate a reservation before it enters the store via add or update
pub fn validate_reservation(reservation: &Reservation) -> ValidationResult {
    let name = validate_guest_name(&reservation.guest_name);
    if !name.valid {
        return name;
    }
    validate_stay_dates(reservation.check_in_date, reservation.check_out_date)
}

/// Whether the edit action is offered for a reservation in this status.
///
/// Delete is always offered; edit only before the guest has arrived.
pub fn is_editable(status: ReservationStatus) -> bool {
    matches!(status, ReservationStatus::Reserved | ReservationStatus::DueIn)
}

/// Status a newly created reservation starts in.
///
/// Arrivals booked for today go straight to `Due In`. This is a direct field
/// write on creation and does not consult the transition table.
pub fn initial_status_for(check_in: NaiveDate, today: NaiveDate) -> ReservationStatus {
    if check_in == today {
        ReservationStatus::DueIn
    } else {
        ReservationStatus::Reserved
    }
}
