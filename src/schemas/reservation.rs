//! Reservation schema - The entity tracked on the board

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a reservation
///
/// Serialized by its display label ("Due In", "No Show", ...), which is also
/// the column key on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReservationStatus {
    /// Booked, arrival not yet due
    #[serde(rename = "Reserved")]
    Reserved,
    /// Arrival expected today
    #[serde(rename = "Due In")]
    DueIn,
    /// Guest is staying
    #[serde(rename = "In House")]
    InHouse,
    /// Departure expected today
    #[serde(rename = "Due Out")]
    DueOut,
    /// Stay closed
    #[serde(rename = "Checked Out")]
    CheckedOut,
    /// Booking withdrawn
    #[serde(rename = "Canceled")]
    Canceled,
    /// Guest never arrived
    #[serde(rename = "No Show")]
    NoShow,
}

impl ReservationStatus {
    /// The display label, which doubles as the board column key.
    pub fn label(&self) -> &'static str {
        match self {
            ReservationStatus::Reserved => "Reserved",
            ReservationStatus::DueIn => "Due In",
            ReservationStatus::InHouse => "In House",
            ReservationStatus::DueOut => "Due Out",
            ReservationStatus::CheckedOut => "Checked Out",
            ReservationStatus::Canceled => "Canceled",
            ReservationStatus::NoShow => "No Show",
        }
    }

    /// Exact match against a column key. No case folding.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Reserved" => Some(ReservationStatus::Reserved),
            "Due In" => Some(ReservationStatus::DueIn),
            "In House" => Some(ReservationStatus::InHouse),
            "Due Out" => Some(ReservationStatus::DueOut),
            "Checked Out" => Some(ReservationStatus::CheckedOut),
            "Canceled" => Some(ReservationStatus::Canceled),
            "No Show" => Some(ReservationStatus::NoShow),
            _ => None,
        }
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

impl std::str::FromStr for ReservationStatus {
    type Err = String;

    /// Lenient parse for command-line input: "due-in", "due_in" and
    /// "Due In" all resolve to the same status.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| if c == '-' || c == '_' { ' ' } else { c.to_ascii_lowercase() })
            .collect();

        match normalized.as_str() {
            "reserved" => Ok(ReservationStatus::Reserved),
            "due in" => Ok(ReservationStatus::DueIn),
            "in house" => Ok(ReservationStatus::InHouse),
            "due out" => Ok(ReservationStatus::DueOut),
            "checked out" => Ok(ReservationStatus::CheckedOut),
            "canceled" | "cancelled" => Ok(ReservationStatus::Canceled),
            "no show" => Ok(ReservationStatus::NoShow),
            _ => Err(format!("Unknown reservation status: {}", s)),
        }
    }
}

/// A property reservation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    /// Unique identifier, `res-NNN`
    pub id: String,

    /// Guest name, never empty for stored reservations
    pub guest_name: String,

    /// Arrival date
    pub check_in_date: NaiveDate,

    /// Departure date, strictly after arrival for stored reservations
    pub check_out_date: NaiveDate,

    /// Current lifecycle status
    pub status: ReservationStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Reservation {
    /// Create a reservation in the `Reserved` status with no optional fields
    pub fn new(
        id: impl Into<String>,
        guest_name: impl Into<String>,
        check_in_date: NaiveDate,
        check_out_date: NaiveDate,
    ) -> Self {
        Reservation {
            id: id.into(),
            guest_name: guest_name.into(),
            check_in_date,
            check_out_date,
            status: ReservationStatus::Reserved,
            room_number: None,
            notes: None,
            email: None,
        }
    }

    /// Number of nights between check-in and check-out
    pub fn nights(&self) -> i64 {
        (self.check_out_date - self.check_in_date).num_days()
    }

    // ===== BUILDER METHODS =====

    /// Return this reservation with the given status
    pub fn with_status(mut self, status: ReservationStatus) -> Self {
        self.status = status;
        self
    }

    /// Return this reservation with the given room number
    pub fn with_room_number(mut self, room_number: Option<String>) -> Self {
        self.room_number = room_number;
        self
    }

    /// Return this reservation with the given notes
    pub fn with_notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes;
        self
    }

    /// Return this reservation with the given email
    pub fn with_email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }
}
