//! Raw reservation records as delivered by the data file loader

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::StayboardError;

use super::{Reservation, ReservationStatus};

/// Unvalidated reservation shape: every field is a plain string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRecord {
    pub id: String,
    pub guest_name: String,
    pub check_in_date: String,
    pub check_out_date: String,
    pub status: String,
    #[serde(default)]
    pub room_number: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl TryFrom<ReservationRecord> for Reservation {
    type Error = StayboardError;

    fn try_from(record: ReservationRecord) -> Result<Self, Self::Error> {
        let check_in_date = parse_record_date(&record.id, "checkInDate", &record.check_in_date)?;
        let check_out_date = parse_record_date(&record.id, "checkOutDate", &record.check_out_date)?;
        let status = ReservationStatus::from_label(record.status.trim()).ok_or_else(|| {
            StayboardError::InvalidRecord(format!(
                "{}: unknown status '{}'",
                record.id, record.status
            ))
        })?;

        Ok(Reservation {
            id: record.id,
            guest_name: record.guest_name,
            check_in_date,
            check_out_date,
            status,
            room_number: non_empty(record.room_number),
            notes: non_empty(record.notes),
            email: non_empty(record.email),
        })
    }
}

impl From<&Reservation> for ReservationRecord {
    fn from(reservation: &Reservation) -> Self {
        ReservationRecord {
            id: reservation.id.clone(),
            guest_name: reservation.guest_name.clone(),
            check_in_date: reservation.check_in_date.format("%Y-%m-%d").to_string(),
            check_out_date: reservation.check_out_date.format("%Y-%m-%d").to_string(),
            status: reservation.status.label().to_string(),
            room_number: reservation.room_number.clone(),
            notes: reservation.notes.clone(),
            email: reservation.email.clone(),
        }
    }
}

fn parse_record_date(id: &str, field: &str, value: &str) -> Result<NaiveDate, StayboardError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|e| {
        StayboardError::InvalidRecord(format!("{}: {} '{}' is not a date: {}", id, field, value, e))
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
