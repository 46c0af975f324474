//! Schema types for stayboard
//!
//! JSON field names follow the camelCase shape of the reservation data file.

mod config;
mod record;
mod reservation;

pub use config::Config;
pub use record::ReservationRecord;
pub use reservation::{Reservation, ReservationStatus};
