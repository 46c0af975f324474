//! Stayboard - A front-desk board for moving reservations through their stay
//!
//! This library provides the core functionality for the stayboard CLI, including:
//! - Schema definitions for reservations, raw records, and config
//! - Domain logic for statuses, the transition table, and form rules
//! - The in-memory reservation store with immutable snapshots
//! - Board grouping and the drag interaction controller
//! - File system utilities for reading/writing JSON and the initial load
//! - The interactive terminal board

pub mod board;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fs;
pub mod schemas;
pub mod store;
pub mod tui;

// Re-export commonly used types
pub use errors::{Result, StayboardError};
pub use schemas::{Config, Reservation, ReservationStatus};
pub use store::ReservationStore;
