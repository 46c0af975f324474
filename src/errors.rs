//! Error types for stayboard
//!
//! Each error type has a corresponding error code for programmatic handling.

use thiserror::Error;

use crate::schemas::ReservationStatus;

/// Result type alias for stayboard operations
pub type Result<T> = std::result::Result<T, StayboardError>;

/// Main error type for all stayboard operations
#[derive(Debug, Error)]
pub enum StayboardError {
    /// No .stayboard directory found walking up from the working directory
    #[error("Board not found: {0}")]
    BoardNotFound(String),

    /// Invalid JSON format
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A reservation failed field validation on add or update
    #[error("Invalid reservation: {0}")]
    InvalidReservation(String),

    /// A raw loader record could not be mapped into a reservation
    #[error("Invalid reservation record: {0}")]
    InvalidRecord(String),

    /// No reservation with the given id
    #[error("Reservation not found: {0}")]
    NotFound(String),

    /// The id counter has no suffix left to issue
    #[error("No reservation ids left for prefix {0}")]
    IdsExhausted(String),

    /// A requested move is not in the transition table
    #[error("Cannot move from {from} to {to}")]
    IllegalTransition {
        from: ReservationStatus,
        to: ReservationStatus,
    },

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error with context
    #[error("{context}: {message}")]
    Wrapped { context: String, message: String },
}

impl StayboardError {
    /// Get the error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            StayboardError::BoardNotFound(_) => "BOARD_NOT_FOUND",
            StayboardError::InvalidJson(_) => "INVALID_JSON",
            StayboardError::FileNotFound(_) => "FILE_NOT_FOUND",
            StayboardError::ConfigError(_) => "CONFIG_ERROR",
            StayboardError::InvalidReservation(_) => "INVALID_RESERVATION",
            StayboardError::InvalidRecord(_) => "INVALID_RECORD",
            StayboardError::NotFound(_) => "NOT_FOUND",
            StayboardError::IdsExhausted(_) => "IDS_EXHAUSTED",
            StayboardError::IllegalTransition { .. } => "ILLEGAL_TRANSITION",
            StayboardError::Io(_) => "IO_ERROR",
            StayboardError::Wrapped { .. } => "WRAPPED_ERROR",
        }
    }

    /// Wrap an error with additional context
    pub fn wrap<E: std::fmt::Display>(error: E, context: impl Into<String>) -> Self {
        StayboardError::Wrapped {
            context: context.into(),
            message: error.to_string(),
        }
    }
}

/// Convert an error to an appropriate exit code
pub fn to_exit_code(error: &StayboardError) -> i32 {
    match error {
        // A rejected move is an expected outcome, distinguishable by scripts
        StayboardError::IllegalTransition { .. } => 2,
        _ => 1,
    }
}
