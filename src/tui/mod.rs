//! Terminal User Interface (TUI) module
//!
//! Interactive reservation board: status columns, keyboard drag and drop,
//! and a loading screen while the initial load runs.

pub mod events;
pub mod runner;
pub mod state;
pub mod widgets;


// Re-export commonly used types
pub use events::{map_key, BoardCommand};
pub use runner::TuiRunner;
pub use state::{Cursor, LoadState, TuiState};
