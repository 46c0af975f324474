//! CLI module for stayboard
//!
//! Provides the command-line interface using clap.

pub mod commands;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::schemas::ReservationStatus;

/// Stayboard - A front-desk board for moving reservations through their stay
#[derive(Parser, Debug)]
#[command(name = "stayboard")]
#[command(version)]
#[command(about = "A front-desk board for moving reservations through their stay")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress info-level output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Preview changes without writing the data file
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Override the working directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a .stayboard directory with default config and no reservations
    Init {
        /// Overwrite an existing .stayboard setup
        #[arg(long)]
        force: bool,
    },

    /// Print the board grouped into status columns
    Board {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List reservations with optional filtering
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Filter by status (reserved, due-in, in-house, due-out, checked-out, canceled, no-show)
        #[arg(long)]
        status: Option<ReservationStatus>,
    },

    /// Show details of a specific reservation
    Show {
        /// Reservation ID
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a reservation
    Add {
        /// Guest name
        #[arg(long)]
        guest: String,

        /// Check-in date (YYYY-MM-DD)
        #[arg(long)]
        check_in: NaiveDate,

        /// Check-out date (YYYY-MM-DD)
        #[arg(long)]
        check_out: NaiveDate,

        /// Room number
        #[arg(long)]
        room: Option<String>,

        /// Free-text notes
        #[arg(long)]
        notes: Option<String>,

        /// Guest email
        #[arg(long)]
        email: Option<String>,
    },

    /// Edit a reservation that has not checked in yet
    Edit {
        /// Reservation ID
        id: String,

        /// Guest name
        #[arg(long)]
        guest: Option<String>,

        /// Check-in date (YYYY-MM-DD)
        #[arg(long)]
        check_in: Option<NaiveDate>,

        /// Check-out date (YYYY-MM-DD)
        #[arg(long)]
        check_out: Option<NaiveDate>,

        /// Room number (empty string clears it)
        #[arg(long)]
        room: Option<String>,

        /// Free-text notes (empty string clears them)
        #[arg(long)]
        notes: Option<String>,

        /// Guest email (empty string clears it)
        #[arg(long)]
        email: Option<String>,

        /// Set the status directly, bypassing the move rules
        #[arg(long)]
        status: Option<ReservationStatus>,
    },

    /// Delete a reservation
    Delete {
        /// Reservation ID
        id: String,
    },

    /// Drag a reservation onto a column or another reservation's card
    Move {
        /// Reservation ID
        id: String,

        /// Column (e.g. "Due In", due-in) or reservation ID to drop on
        target: String,
    },

    /// Open the interactive board
    Tui,
}
