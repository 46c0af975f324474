//! Board command - Print reservations grouped into status columns

use std::path::Path;

use crate::board::{group, Board, EMPTY_COLUMN_PLACEHOLDER};
use crate::errors::Result;

use super::{summary_line, to_json, BoardSession};

/// Print the board, all seven columns in fixed order
pub async fn run(cwd: Option<&Path>, json: bool) -> Result<()> {
    let session = BoardSession::open(cwd)?;
    let board = group(&session.store.list());

    let output = if json {
        to_json(&board)?
    } else {
        render(&board, &session.config.date_format)
    };
    println!("{}", output);
    Ok(())
}

/// Text rendering: one section per column, header with count
pub fn render(board: &Board, date_format: &str) -> String {
    let mut out = String::new();
    for column in board.columns() {
        out.push_str(&format!("{} ({})\n", column.status, column.len()));
        if column.is_empty() {
            out.push_str(&format!("  {}\n", EMPTY_COLUMN_PLACEHOLDER));
        }
        for reservation in &column.reservations {
            out.push_str(&format!("  {}\n", summary_line(reservation, date_format)));
        }
    }
    out.trim_end().to_string()
}
