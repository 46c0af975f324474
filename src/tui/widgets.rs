//! TUI widget rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::board::{column_color, Column, NoticeLevel, EMPTY_COLUMN_PLACEHOLDER};
use crate::schemas::{Reservation, ReservationStatus};
use crate::tui::state::TuiState;

const FOOTER_HEIGHT: u16 = 4;

/// Render the whole screen
pub fn render(f: &mut Frame, state: &TuiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(FOOTER_HEIGHT)])
        .split(f.area());

    if state.is_loading() {
        render_loading(f, chunks[0]);
    } else {
        render_columns(f, chunks[0], state);
    }
    render_footer(f, chunks[1], state);
}

/// Placeholder shown until the initial load completes
pub fn render_loading(f: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new("Loading reservations...")
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(paragraph, area);
}

/// Seven columns side by side, in board order
pub fn render_columns(f: &mut Frame, area: Rect, state: &TuiState) {
    let columns = state.board().columns();
    let count = columns.len() as u32;
    let areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(columns.iter().map(|_| Constraint::Ratio(1, count)))
        .split(area);

    for (index, column) in columns.iter().enumerate() {
        render_column(f, areas[index], state, index, column);
    }
}

fn render_column(f: &mut Frame, area: Rect, state: &TuiState, index: usize, column: &Column) {
    let color = status_color(column.status);
    let focused = state.cursor.column == index;
    let header_hovered = focused && state.cursor.row.is_none();

    let mut title_style = Style::default().fg(color).add_modifier(Modifier::BOLD);
    if header_hovered {
        title_style = title_style.add_modifier(Modifier::REVERSED);
    }
    let border_style = if focused {
        Style::default().fg(color)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(
            format!("{} ({})", column.status, column.len()),
            title_style,
        ));

    if column.is_empty() {
        let placeholder = Paragraph::new(Span::styled(
            EMPTY_COLUMN_PLACEHOLDER,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))
        .alignment(Alignment::Center)
        .block(block);
        f.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = column
        .reservations
        .iter()
        .enumerate()
        .map(|(row, reservation)| {
            let selected = focused && state.cursor.row == Some(row);
            let dragged = state.dragged_id() == Some(reservation.id.as_str());
            card(reservation, &state.date_format, selected, dragged)
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

/// One card: guest, stay dates, then room and notes when present
fn card(reservation: &Reservation, date_format: &str, selected: bool, dragged: bool) -> ListItem<'static> {
    let marker = if dragged { "» " } else { "" };
    let mut lines = vec![
        Line::from(Span::styled(
            format!("{}{}", marker, reservation.guest_name),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "{} - {}",
            reservation.check_in_date.format(date_format),
            reservation.check_out_date.format(date_format)
        )),
    ];
    if let Some(room) = &reservation.room_number {
        lines.push(Line::from(format!("Room {}", room)));
    }
    if let Some(notes) = &reservation.notes {
        lines.push(Line::from(Span::styled(
            notes.clone(),
            Style::default().fg(Color::Gray),
        )));
    }
    lines.push(Line::from(""));

    let mut style = Style::default();
    if selected {
        style = style.add_modifier(Modifier::REVERSED);
    }
    if dragged {
        style = style.fg(Color::Yellow);
    }
    ListItem::new(Text::from(lines)).style(style)
}

/// Latest notice or drag status, then key hints
pub fn render_footer(f: &mut Frame, area: Rect, state: &TuiState) {
    let status_line = if let Some(id) = state.dragged_id() {
        Line::from(Span::styled(
            format!("Moving {} to {}", id, state.hovered_target()),
            Style::default().fg(Color::Yellow),
        ))
    } else if let Some(notice) = &state.notice {
        let color = match notice.level {
            NoticeLevel::Success => Color::Green,
            NoticeLevel::Error => Color::Red,
        };
        Line::from(Span::styled(notice.message.clone(), Style::default().fg(color)))
    } else {
        Line::from(format!("{} reservations", state.board().total()))
    };

    let keys = if state.dragged_id().is_some() {
        "[←→↑↓] target  [enter] drop  [esc] cancel  [q] quit"
    } else if state.selected_is_terminal() {
        "[←→↑↓/hjkl] move  (no moves left)  [d] delete  [q] quit"
    } else {
        "[←→↑↓/hjkl] move  [space] pick up  [d] delete  [q] quit"
    };

    let paragraph = Paragraph::new(Text::from(vec![
        status_line,
        Line::from(Span::styled(keys, Style::default().fg(Color::DarkGray))),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title("Stayboard"),
    );
    f.render_widget(paragraph, area);
}

/// Terminal color for a status column
pub fn status_color(status: ReservationStatus) -> Color {
    let (r, g, b) = column_color(status);
    Color::Rgb(r, g, b)
}
