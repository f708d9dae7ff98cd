use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::Snapshot;
use crate::ui::format::history_row;

/// Rows taken by everything on the history screen except the solves
pub const HISTORY_CHROME_ROWS: u16 = 3;

pub fn render_history(snap: &Snapshot, f: &mut Frame) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // solves
            Constraint::Length(1), // instructions
        ])
        .split(area);

    let Some(page) = &snap.history_page else {
        return;
    };

    let mut lines: Vec<Line> = page
        .rows
        .iter()
        .map(|row| {
            let style = if row.record.is_dnf() {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Green)
            };
            Line::styled(history_row(row), style)
        })
        .collect();

    if lines.is_empty() {
        lines.push(Line::styled(
            "No solves yet.",
            Style::default().fg(Color::Gray),
        ));
    }

    let position = if page.total > 0 {
        format!(" ({}/{})", page.offset + 1, page.total)
    } else {
        String::new()
    };

    let list = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("All Past Solves{position}")),
        )
        .alignment(Alignment::Center);
    f.render_widget(list, chunks[0]);

    let instructions = Paragraph::new("[up/down] scroll  [q/esc] back")
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::ITALIC),
        )
        .alignment(Alignment::Center);
    f.render_widget(instructions, chunks[1]);
}
