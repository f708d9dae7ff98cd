pub mod format;
pub mod history_view;
pub mod screen;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
    Frame,
};

use crate::{
    app::Snapshot,
    penalty::Penalty,
    timer::Phase,
    ui::{
        format::{help_line, recent_row, timer_label},
        history_view::HISTORY_CHROME_ROWS,
        screen::current_screen,
    },
};

const HORIZONTAL_MARGIN: u16 = 5;

/// How many history rows fit on a terminal of the given height
pub fn history_rows(height: u16) -> usize {
    height.saturating_sub(HISTORY_CHROME_ROWS).max(1) as usize
}

pub fn draw(snap: &Snapshot, f: &mut Frame) {
    current_screen(snap.view()).render(snap, f);
}

impl Widget for &Snapshot {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // styles
        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let timer_style = match (self.phase, self.penalty) {
            (Phase::Idle, _) if self.last_solve.is_some_and(|r| r.is_dnf()) => {
                bold_style.fg(Color::Red)
            }
            (Phase::Inspecting | Phase::Running, Penalty::Dnf) => bold_style.fg(Color::Red),
            (Phase::Inspecting | Phase::Running, Penalty::PlusTwo) => bold_style.fg(Color::Yellow),
            _ => bold_style.fg(Color::LightGreen),
        };
        let help_style = Style::default().fg(Color::Green);
        let dim_style = Style::default().add_modifier(Modifier::DIM);

        let mut lines = vec![
            Line::from(Span::styled(timer_label(self), timer_style)),
            Line::default(),
            Line::from(Span::styled(help_line(self.inspection), help_style)),
        ];

        if !self.recent.is_empty() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled("Past solves:", bold_style)));
            lines.extend(
                self.recent
                    .iter()
                    .map(|row| Line::from(Span::styled(recent_row(row), dim_style))),
            );
        }

        let content_height = (lines.len() as u16).min(area.height);
        let padding = area.height.saturating_sub(content_height) / 2;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN.min(area.width / 4))
            .constraints([
                Constraint::Length(padding),
                Constraint::Length(content_height),
                Constraint::Min(0),
            ])
            .split(area);

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(chunks[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{HistoryPage, NumberedSolve};
    use crate::solve::SolveRecord;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Duration;

    fn rendered(snap: &Snapshot) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(snap, f)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content.iter().map(|c| c.symbol()).collect()
    }

    fn rows(n: usize) -> Vec<NumberedSolve> {
        (0..n)
            .map(|i| NumberedSolve {
                number: i + 1,
                record: SolveRecord::new(10.0 + i as f64, Penalty::None),
            })
            .collect()
    }

    fn idle() -> Snapshot {
        Snapshot {
            phase: Phase::Idle,
            elapsed: Duration::ZERO,
            countdown: None,
            penalty: Penalty::None,
            last_solve: None,
            inspection: true,
            recent: rows(2),
            history_page: None,
        }
    }

    #[test]
    fn timer_screen_shows_time_help_and_recent() {
        let content = rendered(&idle());
        assert!(content.contains("0.00000"));
        assert!(content.contains("[space] start/stop/next"));
        assert!(content.contains("Past solves:"));
        assert!(content.contains(" 2. 11.00000"));
    }

    #[test]
    fn inspection_screen_shows_countdown() {
        let snap = Snapshot {
            phase: Phase::Inspecting,
            countdown: Some(9),
            ..idle()
        };
        assert!(rendered(&snap).contains("Inspection:  9"));
    }

    #[test]
    fn history_screen_shows_page_and_position() {
        let snap = Snapshot {
            history_page: Some(HistoryPage {
                offset: 1,
                total: 3,
                rows: rows(3).into_iter().skip(1).collect(),
            }),
            ..idle()
        };
        let content = rendered(&snap);
        assert!(content.contains("All Past Solves (2/3)"));
        assert!(content.contains("  3. 12.00000"));
        assert!(content.contains("[q/esc] back"));
    }

    #[test]
    fn renders_in_a_tiny_terminal() {
        let backend = TestBackend::new(10, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(&idle(), f)).unwrap();
    }

    #[test]
    fn history_rows_never_zero() {
        assert_eq!(history_rows(24), 21);
        assert_eq!(history_rows(2), 1);
    }
}
