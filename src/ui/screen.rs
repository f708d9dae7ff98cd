use ratatui::Frame;

use crate::app::{Snapshot, View};
use crate::ui::history_view::render_history;

/// A UI Screen boundary: responsible for rendering one view of a snapshot
pub trait Screen {
    fn render(&self, snap: &Snapshot, f: &mut Frame);
}

/// Timer screen - renders the snapshot widget
pub struct TimerScreen;

impl Screen for TimerScreen {
    fn render(&self, snap: &Snapshot, f: &mut Frame) {
        f.render_widget(snap, f.area());
    }
}

/// Full history screen - uses dedicated renderer
pub struct HistoryScreen;

impl Screen for HistoryScreen {
    fn render(&self, snap: &Snapshot, f: &mut Frame) {
        render_history(snap, f);
    }
}

/// Helper to construct the appropriate screen for the current view
pub fn current_screen(view: View) -> Box<dyn Screen> {
    match view {
        View::Timer => Box::new(TimerScreen),
        View::History => Box::new(HistoryScreen),
    }
}
