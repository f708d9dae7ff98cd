use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::clock::Clock;
use crate::config::Config;
use crate::history::{History, HistoryStore};
use crate::penalty::Penalty;
use crate::solve::SolveRecord;
use crate::timer::{Phase, Timer};

/// Which screen the user is looking at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Timer,
    History,
}

/// Logical input commands, decoupled from concrete keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Advance,
    Reset,
    ViewHistory,
    ExitHistoryView,
    ScrollUp,
    ScrollDown,
    Quit,
}

impl Command {
    /// Map a key press to a command for the given view. Unknown keys map to None.
    pub fn from_key(key: KeyEvent, view: View) -> Option<Self> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(Command::Quit),
                _ => None,
            };
        }

        match view {
            View::Timer => match key.code {
                KeyCode::Char(' ') => Some(Command::Advance),
                KeyCode::Char('r') => Some(Command::Reset),
                KeyCode::Char('v') => Some(Command::ViewHistory),
                KeyCode::Char('q') => Some(Command::Quit),
                _ => None,
            },
            View::History => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => Some(Command::ExitHistoryView),
                KeyCode::Up | KeyCode::Char('k') => Some(Command::ScrollUp),
                KeyCode::Down | KeyCode::Char('j') => Some(Command::ScrollDown),
                _ => None,
            },
        }
    }
}

/// A numbered history row; `number` is 1-based with 1 the latest solve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberedSolve {
    pub number: usize,
    pub record: SolveRecord,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryPage {
    pub offset: usize,
    pub total: usize,
    pub rows: Vec<NumberedSolve>,
}

/// Immutable view of the session handed to the renderer
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub phase: Phase,
    pub elapsed: Duration,
    pub countdown: Option<u64>,
    pub penalty: Penalty,
    pub last_solve: Option<SolveRecord>,
    pub inspection: bool,
    pub recent: Vec<NumberedSolve>,
    pub history_page: Option<HistoryPage>,
}

impl Snapshot {
    pub fn view(&self) -> View {
        if self.history_page.is_some() {
            View::History
        } else {
            View::Timer
        }
    }
}

fn numbered(records: &[SolveRecord], first_index: usize) -> Vec<NumberedSolve> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| NumberedSolve {
            number: first_index + i + 1,
            record: *record,
        })
        .collect()
}

/// Owns the whole session: timer, history and where it is persisted
pub struct App<C: Clock> {
    clock: C,
    timer: Timer,
    history: History,
    store: Box<dyn HistoryStore>,
    view: View,
    scroll_offset: usize,
    last_solve: Option<SolveRecord>,
    recent_count: usize,
    should_quit: bool,
}

impl<C: Clock> App<C> {
    pub fn new(config: &Config, store: Box<dyn HistoryStore>, clock: C) -> Self {
        let history = History::new(store.load());
        tracing::info!(solves = history.len(), "history loaded");
        Self {
            clock,
            timer: Timer::new(config.inspection),
            history,
            store,
            view: View::Timer,
            scroll_offset: 0,
            last_solve: None,
            recent_count: config.recent_solves,
            should_quit: false,
        }
    }

    pub fn timer(&self) -> &Timer {
        &self.timer
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn last_solve(&self) -> Option<SolveRecord> {
        self.last_solve
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn needs_tick(&self) -> bool {
        self.timer.needs_tick()
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if let Some(cmd) = Command::from_key(key, self.view) {
            self.handle(cmd);
        }
    }

    pub fn handle(&mut self, cmd: Command) {
        match cmd {
            Command::Advance => {
                if self.view != View::Timer {
                    return;
                }
                let now = self.clock.now();
                self.last_solve = None;
                match self.timer.advance(now) {
                    Some(record) => self.finish_solve(record),
                    None => tracing::debug!(phase = %self.timer.phase(), "advanced"),
                }
            }
            Command::Reset => {
                self.timer.reset();
                self.last_solve = None;
            }
            Command::ViewHistory => {
                if !self.history.is_empty() {
                    self.view = View::History;
                }
            }
            Command::ExitHistoryView => {
                self.view = View::Timer;
                self.scroll_offset = 0;
            }
            Command::ScrollUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
            }
            Command::ScrollDown => {
                self.scroll_offset = self.history.clamp_offset(self.scroll_offset + 1);
            }
            Command::Quit => {
                self.persist();
                self.should_quit = true;
            }
        }
    }

    /// Refresh the live timer. Returns true while more ticks are wanted.
    pub fn on_tick(&mut self) -> bool {
        let now = self.clock.now();
        self.timer.tick(now)
    }

    /// Snapshot for rendering; `page_rows` is how many history rows fit.
    pub fn snapshot(&self, page_rows: usize) -> Snapshot {
        let history_page = match self.view {
            View::History => Some(HistoryPage {
                offset: self.scroll_offset,
                total: self.history.len(),
                rows: numbered(
                    self.history.page(self.scroll_offset, page_rows),
                    self.scroll_offset,
                ),
            }),
            View::Timer => None,
        };

        Snapshot {
            phase: self.timer.phase(),
            elapsed: self.timer.elapsed(),
            countdown: self.timer.countdown(),
            penalty: self.timer.pending_penalty(),
            last_solve: self.last_solve,
            inspection: self.timer.inspection_enabled(),
            recent: numbered(self.history.recent(self.recent_count), 0),
            history_page,
        }
    }

    fn finish_solve(&mut self, record: SolveRecord) {
        tracing::debug!(time = record.time, penalty = %record.penalty, "solve finished");
        self.history.append(record);
        self.last_solve = Some(record);
        self.persist();
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(self.history.records()) {
            tracing::warn!(error = %e, "could not save history");
        }
    }
}
