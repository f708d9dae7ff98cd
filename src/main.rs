use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
};

use solve_timer::{
    app::{App, Command},
    app_dirs::AppDirs,
    clock::{Clock, SystemClock},
    config::{Config, ConfigStore, FileConfigStore},
    history::FileHistoryStore,
    logging::init_tracing,
    runtime::{CrosstermEventSource, EventSource, FixedTicker, Runner, Ticker, TimerEvent},
    ui,
};

/// speedcubing timer with inspection, penalties and solve history
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A terminal speedcubing timer. Space starts a 15 second inspection, then the solve, then stops it; overrunning inspection earns +2 or DNF. Solves are kept across sessions."
)]
pub struct Cli {}

fn main() -> Result<(), Box<dyn Error>> {
    let _cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    // only the log level is taken before logging exists; problems with the
    // file are reported by `resolve` once it does
    let config_store = FileConfigStore::new();
    let loaded = config_store.read();
    let log_level = match &loaded {
        Ok(cfg) => cfg.log_level.clone(),
        Err(_) => Config::default().log_level,
    };
    init_tracing(&log_level, AppDirs::log_path());
    tracing::info!(path = %config_store.path().display(), "using config file");
    let config = config_store.resolve(loaded);

    let store = FileHistoryStore::new();
    tracing::info!(path = %store.path().display(), "using history file");
    let mut app = App::new(&config, Box::new(store), SystemClock);

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let runner = Runner::new(
        CrosstermEventSource::new(),
        FixedTicker::new(config.tick_rate()),
    );
    let result = start_tui(&mut terminal, &mut app, runner);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn start_tui<B: Backend, C: Clock, E: EventSource, T: Ticker>(
    terminal: &mut Terminal<B>,
    app: &mut App<C>,
    mut runner: Runner<E, T>,
) -> Result<(), Box<dyn Error>> {
    draw(terminal, app)?;

    while !app.should_quit() {
        match runner.step(app.needs_tick()) {
            TimerEvent::Tick => {
                if app.on_tick() {
                    draw(terminal, app)?;
                }
            }
            TimerEvent::Resize => draw(terminal, app)?,
            TimerEvent::Key(key) => {
                app.on_key(key);
                draw(terminal, app)?;
            }
            TimerEvent::Closed => {
                tracing::warn!("input closed, shutting down");
                app.handle(Command::Quit);
            }
        }
    }

    Ok(())
}

fn draw<B: Backend, C: Clock>(terminal: &mut Terminal<B>, app: &App<C>) -> io::Result<()> {
    let rows = ui::history_rows(terminal.size()?.height);
    let snap = app.snapshot(rows);
    terminal.draw(|f| ui::draw(&snap, f))?;
    Ok(())
}
