use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Route tracing output to the log file.
///
/// The TUI owns stdout, so when the file cannot be opened logging is
/// dropped rather than written to the terminal.
pub fn init_tracing(level: &str, log_path: Option<PathBuf>) -> Option<PathBuf> {
    let env_filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    match log_path.and_then(|p| open_log_file(&p).map(|f| (p, f))) {
        Some((path, file)) => {
            let initialized = tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .with(env_filter)
                .try_init()
                .is_ok();
            if initialized {
                tracing::info!(path = %path.display(), "logging initialized");
            }
            Some(path)
        }
        None => {
            let _ = tracing_subscriber::registry().with(env_filter).try_init();
            None
        }
    }
}

fn open_log_file(path: &Path) -> Option<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}
