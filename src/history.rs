use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::app_dirs::AppDirs;
use crate::error::HistoryError;
use crate::solve::SolveRecord;

/// Solve history, most recent first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    records: Vec<SolveRecord>,
}

impl History {
    pub fn new(records: Vec<SolveRecord>) -> Self {
        Self { records }
    }

    pub fn append(&mut self, record: SolveRecord) {
        self.records.insert(0, record);
    }

    pub fn records(&self) -> &[SolveRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The `n` most recent solves
    pub fn recent(&self, n: usize) -> &[SolveRecord] {
        &self.records[..n.min(self.records.len())]
    }

    /// Keep a scroll offset on a real record (or 0 when empty)
    pub fn clamp_offset(&self, offset: usize) -> usize {
        offset.min(self.records.len().saturating_sub(1))
    }

    /// `[offset, offset + count)` clamped to the records that exist
    pub fn page(&self, offset: usize, count: usize) -> &[SolveRecord] {
        let start = offset.min(self.records.len());
        let end = start.saturating_add(count).min(self.records.len());
        &self.records[start..end]
    }
}

/// Persistence boundary for solve history
pub trait HistoryStore {
    /// Never fails: anything unreadable is an empty history
    fn load(&self) -> Vec<SolveRecord>;
    fn save(&self, records: &[SolveRecord]) -> Result<(), HistoryError>;
}

/// JSON history file. A `legacy_path` is only read, and only while the
/// main file does not exist yet; the first save moves history over.
#[derive(Debug, Clone)]
pub struct FileHistoryStore {
    path: PathBuf,
    legacy_path: Option<PathBuf>,
}

impl FileHistoryStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            path: AppDirs::history_path(),
            legacy_path: AppDirs::legacy_history_path(),
        }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
            legacy_path: None,
        }
    }

    pub fn with_legacy_path<P: AsRef<Path>>(mut self, p: P) -> Self {
        self.legacy_path = Some(p.as_ref().to_path_buf());
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The file `load` will read
    pub fn source_path(&self) -> &Path {
        match &self.legacy_path {
            Some(legacy) if !self.path.exists() && legacy.exists() => legacy,
            _ => &self.path,
        }
    }
}

fn read_records(path: &Path) -> Vec<SolveRecord> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Vec::new(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "could not read history");
            return Vec::new();
        }
    };

    // older versions wrote `null` for an empty list
    match serde_json::from_slice::<Option<Vec<SolveRecord>>>(&bytes) {
        Ok(records) => records.unwrap_or_default(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring malformed history");
            Vec::new()
        }
    }
}

impl Default for FileHistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryStore for FileHistoryStore {
    fn load(&self) -> Vec<SolveRecord> {
        let source = self.source_path();
        if source != self.path.as_path() {
            tracing::info!(path = %source.display(), "reading history left by an older version");
        }
        read_records(source)
    }

    fn save(&self, records: &[SolveRecord]) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let data = serde_json::to_vec_pretty(records)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}
