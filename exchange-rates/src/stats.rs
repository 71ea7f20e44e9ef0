//! Stats log sinks.
//!
//! Every conversion attempt, successful or not, becomes one line.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use rates_types::{ConversionRecord, StatsError, StatsSink};

/// Where the stats log goes when nothing else is configured.
pub const DEFAULT_STATS_PATH: &str = "stats.txt";

/// Appends records to a UTF-8 text file.
///
/// The file is opened in append mode per record and the whole line is
/// written with one `write_all`, so concurrent writers interleave by line.
#[derive(Debug, Clone)]
pub struct FileStatsLog {
    path: PathBuf,
}

impl FileStatsLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileStatsLog {
    fn default() -> Self {
        Self::new(DEFAULT_STATS_PATH)
    }
}

impl StatsSink for FileStatsLog {
    fn record(&self, record: &ConversionRecord) -> Result<(), StatsError> {
        let line = format!("{}\n", record);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }
}

/// In-memory sink. Clones share the same lines.
#[derive(Debug, Clone, Default)]
pub struct MemoryStatsLog {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryStatsLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the lines recorded so far, without trailing newlines.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().map(|lines| lines.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StatsSink for MemoryStatsLog {
    fn record(&self, record: &ConversionRecord) -> Result<(), StatsError> {
        self.lines
            .lock()
            .map_err(|_| StatsError::Unavailable("memory stats log lock poisoned".into()))?
            .push(record.to_string());
        Ok(())
    }
}
