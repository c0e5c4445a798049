use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use dietplan_mealplan::HistoryEntry;
use serde_json::Value;
use thiserror::Error;
use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("history log {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode history entry: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Today's date as stored in history entries (`YYYY-MM-DD`, UTC)
pub fn today() -> String {
    let date = OffsetDateTime::now_utc().date();
    date.format(DATE_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}

/// Plan history kept as one JSON object per line
#[derive(Debug, Clone)]
pub struct HistoryLog {
    path: PathBuf,
}

impl HistoryLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> HistoryError {
        HistoryError::Io {
            path: self.path.clone(),
            source,
        }
    }

    pub fn append(&self, entry: &HistoryEntry) -> Result<(), HistoryError> {
        let line = serde_json::to_string(entry)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;

        writeln!(file, "{line}").map_err(|e| self.io_error(e))?;

        tracing::debug!(path = %self.path.display(), date = %entry.date, "Appended history entry");

        Ok(())
    }

    /// Raw entries, oldest first. A missing log is an empty history; lines
    /// that are not JSON are skipped.
    pub fn read_raw(&self) -> Result<Vec<Value>, HistoryError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.io_error(e)),
        };

        let mut entries = Vec::new();
        for (number, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str::<Value>(line) {
                Ok(value) => entries.push(value),
                Err(e) => {
                    tracing::warn!(line = number + 1, error = %e, "Skipping unreadable history line")
                }
            }
        }

        Ok(entries)
    }

    /// Entries that decode as a full [`HistoryEntry`], oldest first
    pub fn entries(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        Ok(self
            .read_raw()?
            .into_iter()
            .filter_map(|value| serde_json::from_value(value).ok())
            .collect())
    }
}
