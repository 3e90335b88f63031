//! Audit logging for tokenizer runs.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

/// An audit log entry describing one run.
#[derive(Debug, Serialize)]
pub struct AuditEntry {
    /// Timestamp of the run.
    pub timestamp: DateTime<Utc>,
    /// Summary of the input text (truncated).
    pub source: String,
    /// Number of tokens produced by splitting.
    pub split_count: usize,
    /// Number of tokens remaining after filtering.
    pub kept_count: usize,
}

impl AuditEntry {
    /// Create a new audit entry for a run.
    pub fn new(source: &str, split_count: usize, kept_count: usize) -> Self {
        Self {
            timestamp: Utc::now(),
            source: truncate_string(source, 200),
            split_count,
            kept_count,
        }
    }
}

fn truncate_string(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let mut end = max_len - 3;
        // Back up to a char boundary.
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}

/// Audit logger for writing entries to a file.
pub struct AuditLogger {
    file: File,
}

impl AuditLogger {
    /// Open or create an audit log file.
    pub fn open(path: &Path) -> std::io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        Ok(Self { file })
    }

    /// Write an audit entry to the log.
    pub fn log(&mut self, entry: &AuditEntry) -> std::io::Result<()> {
        let json = serde_json::to_string(entry)?;
        writeln!(self.file, "{}", json)?;
        self.file.flush()
    }

    /// Log a single run.
    pub fn log_run(
        &mut self,
        source: &str,
        split_count: usize,
        kept_count: usize,
    ) -> std::io::Result<()> {
        let entry = AuditEntry::new(source, split_count, kept_count);
        self.log(&entry)
    }
}
