use std::backtrace::{Backtrace, BacktraceStatus};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::error::{ConditionKind, SinkError, TransferError};

const RECORD_SEPARATOR: &str =
    "_ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _";

/// Destination for classified error occurrences
///
/// The driver hands every condition it handles to a sink after reporting it
/// on the console. Implementations decide where the record ends up:
///
/// - [`FileErrorLog`] appends a plain-text record to a file on disk
/// - [`MemorySink`] keeps records in memory, for tests
///
/// # Example
///
/// ```
/// use funds_transfer::error::TransferError;
/// use funds_transfer::logger::{ErrorSink, MemorySink};
///
/// let mut sink = MemorySink::new();
/// let condition = TransferError::NullSourceAccount {
///     cause: "source account reference is absent",
/// };
///
/// sink.record(&condition).unwrap();
/// assert_eq!(sink.records().len(), 1);
/// ```
pub trait ErrorSink {
    /// Record one condition
    ///
    /// Returns `Err` if the record could not be stored. Callers treat logging
    /// as best-effort and do not retry.
    fn record(&mut self, condition: &TransferError) -> Result<(), SinkError>;
}

/// One logged condition
#[derive(Debug)]
pub struct ErrorRecord {
    pub created_at: DateTime<Local>,
    pub kind: ConditionKind,
    pub message: String,
    pub trace: Option<String>,
}

impl ErrorRecord {
    /// Build a record stamped with the current local time
    ///
    /// The trace is only present when backtrace capture is enabled
    /// (`RUST_BACKTRACE` / `RUST_LIB_BACKTRACE`). Conditions are plain values
    /// and carry no backtrace of their own, so the trace is the call stack of
    /// the site that records the condition, not of the check that raised it.
    pub fn new(condition: &TransferError) -> Self {
        let backtrace = Backtrace::capture();
        let trace = match backtrace.status() {
            BacktraceStatus::Captured => Some(backtrace.to_string()),
            _ => None,
        };

        Self {
            created_at: Local::now(),
            kind: condition.kind(),
            message: condition.to_string(),
            trace,
        }
    }

    /// Render the record as plain text
    ///
    /// Fields are in fixed order: date, kind, trace, message, separator line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "Creation date: {}\n",
            self.created_at.format("%Y-%m-%d %H:%M:%S")
        ));
        out.push_str(&format!("Condition kind: {}\n", self.kind));
        out.push_str("Trace:\n");
        match &self.trace {
            Some(trace) => {
                out.push_str(trace.trim_end());
                out.push('\n');
            }
            None => out.push_str("unavailable\n"),
        }
        out.push_str("Message:\n");
        out.push_str(&self.message);
        out.push('\n');
        out.push_str(RECORD_SEPARATOR);
        out.push('\n');
        out
    }
}

/// Appends records to a log file
///
/// The file is opened (created if missing), appended to and closed within a
/// single `record` call, so nothing is held open between conditions.
#[derive(Debug, Clone)]
pub struct FileErrorLog {
    path: PathBuf,
}

impl FileErrorLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> SinkError {
        SinkError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl ErrorSink for FileErrorLog {
    fn record(&mut self, condition: &TransferError) -> Result<(), SinkError> {
        let record = ErrorRecord::new(condition);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;

        file.write_all(record.render().as_bytes())
            .map_err(|e| self.io_error(e))?;

        Ok(())
    }
}

/// Keeps records in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Vec<ErrorRecord>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[ErrorRecord] {
        &self.records
    }

    pub fn kinds(&self) -> Vec<ConditionKind> {
        self.records.iter().map(|r| r.kind).collect()
    }
}

impl ErrorSink for MemorySink {
    fn record(&mut self, condition: &TransferError) -> Result<(), SinkError> {
        self.records.push(ErrorRecord::new(condition));
        Ok(())
    }
}
