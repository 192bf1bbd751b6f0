//! # Run Log
//!
//! The append-only measurement log. Every recorded message becomes one
//! `<timestamp> - <message>` line. The [`LogSink`] trait keeps the harnesses
//! independent of the destination: the binary writes through a [`FileSink`],
//! tests capture lines with a [`MemorySink`].

mod error;

pub use error::{LogError, LogResult};

use chrono::Local;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Timestamp format used for every log line.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Destination for run log lines.
pub trait LogSink {
    /// Record one message as a timestamped line.
    fn record(&mut self, message: &str) -> LogResult<()>;

    /// Flush buffered output.
    fn flush(&mut self) -> LogResult<()>;
}

/// Format a message into its final log line.
fn format_line(message: &str) -> String {
    format!("{} - {}", Local::now().format(TIMESTAMP_FORMAT), message)
}

/// File-backed sink, append mode.
///
/// The file is opened once for the process lifetime and only ever appended
/// to; it is never re-read.
pub struct FileSink {
    writer: BufWriter<std::fs::File>,
}

impl FileSink {
    /// Open (creating if needed) the log file at `path` for appending.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> LogResult<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| LogError::Open {
                path: path.to_path_buf(),
                source: e,
            })?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }
}

impl LogSink for FileSink {
    fn record(&mut self, message: &str) -> LogResult<()> {
        writeln!(self.writer, "{}", format_line(message))?;
        Ok(())
    }

    fn flush(&mut self) -> LogResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        let _ = self.writer.flush();
    }
}

/// In-memory sink for tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Vec<String>,
}

impl MemorySink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded lines, timestamps included.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Whether any recorded line contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.contains(needle))
    }
}

impl LogSink for MemorySink {
    fn record(&mut self, message: &str) -> LogResult<()> {
        self.lines.push(format_line(message));
        Ok(())
    }

    fn flush(&mut self) -> LogResult<()> {
        Ok(())
    }
}
