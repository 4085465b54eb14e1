//! Append-only record of completed generation runs.

use std::{
    fs::OpenOptions,
    io::{self, Write},
    path::{Path, PathBuf},
    time::Duration,
};

use chrono::{DateTime, Local};
use thiserror::Error;

use crate::report::time_convert;

const ENTRY_SEPARATOR: &str = "-------------------------------";

/// Errors raised while appending to the run log.
#[derive(Debug, Error)]
pub enum RunLogError {
    /// The log file could not be opened for appending.
    #[error("failed to open run log `{path}`: {source}")]
    Open {
        /// Log file path.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Writing the entry failed.
    #[error("failed to write run log `{path}`: {source}")]
    Write {
        /// Log file path.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
}

/// One completed run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunLogEntry {
    /// Wall-clock time the entry was created.
    pub timestamp: DateTime<Local>,
    /// Name of the written graph file.
    pub file_name: String,
    /// Vertex count of the generated graph.
    pub vertices: usize,
    /// Edge count of the generated graph.
    pub edges: usize,
    /// Generation and serialization time.
    pub elapsed: Duration,
}

impl RunLogEntry {
    /// Creates an entry stamped with the current local time.
    #[must_use]
    pub fn new(file_name: impl Into<String>, vertices: usize, edges: usize, elapsed: Duration) -> Self {
        Self {
            timestamp: Local::now(),
            file_name: file_name.into(),
            vertices,
            edges,
            elapsed,
        }
    }

    /// Writes the entry block, terminated by a separator line.
    ///
    /// # Errors
    /// Returns [`io::Error`] when the writer fails.
    ///
    /// # Examples
    /// ```
    /// use std::time::Duration;
    /// use kauwhata_cli::run_log::RunLogEntry;
    ///
    /// let entry = RunLogEntry::new("graph.gr", 10, 12, Duration::from_secs(2));
    /// let mut out = Vec::new();
    /// entry.render(&mut out)?;
    /// let text = String::from_utf8(out).expect("entries are utf-8");
    /// assert!(text.contains("Filename : graph.gr\nVertices : 10\nEdges : 12\n"));
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn render(&self, mut writer: impl Write) -> io::Result<()> {
        writeln!(writer, "{}", self.timestamp.format("%Y-%m-%d %H:%M:%S%.6f"))?;
        writeln!(writer, "Filename : {}", self.file_name)?;
        writeln!(writer, "Vertices : {}", self.vertices)?;
        writeln!(writer, "Edges : {}", self.edges)?;
        writeln!(writer, "Elapsed Time : {}", time_convert(self.elapsed))?;
        writeln!(writer, "{ENTRY_SEPARATOR}")
    }
}

/// Appends `entry` to the log at `path`, creating the file when missing.
///
/// # Errors
/// Returns [`RunLogError`] when the file cannot be opened or written.
pub fn append_run_log(path: &Path, entry: &RunLogEntry) -> Result<(), RunLogError> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| RunLogError::Open {
            path: path.to_path_buf(),
            source,
        })?;
    entry
        .render(&mut file)
        .and_then(|()| file.flush())
        .map_err(|source| RunLogError::Write {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    #[rstest]
    fn entries_accumulate() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("runs.log");
        let first = RunLogEntry::new("a.gr", 3, 2, Duration::from_secs(1));
        let second = RunLogEntry::new("b.csv", 5, 7, Duration::from_secs(61));

        append_run_log(&path, &first).expect("first append");
        append_run_log(&path, &second).expect("second append");

        let text = fs::read_to_string(&path).expect("log readable");
        assert_eq!(text.matches(ENTRY_SEPARATOR).count(), 2);
        assert!(text.contains("Filename : a.gr\n"));
        assert!(text.contains("Edges : 7\nElapsed Time : 00 days, 00 hour, 01 minutes, 01 seconds\n"));
        assert!(text.ends_with(&format!("{ENTRY_SEPARATOR}\n")));
    }

    #[rstest]
    fn directory_path_is_an_open_error() {
        let dir = TempDir::new().expect("temp dir");
        let entry = RunLogEntry::new("a.gr", 1, 0, Duration::ZERO);
        let err = append_run_log(dir.path(), &entry).expect_err("directories cannot be appended to");
        assert!(matches!(err, RunLogError::Open { .. }));
    }
}
