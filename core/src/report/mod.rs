//! # Report Persistence
//!
//! Writes a finished [`ScanSession`](crate::session::ScanSession) to disk in
//! two formats, a plain text summary ([`text`]) and an XML document ([`xml`]).
//!
//! Both writers go through [`ResultsDir`], which guarantees the target
//! directory exists before anything is written and reports every filesystem
//! failure as a [`ReportError`]. Nothing is rolled back: if the XML write
//! fails, a text report written before it stays on disk.

pub mod text;
pub mod xml;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

pub use text::save_text;
pub use xml::{read_xml_hosts, save_xml};

/// Prefix of generated file names when the user does not pick one.
pub const DEFAULT_BASE_NAME: &str = "scopa_scan";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("could not write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed report: {0}")]
    Malformed(String),
}

/// A results directory that is known to exist.
#[derive(Debug, Clone)]
pub struct ResultsDir {
    path: PathBuf,
}

impl ResultsDir {
    /// Creates `path` (and any missing parents) if needed.
    pub fn ensure(path: impl Into<PathBuf>) -> Result<Self, ReportError> {
        let path = path.into();

        fs::create_dir_all(&path).map_err(|source| ReportError::Io {
            path: path.clone(),
            source,
        })?;
        debug!("results directory ready at {}", path.display());

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes `contents` to `file_name` inside the directory, replacing any existing file.
    pub fn write(&self, file_name: &str, contents: &str) -> Result<PathBuf, ReportError> {
        let destination = self.path.join(file_name);

        fs::write(&destination, contents).map_err(|source| ReportError::Io {
            path: destination.clone(),
            source,
        })?;

        Ok(destination)
    }
}

/// Picks the file name for a report.
///
/// A non-empty `base` gets `.{extension}` appended unless it already ends with
/// it. Otherwise the name is generated from [`DEFAULT_BASE_NAME`] and `file_time`
/// (a `YYYYMMDD_HHMMSS` stamp).
pub fn report_file_name(base: Option<&str>, extension: &str, file_time: &str) -> String {
    let suffix = format!(".{extension}");

    match base.map(str::trim).filter(|b| !b.is_empty()) {
        Some(base) if base.ends_with(&suffix) => base.to_string(),
        Some(base) => format!("{base}{suffix}"),
        None => format!("{DEFAULT_BASE_NAME}_{file_time}{suffix}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_name_carries_timestamp_and_extension() {
        let name = report_file_name(None, "txt", "20261016_120509");
        assert_eq!(name, "scopa_scan_20261016_120509.txt");

        let blank = report_file_name(Some("   "), "xml", "20261016_120509");
        assert_eq!(blank, "scopa_scan_20261016_120509.xml");
    }

    #[test]
    fn extension_is_appended_once() {
        assert_eq!(report_file_name(Some("test"), "txt", "x"), "test.txt");
        assert_eq!(report_file_name(Some("test.txt"), "txt", "x"), "test.txt");
        assert_eq!(report_file_name(Some("test.txt"), "xml", "x"), "test.txt.xml");
    }

    #[test]
    fn ensure_creates_nested_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a").join("results");

        let dir = ResultsDir::ensure(&nested).unwrap();
        assert!(dir.path().is_dir());

        // Idempotent on an existing directory.
        ResultsDir::ensure(&nested).unwrap();
    }

    #[test]
    fn ensure_fails_when_a_file_is_in_the_way() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("results");
        fs::write(&blocker, "not a directory").unwrap();

        let err = ResultsDir::ensure(&blocker).unwrap_err();
        assert!(matches!(err, ReportError::Io { path, .. } if path == blocker));
    }

    #[test]
    fn write_returns_destination() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = ResultsDir::ensure(tmp.path()).unwrap();

        let path = dir.write("out.txt", "hello").unwrap();
        assert_eq!(path, tmp.path().join("out.txt"));
        assert_eq!(fs::read_to_string(path).unwrap(), "hello");
    }
}
