//! Per-URL download outcome.
//!
//! This module contains the [`DownloadOutcome`] struct and [`Status`] enum
//! describing what happened to one URL: where it was (or would have been)
//! written, whether it succeeded, was skipped or failed, and how many bytes
//! ended up on disk.
//!
//! # Examples
//!
//! ```rust
//! use linkfetch::download::{DownloadOutcome, Status};
//!
//! let outcome = DownloadOutcome::new("https://host.test/file.zip")
//!     .with_path("/data/file.zip")
//!     .skip("file already exists");
//!
//! match outcome.status() {
//!     Status::Success => println!("downloaded {} bytes", outcome.bytes_written()),
//!     Status::Skipped(reason) => println!("skipped: {}", reason),
//!     Status::Failed(cause) => println!("failed: {}", cause),
//! }
//! ```

use std::path::{Path, PathBuf};

/// Download status enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// The body was written to the destination.
    Success,
    /// The destination already existed, with the reason.
    Skipped(String),
    /// The download failed, with the cause.
    Failed(String),
}

/// Result of fetching one URL into one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadOutcome {
    /// URL as it was extracted.
    url: String,
    /// Resolved destination, if resolution got that far.
    path: Option<PathBuf>,
    /// Status.
    status: Status,
    /// Bytes written to the destination.
    bytes_written: u64,
}

impl DownloadOutcome {
    /// Creates an outcome for `url`. It starts out as a failure with an empty
    /// cause until one of the terminal setters is applied.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            path: None,
            status: Status::Failed(String::new()),
            bytes_written: 0,
        }
    }

    /// Records the resolved destination.
    pub fn with_path(self, path: impl AsRef<Path>) -> Self {
        Self {
            path: Some(path.as_ref().to_path_buf()),
            ..self
        }
    }

    /// Marks the outcome as successful.
    pub fn succeed(self, bytes_written: u64) -> Self {
        Self {
            status: Status::Success,
            bytes_written,
            ..self
        }
    }

    /// Marks the outcome as skipped with a reason.
    pub fn skip(self, reason: impl std::fmt::Display) -> Self {
        Self {
            status: Status::Skipped(reason.to_string()),
            bytes_written: 0,
            ..self
        }
    }

    /// Marks the outcome as failed with a cause.
    pub fn fail(self, cause: impl std::fmt::Display) -> Self {
        Self {
            status: Status::Failed(cause.to_string()),
            bytes_written: 0,
            ..self
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// The failure cause, if the download failed.
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            Status::Failed(cause) => Some(cause),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self.status, Status::Skipped(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status, Status::Failed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_equality() {
        assert_eq!(Status::Success, Status::Success);
        assert_eq!(
            Status::Skipped("reason".to_string()),
            Status::Skipped("reason".to_string())
        );
        assert_ne!(
            Status::Failed("error1".to_string()),
            Status::Failed("error2".to_string())
        );
    }

    #[test]
    fn test_outcome_succeed() {
        let outcome = DownloadOutcome::new("https://host.test/a.zip")
            .with_path("/tmp/a.zip")
            .succeed(1024);

        assert!(outcome.is_success());
        assert_eq!(outcome.bytes_written(), 1024);
        assert_eq!(outcome.path(), Some(Path::new("/tmp/a.zip")));
        assert_eq!(outcome.error(), None);
    }

    #[test]
    fn test_outcome_fail_keeps_cause() {
        let outcome = DownloadOutcome::new("https://host.test/a.zip").fail("HTTP 404: Not Found");

        assert!(outcome.is_failed());
        assert_eq!(outcome.error(), Some("HTTP 404: Not Found"));
        assert_eq!(outcome.path(), None);
    }

    #[test]
    fn test_outcome_skip() {
        let outcome = DownloadOutcome::new("https://host.test/a.zip").skip("file already exists");

        match outcome.status() {
            Status::Skipped(msg) => assert_eq!(msg, "file already exists"),
            _ => panic!("Expected Skipped status"),
        }
        assert!(outcome.is_skipped());
        assert_eq!(outcome.bytes_written(), 0);
    }

    #[test]
    fn test_new_outcome_is_not_success() {
        let outcome = DownloadOutcome::new("https://host.test/a.zip");
        assert!(!outcome.is_success());
        assert!(!outcome.is_skipped());
    }
}
