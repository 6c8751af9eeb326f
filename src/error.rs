//! Error handling for linkfetch.
//!
//! Only a handful of these ever escape a run: the configuration errors are
//! raised before the pipeline starts. Everything that happens per file or per
//! URL is absorbed into a [`DownloadOutcome`](crate::download::DownloadOutcome)
//! or a log line, using the `Display` of these variants as the error detail.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can happen when using linkfetch.
#[derive(Error, Debug)]
pub enum Error {
    /// The worker count must be at least one.
    #[error("worker count must be greater than 0")]
    NoWorkers,

    /// At least one scan root is required.
    #[error("at least one scan directory must be specified")]
    NoScanRoots,

    /// A scan root does not exist.
    #[error("directory does not exist: {}", .0.display())]
    MissingRoot(PathBuf),

    /// A scan root exists but is not a directory.
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// The file's extension is not one the extractor understands.
    #[error("unsupported file type: {}", .0.display())]
    UnsupportedFile(PathBuf),

    /// Error from the underlying URL parser or the expected URL format.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {code}: {reason}")]
    HttpStatus {
        /// Numeric status code.
        code: u16,
        /// Canonical reason phrase, when the code has one.
        reason: String,
    },

    /// I/O Error.
    #[error("I/O error: {source}")]
    IOError {
        #[from]
        source: io::Error,
    },

    /// Error from the request pipeline (transport, timeout, middleware).
    #[error("HTTP request failed: {source}")]
    Request {
        #[from]
        source: reqwest_middleware::Error,
    },

    /// Error from the Reqwest library.
    #[error("Reqwest error: {source}")]
    Reqwest {
        #[from]
        source: reqwest::Error,
    },

    /// The JSON configuration file could not be decoded.
    #[error("invalid configuration: {source}")]
    Config {
        #[from]
        source: serde_json::Error,
    },

    /// A pipeline task panicked or was cancelled.
    #[error("pipeline task failed: {source}")]
    Join {
        #[from]
        source: tokio::task::JoinError,
    },
}

impl Error {
    /// Whether this error is raised before any processing begins.
    pub fn is_fatal_config(&self) -> bool {
        matches!(
            self,
            Error::NoWorkers | Error::NoScanRoots | Error::MissingRoot(_) | Error::NotADirectory(_)
        )
    }
}

/// Result type alias for operations that can fail with a linkfetch error.
pub type Result<T> = std::result::Result<T, Error>;
