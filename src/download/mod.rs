//! Download module containing per-URL building blocks.
//!
//! - [`outcome`] - [`DownloadOutcome`] and its [`Status`]
//! - [`filename`] - destination filename resolution and sanitization
//! - [`github`] - optional GitHub repository archive probing
//!
//! The fetch itself lives in [`crate::downloader`].

pub mod filename;
pub mod github;
pub mod outcome;

pub use filename::{filename_from_content_disposition, filename_from_url, sanitize_filename};
pub use github::GithubRepo;
pub use outcome::{DownloadOutcome, Status};
