//! Linkfetch scans directories for files that contain links and downloads
//! every link into the directory of the file it was found in.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use linkfetch::{Error, PipelineBuilder};
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! let pipeline = PipelineBuilder::new().workers(4).recursive(true).build()?;
//! let stats = pipeline.run(&[PathBuf::from("bookmarks")]).await?;
//! println!("{stats}");
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! The linkfetch crate is organized into several modules:
//!
//! - [`scan`] - Directory walking, batching and file discovery
//! - [`extract`] - URL extraction and validation per file type
//! - [`download`] - Outcomes, filename derivation and GitHub repository links
//! - [`downloader`] - The `Downloader` and `DownloaderBuilder` that fetch single URLs
//! - [`pipeline`] - Worker pool, aggregation and the `Pipeline` tying it together
//! - [`error`] - Centralized error handling with the `Error` enum
//! - [`http`] - HTTP client construction
//! - [`progress`] - Progress bars for recursive scans
//! - [`config`] - Optional `config.json` settings
//! - [`notify`] - Completion chime
//! - [`utils`] - Shared utility functions

pub mod config;
pub mod download;
pub mod downloader;
pub mod error;
pub mod extract;
pub mod http;
pub mod notify;
pub mod pipeline;
pub mod progress;
pub mod scan;
pub mod utils;

pub use config::AppConfig;
pub use download::{DownloadOutcome, Status};
pub use downloader::{Downloader, DownloaderBuilder};
pub use error::{Error, Result};
pub use extract::{extract_from_file, extract_urls, is_valid_url, FileKind, UrlSet};
pub use http::{create_http_client, HttpClientConfig};
pub use pipeline::{run, AggregateStats, FileReport, Pipeline, PipelineBuilder};
pub use progress::{ProgressBarOpts, ProgressDisplay};
pub use scan::{FileJob, ScanProgress, ScanTarget, Scanner};
pub use utils::format_bytes;
