//! Downloader module containing the fetch logic, builder pattern, and configuration.
//!
//! - `downloader` - [`Downloader`], which fetches one URL into one directory
//! - `builder` - [`DownloaderBuilder`] for configuring it
//! - `config` - [`DownloaderConfig`] and its defaults
//!
//! # Examples
//!
//! ```rust,no_run
//! use linkfetch::downloader::DownloaderBuilder;
//! use std::path::Path;
//!
//! # async fn example() -> linkfetch::Result<()> {
//! let downloader = DownloaderBuilder::new().build()?;
//! let outcome = downloader
//!     .download("https://host.test/file1.zip", Path::new("/data/links"))
//!     .await;
//! println!("{:?}", outcome.status());
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod downloader;

pub use builder::DownloaderBuilder;
pub use config::DownloaderConfig;
pub use downloader::Downloader;
