//! Shared utility functions.
//!
//! - [`format`] - Human readable byte counts for log lines and summaries
//!
//! # Examples
//!
//! ```rust
//! use linkfetch::utils::format_bytes;
//!
//! assert_eq!(format_bytes(1536), "1.5 KB");
//! ```

pub mod format;

pub use format::format_bytes;
