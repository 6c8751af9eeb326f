//! Directory traversal feeding the job queue.
//!
//! A [`Scanner`] walks each [`ScanTarget`] and hands every file with a
//! supported extension to a [`JobSink`]. In the pipeline the sink is the
//! bounded job queue, so a full queue stalls the walk.
//!
//! # Examples
//!
//! ```rust,no_run
//! use linkfetch::scan::{FileJob, ScanTarget, Scanner};
//! use std::path::PathBuf;
//!
//! # fn example() -> linkfetch::Result<()> {
//! let target = ScanTarget::new(PathBuf::from("/data/links"), true)?;
//! let mut scanner = Scanner::new(Vec::<FileJob>::new());
//! scanner.scan(&target);
//! println!("found {} files", scanner.emitted());
//! # Ok(())
//! # }
//! ```

pub mod scanner;
pub mod target;

pub use scanner::{batch_size, JobSink, ProgressCallback, ScanProgress, Scanner};
pub use target::{FileJob, ScanTarget};
