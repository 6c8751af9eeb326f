//! Progress bars for recursive scans.
//!
//! Each recursive scan root gets its own bar, advanced once per finished
//! subdirectory. Bars are coordinated through a shared
//! [`MultiProgress`](indicatif::MultiProgress), so several roots can be
//! displayed at once.
//!
//! # Examples
//!
//! ```rust
//! use linkfetch::progress::{ProgressBarOpts, ProgressDisplay};
//!
//! // Bars that never draw, e.g. for quiet mode.
//! let display = ProgressDisplay::new(ProgressBarOpts::hidden());
//! let callback = display.callback();
//! # drop(callback);
//! ```

pub(crate) mod display;
pub(crate) mod style;

pub use display::ProgressDisplay;
pub use style::ProgressBarOpts;
