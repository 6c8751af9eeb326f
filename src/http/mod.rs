//! HTTP module containing HTTP client functionality.
//!
//! The client is a `reqwest` client wrapped in `reqwest-middleware` with
//! request tracing. It carries the whole-request timeout used for every
//! download; there is no retry middleware.
//!
//! # Examples
//!
//! ```rust
//! use linkfetch::http::{create_http_client, HttpClientConfig};
//! use std::time::Duration;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = HttpClientConfig {
//!     timeout: Duration::from_secs(30),
//!     ..HttpClientConfig::default()
//! };
//! let client = create_http_client(config)?;
//! # Ok(())
//! # }
//! ```

pub mod client;

pub use client::{create_http_client, HttpClientConfig, DEFAULT_TIMEOUT, USER_AGENT};
