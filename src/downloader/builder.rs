//! Builder pattern implementation for creating Downloader instances.
//!
//! # Examples
//!
//! ```rust
//! use linkfetch::downloader::DownloaderBuilder;
//! use std::time::Duration;
//!
//! # fn example() -> linkfetch::Result<()> {
//! let downloader = DownloaderBuilder::new()
//!     .timeout(Duration::from_secs(60))
//!     .github_archives(true)
//!     .build()?;
//! # Ok(())
//! # }
//! ```

use super::{config::DownloaderConfig, downloader::Downloader};
use crate::error::Result;
use crate::http::create_http_client;

use reqwest::header::{HeaderMap, HeaderValue, IntoHeaderName};
use std::net::SocketAddr;
use std::time::Duration;

/// A builder used to create a [`Downloader`].
///
/// ```rust
/// # fn main() -> linkfetch::Result<()> {
/// use linkfetch::downloader::DownloaderBuilder;
///
/// let d = DownloaderBuilder::new().build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct DownloaderBuilder {
    config: DownloaderConfig,
}

impl DownloaderBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        DownloaderBuilder::default()
    }

    /// Set the whole-request timeout. Defaults to five minutes.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Route requests through a proxy.
    pub fn proxy(mut self, proxy: reqwest::Proxy) -> Self {
        self.config.proxy = Some(proxy);
        self
    }

    /// Resolve `host` to `addr` instead of asking DNS.
    ///
    /// Only the IP of `addr` is used; requests keep the port from their URL.
    pub fn resolve(mut self, host: impl Into<String>, addr: SocketAddr) -> Self {
        self.config.resolve.push((host.into(), addr));
        self
    }

    /// Fetch plain GitHub repository links as zip archives of their default
    /// branch. Off by default.
    pub fn github_archives(mut self, enabled: bool) -> Self {
        self.config.github_archives = enabled;
        self
    }

    /// Helper method to get or create a new HeaderMap.
    fn new_header(&self) -> HeaderMap {
        match self.config.headers {
            Some(ref h) => h.to_owned(),
            _ => HeaderMap::new(),
        }
    }

    /// Add the http headers.
    ///
    /// You can call `.headers()` multiple times and all `HeaderMap` will be
    /// merged into a single one.
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        let mut new = self.new_header();
        new.extend(headers);

        self.config.headers = Some(new);
        self
    }

    /// Add the http header
    pub fn header<K: IntoHeaderName>(mut self, name: K, value: HeaderValue) -> Self {
        let mut new = self.new_header();

        new.insert(name, value);

        self.config.headers = Some(new);
        self
    }

    /// Create the [`Downloader`] with the specified options.
    ///
    /// Fails only if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<Downloader> {
        let client = create_http_client(self.config.http_client_config())?;
        Ok(Downloader::new(self.config, client))
    }
}
