//! Configuration structures and defaults for the downloader.

use crate::http::{HttpClientConfig, DEFAULT_TIMEOUT};

use reqwest::header::HeaderMap;
use std::net::SocketAddr;
use std::time::Duration;

/// Configuration structure for the downloader.
#[derive(Debug, Clone)]
pub struct DownloaderConfig {
    /// Whole-request timeout for each fetch.
    pub timeout: Duration,
    /// Optional proxy configuration.
    pub proxy: Option<reqwest::Proxy>,
    /// Custom HTTP headers.
    pub headers: Option<HeaderMap>,
    /// Hostnames pinned to fixed addresses.
    pub resolve: Vec<(String, SocketAddr)>,
    /// Fetch GitHub repository links as branch archives.
    pub github_archives: bool,
}

impl DownloaderConfig {
    /// The HTTP client settings derived from this configuration.
    pub fn http_client_config(&self) -> HttpClientConfig {
        HttpClientConfig {
            timeout: self.timeout,
            proxy: self.proxy.clone(),
            headers: self.headers.clone(),
            resolve: self.resolve.clone(),
        }
    }
}

impl Default for DownloaderConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            proxy: None,
            headers: None,
            resolve: Vec::new(),
            github_archives: false,
        }
    }
}
