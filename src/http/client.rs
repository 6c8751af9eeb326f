//! HTTP client setup and middleware configuration.
//!
//! # Features
//!
//! - **Timeout**: one ceiling covering connect and transfer
//! - **Tracing**: a span per request via `reqwest-tracing`
//! - **Proxy Support**: optional HTTP/HTTPS proxy configuration
//! - **Custom Headers**: default headers applied to all requests
//! - **DNS Overrides**: pin hostnames to fixed socket addresses
//!
//! # Examples
//!
//! ## Pinning a Host
//!
//! ```rust
//! use linkfetch::http::{create_http_client, HttpClientConfig};
//! use std::net::SocketAddr;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let addr: SocketAddr = "10.0.0.5:80".parse()?;
//! let config = HttpClientConfig {
//!     resolve: vec![("mirror.internal".to_string(), addr)],
//!     ..HttpClientConfig::default()
//! };
//! let client = create_http_client(config)?;
//! # Ok(())
//! # }
//! ```

use reqwest::{header::HeaderMap, Proxy};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use std::net::SocketAddr;
use std::time::Duration;

/// Whole-request ceiling applied to every download.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5 * 60);

/// User agent sent when no `User-Agent` header is configured.
pub const USER_AGENT: &str = concat!("linkfetch/", env!("CARGO_PKG_VERSION"));

/// Configuration for HTTP client setup.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Whole-request timeout, connect and body transfer included.
    pub timeout: Duration,
    /// Optional proxy configuration.
    pub proxy: Option<Proxy>,
    /// Default headers to include with all requests.
    pub headers: Option<HeaderMap>,
    /// Hostnames resolved to fixed addresses instead of DNS. The port of the
    /// address is ignored; the URL's port is used.
    pub resolve: Vec<(String, SocketAddr)>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            proxy: None,
            headers: None,
            resolve: Vec::new(),
        }
    }
}

/// Creates an HTTP client with middleware configuration.
///
/// This function sets up a reqwest client with:
/// - Tracing middleware for request/response logging
/// - The configured timeout
/// - Optional proxy support, default headers and DNS overrides
pub fn create_http_client(
    config: HttpClientConfig,
) -> Result<ClientWithMiddleware, reqwest::Error> {
    let mut inner_client_builder = reqwest::Client::builder()
        .timeout(config.timeout)
        .user_agent(USER_AGENT);

    if let Some(proxy) = config.proxy {
        inner_client_builder = inner_client_builder.proxy(proxy);
    }

    if let Some(headers) = config.headers {
        inner_client_builder = inner_client_builder.default_headers(headers);
    }

    for (host, addr) in &config.resolve {
        inner_client_builder = inner_client_builder.resolve(host, *addr);
    }

    let inner_client = inner_client_builder.build()?;

    let client = ClientBuilder::new(inner_client)
        // Trace HTTP requests. See the tracing crate to make use of these traces.
        .with(TracingMiddleware::default())
        .build();

    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT as USER_AGENT_HEADER};

    #[test]
    fn test_default_config() {
        let config = HttpClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(300));
        assert!(config.proxy.is_none());
        assert!(config.headers.is_none());
        assert!(config.resolve.is_empty());
    }

    #[test]
    fn test_create_http_client_default() {
        let client = create_http_client(HttpClientConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_create_http_client_with_headers_and_overrides() {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT_HEADER, HeaderValue::from_static("test-agent"));

        let config = HttpClientConfig {
            timeout: Duration::from_secs(5),
            proxy: None,
            headers: Some(headers),
            resolve: vec![("host.test".to_string(), "127.0.0.1:0".parse().unwrap())],
        };

        assert!(create_http_client(config).is_ok());
    }
}
