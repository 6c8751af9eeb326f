//! Destination filename resolution.
//!
//! Names come from the last non-empty path segment of the URL or, once the
//! response is in, from a `Content-Disposition` hint. Both go through
//! [`sanitize_filename`].
//!
//! # Examples
//!
//! ```rust
//! use linkfetch::download::filename::{filename_from_url, sanitize_filename};
//!
//! assert_eq!(filename_from_url("https://host.test/pkg/file1.zip").unwrap(), "file1.zip");
//! assert_eq!(filename_from_url("https://host.test/").unwrap(), "download_host.test");
//! assert_eq!(filename_from_url("https://host.test/readme").unwrap(), "readme.bin");
//! assert_eq!(sanitize_filename(" a:b?.txt. "), "a_b_.txt");
//! ```

use crate::error::{Error, Result};

use reqwest::Url;

/// Longest sanitized filename, in bytes.
pub const MAX_FILENAME_LEN: usize = 200;

/// Extension appended to names that have none.
const FALLBACK_EXTENSION: &str = ".bin";

/// Resolves the initial destination filename for `url`.
///
/// The last non-empty path segment is percent-decoded and sanitized. When the
/// path has no usable segment, `download_<host>` is used instead. A name
/// without a `.` gets `.bin` appended.
pub fn filename_from_url(url: &str) -> Result<String> {
    let parsed = Url::parse(url)
        .map_err(|e| Error::InvalidUrl(format!("The url \"{}\" cannot be parsed: {}", url, e)))?;

    let segment = parsed
        .path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).next_back())
        .map(|s| {
            urlencoding::decode(s)
                .map(|decoded| decoded.into_owned())
                .unwrap_or_else(|_| s.to_string())
        })
        .map(|s| sanitize_filename(&s))
        .filter(|s| !s.is_empty());

    let mut filename = match segment {
        Some(name) => name,
        None => sanitize_filename(&format!("download_{}", host_with_port(&parsed))),
    };

    if !filename.contains('.') {
        filename.push_str(FALLBACK_EXTENSION);
    }

    Ok(filename)
}

fn host_with_port(url: &Url) -> String {
    let host = url.host_str().unwrap_or("unknown");
    match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    }
}

/// Extracts a filename from a `Content-Disposition` header value.
///
/// `filename*=` (RFC 5987, e.g. `UTF-8''name.zip`) wins over `filename=`.
/// Returns `None` when neither parameter yields a non-empty sanitized name.
pub fn filename_from_content_disposition(header: &str) -> Option<String> {
    let params: Vec<&str> = header.split(';').map(str::trim).collect();

    let extended = params.iter().find_map(|part| {
        let value = part.strip_prefix("filename*=")?;
        let value = match value.find("''") {
            Some(idx) => &value[idx + 2..],
            None => value,
        };
        let value = value.trim_matches(|c| c == '"' || c == '\'');
        let decoded = urlencoding::decode(value)
            .map(|d| d.into_owned())
            .unwrap_or_else(|_| value.to_string());
        non_empty(sanitize_filename(&decoded))
    });

    extended.or_else(|| {
        params.iter().find_map(|part| {
            let value = part.strip_prefix("filename=")?;
            let value = value.trim_matches(|c| c == '"' || c == '\'');
            non_empty(sanitize_filename(value))
        })
    })
}

fn non_empty(name: String) -> Option<String> {
    (!name.is_empty()).then_some(name)
}

/// Makes a name safe to use as a single path component.
///
/// Each of `< > : " / \ | ? *` becomes `_`, leading and trailing whitespace
/// and dots are trimmed, and names longer than [`MAX_FILENAME_LEN`] bytes are
/// cut down while keeping their extension.
pub fn sanitize_filename(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| match c {
            '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' => '_',
            c => c,
        })
        .collect();

    let trimmed = replaced.trim_matches(|c: char| c.is_whitespace() || c == '.');
    if trimmed.len() <= MAX_FILENAME_LEN {
        return trimmed.to_string();
    }

    let ext = match trimmed.rfind('.') {
        Some(idx) if idx > 0 && trimmed.len() - idx < MAX_FILENAME_LEN => &trimmed[idx..],
        _ => "",
    };
    let base = &trimmed[..trimmed.len() - ext.len()];
    let cut = floor_char_boundary(base, MAX_FILENAME_LEN - ext.len());
    format!("{}{}", &base[..cut], ext)
}

fn floor_char_boundary(s: &str, mut index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    while !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}
