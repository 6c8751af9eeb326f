//! Format-aware URL extraction.
//!
//! Parsing is pattern-based only: there is no HTML or Markdown tree, and no
//! entity or escape decoding. Candidates are trimmed, validated with
//! [`is_valid_url`], and collected into a [`UrlSet`].

use super::{is_valid_url, FileKind, UrlSet};
use crate::error::{Error, Result};

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use tracing::trace;

/// Bare `http(s)://` token, ending at whitespace or one of ``<>"{}|\^[]`()``.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"https?://[^\s<>"{}|\\^\[\]`()]+"#).expect("URL regex is valid")
});

/// Inline markdown link, `[text](target)`.
static MARKDOWN_LINK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("markdown link regex is valid")
});

static HTML_HREF_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)href=["']([^"']+)["']"#).expect("href regex is valid")
});

static HTML_SRC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)src=["']([^"']+)["']"#).expect("src regex is valid")
});

/// Shortcut keys whose values are download candidates.
const SHORTCUT_KEYS: [&str; 2] = ["URL=", "BaseURL="];

/// Reads a file and extracts its URLs.
///
/// Contents that are not valid UTF-8 are decoded lossily. A read failure is
/// returned to the caller, which counts the file as having no URLs.
pub async fn extract_from_file(path: &Path) -> Result<UrlSet> {
    let kind =
        FileKind::from_path(path).ok_or_else(|| Error::UnsupportedFile(path.into()))?;
    let bytes = tokio::fs::read(path).await?;
    let contents = String::from_utf8_lossy(&bytes);
    Ok(extract_urls(kind, &contents))
}

/// Extracts the validated, deduplicated URLs from file contents.
pub fn extract_urls(kind: FileKind, contents: &str) -> UrlSet {
    let mut urls = UrlSet::new();
    match kind {
        FileKind::Shortcut => collect_shortcut(contents, &mut urls),
        FileKind::Markdown => {
            collect_captures(&MARKDOWN_LINK_PATTERN, 2, contents, &mut urls);
            collect_bare(contents, &mut urls);
        }
        FileKind::Html => {
            collect_captures(&HTML_HREF_PATTERN, 1, contents, &mut urls);
            collect_captures(&HTML_SRC_PATTERN, 1, contents, &mut urls);
            collect_bare(contents, &mut urls);
        }
        FileKind::Text => collect_bare(contents, &mut urls),
    }
    urls
}

fn collect_shortcut(contents: &str, urls: &mut UrlSet) {
    for line in contents.lines() {
        let line = line.trim();
        let value = SHORTCUT_KEYS
            .iter()
            .find_map(|key| line.strip_prefix(key));
        if let Some(value) = value {
            push_candidate(value, urls);
        }
    }
}

fn collect_captures(pattern: &Regex, group: usize, contents: &str, urls: &mut UrlSet) {
    for captures in pattern.captures_iter(contents) {
        if let Some(target) = captures.get(group) {
            push_candidate(target.as_str(), urls);
        }
    }
}

fn collect_bare(contents: &str, urls: &mut UrlSet) {
    for found in URL_PATTERN.find_iter(contents) {
        push_candidate(found.as_str(), urls);
    }
}

fn push_candidate(raw: &str, urls: &mut UrlSet) {
    let candidate = raw.trim();
    if candidate.is_empty() || !is_valid_url(candidate) {
        trace!(candidate, "Dropping URL candidate");
        return;
    }
    urls.insert(candidate);
}
