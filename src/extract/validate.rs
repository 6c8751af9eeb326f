//! Candidate URL validation.

/// Hosts that show up in documentation and sample files far more often than
/// in real download lists.
const BLOCKED_SUBSTRINGS: [&str; 4] = ["example.com", "example.org", "localhost", "127.0.0.1"];

/// Shortest URL accepted, scheme included.
const MIN_URL_LEN: usize = 10;

/// Checks a candidate before it is added to a file's URL set.
///
/// A candidate is kept when it starts with `http://` or `https://`, is at
/// least ten bytes long, and does not mention one of the blocked hosts
/// anywhere (case-insensitive).
pub fn is_valid_url(candidate: &str) -> bool {
    if !candidate.starts_with("http://") && !candidate.starts_with("https://") {
        return false;
    }

    if candidate.len() < MIN_URL_LEN {
        return false;
    }

    let lower = candidate.to_lowercase();
    !BLOCKED_SUBSTRINGS.iter().any(|blocked| lower.contains(blocked))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(is_valid_url("http://host.test/a.zip"));
        assert!(is_valid_url("https://host.test/a.zip"));
    }

    #[test]
    fn test_rejects_other_schemes() {
        assert!(!is_valid_url("ftp://host.test/a.zip"));
        assert!(!is_valid_url("file:///etc/passwd"));
        assert!(!is_valid_url("/relative/path.zip"));
        assert!(!is_valid_url("HTTPS://host.test/a.zip"));
    }

    #[test]
    fn test_minimum_length() {
        assert!(!is_valid_url("http://ab"));
        assert!(is_valid_url("http://abc"));
    }

    #[test]
    fn test_blocklist_is_case_insensitive_substring() {
        assert!(!is_valid_url("https://EXAMPLE.com/file.zip"));
        assert!(!is_valid_url("https://sub.example.org/file.zip"));
        assert!(!is_valid_url("http://localhost:8080/x"));
        assert!(!is_valid_url("http://127.0.0.1/x.bin"));
        assert!(!is_valid_url("https://host.test/?next=example.com"));
    }
}
