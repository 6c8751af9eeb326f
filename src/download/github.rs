//! GitHub repository archive probing.
//!
//! When enabled on the downloader, a plain repository link such as
//! `https://github.com/owner/repo` is fetched as a zip of the default branch.
//! The branch is not known up front, so `main`, `master` and `HEAD` are tried
//! in that order.

use regex::Regex;
use std::sync::LazyLock;

static GITHUB_REPO_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://github\.com/([a-zA-Z0-9_-]+)/([a-zA-Z0-9_.-]+)")
        .expect("GitHub repository regex is valid")
});

/// Links that already point at a concrete artifact.
const ARTIFACT_MARKERS: [&str; 3] = ["/archive/", "/releases/", "raw.githubusercontent.com"];

/// Owner and name of a GitHub repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubRepo {
    pub owner: String,
    pub repo: String,
}

impl GithubRepo {
    /// Recognizes a repository link. Archive, release and raw-content links
    /// are left alone.
    pub fn parse(url: &str) -> Option<Self> {
        if ARTIFACT_MARKERS.iter().any(|marker| url.contains(marker)) {
            return None;
        }

        let captures = GITHUB_REPO_PATTERN.captures(url)?;
        let owner = captures.get(1)?.as_str();
        let repo = captures.get(2)?.as_str();
        let repo = repo.strip_suffix(".git").unwrap_or(repo);
        if repo.is_empty() {
            return None;
        }

        Some(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }

    /// Destination filename, `<owner>-<repo>.zip`.
    pub fn archive_filename(&self) -> String {
        format!("{}-{}.zip", self.owner, self.repo)
    }

    /// Archive URLs to probe, in order.
    pub fn archive_urls(&self) -> [String; 3] {
        let base = format!("https://github.com/{}/{}/archive", self.owner, self.repo);
        [
            format!("{}/refs/heads/main.zip", base),
            format!("{}/refs/heads/master.zip", base),
            format!("{}/HEAD.zip", base),
        ]
    }
}
