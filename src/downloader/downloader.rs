//! Core downloader implementation with fetch logic.
//!
//! A fetch never returns an error: every condition ends up in the returned
//! [`DownloadOutcome`]. The steps are:
//!
//! 1. resolve a filename from the URL and skip if it already exists,
//! 2. send the GET request (bounded by the client timeout),
//! 3. reject non-2xx responses,
//! 4. re-resolve the filename from `Content-Disposition` and check again,
//! 5. stream the body into a freshly created file, removing it on error.
//!
//! Destination files are opened with `create_new`, so an existing file is
//! never overwritten even if it appears between the check and the write.

use super::config::DownloaderConfig;
use crate::download::filename::{filename_from_content_disposition, filename_from_url};
use crate::download::{DownloadOutcome, GithubRepo};
use crate::error::{Error, Result};

use futures::StreamExt;
use reqwest::header::{HeaderMap, CONTENT_DISPOSITION};
use reqwest::Response;
use reqwest_middleware::ClientWithMiddleware;
use std::fmt;
use std::fmt::Debug;
use std::io;
use std::path::Path;
use std::time::Duration;
use tokio::{fs, fs::OpenOptions, io::AsyncWriteExt};
use tracing::debug;

const ALREADY_EXISTS: &str = "file already exists";

/// Fetches URLs into directories.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone)]
pub struct Downloader {
    config: DownloaderConfig,
    client: ClientWithMiddleware,
}

impl Debug for Downloader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Downloader")
            .field("config", &self.config)
            .finish()
    }
}

impl Downloader {
    /// Creates a new Downloader with the given configuration and client.
    pub(crate) fn new(config: DownloaderConfig, client: ClientWithMiddleware) -> Self {
        Self { config, client }
    }

    /// Gets the whole-request timeout.
    pub fn timeout(&self) -> Duration {
        self.config.timeout
    }

    /// Gets the custom headers.
    pub fn headers(&self) -> Option<&HeaderMap> {
        self.config.headers.as_ref()
    }

    /// Gets whether GitHub repository links are fetched as archives.
    pub fn github_archives(&self) -> bool {
        self.config.github_archives
    }

    /// Fetches `url` into `target_dir`.
    pub async fn download(&self, url: &str, target_dir: &Path) -> DownloadOutcome {
        if self.config.github_archives {
            if let Some(repo) = GithubRepo::parse(url) {
                return self.fetch_github_archive(url, &repo, target_dir).await;
            }
        }
        self.fetch(url, target_dir).await
    }

    /// Fetches the file and writes it to disk.
    async fn fetch(&self, url: &str, target_dir: &Path) -> DownloadOutcome {
        let outcome = DownloadOutcome::new(url);

        let filename = match filename_from_url(url) {
            Ok(filename) => filename,
            Err(e) => return outcome.fail(e),
        };
        let output = target_dir.join(&filename);
        let outcome = outcome.with_path(&output);

        if occupied(&output).await {
            debug!("A file with the same name already exists at the destination.");
            return outcome.skip(ALREADY_EXISTS);
        }

        // Request the file.
        debug!("Fetching {}", url);
        let res = match self.get(url).await {
            Ok(res) => res,
            Err(e) => return outcome.fail(e),
        };

        // The server may name the file differently than the URL does.
        let hinted = res
            .headers()
            .get(CONTENT_DISPOSITION)
            .and_then(|value| value.to_str().ok())
            .and_then(filename_from_content_disposition);
        let (output, outcome) = match hinted {
            Some(name) if name != filename => {
                let output = target_dir.join(name);
                debug!("Content-Disposition renamed destination to {:?}", &output);
                let outcome = outcome.with_path(&output);
                if occupied(&output).await {
                    return outcome.skip(ALREADY_EXISTS);
                }
                (output, outcome)
            }
            _ => (output, outcome),
        };

        write_response(res, &output, outcome).await
    }

    /// Probes the branch archives of a GitHub repository.
    async fn fetch_github_archive(
        &self,
        url: &str,
        repo: &GithubRepo,
        target_dir: &Path,
    ) -> DownloadOutcome {
        let output = target_dir.join(repo.archive_filename());
        let outcome = DownloadOutcome::new(url).with_path(&output);

        if occupied(&output).await {
            return outcome.skip(ALREADY_EXISTS);
        }

        let mut last_error = None;
        for archive_url in repo.archive_urls() {
            debug!("Probing GitHub archive {}", archive_url);
            match self.get(&archive_url).await {
                Ok(res) => return write_response(res, &output, outcome).await,
                Err(e) => last_error = Some(e),
            }
        }

        let cause = last_error
            .map(|e| e.to_string())
            .unwrap_or_else(|| "no archive candidates".into());
        outcome.fail(format!(
            "failed to download GitHub repo from all branches: {}",
            cause
        ))
    }

    /// Sends a GET request and checks the status for errors.
    async fn get(&self, url: &str) -> Result<Response> {
        let res = self.client.get(url).send().await?;
        let status = res.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }
        Ok(res)
    }
}

/// Whether anything, including a dangling symlink, sits at `path`.
async fn occupied(path: &Path) -> bool {
    fs::symlink_metadata(path).await.is_ok()
}

/// Streams the response body into `output` and finalizes the outcome.
async fn write_response(
    res: Response,
    output: &Path,
    outcome: DownloadOutcome,
) -> DownloadOutcome {
    debug!("Creating destination file {:?}", output);
    let mut file = match OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(output)
        .await
    {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return outcome.skip(ALREADY_EXISTS),
        Err(e) => return outcome.fail(Error::from(e)),
    };

    match stream_body(res, &mut file).await {
        Ok(written) => outcome.succeed(written),
        Err(e) => {
            drop(file);
            if let Err(remove_err) = fs::remove_file(output).await {
                debug!("Failed to remove partial file {:?}: {}", output, remove_err);
            }
            outcome.fail(e)
        }
    }
}

/// Writes the body chunk by chunk, returning the byte count.
async fn stream_body(res: Response, file: &mut fs::File) -> Result<u64> {
    let mut written: u64 = 0;

    debug!("Retrieving chunks...");
    let mut stream = res.bytes_stream();
    while let Some(item) = stream.next().await {
        let mut chunk = item?;
        written += chunk.len() as u64;
        file.write_all_buf(&mut chunk).await?;
    }
    file.flush().await?;

    Ok(written)
}
