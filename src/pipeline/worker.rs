//! Worker loop: extract, then download sequentially per file.

use crate::download::{DownloadOutcome, Status};
use crate::downloader::Downloader;
use crate::extract::extract_from_file;
use crate::scan::FileJob;
use crate::utils::format_bytes;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tracing::{debug, info, warn};

/// Everything one file produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    path: PathBuf,
    url_count: usize,
    outcomes: Vec<DownloadOutcome>,
}

impl FileReport {
    pub fn new(path: PathBuf, url_count: usize) -> Self {
        Self {
            path,
            url_count,
            outcomes: Vec::with_capacity(url_count),
        }
    }

    pub fn push(&mut self, outcome: DownloadOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn url_count(&self) -> usize {
        self.url_count
    }

    /// Outcomes in the order the URLs were downloaded.
    pub fn outcomes(&self) -> &[DownloadOutcome] {
        &self.outcomes
    }
}

/// Pulls jobs until the queue is closed and empty, pushing one report each.
pub(crate) async fn run_worker(
    id: usize,
    jobs: Arc<Mutex<mpsc::Receiver<FileJob>>>,
    results: mpsc::Sender<FileReport>,
    downloader: Downloader,
) {
    debug!("Worker {} started", id);

    loop {
        let job = {
            let mut rx = jobs.lock().await;
            rx.recv().await
        };
        let Some(job) = job else {
            break;
        };

        let report = process_file(id, job, &downloader).await;
        if results.send(report).await.is_err() {
            warn!(worker = id, "Result queue closed early, dropping report");
            break;
        }
    }

    debug!("Worker {} completed", id);
}

/// Extracts the URLs of one file and downloads them one after another.
pub(crate) async fn process_file(id: usize, job: FileJob, downloader: &Downloader) -> FileReport {
    let urls = match extract_from_file(job.path()).await {
        Ok(urls) => urls,
        Err(e) => {
            warn!(worker = id, path = %job.path().display(), error = %e, "Error reading file");
            return FileReport::new(job.into_path(), 0);
        }
    };

    let mut report = FileReport::new(job.path().to_path_buf(), urls.len());
    if urls.is_empty() {
        debug!(worker = id, path = %job.path().display(), "No URLs found");
        return report;
    }

    info!(worker = id, urls = urls.len(), file = %file_name(job.path()), "Found URLs");

    let target_dir = job.target_dir();
    for url in &urls {
        let outcome = downloader.download(url, target_dir).await;
        log_outcome(id, &outcome);
        report.push(outcome);
    }

    report
}

fn log_outcome(id: usize, outcome: &DownloadOutcome) {
    let name = outcome.path().map(file_name).unwrap_or_default();
    match outcome.status() {
        Status::Success => info!(
            worker = id,
            size = %format_bytes(outcome.bytes_written()),
            "Downloaded: {}",
            name
        ),
        Status::Skipped(reason) => info!(worker = id, "Skipped: {} ({})", name, reason),
        Status::Failed(cause) => {
            warn!(worker = id, url = outcome.url(), "Failed: {}", cause)
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::downloader::DownloaderBuilder;
    use std::time::{Duration, Instant};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const DELAY: Duration = Duration::from_millis(200);

    async fn mount(server: &MockServer, route: &str, status: u16) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(
                ResponseTemplate::new(status)
                    .set_body_bytes(b"x".to_vec())
                    .set_delay(DELAY),
            )
            .expect(1)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_urls_of_one_file_download_in_order() {
        let server = MockServer::start().await;
        mount(&server, "/one.bin", 200).await;
        mount(&server, "/two.bin", 404).await;
        mount(&server, "/three.bin", 200).await;

        let base = format!("http://host.test:{}", server.address().port());
        let urls = [
            format!("{base}/one.bin"),
            format!("{base}/two.bin"),
            format!("{base}/three.bin"),
        ];
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("links.txt");
        std::fs::write(&file, urls.join("\n")).unwrap();

        let downloader = DownloaderBuilder::new()
            .resolve("host.test", *server.address())
            .build()
            .unwrap();

        let started = Instant::now();
        let report = process_file(1, FileJob::new(&file), &downloader).await;
        let elapsed = started.elapsed();

        assert_eq!(report.url_count(), 3);
        let seen: Vec<&str> = report.outcomes().iter().map(|o| o.url()).collect();
        assert_eq!(seen, urls.iter().map(String::as_str).collect::<Vec<_>>());
        assert!(report.outcomes()[0].is_success());
        assert!(report.outcomes()[1].is_failed());
        assert!(report.outcomes()[2].is_success());

        // One delayed response at a time.
        assert!(elapsed >= DELAY * 3, "elapsed {elapsed:?}");

        let requested: Vec<String> = server
            .received_requests()
            .await
            .unwrap()
            .iter()
            .map(|r| r.url.path().to_string())
            .collect();
        assert_eq!(requested, vec!["/one.bin", "/two.bin", "/three.bin"]);
    }

    #[tokio::test]
    async fn test_unreadable_file_reports_no_urls() {
        let dir = tempfile::tempdir().unwrap();
        let downloader = DownloaderBuilder::new().build().unwrap();

        let report = process_file(1, FileJob::new(dir.path().join("gone.md")), &downloader).await;

        assert_eq!(report.url_count(), 0);
        assert!(report.outcomes().is_empty());
    }
}
