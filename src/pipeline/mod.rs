//! Scan, extract, download and aggregate, concurrently.
//!
//! A run wires three stages together with two bounded queues:
//!
//! - the scanner, on a blocking thread, emits one [`FileJob`] per candidate
//!   file and blocks while the job queue is full,
//! - `W` workers share the job queue, extract URLs and download them into the
//!   source file's directory, pushing one [`FileReport`] per file,
//! - a single aggregator folds reports into [`AggregateStats`].
//!
//! Shutdown is ordered: the scanner finishing closes the job queue, every
//! worker is joined, the result queue is closed, and only then is the
//! aggregator awaited. The returned statistics are therefore complete.
//!
//! # Examples
//!
//! ```rust,no_run
//! use linkfetch::pipeline::PipelineBuilder;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), linkfetch::Error> {
//! let pipeline = PipelineBuilder::new().workers(8).recursive(true).build()?;
//! let stats = pipeline.run(&[PathBuf::from("bookmarks")]).await?;
//! println!("{stats}");
//! # Ok(())
//! # }
//! ```

pub mod aggregator;
pub mod worker;

pub use aggregator::AggregateStats;
pub use worker::FileReport;

use crate::downloader::{Downloader, DownloaderBuilder};
use crate::error::{Error, Result};
use crate::scan::{FileJob, ProgressCallback, ScanProgress, ScanTarget, Scanner};

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tracing::{debug, info, warn};

/// Default number of download workers.
pub const DEFAULT_WORKERS: usize = 4;
/// Capacity of both the job and the result queue.
pub const DEFAULT_QUEUE_CAPACITY: usize = 100;

/// A builder used to create a [`Pipeline`].
pub struct PipelineBuilder {
    workers: usize,
    recursive: bool,
    queue_capacity: usize,
    on_progress: Option<Arc<ProgressCallback>>,
    downloader: Option<Downloader>,
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            recursive: false,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            on_progress: None,
            downloader: None,
        }
    }
}

impl fmt::Debug for PipelineBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipelineBuilder")
            .field("workers", &self.workers)
            .field("recursive", &self.recursive)
            .field("queue_capacity", &self.queue_capacity)
            .field("on_progress", &self.on_progress.is_some())
            .field("downloader", &self.downloader)
            .finish()
    }
}

impl PipelineBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of concurrent download workers.
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Walks the subdirectories of each root when `true`.
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Sets the capacity of both queues. Zero is raised to one.
    pub fn queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity.max(1);
        self
    }

    /// Called once per subdirectory finished during a recursive scan.
    pub fn on_progress<F>(mut self, callback: F) -> Self
    where
        F: Fn(&ScanProgress) + Send + Sync + 'static,
    {
        let callback: ProgressCallback = Box::new(callback);
        self.on_progress = Some(Arc::new(callback));
        self
    }

    /// Uses a preconfigured downloader instead of the default one.
    pub fn downloader(mut self, downloader: Downloader) -> Self {
        self.downloader = Some(downloader);
        self
    }

    /// Validates the options and creates the [`Pipeline`].
    pub fn build(self) -> Result<Pipeline> {
        if self.workers == 0 {
            return Err(Error::NoWorkers);
        }
        let downloader = match self.downloader {
            Some(downloader) => downloader,
            None => DownloaderBuilder::new().build()?,
        };

        Ok(Pipeline {
            workers: self.workers,
            recursive: self.recursive,
            queue_capacity: self.queue_capacity,
            on_progress: self.on_progress,
            downloader,
        })
    }
}

/// A configured run, reusable across root sets.
pub struct Pipeline {
    workers: usize,
    recursive: bool,
    queue_capacity: usize,
    on_progress: Option<Arc<ProgressCallback>>,
    downloader: Downloader,
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("workers", &self.workers)
            .field("recursive", &self.recursive)
            .field("queue_capacity", &self.queue_capacity)
            .field("downloader", &self.downloader)
            .finish()
    }
}

impl Pipeline {
    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn recursive(&self) -> bool {
        self.recursive
    }

    /// Processes every root and returns the final statistics.
    ///
    /// Fails only on configuration errors, before any file is touched.
    pub async fn run(&self, roots: &[PathBuf]) -> Result<AggregateStats> {
        if roots.is_empty() {
            return Err(Error::NoScanRoots);
        }
        let targets = roots
            .iter()
            .map(|root| ScanTarget::new(root, self.recursive))
            .collect::<Result<Vec<_>>>()?;

        let (job_tx, job_rx) = mpsc::channel::<FileJob>(self.queue_capacity);
        let (result_tx, result_rx) = mpsc::channel::<FileReport>(self.queue_capacity);

        let aggregator = tokio::spawn(aggregator::aggregate(result_rx));

        let job_rx = Arc::new(Mutex::new(job_rx));
        let mut workers = Vec::with_capacity(self.workers);
        for id in 1..=self.workers {
            workers.push(tokio::spawn(worker::run_worker(
                id,
                job_rx.clone(),
                result_tx.clone(),
                self.downloader.clone(),
            )));
        }
        info!(workers = self.workers, "Started workers");

        // The scanner owns the only job sender; the queue closes when it returns.
        let on_progress = self.on_progress.clone();
        let scanner = tokio::task::spawn_blocking(move || {
            let mut scanner = Scanner::new(job_tx).with_progress(on_progress);
            for target in &targets {
                info!(root = %target.root().display(), recursive = target.recursive(), "Scanning");
                if scanner.scan(target).is_break() {
                    break;
                }
            }
            scanner.emitted()
        });

        match scanner.await {
            Ok(emitted) => debug!(files = emitted, "Scan finished"),
            Err(e) => warn!(error = %e, "Scanner task failed"),
        }

        for handle in workers {
            if let Err(e) = handle.await {
                warn!(error = %e, "Worker task failed");
            }
        }
        drop(result_tx);

        Ok(aggregator.await?)
    }
}

/// Runs a pipeline with the default downloader.
pub async fn run(roots: &[PathBuf], recursive: bool, workers: usize) -> Result<AggregateStats> {
    PipelineBuilder::new()
        .workers(workers)
        .recursive(recursive)
        .build()?
        .run(roots)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_workers_rejected() {
        let err = PipelineBuilder::new().workers(0).build().unwrap_err();
        assert!(matches!(err, Error::NoWorkers));
    }

    #[test]
    fn test_queue_capacity_floor() {
        let builder = PipelineBuilder::new().queue_capacity(0);
        assert_eq!(builder.queue_capacity, 1);
    }

    #[tokio::test]
    async fn test_empty_roots_rejected() {
        let pipeline = PipelineBuilder::new().build().unwrap();
        let err = pipeline.run(&[]).await.unwrap_err();
        assert!(matches!(err, Error::NoScanRoots));
    }

    #[tokio::test]
    async fn test_missing_root_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = run(&[missing], false, 2).await.unwrap_err();
        assert!(matches!(err, Error::MissingRoot(_)));
        assert!(err.is_fatal_config());
    }
}
