//! Single-writer statistics aggregation.
//!
//! The aggregator task owns its [`AggregateStats`] outright and hands it back
//! through its join handle once the result queue is closed and drained, so
//! the counters need no atomics or locks.

use super::worker::FileReport;
use crate::download::Status;

use std::fmt;
use tokio::sync::mpsc;
use tracing::debug;

/// Run-level counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregateStats {
    /// Files handed to a worker, readable or not.
    pub files_scanned: u64,
    /// URLs that passed validation, summed over files.
    pub urls_found: u64,
    pub downloads_succeeded: u64,
    pub downloads_skipped: u64,
    pub downloads_failed: u64,
}

impl AggregateStats {
    /// Folds one file's report into the counters.
    pub fn record(&mut self, report: &FileReport) {
        self.files_scanned += 1;
        self.urls_found += report.url_count() as u64;
        for outcome in report.outcomes() {
            match outcome.status() {
                Status::Success => self.downloads_succeeded += 1,
                Status::Skipped(_) => self.downloads_skipped += 1,
                Status::Failed(_) => self.downloads_failed += 1,
            }
        }
    }

    /// Total download attempts, whatever their status.
    pub fn downloads_attempted(&self) -> u64 {
        self.downloads_succeeded + self.downloads_skipped + self.downloads_failed
    }
}

impl fmt::Display for AggregateStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary")?;
        writeln!(f, "=======")?;
        writeln!(f, "Files scanned: {}", self.files_scanned)?;
        writeln!(f, "URLs found: {}", self.urls_found)?;
        writeln!(f, "Downloads succeeded: {}", self.downloads_succeeded)?;
        writeln!(f, "Downloads skipped: {}", self.downloads_skipped)?;
        write!(f, "Downloads failed: {}", self.downloads_failed)
    }
}

/// Consumes reports until the queue is closed and empty.
pub(crate) async fn aggregate(mut results: mpsc::Receiver<FileReport>) -> AggregateStats {
    let mut stats = AggregateStats::default();
    while let Some(report) = results.recv().await {
        stats.record(&report);
    }
    debug!(?stats, "Result queue drained");
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::download::DownloadOutcome;
    use std::path::PathBuf;

    fn report(outcomes: Vec<DownloadOutcome>) -> FileReport {
        let mut report = FileReport::new(PathBuf::from("/data/a.md"), outcomes.len());
        for outcome in outcomes {
            report.push(outcome);
        }
        report
    }

    #[test]
    fn test_record_counts_each_status() {
        let mut stats = AggregateStats::default();
        stats.record(&report(vec![
            DownloadOutcome::new("https://host.test/a").succeed(10),
            DownloadOutcome::new("https://host.test/b").skip("file already exists"),
            DownloadOutcome::new("https://host.test/c").fail("HTTP 404: Not Found"),
            DownloadOutcome::new("https://host.test/d").succeed(1),
        ]));
        stats.record(&report(Vec::new()));

        assert_eq!(
            stats,
            AggregateStats {
                files_scanned: 2,
                urls_found: 4,
                downloads_succeeded: 2,
                downloads_skipped: 1,
                downloads_failed: 1,
            }
        );
        assert_eq!(stats.downloads_attempted(), 4);
    }

    #[tokio::test]
    async fn test_aggregate_drains_until_closed() {
        let (tx, rx) = mpsc::channel(2);
        let handle = tokio::spawn(aggregate(rx));

        for _ in 0..5 {
            tx.send(report(vec![DownloadOutcome::new("https://host.test/a").succeed(1)]))
                .await
                .unwrap();
        }
        drop(tx);

        let stats = handle.await.unwrap();
        assert_eq!(stats.files_scanned, 5);
        assert_eq!(stats.downloads_succeeded, 5);
    }

    #[test]
    fn test_display_lists_all_counters() {
        let text = AggregateStats::default().to_string();
        for label in [
            "Files scanned",
            "URLs found",
            "Downloads succeeded",
            "Downloads skipped",
            "Downloads failed",
        ] {
            assert!(text.contains(label), "missing {label}");
        }
    }
}
