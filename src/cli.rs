//! CLI argument definitions using clap derive macros.

use clap::Parser;
use std::path::PathBuf;

/// Scan directories for link files and download what they point to.
///
/// Every `.url`, `.md`, `.html`, `.htm` and `.txt` file found is searched for
/// http(s) links, and each link is downloaded next to the file it came from.
#[derive(Parser, Debug)]
#[command(name = "linkfetch")]
#[command(author, version, about)]
pub struct Args {
    /// Number of concurrent download workers
    #[arg(short, long)]
    pub workers: usize,

    /// Directory to scan (repeat for several roots)
    #[arg(short, long = "scan", value_name = "DIR", required = true)]
    pub scan: Vec<PathBuf>,

    /// Walk subdirectories of each scan root
    #[arg(short, long)]
    pub recursive: bool,

    /// Fetch GitHub repository links as branch archives
    #[arg(long)]
    pub github_archives: bool,

    /// Path to config.json (defaults to next to the executable, then the working directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Default tracing filter when `RUST_LOG` is not set.
    pub fn default_log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}
