//! CLI entry point for linkfetch.

use clap::Parser;
use color_eyre::Result;
use linkfetch::config::AppConfig;
use linkfetch::downloader::DownloaderBuilder;
use linkfetch::notify::play_chime;
use linkfetch::pipeline::PipelineBuilder;
use linkfetch::progress::{ProgressBarOpts, ProgressDisplay};
use tracing::{debug, warn};

mod cli;

use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();
    color_eyre::install()?;

    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(args.default_log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!(?args, "CLI arguments parsed");

    let config = load_config(&args);
    let github_archives = args.github_archives || config.github_archives;

    if !args.quiet {
        println!("linkfetch {}", env!("CARGO_PKG_VERSION"));
        println!("Workers: {}", args.workers);
        println!("Recursive: {}", args.recursive);
        for root in &args.scan {
            println!("Scanning: {}", root.display());
        }
        println!();
    }

    let downloader = DownloaderBuilder::new()
        .github_archives(github_archives)
        .build()?;

    let opts = match args.quiet {
        true => ProgressBarOpts::hidden(),
        false => ProgressBarOpts::default(),
    };
    let display = ProgressDisplay::new(opts);

    let pipeline = PipelineBuilder::new()
        .workers(args.workers)
        .recursive(args.recursive)
        .downloader(downloader)
        .on_progress(display.callback())
        .build()?;

    let stats = pipeline.run(&args.scan).await?;

    if !args.quiet {
        println!();
    }
    println!("{stats}");

    if let Some(chime) = config.completion_chime {
        play_chime(&chime).await;
    }

    Ok(())
}

/// Loads config.json, falling back to defaults on any problem.
fn load_config(args: &Args) -> AppConfig {
    let Some(path) = args.config.clone().or_else(AppConfig::locate) else {
        debug!("No config file found, using defaults");
        return AppConfig::default();
    };

    match AppConfig::from_file(&path) {
        Ok(config) => {
            debug!(path = %path.display(), ?config, "Loaded config");
            config
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to load config, using defaults");
            AppConfig::default()
        }
    }
}
