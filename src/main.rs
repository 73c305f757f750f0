use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use cs_host::bootstrap::{run_app, RunOptions};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Detection {
    Length,
    Content,
}

impl Detection {
    fn as_config_value(self) -> &'static str {
        match self {
            Detection::Length => "length",
            Detection::Content => "content",
        }
    }
}

/// Clipboard-history viewer, run headless against an in-memory backend.
///
/// Prints the document markup on start and after every re-render.
#[derive(Debug, Parser)]
#[command(name = "clipshelf", version, about)]
struct Cli {
    /// Config file (defaults to config.toml in the app data directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed the backend with an entry; repeat for more, newest first
    #[arg(long = "seed", value_name = "TEXT")]
    seed: Vec<String>,

    /// Exit after this many sync ticks instead of waiting for Ctrl-C
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    ticks: Option<u32>,

    /// Polling interval in milliseconds
    #[arg(long = "interval-ms", value_name = "MS")]
    interval_ms: Option<u64>,

    /// How a changed history is detected
    #[arg(long, value_enum)]
    detection: Option<Detection>,
}

impl From<Cli> for RunOptions {
    fn from(cli: Cli) -> Self {
        RunOptions {
            config_path: cli.config,
            seed: cli.seed,
            ticks: cli.ticks,
            interval_ms: cli.interval_ms,
            detection: cli.detection.map(|d| d.as_config_value().to_string()),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_app(cli.into()).await
}
