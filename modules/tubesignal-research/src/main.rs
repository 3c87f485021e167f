use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tubesignal_common::{Config, DEFAULT_MAX_VIDEOS};
use tubesignal_research::ResearchPipeline;

/// Search YouTube for a keyword and extract top comments into a report.
#[derive(Parser, Debug)]
#[command(name = "tubesignal", version)]
struct Cli {
    /// Keyword or topic to research
    keyword: String,

    /// Maximum number of videos to analyze
    #[arg(long, default_value_t = DEFAULT_MAX_VIDEOS, value_parser = clap::value_parser!(u32).range(1..))]
    max_videos: u32,

    /// Output file path (defaults to stdout)
    #[arg(long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("tubesignal_research=info".parse()?)
                .add_directive("tubesignal_common=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    let config = Config::from_env();
    config.log_redacted();

    let pipeline = ResearchPipeline::from_config(&config, cli.max_videos);
    let report = pipeline.run(&cli.keyword).await?;

    match cli.output {
        Some(path) => {
            std::fs::write(&path, &report)?;
            info!(path = %path.display(), "Report saved");
        }
        None => println!("{report}"),
    }

    Ok(())
}
