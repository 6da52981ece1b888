//! Prepmine CLI - mine categorized interview questions from scraped reviews.

use clap::Parser;
use prepmine_cli::commands;
use prepmine_cli::{Cli, Command, Config, Formatter};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> prepmine_cli::Result<()> {
    let cli = Cli::parse();

    // Load config from the given path, or the default location
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Extract(args) => {
            commands::execute_extract(args, &config, &formatter).await?;
        }
        Command::Classify(args) => {
            commands::execute_classify(args, &formatter)?;
        }
        Command::Report(args) => {
            commands::execute_report(args, &formatter)?;
        }
    }

    Ok(())
}
