use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;
use verdict_core::DecisionEngine;

/// Output format for the answer
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "verdict")]
#[command(version, about = "Verdict - tool-using decision agent with domain rules")]
struct Cli {
    /// The question to answer, free text or a JSON domain query
    query: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Output format
    #[arg(long, default_value = "text")]
    format: OutputFormat,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_directive = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .init();

    let engine = DecisionEngine::from_env().context("failed to configure decision engine")?;
    info!("verdict started");
    let answer = engine
        .answer(&cli.query)
        .await
        .context("query did not produce an answer")?;
    info!(iterations = answer.iterations, "query finished");

    match cli.format {
        OutputFormat::Text => println!("{}", answer.answer),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&answer)?),
    }
    Ok(())
}
