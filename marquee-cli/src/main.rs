//! Marquee CLI - Command-line interface
//!
//! Command-line access to movie title autocomplete, full-text search, and
//! catalog browsing against a remote movie API.

mod commands;

use clap::Parser;
use marquee_core::tracing_setup::{CliLogLevel, init_tracing};

#[derive(Parser)]
#[command(name = "marquee")]
#[command(about = "A movie search and browsing client")]
struct Cli {
    /// Console log level
    #[arg(long, value_enum, default_value_t = CliLogLevel::Warn, global = true)]
    log_level: CliLogLevel,

    #[command(subcommand)]
    command: commands::Commands,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.log_level, None)?;

    commands::handle_command(cli.command).await?;

    Ok(())
}
