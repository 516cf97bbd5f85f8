//! Command-line entry point for Account Vault.
//!
//! Logs go to stderr so stdout stays clean for tables and JSON.

mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "info";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_ansi(false),
        )
        .with(log_filter(
            std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref(),
        ))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli).await {
        tracing::error!("{e:#}");
        eprintln!("error: {e:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// `RUST_LOG` directives when set and valid, otherwise `info`.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = commands::load_config(cli.config.clone(), cli.lang.as_deref())?;
    tracing::debug!(
        "Using language {}, page size {}",
        config.language.code(),
        config.page_size
    );

    match &cli.command {
        Commands::Preview { input } => commands::preview(cli, config, input),
        Commands::PageWindow {
            current,
            total,
            max_visible,
        } => commands::page_window_cmd(cli, &config, *current, *total, *max_visible),
        Commands::Import {
            input,
            page,
            search,
        } => commands::import(cli, config, input, *page, search).await,
        Commands::Totp { secret } => commands::totp(cli, secret),
    }
}
