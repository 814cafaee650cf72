//! CLI entry point for BookBot.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use bookbot::catalog::CatalogClient;
use bookbot::fetch::{AcquisitionSession, ContentStore, StdConsole};
use bookbot::stats;

mod cli;

use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Determine log level based on verbose/quiet flags
    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (warn).
    // Default is warn, not info: stdout carries the interactive conversation
    // and the report, so routine logs stay out of the way.
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    debug!(?args, "CLI arguments parsed");

    let book_path = match resolve_book_path(&args).await? {
        Some(path) => path,
        None => {
            // Cancelled or failed acquisition; messages were already shown.
            return Ok(());
        }
    };

    info!(path = %book_path.display(), "analyzing book");

    let text = tokio::fs::read_to_string(&book_path)
        .await
        .with_context(|| format!("failed to read book at {}", book_path.display()))?;

    print!("{}", stats::render_report(&book_path, &text));

    Ok(())
}

/// Picks the book to analyze: the supplied local path, or the result of an
/// interactive acquisition session.
async fn resolve_book_path(args: &Args) -> Result<Option<PathBuf>> {
    if let Some(path) = &args.file {
        return Ok(Some(path.clone()));
    }

    let client = CatalogClient::with_base_url(args.api_url.clone());
    let store = ContentStore::new(&args.books_dir);
    let session = AcquisitionSession::new(client, store, StdConsole);

    let outcome = session
        .run()
        .await
        .context("interactive book fetch failed")?;
    Ok(outcome)
}
