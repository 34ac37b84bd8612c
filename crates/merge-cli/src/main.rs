//! Command-line entry point: load one configuration file and print it.
//!
//! The path comes from the first argument, falling back to the
//! `MERGE_FILE_PATH` environment variable. The document is printed to
//! stdout as pretty JSON; logs go to stderr.

use anyhow::{bail, Context, Result};
use merge_files::FileUtils;
use std::env;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const PATH_ENV: &str = "MERGE_FILE_PATH";

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "merge_cli=info,merge_files=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run() {
        error!("Failed to print configuration file: {e:#}");
        return Err(e);
    }

    Ok(())
}

fn run() -> Result<()> {
    let path = resolve_path()?;
    info!(path = %path.display(), "Loading configuration file");

    let document = FileUtils::load_file_to_map(&path)
        .with_context(|| format!("Failed to load {}", path.display()))?;

    let rendered = serde_json::to_string_pretty(&document).context("Failed to render document")?;
    println!("{rendered}");
    Ok(())
}

fn resolve_path() -> Result<PathBuf> {
    if let Some(arg) = env::args_os().nth(1) {
        return Ok(PathBuf::from(arg));
    }
    match env::var_os(PATH_ENV) {
        Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
        _ => bail!("Usage: merge-cli <PATH> (or set {PATH_ENV})"),
    }
}
