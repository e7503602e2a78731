//! Tracing initialization for the bot: one fmt subscriber teeing stdout and an
//! append-mode log file.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{fmt::writer::MakeWriterExt, EnvFilter};

/// Installs the global tracing subscriber, creating the log file's parent
/// directory if needed. The same lines go to stdout and to `log_file_path`
/// (append mode, no ANSI escapes so the file stays grep-friendly).
///
/// The filter comes from RUST_LOG (default "info"). Load .env (e.g.
/// dotenvy::dotenv()) before calling this, or RUST_LOG from the file will not
/// take effect. Messages are processed one logical path at a time, so thread
/// ids and span timing events are left out.
pub fn init_tracing(log_file_path: &str) -> anyhow::Result<()> {
    if let Some(parent) = Path::new(log_file_path).parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stdout.and(Arc::new(file)))
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    Ok(())
}
