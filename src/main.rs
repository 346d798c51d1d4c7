//! CLI entry point for the bikeshare explorer.
//!
//! Prompts for a city and optional month/day filters, prints trip
//! statistics for the matching rows and offers to page through them.

use anyhow::Result;
use bikeshare_explorer::console::Console;
use bikeshare_explorer::session::{self, SessionConfig};
use clap::Parser;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{error, info};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "bikeshare_explorer")]
#[command(about = "Explore US bikeshare trip data interactively", long_about = None)]
struct Cli {
    /// Directory containing chicago.csv, new_york_city.csv and washington.csv
    #[arg(short, long, env = "BIKESHARE_DATA_DIR", default_value = ".")]
    data_dir: PathBuf,

    /// Also offer the last page of raw rows when it has fewer than five rows
    #[arg(long, env = "BIKESHARE_SHOW_REMAINDER", default_value_t = false)]
    show_remainder: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: stderr for warnings + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/bikeshare.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("bikeshare.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    // Stderr shares the terminal with the prompts, so it stays at warn by default.
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("warn".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    let config = SessionConfig {
        data_dir: cli.data_dir,
        show_remainder: cli.show_remainder,
    };
    info!(data_dir = %config.data_dir.display(), show_remainder = config.show_remainder, "Starting explorer");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    if let Err(e) = session::run(&mut console, &config) {
        let message = format!("{:#}", e);
        error!(error = %message, "Session aborted");
        return Err(e);
    }

    Ok(())
}
