//! Bookshelf CLI
//!
//! Runs the interactive book-tracking menu.

use std::io;
use std::path::PathBuf;

use bookshelf::config::DEFAULT_DATA_FILE;
use bookshelf::shell::Shell;
use bookshelf::{Config, Library};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

/// Bookshelf
#[derive(Parser, Debug)]
#[command(name = "bookshelf")]
#[command(about = "Track the books you own and the ones you have read")]
#[command(version)]
struct Args {
    /// Library file
    #[arg(short, long, default_value = DEFAULT_DATA_FILE)]
    data_file: PathBuf,

    /// Log filter (overrides RUST_LOG), e.g. "debug" or "bookshelf=info"
    #[arg(short, long)]
    log_level: Option<String>,
}

fn main() {
    let args = Args::parse();

    // Logs go to stderr, kept off stdout so piped menu output stays clean.
    // Recoverable conditions log below `warn`, so the default prints nothing.
    let filter = match &args.log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    tracing::info!("Bookshelf v{}", bookshelf::VERSION);
    tracing::info!("Library file: {}", args.data_file.display());

    let config = Config::builder().data_file(args.data_file).build();

    let library = match Library::open(config) {
        Ok(library) => library,
        Err(e) => {
            tracing::error!("Failed to open library: {}", e);
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(library, stdin.lock(), stdout.lock());

    if let Err(e) = shell.run() {
        tracing::error!("Session failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
