//! # Rail Terminal
//!
//! Interactive menu for the Rail Reservation system.
//!
//! ## Startup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Parse arguments         --config, --data-dir, --help                │
//! │  2. Load AppConfig          defaults → rail.toml → RAIL_* env           │
//! │  3. Init tracing            RUST_LOG, else [logging] filter (stderr)    │
//! │  4. Open Session            default trains, then trains.csv/tickets.csv │
//! │  5. Menu loop               until 0 or end of input                     │
//! │  6. Save                    trains.csv, tickets.csv                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```bash
//! rail
//! rail --data-dir ./data
//! rail --config ./rail.toml
//! RUST_LOG=rail_core=debug rail
//! ```

pub mod commands;
pub mod error;
pub mod menu;
pub mod state;
pub mod view;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use rail_store::CsvStore;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::error::AppResult;
use crate::menu::Console;
use crate::state::{AppConfig, Session};

// =============================================================================
// Arguments
// =============================================================================

/// Command line options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    /// Config file to read instead of the platform default
    pub config: Option<PathBuf>,

    /// Overrides `[storage] data_dir`
    pub data_dir: Option<PathBuf>,

    pub help: bool,
}

impl CliArgs {
    /// Parses arguments (program name already removed).
    ///
    /// Unknown arguments are ignored. A flag missing its value is ignored too.
    pub fn parse<I: IntoIterator<Item = String>>(args: I) -> Self {
        let mut parsed = CliArgs::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" | "-c" => {
                    if let Some(path) = args.next() {
                        parsed.config = Some(PathBuf::from(path));
                    }
                }
                "--data-dir" | "-d" => {
                    if let Some(dir) = args.next() {
                        parsed.data_dir = Some(PathBuf::from(dir));
                    }
                }
                "--help" | "-h" => parsed.help = true,
                _ => {}
            }
        }

        parsed
    }
}

fn print_usage() {
    println!("Railway Reservation System");
    println!();
    println!("Usage: rail [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -c, --config <PATH>    Config file (default: platform config dir/rail.toml)");
    println!("  -d, --data-dir <DIR>   Directory holding trains.csv and tickets.csv");
    println!("  -h, --help             Show this help message");
}

// =============================================================================
// Entry Point
// =============================================================================

/// Runs the terminal app against stdin/stdout/stderr.
///
/// Exit status is 1 only when an error escapes the menu loop.
pub fn run() -> ExitCode {
    let args = CliArgs::parse(std::env::args().skip(1));
    if args.help {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let (mut config, config_error) = match AppConfig::load(args.config) {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::from_env(), Some(e)),
    };
    if let Some(dir) = args.data_dir {
        config.storage.data_dir = dir;
    }

    init_tracing(&config.logging.filter);
    if let Some(e) = config_error {
        warn!(error = %e, "Config file ignored");
        eprintln!("Note: {e}. Using default settings.");
    }

    let stdin = io::stdin();
    let result = run_with(&config, stdin.lock(), io::stdout().lock(), io::stderr().lock());

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = %e.code, error = %e, "Application stopped");
            eprintln!("Critical error: {e}");
            eprintln!("The application will now exit.");
            ExitCode::FAILURE
        }
    }
}

/// Opens the session from `config` and runs the menu over the given streams.
pub fn run_with<R, W, E>(config: &AppConfig, input: R, mut out: W, err: E) -> AppResult<()>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let store = CsvStore::new(config.store_config());
    info!(
        trains = %store.trains_path().display(),
        tickets = %store.tickets_path().display(),
        "Starting"
    );

    writeln!(out, "Welcome to Railway Reservation System!")?;
    let mut session = Session::open(store, &mut out)?;

    let mut console = Console::new(input, out, err);
    menu::run_menu(&mut session, &mut console)?;
    Ok(())
}

/// Installs the stderr subscriber. `RUST_LOG` wins over `default_filter`.
pub fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // A subscriber may already be installed (tests); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

// =============================================================================
// Unit Tests
// =============================================================================
