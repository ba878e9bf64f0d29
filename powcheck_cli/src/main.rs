//! powcheck - verify that `<name><N>.txt` files hold the decimal value of 2^N.
//!
//! # Usage
//!
//! ```bash
//! # Check the current directory recursively
//! powcheck
//!
//! # Check one folder, debug logging on stderr
//! powcheck ./numbers --no-recursive --verbose
//! ```

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use powcheck_cli::{Cli, ExitStatus};

/// Initialize tracing subscriber with environment-based filtering.
///
/// - `quiet`: Suppress all logging output
/// - `verbose`: Enable debug-level logging
fn init_tracing(quiet: bool, verbose: bool) {
    let filter = if quiet {
        EnvFilter::new("off")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.quiet, cli.verbose);

    match powcheck_cli::execute(&cli) {
        Ok(status) => status.into(),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitStatus::Fatal.into()
        }
    }
}
