//! Command-line interface for powcheck.
//!
//! # Examples
//!
//! Check the current directory and its subdirectories:
//!
//! ```bash
//! $ powcheck
//! ```
//!
//! Check one folder only, writing the report elsewhere:
//!
//! ```bash
//! $ powcheck ./numbers --no-recursive --report /tmp/check_results.txt
//! ```
//!
//! Start from a JSON configuration file:
//!
//! ```bash
//! $ powcheck --config powcheck.json
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use powcheck_core::report::{ConsoleNarrator, FileReport};
use powcheck_core::{PowCheckError, RunConfig, RunConfigBuilder, RunVerdict};
use powcheck_host::HostProbe;

/// Final statement when every checked file passed.
pub const SUCCESS_STATEMENT: &str = "All files were verified correctly.";

/// Final statement for any other outcome.
pub const FAILURE_STATEMENT: &str = "Some or all files have problems.";

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "powcheck")]
#[command(version)]
#[command(about = "Verify that <name><N>.txt files contain the decimal value of 2^N")]
pub struct Cli {
    /// Folder to scan (default: current directory)
    #[arg(env = "POWCHECK_ROOT")]
    pub root: Option<PathBuf>,

    /// Report file to write (default: check_results.txt)
    #[arg(short, long, env = "POWCHECK_REPORT")]
    pub report: Option<PathBuf>,

    /// Only check the folder itself, not its subdirectories
    #[arg(long)]
    pub no_recursive: bool,

    /// JSON configuration file; command-line flags take precedence
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress all logging
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Builds the run configuration from the config file and flags.
    pub fn to_config(&self) -> powcheck_core::Result<RunConfig> {
        let base = match &self.config {
            Some(path) => RunConfig::from_json_file(path)?,
            None => RunConfig::default(),
        };

        let mut builder = RunConfigBuilder::from_config(base);
        if let Some(root) = &self.root {
            builder = builder.root(root);
        }
        if let Some(report) = &self.report {
            builder = builder.report_path(report);
        }
        if self.no_recursive {
            builder = builder.recursive(false);
        }
        builder.build()
    }
}

/// Process exit status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Every checked file passed
    Success,
    /// A file failed, or nothing was checked
    Failure,
    /// The run could not be carried out
    Fatal,
}

impl ExitStatus {
    /// Numeric exit code.
    pub fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Failure => 1,
            Self::Fatal => 2,
        }
    }
}

impl From<RunVerdict> for ExitStatus {
    fn from(verdict: RunVerdict) -> Self {
        match verdict {
            RunVerdict::AllCorrect => Self::Success,
            RunVerdict::SomeFailed | RunVerdict::NothingChecked => Self::Failure,
        }
    }
}

impl From<ExitStatus> for std::process::ExitCode {
    fn from(status: ExitStatus) -> Self {
        std::process::ExitCode::from(status.code())
    }
}

/// Runs the verification described by `cli`.
///
/// Configuration problems are returned as errors. A failed run is reported
/// on the console and mapped to [`ExitStatus::Fatal`].
pub fn execute(cli: &Cli) -> anyhow::Result<ExitStatus> {
    let config = cli.to_config().context("Failed to load configuration")?;

    println!("Checking files in folder '{}'...", config.root.display());
    if config.recursive {
        println!("Including subdirectories");
    }

    let probe = HostProbe::new();
    let mut sink = FileReport::new(&config.report_path);
    let outcome = match powcheck_core::run(&config, &probe, &mut ConsoleNarrator, &mut sink) {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!(error = %e, "run aborted");
            // invalid roots are already narrated by the run
            if !matches!(e, PowCheckError::InvalidRoot(_)) {
                eprintln!("Error: {}", e);
            }
            println!("{}", FAILURE_STATEMENT);
            return Ok(ExitStatus::Fatal);
        }
    };

    if outcome.all_correct() {
        println!("{}", SUCCESS_STATEMENT);
    } else {
        println!("{}", FAILURE_STATEMENT);
    }

    Ok(ExitStatus::from(outcome.verdict))
}
