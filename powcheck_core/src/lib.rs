//! powcheck - Power-of-two file verification
//!
//! This crate verifies that text files named with a trailing integer `N`
//! (`data007.txt`, `v2final100.txt`) contain exactly the decimal expansion of
//! 2^N, and produces a summary report.
//!
//! # Overview
//!
//! A run is a single linear pipeline:
//!
//! - **Walker**: enumerates candidate files under a root folder
//! - **Parser**: extracts the exponent from each file name
//! - **Verifier**: computes 2^N exactly, within a memory budget, and compares
//!   it to the trimmed content
//! - **Aggregator**: tallies passes, failures and skipped files
//! - **Reporter**: narrates progress and renders the report file
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use powcheck_core::report::{ConsoleNarrator, FileReport};
//! use powcheck_core::{EnvironmentSnapshot, RunConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = RunConfig::builder().root("./numbers").build()?;
//!     let probe = EnvironmentSnapshot::unknown();
//!     let mut sink = FileReport::new(&config.report_path);
//!
//!     let outcome = powcheck_core::run(&config, &probe, &mut ConsoleNarrator, &mut sink)?;
//!     println!("all correct: {}", outcome.all_correct());
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! - [`types`]: Core types used across the crate
//! - [`error`]: Error types for run-level failures
//! - [`config`]: Run configuration
//! - [`walker`]: Directory traversal
//! - [`parse`]: File name parsing
//! - [`verify`]: Exact power-of-two comparison
//! - [`aggregate`]: Result tallying
//! - [`environment`]: Host environment snapshot model
//! - [`report`]: Narration and report sinks
//! - [`mod@run`]: Run orchestration

pub mod error;
pub mod types;

pub mod config;
pub mod walker;
pub mod parse;
pub mod verify;
pub mod aggregate;
pub mod environment;
pub mod report;
pub mod run;

// Re-export commonly used types
pub use error::{PowCheckError, Result};
pub use types::{CandidateFile, Exponent, Verdict, VerificationResult};
pub use config::{RunConfig, RunConfigBuilder};
pub use aggregate::{RunVerdict, Tally};
pub use environment::{EnvironmentProbe, EnvironmentSnapshot};
pub use report::{Narrator, ReportSink, RunSummary};
pub use run::{run, RunOutcome, RunState, Runner};
pub use verify::Verifier;
