//! powcheck command-line layer.
//!
//! This crate wires the core pipeline to the outside world:
//!
//! - Argument parsing and configuration merging
//! - Host environment probe
//! - Console narration and the report file
//! - Exit status mapping

pub mod cli;

pub use cli::{execute, Cli, ExitStatus};
