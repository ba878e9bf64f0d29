//! Reporting.
//!
//! Two independent sinks receive output from a run:
//!
//! - a [`Narrator`] gets one human-readable progress line at a time
//! - a [`ReportSink`] gets the finished report text exactly once
//!
//! Rendering is pure so the report format can be tested without any I/O.

use std::fmt::Write as _;
use std::path::{Component, Path, PathBuf};
use std::time::Duration;

use chrono::{DateTime, Local};

use crate::aggregate::{Entry, Tally};
use crate::environment::EnvironmentSnapshot;
use crate::error::{PowCheckError, Result};
use crate::types::{Verdict, VerificationResult};

/// Sole content of the report when nothing was checked.
pub const NO_FILES_MESSAGE: &str = "No checkable text files were found.";

/// Receives progress lines.
pub trait Narrator {
    /// Appends one line of narration.
    fn line(&mut self, text: &str);
}

/// Receives the finished report.
pub trait ReportSink {
    /// Stores the rendered report.
    fn finalize(&mut self, report: &str) -> Result<()>;

    /// Where the report ends up, for narration.
    fn location(&self) -> String;
}

/// Prints narration to stdout.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleNarrator;

impl Narrator for ConsoleNarrator {
    fn line(&mut self, text: &str) {
        println!("{}", text);
    }
}

/// Writes the report to a UTF-8 file.
#[derive(Clone, Debug)]
pub struct FileReport {
    path: PathBuf,
}

impl FileReport {
    /// Creates a sink targeting `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

}

impl ReportSink for FileReport {
    fn finalize(&mut self, report: &str) -> Result<()> {
        std::fs::write(&self.path, report).map_err(|source| PowCheckError::ReportWrite {
            path: self.path.clone(),
            source,
        })?;
        tracing::info!(path = %self.path.display(), bytes = report.len(), "report written");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Collects narration in memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryNarrator {
    /// Lines received so far
    pub lines: Vec<String>,
}

impl Narrator for MemoryNarrator {
    fn line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}

/// Keeps the report in memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryReport {
    /// The finalized report, if any
    pub contents: Option<String>,
}

impl ReportSink for MemoryReport {
    fn finalize(&mut self, report: &str) -> Result<()> {
        self.contents = Some(report.to_string());
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}

/// Aggregate of a completed run, as written to the report.
#[derive(Clone, Debug)]
pub struct RunSummary {
    /// When the run started
    pub started_at: DateTime<Local>,
    /// Absolute folder path, without `.` or `..` components
    pub root: PathBuf,
    /// Whether subdirectories were included
    pub recursive: bool,
    /// Wall time spent scanning and verifying
    pub elapsed: Duration,
    /// Files checked
    pub checked: usize,
    /// Files that passed
    pub passed: usize,
    /// Files that failed or errored
    pub failed: usize,
    /// Failing files, ascending by exponent
    pub failures: Vec<Entry>,
    /// Host facts
    pub environment: EnvironmentSnapshot,
}

impl RunSummary {
    /// Builds a summary from a finished tally.
    pub fn new(
        started_at: DateTime<Local>,
        root: &Path,
        recursive: bool,
        elapsed: Duration,
        tally: &Tally,
        environment: EnvironmentSnapshot,
    ) -> Self {
        let root = std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf());
        Self {
            started_at,
            root: normalize_lexically(&root),
            recursive,
            elapsed,
            checked: tally.checked(),
            passed: tally.passed().len(),
            failed: tally.failed().len(),
            failures: tally.failures_sorted(),
            environment,
        }
    }
}

/// Removes `.` and resolves `..` components without touching the filesystem.
///
/// `..` at the root stays at the root. Symlinks are not resolved.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                } else if !out.has_root() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}

/// Formats a duration as `HH:MM:SS.mmm`.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total_ms = elapsed.as_millis();
    let hours = total_ms / 3_600_000;
    let minutes = (total_ms / 60_000) % 60;
    let seconds = (total_ms / 1_000) % 60;
    let millis = total_ms % 1_000;
    format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, seconds, millis)
}

/// First `chars` characters of `text`.
pub fn preview(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Renders the full report.
pub fn render_report(summary: &RunSummary) -> String {
    let env = &summary.environment;
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "# Verified at: {}", summary.started_at.format("%Y-%m-%d %H:%M:%S"));
    let _ = writeln!(out, "# Folder: {}", summary.root.display());
    let _ = writeln!(
        out,
        "# Include subdirectories: {}",
        if summary.recursive { "yes" } else { "no" }
    );
    let _ = writeln!(
        out,
        "# Elapsed: {} (total {} files)",
        format_elapsed(summary.elapsed),
        summary.checked
    );
    out.push('\n');

    out.push_str("# System information\n");
    let _ = writeln!(
        out,
        "# CPU: {} ({} physical cores, {} logical cores)",
        env.cpu_model, env.physical_cores, env.logical_cores
    );
    let _ = writeln!(
        out,
        "# Memory: total {}, available {}",
        env.total_memory, env.available_memory
    );
    let _ = writeln!(out, "# OS: {} {} ({})", env.os_name, env.os_release, env.os_version);
    let _ = writeln!(out, "# Runtime: {} {}", env.runtime_name, env.runtime_version);
    out.push('\n');

    let _ = writeln!(out, "OK: {}", summary.passed);
    let _ = writeln!(out, "NG: {}", summary.failed);

    if !summary.failures.is_empty() {
        out.push_str("\nFailing files (exponent: path)\n");
        for entry in &summary.failures {
            let _ = writeln!(out, "{}: {}", entry.exponent, entry.path);
        }
    }

    out
}

/// Renders the report for a run that checked nothing.
pub fn render_empty_report() -> String {
    format!("{}\n", NO_FILES_MESSAGE)
}

/// Narrates one checked file.
pub fn narrate_result(narrator: &mut dyn Narrator, result: &VerificationResult, preview_chars: usize) {
    match &result.verdict {
        Verdict::Pass => {
            narrator.line(&format!("File {} is correct", result.relative_path));
        }
        Verdict::Fail => {
            narrator.line(&format!("Error: file {} does not match.", result.relative_path));
            if result.expected.is_empty() {
                narrator.line(&format!(
                    "  expected: 2^{} (not expanded, digit count differs)",
                    result.exponent
                ));
            } else {
                narrator.line(&format!(
                    "  expected: 2^{} = {}... (truncated)",
                    result.exponent,
                    preview(&result.expected, preview_chars)
                ));
            }
            narrator.line(&format!(
                "  actual:   {}... (truncated)",
                preview(&result.actual, preview_chars)
            ));
        }
        Verdict::Error(message) => {
            narrator.line(&format!(
                "Error: a problem occurred while processing {}: {}",
                result.relative_path, message
            ));
        }
    }
}

/// Narrates a file skipped for lacking an exponent.
pub fn narrate_skip(narrator: &mut dyn Narrator, relative_path: &str) {
    narrator.line(&format!(
        "Skip: {} cannot be interpreted as a number.",
        relative_path
    ));
}
