//! Result aggregation.

use crate::types::{Exponent, VerificationResult};

/// Overall outcome of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunVerdict {
    /// At least one file was checked and every checked file passed
    AllCorrect,
    /// At least one checked file failed or errored
    SomeFailed,
    /// Nothing was checked
    NothingChecked,
}

impl RunVerdict {
    /// Whether the run counts as a success.
    pub fn is_success(self) -> bool {
        matches!(self, Self::AllCorrect)
    }
}

/// An `(exponent, relative path)` pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// Exponent parsed from the file name
    pub exponent: Exponent,
    /// Path relative to the root
    pub path: String,
}

/// Accumulates per-file results in discovery order.
#[derive(Clone, Debug, Default)]
pub struct Tally {
    passed: Vec<Entry>,
    failed: Vec<Entry>,
    skipped: Vec<String>,
}

impl Tally {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a checked file.
    pub fn record(&mut self, result: &VerificationResult) {
        let entry = Entry {
            exponent: result.exponent.clone(),
            path: result.relative_path.clone(),
        };
        if result.verdict.is_pass() {
            self.passed.push(entry);
        } else {
            self.failed.push(entry);
        }
    }

    /// Records a file whose name carried no exponent.
    pub fn skip(&mut self, relative_path: impl Into<String>) {
        self.skipped.push(relative_path.into());
    }

    /// Files checked, regardless of verdict.
    pub fn checked(&self) -> usize {
        self.passed.len() + self.failed.len()
    }

    /// Passing files in discovery order.
    pub fn passed(&self) -> &[Entry] {
        &self.passed
    }

    /// Failing files in discovery order.
    pub fn failed(&self) -> &[Entry] {
        &self.failed
    }

    /// Skipped files in discovery order.
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    /// Failing files sorted ascending by exponent.
    ///
    /// The sort is stable, so files sharing an exponent keep discovery order.
    pub fn failures_sorted(&self) -> Vec<Entry> {
        let mut sorted = self.failed.clone();
        sorted.sort_by(|a, b| a.exponent.cmp(&b.exponent));
        sorted
    }

    /// Overall verdict.
    pub fn verdict(&self) -> RunVerdict {
        if self.checked() == 0 {
            RunVerdict::NothingChecked
        } else if self.failed.is_empty() {
            RunVerdict::AllCorrect
        } else {
            RunVerdict::SomeFailed
        }
    }
}
