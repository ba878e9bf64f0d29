//! Run orchestration.
//!
//! A run moves through [`RunState::Scanning`], [`RunState::Verifying`],
//! [`RunState::Reporting`] and ends in [`RunState::Done`]. An invalid root goes
//! straight from scanning to [`RunState::Failed`] without producing a report;
//! a report the sink rejects moves reporting to [`RunState::Failed`].

use std::time::Instant;

use chrono::Local;

use crate::aggregate::{RunVerdict, Tally};
use crate::config::RunConfig;
use crate::environment::EnvironmentProbe;
use crate::error::Result;
use crate::report::{self, Narrator, ReportSink, RunSummary};
use crate::types::CandidateFile;
use crate::verify::Verifier;
use crate::walker;

/// Lifecycle of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    /// Enumerating candidate files
    Scanning,
    /// Checking file contents
    Verifying,
    /// Writing the report
    Reporting,
    /// Report written
    Done,
    /// Aborted without a written report
    Failed,
}

/// Result of a completed run.
#[derive(Clone, Debug)]
pub struct RunOutcome {
    /// Overall verdict
    pub verdict: RunVerdict,
    /// Per-file tally
    pub tally: Tally,
    /// Summary written to the report, absent when nothing was checked
    pub summary: Option<RunSummary>,
}

impl RunOutcome {
    /// Whether every checked file passed and at least one was checked.
    pub fn all_correct(&self) -> bool {
        self.verdict.is_success()
    }
}

/// Drives one verification run.
pub struct Runner<'a> {
    config: &'a RunConfig,
    probe: &'a dyn EnvironmentProbe,
    state: RunState,
}

impl<'a> Runner<'a> {
    /// Creates a runner for `config`, taking host facts from `probe`.
    pub fn new(config: &'a RunConfig, probe: &'a dyn EnvironmentProbe) -> Self {
        Self {
            config,
            probe,
            state: RunState::Scanning,
        }
    }

    /// Current state.
    pub fn state(&self) -> RunState {
        self.state
    }

    fn transition(&mut self, next: RunState) {
        tracing::info!(from = ?self.state, to = ?next, "run state change");
        self.state = next;
    }

    /// Executes the run.
    ///
    /// # Errors
    ///
    /// Fails if the root is not a readable directory, in which case no report
    /// is written, or if the report sink rejects the report.
    pub fn execute(
        &mut self,
        narrator: &mut dyn Narrator,
        sink: &mut dyn ReportSink,
    ) -> Result<RunOutcome> {
        let config = self.config;
        let environment = self.probe.snapshot();
        let started_at = Local::now();
        let timer = Instant::now();

        let paths = match walker::discover(&config.root, config.recursive, &config.extension) {
            Ok(paths) => paths,
            Err(e) => {
                self.transition(RunState::Failed);
                narrator.line(&format!("Error: {}", e));
                return Err(e);
            }
        };

        self.transition(RunState::Verifying);
        let verifier = Verifier::new(config.max_expansion_bytes);
        let mut tally = Tally::new();
        for path in paths {
            let candidate = CandidateFile::new(&config.root, path);
            match verifier.verify_candidate(&candidate) {
                Some(result) => {
                    report::narrate_result(narrator, &result, config.preview_chars);
                    tally.record(&result);
                }
                None => {
                    tracing::warn!(path = %candidate.relative, "no exponent in file name");
                    report::narrate_skip(narrator, &candidate.relative);
                    tally.skip(candidate.relative);
                }
            }
        }
        let elapsed = timer.elapsed();

        self.transition(RunState::Reporting);
        let verdict = tally.verdict();
        let summary = if verdict == RunVerdict::NothingChecked {
            narrator.line("Warning: no checkable text files were found.");
            self.finalize(sink, &report::render_empty_report())?;
            None
        } else {
            let summary = RunSummary::new(
                started_at,
                &config.root,
                config.recursive,
                elapsed,
                &tally,
                environment,
            );
            self.finalize(sink, &report::render_report(&summary))?;
            narrator.line("");
            narrator.line(&format!("Results saved to {}", sink.location()));
            Some(summary)
        };

        self.transition(RunState::Done);
        tracing::info!(
            checked = tally.checked(),
            passed = tally.passed().len(),
            failed = tally.failed().len(),
            skipped = tally.skipped().len(),
            "run complete"
        );

        Ok(RunOutcome { verdict, tally, summary })
    }

    fn finalize(&mut self, sink: &mut dyn ReportSink, contents: &str) -> Result<()> {
        sink.finalize(contents).inspect_err(|e| {
            tracing::error!(location = %sink.location(), error = %e, "report rejected");
            self.transition(RunState::Failed);
        })
    }
}

/// Runs verification with `config`, narrating to `narrator` and writing the
/// report to `sink`.
pub fn run(
    config: &RunConfig,
    probe: &dyn EnvironmentProbe,
    narrator: &mut dyn Narrator,
    sink: &mut dyn ReportSink,
) -> Result<RunOutcome> {
    Runner::new(config, probe).execute(narrator, sink)
}
