//! Content verification.
//!
//! Computes the exact decimal expansion of 2^N and compares it against the
//! trimmed content of a file. Leading and trailing whitespace is the only
//! normalisation applied; interior whitespace is significant.
//!
//! Expansions are bounded by a memory budget. 2^N has `floor(N * log10 2) + 1`
//! digits, so content of the wrong length is a mismatch even when the
//! expansion itself is too large to build.

use std::path::Path;

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};

use crate::config::DEFAULT_MAX_EXPANSION_BYTES;
use crate::error::{PowCheckError, Result};
use crate::types::{CandidateFile, Exponent, Verdict, VerificationResult};

const LOG10_2: f64 = std::f64::consts::LOG10_2;

/// Outcome of comparing one file against its expansion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// Pass, fail, or error
    pub verdict: Verdict,
    /// Decimal expansion of 2^N, empty if it was not computed
    pub expected: String,
    /// Trimmed file content, or the error text
    pub actual: String,
}

/// Inclusive bounds on the number of decimal digits of 2^`exponent`.
///
/// The bounds are at most one apart and always contain the true count.
/// Returns `None` when the exponent does not fit in 64 bits, in which case
/// the count exceeds any length a file in memory could have.
pub fn decimal_digit_bounds(exponent: &Exponent) -> Option<(u64, u64)> {
    let n = exponent.0.to_u64()?;
    let x = n as f64 * LOG10_2;
    let slack = x * 1e-12 + 1e-9;
    let low = (x - slack).floor().max(0.0) as u64 + 1;
    let high = (x + slack).floor() as u64 + 1;
    Some((low, high))
}

/// Estimated bytes needed to expand 2^`exponent`: the big integer plus its
/// decimal string.
pub fn expansion_cost(exponent: &Exponent) -> Option<u64> {
    let bits = exponent.0.to_u64()?;
    let (_, digits) = decimal_digit_bounds(exponent)?;
    (bits / 8 + 1).checked_add(digits)
}

/// Verifies file contents against powers of two within a memory budget.
#[derive(Clone, Copy, Debug)]
pub struct Verifier {
    max_expansion_bytes: u64,
}

impl Default for Verifier {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_EXPANSION_BYTES)
    }
}

impl Verifier {
    /// Creates a verifier that refuses expansions costing more than
    /// `max_expansion_bytes`.
    pub fn new(max_expansion_bytes: u64) -> Self {
        Self { max_expansion_bytes }
    }

    /// Returns the decimal string of 2^`exponent`.
    ///
    /// # Errors
    ///
    /// Returns [`PowCheckError::ExponentTooLarge`] when the expansion would
    /// exceed the memory budget. Nothing is allocated in that case.
    pub fn power_of_two_decimal(&self, exponent: &Exponent) -> Result<String> {
        let shift = expansion_cost(exponent)
            .filter(|&cost| cost <= self.max_expansion_bytes)
            .and_then(|_| exponent.0.to_usize())
            .ok_or_else(|| PowCheckError::ExponentTooLarge(exponent.to_string()))?;

        Ok((BigUint::one() << shift).to_str_radix(10))
    }

    /// Verifies that the file at `path` holds exactly 2^`exponent`.
    ///
    /// Never fails: a read or decode error, or an exponent beyond the budget
    /// whose content has a plausible length, becomes [`Verdict::Error`] with
    /// the error text in `actual`.
    pub fn verify_file(&self, path: &Path, exponent: &Exponent) -> Outcome {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                let text = e.to_string();
                tracing::debug!(path = %path.display(), error = %text, "read failed");
                return Outcome {
                    verdict: Verdict::Error(text.clone()),
                    expected: self.power_of_two_decimal(exponent).unwrap_or_default(),
                    actual: text,
                };
            }
        };

        let actual = content.trim().to_string();
        let length_fits = decimal_digit_bounds(exponent)
            .map(|(low, high)| (low..=high).contains(&(actual.len() as u64)))
            .unwrap_or(false);

        match self.power_of_two_decimal(exponent) {
            Ok(expected) => {
                let verdict = if length_fits && actual == expected {
                    Verdict::Pass
                } else {
                    Verdict::Fail
                };
                Outcome { verdict, expected, actual }
            }
            Err(_) if !length_fits => {
                tracing::debug!(path = %path.display(), %exponent, "length mismatch, expansion skipped");
                Outcome {
                    verdict: Verdict::Fail,
                    expected: String::new(),
                    actual,
                }
            }
            Err(e) => {
                let text = e.to_string();
                tracing::warn!(path = %path.display(), error = %text, "expansion over budget");
                Outcome {
                    verdict: Verdict::Error(text.clone()),
                    expected: String::new(),
                    actual: text,
                }
            }
        }
    }

    /// Verifies a discovered candidate.
    ///
    /// Returns `None` for candidates without an exponent; those are skipped
    /// and never produce a result.
    pub fn verify_candidate(&self, candidate: &CandidateFile) -> Option<VerificationResult> {
        let exponent = candidate.exponent.as_ref()?;
        let outcome = self.verify_file(&candidate.path, exponent);
        Some(VerificationResult {
            exponent: exponent.clone(),
            relative_path: candidate.relative.clone(),
            expected: outcome.expected,
            actual: outcome.actual,
            verdict: outcome.verdict,
        })
    }
}
