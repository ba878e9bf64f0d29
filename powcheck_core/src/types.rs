//! Core types for powcheck.

use std::path::{Path, PathBuf};

use num_bigint::BigUint;

/// Exponent parsed from a file name's trailing digit run.
///
/// Backed by an arbitrary-precision integer so that no file name is rejected
/// for having too many digits.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Exponent(pub BigUint);

impl std::fmt::Display for Exponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Exponent {
    fn from(n: u64) -> Self {
        Self(BigUint::from(n))
    }
}

/// A file found by the walker.
///
/// Created once during scanning and consumed once by the verifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateFile {
    /// Path as discovered (root joined with the entry name)
    pub path: PathBuf,
    /// Path relative to the root, `/`-separated
    pub relative: String,
    /// Exponent derived from the file name, if any
    pub exponent: Option<Exponent>,
}

impl CandidateFile {
    /// Builds a candidate for `path` found under `root`.
    ///
    /// Names that are not valid UTF-8 are parsed lossily; the file itself is
    /// still read through `path`.
    pub fn new(root: &Path, path: PathBuf) -> Self {
        let relative = relative_display(root, &path);
        let exponent = path
            .file_name()
            .and_then(|name| crate::parse::exponent_from_file_name(&name.to_string_lossy()));
        Self { path, relative, exponent }
    }
}

/// Renders `path` relative to `root` with `/` separators.
pub fn relative_display(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Per-file outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Content matched the expansion exactly
    Pass,
    /// Content differed from the expansion
    Fail,
    /// File could not be read or decoded, or its expansion exceeded the
    /// budget; carries the error text
    Error(String),
}

impl Verdict {
    /// Only `Pass` counts as success.
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }
}

/// Result of verifying one file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerificationResult {
    /// Exponent N the file claims to hold 2^N for
    pub exponent: Exponent,
    /// Path relative to the root
    pub relative_path: String,
    /// Decimal expansion of 2^N (empty when it could not be computed)
    pub expected: String,
    /// Trimmed file content, or the error text for `Verdict::Error`
    pub actual: String,
    /// Outcome
    pub verdict: Verdict,
}
