//! File name parsing.
//!
//! A candidate's exponent is the maximal run of ASCII digits at the end of the
//! file stem, i.e. immediately before the extension.

use std::path::Path;
use std::sync::LazyLock;

use num_bigint::BigUint;
use regex::Regex;

use crate::types::Exponent;

static TRAILING_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)$").expect("static pattern"));

/// Extracts the exponent from a bare file name.
///
/// Only the last extension is stripped, so `a1.b.txt` has stem `a1.b` and no
/// exponent. Returns `None` when the stem has no trailing digit run.
///
/// # Examples
///
/// ```
/// use powcheck_core::parse::exponent_from_file_name;
/// use powcheck_core::Exponent;
///
/// assert_eq!(exponent_from_file_name("data007.txt"), Some(Exponent::from(7)));
/// assert_eq!(exponent_from_file_name("v2final100.txt"), Some(Exponent::from(100)));
/// assert_eq!(exponent_from_file_name("data.txt"), None);
/// ```
pub fn exponent_from_file_name(name: &str) -> Option<Exponent> {
    let stem = Path::new(name).file_stem()?.to_str()?;
    let digits = TRAILING_DIGITS.captures(stem)?.get(1)?.as_str();
    BigUint::parse_bytes(digits.as_bytes(), 10).map(Exponent)
}
