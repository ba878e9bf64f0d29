//! E2E Wave 1: Discovery & File Name Parsing
//!
//! Tests for directory traversal, recursion and skipping of unparseable names.

use crate::common::{create_correct_file, create_test_file, run_in_memory, test_dir};
use powcheck_core::{PowCheckError, RunVerdict};

/// E2E Test 1: Invalid root is fatal and writes no report
#[test]
fn e2e_invalid_root_is_fatal() {
    let temp = test_dir();
    let captured = run_in_memory(&temp.path().join("nope"), true);

    assert!(matches!(captured.outcome, Err(PowCheckError::InvalidRoot(_))));
    assert!(captured.report.is_none(), "no report for an invalid root");
    assert_eq!(captured.lines.len(), 1);
}

/// E2E Test 2: Recursive run reaches nested files
#[test]
fn e2e_recursive_includes_subdirectories() {
    let temp = test_dir();
    create_correct_file(temp.path(), "p1.txt", 1);
    create_correct_file(temp.path(), "deep/er/p2.txt", 2);

    let outcome = run_in_memory(temp.path(), true).outcome.unwrap();
    assert_eq!(outcome.tally.checked(), 2);
    assert_eq!(outcome.tally.passed()[1].path, "deep/er/p2.txt");
}

/// E2E Test 3: Non-recursive run ignores nested files
#[test]
fn e2e_non_recursive_stays_at_root() {
    let temp = test_dir();
    create_correct_file(temp.path(), "p1.txt", 1);
    create_test_file(temp.path(), "sub/p2.txt", "wrong");

    let outcome = run_in_memory(temp.path(), false).outcome.unwrap();
    assert_eq!(outcome.tally.checked(), 1);
    assert_eq!(outcome.verdict, RunVerdict::AllCorrect);
}

/// E2E Test 4: Unparseable names are skipped, never counted
#[test]
fn e2e_unparseable_names_are_skipped() {
    let temp = test_dir();
    create_test_file(temp.path(), "data.txt", "garbage");
    create_test_file(temp.path(), "12notes.txt", "garbage");
    create_correct_file(temp.path(), "data007.txt", 7);

    let captured = run_in_memory(temp.path(), true);
    let outcome = captured.outcome.unwrap();

    assert_eq!(outcome.tally.checked(), 1);
    assert_eq!(outcome.tally.failed().len(), 0);
    assert_eq!(outcome.tally.skipped().len(), 2);
    assert_eq!(outcome.verdict, RunVerdict::AllCorrect);
    assert!(captured.lines.iter().any(|l| l.starts_with("Skip: data.txt")));
}

/// E2E Test 5: Only the trailing digit run is the exponent
#[test]
fn e2e_trailing_digit_run_is_exponent() {
    let temp = test_dir();
    create_correct_file(temp.path(), "v2final100.txt", 100);

    let outcome = run_in_memory(temp.path(), true).outcome.unwrap();
    assert!(outcome.all_correct());
    assert_eq!(outcome.tally.passed()[0].exponent.to_string(), "100");
}

/// E2E Test 6: Other extensions are ignored
#[test]
fn e2e_other_extensions_are_ignored() {
    let temp = test_dir();
    create_test_file(temp.path(), "p3.csv", "8");
    create_test_file(temp.path(), "p3.txt.bak", "8");

    let captured = run_in_memory(temp.path(), true);
    let outcome = captured.outcome.unwrap();
    assert_eq!(outcome.verdict, RunVerdict::NothingChecked);
    assert!(outcome.tally.skipped().is_empty());
}
