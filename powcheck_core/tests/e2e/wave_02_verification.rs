//! E2E Wave 2: Content Verification
//!
//! Tests for exact comparison, whitespace handling and per-file errors.

use crate::common::{
    create_correct_file, create_test_file, power_of_two, run_in_memory, run_with_config, test_dir,
};
use powcheck_core::{Exponent, RunConfig, RunVerdict, Verdict, Verifier};

/// E2E Test 1: Correct content passes across a spread of exponents
#[test]
fn e2e_correct_content_passes() {
    let temp = test_dir();
    for n in [0u32, 1, 2, 10, 63, 64, 65, 127, 500, 1000, 4000] {
        let path = create_correct_file(temp.path(), &format!("pow{}.txt", n), n);
        let outcome = Verifier::default().verify_file(&path, &Exponent::from(u64::from(n)));
        assert_eq!(outcome.verdict, Verdict::Pass, "2^{} should pass", n);
    }
}

/// E2E Test 2: Any other content fails with expected and trimmed actual
#[test]
fn e2e_wrong_content_fails() {
    let temp = test_dir();
    let cases = [
        (5u32, "33"),
        (10, "  1025\n"),
        (20, "1048576.0"),
        (3, "0008"),
        (64, "18446744073709551615"),
    ];
    for (n, content) in cases {
        let path = create_test_file(temp.path(), &format!("w{}.txt", n), content);
        let outcome = Verifier::default().verify_file(&path, &Exponent::from(u64::from(n)));
        assert_eq!(outcome.verdict, Verdict::Fail);
        assert_eq!(outcome.expected, power_of_two(n));
        assert_eq!(outcome.actual, content.trim());
    }
}

/// E2E Test 3: Empty file fails with empty actual content
#[test]
fn e2e_empty_file_fails() {
    let temp = test_dir();
    create_test_file(temp.path(), "e9.txt", "");

    let captured = run_in_memory(temp.path(), true);
    let outcome = captured.outcome.unwrap();
    assert_eq!(outcome.verdict, RunVerdict::SomeFailed);
    assert_eq!(captured.lines[0], "Error: file e9.txt does not match.");
    assert_eq!(captured.lines[1], "  expected: 2^9 = 512... (truncated)");
    assert_eq!(captured.lines[2], "  actual:   ... (truncated)");
}

/// E2E Test 4: Undecodable file is a counted failure with its error surfaced
#[test]
fn e2e_undecodable_file_is_counted_failure() {
    let temp = test_dir();
    let path = temp.path().join("bad4.txt");
    std::fs::write(&path, [0xc3, 0x28]).unwrap();
    create_correct_file(temp.path(), "good4.txt", 4);

    let captured = run_in_memory(temp.path(), true);
    let outcome = captured.outcome.unwrap();

    assert_eq!(outcome.tally.checked(), 2);
    assert_eq!(outcome.tally.failed().len(), 1);
    assert_eq!(outcome.tally.failed()[0].path, "bad4.txt");
    assert!(captured.lines[0].starts_with("Error: a problem occurred while processing bad4.txt: "));
    assert_eq!(captured.lines[1], "File good4.txt is correct");
}

/// E2E Test 5: Dangling symlinks are not candidates
#[cfg(unix)]
#[test]
fn e2e_dangling_symlink_does_not_abort() {
    let temp = test_dir();
    std::os::unix::fs::symlink(temp.path().join("gone"), temp.path().join("a1.txt")).unwrap();
    create_correct_file(temp.path(), "b2.txt", 2);

    let outcome = run_in_memory(temp.path(), true).outcome.unwrap();
    // dangling links are not regular files and are not discovered
    assert_eq!(outcome.tally.checked(), 1);
    assert!(outcome.all_correct());
}

/// E2E Test 6: Thousands of digits compare exactly
#[test]
fn e2e_large_exponent() {
    let temp = test_dir();
    create_correct_file(temp.path(), "big20000.txt", 20_000);

    let mut off_by_one = power_of_two(20_000).into_bytes();
    let last = off_by_one.len() - 1;
    off_by_one[last] = if off_by_one[last] == b'6' { b'7' } else { b'6' };
    create_test_file(
        temp.path(),
        "bad20000.txt",
        std::str::from_utf8(&off_by_one).unwrap(),
    );

    let outcome = run_in_memory(temp.path(), true).outcome.unwrap();
    assert_eq!(outcome.tally.passed().len(), 1);
    assert_eq!(outcome.tally.failed().len(), 1);
    assert_eq!(outcome.tally.failed()[0].path, "bad20000.txt");
}

/// E2E Test 7: An exponent too large to expand is a counted failure, not an abort
#[test]
fn e2e_unexpandable_exponent_is_counted_failure() {
    let temp = test_dir();
    create_test_file(temp.path(), "a1.txt", "2");
    create_test_file(temp.path(), "x1099511627776.txt", "0");

    let captured = run_in_memory(temp.path(), true);
    let outcome = captured.outcome.unwrap();

    assert_eq!(outcome.verdict, RunVerdict::SomeFailed);
    assert_eq!(outcome.tally.checked(), 2);
    assert_eq!(outcome.tally.passed()[0].path, "a1.txt");
    assert_eq!(outcome.tally.failed()[0].path, "x1099511627776.txt");
    assert_eq!(captured.lines[0], "File a1.txt is correct");
    assert_eq!(captured.lines[1], "Error: file x1099511627776.txt does not match.");

    let report = captured.report.unwrap();
    assert!(report.contains("OK: 1\nNG: 1\n"));
    assert!(report.ends_with("1099511627776: x1099511627776.txt\n"));
}

/// E2E Test 8: Content of plausible length beyond the budget is an error verdict
#[test]
fn e2e_expansion_budget_yields_error() {
    let temp = test_dir();
    create_correct_file(temp.path(), "a3.txt", 3);
    create_correct_file(temp.path(), "p10000.txt", 10_000);

    let config = RunConfig::builder()
        .root(temp.path())
        .max_expansion_bytes(1_000)
        .build()
        .unwrap();
    let captured = run_with_config(&config);
    let outcome = captured.outcome.unwrap();

    assert_eq!(outcome.tally.checked(), 2);
    assert_eq!(outcome.tally.passed()[0].path, "a3.txt");
    assert_eq!(outcome.tally.failed()[0].path, "p10000.txt");
    assert_eq!(
        captured.lines[1],
        "Error: a problem occurred while processing p10000.txt: Exponent 10000 is too large to expand"
    );
}
