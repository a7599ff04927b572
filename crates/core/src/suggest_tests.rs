// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    identical    = { "foo",    "foo",    0 },
    substitution = { "commit", "commot", 1 },
    insertion    = { "chckout", "checkout", 1 },
    deletion     = { "clone",  "clon",   1 },
    both_empty   = { "",       "",       0 },
    left_empty   = { "",       "abc",    3 },
    right_empty  = { "abc",    "",       3 },
)]
fn edit_dist(a: &str, b: &str, expected: usize) {
    assert_eq!(edit_distance(a, b), expected);
}

#[test]
fn find_similar_returns_close_matches() {
    let candidates = ["commit", "checkout", "clone", "cherry-pick"];
    let result = find_similar("comit", &candidates);
    assert_eq!(result.first().map(String::as_str), Some("commit"));
}

#[test]
fn find_similar_matches_case_mismatch() {
    let candidates = ["clone", "status"];
    let result = find_similar("CLONE", &candidates);
    assert_eq!(result, vec!["clone".to_string()]);
}

#[test]
fn find_similar_returns_empty_for_no_match() {
    let candidates = ["status", "rebase"];
    assert!(find_similar("xyzzy", &candidates).is_empty());
}

#[test]
fn find_similar_includes_prefix_matches() {
    let candidates = ["merge-base", "status"];
    let result = find_similar("merge", &candidates);
    assert!(result.contains(&"merge-base".to_string()));
}

#[test]
fn find_similar_excludes_self_and_duplicates() {
    let candidates = vec!["init".to_string(), "init".to_string(), "int".to_string()];
    let result = find_similar("init", candidates.as_slice());
    assert_eq!(result, vec!["int".to_string()]);
}

#[test]
fn find_similar_drops_non_adjacent_duplicates() {
    // All three sit at distance 1, so sorting keeps the repeats apart.
    let candidates = ["ab", "ac", "ab"];
    let result = find_similar("a", &candidates);
    assert_eq!(result, vec!["ab".to_string(), "ac".to_string()]);
}

#[test]
fn format_suggestion_variants() {
    assert_eq!(format_suggestion(&[]), "");
    assert_eq!(
        format_suggestion(&["clone".to_string()]),
        "\n\n  did you mean: clone?"
    );
    assert_eq!(
        format_suggestion(&["clone".to_string(), "close".to_string()]),
        "\n\n  did you mean one of: clone, close?"
    );
}
