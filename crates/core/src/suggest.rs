// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! "Did you mean?" hints for tokens that did not match a subcommand.
//!
//! Hints are display-only. Path resolution itself never guesses.

use std::collections::HashSet;

/// Levenshtein edit distance between two strings.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut dp = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, val) in dp[0].iter_mut().enumerate() {
        *val = j;
    }
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            dp[i][j] = (dp[i - 1][j] + 1)
                .min(dp[i][j - 1] + 1)
                .min(dp[i - 1][j - 1] + cost);
        }
    }
    dp[a.len()][b.len()]
}

/// Find similar names from a list of candidates.
///
/// Returns names within edit distance <= max(2, input.len()/3), plus
/// case-insensitive and prefix matches, sorted by distance (closest first).
/// Each name appears once even if the candidates repeat it.
pub fn find_similar<S: AsRef<str>>(input: &str, candidates: &[S]) -> Vec<String> {
    let threshold = (input.len() / 3).max(2);
    let lowered = input.to_lowercase();
    let mut seen = HashSet::new();
    let mut matches: Vec<(usize, String)> = candidates
        .iter()
        .map(AsRef::as_ref)
        .filter(|c| *c != input)
        .filter(|c| seen.insert(*c))
        .filter_map(|c| {
            let dist = edit_distance(input, c);
            let close = dist <= threshold
                || c.to_lowercase() == lowered
                || c.starts_with(input)
                || input.starts_with(c);
            close.then(|| (dist, c.to_string()))
        })
        .collect();
    matches.sort_by_key(|(d, _)| *d);
    matches.into_iter().map(|(_, name)| name).collect()
}

/// Format a "did you mean" hint for appending to a message.
/// Returns empty string if no suggestions.
pub fn format_suggestion(similar: &[String]) -> String {
    match similar.len() {
        0 => String::new(),
        1 => format!("\n\n  did you mean: {}?", similar[0]),
        _ => format!("\n\n  did you mean one of: {}?", similar.join(", ")),
    }
}

#[cfg(test)]
#[path = "suggest_tests.rs"]
mod tests;
