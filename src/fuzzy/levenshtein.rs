// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance with an early-exit bound.
//!
//! `|len(a) - len(b)|` is a lower bound on edit distance, so candidates whose
//! length is too far off are rejected before the O(nm) DP allocates anything.

/// Levenshtein distance between `a` and `b` if it is at most `max`.
///
/// Counts characters, not bytes. Returns `None` as soon as the distance is
/// known to exceed `max`:
/// 1. the length difference alone is over `max`, or
/// 2. every cell of a DP row is over `max`.
pub fn distance_within(a: &str, b: &str, max: usize) -> Option<usize> {
    let a_len = a.chars().count();
    let b_len = b.chars().count();

    if a_len.abs_diff(b_len) > max {
        return None;
    }

    let b_chars: Vec<char> = b.chars().collect();
    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        let mut min_row = dp[0];

        for (j, &bc) in b_chars.iter().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
            min_row = min_row.min(dp[j + 1]);
        }

        if min_row > max {
            return None;
        }
    }

    Some(dp[b_len]).filter(|&d| d <= max)
}
