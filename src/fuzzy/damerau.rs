// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Damerau–Levenshtein distance (unrestricted, Lowrance–Wagner).
//!
//! Counts insertions, deletions, substitutions and transpositions of adjacent
//! characters. Unlike the "optimal string alignment" variant, a transposed pair
//! may be edited again afterwards, so the result is a true metric:
//! `ca → abc` is 2 here, 3 under OSA.
//!
//! Distances are over Unicode scalar values, not bytes. "café" vs "cafe" is 1.

use std::collections::HashMap;

/// Minimum number of edits to turn `a` into `b`.
///
/// ```
/// use shelfsearch::edit_distance;
///
/// assert_eq!(edit_distance("kitten", "sitting"), 3);
/// assert_eq!(edit_distance("authro", "author"), 1);
/// ```
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    edit_distance_chars(&a, &b)
}

/// Are these strings within `max` edits of each other? Returns the distance if so.
///
/// `|len(a) - len(b)|` is a lower bound on the distance, so strings that differ
/// in length by more than `max` are rejected before building the table.
pub fn edit_distance_within(a: &str, b: &str, max: usize) -> Option<usize> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.len().abs_diff(b.len()) > max {
        return None;
    }

    let distance = edit_distance_chars(&a, &b);
    (distance <= max).then_some(distance)
}

/// Table form over pre-split characters. The window scan calls this directly
/// to avoid re-collecting the token for every window.
pub(crate) fn edit_distance_chars(a: &[char], b: &[char]) -> usize {
    let (al, bl) = (a.len(), b.len());
    if al == 0 {
        return bl;
    }
    if bl == 0 {
        return al;
    }

    // (al + 2) x (bl + 2) table. Row 0 and column 0 hold the sentinel so that
    // transpositions reaching back past the start are never chosen.
    let sentinel = al + bl;
    let width = bl + 2;
    let at = |i: usize, j: usize| i * width + j;

    let mut d = vec![0usize; (al + 2) * width];
    d[at(0, 0)] = sentinel;
    for i in 0..=al {
        d[at(i + 1, 0)] = sentinel;
        d[at(i + 1, 1)] = i;
    }
    for j in 0..=bl {
        d[at(0, j + 1)] = sentinel;
        d[at(1, j + 1)] = j;
    }

    // Last row (1-based) in which each character of `a` was seen.
    let mut last_row: HashMap<char, usize> = HashMap::new();

    for i in 1..=al {
        // Last column (1-based) in this row where a[i-1] == b[j-1].
        let mut last_match_col = 0;

        for j in 1..=bl {
            let i1 = last_row.get(&b[j - 1]).copied().unwrap_or(0);
            let j1 = last_match_col;

            let cost = if a[i - 1] == b[j - 1] {
                last_match_col = j;
                0
            } else {
                1
            };

            let substitution = d[at(i, j)] + cost;
            let insertion = d[at(i + 1, j)] + 1;
            let deletion = d[at(i, j + 1)] + 1;
            let transposition = d[at(i1, j1)] + (i - i1 - 1) + 1 + (j - j1 - 1);

            d[at(i + 1, j + 1)] = substitution.min(insertion).min(deletion).min(transposition);
        }

        last_row.insert(a[i - 1], i);
    }

    d[at(al + 1, bl + 1)]
}
