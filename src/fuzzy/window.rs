// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Closest-substring search for typo-tolerant matching.
//!
//! A token of `n` characters is compared against windows of `n-1`, `n` and
//! `n+1` characters of the field text. The three widths cover one dropped,
//! swapped or extra character at the edges of the window.
//!
//! Windows either start anywhere, or only where a word starts. Unanchored
//! windows let short tokens latch onto the middle of unrelated words (`dun`
//! is one edit from the `oun` in "foundation"), so the scorer anchors by
//! default.

use serde::{Deserialize, Serialize};

use super::damerau::edit_distance_chars;

/// Where a fuzzy window may start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WindowAnchor {
    /// Every character position.
    Anywhere,
    /// Start of the text, or right after a character that is not a letter
    /// or digit (space, bracket, quote, period).
    #[default]
    WordStart,
}

/// Smallest edit distance between `token` and any allowed window of `text`.
///
/// Windows wider than the text are skipped, so a text shorter than `n-1`
/// characters yields `None`. Stops early on a perfect window.
pub fn best_window_distance(token: &str, text: &str, anchor: WindowAnchor) -> Option<usize> {
    let token: Vec<char> = token.chars().collect();
    let text: Vec<char> = text.chars().collect();

    let n = token.len();
    let mut best: Option<usize> = None;

    for width in n.saturating_sub(1).max(1)..=n + 1 {
        if width > text.len() {
            break;
        }
        for start in 0..=text.len() - width {
            if anchor == WindowAnchor::WordStart && start > 0 && text[start - 1].is_alphanumeric() {
                continue;
            }
            let distance = edit_distance_chars(&token, &text[start..start + width]);
            if best.map_or(true, |b| distance < b) {
                best = Some(distance);
            }
            if distance == 0 {
                return best;
            }
        }
    }

    best
}
