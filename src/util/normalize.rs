// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization shared by queries, field text and highlighting.
//!
//! Everything that gets compared goes through here first, so "Café-Lover"
//! and "cafe lover" end up as the same string. The per-character form
//! exists for the highlighter, which has to remember where each normalized
//! character came from.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Normalize a string for search: lowercase, strip diacritics, turn `-` and `_`
/// into spaces, collapse whitespace.
///
/// - "Café" → "cafe"
/// - "Sci-Fi  classics" → "sci fi classics"
/// - "  Le_Guin " → "le guin"
///
/// Lowercasing happens before decomposition. The other order lets characters
/// like `İ` reintroduce a combining dot after the marks were already stripped,
/// which breaks idempotence.
pub fn normalize(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut pending_space = false;

    for c in value.chars().flat_map(normalize_char) {
        if c.is_whitespace() {
            pending_space = !out.is_empty();
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        out.push(c);
    }

    out
}

/// Normalize a single character. May yield zero characters (a stripped
/// combining mark) or several (`ß` stays one, `İ` lowercases to two).
///
/// Whitespace is passed through untouched; collapsing runs is the caller's job.
pub fn normalize_char(c: char) -> impl Iterator<Item = char> {
    let mapped = if c == '-' || c == '_' { ' ' } else { c };
    decompose(mapped.to_lowercase())
}

#[cfg(feature = "unicode-normalization")]
fn decompose(chars: impl Iterator<Item = char>) -> impl Iterator<Item = char> {
    chars.nfd().filter(|c| !is_combining_mark(*c))
}

/// Without unicode-normalization only case and separators are folded.
/// Assumes input is ASCII or pre-normalized.
#[cfg(not(feature = "unicode-normalization"))]
fn decompose(chars: impl Iterator<Item = char>) -> impl Iterator<Item = char> {
    chars
}
