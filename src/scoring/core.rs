// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! # Per-field match score
//!
//! ```text
//! exact:  100 + 20 (starts a word) + min(10, token_len)
//! fuzzy:   70 - 10 * distance     + min(10, token_len)
//! ```
//!
//! An exact hit always beats a fuzzy one: the worst exact score (101) is above
//! the best possible fuzzy score (70 - 10 + 10 = 70, since a distance-0 window
//! would have been an exact hit).
//!
//! # Record score
//!
//! ```text
//! Σ over tokens of max over fields (match_score × field_weight)
//!   + 10 if any token spans several words
//! ```
//!
//! A token with no matching field rejects the record.

use crate::fields::IndexedField;
use crate::fuzzy::{best_window_distance, WindowAnchor};
use crate::query::Token;
use crate::types::SearchOptions;

/// Base score for a substring hit.
pub const EXACT_BASE_SCORE: f64 = 100.0;

/// Extra for a substring hit at the start of a word.
pub const WORD_BOUNDARY_BONUS: f64 = 20.0;

/// Base score for a fuzzy hit, before the distance penalty.
pub const FUZZY_BASE_SCORE: f64 = 70.0;

/// Subtracted per edit on a fuzzy hit.
pub const FUZZY_DISTANCE_PENALTY: f64 = 10.0;

/// Longer tokens earn one point per character, up to this cap.
pub const LENGTH_BONUS_CAP: usize = 10;

/// Flat bonus when the query holds a multi-word token.
pub const PHRASE_BONUS: f64 = 10.0;

/// The subset of [`SearchOptions`] the matcher reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchParams {
    pub fuzzy_max_distance: u32,
    pub min_substring_length: usize,
    pub fuzzy_anchor: WindowAnchor,
}

impl From<&SearchOptions> for MatchParams {
    fn from(options: &SearchOptions) -> Self {
        MatchParams {
            fuzzy_max_distance: options.fuzzy_max_distance,
            min_substring_length: options.min_substring_length.max(1),
            fuzzy_anchor: options.fuzzy_anchor,
        }
    }
}

impl Default for MatchParams {
    fn default() -> Self {
        MatchParams::from(&SearchOptions::default())
    }
}

/// How a token matched a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact { word_start: bool },
    Fuzzy { distance: usize },
}

/// One token against one field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldMatch {
    pub kind: MatchKind,
    pub score: f64,
}

/// Outcome for a whole record. `score` is 0 when `matched` is false.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordMatch {
    pub matched: bool,
    pub score: f64,
}

impl RecordMatch {
    const REJECTED: RecordMatch = RecordMatch {
        matched: false,
        score: 0.0,
    };
}

fn length_bonus(token_len: usize) -> f64 {
    token_len.min(LENGTH_BONUS_CAP) as f64
}

/// Match one token against one normalized field text.
///
/// Tries a substring hit first (the first occurrence decides the word-start
/// bonus), then falls back to the closest window when fuzzy matching is on
/// and the token is long enough. Substring hits may land mid-word; fuzzy
/// windows follow `params.fuzzy_anchor`.
pub fn match_field(text: &str, token: &Token, params: &MatchParams) -> Option<FieldMatch> {
    if text.is_empty() {
        return None;
    }

    let token_len = token.char_len();

    if let Some(at) = text.find(token.text.as_str()) {
        let word_start = text[..at].chars().next_back().map_or(true, char::is_whitespace);
        let boundary = if word_start { WORD_BOUNDARY_BONUS } else { 0.0 };
        return Some(FieldMatch {
            kind: MatchKind::Exact { word_start },
            score: EXACT_BASE_SCORE + boundary + length_bonus(token_len),
        });
    }

    if params.fuzzy_max_distance == 0 || token_len < params.min_substring_length {
        return None;
    }

    let distance = best_window_distance(&token.text, text, params.fuzzy_anchor)?;
    if distance > params.fuzzy_max_distance as usize {
        return None;
    }

    Some(FieldMatch {
        kind: MatchKind::Fuzzy { distance },
        score: FUZZY_BASE_SCORE - FUZZY_DISTANCE_PENALTY * distance as f64 + length_bonus(token_len),
    })
}

/// Best weighted score for a token across all fields, or `None` if no field matches.
pub fn best_field_score(fields: &[IndexedField], token: &Token, params: &MatchParams) -> Option<f64> {
    fields
        .iter()
        .filter_map(|field| match_field(&field.text, token, params).map(|m| m.score * field.weight))
        .fold(None, |best: Option<f64>, score| match best {
            Some(b) if b >= score => Some(b),
            _ => Some(score),
        })
}

/// Score a record's indexed fields against every token.
///
/// An empty token list matches nothing; callers are expected to short-circuit
/// blank queries before getting here.
pub fn match_record(fields: &[IndexedField], tokens: &[Token], params: &MatchParams) -> RecordMatch {
    if tokens.is_empty() || fields.is_empty() {
        return RecordMatch::REJECTED;
    }

    let mut total = 0.0;
    for token in tokens {
        match best_field_score(fields, token, params) {
            Some(score) => total += score,
            None => return RecordMatch::REJECTED,
        }
    }

    if tokens.iter().any(Token::is_multi_word) {
        total += PHRASE_BONUS;
    }

    RecordMatch {
        matched: true,
        score: total,
    }
}
