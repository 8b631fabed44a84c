// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The data that flows in and out of a search call.
//!
//! - [`Book`]: the record type the CLI loads. Library callers can bring their
//!   own type by implementing [`Record`].
//! - [`SearchOptions`]: per-call knobs. Out-of-range values are clamped, never
//!   rejected, so a bad config still produces a deterministic answer.
//! - [`SearchHit`]: a borrowed record plus its score.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::fields::{FieldConfig, FieldWeights, Record};
use crate::fuzzy::WindowAnchor;

/// Default fuzzy ceiling for ordinary typing.
pub const DEFAULT_FUZZY_MAX_DISTANCE: u32 = 1;

/// Tokens shorter than this never fall back to fuzzy matching.
pub const DEFAULT_MIN_SUBSTRING_LENGTH: usize = 2;

/// Result cap used when none (or a non-positive one) is given.
pub const DEFAULT_LIMIT: usize = 100;

/// A book on the reading list.
///
/// Every text attribute is optional. Unknown JSON keys (sessions, cover
/// images, timestamps) are ignored on load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Book {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Book {
    pub fn new(title: &str, author: &str) -> Self {
        Book {
            title: Some(title.to_string()),
            author: Some(author.to_string()),
            ..Book::default()
        }
    }

    /// Series, genre and ISBN in one blob, the `book` field.
    pub fn composite(&self) -> Option<String> {
        let parts: Vec<&str> = [&self.series, &self.genre, &self.isbn]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .filter(|part| !part.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}

impl Record for Book {
    fn field_text(&self, name: &str) -> Option<Cow<'_, str>> {
        let value = match name {
            "book" => return self.composite().map(Cow::Owned),
            "id" => &self.id,
            "title" => &self.title,
            "author" => &self.author,
            "series" => &self.series,
            "genre" => &self.genre,
            "isbn" => &self.isbn,
            "notes" => &self.notes,
            "date" => &self.date,
            "status" => &self.status,
            _ => return None,
        };
        value
            .as_deref()
            .filter(|text| !text.is_empty())
            .map(Cow::Borrowed)
    }
}

/// Per-call search options.
///
/// Deserializes from camelCase JSON with every key optional:
///
/// ```json
/// { "fuzzyMaxDistance": 1, "minSubstringLength": 2, "fuzzyAnchor": "wordStart",
///   "limit": 100, "fields": { "title": true, "author": 7 } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchOptions {
    /// Maximum edit distance for a fuzzy match. 0 disables fuzzy matching.
    #[serde(deserialize_with = "clamp::non_negative")]
    pub fuzzy_max_distance: u32,
    /// Minimum token length (in characters) for the fuzzy fallback.
    #[serde(deserialize_with = "clamp::at_least_one")]
    pub min_substring_length: usize,
    /// Where fuzzy windows may start in the field text.
    pub fuzzy_anchor: WindowAnchor,
    /// Maximum number of hits returned.
    #[serde(deserialize_with = "clamp::limit")]
    pub limit: usize,
    pub fields: FieldConfig,
    pub weights: FieldWeights,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            fuzzy_max_distance: DEFAULT_FUZZY_MAX_DISTANCE,
            min_substring_length: DEFAULT_MIN_SUBSTRING_LENGTH,
            fuzzy_anchor: WindowAnchor::default(),
            limit: DEFAULT_LIMIT,
            fields: FieldConfig::default(),
            weights: FieldWeights::default(),
        }
    }
}

impl SearchOptions {
    pub fn with_fuzzy_max_distance(mut self, distance: u32) -> Self {
        self.fuzzy_max_distance = distance;
        self
    }

    pub fn with_min_substring_length(mut self, length: usize) -> Self {
        self.min_substring_length = length;
        self
    }

    pub fn with_fuzzy_anchor(mut self, anchor: WindowAnchor) -> Self {
        self.fuzzy_anchor = anchor;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_fields(mut self, fields: FieldConfig) -> Self {
        self.fields = fields;
        self
    }

    pub fn with_weights(mut self, weights: FieldWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Copy with zero-valued knobs pulled back into range.
    pub fn clamped(&self) -> Cow<'_, SearchOptions> {
        if self.min_substring_length >= 1 && self.limit >= 1 {
            return Cow::Borrowed(self);
        }
        let mut options = self.clone();
        options.min_substring_length = options.min_substring_length.max(1);
        if options.limit == 0 {
            options.limit = DEFAULT_LIMIT;
        }
        Cow::Owned(options)
    }
}

/// Clamping deserializers. Configs are hand-edited JSON, or written by code
/// that stores every number as a float; a `-1`, `2.5` or `null` should not
/// take the whole search down.
mod clamp {
    use serde::{Deserialize, Deserializer};

    use super::{DEFAULT_FUZZY_MAX_DISTANCE, DEFAULT_LIMIT, DEFAULT_MIN_SUBSTRING_LENGTH};

    /// Any JSON number.
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Number {
        Int(i64),
        UInt(u64),
        Float(f64),
    }

    impl Number {
        /// Floats truncate toward zero and NaN reads as 0. Out-of-range
        /// values saturate.
        fn saturating_i64(self) -> i64 {
            match self {
                Number::Int(n) => n,
                Number::UInt(n) => i64::try_from(n).unwrap_or(i64::MAX),
                Number::Float(f) => f as i64,
            }
        }
    }

    /// `None` for `null`.
    fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
        Ok(Option::<Number>::deserialize(deserializer)?.map(Number::saturating_i64))
    }

    fn to_usize(value: i64) -> usize {
        usize::try_from(value).unwrap_or(usize::MAX)
    }

    pub fn non_negative<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        Ok(match number(deserializer)? {
            Some(value) => value.clamp(0, i64::from(u32::MAX)) as u32,
            None => DEFAULT_FUZZY_MAX_DISTANCE,
        })
    }

    pub fn at_least_one<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
        Ok(match number(deserializer)? {
            Some(value) => to_usize(value.max(1)),
            None => DEFAULT_MIN_SUBSTRING_LENGTH,
        })
    }

    pub fn limit<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
        Ok(match number(deserializer)? {
            Some(value) if value > 0 => to_usize(value),
            _ => DEFAULT_LIMIT,
        })
    }
}

/// A matched record and its aggregate score.
///
/// `record` borrows from the caller's slice, so identity is preserved;
/// `index` is the record's position in that slice.
pub struct SearchHit<'a, R> {
    pub record: &'a R,
    pub index: usize,
    pub score: f64,
}

impl<R> Clone for SearchHit<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for SearchHit<'_, R> {}

impl<R: fmt::Debug> fmt::Debug for SearchHit<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchHit")
            .field("index", &self.index)
            .field("score", &self.score)
            .field("record", self.record)
            .finish()
    }
}

impl<R> PartialEq for SearchHit<'_, R> {
    /// Same slot of the same slice, same score.
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.record, other.record)
            && self.index == other.index
            && self.score == other.score
    }
}
