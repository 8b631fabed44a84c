// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Field projection: which parts of a record are searchable, and how much
//! each one counts.
//!
//! A record is read through [`Record::field_text`] by name. The caller picks
//! the names with a [`FieldConfig`] and the engine turns the record into a
//! flat list of normalized `(text, weight)` pairs. Scoring never looks at the
//! record itself.
//!
//! # Weights
//!
//! | Field    | Default | Notes                                   |
//! |----------|---------|-----------------------------------------|
//! | `title`  | 9       |                                         |
//! | `author` | 7       |                                         |
//! | `series` | 5       |                                         |
//! | `book`   | 5       | composite: series + genre + isbn        |
//! | `genre`  | 3       |                                         |
//! | `isbn`   | 2       |                                         |
//! | `date`   | 1       |                                         |
//! | `notes`  | 0.5     | long free text, easy to match by accident |
//!
//! Any other name enabled with `true` gets [`FALLBACK_WEIGHT`].

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::util::normalize::normalize;

/// Weight for an enabled field that has no entry in the weights table.
pub const FALLBACK_WEIGHT: f64 = 1.0;

/// Anything the engine can search. Return `None` for absent fields; empty
/// strings are treated as absent too.
pub trait Record {
    fn field_text(&self, name: &str) -> Option<Cow<'_, str>>;
}

impl Record for HashMap<String, String> {
    fn field_text(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|s| Cow::Borrowed(s.as_str()))
    }
}

/// Objects only. Strings are used as-is, numbers are stringified, arrays are
/// flattened and joined with spaces. Everything else counts as absent.
impl Record for serde_json::Value {
    fn field_text(&self, name: &str) -> Option<Cow<'_, str>> {
        self.as_object()
            .and_then(|object| object.get(name))
            .and_then(json_text)
    }
}

fn json_text(value: &serde_json::Value) -> Option<Cow<'_, str>> {
    use serde_json::Value;

    match value {
        Value::String(s) if !s.is_empty() => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Array(items) => {
            let parts: Vec<Cow<'_, str>> = items.iter().filter_map(json_text).collect();
            if parts.is_empty() {
                None
            } else {
                Some(Cow::Owned(parts.join(" ")))
            }
        }
        _ => None,
    }
}

/// Default weight table. Passed into the indexer explicitly; overriding one
/// entry keeps the others.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, f64>", into = "BTreeMap<String, f64>")]
pub struct FieldWeights {
    weights: BTreeMap<String, f64>,
}

impl Default for FieldWeights {
    fn default() -> Self {
        let weights = [
            ("title", 9.0),
            ("author", 7.0),
            ("series", 5.0),
            ("book", 5.0),
            ("genre", 3.0),
            ("isbn", 2.0),
            ("date", 1.0),
            ("notes", 0.5),
        ]
        .into_iter()
        .map(|(name, weight)| (name.to_string(), weight))
        .collect();

        FieldWeights { weights }
    }
}

impl From<BTreeMap<String, f64>> for FieldWeights {
    fn from(overrides: BTreeMap<String, f64>) -> Self {
        let mut weights = FieldWeights::default();
        weights.weights.extend(overrides);
        weights
    }
}

impl From<FieldWeights> for BTreeMap<String, f64> {
    fn from(weights: FieldWeights) -> Self {
        weights.weights
    }
}

impl FieldWeights {
    pub fn get(&self, name: &str) -> f64 {
        self.weights.get(name).copied().unwrap_or(FALLBACK_WEIGHT)
    }

    pub fn set(&mut self, name: &str, weight: f64) {
        self.weights.insert(name.to_string(), weight);
    }
}

/// Per-field switch: `true` for the default weight, a number for an explicit one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldSetting {
    Enabled(bool),
    Weight(f64),
}

impl FieldSetting {
    /// Effective weight, or `None` if the field is off. Zero, negative and
    /// non-finite weights turn the field off.
    pub fn resolve(&self, name: &str, weights: &FieldWeights) -> Option<f64> {
        let weight = match *self {
            FieldSetting::Enabled(false) => return None,
            FieldSetting::Enabled(true) => weights.get(name),
            FieldSetting::Weight(weight) => weight,
        };
        (weight.is_finite() && weight > 0.0).then_some(weight)
    }
}

impl From<bool> for FieldSetting {
    fn from(enabled: bool) -> Self {
        FieldSetting::Enabled(enabled)
    }
}

impl From<f64> for FieldSetting {
    fn from(weight: f64) -> Self {
        FieldSetting::Weight(weight)
    }
}

/// Which fields to search. Fields not listed are not searched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldConfig {
    fields: BTreeMap<String, FieldSetting>,
}

impl Default for FieldConfig {
    /// Title, author, notes and the series/genre/isbn composite.
    fn default() -> Self {
        FieldConfig::empty()
            .with("title", true)
            .with("author", true)
            .with("notes", true)
            .with("book", true)
    }
}

impl FieldConfig {
    pub fn empty() -> Self {
        FieldConfig {
            fields: BTreeMap::new(),
        }
    }

    pub fn with(mut self, name: &str, setting: impl Into<FieldSetting>) -> Self {
        self.set(name, setting);
        self
    }

    pub fn set(&mut self, name: &str, setting: impl Into<FieldSetting>) {
        self.fields.insert(name.to_string(), setting.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldSetting)> {
        self.fields.iter().map(|(name, setting)| (name.as_str(), setting))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// One searchable field of one record, already normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedField {
    pub name: String,
    pub text: String,
    pub weight: f64,
}

/// Project a record into its searchable fields.
///
/// Disabled fields, missing values and values that normalize to nothing are
/// left out entirely rather than indexed as empty text.
pub fn index_fields<R: Record + ?Sized>(
    record: &R,
    config: &FieldConfig,
    weights: &FieldWeights,
) -> Vec<IndexedField> {
    config
        .iter()
        .filter_map(|(name, setting)| {
            let weight = setting.resolve(name, weights)?;
            let raw = record.field_text(name)?;
            let text = normalize(&raw);
            if text.is_empty() {
                return None;
            }
            Some(IndexedField {
                name: name.to_string(),
                text,
                weight,
            })
        })
        .collect()
}
