// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Typo-tolerant phrase search for small in-memory record collections.
//!
//! Built for a personal reading list: a few thousand books, a search box, and
//! results that have to feel right while the user is still typing. There is no
//! index. Every call re-scans the records it is given.
//!
//! # Architecture
//!
//! ```text
//! query ──▶ query.rs ──▶ tokens ─────────────────────────┐
//!           (tokenize)                                   │
//!                                                        ▼
//! records ─▶ fields.rs ──▶ (text, weight) ──▶ scoring/ ──▶ search.rs ──▶ hits
//!            (index_fields)                   (match_record) (sort, cap)
//!                                                ▲
//!                                      fuzzy/ (edit distance)
//!
//! original text + tokens ──▶ highlight.rs ──▶ ranges / segments
//! ```
//!
//! Everything goes through `util::normalize` first, so case, accents, hyphens
//! and whitespace never decide a match.
//!
//! # Usage
//!
//! ```
//! use shelfsearch::{highlight_segments, search, tokenize, token_texts, Book, SearchOptions, Segment};
//!
//! let books = vec![
//!     Book::new("The Hobbit", "J.R.R. Tolkien"),
//!     Book::new("Dune", "Frank Herbert"),
//! ];
//!
//! let hits = search(&books, "hobbit", &SearchOptions::default());
//! assert_eq!(hits.len(), 1);
//!
//! let tokens = token_texts(&tokenize("hobbit"));
//! let title = hits[0].record.title.as_deref().unwrap_or("");
//! let segments = highlight_segments(title, &tokens);
//! assert_eq!(segments[1], Segment::Marked("Hobbit"));
//! ```

pub mod config;
pub mod fields;
pub mod fuzzy;
pub mod highlight;
pub mod query;
pub mod scoring;
mod search;
pub mod testing;
mod types;
pub mod util;

pub use config::{load_config, load_options, load_records, ConfigError, SearchConfig};
pub use fields::{index_fields, FieldConfig, FieldSetting, FieldWeights, IndexedField, Record};
pub use fuzzy::{best_window_distance, edit_distance, edit_distance_within, WindowAnchor};
pub use highlight::{highlight_ranges, highlight_segments, merge_ranges, render_segments, Segment};
pub use query::{token_texts, tokenize, FuzzyPresets, Token, TokenKind};
pub use scoring::{match_field, match_record, FieldMatch, MatchKind, MatchParams, RecordMatch};
pub use search::{search, search_tokens};
pub use types::{
    Book, SearchHit, SearchOptions, DEFAULT_FUZZY_MAX_DISTANCE, DEFAULT_LIMIT,
    DEFAULT_MIN_SUBSTRING_LENGTH,
};
pub use util::normalize::normalize;
