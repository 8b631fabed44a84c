// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search entry point: tokenize, project, score, rank, cap.
//!
//! Stateless. Every call re-scans the whole candidate slice, which is fine for
//! a few thousand records and means there is no index to keep in sync with
//! the record store. Overlapping calls cannot interfere with each other;
//! discarding stale results (last call wins) is the caller's job.

use log::{debug, trace};

use crate::fields::{index_fields, Record};
use crate::query::{tokenize, Token};
use crate::scoring::{match_record, MatchParams};
use crate::types::{SearchHit, SearchOptions};

/// Rank `records` against a raw query.
///
/// Returns at most `options.limit` hits, best first. Equal scores keep the
/// order the records had in the input slice. A blank query returns nothing.
///
/// ```
/// use shelfsearch::{search, Book, SearchOptions};
///
/// let books = vec![
///     Book::new("Dune", "Frank Herbert"),
///     Book::new("Foundation", "Isaac Asimov"),
/// ];
/// let hits = search(&books, "herbert", &SearchOptions::default());
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].index, 0);
/// ```
pub fn search<'a, R: Record>(
    records: &'a [R],
    query: &str,
    options: &SearchOptions,
) -> Vec<SearchHit<'a, R>> {
    let tokens = tokenize(query);
    search_tokens(records, &tokens, options)
}

/// Same as [`search`] for callers that already hold the tokens, typically
/// because they reuse them for highlighting.
pub fn search_tokens<'a, R: Record>(
    records: &'a [R],
    tokens: &[Token],
    options: &SearchOptions,
) -> Vec<SearchHit<'a, R>> {
    if tokens.is_empty() {
        debug!("blank query, skipping {} candidates", records.len());
        return Vec::new();
    }
    if options.fields.is_empty() {
        debug!("no fields enabled, skipping {} candidates", records.len());
        return Vec::new();
    }

    let options = options.clamped();
    let params = MatchParams::from(&*options);

    let mut hits: Vec<SearchHit<'a, R>> = records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| {
            let fields = index_fields(record, &options.fields, &options.weights);
            let result = match_record(&fields, tokens, &params);
            if result.matched {
                Some(SearchHit {
                    record,
                    index,
                    score: result.score,
                })
            } else {
                trace!("record {} rejected ({} fields indexed)", index, fields.len());
                None
            }
        })
        .collect();

    let matched = hits.len();

    // sort_by is stable: ties stay in input order
    hits.sort_by(|a, b| b.score.total_cmp(&a.score));
    hits.truncate(options.limit);

    debug!(
        "{} tokens, fuzzy({}): {} of {} candidates matched, returning {}",
        tokens.len(),
        params.fuzzy_max_distance,
        matched,
        records.len(),
        hits.len()
    );

    hits
}
