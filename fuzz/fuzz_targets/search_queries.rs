// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the search entry point.
//!
//! Arbitrary queries and records must never panic, and results must come back
//! sorted, capped, and pointing at the records they claim to.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use shelfsearch::{search, tokenize, Book, SearchOptions};

#[derive(Debug, Arbitrary)]
struct SearchInput {
    query: String,
    books: Vec<(String, String, Option<String>)>,
    fuzzy: u8,
    min_length: u8,
    limit: u8,
}

fuzz_target!(|input: SearchInput| {
    let books: Vec<Book> = input
        .books
        .iter()
        .take(32)
        .map(|(title, author, notes)| Book {
            notes: notes.clone(),
            ..Book::new(title, author)
        })
        .collect();

    let options = SearchOptions::default()
        .with_fuzzy_max_distance(u32::from(input.fuzzy % 4))
        .with_min_substring_length(usize::from(input.min_length % 6))
        .with_limit(usize::from(input.limit));

    for token in tokenize(&input.query) {
        assert!(!token.text.is_empty());
    }

    let hits = search(&books, &input.query, &options);
    let limit = options.clamped().limit;
    assert!(hits.len() <= limit);

    for pair in hits.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    for hit in &hits {
        assert!(hit.score.is_finite() && hit.score > 0.0);
        assert!(std::ptr::eq(hit.record, &books[hit.index]));
    }
});
