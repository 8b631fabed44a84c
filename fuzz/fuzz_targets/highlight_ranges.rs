// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for highlighting.
//!
//! Ranges must be sorted, disjoint, and land on char boundaries of the
//! original text; segments must rebuild it exactly.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use shelfsearch::{highlight_ranges, highlight_segments, token_texts, tokenize};

#[derive(Debug, Arbitrary)]
struct HighlightInput {
    text: String,
    query: String,
}

fuzz_target!(|input: HighlightInput| {
    let tokens = token_texts(&tokenize(&input.query));
    let text = input.text.as_str();

    let ranges = highlight_ranges(text, &tokens);
    for range in &ranges {
        assert!(range.start < range.end);
        assert!(text.is_char_boundary(range.start) && text.is_char_boundary(range.end));
    }
    for pair in ranges.windows(2) {
        assert!(pair[0].end < pair[1].start, "ranges overlap or touch: {:?}", pair);
    }

    let rebuilt: String = highlight_segments(text, &tokens).iter().map(|s| s.text()).collect();
    assert_eq!(rebuilt, text);
});
