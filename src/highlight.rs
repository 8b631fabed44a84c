// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Highlight spans: which parts of the original text to mark.
//!
//! Matching happens on normalized text, but the user sees the original.
//! "Café-Lover" normalizes to "cafe lover", and a hit on that has to come back
//! as bytes 0..11 of the original (the `é` is two bytes). So the normalized
//! text is rebuilt here one character at a time, remembering which original
//! character produced each normalized byte.
//!
//! Only substring hits are marked. Fuzzy hits affect ranking but there is no
//! honest span to show for "authro" inside "author".
//!
//! Ranges are byte offsets into the original string, always on character
//! boundaries, so `&text[range]` is safe.

use std::ops::Range;

use crate::util::normalize::{normalize, normalize_char};

/// A piece of the original text, marked or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain(&'a str),
    Marked(&'a str),
}

impl<'a> Segment<'a> {
    pub fn text(&self) -> &'a str {
        match *self {
            Segment::Plain(text) | Segment::Marked(text) => text,
        }
    }

    pub fn is_marked(&self) -> bool {
        matches!(self, Segment::Marked(_))
    }
}

/// Normalized text plus, for every normalized byte, the byte range of the
/// original character it came from.
struct NormalizedMap {
    text: String,
    origin: Vec<Range<usize>>,
}

impl NormalizedMap {
    fn build(original: &str) -> Self {
        let mut text = String::with_capacity(original.len());
        let mut origin = Vec::with_capacity(original.len());

        for (at, c) in original.char_indices() {
            let source = at..at + c.len_utf8();
            let mut silent = true;
            for n in normalize_char(c) {
                silent = false;
                let n = if n.is_whitespace() {
                    // Leading whitespace is dropped, runs collapse to one space.
                    if text.is_empty() || text.ends_with(' ') {
                        continue;
                    }
                    ' '
                } else {
                    n
                };
                text.push(n);
                origin.extend(std::iter::repeat(source.clone()).take(n.len_utf8()));
            }

            // A char that normalizes away (a combining mark) belongs to the
            // char before it, so a span ending there takes the mark along.
            if silent {
                for span in origin.iter_mut().rev().take_while(|span| span.end == at) {
                    span.end = source.end;
                }
            }
        }

        NormalizedMap { text, origin }
    }

    /// Original byte range covered by normalized bytes `start..end`.
    fn original_span(&self, start: usize, end: usize) -> Range<usize> {
        self.origin[start].start..self.origin[end - 1].end
    }
}

/// Byte ranges of `original` covered by substring hits of `tokens`, sorted
/// and merged.
///
/// Tokens are normalized again before matching, so raw words work too.
/// Within one token occurrences never overlap; across tokens, overlapping or
/// touching ranges merge into one.
///
/// ```
/// use shelfsearch::highlight_ranges;
///
/// let text = "The Hobbit";
/// let ranges = highlight_ranges(text, &["hobbit"]);
/// assert_eq!(ranges, vec![4..10]);
/// assert_eq!(&text[ranges[0].clone()], "Hobbit");
/// ```
pub fn highlight_ranges<T: AsRef<str>>(original: &str, tokens: &[T]) -> Vec<Range<usize>> {
    let map = NormalizedMap::build(original);
    let mut ranges = Vec::new();

    for token in tokens {
        let needle = normalize(token.as_ref());
        if needle.is_empty() {
            continue;
        }

        let mut from = 0;
        while let Some(found) = map.text[from..].find(needle.as_str()) {
            let start = from + found;
            let end = start + needle.len();
            ranges.push(map.original_span(start, end));
            from = end;
        }
    }

    merge_ranges(ranges)
}

/// Sort by start and fold overlapping or adjacent ranges together.
pub fn merge_ranges(mut ranges: Vec<Range<usize>>) -> Vec<Range<usize>> {
    ranges.sort_by_key(|r| (r.start, r.end));

    let mut merged: Vec<Range<usize>> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(last) if range.start <= last.end => last.end = last.end.max(range.end),
            _ => merged.push(range),
        }
    }
    merged
}

/// Split `original` into alternating plain and marked pieces covering the
/// whole string in order. Empty text yields no segments.
pub fn highlight_segments<'a, T: AsRef<str>>(original: &'a str, tokens: &[T]) -> Vec<Segment<'a>> {
    let mut segments = Vec::new();
    let mut last = 0;

    for range in highlight_ranges(original, tokens) {
        if range.start > last {
            segments.push(Segment::Plain(&original[last..range.start]));
        }
        segments.push(Segment::Marked(&original[range.clone()]));
        last = range.end;
    }
    if last < original.len() {
        segments.push(Segment::Plain(&original[last..]));
    }

    segments
}

/// Wrap marked segments in caller-supplied markup, e.g. `<mark>` and `</mark>`.
/// Escaping the plain text is up to the caller.
pub fn render_segments(segments: &[Segment<'_>], open: &str, close: &str) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::Plain(text) => out.push_str(text),
            Segment::Marked(text) => {
                out.push_str(open);
                out.push_str(text);
                out.push_str(close);
            }
        }
    }
    out
}
