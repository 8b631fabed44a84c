// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for Damerau-Levenshtein distance and window search.
//!
//! Checks metric laws and that the bounded variant agrees with the full one.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use shelfsearch::{best_window_distance, edit_distance, edit_distance_within, WindowAnchor};

#[derive(Debug, Arbitrary)]
struct DistanceInput {
    a: String,
    b: String,
    c: String,
    max: u8,
}

fn capped(s: &str) -> String {
    s.chars().take(24).collect()
}

fuzz_target!(|input: DistanceInput| {
    let a = capped(&input.a);
    let b = capped(&input.b);
    let c = capped(&input.c);

    let ab = edit_distance(&a, &b);
    assert_eq!(ab, edit_distance(&b, &a), "not symmetric: {:?} {:?}", a, b);
    assert_eq!(edit_distance(&a, &a), 0);
    assert!(edit_distance(&a, &c) <= ab + edit_distance(&b, &c), "triangle violated");

    let (la, lb) = (a.chars().count(), b.chars().count());
    assert!(ab >= la.abs_diff(lb) && ab <= la.max(lb));

    let max = usize::from(input.max % 8);
    let bounded = edit_distance_within(&a, &b, max);
    assert_eq!(bounded, (ab <= max).then_some(ab));

    // No window is wider than the token plus one
    for anchor in [WindowAnchor::Anywhere, WindowAnchor::WordStart] {
        if let Some(best) = best_window_distance(&a, &b, anchor) {
            assert!(best <= la + 1);
        }
    }
});
