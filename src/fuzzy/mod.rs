// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search: typo tolerance via edit distance.
//!
//! A plain Damerau–Levenshtein table for one-off comparisons, and a sliding
//! window scan that finds the closest substring of a field to a query token.
//! Inputs are a token and a handful of field-length windows, so the O(nm)
//! table is fine here.

mod damerau;
mod window;

pub use damerau::*;
pub use window::*;
