// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and matching: how a record earns its number.
//!
//! Tokens are ANDed, fields are ORed. Every token has to land somewhere in
//! the record, and each token counts only its best field.

mod core;

pub use self::core::*;
