// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Command-line interface definition.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod display;

#[derive(Parser)]
#[command(
    name = "shelfsearch",
    about = "Typo-tolerant search over a reading list exported as JSON",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a JSON array of books
    Search {
        /// Query; wrap words in double quotes to search for a phrase
        query: String,

        /// JSON file holding an array of books
        #[arg(short, long)]
        input: PathBuf,

        /// JSON config with search options and fuzzy presets
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Maximum edit distance for typo tolerance (overrides presets)
        #[arg(long)]
        fuzzy: Option<u32>,

        /// Use the looser fuzzy preset
        #[arg(long, conflicts_with = "fuzzy")]
        loosen: bool,

        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<usize>,

        /// Field to search, optionally with a weight: `title`, `notes=0.5`.
        /// Replaces the configured field set when given.
        #[arg(short, long = "field", value_name = "NAME[=WEIGHT]")]
        fields: Vec<String>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show which parts of a text a query would highlight
    Highlight {
        /// Text to highlight
        text: String,

        /// Query to highlight with
        query: String,
    },

    /// Show how a query is tokenized
    Tokens {
        /// Query to tokenize
        query: String,
    },
}
