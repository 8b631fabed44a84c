// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading records and options from JSON files.
//!
//! The record store lives elsewhere; this is just enough I/O for the CLI and
//! for tests to feed the engine a reading list exported as JSON.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::query::FuzzyPresets;
use crate::types::{Book, SearchOptions};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Everything the CLI reads from `--config`: search options plus the fuzzy
/// presets used to pick a ceiling per query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchConfig {
    #[serde(flatten)]
    pub options: SearchOptions,
    pub fuzzy_presets: FuzzyPresets,
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a JSON array of books.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<Book>, ConfigError> {
    let path = path.as_ref();
    let books: Vec<Book> = read_json(path)?;
    info!("loaded {} records from {}", books.len(), path.display());
    Ok(books)
}

/// Load bare search options.
pub fn load_options(path: impl AsRef<Path>) -> Result<SearchOptions, ConfigError> {
    read_json(path.as_ref())
}

/// Load the CLI config file (options plus fuzzy presets).
pub fn load_config(path: impl AsRef<Path>) -> Result<SearchConfig, ConfigError> {
    let path = path.as_ref();
    let config: SearchConfig = read_json(path)?;
    info!("loaded search config from {}", path.display());
    Ok(config)
}
