// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query parsing: raw input to normalized tokens.
//!
//! A query is a sequence of bare words and double-quoted phrases:
//!
//! ```text
//! find "the hobbit" now   →   [Word("find"), Phrase("the hobbit"), Word("now")]
//! ```
//!
//! Token order is preserved for display, but matching treats the list as an
//! unordered AND.
//!
//! An unterminated quote is dropped and the rest of the query is split into
//! words as if the quote were never typed. Someone halfway through typing
//! `"the hob` still gets results for `the` and `hob`.

use serde::{Deserialize, Serialize};

use crate::util::normalize::normalize;

/// How a token was written in the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// A bare run of non-whitespace characters.
    Word,
    /// The contents of a `"..."` span.
    Phrase,
}

/// A normalized query token. `text` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
}

impl Token {
    pub fn word(text: &str) -> Option<Self> {
        Self::new(text, TokenKind::Word)
    }

    pub fn phrase(text: &str) -> Option<Self> {
        Self::new(text, TokenKind::Phrase)
    }

    /// Normalizes `raw`; returns `None` if nothing is left.
    fn new(raw: &str, kind: TokenKind) -> Option<Self> {
        let text = normalize(raw);
        if text.is_empty() {
            None
        } else {
            Some(Token { text, kind })
        }
    }

    /// Token length in characters, the unit every score constant is defined in.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Does the normalized text span several words?
    ///
    /// True for multi-word phrases, and also for words like `sci-fi` whose
    /// separator normalized to a space.
    pub fn is_multi_word(&self) -> bool {
        self.text.contains(' ')
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Split a raw query into normalized tokens.
///
/// # Example
///
/// ```
/// use shelfsearch::{tokenize, TokenKind};
///
/// let tokens = tokenize(r#"find "The Hobbit" now"#);
/// let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
/// assert_eq!(texts, vec!["find", "the hobbit", "now"]);
/// assert_eq!(tokens[1].kind, TokenKind::Phrase);
/// ```
pub fn tokenize(query: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut rest = query;

    loop {
        rest = rest.trim_start();
        if rest.is_empty() {
            break;
        }

        if let Some(after_quote) = rest.strip_prefix('"') {
            match after_quote.find('"') {
                Some(close) => {
                    tokens.extend(Token::phrase(&after_quote[..close]));
                    rest = &after_quote[close + 1..];
                }
                None => rest = after_quote,
            }
            continue;
        }

        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        tokens.extend(Token::word(&rest[..end]));
        rest = &rest[end..];
    }

    tokens
}

/// Plain token texts, in query order. Handy for the highlighter.
pub fn token_texts(tokens: &[Token]) -> Vec<String> {
    tokens.iter().map(|t| t.text.clone()).collect()
}

/// Fuzzy ceilings for the three ways a search gets triggered.
///
/// Quoted phrases mean "I know exactly what I'm looking for", so they get
/// no typo tolerance. The looser ceiling backs the "try a looser search"
/// action offered on an empty result page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuzzyPresets {
    pub token: u32,
    pub phrase: u32,
    pub looser: u32,
}

impl Default for FuzzyPresets {
    fn default() -> Self {
        FuzzyPresets {
            token: 1,
            phrase: 0,
            looser: 2,
        }
    }
}

impl FuzzyPresets {
    /// Pick the ceiling for this query. The caller owns the `loosen` toggle
    /// and passes it on every call.
    pub fn resolve(&self, tokens: &[Token], loosen: bool) -> u32 {
        if loosen {
            self.looser
        } else if tokens.iter().any(|t| t.kind == TokenKind::Phrase) {
            self.phrase
        } else {
            self.token
        }
    }
}
