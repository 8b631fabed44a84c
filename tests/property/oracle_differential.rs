//! Differential tests: library routines against the oracles.

use super::common::make_book;
use super::oracles::{
    oracle_contains, oracle_window_distance, shelf_strategy, text_strategy, unicode_word_strategy,
    word_strategy,
};
use proptest::prelude::*;
use shelfsearch::{
    best_window_distance, edit_distance, edit_distance_within, search, Book, FieldConfig,
    SearchOptions, WindowAnchor,
};

fn books(shelf: &[(String, String)]) -> Vec<Book> {
    shelf.iter().map(|(title, author)| make_book(title, author)).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn diff_edit_distance(a in word_strategy(), b in word_strategy()) {
        prop_assert_eq!(edit_distance(&a, &b), strsim::damerau_levenshtein(&a, &b));
    }

    #[test]
    fn diff_edit_distance_unicode(a in unicode_word_strategy(), b in unicode_word_strategy()) {
        prop_assert_eq!(edit_distance(&a, &b), strsim::damerau_levenshtein(&a, &b));
    }

    #[test]
    fn diff_edit_distance_within(a in word_strategy(), b in word_strategy(), max in 0usize..4) {
        let expected = strsim::damerau_levenshtein(&a, &b);
        let got = edit_distance_within(&a, &b, max);
        if expected <= max {
            prop_assert_eq!(got, Some(expected));
        } else {
            prop_assert_eq!(got, None);
        }
    }

    #[test]
    fn diff_window_distance(token in "[abcde]{1,5}", text in text_strategy()) {
        for anchor in [WindowAnchor::Anywhere, WindowAnchor::WordStart] {
            prop_assert_eq!(
                best_window_distance(&token, &text, anchor),
                oracle_window_distance(&token, &text, anchor),
                "anchor {:?}", anchor
            );
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// With fuzzy matching off, a single-token search returns exactly the
    /// records whose enabled fields contain the token.
    #[test]
    fn diff_exact_search_matches_substring_scan(
        shelf in shelf_strategy(),
        token in "[abcde]{1,3}",
    ) {
        let books = books(&shelf);
        let options = SearchOptions::default()
            .with_fuzzy_max_distance(0)
            .with_limit(usize::MAX)
            .with_fields(FieldConfig::empty().with("title", true).with("author", true));

        let mut got: Vec<usize> = search(&books, &token, &options).iter().map(|h| h.index).collect();
        got.sort_unstable();

        let expected: Vec<usize> = shelf
            .iter()
            .enumerate()
            .filter(|(_, (title, author))| oracle_contains(title, &token) || oracle_contains(author, &token))
            .map(|(i, _)| i)
            .collect();

        prop_assert_eq!(got, expected);
    }
}
