//! Invariants that must hold for any input.

use super::common::{assert_descending, make_book};
use super::oracles::{shelf_strategy, word_strategy};
use proptest::prelude::*;
use shelfsearch::{edit_distance, normalize, search, tokenize, Book, SearchOptions};

fn books(shelf: &[(String, String)]) -> Vec<Book> {
    shelf.iter().map(|(title, author)| make_book(title, author)).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    // ------------------------------------------------------------------
    // Edit distance is a metric
    // ------------------------------------------------------------------

    #[test]
    fn prop_distance_identity(a in word_strategy()) {
        prop_assert_eq!(edit_distance(&a, &a), 0);
    }

    #[test]
    fn prop_distance_symmetric(a in word_strategy(), b in word_strategy()) {
        prop_assert_eq!(edit_distance(&a, &b), edit_distance(&b, &a));
    }

    #[test]
    fn prop_distance_triangle(a in word_strategy(), b in word_strategy(), c in word_strategy()) {
        prop_assert!(edit_distance(&a, &c) <= edit_distance(&a, &b) + edit_distance(&b, &c));
    }

    #[test]
    fn prop_distance_bounds(a in word_strategy(), b in word_strategy()) {
        let (la, lb) = (a.chars().count(), b.chars().count());
        let d = edit_distance(&a, &b);
        prop_assert!(d >= la.abs_diff(lb));
        prop_assert!(d <= la.max(lb));
    }

    // ------------------------------------------------------------------
    // Tokenizer output
    // ------------------------------------------------------------------

    #[test]
    fn prop_tokens_are_normalized(query in r#"[a-zA-Z" \-]{0,20}"#) {
        for token in tokenize(&query) {
            prop_assert!(!token.text.is_empty());
            prop_assert_eq!(normalize(&token.text), token.text.clone());
        }
    }

    // ------------------------------------------------------------------
    // Search results
    // ------------------------------------------------------------------

    #[test]
    fn prop_results_sorted_and_capped(
        shelf in shelf_strategy(),
        query in "[abcde ]{0,8}",
        limit in 1usize..6,
    ) {
        let books = books(&shelf);
        let hits = search(&books, &query, &SearchOptions::default().with_limit(limit));
        prop_assert!(hits.len() <= limit);
        assert_descending(&hits);
        for hit in &hits {
            prop_assert!(hit.score > 0.0);
            prop_assert!(std::ptr::eq(hit.record, &books[hit.index]));
        }
    }

    #[test]
    fn prop_blank_query_returns_nothing(shelf in shelf_strategy(), blank in r"[ \t\-_]{0,4}") {
        let books = books(&shelf);
        prop_assert!(search(&books, &blank, &SearchOptions::default()).is_empty());
    }

    #[test]
    fn prop_search_is_pure_and_repeatable(shelf in shelf_strategy(), query in "[abcde ]{0,8}") {
        let books = books(&shelf);
        let before = books.clone();
        let options = SearchOptions::default();

        let first: Vec<(usize, f64)> = search(&books, &query, &options).iter().map(|h| (h.index, h.score)).collect();
        let second: Vec<(usize, f64)> = search(&books, &query, &options).iter().map(|h| (h.index, h.score)).collect();

        prop_assert_eq!(first, second);
        prop_assert_eq!(books, before);
    }

    #[test]
    fn prop_adding_a_token_never_adds_hits(
        shelf in shelf_strategy(),
        first in "[abcde]{1,4}",
        second in "[abcde]{1,4}",
    ) {
        let books = books(&shelf);
        let options = SearchOptions::default().with_limit(usize::MAX);

        let broad: Vec<usize> = search(&books, &first, &options).iter().map(|h| h.index).collect();
        let narrow = search(&books, &format!("{first} {second}"), &options);
        for hit in narrow {
            prop_assert!(broad.contains(&hit.index));
        }
    }
}
