//! Ranking: weights, word boundaries, phrase bonus, ties, limits.

use super::common::{assert_descending, indices, make_book, numbered_shelf, title_author_options, titles};
use shelfsearch::scoring::PHRASE_BONUS;
use shelfsearch::{search, Book, FieldConfig, SearchOptions};

#[test]
fn title_hits_outrank_author_hits() {
    let books = vec![
        make_book("Letters", "Ray Bradbury"),
        make_book("Bradbury Stories", "Anon"),
    ];
    let hits = search(&books, "bradbury", &title_author_options());

    assert_eq!(titles(&hits), vec!["Bradbury Stories", "Letters"]);
    assert_descending(&hits);
}

#[test]
fn custom_weights_reorder_results() {
    let books = vec![
        make_book("Letters", "Ray Bradbury"),
        make_book("Bradbury Stories", "Anon"),
    ];
    let options = SearchOptions::default()
        .with_fields(FieldConfig::empty().with("title", 1.0).with("author", 50.0));
    let hits = search(&books, "bradbury", &options);

    assert_eq!(titles(&hits), vec!["Letters", "Bradbury Stories"]);
}

#[test]
fn word_start_beats_mid_word() {
    let books = vec![make_book("Unbroken", "Anon"), make_book("Broken Earth", "Anon")];
    let hits = search(&books, "broken", &title_author_options());

    assert_eq!(indices(&hits), vec![1, 0]);
    assert_eq!(hits[0].score - hits[1].score, 20.0 * 9.0);
}

#[test]
fn exact_scores_follow_the_formula() {
    let books = vec![make_book("Dune", "Frank Herbert")];
    let hits = search(&books, "dune herbert", &title_author_options());

    // title: (100 + 20 + 4) * 9, author: (100 + 20 + 7) * 7
    assert_eq!(hits[0].score, 124.0 * 9.0 + 127.0 * 7.0);
}

#[test]
fn multi_word_phrase_earns_bonus_once() {
    let books = vec![make_book("The Hobbit", "Anon")];
    let options = title_author_options().with_fuzzy_max_distance(0);

    let words = search(&books, "hobbit", &options)[0].score;
    let phrase = search(&books, r#""the hobbit""#, &options)[0].score;

    assert_eq!(words, 126.0 * 9.0);
    assert_eq!(phrase, 130.0 * 9.0 + PHRASE_BONUS);
}

#[test]
fn single_word_in_quotes_gets_no_bonus() {
    let books = vec![make_book("The Hobbit", "Anon")];
    let options = title_author_options().with_fuzzy_max_distance(0);

    let quoted = search(&books, r#""hobbit""#, &options)[0].score;
    assert_eq!(quoted, 126.0 * 9.0);
}

#[test]
fn ties_keep_input_order() {
    let books: Vec<Book> = (0..6).map(|_| make_book("Same Title", "Same Author")).collect();
    let hits = search(&books, "same", &title_author_options());

    assert_eq!(indices(&hits), vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn limit_keeps_the_best() {
    let books = numbered_shelf(50);
    let options = title_author_options().with_limit(5);

    // Every title starts with "book", so all 50 tie and the cap keeps input order
    let hits = search(&books, "book", &options);
    assert_eq!(hits.len(), 5);
    assert_eq!(indices(&hits), vec![0, 1, 2, 3, 4]);

    // Without typo tolerance "#4" hits only #4 and #40..#49
    let exact = title_author_options().with_fuzzy_max_distance(0);
    let all = search(&books, "book #4", &exact);
    assert_eq!(all.len(), 11);
    let top = search(&books, "book #4", &exact.with_limit(5));
    assert_eq!(indices(&top), indices(&all)[..5].to_vec());
    assert_eq!(indices(&top), vec![3, 39, 40, 41, 42]);
}

#[test]
fn limit_picks_highest_scores_not_first_matches() {
    let mut books: Vec<Book> = (0..50).map(|n| make_book(&format!("Unbroken {}", n), "Anon")).collect();
    books.push(make_book("Broken Earth", "Anon"));
    let options = title_author_options().with_limit(5);

    let hits = search(&books, "broken", &options);
    assert_eq!(hits.len(), 5);
    assert_eq!(hits[0].index, 50);
    assert_descending(&hits);
}
