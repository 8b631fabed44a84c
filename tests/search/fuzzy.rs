//! Typo tolerance: ceilings, minimum lengths, window anchoring.

use super::common::{numbered_shelf, sample_shelf, title_author_options, titles};
use shelfsearch::{search, tokenize, FuzzyPresets, SearchOptions, WindowAnchor};

#[test]
fn transposed_letters_match_at_distance_one() {
    let books = numbered_shelf(20);
    let options = title_author_options().with_fuzzy_max_distance(1);

    let hits = search(&books, "Authro", &options);
    assert_eq!(hits.len(), 20);
}

#[test]
fn zero_ceiling_disables_typo_tolerance() {
    let books = numbered_shelf(20);
    let options = title_author_options().with_fuzzy_max_distance(0);

    assert!(search(&books, "Authro", &options).is_empty());
}

#[test]
fn common_misspellings_find_the_book() {
    let books = sample_shelf();
    let options = title_author_options();

    assert_eq!(titles(&search(&books, "hobbot", &options)), vec!["The Hobbit"]);
    assert_eq!(
        titles(&search(&books, "tolkein", &options)),
        vec!["The Hobbit", "The Fellowship of the Ring"]
    );
}

#[test]
fn looser_ceiling_recovers_two_typos() {
    let books = sample_shelf();
    let strict = title_author_options().with_fuzzy_max_distance(1);
    let looser = title_author_options().with_fuzzy_max_distance(2);

    assert!(search(&books, "foudnatoin", &strict).is_empty());
    assert_eq!(titles(&search(&books, "foudnatoin", &looser)), vec!["Foundation"]);
}

#[test]
fn short_tokens_skip_fuzzy() {
    let books = vec![super::common::make_book("Ox", "Nobody")];
    let options = SearchOptions::default()
        .with_fields(shelfsearch::FieldConfig::empty().with("title", true))
        .with_min_substring_length(3);

    // "ix" is one edit from "ox" but shorter than the minimum
    assert!(search(&books, "ix", &options).is_empty());

    let options = options.with_min_substring_length(2);
    assert_eq!(search(&books, "ix", &options).len(), 1);
}

#[test]
fn exact_beats_fuzzy_in_same_field_weight() {
    let books = vec![
        super::common::make_book("Hobbot Tales", "Anon"),
        super::common::make_book("The Hobbit", "Anon"),
    ];
    let hits = search(&books, "hobbit", &title_author_options());

    assert_eq!(titles(&hits), vec!["The Hobbit", "Hobbot Tales"]);
    assert!(hits[0].score > hits[1].score);
}

#[test]
fn unanchored_windows_are_opt_in() {
    let books = vec![
        super::common::make_book("Dune", "Frank Herbert"),
        super::common::make_book("Foundation", "Isaac Asimov"),
    ];
    let anchored = title_author_options();
    let anywhere = title_author_options().with_fuzzy_anchor(WindowAnchor::Anywhere);

    assert_eq!(search(&books, "dun", &anchored).len(), 1);
    assert_eq!(search(&books, "dun", &anywhere).len(), 2);
}

#[test]
fn typos_match_words_behind_punctuation() {
    let books = vec![
        super::common::make_book("(Dune)", "x"),
        super::common::make_book("Foundation", "Isaac Asimov"),
        super::common::make_book("\"Hobbit\" notes", "Anon"),
    ];
    let options = SearchOptions::default();

    assert_eq!(titles(&search(&books, "dnue", &options)), vec!["(Dune)"]);
    assert_eq!(titles(&search(&books, "dun", &options)), vec!["(Dune)"]);
    assert_eq!(titles(&search(&books, "hobibt", &options)), vec!["\"Hobbit\" notes"]);
}

#[test]
fn presets_pick_ceiling_from_query_shape() {
    let books = sample_shelf();
    let presets = FuzzyPresets::default();

    let tokens = tokenize(r#""the hobbot""#);
    let options = title_author_options().with_fuzzy_max_distance(presets.resolve(&tokens, false));
    assert!(shelfsearch::search_tokens(&books, &tokens, &options).is_empty());

    let options = title_author_options().with_fuzzy_max_distance(presets.resolve(&tokens, true));
    assert_eq!(shelfsearch::search_tokens(&books, &tokens, &options).len(), 1);
}
