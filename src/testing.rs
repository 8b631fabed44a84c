//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures to avoid duplication.

#![doc(hidden)]

use crate::fields::FieldConfig;
use crate::types::{Book, SearchOptions};

/// Create a book with just a title and author.
pub fn make_book(title: &str, author: &str) -> Book {
    Book::new(title, author)
}

/// Create a book with series, genre and notes filled in.
pub fn make_full_book(title: &str, author: &str, series: &str, genre: &str, notes: &str) -> Book {
    Book {
        series: Some(series.to_string()),
        genre: Some(genre.to_string()),
        notes: Some(notes.to_string()),
        ..Book::new(title, author)
    }
}

/// A small reading list covering accents, series, and near-miss spellings.
pub fn sample_shelf() -> Vec<Book> {
    vec![
        make_full_book("Dune", "Frank Herbert", "Dune Chronicles", "Science Fiction", "Spice, sand, and politics"),
        make_full_book("Dune Messiah", "Frank Herbert", "Dune Chronicles", "Science Fiction", ""),
        make_book("Foundation", "Isaac Asimov"),
        make_full_book("The Hobbit", "J.R.R. Tolkien", "Middle-earth", "Fantasy", "Re-read every winter"),
        make_full_book("The Fellowship of the Ring", "J.R.R. Tolkien", "The Lord of the Rings", "Fantasy", ""),
        make_book("Cien años de soledad", "Gabriel García Márquez"),
        make_full_book("A Wizard of Earthsea", "Ursula K. Le Guin", "Earthsea", "Fantasy", "Recommended by Ana"),
        make_book("Jane Eyre", "Charlotte Brontë"),
    ]
}

/// Numbered books ("Book #1" by "Author 1", ...) for cap and ordering tests.
pub fn numbered_shelf(count: usize) -> Vec<Book> {
    (1..=count)
        .map(|n| make_book(&format!("Book #{}", n), &format!("Author {}", n)))
        .collect()
}

/// Options searching only title and author with default weights.
pub fn title_author_options() -> SearchOptions {
    SearchOptions::default().with_fields(FieldConfig::empty().with("title", true).with("author", true))
}
