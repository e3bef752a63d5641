//! Common test helpers and fixtures shared across the test suite.

use library_catalog::{Book, Library};

/// Creates a book with a fixed page count.
#[allow(dead_code)]
pub fn make_book(id: u32, title: &str, author: &str, copies: u32) -> Book {
    Book::new(id, title, author, 100, copies).expect("fixture book should be valid")
}

/// Creates a library holding one single-copy book for each id.
///
/// Books are added in the given order, so callers can exercise out-of-order
/// insertion.
#[allow(dead_code)]
pub fn library_with_ids(ids: &[u32]) -> Library {
    let capacity = u32::try_from(ids.len())
        .expect("fixture id count should fit in u32")
        .max(1);
    let mut library = Library::new("Test Library", capacity).expect("fixture library should be valid");
    for &id in ids {
        library
            .add_book(make_book(id, &format!("Title {id}"), "Author", 1))
            .expect("fixture book should fit");
    }
    library
}

/// Ids of the catalog in stored order.
pub fn ids(library: &Library) -> Vec<u32> {
    library.books().iter().map(Book::id).collect()
}

/// Creates a small Argentine-literature catalog.
///
/// Ids 1-3 are by Borges, 4 by Cortázar.
#[allow(dead_code)]
pub fn create_realistic_library() -> Library {
    let mut library = Library::new("Biblioteca Nacional", 20).expect("fixture library should be valid");
    for book in [
        make_book(1, "Ficciones", "Jorge Luis Borges", 2),
        make_book(2, "El Aleph", "Jorge Luis Borges", 3),
        make_book(3, "El libro de arena", "Jorge Luis Borges", 1),
        make_book(4, "Rayuela", "Julio Cortázar", 2),
    ] {
        library.add_book(book).expect("fixture book should fit");
    }
    library
}
