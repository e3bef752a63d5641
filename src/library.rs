//! The library catalog: an id-ordered collection of books with a copy capacity.
//!
//! [`Library`] keeps its books sorted strictly ascending by id so that lending
//! and returning can locate a book with a binary search. Every mutating
//! operation either applies completely or returns an error and leaves the
//! catalog untouched.
//!
//! # Examples
//!
//! ```
//! use library_catalog::{Book, CatalogError, Library};
//!
//! let mut library = Library::new("Biblioteca Nacional", 10)?;
//! library.add_book(Book::new(3, "El Aleph", "Jorge Luis Borges", 146, 2)?)?;
//! library.add_book(Book::new(1, "Rayuela", "Julio Cortázar", 600, 1)?)?;
//!
//! let ids: Vec<u32> = library.books().iter().map(|b| b.id()).collect();
//! assert_eq!(ids, [1, 3]);
//!
//! assert_eq!(library.lend_book(1)?, 0);
//! assert_eq!(library.lend_book(1), Err(CatalogError::NoCopiesAvailable(1)));
//! assert_eq!(library.most_words_in_title()?.title(), "El Aleph");
//! # Ok::<(), CatalogError>(())
//! ```

use std::fmt;

use tracing::{debug, error};

use crate::book::{is_blank, Book};
use crate::config::{InvariantChecks, LibraryConfig};
use crate::error::{CatalogError, Result};

/// Outcome of a binary search over the catalog, with its cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchProbe {
    /// `Ok(position)` of the matching book, or `Err(position)` where a book
    /// with that id would be inserted.
    pub index: std::result::Result<usize, usize>,
    /// Number of id comparisons the search made.
    pub comparisons: usize,
}

/// A library catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Library {
    name: String,
    book_capacity: u32,
    /// Strictly ascending by id.
    books: Vec<Book>,
    invariant_checks: InvariantChecks,
}

impl Library {
    /// Create an empty library with the given name and capacity.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidArgument`] if the name is blank or the
    /// capacity is zero.
    pub fn new(name: impl Into<String>, book_capacity: u32) -> Result<Self> {
        Self::with_config(LibraryConfig::new(name, book_capacity))
    }

    /// Create an empty library from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidArgument`] if the configured name is
    /// blank or the configured capacity is zero.
    pub fn with_config(config: LibraryConfig) -> Result<Self> {
        if is_blank(&config.name) {
            return Err(CatalogError::InvalidArgument(
                "library name must not be empty".to_string(),
            ));
        }
        if config.book_capacity == 0 {
            return Err(CatalogError::InvalidArgument(
                "book capacity must be positive".to_string(),
            ));
        }

        let library = Library {
            name: config.name,
            book_capacity: config.book_capacity,
            books: Vec::new(),
            invariant_checks: config.invariant_checks,
        };
        library.verify("new");
        Ok(library)
    }

    /// Library name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Maximum total number of copies the library may hold
    #[must_use]
    pub fn book_capacity(&self) -> u32 {
        self.book_capacity
    }

    /// All books, in ascending id order
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Number of distinct books
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the catalog holds no books
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Sum of copies over all books
    #[must_use]
    pub fn total_copies(&self) -> u64 {
        self.books.iter().map(|book| u64::from(book.copies())).sum()
    }

    /// Copies that can still be added before reaching capacity
    #[must_use]
    pub fn remaining_capacity(&self) -> u64 {
        u64::from(self.book_capacity).saturating_sub(self.total_copies())
    }

    /// Binary search for `id`, reporting how many comparisons it took.
    #[must_use]
    pub fn probe(&self, id: u32) -> SearchProbe {
        let mut comparisons = 0;
        let index = self.books.binary_search_by(|book| {
            comparisons += 1;
            book.id().cmp(&id)
        });
        SearchProbe { index, comparisons }
    }

    /// Look up a book by id
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&Book> {
        self.probe(id)
            .index
            .ok()
            .and_then(|index| self.books.get(index))
    }

    /// Whether a book with `id` is in the catalog
    #[must_use]
    pub fn contains(&self, id: u32) -> bool {
        self.probe(id).index.is_ok()
    }

    /// Add a book, keeping the catalog sorted by id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::CapacityExceeded`] if the book's copies would
    /// push the total past the capacity, or [`CatalogError::DuplicateId`] if a
    /// book with the same id is already present. The capacity check runs first.
    pub fn add_book(&mut self, book: Book) -> Result<()> {
        let held = self.total_copies();
        let requested = u64::from(book.copies());
        if held + requested > u64::from(self.book_capacity) {
            return Err(CatalogError::CapacityExceeded {
                requested,
                held,
                capacity: self.book_capacity,
            });
        }

        let position = match self.probe(book.id()).index {
            Ok(_) => return Err(CatalogError::DuplicateId(book.id())),
            Err(position) => position,
        };

        debug!(
            id = book.id(),
            position,
            copies = book.copies(),
            library = %self.name,
            "book added"
        );
        self.books.insert(position, book);
        self.verify("add_book");
        Ok(())
    }

    /// Mutable access to the book with `id`, found by binary search, along
    /// with the search that located it.
    fn book_mut(&mut self, id: u32) -> Result<(&mut Book, SearchProbe)> {
        let probe = self.probe(id);
        let index = probe.index.map_err(|_| CatalogError::NotFound(id))?;
        let book = self
            .books
            .get_mut(index)
            .ok_or(CatalogError::NotFound(id))?;
        Ok((book, probe))
    }

    /// Lend one copy of the book with `id`, reporting the search used.
    fn lend_located(&mut self, id: u32) -> Result<(u32, SearchProbe)> {
        let (book, probe) = self.book_mut(id)?;
        if !book.is_available() {
            return Err(CatalogError::NoCopiesAvailable(id));
        }
        book.lend_copy();
        let available = book.copies_available();

        debug!(id, available, comparisons = probe.comparisons, "copy lent");
        self.verify("lend_book");
        Ok((available, probe))
    }

    /// Lend one copy of the book with `id`.
    ///
    /// Returns the number of copies still available afterwards. The book is
    /// located in O(log n) comparisons.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no such book exists, or
    /// [`CatalogError::NoCopiesAvailable`] if every copy is already lent.
    pub fn lend_book(&mut self, id: u32) -> Result<u32> {
        self.lend_located(id).map(|(available, _)| available)
    }

    /// Take back one lent copy of the book with `id`.
    ///
    /// Returns the number of copies available afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no such book exists, or
    /// [`CatalogError::NoCopiesLent`] if no copy is currently on loan.
    pub fn return_book(&mut self, id: u32) -> Result<u32> {
        let (book, _) = self.book_mut(id)?;
        if book.copies_on_loan() == 0 {
            return Err(CatalogError::NoCopiesLent(id));
        }
        book.return_copy();
        let available = book.copies_available();

        debug!(id, available, "copy returned");
        self.verify("return_book");
        Ok(available)
    }

    /// Count the words in `title`, separated by runs of ASCII whitespace.
    ///
    /// Blank input has zero words.
    ///
    /// ```
    /// use library_catalog::Library;
    ///
    /// assert_eq!(Library::count_words("  El   Aleph "), 2);
    /// assert_eq!(Library::count_words(" \t "), 0);
    /// ```
    #[must_use]
    pub fn count_words(title: &str) -> usize {
        title.split_ascii_whitespace().count()
    }

    /// The book whose title has the most words.
    ///
    /// Ties go to the book with the smallest id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EmptyLibrary`] if the catalog has no books.
    pub fn most_words_in_title(&self) -> Result<&Book> {
        let mut books = self.books.iter();
        let mut best = books.next().ok_or(CatalogError::EmptyLibrary)?;
        let mut best_words = Self::count_words(best.title());

        for book in books {
            let words = Self::count_words(book.title());
            if words > best_words {
                best = book;
                best_words = words;
            }
        }
        Ok(best)
    }

    /// Remove every book whose author is exactly `author`.
    ///
    /// The match is case-sensitive and the stored author is compared as is.
    /// Remaining books keep their order. Returns the number of books removed.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidArgument`] if `author` is blank.
    pub fn delete_books_with_author(&mut self, author: &str) -> Result<usize> {
        if is_blank(author) {
            return Err(CatalogError::InvalidArgument(
                "author must not be empty".to_string(),
            ));
        }

        let before = self.books.len();
        self.books.retain(|book| book.author() != author);
        let removed = before - self.books.len();

        debug!(author, removed, library = %self.name, "books deleted by author");
        self.verify("delete_books_with_author");
        Ok(removed)
    }

    /// Check the catalog's internal consistency.
    ///
    /// Holds when the name is not blank, the capacity is positive, every book
    /// satisfies its own invariant, ids are strictly ascending, and the total
    /// number of copies does not exceed the capacity.
    #[must_use]
    pub fn invariant_holds(&self) -> bool {
        if is_blank(&self.name) || self.book_capacity == 0 {
            return false;
        }
        if !self.books.iter().all(Book::invariant_holds) {
            return false;
        }
        let ascending = self
            .books
            .iter()
            .zip(self.books.iter().skip(1))
            .all(|(prev, next)| prev.id() < next.id());
        ascending && self.total_copies() <= u64::from(self.book_capacity)
    }

    /// Re-check the invariant after `operation` if the configuration asks for it.
    fn verify(&self, operation: &'static str) {
        if !self.invariant_checks.enabled() {
            return;
        }
        let holds = self.invariant_holds();
        if !holds {
            error!(operation, library = %self.name, "catalog invariant violated");
        }
        debug_assert!(holds, "catalog invariant violated after {operation}");
    }
}

impl fmt::Display for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}/{} copies)",
            self.name,
            self.total_copies(),
            self.book_capacity
        )?;
        for book in &self.books {
            write!(f, "\n{book}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: u32, title: &str, author: &str, copies: u32) -> Book {
        Book::new(id, title, author, 100, copies).unwrap()
    }

    fn library_with_ids(ids: &[u32]) -> Library {
        let mut library = Library::new("Test", 4096).unwrap();
        for &id in ids {
            library
                .add_book(book(id, &format!("Title {id}"), "Author", 1))
                .unwrap();
        }
        library
    }

    #[test]
    fn test_new_rejects_invalid_arguments() {
        assert!(matches!(
            Library::new("", 10),
            Err(CatalogError::InvalidArgument(_))
        ));
        assert!(matches!(
            Library::new("  ", 10),
            Err(CatalogError::InvalidArgument(_))
        ));
        assert!(matches!(
            Library::new("Central", 0),
            Err(CatalogError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_new_library_is_empty() {
        let library = Library::new("Central", 10).unwrap();
        assert!(library.is_empty());
        assert_eq!(library.total_copies(), 0);
        assert_eq!(library.remaining_capacity(), 10);
        assert!(library.invariant_holds());
    }

    #[test]
    fn test_add_book_keeps_id_order() {
        let library = library_with_ids(&[5, 1, 7, 3]);
        let ids: Vec<u32> = library.books().iter().map(Book::id).collect();
        assert_eq!(ids, [1, 3, 5, 7]);
        assert!(library.invariant_holds());
    }

    #[test]
    fn test_capacity_checked_before_duplicate() {
        let mut library = Library::new("Central", 2).unwrap();
        library.add_book(book(1, "Rayuela", "Cortázar", 2)).unwrap();

        let result = library.add_book(book(1, "Rayuela", "Cortázar", 1));
        assert_eq!(
            result,
            Err(CatalogError::CapacityExceeded {
                requested: 1,
                held: 2,
                capacity: 2,
            })
        );
    }

    #[test]
    fn test_probe_counts_logarithmic_comparisons() {
        let library = library_with_ids(&[1, 3, 5, 7]);
        let probe = library.probe(5);
        assert_eq!(probe.index, Ok(2));
        assert!(probe.comparisons <= 3, "took {} comparisons", probe.comparisons);

        assert_eq!(library.probe(4).index, Err(2));
    }

    #[test]
    fn test_book_mut_reports_missing_id() {
        let mut library = library_with_ids(&[1, 3]);
        assert_eq!(
            library.book_mut(2).map(|(b, _)| b.id()),
            Err(CatalogError::NotFound(2))
        );
        assert_eq!(library.book_mut(3).map(|(b, _)| b.id()), Ok(3));
    }

    #[test]
    fn test_lend_uses_logarithmic_search() {
        let mut library = library_with_ids(&[1, 3, 5, 7]);
        let (available, probe) = library.lend_located(5).unwrap();
        assert_eq!(available, 0);
        assert_eq!(probe.index, Ok(2));
        assert!(probe.comparisons <= 3, "took {} comparisons", probe.comparisons);
        let untouched: Vec<u32> = library
            .books()
            .iter()
            .filter(|b| b.id() != 5)
            .map(Book::copies_available)
            .collect();
        assert_eq!(untouched, [1, 1, 1]);
    }

    #[test]
    fn test_lend_on_large_catalog_stays_logarithmic() {
        let ids: Vec<u32> = (1..=1024).map(|n| n * 2).collect();
        let mut library = library_with_ids(&ids);
        // ceil(log2 1024) + 1
        let bound = 11;
        for id in [2, 1024, 1026, 2048] {
            let (_, probe) = library.lend_located(id).unwrap();
            assert!(
                probe.comparisons <= bound,
                "id {id} took {} comparisons",
                probe.comparisons
            );
        }
        assert_eq!(library.lend_located(1023), Err(CatalogError::NotFound(1023)));
    }

    #[test]
    fn test_count_words_splits_on_ascii_whitespace_only() {
        assert_eq!(Library::count_words("El\u{a0}Aleph"), 1);
        assert_eq!(Library::count_words("El\tAleph\r\nde\x0Cnuevo"), 4);
        assert_eq!(Library::count_words("\u{a0}"), 1);
    }

    #[test]
    fn test_display_lists_books_in_order() {
        let mut library = Library::new("Central", 5).unwrap();
        library.add_book(book(2, "El Aleph", "Borges", 2)).unwrap();
        library.add_book(book(1, "Rayuela", "Cortázar", 1)).unwrap();
        assert_eq!(
            library.to_string(),
            "Central (3/5 copies)\n\
             1: Rayuela (by Cortázar). 100 pages. Copies: 1 (1 available)\n\
             2: El Aleph (by Borges). 100 pages. Copies: 2 (2 available)"
        );
    }

    #[test]
    fn test_invariant_detects_unsorted_books() {
        let mut library = library_with_ids(&[1, 2]);
        library.books.swap(0, 1);
        assert!(!library.invariant_holds());
    }

    #[test]
    fn test_invariant_detects_overfull_catalog() {
        let mut library = Library::new("Central", 1).unwrap();
        library.books.push(book(1, "Rayuela", "Cortázar", 2));
        assert!(!library.invariant_holds());
    }
}
