//! Book records held by a library catalog.
//!
//! A [`Book`] is fixed at construction except for one counter: the number of
//! copies currently on the shelf. That counter only moves through
//! [`Book::lend_copy`] and [`Book::return_copy`], which clamp silently at the
//! bounds instead of failing. Strict, failing variants of both live on
//! [`Library`](crate::Library).
//!
//! # Examples
//!
//! ```
//! use library_catalog::Book;
//!
//! let mut book = Book::new(1, "Rayuela", "Julio Cortázar", 600, 2)?;
//! assert!(book.lend_copy());
//! assert_eq!(book.copies_available(), 1);
//! assert_eq!(
//!     book.to_string(),
//!     "1: Rayuela (by Julio Cortázar). 600 pages. Copies: 2 (1 available)"
//! );
//! # Ok::<(), library_catalog::CatalogError>(())
//! ```

use std::fmt;

use tracing::warn;

use crate::error::{CatalogError, Result};

/// A book title owned by a library, with its copy counters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Book {
    id: u32,
    title: String,
    author: String,
    pages: u32,
    copies: u32,
    copies_available: u32,
}

/// Returns true when `value` is empty or only ASCII whitespace.
pub(crate) fn is_blank(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_whitespace())
}

impl Book {
    /// Create a new book with every copy available.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidArgument`] if the title or author is
    /// blank, or if the id, page count or copy count is zero.
    pub fn new(
        id: u32,
        title: impl Into<String>,
        author: impl Into<String>,
        pages: u32,
        copies: u32,
    ) -> Result<Self> {
        let title = title.into();
        let author = author.into();

        if is_blank(&title) {
            return Err(CatalogError::InvalidArgument(
                "title must not be empty".to_string(),
            ));
        }
        if is_blank(&author) {
            return Err(CatalogError::InvalidArgument(
                "author must not be empty".to_string(),
            ));
        }
        if id == 0 {
            return Err(CatalogError::InvalidArgument(
                "id must be positive".to_string(),
            ));
        }
        if pages == 0 {
            return Err(CatalogError::InvalidArgument(
                "page count must be positive".to_string(),
            ));
        }
        if copies == 0 {
            return Err(CatalogError::InvalidArgument(
                "copy count must be positive".to_string(),
            ));
        }

        let book = Book {
            id,
            title,
            author,
            pages,
            copies,
            copies_available: copies,
        };
        debug_assert!(book.invariant_holds(), "book invariant broken on construction");
        Ok(book)
    }

    /// Create a builder for fluently constructing a book with the given id.
    ///
    /// # Examples
    ///
    /// ```
    /// use library_catalog::Book;
    ///
    /// let book = Book::builder(7)
    ///     .title("El Aleph")
    ///     .author("Jorge Luis Borges")
    ///     .pages(146)
    ///     .copies(3)
    ///     .build()?;
    /// assert_eq!(book.copies_available(), 3);
    /// # Ok::<(), library_catalog::CatalogError>(())
    /// ```
    #[must_use]
    pub fn builder(id: u32) -> BookBuilder {
        BookBuilder {
            id,
            title: String::new(),
            author: String::new(),
            pages: 0,
            copies: 0,
        }
    }

    /// Book id, unique within a library
    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Book title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Book author
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Number of pages
    #[must_use]
    pub fn pages(&self) -> u32 {
        self.pages
    }

    /// Total number of copies owned
    #[must_use]
    pub fn copies(&self) -> u32 {
        self.copies
    }

    /// Number of copies on the shelf (not lent)
    #[must_use]
    pub fn copies_available(&self) -> u32 {
        self.copies_available
    }

    /// Number of copies currently lent
    #[must_use]
    pub fn copies_on_loan(&self) -> u32 {
        self.copies.saturating_sub(self.copies_available)
    }

    /// Whether at least one copy can be lent
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.copies_available > 0
    }

    /// Lend one copy of the book.
    ///
    /// Returns `true` if a copy was lent. When no copy is available the call
    /// is a no-op that logs a warning and returns `false`.
    pub fn lend_copy(&mut self) -> bool {
        if self.copies_available == 0 {
            warn!(id = self.id, "no copies available to lend");
            return false;
        }
        self.copies_available -= 1;
        true
    }

    /// Take back one lent copy of the book.
    ///
    /// Returns `true` if a copy was returned. When no copy is on loan the
    /// call is a no-op that logs a warning and returns `false`.
    pub fn return_copy(&mut self) -> bool {
        if self.copies_available >= self.copies {
            warn!(id = self.id, "no copies currently lent");
            return false;
        }
        self.copies_available += 1;
        true
    }

    /// Check the book's internal consistency.
    ///
    /// Holds when the title and author are not blank, the id, page count and
    /// copy count are positive, and the available copies do not exceed the
    /// copies owned.
    #[must_use]
    pub fn invariant_holds(&self) -> bool {
        !is_blank(&self.title)
            && !is_blank(&self.author)
            && self.id > 0
            && self.pages > 0
            && self.copies > 0
            && self.copies_available <= self.copies
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} (by {}). {} pages. Copies: {} ({} available)",
            self.id, self.title, self.author, self.pages, self.copies, self.copies_available
        )
    }
}

/// Builder for [`Book`]; validation happens in [`BookBuilder::build`].
#[derive(Debug, Clone)]
pub struct BookBuilder {
    id: u32,
    title: String,
    author: String,
    pages: u32,
    copies: u32,
}

impl BookBuilder {
    /// Set the title
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the author
    #[must_use]
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Set the page count
    #[must_use]
    pub fn pages(mut self, pages: u32) -> Self {
        self.pages = pages;
        self
    }

    /// Set the number of copies owned
    #[must_use]
    pub fn copies(mut self, copies: u32) -> Self {
        self.copies = copies;
        self
    }

    /// Build the book
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidArgument`] under the same conditions as
    /// [`Book::new`], including any field that was never set.
    pub fn build(self) -> Result<Book> {
        Book::new(self.id, self.title, self.author, self.pages, self.copies)
    }
}
