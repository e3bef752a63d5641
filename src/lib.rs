#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # Library Catalog
//!
//! An in-memory catalog of the books a single library owns, and the operations
//! a librarian performs on it: registering books, lending and returning
//! copies, finding the title with the most words, and removing every book by
//! an author.
//!
//! ## Quick Start
//!
//! ```
//! use library_catalog::{Book, Library};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut library = Library::new("Biblioteca Popular", 20)?;
//! library.add_book(Book::new(2, "El Aleph", "Jorge Luis Borges", 146, 3)?)?;
//! library.add_book(Book::new(1, "Ficciones", "Jorge Luis Borges", 203, 2)?)?;
//! library.add_book(Book::new(5, "Rayuela", "Julio Cortázar", 600, 1)?)?;
//!
//! library.lend_book(5)?;
//! assert!(library.lend_book(5).is_err());
//!
//! assert_eq!(library.delete_books_with_author("Jorge Luis Borges")?, 2);
//! assert_eq!(library.len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`book`] — Book records and their copy counters
//! - [`library`] — The id-ordered catalog and its operations
//! - [`config`] — Catalog configuration
//! - [`shared`] — Single-lock handle for use across threads
//! - [`error`] — Error types and result type

pub mod book;
pub mod config;
pub mod error;
pub mod library;
pub mod shared;

pub use book::{Book, BookBuilder};
pub use config::{InvariantChecks, LibraryConfig};
pub use error::{CatalogError, Result};
pub use library::{Library, SearchProbe};
pub use shared::SharedLibrary;
