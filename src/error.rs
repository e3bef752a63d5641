//! Error types for catalog operations.
//!
//! This module provides the [`CatalogError`] type for all catalog operations
//! and the [`Result`] convenience type.

use thiserror::Error;

/// Error type for all catalog operations.
///
/// Every operation that returns one of these has left the catalog exactly as
/// it was before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Malformed constructor input or a blank author filter.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A book with the same id is already in the catalog.
    #[error("Duplicate book id: {0}")]
    DuplicateId(u32),

    /// Adding the book would push the total number of copies past the capacity.
    #[error("Capacity exceeded: {held} copies held, {requested} requested, capacity is {capacity}")]
    CapacityExceeded {
        /// Copies the rejected book would have added.
        requested: u64,
        /// Copies already held by the catalog.
        held: u64,
        /// Maximum number of copies the catalog may hold.
        capacity: u32,
    },

    /// No book with the given id exists in the catalog.
    #[error("No book with id {0}")]
    NotFound(u32),

    /// Every copy of the book is currently lent.
    #[error("No copies available to lend for book {0}")]
    NoCopiesAvailable(u32),

    /// Every copy of the book is already on the shelf.
    #[error("No copies currently lent for book {0}")]
    NoCopiesLent(u32),

    /// The query needs at least one book in the catalog.
    #[error("The library has no books")]
    EmptyLibrary,
}

/// Convenience type alias for [`std::result::Result`] with [`CatalogError`].
pub type Result<T> = std::result::Result<T, CatalogError>;
