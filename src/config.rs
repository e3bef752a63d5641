//! Configuration options for a library catalog.
//!
//! This module provides the [`LibraryConfig`] struct which fixes a catalog's
//! name and capacity and controls when the catalog re-verifies its invariant.

use std::fmt;

/// When a catalog re-checks its invariant after a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvariantChecks {
    /// Check only in builds with `debug_assertions` enabled
    #[default]
    DebugOnly,
    /// Check after every mutation
    Always,
    /// Never check
    Never,
}

impl InvariantChecks {
    /// Whether a check should run in the current build.
    #[must_use]
    pub const fn enabled(self) -> bool {
        match self {
            Self::DebugOnly => cfg!(debug_assertions),
            Self::Always => true,
            Self::Never => false,
        }
    }
}

impl fmt::Display for InvariantChecks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DebugOnly => write!(f, "debug-only"),
            Self::Always => write!(f, "always"),
            Self::Never => write!(f, "never"),
        }
    }
}

/// Configuration for a [`Library`](crate::Library).
///
/// # Examples
///
/// ```
/// use library_catalog::{InvariantChecks, Library, LibraryConfig};
///
/// let config = LibraryConfig::new("Biblioteca Central", 50)
///     .with_invariant_checks(InvariantChecks::Always);
/// let library = Library::with_config(config)?;
/// assert_eq!(library.book_capacity(), 50);
/// # Ok::<(), library_catalog::CatalogError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LibraryConfig {
    /// Library name; must not be empty.
    pub name: String,

    /// Maximum total number of copies, summed over all books; must be positive.
    pub book_capacity: u32,

    /// When to re-verify the catalog invariant after a mutation.
    pub invariant_checks: InvariantChecks,
}

impl LibraryConfig {
    /// Creates a configuration with the given name and capacity.
    #[must_use]
    pub fn new(name: impl Into<String>, book_capacity: u32) -> Self {
        Self {
            name: name.into(),
            book_capacity,
            invariant_checks: InvariantChecks::default(),
        }
    }

    /// Sets the library name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the capacity.
    #[must_use]
    pub fn with_book_capacity(mut self, book_capacity: u32) -> Self {
        self.book_capacity = book_capacity;
        self
    }

    /// Sets when the invariant is re-checked.
    #[must_use]
    pub fn with_invariant_checks(mut self, invariant_checks: InvariantChecks) -> Self {
        self.invariant_checks = invariant_checks;
        self
    }
}
