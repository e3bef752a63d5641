//! Thread-safe handle to a library catalog.
//!
//! The catalog invariant spans the whole book list, so a [`SharedLibrary`]
//! guards the entire [`Library`] with one mutex. Each closure passed to
//! [`SharedLibrary::with`] or [`SharedLibrary::with_mut`] runs under that lock.

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::warn;

use crate::library::Library;

/// A cloneable handle sharing one [`Library`] between threads.
///
/// # Examples
///
/// ```
/// use library_catalog::{Book, Library, SharedLibrary};
///
/// let shared = SharedLibrary::new(Library::new("Central", 10)?);
/// let handle = shared.clone();
/// std::thread::spawn(move || {
///     handle.with_mut(|library| library.add_book(Book::new(1, "Rayuela", "Cortázar", 600, 2)?))
/// })
/// .join()
/// .unwrap()?;
///
/// assert_eq!(shared.with(Library::len), 1);
/// # Ok::<(), library_catalog::CatalogError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SharedLibrary {
    inner: Arc<Mutex<Library>>,
}

impl SharedLibrary {
    /// Wrap a library for shared access
    #[must_use]
    pub fn new(library: Library) -> Self {
        Self {
            inner: Arc::new(Mutex::new(library)),
        }
    }

    /// Acquire the catalog lock.
    ///
    /// A poisoned lock is recovered: every catalog operation either applies
    /// completely or not at all, so a panicking holder cannot leave it half
    /// updated.
    fn lock(&self) -> MutexGuard<'_, Library> {
        self.inner.lock().unwrap_or_else(|poisoned| {
            warn!("recovering poisoned library lock");
            poisoned.into_inner()
        })
    }

    /// Run a read-only closure against the catalog
    pub fn with<T>(&self, f: impl FnOnce(&Library) -> T) -> T {
        f(&*self.lock())
    }

    /// Run a mutating closure against the catalog
    pub fn with_mut<T>(&self, f: impl FnOnce(&mut Library) -> T) -> T {
        f(&mut *self.lock())
    }

    /// Take the catalog back out if this is the last handle.
    ///
    /// # Errors
    ///
    /// Returns the handle unchanged if other clones are still alive.
    pub fn try_into_inner(self) -> std::result::Result<Library, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(mutex) => Ok(mutex
                .into_inner()
                .unwrap_or_else(std::sync::PoisonError::into_inner)),
            Err(inner) => Err(Self { inner }),
        }
    }
}

impl From<Library> for SharedLibrary {
    fn from(library: Library) -> Self {
        Self::new(library)
    }
}
