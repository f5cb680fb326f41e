//! # Storage Layer
//!
//! Notes persist through a small key/value interface modelled on browser local
//! storage: a value is a string stored under a key, read and replaced whole.
//! The [`NoteStore`](crate::store::NoteStore) keeps its entire collection under
//! a single key and rewrites it on every mutation.
//!
//! ## Implementations
//!
//! - [`fs::FsStorage`]: production storage, one `<key>.json` file per key in a
//!   data directory, replaced atomically
//! - [`memory::MemStorage`]: in-memory storage for tests, with switches to
//!   simulate read and write failures
//!
//! Backends report failures through the crate error type; the store turns them
//! into persistence errors at its boundary.

use crate::error::{NotesError, Result};

pub mod fs;
pub mod memory;

/// Raw string storage, keyed by name.
///
/// Methods take `&self`: hosts are single-threaded and backends that need
/// mutation use interior mutability.
pub trait StorageBackend {
    /// Returns `Ok(None)` when nothing has been stored under `key`.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value under `key`. Must not leave a partial value behind.
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// Shared handle, so a caller can keep inspecting storage it gave to a store.
impl<T: StorageBackend + ?Sized> StorageBackend for std::rc::Rc<T> {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }
}

/// Storage keys double as file names, so keep them to a safe alphabet.
pub fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.');
    if valid {
        Ok(())
    } else {
        Err(NotesError::Store(format!(
            "Invalid storage key '{}' (use letters, digits, '-', '_' or '.')",
            key
        )))
    }
}
