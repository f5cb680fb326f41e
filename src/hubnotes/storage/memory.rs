use super::StorageBackend;
use crate::error::{NotesError, Result};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// In-memory storage for tests. Does NOT persist data.
///
/// Uses `RefCell` so the `&self` trait methods can mutate; hosts are
/// single-threaded.
#[derive(Default)]
pub struct MemStorage {
    values: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
    fail_reads: Cell<bool>,
    fail_writes: Cell<bool>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that already holds `value` under `key`.
    pub fn with_value(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Raw stored value, bypassing failure simulation.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl StorageBackend for MemStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        if self.fail_reads.get() {
            return Err(NotesError::Store("simulated read failure".to_string()));
        }
        Ok(self.values.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes.get() {
            return Err(NotesError::Store("simulated write failure".to_string()));
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_values() {
        let storage = MemStorage::new();
        storage.write("k", "v").unwrap();
        assert_eq!(storage.read("k").unwrap().as_deref(), Some("v"));
        assert_eq!(storage.write_count(), 1);
    }

    #[test]
    fn simulated_failures_leave_values_alone() {
        let storage = MemStorage::with_value("k", "old");
        storage.set_fail_writes(true);
        assert!(storage.write("k", "new").is_err());
        assert_eq!(storage.peek("k").as_deref(), Some("old"));

        storage.set_fail_reads(true);
        assert!(storage.read("k").is_err());
    }
}
