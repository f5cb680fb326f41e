//! # Note Store
//!
//! [`NoteStore`] is the single owner of the note collection and the only writer
//! of persisted state. Hosts construct one explicitly, call [`NoteStore::load`]
//! once, and pass it to whatever needs notes.
//!
//! ## Persistence Contract
//!
//! The whole collection lives under one storage key as a JSON array (see
//! [`crate::schema`]). Every successful mutation re-serializes and rewrites the
//! entire collection; there are no partial or delta writes. A mutation is
//! applied in memory only after its write succeeded, so a failed write leaves
//! both memory and storage as they were.
//!
//! ## Ordering
//!
//! New notes are prepended. Updates keep a note where it is. Only `create`,
//! `delete` and `import_all` change the order.
//!
//! ## Failure Policy
//!
//! - `load` never fails: unreadable or corrupt storage is logged and replaced
//!   by an empty collection, reported as [`LoadStatus::Recovered`]
//! - `delete` of an unknown id is a no-op
//! - `update` of an unknown id is [`NotesError::NotFound`]
//! - blank titles are [`NotesError::Validation`]
//! - rejected imports are [`NotesError::Import`] and change nothing

use crate::clock::{Clock, SystemClock};
use crate::error::{NotesError, Result};
use crate::model::{NewNote, Note, NoteId, NotePatch};
use crate::schema;
use crate::storage::StorageBackend;

pub const DEFAULT_STORAGE_KEY: &str = "notes";

/// What `load` found in storage.
#[derive(Debug)]
pub enum LoadStatus {
    /// Nothing was stored yet.
    Fresh,
    /// The stored collection was read; holds the number of notes.
    Loaded(usize),
    /// Storage could not be read or parsed; the store started empty.
    Recovered(NotesError),
}

/// A serialized collection ready to be saved by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: String,
    pub contents: String,
}

pub struct NoteStore<B: StorageBackend, C: Clock = SystemClock> {
    backend: B,
    clock: C,
    key: String,
    notes: Vec<Note>,
}

impl<B: StorageBackend> NoteStore<B> {
    pub fn new(backend: B, key: impl Into<String>) -> Self {
        Self::with_clock(backend, key, SystemClock)
    }
}

impl<B: StorageBackend, C: Clock> NoteStore<B, C> {
    /// Creates an empty, unloaded store.
    pub fn with_clock(backend: B, key: impl Into<String>, clock: C) -> Self {
        Self {
            backend,
            clock,
            key: key.into(),
            notes: Vec::new(),
        }
    }

    /// Replaces the in-memory collection with what storage holds.
    pub fn load(&mut self) -> LoadStatus {
        match self.read_persisted() {
            Ok(None) => {
                self.notes.clear();
                log::debug!("no notes stored under '{}'", self.key);
                LoadStatus::Fresh
            }
            Ok(Some(notes)) => {
                log::debug!("loaded {} notes from '{}'", notes.len(), self.key);
                self.notes = notes;
                LoadStatus::Loaded(self.notes.len())
            }
            Err(err) => {
                log::error!("Error parsing notes from storage: {}", err);
                self.notes.clear();
                LoadStatus::Recovered(err)
            }
        }
    }

    /// Creates a note at the front of the collection.
    ///
    /// `None` (or a `NewNote` without title) yields an "Untitled Note". A title
    /// that is present but blank is rejected.
    pub fn create(&mut self, initial: Option<NewNote>) -> Result<Note> {
        let fields = initial.unwrap_or_default();
        if let Some(title) = &fields.title {
            check_title(title)?;
        }

        let now = self.clock.now();
        let note = Note::new(self.fresh_id(now), now, fields);

        let mut next = Vec::with_capacity(self.notes.len() + 1);
        next.push(note.clone());
        next.extend(self.notes.iter().cloned());
        self.commit(next)?;

        Ok(note)
    }

    /// Merges `patch` into the note and refreshes its `updated_at`.
    pub fn update(&mut self, id: &NoteId, patch: NotePatch) -> Result<Note> {
        let pos = self
            .position(id)
            .ok_or_else(|| NotesError::NotFound(id.clone()))?;
        if let Some(title) = &patch.title {
            check_title(title)?;
        }

        let now = self.clock.now();
        let mut next = self.notes.clone();
        let note = &mut next[pos];
        if let Some(title) = patch.title {
            note.title = title;
        }
        if let Some(content) = patch.content {
            note.content = content;
        }
        if let Some(tags) = patch.tags {
            note.tags = tags;
        }
        note.updated_at = now.max(note.created_at);

        let updated = note.clone();
        self.commit(next)?;
        Ok(updated)
    }

    /// Removes the note if present. Returns the removed note.
    pub fn delete(&mut self, id: &NoteId) -> Result<Option<Note>> {
        let Some(pos) = self.position(id) else {
            log::debug!("delete of unknown note {} ignored", id);
            return Ok(None);
        };

        let mut next = self.notes.clone();
        let removed = next.remove(pos);
        self.commit(next)?;
        Ok(Some(removed))
    }

    /// Serializes the full collection for download as
    /// `notes-export-<YYYY-MM-DD>.json`.
    pub fn export_all(&self) -> Result<ExportFile> {
        let contents = schema::encode_pretty(&self.notes)?;
        let filename = format!("notes-export-{}.json", self.clock.now().format("%Y-%m-%d"));
        Ok(ExportFile { filename, contents })
    }

    /// Replaces the whole collection with the notes in `blob`.
    ///
    /// Existing notes are discarded, not merged. Returns the number imported.
    pub fn import_all(&mut self, blob: &str) -> Result<usize> {
        let notes = schema::decode(blob).map_err(|err| {
            log::warn!("Error importing notes: {}", err);
            NotesError::Import(err)
        })?;
        let count = notes.len();
        self.commit(notes)?;
        log::debug!("imported {} notes", count);
        Ok(count)
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| &n.id == id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn position(&self, id: &NoteId) -> Option<usize> {
        self.notes.iter().position(|n| &n.id == id)
    }

    fn fresh_id(&self, now: chrono::DateTime<chrono::Utc>) -> NoteId {
        loop {
            let id = NoteId::generate(now);
            if self.position(&id).is_none() {
                return id;
            }
        }
    }

    fn read_persisted(&self) -> Result<Option<Vec<Note>>> {
        let raw = self
            .backend
            .read(&self.key)
            .map_err(|e| NotesError::PersistenceRead(e.to_string()))?;
        match raw {
            None => Ok(None),
            Some(text) => schema::decode(&text)
                .map(Some)
                .map_err(|e| NotesError::PersistenceRead(e.to_string())),
        }
    }

    fn commit(&mut self, next: Vec<Note>) -> Result<()> {
        let text =
            schema::encode(&next).map_err(|e| NotesError::PersistenceWrite(e.to_string()))?;
        self.backend
            .write(&self.key, &text)
            .map_err(|e| NotesError::PersistenceWrite(e.to_string()))?;
        log::debug!("saved {} notes under '{}'", next.len(), self.key);
        self.notes = next;
        Ok(())
    }
}

fn check_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        log::warn!("rejected note with an empty title");
        return Err(NotesError::empty_title());
    }
    Ok(())
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::clock::fixtures::ManualClock;
    use crate::storage::memory::MemStorage;
    use std::rc::Rc;

    pub type TestStore = NoteStore<Rc<MemStorage>, Rc<ManualClock>>;

    /// A loaded in-memory store with shared handles on its storage and clock.
    pub struct StoreFixture {
        pub storage: Rc<MemStorage>,
        pub clock: Rc<ManualClock>,
        pub store: TestStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            let storage = Rc::new(MemStorage::new());
            let clock = Rc::new(ManualClock::at_ten());
            let store = NoteStore::with_clock(
                Rc::clone(&storage),
                DEFAULT_STORAGE_KEY,
                Rc::clone(&clock),
            );
            Self {
                storage,
                clock,
                store,
            }
        }

        /// Creates one note per title, a minute apart, in the given order
        /// (so the last title ends up first).
        pub fn with_notes(mut self, titles: &[&str]) -> Self {
            for title in titles {
                let fields = NewNote::titled(*title).with_content(format!("Content of {}", title));
                self.store.create(Some(fields)).unwrap();
                self.clock.advance_minutes(1);
            }
            self
        }

        /// The collection as currently written to storage.
        pub fn persisted(&self) -> Vec<Note> {
            match self.storage.peek(DEFAULT_STORAGE_KEY) {
                Some(raw) => schema::decode(&raw).unwrap(),
                None => Vec::new(),
            }
        }

        pub fn id_of(&self, title: &str) -> NoteId {
            self.store
                .notes()
                .iter()
                .find(|n| n.title() == title)
                .map(|n| n.id().clone())
                .unwrap()
        }
    }
}
