use chrono::{DateTime, Duration, TimeZone, Utc};
use hubnotes::clock::Clock;
use hubnotes::error::NotesError;
use hubnotes::model::{NewNote, NotePatch};
use hubnotes::storage::fs::FsStorage;
use hubnotes::storage::StorageBackend;
use hubnotes::store::{LoadStatus, NoteStore, DEFAULT_STORAGE_KEY};
use hubnotes::tags::TagSet;
use std::cell::Cell;
use std::fs;
use tempfile::TempDir;

/// Advances one minute every time it is read.
struct StepClock(Cell<DateTime<Utc>>);

impl StepClock {
    fn new() -> Self {
        Self(Cell::new(Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()))
    }
}

impl Clock for StepClock {
    fn now(&self) -> DateTime<Utc> {
        let now = self.0.get();
        self.0.set(now + Duration::minutes(1));
        now
    }
}

fn open(dir: &TempDir) -> NoteStore<FsStorage, StepClock> {
    let mut store =
        NoteStore::with_clock(FsStorage::new(dir.path()), DEFAULT_STORAGE_KEY, StepClock::new());
    store.load();
    store
}

#[test]
fn notes_survive_a_reopen() {
    let dir = TempDir::new().unwrap();
    let mut store = open(&dir);

    let groceries = store
        .create(Some(
            NewNote::titled("Groceries")
                .with_content("eggs, milk")
                .with_tags(TagSet::from_loose(["home"])),
        ))
        .unwrap();
    store.create(Some(NewNote::titled("Ideas"))).unwrap();
    store
        .update(groceries.id(), NotePatch::content("eggs, milk, bread"))
        .unwrap();

    let mut reopened =
        NoteStore::with_clock(FsStorage::new(dir.path()), DEFAULT_STORAGE_KEY, StepClock::new());
    assert!(matches!(reopened.load(), LoadStatus::Loaded(2)));
    assert_eq!(reopened.notes(), store.notes());
    assert_eq!(reopened.notes()[0].title(), "Ideas");
    assert_eq!(reopened.notes()[1].content(), "eggs, milk, bread");
    assert!(reopened.notes()[1].tags().contains("home"));
}

#[test]
fn persisted_file_is_a_camel_case_json_array() {
    let dir = TempDir::new().unwrap();
    let mut store = open(&dir);
    store.create(Some(NewNote::titled("Only"))).unwrap();

    let raw = fs::read_to_string(dir.path().join("notes.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let entry = &value.as_array().unwrap()[0];

    assert_eq!(entry["title"], "Only");
    assert_eq!(entry["createdAt"], "2024-05-01T09:00:00.000Z");
    assert_eq!(entry["updatedAt"], "2024-05-01T09:00:00.000Z");
    assert!(entry["tags"].as_array().unwrap().is_empty());
}

#[test]
fn corrupt_file_recovers_to_an_empty_store() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("notes.json"), "{ not json").unwrap();

    let mut store =
        NoteStore::with_clock(FsStorage::new(dir.path()), DEFAULT_STORAGE_KEY, StepClock::new());
    assert!(matches!(store.load(), LoadStatus::Recovered(_)));
    assert!(store.is_empty());

    // The next write replaces the unreadable file.
    store.create(None).unwrap();
    let reopened = open(&dir);
    assert_eq!(reopened.len(), 1);
    assert_eq!(reopened.notes()[0].title(), "Untitled Note");
}

#[test]
fn export_then_import_into_another_location() {
    let source_dir = TempDir::new().unwrap();
    let mut source = open(&source_dir);
    source.create(Some(NewNote::titled("A"))).unwrap();
    source.create(Some(NewNote::titled("B"))).unwrap();
    let export = source.export_all().unwrap();
    assert!(export.filename.starts_with("notes-export-"));
    assert!(export.filename.ends_with(".json"));

    let target_dir = TempDir::new().unwrap();
    let mut target = open(&target_dir);
    target.create(Some(NewNote::titled("Overwritten"))).unwrap();

    assert_eq!(target.import_all(&export.contents).unwrap(), 2);
    assert_eq!(target.notes(), source.notes());
    assert_eq!(open(&target_dir).notes(), source.notes());
}

#[test]
fn rejected_import_leaves_disk_untouched() {
    let dir = TempDir::new().unwrap();
    let mut store = open(&dir);
    store.create(Some(NewNote::titled("Keep"))).unwrap();
    let before = FsStorage::new(dir.path()).read(DEFAULT_STORAGE_KEY).unwrap();

    let err = store.import_all(r#"{"notes": []}"#).unwrap_err();

    assert!(matches!(err, NotesError::Import(_)));
    assert_eq!(
        FsStorage::new(dir.path()).read(DEFAULT_STORAGE_KEY).unwrap(),
        before
    );
    assert_eq!(store.notes()[0].title(), "Keep");
}
