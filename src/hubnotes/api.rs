//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for hosts (the CLI today, anything else tomorrow).
//!
//! The facade:
//! - **Owns** the [`NoteStore`] it was given, so hosts hold one value
//! - **Dispatches** to the matching `commands::*::run`
//! - **Returns** structured [`CmdResult`]s, never strings or exit codes
//!
//! Business rules live in the store, the edit session and the commands; the
//! tests here only check dispatch.

use crate::clock::{Clock, SystemClock};
use crate::commands;
use crate::error::Result;
use crate::model::NewNote;
use crate::storage::StorageBackend;
use crate::store::{LoadStatus, NoteStore};
use std::path::{Path, PathBuf};

pub struct NotesApi<B: StorageBackend, C: Clock = SystemClock> {
    store: NoteStore<B, C>,
    data_dir: PathBuf,
}

impl<B: StorageBackend, C: Clock> NotesApi<B, C> {
    pub fn new(store: NoteStore<B, C>, data_dir: PathBuf) -> Self {
        Self { store, data_dir }
    }

    /// Loads the store. Never fails; recovery is reported as an error message.
    pub fn load(&mut self) -> CmdResult {
        let mut result = CmdResult::default();
        if let LoadStatus::Recovered(err) = self.store.load() {
            result.add_message(CmdMessage::error(format!(
                "Stored notes could not be read, starting with an empty list ({})",
                err
            )));
            result.add_message(CmdMessage::warning(
                "The next change will overwrite the unreadable notes; export or back them up first",
            ));
        }
        result
    }

    pub fn list_notes(&self, query: &str) -> Result<CmdResult> {
        commands::list::run(&self.store, query)
    }

    pub fn view_note(&self, reference: &str) -> Result<CmdResult> {
        commands::view::run(&self.store, reference)
    }

    pub fn create_note(&mut self, fields: NewNote) -> Result<CmdResult> {
        commands::create::run(&mut self.store, fields)
    }

    pub fn edit_note(&mut self, reference: &str, edit: NoteEdit) -> Result<CmdResult> {
        commands::update::run(&mut self.store, reference, edit)
    }

    pub fn delete_note(&mut self, reference: &str) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, reference)
    }

    pub fn export_notes(&self, dir: &Path) -> Result<CmdResult> {
        commands::export::run(&self.store, dir)
    }

    pub fn import_notes(&mut self, path: &Path) -> Result<CmdResult> {
        commands::import::run(&mut self.store, path)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.data_dir, action)
    }

    pub fn store(&self) -> &NoteStore<B, C> {
        &self.store
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, NoteEdit};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemStorage;
    use crate::store::DEFAULT_STORAGE_KEY;
    use tempfile::TempDir;

    fn setup(storage: MemStorage) -> (TempDir, NotesApi<MemStorage>) {
        let dir = TempDir::new().unwrap();
        let store = NoteStore::new(storage, DEFAULT_STORAGE_KEY);
        let api = NotesApi::new(store, dir.path().to_path_buf());
        (dir, api)
    }

    #[test]
    fn load_of_corrupt_storage_reports_and_starts_empty() {
        let (_dir, mut api) = setup(MemStorage::with_value(DEFAULT_STORAGE_KEY, "oops"));
        let result = api.load();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(result.messages[0].content.contains("could not be read"));
        assert_eq!(result.messages[1].level, MessageLevel::Warning);
        assert!(result.messages[1].content.contains("next change will overwrite"));
        assert!(api.store().is_empty());
    }

    #[test]
    fn load_of_blank_titled_storage_warns_before_overwriting() {
        let legacy = r#"[{"id":"a","title":"","content":"kept?","tags":[],"createdAt":"2024-03-01T10:00:00.000Z","updatedAt":"2024-03-01T10:00:00.000Z"}]"#;
        let (_dir, mut api) = setup(MemStorage::with_value(DEFAULT_STORAGE_KEY, legacy));
        let result = api.load();
        assert!(result
            .messages
            .iter()
            .any(|m| m.content.contains("next change will overwrite")));
        assert!(api.store().is_empty());
    }

    #[test]
    fn load_of_fresh_storage_is_silent() {
        let (_dir, mut api) = setup(MemStorage::new());
        assert!(api.load().messages.is_empty());
    }

    #[test]
    fn dispatches_crud() {
        let (_dir, mut api) = setup(MemStorage::new());
        api.load();

        api.create_note(NewNote::titled("One")).unwrap();
        assert_eq!(api.list_notes("").unwrap().listed_notes.len(), 1);
        assert_eq!(api.view_note("1").unwrap().listed_notes[0].note.title(), "One");

        let edit = NoteEdit {
            content: Some("body".into()),
            ..NoteEdit::default()
        };
        api.edit_note("1", edit).unwrap();
        assert_eq!(api.store().notes()[0].content(), "body");

        api.delete_note("1").unwrap();
        assert!(api.store().is_empty());
    }

    #[test]
    fn dispatches_export_and_import() {
        let (dir, mut api) = setup(MemStorage::new());
        api.create_note(NewNote::titled("One")).unwrap();

        let exported = api.export_notes(dir.path()).unwrap();
        let path = exported.export_path.unwrap();
        api.create_note(NewNote::titled("Two")).unwrap();

        api.import_notes(&path).unwrap();
        assert_eq!(api.store().len(), 1);
        assert_eq!(api.store().notes()[0].title(), "One");
    }

    #[test]
    fn dispatches_config() {
        let (_dir, api) = setup(MemStorage::new());
        let result = api.config(ConfigAction::ShowAll).unwrap();
        assert!(result.config.is_some());
    }
}
