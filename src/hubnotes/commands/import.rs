use crate::clock::Clock;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{NotesError, Result};
use crate::storage::StorageBackend;
use crate::store::NoteStore;
use std::fs;
use std::path::Path;

/// Replaces every stored note with the contents of an export file.
pub fn run<B: StorageBackend, C: Clock>(store: &mut NoteStore<B, C>, path: &Path) -> Result<CmdResult> {
    let blob = fs::read_to_string(path).map_err(NotesError::Io)?;
    let replaced = store.len();
    let count = store.import_all(&blob)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Notes imported successfully"));
    result.add_message(CmdMessage::info(format!(
        "{} notes imported from {}",
        count,
        path.display()
    )));
    if replaced > 0 {
        result.add_message(CmdMessage::warning(format!(
            "{} previously stored notes were replaced",
            replaced
        )));
    }
    Ok(result.with_affected_notes(store.notes().to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::StoreFixture;
    use tempfile::TempDir;

    #[test]
    fn imports_an_exported_file() {
        let source = StoreFixture::new().with_notes(&["A", "B"]);
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.json");
        fs::write(&path, source.store.export_all().unwrap().contents).unwrap();

        let mut target = StoreFixture::new().with_notes(&["Old"]);
        let result = run(&mut target.store, &path).unwrap();

        assert_eq!(target.store.notes(), source.store.notes());
        assert_eq!(result.affected_notes.len(), 2);
        assert!(result
            .messages
            .iter()
            .any(|m| m.content.contains("1 previously stored notes were replaced")));
    }

    #[test]
    fn invalid_file_is_an_import_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"[{"title":"no id"}]"#).unwrap();

        let mut fx = StoreFixture::new().with_notes(&["Keep"]);
        let err = run(&mut fx.store, &path).unwrap_err();

        assert!(matches!(err, NotesError::Import(_)));
        assert!(err.to_string().starts_with("Failed to import notes."));
        assert_eq!(fx.store.notes()[0].title(), "Keep");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let mut fx = StoreFixture::new();
        let err = run(&mut fx.store, &dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, NotesError::Io(_)));
    }
}
