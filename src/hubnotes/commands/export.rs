use crate::clock::Clock;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{NotesError, Result};
use crate::storage::StorageBackend;
use crate::store::NoteStore;
use std::fs;
use std::path::Path;

/// Writes the full collection to `<dir>/notes-export-<date>.json`.
pub fn run<B: StorageBackend, C: Clock>(store: &NoteStore<B, C>, dir: &Path) -> Result<CmdResult> {
    let file = store.export_all()?;

    if !dir.exists() {
        fs::create_dir_all(dir).map_err(NotesError::Io)?;
    }
    let path = dir.join(&file.filename);
    fs::write(&path, file.contents).map_err(NotesError::Io)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Notes exported successfully"));
    result.add_message(CmdMessage::info(format!(
        "{} notes written to {}",
        store.len(),
        path.display()
    )));
    Ok(result.with_export_path(path))
}
