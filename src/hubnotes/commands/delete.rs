use crate::clock::Clock;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::resolve_id;
use crate::storage::StorageBackend;
use crate::store::NoteStore;

pub fn run<B: StorageBackend, C: Clock>(store: &mut NoteStore<B, C>, reference: &str) -> Result<CmdResult> {
    let id = resolve_id(store.notes(), reference)?;
    let mut result = CmdResult::default();

    if let Some(note) = store.delete(&id)? {
        result.add_message(CmdMessage::success(format!("Note deleted: {}", note.title())));
        result.affected_notes.push(note);
    }

    Ok(result)
}
