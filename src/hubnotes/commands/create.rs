use crate::clock::Clock;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{NotesError, Result};
use crate::model::{NewNote, UNTITLED};
use crate::session::{Decision, EditSession};
use crate::storage::StorageBackend;
use crate::store::NoteStore;

/// Creates a note by drafting it in a fresh session and saving.
pub fn run<B: StorageBackend, C: Clock>(store: &mut NoteStore<B, C>, fields: NewNote) -> Result<CmdResult> {
    let mut session = EditSession::new();
    session.start_new(|_| Decision::Discard);

    let draft = session
        .draft_mut()
        .ok_or_else(|| NotesError::Api("Could not start a new note".to_string()))?;
    draft.title = fields.title.unwrap_or_else(|| UNTITLED.to_string());
    draft.content = fields.content;
    draft.tags = fields.tags;

    let note = session.save(store)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Note saved successfully: {}",
        note.title()
    )));
    Ok(result.with_affected_notes(vec![note]))
}
