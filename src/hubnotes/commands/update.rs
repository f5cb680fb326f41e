use crate::clock::Clock;
use crate::commands::{CmdMessage, CmdResult, NoteEdit};
use crate::error::{NotesError, Result};
use crate::index::resolve_id;
use crate::session::{Decision, EditSession};
use crate::storage::StorageBackend;
use crate::store::NoteStore;

/// Applies `edit` to the referenced note through an edit session.
///
/// Tag removals run before additions. When the resulting draft equals the
/// stored note nothing is written.
pub fn run<B: StorageBackend, C: Clock>(
    store: &mut NoteStore<B, C>,
    reference: &str,
    edit: NoteEdit,
) -> Result<CmdResult> {
    let id = resolve_id(store.notes(), reference)?;

    let mut session = EditSession::new();
    session.select(store, &id, |_| Decision::Discard)?;
    session.edit(store)?;

    let draft = session
        .draft_mut()
        .ok_or_else(|| NotesError::Api(format!("Could not edit note {}", id)))?;
    if let Some(title) = edit.title {
        draft.title = title;
    }
    if let Some(content) = edit.content {
        draft.content = content;
    }
    for tag in &edit.remove_tags {
        draft.tags.remove(tag);
    }
    for tag in &edit.add_tags {
        draft.tags.add(tag);
    }

    let mut result = CmdResult::default();
    if !session.is_dirty() {
        session.cancel();
        result.add_message(CmdMessage::info("No changes to save"));
        return Ok(result);
    }

    let note = session.save(store)?;
    result.add_message(CmdMessage::success(format!(
        "Note saved successfully: {}",
        note.title()
    )));
    Ok(result.with_affected_notes(vec![note]))
}
