//! # Note References
//!
//! Ids are long and opaque, so hosts also let users point at notes by their
//! position in the list. A [`DisplayNote`] pairs a note with its 1-based
//! position in store order; that number stays the same whether or not a
//! search is narrowing the list, so `3` always means the third note.
//!
//! A reference string resolves by exact id first and only then as a position.
//! Ids written by older versions of the web app are plain digit strings, and
//! those must never be shadowed by an index of the same spelling.

use crate::error::{NotesError, Result};
use crate::model::{Note, NoteId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayNote {
    pub index: usize,
    pub note: Note,
}

/// Pairs each note with its 1-based position.
pub fn index_notes(notes: &[Note]) -> Vec<DisplayNote> {
    notes
        .iter()
        .enumerate()
        .map(|(i, note)| DisplayNote {
            index: i + 1,
            note: note.clone(),
        })
        .collect()
}

/// Finds the note a user-typed reference points at.
pub fn resolve<'a>(notes: &'a [Note], reference: &str) -> Result<&'a Note> {
    let reference = reference.trim();
    if let Some(note) = notes.iter().find(|n| n.id().as_str() == reference) {
        return Ok(note);
    }
    match reference.parse::<usize>() {
        Ok(n) if n >= 1 && n <= notes.len() => Ok(&notes[n - 1]),
        _ => Err(NotesError::Api(format!("No note matches '{}'", reference))),
    }
}

pub fn resolve_id(notes: &[Note], reference: &str) -> Result<NoteId> {
    resolve(notes, reference).map(|n| n.id().clone())
}
