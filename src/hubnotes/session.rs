//! # Edit Session
//!
//! [`EditSession`] sits between the note a host displays and the edit in
//! progress on it. It is a plain state machine:
//!
//! ```text
//!              start_new                    edit
//! NoSelection ───────────▶ Editing(New)   Viewing(id) ───────▶ Editing(id)
//!      ▲                      │                ▲                   │
//!      │        cancel        │                │   save / cancel   │
//!      └──────────────────────┘                └───────────────────┘
//!                  Editing(New) ──save──▶ Viewing(new id)
//! ```
//!
//! Drafts are never visible to the store until `save`. Leaving an `Editing`
//! state whose draft differs from the last committed values (a "dirty" draft)
//! by selecting another note, deselecting, or starting a new note asks the
//! host for a [`Decision`] through a callback. `Keep` cancels the transition
//! and leaves the draft exactly as it was.

use crate::clock::Clock;
use crate::error::{NotesError, Result};
use crate::model::{NewNote, Note, NoteId, NotePatch, UNTITLED};
use crate::storage::StorageBackend;
use crate::store::NoteStore;
use crate::tags::TagSet;

/// Working copies of a note's editable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub title: String,
    pub content: String,
    pub tags: TagSet,
}

impl EditDraft {
    /// The values of a fresh, unsaved note.
    pub fn blank() -> Self {
        Self {
            title: UNTITLED.to_string(),
            content: String::new(),
            tags: TagSet::new(),
        }
    }

    pub fn from_note(note: &Note) -> Self {
        Self {
            title: note.title().to_string(),
            content: note.content().to_string(),
            tags: note.tags().clone(),
        }
    }
}

/// What a draft will be committed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftTarget {
    New,
    Existing(NoteId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Editing {
    target: DraftTarget,
    draft: EditDraft,
    committed: EditDraft,
}

impl Editing {
    pub fn target(&self) -> &DraftTarget {
        &self.target
    }

    pub fn draft(&self) -> &EditDraft {
        &self.draft
    }

    /// Field-by-field comparison against the last committed values; tag order
    /// counts.
    pub fn is_dirty(&self) -> bool {
        self.draft != self.committed
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    NoSelection,
    Viewing(NoteId),
    Editing(Editing),
}

/// The host's answer when a dirty draft is about to be thrown away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Discard,
    Keep,
}

/// Whether a guarded transition happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Done,
    Declined,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    state: SessionState,
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditSession {
    pub fn new() -> Self {
        Self {
            state: SessionState::NoSelection,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The note being viewed or edited, if it exists in the store yet.
    pub fn selected_id(&self) -> Option<&NoteId> {
        match &self.state {
            SessionState::Viewing(id) => Some(id),
            SessionState::Editing(Editing {
                target: DraftTarget::Existing(id),
                ..
            }) => Some(id),
            _ => None,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, SessionState::Editing(_))
    }

    pub fn is_dirty(&self) -> bool {
        match &self.state {
            SessionState::Editing(editing) => editing.is_dirty(),
            _ => false,
        }
    }

    pub fn draft(&self) -> Option<&EditDraft> {
        match &self.state {
            SessionState::Editing(editing) => Some(&editing.draft),
            _ => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut EditDraft> {
        match &mut self.state {
            SessionState::Editing(editing) => Some(&mut editing.draft),
            _ => None,
        }
    }

    /// Shows `id`. Clean state switches directly; a dirty draft asks `confirm`.
    pub fn select<B, C, F>(&mut self, store: &NoteStore<B, C>, id: &NoteId, confirm: F) -> Result<Transition>
    where
        B: StorageBackend,
        C: Clock,
        F: FnOnce(&EditDraft) -> Decision,
    {
        if store.get(id).is_none() {
            return Err(NotesError::NotFound(id.clone()));
        }
        Ok(self.leave(SessionState::Viewing(id.clone()), confirm))
    }

    /// Clears the selection, with the same guard as `select`.
    pub fn deselect<F>(&mut self, confirm: F) -> Transition
    where
        F: FnOnce(&EditDraft) -> Decision,
    {
        self.leave(SessionState::NoSelection, confirm)
    }

    /// Begins a draft for a note that does not exist yet.
    pub fn start_new<F>(&mut self, confirm: F) -> Transition
    where
        F: FnOnce(&EditDraft) -> Decision,
    {
        self.leave(
            SessionState::Editing(Editing {
                target: DraftTarget::New,
                draft: EditDraft::blank(),
                committed: EditDraft::blank(),
            }),
            confirm,
        )
    }

    /// `Viewing(id)` → `Editing(id)` with a draft seeded from the stored note.
    pub fn edit<B: StorageBackend, C: Clock>(&mut self, store: &NoteStore<B, C>) -> Result<()> {
        let id = match &self.state {
            SessionState::Viewing(id) => id.clone(),
            SessionState::Editing(_) => return Ok(()),
            SessionState::NoSelection => {
                return Err(NotesError::Api("No note selected".to_string()));
            }
        };
        let Some(note) = store.get(&id) else {
            self.state = SessionState::NoSelection;
            return Err(NotesError::NotFound(id));
        };

        let committed = EditDraft::from_note(note);
        self.state = SessionState::Editing(Editing {
            target: DraftTarget::Existing(id),
            draft: committed.clone(),
            committed,
        });
        Ok(())
    }

    /// Commits the draft and returns to `Viewing` the saved note.
    ///
    /// On any error the session stays in `Editing` with the draft untouched.
    pub fn save<B: StorageBackend, C: Clock>(&mut self, store: &mut NoteStore<B, C>) -> Result<Note> {
        let SessionState::Editing(editing) = &self.state else {
            return Err(NotesError::Api("Nothing is being edited".to_string()));
        };
        if editing.draft.title.trim().is_empty() {
            log::warn!("save refused: empty title");
            return Err(NotesError::empty_title());
        }

        let draft = editing.draft.clone();
        let saved = match &editing.target {
            DraftTarget::New => store.create(Some(
                NewNote::titled(draft.title)
                    .with_content(draft.content)
                    .with_tags(draft.tags),
            ))?,
            DraftTarget::Existing(id) => store.update(
                id,
                NotePatch {
                    title: Some(draft.title),
                    content: Some(draft.content),
                    tags: Some(draft.tags),
                },
            )?,
        };

        self.state = SessionState::Viewing(saved.id().clone());
        Ok(saved)
    }

    /// Drops the draft. Editing an existing note returns to viewing it; an
    /// unsaved new note leaves nothing selected. Returns `false` when not
    /// editing.
    pub fn cancel(&mut self) -> bool {
        let SessionState::Editing(editing) = &self.state else {
            return false;
        };
        self.state = match &editing.target {
            DraftTarget::Existing(id) => SessionState::Viewing(id.clone()),
            DraftTarget::New => SessionState::NoSelection,
        };
        true
    }

    /// Reacts to `id` having been deleted from the store.
    pub fn note_deleted(&mut self, id: &NoteId) {
        if self.selected_id() == Some(id) {
            self.state = SessionState::NoSelection;
        }
    }

    /// Drops a selection whose note no longer exists (after an import).
    pub fn reconcile<B: StorageBackend, C: Clock>(&mut self, store: &NoteStore<B, C>) {
        if let Some(id) = self.selected_id() {
            if store.get(id).is_none() {
                log::debug!("selected note {} disappeared; clearing selection", id);
                self.state = SessionState::NoSelection;
            }
        }
    }

    fn leave<F>(&mut self, next: SessionState, confirm: F) -> Transition
    where
        F: FnOnce(&EditDraft) -> Decision,
    {
        if let SessionState::Editing(editing) = &self.state {
            if editing.is_dirty() && confirm(&editing.draft) == Decision::Keep {
                return Transition::Declined;
            }
        }
        self.state = next;
        Transition::Done
    }
}
