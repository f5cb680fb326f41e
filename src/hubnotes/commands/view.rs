use crate::clock::Clock;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::{resolve, DisplayNote};
use crate::storage::StorageBackend;
use crate::store::NoteStore;

pub fn run<B: StorageBackend, C: Clock>(store: &NoteStore<B, C>, reference: &str) -> Result<CmdResult> {
    let note = resolve(store.notes(), reference)?;
    let index = store
        .notes()
        .iter()
        .position(|n| n.id() == note.id())
        .map_or(0, |i| i + 1);
    Ok(CmdResult::default().with_listed_notes(vec![DisplayNote {
        index,
        note: note.clone(),
    }]))
}
