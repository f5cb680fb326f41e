use crate::clock::Clock;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::index_notes;
use crate::search::{self, empty_state};
use crate::storage::StorageBackend;
use crate::store::NoteStore;

pub fn run<B: StorageBackend, C: Clock>(store: &NoteStore<B, C>, query: &str) -> Result<CmdResult> {
    let listed: Vec<_> = index_notes(store.notes())
        .into_iter()
        .filter(|dn| search::matches(&dn.note, query))
        .collect();

    let mut result = CmdResult::default();
    if let Some(state) = empty_state(store.len(), listed.len()) {
        result.add_message(CmdMessage::info(state.message()));
    }
    Ok(result.with_listed_notes(listed))
}
