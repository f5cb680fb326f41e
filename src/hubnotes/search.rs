//! Free-text filtering of the note list.
//!
//! A query matches a note when it is a case-insensitive substring of the
//! title, the content, or any tag. Blank queries match everything. Filtering
//! keeps store order and never mutates, so hosts simply recompute the visible
//! list whenever the query or the store changes.

use crate::model::Note;

/// Why a visible list came out empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// The store holds no notes at all.
    NoNotes,
    /// Notes exist but the query excluded all of them.
    NoMatches,
}

impl EmptyState {
    pub fn message(self) -> &'static str {
        match self {
            EmptyState::NoNotes => "No notes yet. Create your first note!",
            EmptyState::NoMatches => "No notes match your search.",
        }
    }
}

pub fn matches(note: &Note, query: &str) -> bool {
    if query.trim().is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    note.title().to_lowercase().contains(&needle)
        || note.content().to_lowercase().contains(&needle)
        || note
            .tags()
            .iter()
            .any(|tag| tag.to_lowercase().contains(&needle))
}

/// Notes matching `query`, in input order.
pub fn filter<'a, I>(notes: I, query: &str) -> Vec<&'a Note>
where
    I: IntoIterator<Item = &'a Note>,
{
    notes.into_iter().filter(|n| matches(n, query)).collect()
}

/// Classifies an empty result; `None` when something is visible.
pub fn empty_state(total: usize, visible: usize) -> Option<EmptyState> {
    match (total, visible) {
        (0, _) => Some(EmptyState::NoNotes),
        (_, 0) => Some(EmptyState::NoMatches),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NewNote, NotePatch};
    use crate::store::fixtures::StoreFixture;
    use crate::tags::TagSet;

    fn titles(notes: &[&Note]) -> Vec<String> {
        notes.iter().map(|n| n.title().to_string()).collect()
    }

    fn fixture() -> StoreFixture {
        let mut fx = StoreFixture::new().with_notes(&["Groceries", "Meeting notes", "Ideas"]);
        let ideas = fx.id_of("Ideas");
        fx.store
            .update(
                &ideas,
                NotePatch {
                    tags: Some(TagSet::from_loose(["Work", "someday"])),
                    ..NotePatch::default()
                },
            )
            .unwrap();
        fx
    }

    #[test]
    fn blank_query_returns_everything_in_store_order() {
        let fx = fixture();
        let all = filter(fx.store.notes(), "");
        assert_eq!(titles(&all), vec!["Ideas", "Meeting notes", "Groceries"]);
        assert_eq!(filter(fx.store.notes(), "   ").len(), 3);
    }

    #[test]
    fn matches_title_content_and_tags_case_insensitively() {
        let fx = fixture();
        assert_eq!(titles(&filter(fx.store.notes(), "GROC")), vec!["Groceries"]);
        assert_eq!(
            titles(&filter(fx.store.notes(), "content of meeting")),
            vec!["Meeting notes"]
        );
        assert_eq!(titles(&filter(fx.store.notes(), "work")), vec!["Ideas"]);
        assert_eq!(titles(&filter(fx.store.notes(), "DAY")), vec!["Ideas"]);
    }

    #[test]
    fn keeps_store_order_for_multiple_matches() {
        let fx = fixture();
        let hits = filter(fx.store.notes(), "content");
        assert_eq!(titles(&hits), vec!["Ideas", "Meeting notes", "Groceries"]);
    }

    #[test]
    fn filtering_twice_changes_nothing() {
        let fx = fixture();
        for query in ["", "notes", "o", "zzz", "WORK"] {
            let once = filter(fx.store.notes(), query);
            let twice = filter(once.iter().copied(), query);
            assert_eq!(once, twice, "query {:?}", query);
        }
    }

    #[test]
    fn empty_state_distinguishes_no_notes_from_no_matches() {
        let mut fx = StoreFixture::new();
        assert_eq!(empty_state(fx.store.len(), 0), Some(EmptyState::NoNotes));

        fx.store.create(Some(NewNote::titled("One"))).unwrap();
        let visible = filter(fx.store.notes(), "zzz").len();
        assert_eq!(
            empty_state(fx.store.len(), visible),
            Some(EmptyState::NoMatches)
        );
        assert_eq!(empty_state(1, 1), None);
    }
}
