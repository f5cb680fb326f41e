use crate::schema::timestamp;
use crate::tags::TagSet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::{NoContext, Timestamp, Uuid};

/// Title given to notes created without one.
pub const UNTITLED: &str = "Untitled Note";

/// Opaque note identifier.
///
/// New ids are time-ordered UUIDs derived from the creation timestamp. Ids read
/// from storage or imports are kept verbatim, whatever their shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn generate(created_at: DateTime<Utc>) -> Self {
        let secs = created_at.timestamp().max(0) as u64;
        let ts = Timestamp::from_unix(NoContext, secs, created_at.timestamp_subsec_nanos());
        Self(Uuid::new_v7(ts).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NoteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NoteId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A note as held by the store and as persisted.
///
/// Fields are read-only outside the crate: the store is the only writer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub(crate) id: NoteId,
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) tags: TagSet,
    #[serde(with = "timestamp")]
    pub(crate) created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub(crate) updated_at: DateTime<Utc>,
}

impl Note {
    pub(crate) fn new(id: NoteId, now: DateTime<Utc>, fields: NewNote) -> Self {
        Self {
            id,
            title: fields.title.unwrap_or_else(|| UNTITLED.to_string()),
            content: fields.content,
            tags: fields.tags,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> &NoteId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

/// Initial values for a note being created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewNote {
    /// `None` falls back to [`UNTITLED`].
    pub title: Option<String>,
    pub content: String,
    pub tags: TagSet,
}

impl NewNote {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_tags(mut self, tags: TagSet) -> Self {
        self.tags = tags;
        self
    }
}

/// Fields to change on an existing note. `None` leaves a field as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<TagSet>,
}

impl NotePatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn generated_ids_differ_for_the_same_instant() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();
        assert_ne!(NoteId::generate(now), NoteId::generate(now));
    }

    #[test]
    fn generated_ids_sort_by_creation_time() {
        let early = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 1).unwrap();
        assert!(NoteId::generate(early) < NoteId::generate(late));
    }

    #[test]
    fn new_note_without_title_is_untitled() {
        let now = Utc::now();
        let note = Note::new(NoteId::new("1"), now, NewNote::default());
        assert_eq!(note.title(), UNTITLED);
        assert_eq!(note.created_at(), note.updated_at());
    }
}
