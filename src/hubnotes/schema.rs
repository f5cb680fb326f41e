//! # Persisted Note Format
//!
//! Stored notes, exports and imports all share one JSON shape: an array of
//!
//! ```text
//! {
//!   "id": "0190f3c2-...",
//!   "title": "Groceries",
//!   "content": "eggs, milk",
//!   "tags": ["home"],
//!   "createdAt": "2024-03-01T10:00:00.000Z",
//!   "updatedAt": "2024-03-01T10:05:00.000Z"
//! }
//! ```
//!
//! Decoding is all-or-nothing. The payload is first checked structurally (an
//! array whose entries all carry every field with the right type), then
//! semantically (unique non-empty ids, non-blank titles, valid tag lists and
//! `createdAt <= updatedAt`). The first violation rejects the whole payload.
//! Unknown extra fields are ignored.

use crate::model::Note;
use crate::tags::{TagListError, TagSet};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("not valid JSON: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("expected a JSON array of notes")]
    NotAnArray,

    #[error("entry {index}: {source}")]
    InvalidEntry {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("entry {0}: id is empty")]
    EmptyId(usize),

    #[error("entry {index}: duplicate id '{id}'")]
    DuplicateId { index: usize, id: String },

    #[error("entry {0}: title is empty")]
    EmptyTitle(usize),

    #[error("entry {index}: {source}")]
    InvalidTags {
        index: usize,
        #[source]
        source: TagListError,
    },

    #[error("entry {0}: updatedAt is earlier than createdAt")]
    TimestampOrder(usize),
}

/// Compact form, as written to storage.
pub fn encode(notes: &[Note]) -> serde_json::Result<String> {
    serde_json::to_string(notes)
}

/// Indented form, as written to export files.
pub fn encode_pretty(notes: &[Note]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(notes)
}

pub fn decode(text: &str) -> Result<Vec<Note>, SchemaError> {
    let value: serde_json::Value = serde_json::from_str(text).map_err(SchemaError::Malformed)?;
    let entries = match value {
        serde_json::Value::Array(entries) => entries,
        _ => return Err(SchemaError::NotAnArray),
    };

    let mut notes = Vec::with_capacity(entries.len());
    let mut seen = HashSet::with_capacity(entries.len());

    for (index, entry) in entries.into_iter().enumerate() {
        let note: Note = serde_json::from_value(entry)
            .map_err(|source| SchemaError::InvalidEntry { index, source })?;

        if note.id.as_str().is_empty() {
            return Err(SchemaError::EmptyId(index));
        }
        if !seen.insert(note.id.clone()) {
            return Err(SchemaError::DuplicateId {
                index,
                id: note.id.to_string(),
            });
        }
        if note.title.trim().is_empty() {
            return Err(SchemaError::EmptyTitle(index));
        }
        TagSet::from_strict(note.tags.as_slice().to_vec())
            .map_err(|source| SchemaError::InvalidTags { index, source })?;
        if note.updated_at < note.created_at {
            return Err(SchemaError::TimestampOrder(index));
        }

        notes.push(note);
    }

    Ok(notes)
}

/// ISO-8601 timestamps with millisecond precision and a `Z` suffix.
///
/// Any RFC 3339 offset is accepted on input and normalised to UTC; sub-millisecond
/// digits are dropped.
pub mod timestamp {
    use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc).trunc_subsecs(3))
            .map_err(|e| serde::de::Error::custom(format!("invalid timestamp '{}': {}", raw, e)))
    }
}
