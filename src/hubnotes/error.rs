use crate::model::NoteId;
use crate::schema::SchemaError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotesError {
    /// A user-facing validation failure. The message is shown as-is.
    #[error("{0}")]
    Validation(String),

    #[error("Note not found: {0}")]
    NotFound(NoteId),

    #[error("Could not read stored notes: {0}")]
    PersistenceRead(String),

    #[error("Could not save notes: {0}")]
    PersistenceWrite(String),

    #[error("Failed to import notes. Invalid file format: {0}")]
    Import(#[from] SchemaError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl NotesError {
    pub fn empty_title() -> Self {
        NotesError::Validation("Note title cannot be empty".to_string())
    }
}

pub type Result<T> = std::result::Result<T, NotesError>;
