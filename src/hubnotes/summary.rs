//! Compact note descriptions for list views.

use crate::model::Note;

const PREVIEW_CHARS: usize = 50;
const SHOWN_TAGS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteSummary<'a> {
    pub title: &'a str,
    /// First 50 characters of content, with `...` appended when cut.
    pub preview: String,
    pub shown_tags: &'a [String],
    /// Tags left out of `shown_tags`, rendered as `+N`.
    pub hidden_tags: usize,
}

impl<'a> NoteSummary<'a> {
    pub fn of(note: &'a Note) -> Self {
        let tags = note.tags().as_slice();
        let shown = tags.len().min(SHOWN_TAGS);
        Self {
            title: note.title(),
            preview: preview(note.content()),
            shown_tags: &tags[..shown],
            hidden_tags: tags.len() - shown,
        }
    }
}

fn preview(content: &str) -> String {
    let mut chars = content.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}
