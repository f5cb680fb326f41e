use chrono::{DateTime, Utc};
use colored::Colorize;
use hubnotes::api::{CmdMessage, MessageLevel};
use hubnotes::config::NotesConfig;
use hubnotes::index::DisplayNote;
use hubnotes::summary::NoteSummary;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 16;

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(crate) fn print_full_note(dn: &DisplayNote) {
    let note = &dn.note;
    println!("{} {}", format!("{}.", dn.index).yellow(), note.title().bold());
    println!("{}", format!("id: {}", note.id()).dimmed());
    if !note.tags().is_empty() {
        let tags: Vec<&str> = note.tags().iter().map(String::as_str).collect();
        println!("tags: {}", tags.join(", ").cyan());
    }
    println!(
        "{}",
        format!(
            "created {} / updated {}",
            note.created_at().format("%Y-%m-%d %H:%M"),
            note.updated_at().format("%Y-%m-%d %H:%M")
        )
        .dimmed()
    );
    println!("--------------------------------");
    println!("{}", note.content());
}

pub(crate) fn print_notes(notes: &[DisplayNote]) {
    for dn in notes {
        let summary = NoteSummary::of(&dn.note);

        let idx_str = format!("{:>3}. ", dn.index);
        let tags = tag_label(&summary);
        let time_ago = format_time_ago(dn.note.updated_at());

        let title_content = if summary.preview.is_empty() {
            summary.title.to_string()
        } else {
            format!("{}  {}", summary.title, summary.preview.replace('\n', " "))
        };

        let tags_width = if tags.is_empty() { 0 } else { tags.width() + 1 };
        let fixed_width = idx_str.width() + tags_width + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);

        let title_display = truncate_to_width(&title_content, available);
        let padding = available.saturating_sub(title_display.width());

        let tags_colored = if tags.is_empty() {
            String::new()
        } else {
            format!("{} ", tags.cyan())
        };

        println!(
            "{}{}{}{}{}",
            idx_str.yellow(),
            title_display,
            " ".repeat(padding),
            tags_colored,
            time_ago.dimmed()
        );
    }
}

/// Prints every setting, or only `only` when given.
pub(crate) fn print_config(config: &NotesConfig, only: Option<&str>) {
    let shown = |key: &str| only.map_or(true, |k| k == key);
    if shown("storage-key") {
        println!("storage-key = {}", config.storage_key);
    }
    if shown("export-dir") {
        match &config.export_dir {
            Some(dir) => println!("export-dir = {}", dir.display()),
            None => println!("export-dir = {}", "(current directory)".dimmed()),
        }
    }
}

fn tag_label(summary: &NoteSummary<'_>) -> String {
    let mut parts: Vec<String> = summary.shown_tags.iter().map(|t| format!("#{}", t)).collect();
    if summary.hidden_tags > 0 {
        parts.push(format!("+{}", summary.hidden_tags));
    }
    parts.join(" ")
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
