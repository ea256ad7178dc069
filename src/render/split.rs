//! Split layout: one markdown file per document.
//!
//! Each file carries a structured `key: value` header followed by a body
//! mirroring the bundled layout's sections, minus the horizontal-rule
//! separator (each document is its own file).

use crate::domain::Document;

use super::bundled::{highlight_lines, metadata_line};
use super::format::{format_date, progress_percent, truncate_chars};

/// Slugs in this layout may be longer than the bundled layout's 60.
pub const SLUG_MAX_LEN: usize = 80;

/// Characters that force a header value into double quotes.
const NEEDS_QUOTING: &[char] = &[
    ':', '{', '}', '[', ']', '#', '&', '*', '!', '|', '>', '\'', '"', '@', '`', ',',
];

/// Render a header scalar: quoted with internal double quotes escaped when
/// the value contains a special character, an empty quoted string when the
/// value is absent, bare otherwise.
pub fn yaml_scalar(value: Option<&str>) -> String {
    match value {
        None => "\"\"".to_string(),
        Some("") => "\"\"".to_string(),
        Some(v) if v.contains(NEEDS_QUOTING) => {
            format!("\"{}\"", v.replace('"', "\\\""))
        }
        Some(v) => v.to_string(),
    }
}

/// Render a tag list as an inline sequence of (possibly quoted) scalars.
pub fn yaml_tag_list(tags: &[String]) -> String {
    let scalars: Vec<String> = tags.iter().map(|t| yaml_scalar(Some(t))).collect();
    format!("[{}]", scalars.join(", "))
}

/// Render one document as a standalone page: metadata header plus body.
pub fn document_page(doc: &Document) -> String {
    let mut lines = Vec::new();

    // Header block. Date fields are omitted entirely when absent.
    lines.push("---".to_string());
    lines.push(format!("title: {}", yaml_scalar(Some(doc.title()))));
    lines.push(format!("author: {}", yaml_scalar(doc.author.as_deref())));
    lines.push(format!("category: {}", yaml_scalar(Some(doc.category()))));
    lines.push(format!("source: {}", yaml_scalar(doc.source_url.as_deref())));
    if let Some(reader_url) = doc.reader_url.as_deref() {
        if !reader_url.is_empty() {
            lines.push(format!("reader_url: {}", yaml_scalar(Some(reader_url))));
        }
    }
    if doc.saved_at.is_some() {
        lines.push(format!("saved: {}", format_date(doc.saved_at.as_deref())));
    }
    if doc.published_date.is_some() {
        lines.push(format!(
            "published: {}",
            format_date(doc.published_date.as_deref())
        ));
    }
    lines.push(format!("words: {}", doc.word_count()));
    lines.push(format!(
        "progress: {}",
        progress_percent(doc.reading_progress)
    ));
    lines.push(format!("tags: {}", yaml_tag_list(&doc.tag_names())));
    lines.push("---".to_string());
    lines.push(String::new());

    // Body.
    lines.push(format!("# {}", doc.title()));
    lines.push(String::new());

    if let Some(meta) = metadata_line(doc) {
        lines.push(meta);
        lines.push(String::new());
    }

    if !doc.source_url().is_empty() {
        lines.push(format!(
            "🔗 [{}]({})",
            truncate_chars(doc.source_url(), 60),
            doc.source_url()
        ));
        lines.push(String::new());
    }

    if !doc.summary().is_empty() {
        lines.push(format!("> {}", doc.summary()));
        lines.push(String::new());
    }

    if !doc.notes().is_empty() {
        lines.push(format!("**Notes:** {}", doc.notes()));
        lines.push(String::new());
    }

    highlight_lines(doc, &mut lines);

    lines.join("\n")
}
