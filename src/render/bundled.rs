//! Bundled layout: one consolidated markdown file per bucket.
//!
//! Each document renders as one block; blocks are grouped by category and
//! separated by horizontal rules.

use std::collections::BTreeMap;

use crate::domain::{Bucket, Document};

use super::format::{category_icon, format_date, group_thousands, progress_bar, title_case};

/// Author/site metadata line, shared with the split layout. Empty when
/// neither is known.
pub(crate) fn metadata_line(doc: &Document) -> Option<String> {
    let mut meta = Vec::new();
    let author = doc.author();
    if !author.is_empty() && author != "Unknown" {
        meta.push(format!("**{author}**"));
    }
    if !doc.site_name().is_empty() {
        meta.push(format!("_{}_", doc.site_name()));
    }
    if meta.is_empty() {
        None
    } else {
        Some(meta.join(" · "))
    }
}

/// Icon-prefixed details line: category, word count, reading time.
pub(crate) fn details_line(doc: &Document) -> String {
    let mut details = vec![format!("📂 {}", doc.category())];
    if doc.word_count() > 0 {
        details.push(format!("📝 {} words", group_thousands(doc.word_count())));
    }
    if let Some(reading_time) = doc.reading_time_text() {
        details.push(format!("⏱️ {reading_time}"));
    }
    details.join(" | ")
}

/// Tag list as inline code spans. Empty when the document has no tags.
pub(crate) fn tag_line(doc: &Document) -> Option<String> {
    let tags = doc.tag_names();
    if tags.is_empty() {
        return None;
    }
    let spans: Vec<String> = tags.iter().map(|t| format!("`{t}`")).collect();
    Some(spans.join(", "))
}

/// Block-quoted highlights, each followed by an attributed note.
pub(crate) fn highlight_lines(doc: &Document, lines: &mut Vec<String>) {
    if doc.highlights.is_empty() {
        return;
    }
    lines.push("#### Highlights".to_string());
    lines.push(String::new());
    for highlight in &doc.highlights {
        let text = highlight.highlight_text();
        if text.is_empty() {
            continue;
        }
        lines.push(format!("> {text}"));
        if !highlight.notes().is_empty() {
            lines.push(format!(">\n> — _{}_", highlight.notes()));
        }
        lines.push(String::new());
    }
}

/// Render one document as a markdown block ending in a horizontal rule.
pub fn document_block(doc: &Document) -> String {
    let mut lines = Vec::new();
    lines.push(format!("### [{}]({})", doc.title(), doc.source_url()));
    lines.push(String::new());

    if let Some(meta) = metadata_line(doc) {
        lines.push(meta);
        lines.push(String::new());
    }

    lines.push(details_line(doc));

    if doc.reading_progress.unwrap_or(0.0) > 0.0 {
        lines.push(format!("📖 Progress: {}", progress_bar(doc.reading_progress)));
    }

    let saved = format_date(doc.saved_at.as_deref());
    if saved != "Unknown" {
        lines.push(format!("📅 Saved: {saved}"));
    }
    let published = format_date(doc.published_date.as_deref());
    if published != "Unknown" {
        lines.push(format!("📰 Published: {published}"));
    }
    if let Some(tags) = tag_line(doc) {
        lines.push(format!("🏷️ Tags: {tags}"));
    }

    lines.push(String::new());

    if !doc.summary().is_empty() {
        lines.push(format!("> {}", doc.summary()));
        lines.push(String::new());
    }

    if !doc.notes().is_empty() {
        lines.push(format!("**Notes:** {}", doc.notes()));
        lines.push(String::new());
    }

    highlight_lines(doc, &mut lines);

    lines.push("---".to_string());
    lines.push(String::new());
    lines.join("\n")
}

/// Render a whole bucket file: header, item count, then documents grouped
/// by category (lexicographic) and sorted by saved date, newest first.
pub fn section_page(bucket: Bucket, docs: &[&Document]) -> String {
    let mut lines = Vec::new();
    lines.push(format!("# {} {}", bucket.emoji(), bucket.title()));
    lines.push(String::new());
    lines.push(format!("_{}_", bucket.description()));
    lines.push(String::new());
    lines.push(format!("**{} items**", docs.len()));
    lines.push(String::new());

    if docs.is_empty() {
        lines.push("_Nothing here yet!_".to_string());
        return lines.join("\n");
    }

    let mut by_category: BTreeMap<&str, Vec<&Document>> = BTreeMap::new();
    for doc in docs {
        by_category.entry(doc.category()).or_default().push(doc);
    }

    for (category, group) in by_category.iter_mut() {
        group.sort_by(|a, b| b.saved_sort_key().cmp(a.saved_sort_key()));
        lines.push(format!(
            "## {} {} ({})",
            category_icon(category),
            title_case(category),
            group.len()
        ));
        lines.push(String::new());
        for doc in group.iter() {
            lines.push(document_block(doc));
        }
    }

    lines.join("\n")
}
