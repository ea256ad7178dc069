//! Index pages: the top-level library overview and per-bucket indexes.

use std::collections::HashMap;

use chrono::Local;

use crate::domain::{docs_in_bucket, Bucket, Document};

use super::format::{
    category_icon, format_date, group_thousands, progress_percent, title_case, truncate_chars,
};

/// Stats block shared by both overview variants.
fn stats_lines(docs: &[Document], lines: &mut Vec<String>) {
    let total_words: u64 = docs.iter().map(|d| d.word_count()).sum();

    let mut categories: HashMap<&str, usize> = HashMap::new();
    for doc in docs {
        *categories.entry(doc.category()).or_insert(0) += 1;
    }
    let mut breakdown: Vec<(&str, usize)> = categories.into_iter().collect();
    breakdown.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
    let breakdown: Vec<String> = breakdown
        .iter()
        .map(|(cat, count)| format!("{cat} ({count})"))
        .collect();

    lines.push("## Stats".to_string());
    lines.push(String::new());
    lines.push(format!("- **Total items:** {}", docs.len()));
    lines.push(format!("- **Total words:** {}", group_thousands(total_words)));
    lines.push(format!("- **Categories:** {}", breakdown.join(", ")));
    lines.push(String::new());
}

fn overview_header(lines: &mut Vec<String>) {
    lines.push("# 📚 Readwise Reader Library".to_string());
    lines.push(String::new());
    lines.push(format!(
        "_Last updated: {}_",
        Local::now().format("%Y-%m-%d %H:%M")
    ));
    lines.push(String::new());
    lines.push("| Section | Count |".to_string());
    lines.push("|---------|-------|".to_string());
}

/// Top-level README for the bundled layout. The feed row is omitted when
/// the feed bucket is empty (no feed.md is written in that case).
pub fn overview_bundled(docs: &[Document]) -> String {
    let mut lines = Vec::new();
    overview_header(&mut lines);

    for bucket in Bucket::ALL {
        let count = docs_in_bucket(docs, bucket).len();
        if bucket == Bucket::Feed && count == 0 {
            continue;
        }
        lines.push(format!(
            "| [{} {}]({}.md) | {} |",
            bucket.emoji(),
            bucket.title(),
            bucket.as_str(),
            count
        ));
    }
    lines.push(String::new());

    stats_lines(docs, &mut lines);
    lines.join("\n")
}

/// Top-level README for the split layout: section counts linking into the
/// bucket folders, stats, and a master table over every document.
///
/// `entries` pairs each document with its output path relative to the
/// export root ("queue/some-slug.md"), in processing order.
pub fn overview_split(docs: &[Document], entries: &[(Bucket, String, &Document)]) -> String {
    let mut lines = Vec::new();
    overview_header(&mut lines);

    for bucket in Bucket::ALL {
        let count = docs_in_bucket(docs, bucket).len();
        // empty buckets get no folder, so no row either
        if count == 0 {
            continue;
        }
        lines.push(format!(
            "| [{} {}]({}/README.md) | {} |",
            bucket.emoji(),
            bucket.title(),
            bucket.as_str(),
            count
        ));
    }
    lines.push(String::new());

    stats_lines(docs, &mut lines);

    lines.push("## All Documents".to_string());
    lines.push(String::new());
    lines.push("| Status | Title | Author | Category | Words | Progress |".to_string());
    lines.push("|--------|-------|--------|----------|-------|----------|".to_string());

    let mut rows: Vec<&(Bucket, String, &Document)> = entries.iter().collect();
    rows.sort_by(|a, b| b.2.saved_sort_key().cmp(a.2.saved_sort_key()));

    for (bucket, path, doc) in rows {
        lines.push(format!(
            "| {} | [{}]({}) | {} | {} | {} | {} |",
            bucket.emoji(),
            truncate_chars(doc.title(), 50),
            path,
            truncate_chars(doc.author(), 20),
            doc.category(),
            group_thousands(doc.word_count()),
            progress_percent(doc.reading_progress)
        ));
    }
    lines.push(String::new());

    lines.join("\n")
}

/// Per-bucket README for the split layout, linking each document's file.
///
/// `entries` pairs each document with its filename inside the bucket
/// folder, in processing order.
pub fn bucket_index(bucket: Bucket, entries: &[(String, &Document)]) -> String {
    let mut lines = Vec::new();
    lines.push(format!("# {} {}", bucket.emoji(), bucket.title()));
    lines.push(String::new());
    lines.push(format!("_{}_", bucket.description()));
    lines.push(String::new());
    lines.push(format!("**{} items**", entries.len()));
    lines.push(String::new());

    let mut by_category: std::collections::BTreeMap<&str, Vec<&(String, &Document)>> =
        std::collections::BTreeMap::new();
    for entry in entries {
        by_category.entry(entry.1.category()).or_default().push(entry);
    }

    for (category, group) in by_category.iter_mut() {
        group.sort_by(|a, b| b.1.saved_sort_key().cmp(a.1.saved_sort_key()));
        lines.push(format!(
            "## {} {} ({})",
            category_icon(category),
            title_case(category),
            group.len()
        ));
        lines.push(String::new());
        for (filename, doc) in group.iter() {
            let mut entry = format!("- [{}]({})", doc.title(), filename);
            if doc.word_count() > 0 {
                entry.push_str(&format!(" — {} words", group_thousands(doc.word_count())));
            }
            let saved = format_date(doc.saved_at.as_deref());
            if saved != "Unknown" {
                entry.push_str(&format!(", saved {saved}"));
            }
            lines.push(entry);
        }
        lines.push(String::new());
    }

    lines.join("\n")
}
