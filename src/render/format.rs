//! Small formatting helpers shared by both layouts.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Reduce an ISO-8601 timestamp to `YYYY-MM-DD`.
///
/// Tolerates a trailing `Z` offset and date-only strings. On parse
/// failure the first 10 characters of the raw string are returned
/// unchanged; a missing or empty input renders as "Unknown".
pub fn format_date(raw: Option<&str>) -> String {
    let Some(s) = raw.filter(|s| !s.is_empty()) else {
        return "Unknown".to_string();
    };
    match parse_iso_date(s) {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => s.chars().take(10).collect(),
    }
}

fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    // Timestamps without an offset, then plain dates.
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// 10-segment text progress bar with an integer percentage.
pub fn progress_bar(progress: Option<f64>) -> String {
    let p = match progress {
        Some(p) if p > 0.0 => p.min(1.0),
        _ => return "not started".to_string(),
    };
    let pct = (p * 100.0) as u32;
    let filled = (p * 10.0) as usize;
    format!("{}{} {}%", "█".repeat(filled), "░".repeat(10 - filled), pct)
}

/// Integer percentage for table cells ("45%", "0%").
pub fn progress_percent(progress: Option<f64>) -> String {
    let pct = (progress.unwrap_or(0.0).clamp(0.0, 1.0) * 100.0) as u32;
    format!("{pct}%")
}

/// Filesystem-safe slug: lowercase, punctuation stripped, whitespace and
/// underscore runs collapsed to single hyphens, bounded length. An input
/// with nothing left becomes "untitled".
pub fn slugify(text: &str, max_len: usize) -> String {
    let lowered = text.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut prev_hyphen = true; // also trims leading hyphens
    for c in lowered.trim().chars() {
        let mapped = if c.is_whitespace() || c == '_' || c == '-' {
            '-'
        } else if c.is_alphanumeric() {
            c
        } else {
            continue;
        };
        if mapped == '-' {
            if !prev_hyphen {
                slug.push('-');
            }
            prev_hyphen = true;
        } else {
            slug.push(mapped);
            prev_hyphen = false;
        }
    }
    let trimmed = slug.trim_end_matches('-');
    let truncated: String = trimmed.chars().take(max_len).collect();
    if truncated.is_empty() {
        "untitled".to_string()
    } else {
        truncated
    }
}

/// Render an integer with thousands separators (12345 -> "12,345").
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Truncate to at most `max` characters (no ellipsis).
pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Capitalize the first letter of each whitespace-separated word.
pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Icon for a document category; unknown categories fall back to 📄.
pub fn category_icon(category: &str) -> &'static str {
    match category {
        "article" => "📄",
        "email" => "📧",
        "rss" => "📡",
        "pdf" => "📑",
        "epub" => "📖",
        "tweet" => "🐦",
        "video" => "🎬",
        "highlight" => "💡",
        "note" => "📝",
        _ => "📄",
    }
}
