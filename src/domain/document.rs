//! The Document record as returned by the Reader API.
//!
//! Every field except `id` may be missing or null; defaulting is
//! centralized in the accessor methods rather than scattered through the
//! renderers. Unknown API fields are kept in `extra` so the raw JSON
//! snapshot round-trips what the server sent.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single saved item (article, PDF, tweet, ...) from the Reader API.
///
/// Highlights are the same shape: a child document whose `parent_id`
/// points at its parent. Fetched highlights are attached in memory on
/// `highlights` and only ever persisted inside the raw snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub author: Option<String>,

    #[serde(default)]
    pub source_url: Option<String>,

    #[serde(default)]
    pub reader_url: Option<String>,

    #[serde(default)]
    pub site_name: Option<String>,

    /// Open-ended tag: "article", "pdf", "epub", "tweet", "video", ...
    #[serde(default)]
    pub category: Option<String>,

    /// Raw reading status ("new", "later", "shortlist", "archive", "feed").
    #[serde(default)]
    pub location: Option<String>,

    /// Set on child records (highlights/notes) only.
    #[serde(default)]
    pub parent_id: Option<String>,

    #[serde(default)]
    pub word_count: Option<u64>,

    /// Free text from the API ("4 min" or a bare number); rendered verbatim.
    #[serde(default)]
    pub reading_time: Option<Value>,

    /// Fraction 0-1.
    #[serde(default)]
    pub reading_progress: Option<f64>,

    #[serde(default)]
    pub summary: Option<String>,

    #[serde(default)]
    pub notes: Option<String>,

    /// Either a map of tag-name to metadata or a plain list of names.
    #[serde(default)]
    pub tags: Option<Value>,

    #[serde(default)]
    pub saved_at: Option<String>,

    #[serde(default)]
    pub published_date: Option<String>,

    /// Highlight text (present on child records).
    #[serde(default)]
    pub content: Option<String>,

    /// Fetched child highlights, attached for rendering only.
    #[serde(
        rename = "_highlights",
        default,
        skip_deserializing,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub highlights: Vec<Document>,

    /// Any API field we do not model explicitly.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl Document {
    /// Title with the documented fallback.
    pub fn title(&self) -> &str {
        match self.title.as_deref() {
            Some(t) if !t.is_empty() => t,
            _ => "Untitled",
        }
    }

    pub fn author(&self) -> &str {
        self.author.as_deref().unwrap_or("Unknown")
    }

    pub fn source_url(&self) -> &str {
        self.source_url.as_deref().unwrap_or("")
    }

    pub fn site_name(&self) -> &str {
        self.site_name.as_deref().unwrap_or("")
    }

    pub fn category(&self) -> &str {
        match self.category.as_deref() {
            Some(c) if !c.is_empty() => c,
            _ => "article",
        }
    }

    pub fn word_count(&self) -> u64 {
        self.word_count.unwrap_or(0)
    }

    pub fn summary(&self) -> &str {
        self.summary.as_deref().unwrap_or("")
    }

    pub fn notes(&self) -> &str {
        self.notes.as_deref().unwrap_or("")
    }

    /// Highlight text: `content`, falling back to `title`.
    pub fn highlight_text(&self) -> &str {
        match self.content.as_deref() {
            Some(c) if !c.is_empty() => c,
            _ => self.title.as_deref().unwrap_or(""),
        }
    }

    /// Reading time rendered as shown ("4 min", or a bare number as-is).
    pub fn reading_time_text(&self) -> Option<String> {
        match self.reading_time.as_ref()? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Tag names, whether the API sent a map, a list, or nothing.
    pub fn tag_names(&self) -> Vec<String> {
        match self.tags.as_ref() {
            Some(Value::Object(map)) => map.keys().cloned().collect(),
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// `saved_at` as a sort key: missing dates sort as the empty string,
    /// which puts them last when sorting descending.
    pub fn saved_sort_key(&self) -> &str {
        self.saved_at.as_deref().unwrap_or("")
    }

    /// Whether this record is a child (highlight/note) of another document.
    pub fn is_child(&self) -> bool {
        self.parent_id.is_some()
    }
}
