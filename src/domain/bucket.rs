//! Buckets: the three top-level groupings documents are exported into.
//!
//! Membership is derived from the raw `location` field on every run via a
//! single static mapping table; nothing is stored.

use serde::{Deserialize, Serialize};

use super::document::Document;

/// One of the three output groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    Queue,
    Archive,
    Feed,
}

/// Raw API locations feeding each bucket. The single source of truth for
/// classification; rendering reads bucket names from `Bucket` itself.
pub const LOCATION_BUCKETS: &[(Bucket, &[&str])] = &[
    (Bucket::Queue, &["new", "later", "shortlist"]),
    (Bucket::Archive, &["archive"]),
    (Bucket::Feed, &["feed"]),
];

/// Map a raw location string to its bucket, if known.
pub fn bucket_for_location(location: &str) -> Option<Bucket> {
    LOCATION_BUCKETS
        .iter()
        .find(|(_, locations)| locations.contains(&location))
        .map(|(bucket, _)| *bucket)
}

impl Bucket {
    /// All buckets, in output order.
    pub const ALL: [Bucket; 3] = [Bucket::Queue, Bucket::Archive, Bucket::Feed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::Queue => "queue",
            Bucket::Archive => "archive",
            Bucket::Feed => "feed",
        }
    }

    /// Section heading used in the markdown output.
    pub fn title(&self) -> &'static str {
        match self {
            Bucket::Queue => "Reading Queue",
            Bucket::Archive => "Archive",
            Bucket::Feed => "Feed",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Bucket::Queue => "📋",
            Bucket::Archive => "✅",
            Bucket::Feed => "📡",
        }
    }

    /// Section byline in the bundled layout.
    pub fn description(&self) -> &'static str {
        match self {
            Bucket::Queue => "Articles and documents waiting to be read.",
            Bucket::Archive => "Finished reading or archived for reference.",
            Bucket::Feed => "Items from RSS feeds and subscriptions.",
        }
    }

    /// Raw locations belonging to this bucket.
    pub fn locations(&self) -> &'static [&'static str] {
        LOCATION_BUCKETS
            .iter()
            .find(|(bucket, _)| bucket == self)
            .map(|(_, locations)| *locations)
            .unwrap_or(&[])
    }

    /// Whether a document belongs to this bucket.
    pub fn contains(&self, doc: &Document) -> bool {
        doc.location
            .as_deref()
            .and_then(bucket_for_location)
            .is_some_and(|b| b == *self)
    }
}

impl std::fmt::Display for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Keep only documents eligible to appear in a bucket: drops child records
/// (highlights/notes) and, when an allow-list is given, any category not
/// on it. Pure; order is preserved.
pub fn filter_top_level(docs: Vec<Document>, categories: Option<&[String]>) -> Vec<Document> {
    docs.into_iter()
        .filter(|doc| !doc.is_child())
        .filter(|doc| match categories {
            Some(allowed) => allowed.iter().any(|c| c == doc.category()),
            None => true,
        })
        .collect()
}

/// Documents belonging to `bucket`, in their original order.
pub fn docs_in_bucket<'a>(docs: &'a [Document], bucket: Bucket) -> Vec<&'a Document> {
    docs.iter().filter(|doc| bucket.contains(doc)).collect()
}
