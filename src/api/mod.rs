//! Reader API access: the client, the `DocumentSource` seam, and pagination.
//!
//! `DocumentSource` abstracts one page of the `list` endpoint so the
//! paginator and the pipeline can be exercised against a synthetic source
//! in tests. `ReaderClient` is the real HTTP implementation.

pub mod client;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;

use crate::domain::Document;
use crate::error::ExportError;

pub use client::ReaderClient;

/// Filter for a `list` request. Any subset of constraints may be set.
#[derive(Debug, Clone, Default)]
pub struct DocumentFilter {
    pub location: Option<String>,
    pub category: Option<String>,
    pub parent_id: Option<String>,
}

impl DocumentFilter {
    /// Filter by raw location ("new", "later", ...).
    pub fn location(location: &str) -> Self {
        Self {
            location: Some(location.to_string()),
            ..Self::default()
        }
    }

    /// Filter for the highlights of one parent document.
    pub fn highlights_of(parent_id: &str) -> Self {
        Self {
            category: Some("highlight".to_string()),
            parent_id: Some(parent_id.to_string()),
            ..Self::default()
        }
    }

    /// Query parameters for this filter plus an optional cursor.
    pub fn query_params(&self, cursor: Option<&str>) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(location) = &self.location {
            params.push(("location".to_string(), location.clone()));
        }
        if let Some(category) = &self.category {
            params.push(("category".to_string(), category.clone()));
        }
        if let Some(parent_id) = &self.parent_id {
            params.push(("parent_id".to_string(), parent_id.clone()));
        }
        if let Some(cursor) = cursor {
            params.push(("pageCursor".to_string(), cursor.to_string()));
        }
        params
    }
}

/// One page of the `list` endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListPage {
    #[serde(default)]
    pub results: Vec<Document>,

    #[serde(rename = "nextPageCursor", default)]
    pub next_page_cursor: Option<String>,
}

/// One page of documents for a filter. Implemented by the HTTP client and
/// by synthetic sources in tests.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    async fn list_page(
        &self,
        filter: &DocumentFilter,
        cursor: Option<&str>,
    ) -> Result<ListPage, ExportError>;
}

/// Fetch every document matching `filter`, following pagination cursors.
///
/// Results are appended in API order, exactly once per page; the source is
/// not called again after a page without a cursor. No de-duplication is
/// performed across pages.
pub async fn fetch_all(
    source: &dyn DocumentSource,
    filter: &DocumentFilter,
) -> Result<Vec<Document>, ExportError> {
    let mut documents = Vec::new();
    let mut cursor: Option<String> = None;

    loop {
        let page = source.list_page(filter, cursor.as_deref()).await?;
        documents.extend(page.results);
        cursor = page.next_page_cursor;
        if cursor.is_none() {
            break;
        }
        info!("  fetched {} documents so far...", documents.len());
    }

    Ok(documents)
}

/// Fetch the highlights (child documents) of one parent document.
pub async fn fetch_highlights(
    source: &dyn DocumentSource,
    parent_id: &str,
) -> Result<Vec<Document>, ExportError> {
    fetch_all(source, &DocumentFilter::highlights_of(parent_id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_query_params() {
        let filter = DocumentFilter::location("later");
        assert_eq!(
            filter.query_params(None),
            vec![("location".to_string(), "later".to_string())]
        );
        assert_eq!(
            filter.query_params(Some("abc")),
            vec![
                ("location".to_string(), "later".to_string()),
                ("pageCursor".to_string(), "abc".to_string()),
            ]
        );
    }

    #[test]
    fn test_highlight_filter() {
        let filter = DocumentFilter::highlights_of("doc42");
        let params = filter.query_params(None);
        assert!(params.contains(&("category".to_string(), "highlight".to_string())));
        assert!(params.contains(&("parent_id".to_string(), "doc42".to_string())));
    }

    #[test]
    fn test_list_page_decodes_cursor() {
        let page: ListPage = serde_json::from_str(
            r#"{"results": [{"id": "a"}], "nextPageCursor": "cursor-1"}"#,
        )
        .unwrap();
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.next_page_cursor.as_deref(), Some("cursor-1"));

        let last: ListPage =
            serde_json::from_str(r#"{"results": [], "nextPageCursor": null}"#).unwrap();
        assert!(last.next_page_cursor.is_none());
    }
}
