//! End-to-end pipeline tests against an in-memory document source.

use async_trait::async_trait;
use tempfile::TempDir;

use reader_export::api::{DocumentFilter, DocumentSource, ListPage};
use reader_export::domain::Document;
use reader_export::error::ExportError;
use reader_export::export::{run_export, ExportOptions, Layout};

/// Serves a fixed library, answering location and parent_id filters the
/// way the real API does (single page per request).
struct LibrarySource {
    docs: Vec<Document>,
}

impl LibrarySource {
    fn new(json: serde_json::Value) -> Self {
        Self {
            docs: serde_json::from_value(json).unwrap(),
        }
    }
}

#[async_trait]
impl DocumentSource for LibrarySource {
    async fn list_page(
        &self,
        filter: &DocumentFilter,
        _cursor: Option<&str>,
    ) -> Result<ListPage, ExportError> {
        let results = self
            .docs
            .iter()
            .filter(|d| match &filter.location {
                Some(location) => d.location.as_deref() == Some(location),
                None => true,
            })
            .filter(|d| match &filter.category {
                Some(category) => d.category.as_deref() == Some(category),
                None => true,
            })
            .filter(|d| match &filter.parent_id {
                Some(parent_id) => d.parent_id.as_deref() == Some(parent_id),
                None => true,
            })
            .cloned()
            .collect();
        Ok(ListPage {
            results,
            next_page_cursor: None,
        })
    }
}

fn opts(dir: &TempDir, layout: Layout) -> ExportOptions {
    ExportOptions {
        output_dir: dir.path().to_path_buf(),
        layout,
        with_highlights: false,
        categories: None,
    }
}

fn three_doc_library() -> LibrarySource {
    LibrarySource::new(serde_json::json!([
        {
            "id": "q1",
            "title": "Queued Article",
            "location": "new",
            "word_count": 1200,
            "saved_at": "2024-03-15T10:30:00Z"
        },
        {
            "id": "a1",
            "title": "Archived Article",
            "location": "archive",
            "word_count": 800
        },
        {
            "id": "f1",
            "title": "Feed Item",
            "location": "feed",
            "word_count": 300
        }
    ]))
}

#[tokio::test]
async fn test_bundled_export_end_to_end() {
    let dir = TempDir::new().unwrap();
    let source = three_doc_library();

    let report = run_export(&source, &opts(&dir, Layout::Bundled))
        .await
        .unwrap();

    assert_eq!(report.total_documents, 3);
    assert_eq!(report.total_words, 2300);

    let queue = std::fs::read_to_string(dir.path().join("queue.md")).unwrap();
    let archive = std::fs::read_to_string(dir.path().join("archive.md")).unwrap();
    let feed = std::fs::read_to_string(dir.path().join("feed.md")).unwrap();
    assert!(queue.contains("**1 items**"));
    assert!(queue.contains("Queued Article"));
    assert!(archive.contains("Archived Article"));
    assert!(feed.contains("Feed Item"));

    let readme = std::fs::read_to_string(dir.path().join("README.md")).unwrap();
    assert!(readme.contains("- **Total items:** 3"));
    assert!(readme.contains("- **Total words:** 2,300"));

    // raw snapshot holds all three records
    let raw = std::fs::read_to_string(dir.path().join("data.json")).unwrap();
    let snapshot: Vec<Document> = serde_json::from_str(&raw).unwrap();
    let mut ids: Vec<&str> = snapshot.iter().map(|d| d.id.as_str()).collect();
    ids.sort();
    assert_eq!(ids, vec!["a1", "f1", "q1"]);
}

#[tokio::test]
async fn test_bundled_export_omits_empty_feed_file() {
    let dir = TempDir::new().unwrap();
    let source = LibrarySource::new(serde_json::json!([
        { "id": "q1", "title": "Only One", "location": "later" }
    ]));

    run_export(&source, &opts(&dir, Layout::Bundled))
        .await
        .unwrap();

    assert!(dir.path().join("queue.md").exists());
    assert!(dir.path().join("archive.md").exists());
    assert!(!dir.path().join("feed.md").exists());
}

#[tokio::test]
async fn test_split_export_one_file_per_document() {
    let dir = TempDir::new().unwrap();
    let source = three_doc_library();

    run_export(&source, &opts(&dir, Layout::Split)).await.unwrap();

    assert!(dir.path().join("queue/queued-article.md").exists());
    assert!(dir.path().join("archive/archived-article.md").exists());
    assert!(dir.path().join("feed/feed-item.md").exists());
    assert!(dir.path().join("queue/README.md").exists());

    let readme = std::fs::read_to_string(dir.path().join("README.md")).unwrap();
    assert!(readme.contains("## All Documents"));
    assert!(readme.contains("[Queued Article](queue/queued-article.md)"));

    let page = std::fs::read_to_string(dir.path().join("queue/queued-article.md")).unwrap();
    assert!(page.starts_with("---\n"));
    assert!(page.contains("title: Queued Article"));
}

#[tokio::test]
async fn test_split_export_resolves_slug_collisions() {
    let dir = TempDir::new().unwrap();
    let source = LibrarySource::new(serde_json::json!([
        { "id": "1", "title": "Duplicate", "location": "new" },
        { "id": "2", "title": "Duplicate", "location": "new" },
        { "id": "3", "title": "Duplicate", "location": "archive" }
    ]));

    run_export(&source, &opts(&dir, Layout::Split)).await.unwrap();

    // same bucket: suffixed in processing order
    assert!(dir.path().join("queue/duplicate.md").exists());
    assert!(dir.path().join("queue/duplicate-1.md").exists());
    // counter is scoped per bucket
    assert!(dir.path().join("archive/duplicate.md").exists());
}

#[tokio::test]
async fn test_split_export_skips_empty_bucket_folders() {
    let dir = TempDir::new().unwrap();
    let source = LibrarySource::new(serde_json::json!([
        { "id": "q1", "title": "Only One", "location": "new" }
    ]));

    run_export(&source, &opts(&dir, Layout::Split)).await.unwrap();

    assert!(dir.path().join("queue").is_dir());
    assert!(!dir.path().join("archive").exists());
    assert!(!dir.path().join("feed").exists());
}

#[tokio::test]
async fn test_highlight_enrichment_attaches_children() {
    let dir = TempDir::new().unwrap();
    let source = LibrarySource::new(serde_json::json!([
        {
            "id": "q1",
            "title": "Parent Article",
            "location": "new"
        },
        {
            "id": "h1",
            "parent_id": "q1",
            "category": "highlight",
            "content": "a memorable passage",
            "notes": "so true"
        }
    ]));

    let mut options = opts(&dir, Layout::Bundled);
    options.with_highlights = true;
    let report = run_export(&source, &options).await.unwrap();

    // the child record never appears as a top-level document
    assert_eq!(report.total_documents, 1);

    let queue = std::fs::read_to_string(dir.path().join("queue.md")).unwrap();
    assert!(queue.contains("#### Highlights"));
    assert!(queue.contains("> a memorable passage"));
    assert!(queue.contains("— _so true_"));

    // the snapshot carries the attached highlights
    let raw = std::fs::read_to_string(dir.path().join("data.json")).unwrap();
    assert!(raw.contains("_highlights"));
    assert!(raw.contains("a memorable passage"));
}

#[tokio::test]
async fn test_category_filter_restricts_export() {
    let dir = TempDir::new().unwrap();
    let source = LibrarySource::new(serde_json::json!([
        { "id": "a", "title": "An Article", "location": "new", "category": "article" },
        { "id": "p", "title": "A Paper", "location": "new", "category": "pdf" }
    ]));

    let mut options = opts(&dir, Layout::Bundled);
    options.categories = Some(vec!["pdf".to_string()]);
    let report = run_export(&source, &options).await.unwrap();

    assert_eq!(report.total_documents, 1);
    let queue = std::fs::read_to_string(dir.path().join("queue.md")).unwrap();
    assert!(queue.contains("A Paper"));
    assert!(!queue.contains("An Article"));
}

#[tokio::test]
async fn test_fetch_error_aborts_with_nothing_written() {
    struct FailingSource;

    #[async_trait]
    impl DocumentSource for FailingSource {
        async fn list_page(
            &self,
            _filter: &DocumentFilter,
            _cursor: Option<&str>,
        ) -> Result<ListPage, ExportError> {
            Err(ExportError::Api {
                status: 500,
                body: "server error".to_string(),
            })
        }
    }

    let dir = TempDir::new().unwrap();
    let err = run_export(&FailingSource, &opts(&dir, Layout::Bundled))
        .await
        .unwrap_err();
    assert!(matches!(err, ExportError::Api { status: 500, .. }));

    // nothing was written
    assert!(!dir.path().join("README.md").exists());
    assert!(!dir.path().join("data.json").exists());
}
