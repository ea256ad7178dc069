//! The export pipeline: fetch, classify, enrich, render, write.
//!
//! Strictly sequential and one-shot. Nothing is written until every fetch
//! has succeeded; any API error aborts the run with no partial output.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::info;

use crate::api::{fetch_all, fetch_highlights, DocumentFilter, DocumentSource};
use crate::domain::{docs_in_bucket, filter_top_level, Bucket, Document, LOCATION_BUCKETS};
use crate::error::ExportError;
use crate::render::{bundled, split, summary};

/// Output layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// One consolidated markdown file per bucket.
    Bundled,
    /// One markdown file per document, in per-bucket folders.
    Split,
}

/// Options for one export run.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub output_dir: PathBuf,
    pub layout: Layout,
    /// Also fetch highlights for every document (one extra API call each).
    pub with_highlights: bool,
    /// Restrict the export to these categories, when given.
    pub categories: Option<Vec<String>>,
}

/// What a completed run produced.
#[derive(Debug, Clone)]
pub struct ExportReport {
    pub total_documents: usize,
    pub total_words: u64,
    pub files_written: usize,
}

/// Run the whole pipeline against `source` and write everything under
/// `opts.output_dir`.
pub async fn run_export(
    source: &dyn DocumentSource,
    opts: &ExportOptions,
) -> Result<ExportReport, ExportError> {
    info!("fetching documents from Readwise Reader...");
    let mut all_docs: Vec<Document> = Vec::new();

    for (_, locations) in LOCATION_BUCKETS {
        for location in *locations {
            info!("  fetching '{}' documents...", location);
            let fetched = fetch_all(source, &DocumentFilter::location(location)).await?;
            let kept = filter_top_level(fetched, opts.categories.as_deref());
            info!("    found {} items", kept.len());
            all_docs.extend(kept);
        }
    }

    info!("total: {} documents", all_docs.len());

    if opts.with_highlights {
        info!("fetching highlights...");
        let total = all_docs.len();
        for (i, doc) in all_docs.iter_mut().enumerate() {
            doc.highlights = fetch_highlights(source, &doc.id).await?;
            if (i + 1) % 10 == 0 {
                info!("  processed {}/{}", i + 1, total);
            }
        }
    }

    info!("generating markdown files...");
    fs::create_dir_all(&opts.output_dir).await?;

    let mut files_written = match opts.layout {
        Layout::Bundled => write_bundled(&opts.output_dir, &all_docs).await?,
        Layout::Split => write_split(&opts.output_dir, &all_docs).await?,
    };

    // Raw snapshot of everything fetched, highlights included.
    let snapshot = serde_json::to_string_pretty(&all_docs)?;
    fs::write(opts.output_dir.join("data.json"), snapshot).await?;
    files_written += 1;
    info!("  wrote data.json (raw data backup)");

    Ok(ExportReport {
        total_documents: all_docs.len(),
        total_words: all_docs.iter().map(|d| d.word_count()).sum(),
        files_written,
    })
}

/// Bundled layout: queue.md / archive.md / feed.md (feed omitted when
/// empty) plus the top-level README.
async fn write_bundled(output_dir: &Path, docs: &[Document]) -> Result<usize, ExportError> {
    let mut files_written = 0;

    for bucket in Bucket::ALL {
        let bucket_docs = docs_in_bucket(docs, bucket);
        if bucket == Bucket::Feed && bucket_docs.is_empty() {
            continue;
        }
        let page = bundled::section_page(bucket, &bucket_docs);
        fs::write(output_dir.join(format!("{bucket}.md")), page).await?;
        files_written += 1;
        info!("  wrote {}.md ({} items)", bucket, bucket_docs.len());
    }

    fs::write(output_dir.join("README.md"), summary::overview_bundled(docs)).await?;
    files_written += 1;
    info!("  wrote README.md (index)");

    Ok(files_written)
}

/// Split layout: one folder per non-empty bucket holding a file per
/// document and a folder index, plus the top-level README.
async fn write_split(output_dir: &Path, docs: &[Document]) -> Result<usize, ExportError> {
    let mut files_written = 0;
    let mut entries: Vec<(Bucket, String, &Document)> = Vec::new();

    for bucket in Bucket::ALL {
        let bucket_docs = docs_in_bucket(docs, bucket);
        if bucket_docs.is_empty() {
            continue;
        }

        let bucket_dir = output_dir.join(bucket.as_str());
        fs::create_dir_all(&bucket_dir).await?;

        // Collision counter is scoped per bucket and follows processing
        // order: foo.md, then foo-1.md, foo-2.md, ...
        let mut seen: HashMap<String, usize> = HashMap::new();
        let mut bucket_entries: Vec<(String, &Document)> = Vec::new();

        for doc in bucket_docs {
            let base = split_slug(doc);
            let n = seen.entry(base.clone()).or_insert(0);
            let filename = if *n == 0 {
                format!("{base}.md")
            } else {
                format!("{base}-{n}.md")
            };
            *n += 1;

            fs::write(bucket_dir.join(&filename), split::document_page(doc)).await?;
            files_written += 1;
            bucket_entries.push((filename, doc));
        }

        fs::write(
            bucket_dir.join("README.md"),
            summary::bucket_index(bucket, &bucket_entries),
        )
        .await?;
        files_written += 1;
        info!("  wrote {}/ ({} items)", bucket, bucket_entries.len());

        entries.extend(
            bucket_entries
                .into_iter()
                .map(|(filename, doc)| (bucket, format!("{bucket}/{filename}"), doc)),
        );
    }

    fs::write(
        output_dir.join("README.md"),
        summary::overview_split(docs, &entries),
    )
    .await?;
    files_written += 1;
    info!("  wrote README.md (index)");

    Ok(files_written)
}

fn split_slug(doc: &Document) -> String {
    crate::render::format::slugify(doc.title(), split::SLUG_MAX_LEN)
}
