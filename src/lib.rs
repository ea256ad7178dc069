//! reader-export - Readwise Reader to Markdown exporter
//!
//! Fetches every saved document from the Readwise Reader API and renders
//! the library as static markdown files plus a raw JSON backup.
//!
//! # Architecture
//!
//! The pipeline is a straight line, run once per invocation:
//! - All documents are fetched per raw location, following pagination cursors
//! - Documents are partitioned into buckets (queue, archive, feed)
//! - Highlights are optionally fetched and attached per document
//! - Pure renderers turn documents into markdown (two output layouts)
//! - Everything is written to the output directory in one pass
//!
//! # Modules
//!
//! - `api`: Reader API client, pagination, and the `DocumentSource` seam
//! - `domain`: Data structures (Document, Bucket) and classification
//! - `render`: Markdown rendering (bundled and split layouts, indexes)
//! - `export`: Pipeline driver and filesystem writer
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! export READWISE_TOKEN="your_token_here"
//! reader-export --output-dir ./output
//!
//! # One file per document instead of one file per bucket
//! reader-export --layout split
//!
//! # Slower: also fetch highlights for every document
//! reader-export --with-highlights
//! ```

pub mod api;
pub mod cli;
pub mod domain;
pub mod error;
pub mod export;
pub mod render;

// Re-export main types at crate root for convenience
pub use api::{DocumentFilter, DocumentSource, ListPage, ReaderClient};
pub use domain::{Bucket, Document};
pub use error::ExportError;
pub use export::{run_export, ExportOptions, ExportReport, Layout};
