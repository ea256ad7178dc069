//! Markdown rendering.
//!
//! Everything in here is a pure function from documents to strings; the
//! writer in `export` is the only place that touches the filesystem.
//!
//! Two layouts are supported:
//! - `bundled`: one consolidated markdown file per bucket
//! - `split`: one file per document with a metadata header, plus indexes

pub mod bundled;
pub mod format;
pub mod split;
pub mod summary;
