//! Data structures for the export pipeline.

pub mod bucket;
pub mod document;

pub use bucket::{bucket_for_location, docs_in_bucket, filter_top_level, Bucket, LOCATION_BUCKETS};
pub use document::Document;
