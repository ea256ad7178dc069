//! Error taxonomy for the export pipeline.
//!
//! Everything that can abort a run is a variant here. Library code returns
//! `Result<_, ExportError>` and never exits the process; only the binary
//! turns an error into a non-zero exit status.

use thiserror::Error;

/// Fatal conditions for an export run.
///
/// There is no retry and no partial-failure mode: any variant aborts the
/// run before anything is written.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The API token was not provided via environment or flag.
    #[error("READWISE_TOKEN environment variable not set.\nGet your token at: https://readwise.io/access_token")]
    MissingToken,

    /// The API answered with a non-2xx status. No distinction is made
    /// between client and server errors.
    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    /// The request never produced a response (connect, TLS, timeout).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not the JSON shape we expect.
    #[error("unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),

    /// Filesystem failure while writing output.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
