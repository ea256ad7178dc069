//! Command-line interface for reader-export.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use crate::api::ReaderClient;
use crate::error::ExportError;
use crate::export::{run_export, ExportOptions, Layout};
use crate::render::format::group_thousands;

/// Export a Readwise Reader library to markdown files
#[derive(Parser, Debug)]
#[command(name = "reader-export")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output directory for markdown files
    #[arg(short = 'o', long, default_value = "./output")]
    pub output_dir: PathBuf,

    /// Also fetch highlights for each document (slower, more API calls)
    #[arg(long)]
    pub with_highlights: bool,

    /// Filter by categories (e.g. article pdf epub)
    #[arg(long, num_args = 1.., value_name = "CATEGORY")]
    pub categories: Option<Vec<String>>,

    /// Output layout
    #[arg(long, value_enum, default_value_t = LayoutArg::Bundled)]
    pub layout: LayoutArg,

    /// Reader API token (normally read from the environment)
    #[arg(long, env = "READWISE_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
}

/// Output layout for CLI (maps to Layout)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LayoutArg {
    /// One consolidated markdown file per bucket
    Bundled,
    /// One markdown file per document, in per-bucket folders
    Split,
}

impl From<LayoutArg> for Layout {
    fn from(layout: LayoutArg) -> Self {
        match layout {
            LayoutArg::Bundled => Layout::Bundled,
            LayoutArg::Split => Layout::Split,
        }
    }
}

impl Cli {
    /// Execute the export. The token is checked before any network call.
    pub async fn execute(self) -> Result<()> {
        let token = self.token.ok_or(ExportError::MissingToken)?;
        let client = ReaderClient::new(token);

        let opts = ExportOptions {
            output_dir: self.output_dir,
            layout: self.layout.into(),
            with_highlights: self.with_highlights,
            categories: self.categories,
        };

        let report = run_export(&client, &opts).await?;

        println!(
            "Done! {} documents ({} words) exported to {}",
            report.total_documents,
            group_thousands(report.total_words),
            opts.output_dir.display()
        );
        println!(
            "Open {} to see the index.",
            opts.output_dir.join("README.md").display()
        );

        Ok(())
    }
}
