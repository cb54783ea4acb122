//! CLI subcommand modules.
//!
//! One module per API resource. List commands print a single page as JSON, or
//! with `--all` stream every record as one JSON object per line.

pub(crate) mod companies;
pub(crate) mod filings;
pub(crate) mod insider;
pub(crate) mod institutional;

use clap::Args;

/// Pagination flags shared by list commands.
#[derive(Debug, Args)]
pub(crate) struct PageArgs {
    /// Page size
    #[arg(short, long)]
    pub(crate) limit: Option<u32>,

    /// Continue from a cursor returned by a previous page
    #[arg(long, conflicts_with = "all")]
    pub(crate) cursor: Option<String>,

    /// Follow cursors and print every matching record
    #[arg(long)]
    pub(crate) all: bool,

    /// Stop after this many records (with --all)
    #[arg(long, requires = "all")]
    pub(crate) max: Option<usize>,
}
