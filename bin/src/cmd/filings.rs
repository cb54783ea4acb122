//! Filings command implementation.

use super::PageArgs;
use crate::output;
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use earningsfeed::{Client, FilingsParams};

#[derive(Debug, Subcommand)]
pub(crate) enum FilingsCommand {
    /// List filings
    List(ListArgs),

    /// Get a filing with its documents
    Get {
        /// Accession number (NNNNNNNNNN-YY-NNNNNN)
        accession_number: String,
    },
}

#[derive(Debug, Args)]
pub(crate) struct ListArgs {
    /// Form types
    #[arg(short, long, value_delimiter = ',')]
    forms: Vec<String>,

    /// Ticker symbol
    #[arg(short, long)]
    ticker: Option<String>,

    /// Filer CIK
    #[arg(long)]
    cik: Option<u64>,

    /// Feed status
    #[arg(long)]
    status: Option<String>,

    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    start: Option<NaiveDate>,

    /// End date (YYYY-MM-DD)
    #[arg(long)]
    end: Option<NaiveDate>,

    /// Free-text search
    #[arg(short, long)]
    query: Option<String>,

    #[command(flatten)]
    page: PageArgs,
}

impl ListArgs {
    fn params(&self) -> FilingsParams {
        FilingsParams {
            forms: self.forms.clone(),
            ticker: self.ticker.clone(),
            cik: self.cik,
            status: self.status.clone(),
            start_date: self.start,
            end_date: self.end,
            q: self.query.clone(),
            limit: self.page.limit,
            cursor: self.page.cursor.clone(),
        }
    }
}

/// Run a filings subcommand.
pub(crate) async fn run(client: &Client, command: FilingsCommand) -> Result<()> {
    let filings = client.filings();

    match command {
        FilingsCommand::List(args) if args.page.all => {
            output::print_stream(filings.iter(args.params()), args.page.max).await
        }
        FilingsCommand::List(args) => output::print_json(&filings.list(&args.params()).await?),
        FilingsCommand::Get { accession_number } => {
            output::print_json(&filings.get(&accession_number).await?)
        }
    }
}
