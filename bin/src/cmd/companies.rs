//! Companies command implementation.

use super::PageArgs;
use crate::output;
use anyhow::Result;
use clap::{Args, Subcommand};
use earningsfeed::{Client, CompanySearchParams};

#[derive(Debug, Subcommand)]
pub(crate) enum CompaniesCommand {
    /// Get a company profile by CIK
    Get {
        /// Company CIK
        cik: u64,
    },

    /// Search companies by name or ticker
    Search(SearchArgs),
}

#[derive(Debug, Args)]
pub(crate) struct SearchArgs {
    /// Search text
    query: String,

    /// Exact ticker
    #[arg(short, long)]
    ticker: Option<String>,

    /// State code
    #[arg(long)]
    state: Option<String>,

    /// SIC code
    #[arg(long)]
    sic_code: Option<u32>,

    #[command(flatten)]
    page: PageArgs,
}

impl SearchArgs {
    fn params(&self) -> CompanySearchParams {
        CompanySearchParams {
            q: self.query.clone(),
            ticker: self.ticker.clone(),
            state: self.state.clone(),
            sic_code: self.sic_code,
            limit: self.page.limit,
            cursor: self.page.cursor.clone(),
        }
    }
}

/// Run a companies subcommand.
pub(crate) async fn run(client: &Client, command: CompaniesCommand) -> Result<()> {
    let companies = client.companies();

    match command {
        CompaniesCommand::Get { cik } => output::print_json(&companies.get(cik).await?),
        CompaniesCommand::Search(args) if args.page.all => {
            output::print_stream(companies.search_iter(args.params()), args.page.max).await
        }
        CompaniesCommand::Search(args) => {
            output::print_json(&companies.search(&args.params()).await?)
        }
    }
}
