//! Institutional holdings command implementation.

use super::PageArgs;
use crate::output;
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand, ValueEnum};
use earningsfeed::{Client, InstitutionalParams, PutCall};

#[derive(Debug, Subcommand)]
pub(crate) enum InstitutionalCommand {
    /// List 13F holdings
    List(ListArgs),
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PutCallArg {
    Put,
    Call,
}

impl From<PutCallArg> for PutCall {
    fn from(arg: PutCallArg) -> Self {
        match arg {
            PutCallArg::Put => Self::Put,
            PutCallArg::Call => Self::Call,
        }
    }
}

#[derive(Debug, Args)]
pub(crate) struct ListArgs {
    /// Issuer ticker
    #[arg(short, long)]
    ticker: Option<String>,

    /// Security CUSIP
    #[arg(long)]
    cusip: Option<String>,

    /// Reporting manager CIK
    #[arg(long)]
    manager_cik: Option<u64>,

    /// Report period (quarter end, YYYY-MM-DD)
    #[arg(long)]
    report_period: Option<NaiveDate>,

    /// Minimum position value in dollars
    #[arg(long)]
    min_value: Option<u64>,

    /// Minimum share count
    #[arg(long)]
    min_shares: Option<u64>,

    /// Option positions only
    #[arg(long, value_enum)]
    put_call: Option<PutCallArg>,

    #[command(flatten)]
    page: PageArgs,
}

impl ListArgs {
    fn params(&self) -> InstitutionalParams {
        InstitutionalParams {
            ticker: self.ticker.clone(),
            cusip: self.cusip.clone(),
            manager_cik: self.manager_cik,
            report_period: self.report_period,
            min_value: self.min_value,
            min_shares: self.min_shares,
            put_call: self.put_call.map(Into::into),
            limit: self.page.limit,
            cursor: self.page.cursor.clone(),
        }
    }
}

/// Run an institutional subcommand.
pub(crate) async fn run(client: &Client, command: InstitutionalCommand) -> Result<()> {
    let institutional = client.institutional();

    match command {
        InstitutionalCommand::List(args) if args.page.all => {
            output::print_stream(institutional.iter(args.params()), args.page.max).await
        }
        InstitutionalCommand::List(args) => {
            output::print_json(&institutional.list(&args.params()).await?)
        }
    }
}
