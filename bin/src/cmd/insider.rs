//! Insider command implementation.

use super::PageArgs;
use crate::output;
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand, ValueEnum};
use earningsfeed::{Client, Direction, InsiderParams};

#[derive(Debug, Subcommand)]
pub(crate) enum InsiderCommand {
    /// List insider transactions
    List(ListArgs),
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DirectionArg {
    Buy,
    Sell,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Buy => Self::Buy,
            DirectionArg::Sell => Self::Sell,
        }
    }
}

#[derive(Debug, Args)]
pub(crate) struct ListArgs {
    /// Issuer ticker
    #[arg(short, long)]
    ticker: Option<String>,

    /// Issuer CIK
    #[arg(long)]
    cik: Option<u64>,

    /// Reporting person CIK
    #[arg(long)]
    person_cik: Option<u64>,

    /// Buys or sells only
    #[arg(short, long, value_enum)]
    direction: Option<DirectionArg>,

    /// Transaction codes (e.g. P,S)
    #[arg(short, long, value_delimiter = ',')]
    codes: Vec<String>,

    /// Minimum transaction value in dollars
    #[arg(long)]
    min_value: Option<f64>,

    /// Maximum transaction value in dollars
    #[arg(long)]
    max_value: Option<f64>,

    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    start: Option<NaiveDate>,

    /// End date (YYYY-MM-DD)
    #[arg(long)]
    end: Option<NaiveDate>,

    #[command(flatten)]
    page: PageArgs,
}

impl ListArgs {
    fn params(&self) -> InsiderParams {
        InsiderParams {
            ticker: self.ticker.clone(),
            cik: self.cik,
            person_cik: self.person_cik,
            direction: self.direction.map(Into::into),
            codes: self.codes.clone(),
            min_value: self.min_value,
            max_value: self.max_value,
            start_date: self.start,
            end_date: self.end,
            limit: self.page.limit,
            cursor: self.page.cursor.clone(),
        }
    }
}

/// Run an insider subcommand.
pub(crate) async fn run(client: &Client, command: InsiderCommand) -> Result<()> {
    let insider = client.insider();

    match command {
        InsiderCommand::List(args) if args.page.all => {
            output::print_stream(insider.iter(args.params()), args.page.max).await
        }
        InsiderCommand::List(args) => output::print_json(&insider.list(&args.params()).await?),
    }
}
