//! JSON output helpers.

use anyhow::Result;
use futures::{StreamExt, TryStreamExt, stream::BoxStream};
use serde::Serialize;
use tracing::info;

/// Print a value as pretty JSON.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Drain a record stream, printing one compact JSON object per line.
pub(crate) async fn print_stream<T: Serialize>(
    stream: BoxStream<'static, earningsfeed::Result<T>>,
    max: Option<usize>,
) -> Result<()> {
    let mut stream = stream.take(max.unwrap_or(usize::MAX));
    let mut count = 0usize;

    while let Some(record) = stream.try_next().await? {
        println!("{}", serde_json::to_string(&record)?);
        count += 1;
    }

    info!(count, "finished");
    Ok(())
}
