pub mod cloudwatch;
pub mod config;
pub mod error;
pub mod filter;
pub mod format;
pub mod lister;
pub mod status;

use std::io::Write;

use log::{debug, error, info};

use crate::cloudwatch::create_cloudwatch_lister;
use crate::config::CheckConfig;
use crate::error::CheckError;
use crate::filter::MetricFilter;
use crate::format::format_descriptor;
use crate::lister::MetricLister;
use crate::status::CheckOutcome;

pub const PAGE_LIMIT_MESSAGE: &str = "max allowed result pages exceeded, increase the page limit";

/// Fetch pages until the catalog is exhausted or the page limit is hit.
///
/// The page counter grows whenever a continuation token is seen and is
/// compared with `max_pages` before the next fetch, so no more than
/// `max_pages` requests are sent.
pub async fn run_check<L, W>(
    lister: &mut L,
    filter: &MetricFilter,
    max_pages: u32,
    out: &mut W,
) -> Result<CheckOutcome, CheckError>
where
    L: MetricLister + ?Sized,
    W: Write,
{
    let mut pages_fetched: u32 = 0;
    let mut current_token: Option<String> = None;

    loop {
        debug!("Fetching page after {} continuations", pages_fetched);
        let page = match lister.fetch_page(filter, current_token.as_deref()).await {
            Ok(page) => page,
            Err(err) => {
                error!("Failed to list metrics: {}", err);
                return Err(CheckError::Transport(err));
            }
        };

        for metric in &page.metrics {
            writeln!(out, "{}", format_descriptor(metric))?;
        }

        match page.continuation_token {
            None => return Ok(CheckOutcome::ok()),
            Some(token) => {
                pages_fetched += 1;
                current_token = Some(token);
                if pages_fetched >= max_pages {
                    info!("Stopping after {} pages with more results pending", pages_fetched);
                    return Ok(CheckOutcome::warning(PAGE_LIMIT_MESSAGE));
                }
            }
        }
    }
}

/// Entry point: validate, acquire credentials, list metrics and classify
pub async fn main_runner<W: Write>(config: CheckConfig, out: &mut W) -> CheckOutcome {
    info!("Checking arguments");
    // argument errors must not trigger any network activity
    let filter = match config.filter() {
        Ok(filter) => filter,
        Err(err) => return err.into(),
    };
    let mut lister = match create_cloudwatch_lister(&config.cloudwatch).await {
        Ok(lister) => lister,
        Err(err) => return err.into(),
    };
    let outcome = run_check(&mut lister, &filter, config.max_pages, out)
        .await
        .unwrap_or_else(CheckOutcome::from);
    info!("Check finished with {}", outcome.state);
    outcome
}
