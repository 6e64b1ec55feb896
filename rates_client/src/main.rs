//! Rates Client — loads the raw rate rows of one bank from a file or a URL feed,
//! normalizes currency labels to ISO codes and prints the resulting sell/buy
//! table as JSON to stdout.
//!
//! Usage example (CLI):
//! ```bash
//! rates_client --path ./rows.txt --bank NBE
//! rates_client --url https://example.com/rates.json --format json --currency usd --currency eur
//! ```
//!
//! Delimited input holds one `label,buy,sell[,...]` row per line; see `source`
//! for the supported layouts.
#![warn(missing_docs)]
mod args;
mod fetch;
mod source;

use crate::args::Args;
use crate::fetch::build_client;
use crate::source::{FeedBank, FileBank, RowLayout};
use clap::Parser;
use log::{error, info};
use rates_common::{Bank, RatesError, Result};
use std::path::PathBuf;

fn main() -> Result<(), RatesError> {
    init_logger();
    let args = Args::parse();

    let layout = RowLayout {
        format: args.format,
        delimiter: args.delimiter,
    };
    let bank: Box<dyn Bank> = match (&args.path, &args.url) {
        (Some(path), _) => {
            let path = normalize_path(path);
            let sym = args.bank.clone().unwrap_or_else(|| path.display().to_string());
            Box::new(FileBank::new(&sym, path, layout))
        }
        (None, Some(url)) => {
            let sym = args.bank.clone().unwrap_or_else(|| url.clone());
            Box::new(FeedBank::new(&sym, url, layout, build_client()?))
        }
        (None, None) => unreachable!("clap requires one of --path or --url"),
    };

    let table = match bank.exchange_rates() {
        Ok(table) => table,
        Err(e) => {
            error!("{}: failed to get exchange rates: {}", bank.sym(), e);
            return Err(e);
        }
    };
    info!("{}: {} currencies", bank.sym(), table.len());

    let table = if args.currency.is_empty() {
        table
    } else {
        table.restrict(&args.currency)
    };
    println!("{}", serde_json::to_string_pretty(&table)?);
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}
