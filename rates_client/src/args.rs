//! Command-line arguments for the rates client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::{ArgGroup, Parser};
use rates_common::CurrencyCode;

use crate::source::InputFormat;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
#[command(group(ArgGroup::new("source").required(true).args(["path", "url"])))]
pub struct Args {
    /// Path to a file with raw rate rows.
    #[arg(long)]
    pub path: Option<String>,

    /// URL of a feed serving raw rate rows. One redirect is followed.
    #[arg(long)]
    pub url: Option<String>,

    /// Layout of the rows: one row per line, or a JSON array of string arrays.
    #[arg(long, value_enum, default_value_t = InputFormat::Delimited)]
    pub format: InputFormat,

    /// Field separator for delimited rows.
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,

    /// Name of the bank, used in log output.
    #[arg(long)]
    pub bank: Option<String>,

    /// Only print these currencies. May be repeated.
    #[arg(long, value_enum, ignore_case = true)]
    pub currency: Vec<CurrencyCode>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_file_source_with_filters() {
        let args = Args::try_parse_from([
            "rates_client",
            "--path",
            "rows.txt",
            "--delimiter",
            ";",
            "--currency",
            "USD",
            "--currency",
            "eur",
        ])
        .unwrap();

        assert_eq!(args.path.as_deref(), Some("rows.txt"));
        assert_eq!(args.delimiter, ';');
        assert_eq!(args.format, InputFormat::Delimited);
        assert_eq!(args.currency, vec![CurrencyCode::USD, CurrencyCode::EUR]);
    }

    #[test]
    fn requires_exactly_one_source() {
        assert!(Args::try_parse_from(["rates_client"]).is_err());
        assert!(
            Args::try_parse_from(["rates_client", "--path", "a", "--url", "http://x"]).is_err()
        );
    }

    #[test]
    fn rejects_unknown_currency_filter() {
        assert!(
            Args::try_parse_from(["rates_client", "--path", "a", "--currency", "xyz"]).is_err()
        );
    }
}
