//! Raw rows as produced by bank page scrapers, and readers for them.
//!
//! A row is `[currency label, buy rate, sell rate, ...]`; anything after the
//! third field is carried along but never read.

use std::io::BufRead;

use csv::{ReaderBuilder, Trim};
use serde::{Deserialize, Serialize};

use crate::error::RatesError;

/// One scraped table row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRow(pub Vec<String>);

impl AsRef<[String]> for RawRow {
    fn as_ref(&self) -> &[String] {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for RawRow {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        RawRow(iter.into_iter().map(Into::into).collect())
    }
}

/// Trait providing readers for raw rows.
pub trait RowParser: Sized {
    /// Parses rows from a buffered reader, one row per non-empty record.
    ///
    /// Fields are split on the ASCII `delimiter`, may be double-quoted, and
    /// are trimmed. Rows may have any number of fields.
    fn parse_delimited<R: BufRead>(reader: R, delimiter: char) -> Result<Vec<Self>, RatesError>;

    /// Parses rows from a JSON array of string arrays.
    fn parse_json(text: &str) -> Result<Vec<Self>, RatesError>;
}

impl RowParser for RawRow {
    fn parse_delimited<R: BufRead>(reader: R, delimiter: char) -> Result<Vec<Self>, RatesError> {
        if !delimiter.is_ascii() {
            return Err(RatesError::Format(format!("Delimiter {:?} is not ASCII", delimiter)));
        }
        let mut csv_reader = ReaderBuilder::new()
            .delimiter(delimiter as u8)
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let mut rows = Vec::new();
        for record_result in csv_reader.records() {
            let record = record_result?;
            if record.iter().all(str::is_empty) {
                continue;
            }
            rows.push(record.iter().collect());
        }
        Ok(rows)
    }

    fn parse_json(text: &str) -> Result<Vec<Self>, RatesError> {
        Ok(serde_json::from_str(text)?)
    }
}
