//! `Bank` implementations backed by a local file or by a URL feed.
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::PathBuf;

use clap::ValueEnum;
use log::info;
use rates_common::{Bank, RawRow, Result, RowParser};
use reqwest::blocking::Client;

use crate::fetch::fetch_page;

/// Layout of the raw rows handed over by a scraper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// One row per line, fields separated by a delimiter.
    Delimited,
    /// A JSON array of string arrays.
    Json,
}

/// How to split incoming text into rows.
#[derive(Debug, Clone, Copy)]
pub struct RowLayout {
    /// Row layout.
    pub format: InputFormat,
    /// Field separator, used by `InputFormat::Delimited` only.
    pub delimiter: char,
}

impl RowLayout {
    fn parse<R: BufRead>(&self, mut reader: R) -> Result<Vec<RawRow>> {
        match self.format {
            InputFormat::Delimited => RawRow::parse_delimited(reader, self.delimiter),
            InputFormat::Json => {
                let mut text = String::new();
                reader.read_to_string(&mut text)?;
                RawRow::parse_json(&text)
            }
        }
    }
}

/// Rows stored in a local file.
pub struct FileBank {
    sym: String,
    path: PathBuf,
    layout: RowLayout,
}

impl FileBank {
    /// Create a file-backed source.
    pub fn new(sym: &str, path: PathBuf, layout: RowLayout) -> Self {
        Self {
            sym: sym.to_string(),
            path,
            layout,
        }
    }
}

impl Bank for FileBank {
    fn sym(&self) -> &str {
        &self.sym
    }

    fn raw_rows(&self) -> Result<Vec<RawRow>> {
        info!("Reading rows from {}", self.path.display());
        let file = File::open(&self.path)?;
        self.layout.parse(BufReader::new(file))
    }
}

/// Rows served over HTTP.
pub struct FeedBank {
    sym: String,
    url: String,
    layout: RowLayout,
    client: Client,
}

impl FeedBank {
    /// Create a URL-backed source using `client` for retrieval.
    pub fn new(sym: &str, url: &str, layout: RowLayout, client: Client) -> Self {
        Self {
            sym: sym.to_string(),
            url: url.to_string(),
            layout,
            client,
        }
    }
}

impl Bank for FeedBank {
    fn sym(&self) -> &str {
        &self.sym
    }

    fn raw_rows(&self) -> Result<Vec<RawRow>> {
        info!("Fetching rows from {}", self.url);
        let body = fetch_page(&self.client, &self.url)?;
        self.layout.parse(Cursor::new(body))
    }
}
