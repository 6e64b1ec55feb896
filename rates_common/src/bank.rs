//! Rate sources.
//!
//! A `Bank` knows how to obtain the raw rows of its rate page. Turning those
//! rows into a `RateTable` is shared by every source and lives in the
//! provided `exchange_rates` method.

use log::debug;

use crate::rate_table::RateTable;
use crate::result::Result;
use crate::rows::RawRow;

/// A source of exchange-rate rows.
pub trait Bank {
    /// Short identifier of the source, used in logs.
    fn sym(&self) -> &str;

    /// Raw `[label, buy, sell, ...]` rows as published by the source.
    fn raw_rows(&self) -> Result<Vec<RawRow>>;

    /// Sell and buy rates for every currency the source publishes.
    ///
    /// Fails as a whole if any row carries an unknown currency label.
    fn exchange_rates(&self) -> Result<RateTable> {
        let rows = self.raw_rows()?;
        debug!("{}: {} raw rows", self.sym(), rows.len());
        RateTable::build(rows)
    }
}
