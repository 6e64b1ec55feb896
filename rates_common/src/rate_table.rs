//! Sell/buy rate table keyed by ISO currency code.
//!
//! `RateTable::build` turns raw rows into the table in a single pass. It is
//! all-or-nothing: one unresolvable currency label fails the whole build, so a
//! bank never reports a table with a currency silently missing.

use std::collections::BTreeMap;

use log::debug;
use serde::Serialize;

use crate::currency::{CurrencyCode, resolve};
use crate::numeric::parse_rate;
use crate::result::Result;

/// Exchange rates of one bank, for selling and for buying.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RateTable {
    sell: BTreeMap<CurrencyCode, f64>,
    buy: BTreeMap<CurrencyCode, f64>,
}

impl RateTable {
    /// Build a table from rows shaped `[label, buy, sell, ...]`.
    ///
    /// Rate cells are parsed leniently (see [`parse_rate`]); missing rate
    /// cells count as `0.0`. A later row for the same currency overwrites an
    /// earlier one.
    pub fn build<I, R, S>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut table = RateTable::default();

        for row in rows {
            let fields = row.as_ref();

            let sell_rate = field(fields, 2).map(parse_rate).unwrap_or(0.0);
            let buy_rate = field(fields, 1).map(parse_rate).unwrap_or(0.0);
            let currency = resolve(field(fields, 0).unwrap_or_default())?;

            table.sell.insert(currency, sell_rate);
            table.buy.insert(currency, buy_rate);
        }
        debug!("Built rate table with {} currencies", table.len());
        Ok(table)
    }

    /// Sell rates by currency.
    pub fn sell(&self) -> &BTreeMap<CurrencyCode, f64> {
        &self.sell
    }

    /// Buy rates by currency.
    pub fn buy(&self) -> &BTreeMap<CurrencyCode, f64> {
        &self.buy
    }

    /// `(buy, sell)` pair for one currency.
    pub fn rates(&self, code: CurrencyCode) -> Option<(f64, f64)> {
        Some((*self.buy.get(&code)?, *self.sell.get(&code)?))
    }

    /// Copy of the table holding only the given currencies.
    pub fn restrict(&self, codes: &[CurrencyCode]) -> RateTable {
        let keep = |map: &BTreeMap<CurrencyCode, f64>| -> BTreeMap<CurrencyCode, f64> {
            map.iter()
                .filter(|&(code, _)| codes.contains(code))
                .map(|(code, rate)| (*code, *rate))
                .collect()
        };
        RateTable {
            sell: keep(&self.sell),
            buy: keep(&self.buy),
        }
    }

    /// Number of currencies in the table.
    pub fn len(&self) -> usize {
        self.sell.len()
    }

    /// Whether the table holds no currency at all.
    pub fn is_empty(&self) -> bool {
        self.sell.is_empty()
    }
}

fn field<S: AsRef<str>>(fields: &[S], index: usize) -> Option<&str> {
    fields.get(index).map(|f| f.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RatesError;
    use crate::rows::RawRow;

    #[test]
    fn builds_sell_and_buy_maps() {
        let table = RateTable::build([
            ["Euro", "1.05", "1.10"],
            ["Japanese Yen", "150.2", "151.0"],
        ])
        .unwrap();

        assert_eq!(table.sell().len(), 2);
        assert_eq!(table.sell()[&CurrencyCode::EUR], 1.10);
        assert_eq!(table.sell()[&CurrencyCode::JPY], 151.0);
        assert_eq!(table.buy()[&CurrencyCode::EUR], 1.05);
        assert_eq!(table.buy()[&CurrencyCode::JPY], 150.2);
        assert_eq!(table.rates(CurrencyCode::JPY), Some((150.2, 151.0)));
        assert_eq!(table.rates(CurrencyCode::USD), None);
    }

    #[test]
    fn empty_input_gives_empty_table() {
        let table = RateTable::build(Vec::<Vec<String>>::new()).unwrap();
        assert!(table.is_empty());
        assert!(table.buy().is_empty());
        assert_eq!(table, RateTable::default());
    }

    #[test]
    fn later_duplicate_row_overwrites_earlier() {
        let table = RateTable::build([
            ["US Dollar", "48.30", "48.40"],
            ["Euro", "52.1", "52.6"],
            ["U.S. Dollar", "48.50", "48.60"],
        ])
        .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.rates(CurrencyCode::USD), Some((48.50, 48.60)));
    }

    #[test]
    fn malformed_rates_become_zero() {
        let table = RateTable::build([vec!["Euro", "N/A", "1.10 *"], vec!["Swiss Franc"]]).unwrap();

        assert_eq!(table.rates(CurrencyCode::EUR), Some((0.0, 1.10)));
        assert_eq!(table.rates(CurrencyCode::CHF), Some((0.0, 0.0)));
    }

    #[test]
    fn extra_fields_are_ignored() {
        let row = RawRow::from_iter(["Kuwaiti Dinar", "157.2", "158.9", "160.0", "note"]);
        let table = RateTable::build(vec![row]).unwrap();
        assert_eq!(table.rates(CurrencyCode::KWD), Some((157.2, 158.9)));
    }

    #[test]
    fn unknown_currency_fails_whole_build_at_any_position() {
        let good = ["Euro", "1.05", "1.10"];
        let bad = ["Bad Currency", "1.0", "1.0"];

        for rows in [vec![good, bad], vec![bad, good], vec![good, bad, good]] {
            match RateTable::build(rows) {
                Err(RatesError::UnrecognizedCurrency(label)) => assert_eq!(label, "Bad Currency"),
                other => panic!("expected UnrecognizedCurrency, got {other:?}"),
            }
        }
    }

    #[test]
    fn row_without_label_is_unrecognized() {
        let rows: Vec<Vec<&str>> = vec![vec![]];
        assert!(matches!(
            RateTable::build(rows),
            Err(RatesError::UnrecognizedCurrency(_))
        ));
    }

    #[test]
    fn restrict_keeps_requested_currencies() {
        let table = RateTable::build([
            ["Euro", "1.05", "1.10"],
            ["Japanese Yen", "150.2", "151.0"],
            ["British Pound", "1.25", "1.27"],
        ])
        .unwrap();

        let subset = table.restrict(&[CurrencyCode::GBP, CurrencyCode::USD]);
        assert_eq!(subset.len(), 1);
        assert_eq!(subset.rates(CurrencyCode::GBP), Some((1.25, 1.27)));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn serializes_with_iso_keys() {
        let table = RateTable::build([["Euro", "1.05", "1.10"]]).unwrap();
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json, serde_json::json!({"sell": {"EUR": 1.10}, "buy": {"EUR": 1.05}}));
    }
}
