//!
//! Currency resolution and rate table building shared by every rate source.
//!
//! This crate aggregates:
//! - `error` — unified error type `RatesError` used across the workspace.
//! - `result` — handy `Result<T, RatesError>` alias.
//! - `currency` — ISO currency codes and the label resolver.
//! - `numeric` — lenient parsing of rate cells.
//! - `rows` — raw scraped rows and readers for them.
//! - `rate_table` — the sell/buy `RateTable` and its builder.
//! - `bank` — the `Bank` trait implemented by rate sources.
#![warn(missing_docs)]
pub mod error;
pub mod result;
pub mod currency;
pub mod numeric;
pub mod rows;
pub mod rate_table;
pub mod bank;

pub use error::RatesError;
pub use result::Result;
pub use currency::{CurrencyCode, resolve};
pub use rate_table::RateTable;
pub use rows::{RawRow, RowParser};
pub use bank::Bank;
