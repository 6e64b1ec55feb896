//! ISO currency codes and the label resolver shared by every rate source.
//!
//! Bank pages name currencies inconsistently ("US Dollar", "U.S. Dollar",
//! "Swidish Krona", "CANAD. Dollar"). `resolve` maps such a label onto a
//! `CurrencyCode` by walking an ordered table of patterns; the first pattern
//! that occurs anywhere in the label wins.

use clap::ValueEnum;
use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::error::RatesError;
use crate::result::Result;

/// Set of supported ISO currency codes.
#[allow(missing_docs)]
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    ValueEnum,
    Display,
    EnumString,
    EnumIter,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
)]
#[value(rename_all = "lower")]
#[strum(ascii_case_insensitive)]
pub enum CurrencyCode {
    AED,
    AUD,
    BHD,
    CAD,
    CHF,
    CNY,
    DKK,
    EUR,
    GBP,
    JOD,
    JPY,
    KWD,
    NOK,
    OMR,
    QAR,
    SAR,
    SEK,
    USD,
}

/// Label patterns in match order. Every pattern except `Chinese` is
/// case-insensitive; `Sterl.` accepts any character after `Sterl`.
const RULES: &[(&str, CurrencyCode)] = &[
    (r"(?i)UAE|EMIRATES|Dirham|AED", CurrencyCode::AED),
    (r"(?i)Australian", CurrencyCode::AUD),
    (r"(?i)Bahrain|BHD", CurrencyCode::BHD),
    (r"(?i)Canadian|CANAD\. Dollar", CurrencyCode::CAD),
    (r"(?i)Swiss|CHF", CurrencyCode::CHF),
    (r"Chinese", CurrencyCode::CNY),
    (r"(?i)Danish", CurrencyCode::DKK),
    (r"(?i)Euro|EUR", CurrencyCode::EUR),
    (r"(?i)British|Sterl.|GBP", CurrencyCode::GBP),
    (r"(?i)Jordanian", CurrencyCode::JOD),
    (r"(?i)Japanese|JPY|YEN", CurrencyCode::JPY),
    (r"(?i)Kuwait", CurrencyCode::KWD),
    (r"(?i)Norwegian|NORWEG\.", CurrencyCode::NOK),
    (r"(?i)Omani", CurrencyCode::OMR),
    (r"(?i)Qatar", CurrencyCode::QAR),
    (r"(?i)SAR|Saudi", CurrencyCode::SAR),
    (r"(?i)Swidish|Swedish", CurrencyCode::SEK),
    (r"(?i)U(\.)?S(\.)? Dollar|USD", CurrencyCode::USD),
];

static COMPILED_RULES: Lazy<Vec<(Regex, CurrencyCode)>> = Lazy::new(|| {
    RULES
        .iter()
        .map(|(pattern, code)| {
            let re = Regex::new(pattern).expect("Invalid currency label pattern");
            (re, *code)
        })
        .collect()
});

/// Resolve a free-text currency label to its ISO code.
///
/// Returns `RatesError::UnrecognizedCurrency` carrying the label when no
/// pattern matches.
pub fn resolve(label: &str) -> Result<CurrencyCode> {
    let code = COMPILED_RULES
        .iter()
        .find(|(re, _)| re.is_match(label))
        .map(|(_, code)| *code)
        .ok_or_else(|| RatesError::UnrecognizedCurrency(label.to_string()))?;
    trace!("Resolved {:?} -> {}", label, code);
    Ok(code)
}
