//! Error types shared between the core and the client.
//!
//! The `RatesError` enum unifies the failure cases for currency resolution,
//! row reading and page retrieval, allowing both crates to propagate a single
//! error type.
use std::io;

use thiserror::Error;

/// Unified error type shared by the core and the client.
#[derive(Error, Debug)]
pub enum RatesError {
    /// A currency label matched none of the known currency rules.
    #[error("Unknown currency {0}")]
    UnrecognizedCurrency(String),

    /// The bank page answered with a non-success HTTP status code.
    #[error("Response error: HTTP {0}")]
    Response(u16),

    /// The request could not be sent or its body could not be read.
    #[error("Request error: {0}")]
    Request(String),

    /// I/O error originating from the standard library or files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while reading delimited rows.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Failure while decoding rows via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Generic formatting/validation error with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),
}
