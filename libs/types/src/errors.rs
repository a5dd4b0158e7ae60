//! Error types for feed data conversion
//!
//! The order book itself never fails; these cover parsing at the edges
//! (config files, decoder glue).

use thiserror::Error;

/// Errors raised while building typed feed values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Invalid symbol code {code:?}: {reason}")]
    InvalidSymbolCode { code: String, reason: String },

    #[error("Unknown exchange tag: {0}")]
    UnknownExchange(String),
}
