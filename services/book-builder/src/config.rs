//! Book configuration
//!
//! JSON document naming the symbols to build books for:
//!
//! ```json
//! {
//!   "symbols": [
//!     { "id": 1, "code": "600111", "exchange": "SH" },
//!     { "id": 2, "code": "000001", "exchange": "SZ" }
//!   ],
//!   "ladder_levels": 10,
//!   "order_capacity": 4096
//! }
//! ```

use std::collections::HashSet;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use types::symbol::{Exchange, Symbol, SymbolCode};

// ── Errors ──────────────────────────────────────────────────────────

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("No symbols configured")]
    NoSymbols,

    #[error("Symbol {exchange}:{code} configured more than once")]
    DuplicateSymbol { exchange: Exchange, code: SymbolCode },

    #[error("ladder_levels must be at least 1")]
    ZeroLadderLevels,
}

// ── Config ──────────────────────────────────────────────────────────

fn default_ladder_levels() -> usize {
    10
}

fn default_order_capacity() -> usize {
    4096
}

/// Which books to build and how to size them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookConfig {
    pub symbols: Vec<Symbol>,
    /// Levels per side printed by the ladder
    #[serde(default = "default_ladder_levels")]
    pub ladder_levels: usize,
    /// Resting-order capacity hint per side
    #[serde(default = "default_order_capacity")]
    pub order_capacity: usize,
}

impl BookConfig {
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Self {
            symbols,
            ladder_levels: default_ladder_levels(),
            order_capacity: default_order_capacity(),
        }
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: BookConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.symbols.is_empty() {
            return Err(ConfigError::NoSymbols);
        }
        if self.ladder_levels == 0 {
            return Err(ConfigError::ZeroLadderLevels);
        }

        let mut seen = HashSet::with_capacity(self.symbols.len());
        for symbol in &self.symbols {
            if !seen.insert((symbol.exchange, symbol.code)) {
                return Err(ConfigError::DuplicateSymbol {
                    exchange: symbol.exchange,
                    code: symbol.code,
                });
            }
        }
        Ok(())
    }
}

// ── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"{
        "symbols": [
            { "id": 1, "code": "600111", "exchange": "SH" },
            { "id": 2, "code": "000001", "exchange": "SZ" }
        ]
    }"#;

    #[test]
    fn test_defaults_applied() {
        let config = BookConfig::from_json_str(SAMPLE).unwrap();
        assert_eq!(config.symbols.len(), 2);
        assert_eq!(config.symbols[0].exchange, Exchange::Sse);
        assert_eq!(config.symbols[1].code.as_str(), "000001");
        assert_eq!(config.ladder_levels, 10);
        assert_eq!(config.order_capacity, 4096);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let config = BookConfig::load(file.path()).unwrap();
        assert_eq!(config.symbols.len(), 2);
    }

    #[test]
    fn test_missing_file() {
        let err = BookConfig::load("/nonexistent/books.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_rejects_empty_symbols() {
        let err = BookConfig::from_json_str(r#"{ "symbols": [] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::NoSymbols));
    }

    #[test]
    fn test_rejects_duplicate_symbol() {
        let json = r#"{
            "symbols": [
                { "id": 1, "code": "600111", "exchange": "SH" },
                { "id": 2, "code": "600111", "exchange": "SH" }
            ]
        }"#;
        let err = BookConfig::from_json_str(json).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::DuplicateSymbol { exchange: Exchange::Sse, code } if code.as_str() == "600111"
        ));
        assert_eq!(err.to_string(), "Symbol SH:600111 configured more than once");
    }

    #[test]
    fn test_same_code_on_both_exchanges_is_allowed() {
        let json = r#"{
            "symbols": [
                { "id": 1, "code": "000001", "exchange": "SH" },
                { "id": 2, "code": "000001", "exchange": "SZ" }
            ]
        }"#;
        let config = BookConfig::from_json_str(json).unwrap();
        assert_eq!(config.symbols.len(), 2);
    }

    #[test]
    fn test_rejects_zero_ladder_levels() {
        let json = r#"{
            "symbols": [{ "id": 1, "code": "600111", "exchange": "SH" }],
            "ladder_levels": 0
        }"#;
        assert!(matches!(
            BookConfig::from_json_str(json).unwrap_err(),
            ConfigError::ZeroLadderLevels
        ));
    }

    #[test]
    fn test_rejects_bad_code() {
        let json = r#"{ "symbols": [{ "id": 1, "code": "123456789", "exchange": "SH" }] }"#;
        assert!(matches!(
            BookConfig::from_json_str(json).unwrap_err(),
            ConfigError::Parse(_)
        ));
    }
}
