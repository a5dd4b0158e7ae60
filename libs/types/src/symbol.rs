//! Symbol identity and exchange tags
//!
//! A `Symbol` is routing/display metadata only; the matching rules key off
//! the `Exchange` tag carried on every event.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::TypeError;

/// Width of a symbol code in bytes
pub const SYMBOL_CODE_LEN: usize = 8;

/// Source exchange of a feed event
///
/// The two venues disagree on how cancels and executions are signalled:
/// - `Sse` deletes orders through an order event with type `'D'` and
///   correlates executions by origin order id and business sequence
/// - `Szse` cancels through a trade event flagged `'4'` and correlates
///   by the channel order id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Exchange {
    #[serde(rename = "SH")]
    Sse,
    #[serde(rename = "SZ")]
    Szse,
}

impl Exchange {
    pub fn tag(&self) -> &'static str {
        match self {
            Exchange::Sse => "SH",
            Exchange::Szse => "SZ",
        }
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Exchange {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SH" | "SSE" => Ok(Exchange::Sse),
            "SZ" | "SZSE" => Ok(Exchange::Szse),
            other => Err(TypeError::UnknownExchange(other.to_string())),
        }
    }
}

/// Fixed-width (8 byte) instrument code, e.g. `600111`
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SymbolCode([u8; SYMBOL_CODE_LEN]);

impl SymbolCode {
    /// Build a code from ASCII text of at most 8 bytes
    pub fn new(code: &str) -> Result<Self, TypeError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(TypeError::InvalidSymbolCode {
                code: code.to_string(),
                reason: "empty".to_string(),
            });
        }
        if !code.is_ascii() {
            return Err(TypeError::InvalidSymbolCode {
                code: code.to_string(),
                reason: "not ascii".to_string(),
            });
        }
        if code.len() > SYMBOL_CODE_LEN {
            return Err(TypeError::InvalidSymbolCode {
                code: code.to_string(),
                reason: format!("longer than {} bytes", SYMBOL_CODE_LEN),
            });
        }

        let mut bytes = [0u8; SYMBOL_CODE_LEN];
        bytes[..code.len()].copy_from_slice(code.as_bytes());
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; SYMBOL_CODE_LEN] {
        &self.0
    }

    /// The code without trailing padding
    pub fn as_str(&self) -> &str {
        let len = self.0.iter().position(|&b| b == 0).unwrap_or(SYMBOL_CODE_LEN);
        // Construction guarantees ASCII
        std::str::from_utf8(&self.0[..len]).unwrap_or("")
    }
}

impl FromStr for SymbolCode {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for SymbolCode {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<SymbolCode> for String {
    fn from(code: SymbolCode) -> Self {
        code.as_str().to_string()
    }
}

impl fmt::Display for SymbolCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for SymbolCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SymbolCode({})", self.as_str())
    }
}

/// Instrument identity: numeric id, code, listing exchange
///
/// Immutable after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol {
    pub id: u32,
    pub code: SymbolCode,
    pub exchange: Exchange,
}

impl Symbol {
    pub fn new(id: u32, code: SymbolCode, exchange: Exchange) -> Self {
        Self { id, code, exchange }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.code, self.exchange)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_code_roundtrip_text() {
        let code = SymbolCode::new("600111").unwrap();
        assert_eq!(code.as_str(), "600111");
        assert_eq!(code.to_string(), "600111");
    }

    #[test]
    fn test_symbol_code_too_long() {
        assert!(SymbolCode::new("123456789").is_err());
        assert!(SymbolCode::new("").is_err());
    }

    #[test]
    fn test_symbol_code_serializes_as_string() {
        let code = SymbolCode::new("000001").unwrap();
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"000001\"");

        let back: SymbolCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, code);
        assert!(serde_json::from_str::<SymbolCode>("\"WAYTOOLONG\"").is_err());
    }

    #[test]
    fn test_exchange_tags() {
        assert_eq!("sh".parse::<Exchange>().unwrap(), Exchange::Sse);
        assert_eq!("SZSE".parse::<Exchange>().unwrap(), Exchange::Szse);
        assert!("NYSE".parse::<Exchange>().is_err());
        assert_eq!(serde_json::to_string(&Exchange::Szse).unwrap(), "\"SZ\"");
    }

    #[test]
    fn test_symbol_display() {
        let symbol = Symbol::new(1, SymbolCode::new("600111").unwrap(), Exchange::Sse);
        assert_eq!(symbol.to_string(), "600111.SH");
    }
}
