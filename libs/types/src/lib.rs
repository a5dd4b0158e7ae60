//! Types library for level-2 book reconstruction
//!
//! Typed feed events as handed over by the exchange decoder, plus the
//! symbol and numeric types the order book is built on.
//!
//! # Modules
//! - `ids`: Integer identifiers carried by the feed (order, trade, channel)
//! - `numeric`: Decimal price and integer quantity types
//! - `symbol`: Exchange tag, fixed-width symbol code, symbol identity
//! - `order`: Order events (new / delete) and side codes
//! - `trade`: Trade events (execution / cancel)
//! - `clock`: Exchange clock helpers
//! - `errors`: Error taxonomy

pub mod ids;
pub mod numeric;
pub mod symbol;
pub mod order;
pub mod trade;
pub mod clock;
pub mod errors;
