//! Order book infrastructure module
//!
//! Contains price levels and the per-side resting order queues.

pub mod price_level;
pub mod side_book;

pub use price_level::PriceLevel;
pub use side_book::{ExecutionOutcome, SideBook};
