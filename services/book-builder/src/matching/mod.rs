//! Matching simulation module
//!
//! Projects how the aggregated book would look after crossing liquidity
//! traded out, without touching the resting queues.

pub mod crossing;

pub use crossing::{can_match, simulate, CrossedDepth};
