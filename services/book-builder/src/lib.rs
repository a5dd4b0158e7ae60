//! Book Builder
//!
//! Reconstructs per-symbol limit order books from the Shanghai and
//! Shenzhen order/trade feeds, which may deliver a cancel or execution
//! ahead of the order it references.
//!
//! # Architecture
//!
//! ```text
//!   decoded Order / Trade
//!            │
//!      ┌─────▼─────┐
//!      │  BookSet  │  ← routes by exchange + ticker
//!      └─────┬─────┘
//!            │
//!      ┌─────▼─────┐      ┌────────────────┐
//!      │ OrderBook │ ◄──► │ LateEventStore │
//!      └─────┬─────┘      └────────────────┘
//!            │
//!   ┌────────┼──────────┐
//!   │        │          │
//! ┌─▼───┐ ┌──▼──────┐ ┌─▼────────┐
//! │Depth│ │Crossing │ │ Snapshot │
//! └─────┘ └─────────┘ └──────────┘
//! ```
//!
//! **Key Invariants:**
//! - Resting quantity is always positive
//! - A book key rests at most once per side
//! - The late-event store never names a resting order
//! - Depth and crossing projections never mutate the queues

pub mod book;
pub mod config;
pub mod depth;
pub mod engine;
pub mod events;
pub mod ladder;
pub mod matching;
pub mod reconcile;
pub mod registry;
pub mod rules;
pub mod snapshot;
pub mod stats;

pub use config::{BookConfig, ConfigError};
pub use depth::DepthLevel;
pub use engine::OrderBook;
pub use events::FeedEvent;
pub use matching::CrossedDepth;
pub use registry::BookSet;
pub use snapshot::BookSnapshot;
pub use stats::BookStats;
