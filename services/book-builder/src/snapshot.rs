//! Checksummed book snapshots
//!
//! Captures the aggregated state of one book with a SHA-256 checksum over
//! a deterministic rendering, so two replays of the same feed can be
//! compared by checksum alone.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use types::ids::Timestamp;
use types::symbol::Symbol;

use crate::depth::DepthLevel;
use crate::engine::OrderBook;

/// Aggregated state of a book at one point in the feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSnapshot {
    pub symbol: Symbol,
    /// Bid levels in descending price order (best first).
    pub bids: Vec<DepthLevel>,
    /// Ask levels in ascending price order (best first).
    pub asks: Vec<DepthLevel>,
    /// Resting orders across both sides
    pub size: usize,
    pub last_msg_time: Timestamp,
    /// SHA-256 checksum of the snapshot content, hex encoded
    pub checksum: String,
}

impl BookSnapshot {
    /// Capture the current state of `book`
    pub fn capture(book: &OrderBook) -> Self {
        let bids = book.depth_bid();
        let asks = book.depth_ask();
        let size = book.size();
        let last_msg_time = book.last_message_time();
        let checksum = compute_checksum(&bids, &asks, size, last_msg_time);

        Self {
            symbol: *book.symbol(),
            bids,
            asks,
            size,
            last_msg_time,
            checksum,
        }
    }

    /// Whether the checksum matches the content
    pub fn verify(&self) -> bool {
        self.checksum == compute_checksum(&self.bids, &self.asks, self.size, self.last_msg_time)
    }
}

/// Compute a SHA-256 checksum over the book levels, size and time.
fn compute_checksum(
    bids: &[DepthLevel],
    asks: &[DepthLevel],
    size: usize,
    last_msg_time: Timestamp,
) -> String {
    let mut hasher = Sha256::new();

    for levels in [bids, asks] {
        for level in levels {
            hasher.update(level.price.to_string().as_bytes());
            hasher.update(b":");
            hasher.update(level.quantity.to_le_bytes());
            hasher.update(b":");
            hasher.update(level.order_count.to_le_bytes());
            hasher.update(b"|");
        }
        hasher.update(b"---");
    }

    hasher.update((size as u64).to_le_bytes());
    hasher.update(last_msg_time.to_le_bytes());

    format!("{:x}", hasher.finalize())
}
