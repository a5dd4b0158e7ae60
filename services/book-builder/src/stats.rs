//! Book counters
//!
//! Plain counters; a book is owned by a single ingestion caller so no
//! atomics are needed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Event and outcome counters for one book
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookStats {
    /// Order events ingested
    pub orders: u64,
    /// Trade events ingested (executions and cancels)
    pub trades: u64,
    /// Resting orders removed by a delete or cancel
    pub cancels: u64,
    /// Cancels and executions recorded for orders not yet seen
    pub deferred: u64,
    /// Incoming orders netted against the late-event store
    pub absorbed: u64,
    /// Resting orders reduced by an execution
    pub fills: u64,
    /// Stale crossed orders purged
    pub purged: u64,
    /// Executions skipped by the sequence guard
    pub out_of_sequence: u64,
    /// Orders dropped for an unknown side code
    pub unknown_side: u64,
    /// Orders dropped because their key was already resting
    pub duplicates: u64,
}

impl BookStats {
    /// Total events ingested
    pub fn events(&self) -> u64 {
        self.orders + self.trades
    }

    /// Export counters as a BTreeMap for exposition
    pub fn export(&self) -> BTreeMap<String, u64> {
        let mut m = BTreeMap::new();
        m.insert("orders".to_string(), self.orders);
        m.insert("trades".to_string(), self.trades);
        m.insert("cancels".to_string(), self.cancels);
        m.insert("deferred".to_string(), self.deferred);
        m.insert("absorbed".to_string(), self.absorbed);
        m.insert("fills".to_string(), self.fills);
        m.insert("purged".to_string(), self.purged);
        m.insert("out_of_sequence".to_string(), self.out_of_sequence);
        m.insert("unknown_side".to_string(), self.unknown_side);
        m.insert("duplicates".to_string(), self.duplicates);
        m
    }

    /// Add another book's counters to these
    pub fn merge(&mut self, other: &BookStats) {
        self.orders += other.orders;
        self.trades += other.trades;
        self.cancels += other.cancels;
        self.deferred += other.deferred;
        self.absorbed += other.absorbed;
        self.fills += other.fills;
        self.purged += other.purged;
        self.out_of_sequence += other.out_of_sequence;
        self.unknown_side += other.unknown_side;
        self.duplicates += other.duplicates;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_has_every_counter() {
        let stats = BookStats {
            orders: 3,
            trades: 2,
            ..Default::default()
        };
        let m = stats.export();
        assert_eq!(m.len(), 10);
        assert_eq!(m["orders"], 3);
        assert_eq!(m["trades"], 2);
        assert_eq!(stats.events(), 5);
    }

    #[test]
    fn test_merge() {
        let mut a = BookStats {
            fills: 1,
            ..Default::default()
        };
        let b = BookStats {
            fills: 2,
            purged: 4,
            ..Default::default()
        };
        a.merge(&b);
        assert_eq!(a.fills, 3);
        assert_eq!(a.purged, 4);
    }
}
