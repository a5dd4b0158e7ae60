//! Late-event reconciliation store
//!
//! Feed delivery can put a cancel or execution ahead of the order it
//! references. The store remembers the quantity such an event took from
//! an order the book has not seen yet; when the order arrives it is netted
//! against that quantity before it may rest.
//!
//! Entries are consumed on absorption. An exchange that never absorbs
//! prunes every entry at or below the order-id watermark instead, since no
//! order with such a key can still arrive to claim it. Either way the store
//! never overlaps the resting queues.

use std::collections::HashMap;

use types::ids::OrderId;
use types::numeric::Quantity;

/// Result of netting an incoming order against the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Absorption {
    /// No late event recorded for this order
    None,
    /// Part of the order was taken; the remainder may rest
    Partial { taken: Quantity, remaining: Quantity },
    /// The whole order was taken; it never rests
    Full { taken: Quantity },
}

/// Quantity adjustments for events that arrived before their order
#[derive(Debug, Clone, Default)]
pub struct LateEventStore {
    pending: HashMap<OrderId, Quantity>,
}

impl LateEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a late event took `qty` from order `order_id`
    ///
    /// Several late events for one order (partial fills, then the cancel
    /// of the rest) accumulate.
    pub fn record(&mut self, order_id: OrderId, qty: Quantity) {
        let entry = self.pending.entry(order_id).or_insert(0);
        *entry = entry.saturating_add(qty);
    }

    /// Pending adjustment for an order, if any
    pub fn pending(&self, order_id: OrderId) -> Option<Quantity> {
        self.pending.get(&order_id).copied()
    }

    pub fn contains(&self, order_id: OrderId) -> bool {
        self.pending.contains_key(&order_id)
    }

    /// Net an incoming order of `qty` against its recorded adjustment
    ///
    /// Takes `min(recorded, qty)` and consumes the entry.
    pub fn absorb(&mut self, order_id: OrderId, qty: Quantity) -> Absorption {
        let Some(recorded) = self.pending.remove(&order_id) else {
            return Absorption::None;
        };

        let taken = recorded.min(qty);
        let remaining = qty - taken;
        if remaining == 0 {
            Absorption::Full { taken }
        } else {
            Absorption::Partial { taken, remaining }
        }
    }

    /// Drop every entry with an id at or below `watermark`
    ///
    /// Returns the number of entries dropped.
    pub fn prune_through(&mut self, watermark: OrderId) -> usize {
        let before = self.pending.len();
        self.pending.retain(|id, _| *id > watermark);
        before - self.pending.len()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (OrderId, Quantity)> + '_ {
        self.pending.iter().map(|(id, qty)| (*id, *qty))
    }
}
