//! One side (bid or ask) of the reconstructed book
//!
//! Resting orders are held in price levels keyed by `Price`, each level a
//! FIFO queue. A key index maps an order's book key to its level so
//! cancels do not scan the whole side.
//!
//! Bids are best-first in descending price order, asks in ascending
//! order. Uses BTreeMap for deterministic iteration.

use std::collections::{BTreeMap, HashMap};

use types::ids::{is_order_ref, OrderId};
use types::numeric::Price;
use types::order::{Order, Side};
use types::trade::Trade;

use super::price_level::PriceLevel;
use crate::rules;

/// What an execution did to one side of the book
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecutionOutcome {
    /// Resting orders whose quantity was reduced by the execution
    pub filled: usize,
    /// Of those, orders removed because their quantity ran out
    pub exhausted: usize,
    /// Resting orders matched by id but skipped by the sequence guard
    pub out_of_sequence: usize,
    /// Stale crossed orders purged
    pub purged: usize,
}

/// Resting orders for one side of the book
#[derive(Debug, Clone)]
pub struct SideBook {
    side: Side,
    /// Price levels, ascending by price
    levels: BTreeMap<Price, PriceLevel>,
    /// Book key -> price of the level the order rests at
    index: HashMap<OrderId, Price>,
}

impl SideBook {
    /// Create a new empty side
    pub fn new(side: Side) -> Self {
        Self::with_capacity(side, 0)
    }

    /// Create a new empty side with room for `capacity` resting orders
    pub fn with_capacity(side: Side, capacity: usize) -> Self {
        Self {
            side,
            levels: BTreeMap::new(),
            index: HashMap::with_capacity(capacity),
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Rest an order at the back of its price level
    ///
    /// Returns false, leaving the side untouched, if an order with the same
    /// book key is already resting here.
    pub fn insert(&mut self, order: Order) -> bool {
        let key = order.book_key();
        if self.index.contains_key(&key) {
            return false;
        }

        self.index.insert(key, order.price);
        self.levels
            .entry(order.price)
            .or_insert_with(PriceLevel::new)
            .push_back(order);
        true
    }

    /// Remove a resting order by book key
    ///
    /// Returns the removed order, or None if no such order rests here
    pub fn remove(&mut self, key: OrderId) -> Option<Order> {
        let price = self.index.remove(&key)?;
        let level = self.levels.get_mut(&price)?;
        let removed = level.remove(key);

        // Remove empty price levels to keep book clean
        if level.is_empty() {
            self.levels.remove(&price);
        }
        removed
    }

    pub fn contains(&self, key: OrderId) -> bool {
        self.index.contains_key(&key)
    }

    /// Look up a resting order by book key
    pub fn get(&self, key: OrderId) -> Option<&Order> {
        let price = self.index.get(&key)?;
        self.levels.get(price)?.iter().find(|o| o.book_key() == key)
    }

    /// The order with price-then-time priority on this side
    pub fn best(&self) -> Option<&Order> {
        self.best_level().and_then(|(_, level)| level.front())
    }

    pub fn best_price(&self) -> Option<Price> {
        self.best_level().map(|(price, _)| *price)
    }

    fn best_level(&self) -> Option<(&Price, &PriceLevel)> {
        match self.side {
            Side::Buy => self.levels.iter().next_back(),
            Side::Sell => self.levels.iter().next(),
        }
    }

    /// Price levels, best first
    pub fn levels(&self) -> Box<dyn Iterator<Item = (&Price, &PriceLevel)> + '_> {
        match self.side {
            Side::Buy => Box::new(self.levels.iter().rev()),
            Side::Sell => Box::new(self.levels.iter()),
        }
    }

    /// Resting orders in priority order (best price first, then FIFO)
    pub fn orders(&self) -> impl Iterator<Item = &Order> + '_ {
        self.levels().flat_map(|(_, level)| level.iter())
    }

    /// Number of resting orders
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of distinct price levels
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Apply an execution to this side
    ///
    /// The resting order whose book key equals the trade's reference on
    /// this side loses the traded quantity (subject to the exchange's
    /// sequence guard) and leaves the book once exhausted. Every other
    /// order whose price the trade crossed and which predates the trade is
    /// purged.
    pub(crate) fn apply_execution(&mut self, trade: &Trade) -> ExecutionOutcome {
        let side = self.side;
        let reference = trade.order_ref(side);
        let mut outcome = ExecutionOutcome::default();
        let mut removed = Vec::new();

        for level in self.levels.values_mut() {
            level.retain_mut(|resting| {
                let key = resting.book_key();

                if is_order_ref(reference) && key == reference {
                    if !rules::execution_applies(resting, trade) {
                        outcome.out_of_sequence += 1;
                        return true;
                    }
                    resting.qty = resting.qty.saturating_sub(trade.qty);
                    outcome.filled += 1;
                    if resting.qty == 0 {
                        outcome.exhausted += 1;
                        removed.push(key);
                        return false;
                    }
                    true
                } else if rules::is_stale_crossed(side, resting, trade) {
                    outcome.purged += 1;
                    removed.push(key);
                    false
                } else {
                    true
                }
            });
        }

        for key in removed {
            self.index.remove(&key);
        }
        self.levels.retain(|_, level| !level.is_empty());

        outcome
    }

    /// Check the structural invariants of this side
    ///
    /// Panics on violation; intended for tests.
    pub fn assert_invariants(&self) {
        let mut seen = 0;
        for (price, level) in &self.levels {
            assert!(!level.is_empty(), "empty level at {price}");
            for order in level.iter() {
                assert!(order.qty > 0, "zero qty order {}", order.book_key());
                assert_eq!(order.price, *price, "order filed under wrong level");
                assert_eq!(
                    self.index.get(&order.book_key()),
                    Some(price),
                    "index out of sync for {}",
                    order.book_key()
                );
                seen += 1;
            }
        }
        assert_eq!(seen, self.index.len(), "index holds keys with no order");
    }
}
