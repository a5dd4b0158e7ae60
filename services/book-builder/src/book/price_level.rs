//! Price level implementation with FIFO queue
//!
//! A price level holds every resting order at one price point, in arrival
//! order, so the front of the queue has time priority.

use std::collections::VecDeque;

use types::ids::OrderId;
use types::numeric::Quantity;
use types::order::Order;

/// A price level containing orders at a specific price
///
/// Stores full copies of the ingested order events; an order's `qty` is
/// mutated downward as executions apply against it.
#[derive(Debug, Clone, Default)]
pub struct PriceLevel {
    /// Queue of orders at this price level (FIFO order)
    orders: VecDeque<Order>,
}

impl PriceLevel {
    /// Create a new empty price level
    pub fn new() -> Self {
        Self {
            orders: VecDeque::new(),
        }
    }

    /// Insert an order at the back of the queue (time priority)
    pub fn push_back(&mut self, order: Order) {
        self.orders.push_back(order);
    }

    /// Remove an order from the queue by book key
    ///
    /// Returns the removed order, or None if not found
    pub fn remove(&mut self, key: OrderId) -> Option<Order> {
        let position = self.orders.iter().position(|o| o.book_key() == key)?;
        self.orders.remove(position)
    }

    /// The order with time priority at this level
    pub fn front(&self) -> Option<&Order> {
        self.orders.front()
    }

    /// Keep only the orders for which `keep` returns true
    ///
    /// `keep` may mutate the order it is shown.
    pub(crate) fn retain_mut<F>(&mut self, keep: F)
    where
        F: FnMut(&mut Order) -> bool,
    {
        self.orders.retain_mut(keep);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    /// Sum of resting quantity at this level
    pub fn total_quantity(&self) -> Quantity {
        self.orders.iter().map(|o| o.qty).sum()
    }

    /// Check if the price level is empty
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Get the number of orders at this level
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }
}
