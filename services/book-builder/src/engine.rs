//! Order-book state machine
//!
//! Main coordinator for one symbol: owns both sides' resting queues, the
//! order-id watermark and the late-event store, and applies the
//! exchange-specific cancel and execution rules to every feed event.
//!
//! Ingestion never fails. Unknown sides and duplicate keys are dropped
//! with a diagnostic; references to unseen orders are deferred.

use rust_decimal::Decimal;
use tracing::{debug, info, warn};
use types::ids::{is_order_ref, OrderId, Timestamp};
use types::numeric::Price;
use types::order::{Order, Side};
use types::symbol::Symbol;
use types::trade::Trade;

use crate::book::SideBook;
use crate::depth::{self, DepthLevel};
use crate::ladder::Ladder;
use crate::matching::{crossing, CrossedDepth};
use crate::reconcile::{Absorption, LateEventStore};
use crate::rules;
use crate::stats::BookStats;

/// Reconstructed book for a single symbol
#[derive(Debug, Clone)]
pub struct OrderBook {
    symbol: Symbol,
    bids: SideBook,
    asks: SideBook,
    /// Highest book key seen on an order event
    watermark: OrderId,
    last_msg_time: Timestamp,
    late: LateEventStore,
    /// Projection from the last simulator run
    crossed: CrossedDepth,
    stats: BookStats,
}

impl OrderBook {
    /// Create an empty book for `symbol`
    pub fn new(symbol: Symbol) -> Self {
        Self::with_capacity(symbol, 0)
    }

    /// Create an empty book sized for `capacity` resting orders per side
    pub fn with_capacity(symbol: Symbol, capacity: usize) -> Self {
        info!(symbol = %symbol, capacity, "Order book initialized");

        Self {
            symbol,
            bids: SideBook::with_capacity(Side::Buy, capacity),
            asks: SideBook::with_capacity(Side::Sell, capacity),
            watermark: 0,
            last_msg_time: 0,
            late: LateEventStore::new(),
            crossed: CrossedDepth::default(),
            stats: BookStats::default(),
        }
    }

    /// Ingest one order event
    ///
    /// A Sse delete removes the order it names and stops. Otherwise the
    /// order is netted against the late-event store (Szse), rested if any
    /// quantity remains, and the crossing simulation is refreshed.
    pub fn ingest_order(&mut self, order: &Order) {
        self.last_msg_time = order.time;
        self.stats.orders += 1;

        let key = order.book_key();
        self.watermark = self.watermark.max(key);
        if !rules::absorbs_late_events(order.exchange) {
            let pruned = self.late.prune_through(self.watermark);
            if pruned > 0 {
                debug!(watermark = self.watermark, pruned, "Pruned late events at or below watermark");
            }
        }

        let Some(side) = order.side() else {
            self.stats.unknown_side += 1;
            warn!(
                symbol = %self.symbol,
                order_id = order.order_id,
                side = %char::from(order.side),
                "Unknown order side, dropping order"
            );
            return;
        };

        if order.is_delete() {
            if self.side_mut(side).remove(key).is_some() {
                self.stats.cancels += 1;
            } else {
                debug!(order_id = key, side = side.book_label(), "Delete for order not resting");
            }
            return;
        }

        let mut resting = order.clone();
        if rules::absorbs_late_events(order.exchange) {
            match self.late.absorb(key, order.qty) {
                Absorption::None => {}
                Absorption::Partial { taken, remaining } => {
                    self.stats.absorbed += 1;
                    debug!(order_id = key, taken, remaining, "Order partially absorbed by late events");
                    resting.qty = remaining;
                }
                Absorption::Full { taken } => {
                    self.stats.absorbed += 1;
                    debug!(order_id = key, taken, "Order fully absorbed by late events");
                    return;
                }
            }
        }

        if resting.qty == 0 {
            debug!(order_id = key, "Order with no quantity, not resting");
            return;
        }

        if !self.side_mut(side).insert(resting) {
            self.stats.duplicates += 1;
            warn!(
                symbol = %self.symbol,
                order_id = key,
                side = side.book_label(),
                "Order key already resting, dropping duplicate"
            );
            return;
        }

        self.crossed = crossing::simulate(side, &self.depth_bid(), &self.depth_ask());
        if self.crossed.is_crossed() {
            debug!(
                order_id = key,
                matched = self.crossed.matched_quantity,
                "Book crossed after order"
            );
        }
    }

    /// Ingest one trade event
    ///
    /// Szse cancel records remove the order they name; everything else is
    /// an execution.
    pub fn ingest_trade(&mut self, trade: &Trade) {
        self.last_msg_time = trade.time;
        self.stats.trades += 1;

        if trade.is_cancel() {
            self.handle_cancel(trade);
        } else {
            self.handle_execution(trade);
        }
    }

    fn handle_cancel(&mut self, trade: &Trade) {
        let Some((side, order_id)) = trade.cancelled_order() else {
            debug!(trade_id = trade.trade_id, "Cancel names no order");
            return;
        };

        if self.watermark >= order_id {
            if self.side_mut(side).remove(order_id).is_some() {
                self.stats.cancels += 1;
            }
        } else {
            self.defer(order_id, trade);
        }
    }

    fn handle_execution(&mut self, trade: &Trade) {
        let aggressor = trade.aggressor_id();
        if is_order_ref(aggressor) && aggressor > self.watermark {
            self.defer(aggressor, trade);
        }

        for side in [Side::Buy, Side::Sell] {
            let outcome = self.side_mut(side).apply_execution(trade);
            self.stats.fills += outcome.filled as u64;
            self.stats.purged += outcome.purged as u64;
            self.stats.out_of_sequence += outcome.out_of_sequence as u64;

            if outcome.exhausted > 0 {
                debug!(
                    trade_id = trade.trade_id,
                    side = side.book_label(),
                    exhausted = outcome.exhausted,
                    "Orders filled out of the book"
                );
            }

            if outcome.purged > 0 {
                debug!(
                    trade_id = trade.trade_id,
                    side = side.book_label(),
                    purged = outcome.purged,
                    "Purged stale crossed orders"
                );
            }
            if outcome.out_of_sequence > 0 {
                debug!(
                    trade_id = trade.trade_id,
                    business_no = trade.business_no,
                    "Execution older than resting order, ignored"
                );
            }
        }
    }

    fn defer(&mut self, order_id: OrderId, trade: &Trade) {
        self.late.record(order_id, trade.qty);
        self.stats.deferred += 1;
        debug!(
            order_id,
            qty = trade.qty,
            watermark = self.watermark,
            "Event for unseen order deferred"
        );
    }

    fn side_mut(&mut self, side: Side) -> &mut SideBook {
        match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        }
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// Resting bid with price-then-time priority
    pub fn best_bid(&self) -> Option<&Order> {
        self.bids.best()
    }

    /// Resting ask with price-then-time priority
    pub fn best_ask(&self) -> Option<&Order> {
        self.asks.best()
    }

    pub fn best_bid_price(&self) -> Option<Price> {
        self.bids.best_price()
    }

    pub fn best_ask_price(&self) -> Option<Price> {
        self.asks.best_price()
    }

    /// Best ask minus best bid; negative while the book is crossed
    pub fn spread(&self) -> Option<Decimal> {
        match (self.best_bid_price(), self.best_ask_price()) {
            (Some(bid), Some(ask)) => Some(ask.as_decimal() - bid.as_decimal()),
            _ => None,
        }
    }

    pub fn mid_price(&self) -> Option<Price> {
        match (self.best_bid_price(), self.best_ask_price()) {
            (Some(bid), Some(ask)) => {
                Some(Price::new((bid.as_decimal() + ask.as_decimal()) / Decimal::TWO))
            }
            _ => None,
        }
    }

    /// Aggregated bid depth, highest price first
    pub fn depth_bid(&self) -> Vec<DepthLevel> {
        depth::aggregate(&self.bids)
    }

    /// Aggregated ask depth, lowest price first
    pub fn depth_ask(&self) -> Vec<DepthLevel> {
        depth::aggregate(&self.asks)
    }

    /// Projection of the book after crossing liquidity traded out, as of
    /// the last order that came to rest
    pub fn crossed_depth(&self) -> &CrossedDepth {
        &self.crossed
    }

    /// Resting orders across both sides
    pub fn size(&self) -> usize {
        self.bids.len() + self.asks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }

    /// Time of the most recently ingested event
    pub fn last_message_time(&self) -> Timestamp {
        self.last_msg_time
    }

    pub fn watermark(&self) -> OrderId {
        self.watermark
    }

    pub fn late_events(&self) -> &LateEventStore {
        &self.late
    }

    pub fn stats(&self) -> &BookStats {
        &self.stats
    }

    pub fn bids(&self) -> &SideBook {
        &self.bids
    }

    pub fn asks(&self) -> &SideBook {
        &self.asks
    }

    /// Printable top-`levels` ladder of the book
    pub fn ladder(&self, levels: usize) -> Ladder<'_> {
        Ladder::new(self, levels)
    }

    /// Check the structural invariants of the whole book
    ///
    /// Panics on violation; intended for tests.
    pub fn assert_invariants(&self) {
        self.bids.assert_invariants();
        self.asks.assert_invariants();
        for (order_id, _) in self.late.iter() {
            assert!(
                !self.bids.contains(order_id) && !self.asks.contains(order_id),
                "late event store overlaps resting order {order_id}"
            );
        }
        for order in self.bids.orders().chain(self.asks.orders()) {
            assert!(order.book_key() <= self.watermark, "resting key above watermark");
        }
    }
}
