//! Crossing simulation
//!
//! Given bid and ask depth, repeatedly pairs the best bid level with the
//! best ask level while they cross (bid >= ask), taking the smaller of the
//! two quantities from both and dropping levels that reach zero.
//!
//! This is a pure function of its inputs. The live book never consumes the
//! result; it is kept only as a derived view for consumers.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use types::numeric::{Price, Quantity};
use types::order::Side;

use crate::depth::DepthLevel;

/// Check if a bid and ask can match at given prices
pub fn can_match(bid_price: Price, ask_price: Price) -> bool {
    bid_price >= ask_price
}

/// Post-cross projection of the book
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossedDepth {
    /// Side of the order that triggered the simulation
    pub aggressor: Option<Side>,
    /// Remaining bid levels, best first
    ///
    /// Depth carries no per-order quantities, so a partly crossed level
    /// keeps the `order_count` it had before the cross.
    pub bids: Vec<DepthLevel>,
    /// Remaining ask levels, best first, with pre-cross `order_count`
    pub asks: Vec<DepthLevel>,
    /// Total quantity that crossed
    pub matched_quantity: Quantity,
}

impl CrossedDepth {
    /// Whether any liquidity crossed
    pub fn is_crossed(&self) -> bool {
        self.matched_quantity > 0
    }

    pub fn best_bid(&self) -> Option<&DepthLevel> {
        self.bids.first()
    }

    pub fn best_ask(&self) -> Option<&DepthLevel> {
        self.asks.first()
    }
}

/// Simulate the cross of `bids` against `asks`
///
/// Both inputs must be best-first. Pairing best against best gives the
/// same residual book whichever side leads, so `aggressor` only labels the
/// result.
pub fn simulate(aggressor: Side, bids: &[DepthLevel], asks: &[DepthLevel]) -> CrossedDepth {
    let mut bids: VecDeque<DepthLevel> = bids.iter().copied().collect();
    let mut asks: VecDeque<DepthLevel> = asks.iter().copied().collect();
    let mut matched_quantity: Quantity = 0;

    loop {
        let (Some(bid), Some(ask)) = (bids.front_mut(), asks.front_mut()) else {
            break;
        };
        if !can_match(bid.price, ask.price) {
            break;
        }

        let qty = bid.quantity.min(ask.quantity);
        bid.quantity -= qty;
        ask.quantity -= qty;
        matched_quantity += qty;

        let bid_done = bid.quantity == 0;
        let ask_done = ask.quantity == 0;
        if bid_done {
            bids.pop_front();
        }
        if ask_done {
            asks.pop_front();
        }
    }

    CrossedDepth {
        aggressor: Some(aggressor),
        bids: bids.into(),
        asks: asks.into(),
        matched_quantity,
    }
}
