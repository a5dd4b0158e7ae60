//! Price-level aggregation
//!
//! Collapses a side's resting orders into one entry per distinct price,
//! best first: bids by descending price, asks by ascending price.
//! Aggregation is a pure read of the queues.

use serde::{Deserialize, Serialize};
use types::numeric::{Price, Quantity};

use crate::book::SideBook;

/// Aggregated liquidity at one price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthLevel {
    pub price: Price,
    /// Sum of resting quantity at this price
    pub quantity: Quantity,
    /// Number of orders contributing
    pub order_count: u32,
}

impl DepthLevel {
    pub fn new(price: Price, quantity: Quantity, order_count: u32) -> Self {
        Self {
            price,
            quantity,
            order_count,
        }
    }
}

/// Aggregate a whole side, best price first
pub fn aggregate(book: &SideBook) -> Vec<DepthLevel> {
    aggregate_top(book, usize::MAX)
}

/// Aggregate at most `max_levels` levels of a side, best price first
pub fn aggregate_top(book: &SideBook, max_levels: usize) -> Vec<DepthLevel> {
    book.levels()
        .take(max_levels)
        .map(|(price, level)| {
            DepthLevel::new(*price, level.total_quantity(), level.order_count() as u32)
        })
        .collect()
}

/// Total quantity across a depth snapshot
pub fn total_quantity(levels: &[DepthLevel]) -> Quantity {
    levels.iter().map(|l| l.quantity).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::order::{Order, Side};
    use types::symbol::{Exchange, SymbolCode};

    fn px(s: &str) -> Price {
        s.parse().unwrap()
    }

    fn side_with(side: Side, orders: &[(i64, &str, u64)]) -> SideBook {
        let mut book = SideBook::new(side);
        for (id, price, qty) in orders {
            book.insert(Order::limit(
                Exchange::Szse,
                SymbolCode::new("000001").unwrap(),
                *id,
                side,
                px(price),
                *qty,
                *id,
            ));
        }
        book
    }

    #[test]
    fn test_bid_depth_descending() {
        let book = side_with(
            Side::Buy,
            &[(1, "10.0", 100), (2, "10.5", 50), (3, "10.0", 25), (4, "9.0", 10)],
        );

        let depth = aggregate(&book);
        assert_eq!(
            depth,
            vec![
                DepthLevel::new(px("10.5"), 50, 1),
                DepthLevel::new(px("10.0"), 125, 2),
                DepthLevel::new(px("9.0"), 10, 1),
            ]
        );
        assert_eq!(total_quantity(&depth), 185);
    }

    #[test]
    fn test_ask_depth_ascending() {
        let book = side_with(Side::Sell, &[(1, "10.0", 100), (2, "9.5", 40), (3, "11.0", 5)]);

        let depth = aggregate(&book);
        let prices: Vec<Price> = depth.iter().map(|l| l.price).collect();
        assert_eq!(prices, vec![px("9.5"), px("10.0"), px("11.0")]);
    }

    #[test]
    fn test_aggregate_top_truncates() {
        let book = side_with(Side::Sell, &[(1, "10.0", 100), (2, "9.5", 40), (3, "11.0", 5)]);
        let depth = aggregate_top(&book, 2);
        assert_eq!(depth.len(), 2);
        assert_eq!(depth[0].price, px("9.5"));
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let book = side_with(Side::Buy, &[(1, "10.0", 100), (2, "10.5", 50)]);
        assert_eq!(aggregate(&book), aggregate(&book));
    }

    #[test]
    fn test_empty_side() {
        let book = SideBook::new(Side::Buy);
        assert!(aggregate(&book).is_empty());
    }
}
