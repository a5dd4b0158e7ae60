//! Feed event envelope
//!
//! The decoder hands the book one fully-materialized record per call; a
//! `FeedEvent` is that record tagged by kind so a mixed stream can be
//! routed and replayed.

use serde::{Deserialize, Serialize};
use types::ids::Timestamp;
use types::order::Order;
use types::symbol::{Exchange, SymbolCode};
use types::trade::Trade;

/// One decoded feed record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event_type")]
pub enum FeedEvent {
    Order(Order),
    Trade(Trade),
}

impl FeedEvent {
    pub fn ticker(&self) -> SymbolCode {
        match self {
            FeedEvent::Order(order) => order.ticker,
            FeedEvent::Trade(trade) => trade.ticker,
        }
    }

    pub fn exchange(&self) -> Exchange {
        match self {
            FeedEvent::Order(order) => order.exchange,
            FeedEvent::Trade(trade) => trade.exchange,
        }
    }

    /// Exchange time of the record
    pub fn time(&self) -> Timestamp {
        match self {
            FeedEvent::Order(order) => order.time,
            FeedEvent::Trade(trade) => trade.time,
        }
    }

    /// Short label for logging
    pub fn label(&self) -> &'static str {
        match self {
            FeedEvent::Order(order) if order.is_delete() => "order_delete",
            FeedEvent::Order(_) => "order",
            FeedEvent::Trade(trade) if trade.is_cancel() => "trade_cancel",
            FeedEvent::Trade(_) => "trade",
        }
    }
}

impl From<Order> for FeedEvent {
    fn from(order: Order) -> Self {
        FeedEvent::Order(order)
    }
}

impl From<Trade> for FeedEvent {
    fn from(trade: Trade) -> Self {
        FeedEvent::Trade(trade)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::order::Side;

    #[test]
    fn test_labels() {
        let code = SymbolCode::new("600111").unwrap();
        let order = Order::limit(Exchange::Sse, code, 1, Side::Buy, "10.0".parse().unwrap(), 100, 5);
        let delete = Order::sse_delete(code, 2, 1, Side::Buy, 6);
        let cancel = Trade::szse_cancel(SymbolCode::new("000001").unwrap(), 3, Side::Sell, 9, 10, 7);

        assert_eq!(FeedEvent::from(order).label(), "order");
        assert_eq!(FeedEvent::from(delete).label(), "order_delete");
        assert_eq!(FeedEvent::from(cancel.clone()).label(), "trade_cancel");
        assert_eq!(FeedEvent::from(cancel).time(), 7);
    }

    #[test]
    fn test_json_is_tagged() {
        let code = SymbolCode::new("000001").unwrap();
        let event = FeedEvent::from(Trade::szse_cancel(code, 3, Side::Sell, 9, 10, 7));

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"event_type\":\"Trade\""));
        assert!(json.contains("\"ticker\":\"000001\""));

        let back: FeedEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
        assert_eq!(back.ticker(), code);
        assert_eq!(back.exchange(), Exchange::Szse);
    }
}
