//! Order events
//!
//! An `Order` is one decoded order record from the feed. Side and order
//! type arrive as raw exchange codes; their meaning depends on `exchange`.

use serde::{Deserialize, Serialize};

use crate::ids::{BusinessNo, ChannelNo, OrderId, Timestamp};
use crate::numeric::{Price, Quantity};
use crate::symbol::{Exchange, SymbolCode};

/// Order side (buyer or seller)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy order (bid)
    Buy,
    /// Sell order (ask)
    Sell,
}

impl Side {
    /// Short label used in book printing
    pub fn book_label(&self) -> &'static str {
        match self {
            Side::Buy => "bid",
            Side::Sell => "ask",
        }
    }
}

/// Raw Shanghai order codes
pub mod sse {
    /// Side: buy
    pub const BUY: u8 = b'B';
    /// Side: sell
    pub const SELL: u8 = b'S';
    /// Order type: add (new order)
    pub const ADD: u8 = b'A';
    /// Order type: delete (cancel)
    pub const DEL: u8 = b'D';
}

/// Raw Shenzhen order codes
pub mod szse {
    /// Side: buy
    pub const BUY: u8 = b'1';
    /// Side: sell
    pub const SELL: u8 = b'2';
    /// Side: borrow (not used by the book)
    pub const BORROW: u8 = b'G';
    /// Side: loan (not used by the book)
    pub const LOAN: u8 = b'F';
    /// Order type: market
    pub const MARKET: u8 = b'1';
    /// Order type: limit
    pub const LIMIT: u8 = b'2';
    /// Order type: best of own side
    pub const BEST_OWN: u8 = b'U';
}

/// Raw side code for a typed side on the given exchange
pub fn side_code(exchange: Exchange, side: Side) -> u8 {
    match (exchange, side) {
        (Exchange::Sse, Side::Buy) => sse::BUY,
        (Exchange::Sse, Side::Sell) => sse::SELL,
        (Exchange::Szse, Side::Buy) => szse::BUY,
        (Exchange::Szse, Side::Sell) => szse::SELL,
    }
}

/// One order record from the feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub ticker: SymbolCode,
    /// Local receive time
    pub rec_time: Timestamp,
    /// Exchange send time
    pub time: Timestamp,
    pub channel_no: ChannelNo,
    /// Channel-local sequence
    pub order_id: OrderId,
    pub price: Price,
    pub qty: Quantity,
    /// Raw side code, see [`sse`] / [`szse`]
    pub side: u8,
    /// Raw order type code, see [`sse`] / [`szse`]
    pub ord_type: u8,
    /// Exchange-assigned id. Correlates deletes and executions on Sse;
    /// redundant on Szse.
    pub origin_order_id: OrderId,
    pub business_no: BusinessNo,
    pub exchange: Exchange,
}

impl Order {
    /// Create a new (non-delete) limit order event
    ///
    /// Origin id and business number default to `order_id`; receive time
    /// defaults to `time`.
    pub fn limit(
        exchange: Exchange,
        ticker: SymbolCode,
        order_id: OrderId,
        side: Side,
        price: Price,
        qty: Quantity,
        time: Timestamp,
    ) -> Self {
        let ord_type = match exchange {
            Exchange::Sse => sse::ADD,
            Exchange::Szse => szse::LIMIT,
        };

        Self {
            ticker,
            rec_time: time,
            time,
            channel_no: 0,
            order_id,
            price,
            qty,
            side: side_code(exchange, side),
            ord_type,
            origin_order_id: order_id,
            business_no: order_id,
            exchange,
        }
    }

    /// Create a Shanghai delete event for the order with `origin_order_id`
    pub fn sse_delete(
        ticker: SymbolCode,
        order_id: OrderId,
        origin_order_id: OrderId,
        side: Side,
        time: Timestamp,
    ) -> Self {
        Self {
            ticker,
            rec_time: time,
            time,
            channel_no: 0,
            order_id,
            price: Price::ZERO,
            qty: 0,
            side: side_code(Exchange::Sse, side),
            ord_type: sse::DEL,
            origin_order_id,
            business_no: order_id,
            exchange: Exchange::Sse,
        }
    }

    pub fn with_origin_id(mut self, origin_order_id: OrderId) -> Self {
        self.origin_order_id = origin_order_id;
        self
    }

    pub fn with_business_no(mut self, business_no: BusinessNo) -> Self {
        self.business_no = business_no;
        self
    }

    pub fn with_raw_side(mut self, side: u8) -> Self {
        self.side = side;
        self
    }

    pub fn is_buy(&self) -> bool {
        match self.exchange {
            Exchange::Sse => self.side == sse::BUY,
            Exchange::Szse => self.side == szse::BUY,
        }
    }

    pub fn is_sell(&self) -> bool {
        match self.exchange {
            Exchange::Sse => self.side == sse::SELL,
            Exchange::Szse => self.side == szse::SELL,
        }
    }

    /// Typed side, or `None` for codes the book does not track
    /// (borrow / loan, garbage)
    pub fn side(&self) -> Option<Side> {
        if self.is_buy() {
            Some(Side::Buy)
        } else if self.is_sell() {
            Some(Side::Sell)
        } else {
            None
        }
    }

    /// Delete events exist only on Sse
    pub fn is_delete(&self) -> bool {
        self.exchange == Exchange::Sse && self.ord_type == sse::DEL
    }

    /// Id under which this order rests and is referenced by later events
    pub fn book_key(&self) -> OrderId {
        match self.exchange {
            Exchange::Sse => self.origin_order_id,
            Exchange::Szse => self.order_id,
        }
    }
}
