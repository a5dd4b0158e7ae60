//! Trade events
//!
//! A `Trade` is either an execution between a bid and an ask order or, on
//! Shenzhen, a cancel record (flag `'4'`) that names exactly one order.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ids::{is_order_ref, BusinessNo, ChannelNo, OrderId, Timestamp, TradeId, NO_ORDER};
use crate::numeric::{Price, Quantity};
use crate::order::Side;
use crate::symbol::{Exchange, SymbolCode};

/// Raw Shanghai trade flags (aggressor indicator)
pub mod sse_flag {
    pub const BUYER_INITIATED: u8 = b'B';
    pub const SELLER_INITIATED: u8 = b'S';
    pub const UNKNOWN: u8 = b'N';
}

/// Raw Shenzhen trade flags
pub mod szse_flag {
    pub const CANCEL: u8 = b'4';
    pub const FILL: u8 = b'F';
}

/// One trade record from the feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    pub ticker: SymbolCode,
    pub rec_time: Timestamp,
    /// Execution time
    pub time: Timestamp,
    pub channel_id: ChannelNo,
    pub trade_id: TradeId,
    pub price: Price,
    pub qty: Quantity,
    /// Traded amount, Sse only
    pub amount: Decimal,
    /// Buy-side order id, 0 when absent
    pub bid_id: OrderId,
    /// Sell-side order id, 0 when absent
    pub ask_id: OrderId,
    pub flag: u8,
    pub exchange: Exchange,
    pub business_no: BusinessNo,
}

impl Trade {
    /// Create an execution between `bid_id` and `ask_id`
    #[allow(clippy::too_many_arguments)]
    pub fn execution(
        exchange: Exchange,
        ticker: SymbolCode,
        trade_id: TradeId,
        bid_id: OrderId,
        ask_id: OrderId,
        price: Price,
        qty: Quantity,
        time: Timestamp,
    ) -> Self {
        let flag = match exchange {
            Exchange::Sse if bid_id > ask_id => sse_flag::BUYER_INITIATED,
            Exchange::Sse if ask_id > bid_id => sse_flag::SELLER_INITIATED,
            Exchange::Sse => sse_flag::UNKNOWN,
            Exchange::Szse => szse_flag::FILL,
        };
        let amount = match exchange {
            Exchange::Sse => price.as_decimal() * Decimal::from(qty),
            Exchange::Szse => Decimal::ZERO,
        };

        Self {
            ticker,
            rec_time: time,
            time,
            channel_id: 0,
            trade_id,
            price,
            qty,
            amount,
            bid_id,
            ask_id,
            flag,
            exchange,
            business_no: trade_id,
        }
    }

    /// Create a Shenzhen cancel record for one order
    pub fn szse_cancel(
        ticker: SymbolCode,
        trade_id: TradeId,
        side: Side,
        order_id: OrderId,
        qty: Quantity,
        time: Timestamp,
    ) -> Self {
        let (bid_id, ask_id) = match side {
            Side::Buy => (order_id, NO_ORDER),
            Side::Sell => (NO_ORDER, order_id),
        };

        Self {
            ticker,
            rec_time: time,
            time,
            channel_id: 0,
            trade_id,
            price: Price::ZERO,
            qty,
            amount: Decimal::ZERO,
            bid_id,
            ask_id,
            flag: szse_flag::CANCEL,
            exchange: Exchange::Szse,
            business_no: trade_id,
        }
    }

    pub fn with_business_no(mut self, business_no: BusinessNo) -> Self {
        self.business_no = business_no;
        self
    }

    /// Buyer was the aggressor (bid id is the larger)
    pub fn is_buy(&self) -> bool {
        self.bid_id > self.ask_id
    }

    /// Seller was the aggressor (ask id is the larger)
    pub fn is_sell(&self) -> bool {
        self.ask_id > self.bid_id
    }

    /// Aggressor side inferred from the id ordering
    pub fn aggressor(&self) -> Option<Side> {
        if self.is_buy() {
            Some(Side::Buy)
        } else if self.is_sell() {
            Some(Side::Sell)
        } else {
            None
        }
    }

    /// The larger of the two order ids
    pub fn aggressor_id(&self) -> OrderId {
        self.bid_id.max(self.ask_id)
    }

    /// Shenzhen cancel record
    pub fn is_cancel(&self) -> bool {
        self.exchange == Exchange::Szse && self.flag == szse_flag::CANCEL
    }

    /// Order named by a cancel record: the non-zero id, bid first
    pub fn cancelled_order(&self) -> Option<(Side, OrderId)> {
        if is_order_ref(self.bid_id) {
            Some((Side::Buy, self.bid_id))
        } else if is_order_ref(self.ask_id) {
            Some((Side::Sell, self.ask_id))
        } else {
            None
        }
    }

    /// Order id this trade references on `side`
    pub fn order_ref(&self, side: Side) -> OrderId {
        match side {
            Side::Buy => self.bid_id,
            Side::Sell => self.ask_id,
        }
    }
}
