//! Identifier types carried by the exchange feed
//!
//! The feed numbers orders and trades per channel with plain integers, so
//! these are aliases rather than newtypes: the book compares them
//! numerically (watermark, aggressor inference) and a zero id means
//! "no order on this side".

/// Order identifier (channel-local sequence or exchange-assigned origin id)
pub type OrderId = i64;

/// Trade identifier
pub type TradeId = i64;

/// Exchange business sequence number
pub type BusinessNo = i64;

/// Feed channel number
pub type ChannelNo = i32;

/// Exchange timestamp as delivered by the feed
pub type Timestamp = i64;

/// Sentinel for "no order referenced" in a trade's bid / ask id
pub const NO_ORDER: OrderId = 0;

/// Check whether an id refers to an actual order.
pub fn is_order_ref(id: OrderId) -> bool {
    id != NO_ORDER
}
