//! Exchange-specific correlation rules
//!
//! The set of venues is closed, so every rule is a `match` on the
//! `Exchange` tag rather than a trait object.
//!
//! | rule                  | Sse                         | Szse                  |
//! |-----------------------|-----------------------------|-----------------------|
//! | cancel signalled by   | order event, type `'D'`     | trade event, flag `'4'` |
//! | resting order key     | origin order id             | order id              |
//! | late-store absorption | no                          | yes                   |
//! | execution guard       | trade business no >= order  | none                  |

use types::order::{Order, Side};
use types::symbol::Exchange;
use types::trade::Trade;

/// Whether an execution naming `resting` may reduce its quantity
///
/// Sse re-delivers executions; one older than the resting order's own
/// business sequence is ignored.
pub fn execution_applies(resting: &Order, trade: &Trade) -> bool {
    match trade.exchange {
        Exchange::Sse => trade.business_no >= resting.business_no,
        Exchange::Szse => true,
    }
}

/// Whether `resting` on `side` is stale liquidity given this trade
///
/// A bid priced above the trade price (an ask priced below it) that was
/// entered before the trade cannot still be resting: it would have traded.
pub fn is_stale_crossed(side: Side, resting: &Order, trade: &Trade) -> bool {
    let crossed = match side {
        Side::Buy => resting.price > trade.price,
        Side::Sell => resting.price < trade.price,
    };
    crossed && resting.time < trade.time
}

/// Whether an incoming order is first netted against the late-event store
pub fn absorbs_late_events(exchange: Exchange) -> bool {
    match exchange {
        Exchange::Sse => false,
        Exchange::Szse => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::symbol::SymbolCode;

    fn code() -> SymbolCode {
        SymbolCode::new("600111").unwrap()
    }

    fn resting(exchange: Exchange, side: Side, price: &str, time: i64) -> Order {
        Order::limit(exchange, code(), 10, side, price.parse().unwrap(), 100, time)
    }

    fn trade(exchange: Exchange, price: &str, time: i64) -> Trade {
        Trade::execution(exchange, code(), 1, 10, 11, price.parse().unwrap(), 10, time)
    }

    #[test]
    fn test_sse_sequence_guard() {
        let order = resting(Exchange::Sse, Side::Buy, "10.0", 1).with_business_no(50);
        assert!(!execution_applies(&order, &trade(Exchange::Sse, "10.0", 2).with_business_no(49)));
        assert!(execution_applies(&order, &trade(Exchange::Sse, "10.0", 2).with_business_no(50)));
        assert!(execution_applies(&order, &trade(Exchange::Sse, "10.0", 2).with_business_no(51)));
    }

    #[test]
    fn test_szse_has_no_sequence_guard() {
        let order = resting(Exchange::Szse, Side::Buy, "10.0", 1).with_business_no(50);
        assert!(execution_applies(&order, &trade(Exchange::Szse, "10.0", 2).with_business_no(1)));
    }

    #[test]
    fn test_stale_crossed_is_strict_on_price() {
        let t = trade(Exchange::Szse, "10.0", 5);
        assert!(is_stale_crossed(Side::Buy, &resting(Exchange::Szse, Side::Buy, "10.1", 1), &t));
        assert!(!is_stale_crossed(Side::Buy, &resting(Exchange::Szse, Side::Buy, "10.0", 1), &t));
        assert!(is_stale_crossed(Side::Sell, &resting(Exchange::Szse, Side::Sell, "9.9", 1), &t));
        assert!(!is_stale_crossed(Side::Sell, &resting(Exchange::Szse, Side::Sell, "10.0", 1), &t));
    }

    #[test]
    fn test_stale_crossed_requires_older_order() {
        let t = trade(Exchange::Sse, "10.0", 5);
        assert!(!is_stale_crossed(Side::Buy, &resting(Exchange::Sse, Side::Buy, "11.0", 5), &t));
        assert!(!is_stale_crossed(Side::Buy, &resting(Exchange::Sse, Side::Buy, "11.0", 6), &t));
    }

    #[test]
    fn test_absorption_only_on_szse() {
        assert!(absorbs_late_events(Exchange::Szse));
        assert!(!absorbs_late_events(Exchange::Sse));
    }
}
