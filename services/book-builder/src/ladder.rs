//! Human-readable book ladder
//!
//! ```text
//! 000001 | ask |  10.6   | 300
//! 000001 | ask |  10.5   | 70
//! -------09:30:01.250--------
//! 000001 | bid |  10.2   | 50
//! 000001 | bid |  10.1   | 100
//! ```
//!
//! Asks are printed highest first so the touch sits next to the
//! separator; bids follow best first.

use std::fmt;

use types::clock::exchange_time;
use types::order::Side;

use crate::depth::{self, DepthLevel};
use crate::engine::OrderBook;

/// Top-N view of a book, rendered through `Display`
pub struct Ladder<'a> {
    book: &'a OrderBook,
    levels: usize,
}

impl<'a> Ladder<'a> {
    pub fn new(book: &'a OrderBook, levels: usize) -> Self {
        Self { book, levels }
    }

    fn write_row(&self, f: &mut fmt::Formatter<'_>, side: Side, level: &DepthLevel) -> fmt::Result {
        writeln!(
            f,
            "{:^6} | {} | {:^7} | {}",
            self.book.symbol().code.as_str(),
            side.book_label(),
            level.price.to_string(),
            level.quantity
        )
    }
}

impl fmt::Display for Ladder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let asks = depth::aggregate_top(self.book.asks(), self.levels);
        let bids = depth::aggregate_top(self.book.bids(), self.levels);

        for level in asks.iter().rev() {
            self.write_row(f, Side::Sell, level)?;
        }

        let ts = self.book.last_message_time();
        match exchange_time(ts) {
            Some(time) => writeln!(f, "-------{}--------", time.format("%H:%M:%S%.3f"))?,
            None => writeln!(f, "-------{ts}--------")?,
        }

        for level in &bids {
            self.write_row(f, Side::Buy, level)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use types::numeric::Price;
    use types::order::Order;
    use types::symbol::{Exchange, Symbol, SymbolCode};

    use super::*;

    fn order(id: i64, side: Side, price: &str, qty: u64, time: i64) -> Order {
        Order::limit(
            Exchange::Szse,
            SymbolCode::new("000001").unwrap(),
            id,
            side,
            price.parse::<Price>().unwrap(),
            qty,
            time,
        )
    }

    fn book() -> OrderBook {
        let mut book = OrderBook::new(Symbol::new(1, SymbolCode::new("000001").unwrap(), Exchange::Szse));
        book.ingest_order(&order(1, Side::Buy, "10.1", 100, 93_000_000));
        book.ingest_order(&order(2, Side::Buy, "10.2", 50, 93_000_100));
        book.ingest_order(&order(3, Side::Sell, "10.5", 70, 93_000_200));
        book.ingest_order(&order(4, Side::Sell, "10.6", 300, 93_001_250));
        book
    }

    #[test]
    fn test_ladder_layout() {
        let text = book().ladder(10).to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "000001 | ask |  10.6   | 300");
        assert_eq!(lines[1], "000001 | ask |  10.5   | 70");
        assert_eq!(lines[2], "-------09:30:01.250--------");
        assert_eq!(lines[3], "000001 | bid |  10.2   | 50");
        assert_eq!(lines[4], "000001 | bid |  10.1   | 100");
    }

    #[test]
    fn test_ladder_truncates_to_touch() {
        let text = book().ladder(1).to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("10.5"));
        assert!(lines[2].contains("10.2"));
    }
}
