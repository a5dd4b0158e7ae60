//! Per-symbol book routing
//!
//! One `OrderBook` per configured symbol. A symbol is the pair of exchange
//! and code, since both exchanges reuse the same six-digit codes. Books are
//! independent, so events for different symbols never interact; each book
//! sees its own events in arrival order.

use std::collections::HashMap;

use tracing::{debug, info};
use types::symbol::{Exchange, SymbolCode};

use crate::config::BookConfig;
use crate::engine::OrderBook;
use crate::events::FeedEvent;
use crate::stats::BookStats;

/// Routing key of a book
pub type BookKey = (Exchange, SymbolCode);

/// The set of books fed from one stream
#[derive(Debug, Clone, Default)]
pub struct BookSet {
    books: HashMap<BookKey, OrderBook>,
    /// Events for tickers with no book
    skipped: u64,
}

impl BookSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build one empty book per configured symbol
    pub fn from_config(config: &BookConfig) -> Self {
        let books = config
            .symbols
            .iter()
            .map(|symbol| {
                (
                    (symbol.exchange, symbol.code),
                    OrderBook::with_capacity(*symbol, config.order_capacity),
                )
            })
            .collect::<HashMap<_, _>>();

        info!(books = books.len(), "Book set initialized");
        Self { books, skipped: 0 }
    }

    /// Add a book, replacing any existing book for the same exchange and code
    pub fn insert(&mut self, book: OrderBook) -> Option<OrderBook> {
        let symbol = book.symbol();
        self.books.insert((symbol.exchange, symbol.code), book)
    }

    /// Route one event to its book
    ///
    /// Returns false when no book is configured for the event's exchange
    /// and ticker.
    pub fn apply(&mut self, event: &FeedEvent) -> bool {
        let key = (event.exchange(), event.ticker());
        let Some(book) = self.books.get_mut(&key) else {
            self.skipped += 1;
            debug!(
                exchange = %event.exchange(),
                ticker = %event.ticker(),
                event_type = event.label(),
                "No book for ticker, skipping event"
            );
            return false;
        };

        match event {
            FeedEvent::Order(order) => book.ingest_order(order),
            FeedEvent::Trade(trade) => book.ingest_trade(trade),
        }
        true
    }

    /// Drive a sequence of events through the books
    ///
    /// Returns the number of events that reached a book.
    pub fn replay<'a, I>(&mut self, events: I) -> u64
    where
        I: IntoIterator<Item = &'a FeedEvent>,
    {
        let mut applied = 0;
        let mut total = 0;
        for event in events {
            total += 1;
            if self.apply(event) {
                applied += 1;
            }
        }

        info!(total, applied, skipped = total - applied, "Replay complete");
        applied
    }

    pub fn book(&self, exchange: Exchange, code: &SymbolCode) -> Option<&OrderBook> {
        self.books.get(&(exchange, *code))
    }

    pub fn book_mut(&mut self, exchange: Exchange, code: &SymbolCode) -> Option<&mut OrderBook> {
        self.books.get_mut(&(exchange, *code))
    }

    /// Books ordered by symbol code, then exchange
    pub fn books(&self) -> Vec<&OrderBook> {
        let mut books: Vec<&OrderBook> = self.books.values().collect();
        books.sort_by_key(|b| (b.symbol().code, b.symbol().exchange));
        books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    /// Counters summed over every book
    pub fn stats(&self) -> BookStats {
        let mut total = BookStats::default();
        for book in self.books.values() {
            total.merge(book.stats());
        }
        total
    }
}
