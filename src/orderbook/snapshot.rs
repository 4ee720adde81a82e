//! Read-only depth snapshots (spec §4.2.1 `snapshot(depth)`).

use super::book::OrderBook;
use crate::types::{Price, Quantity};
use serde::{Deserialize, Serialize};

/// A read-only view of the book's resting liquidity, `depth` levels deep on
/// each side. Taking a snapshot emits no change record and does not bump
/// `current_version()` — it is pure observation of already-mutated state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSnapshot {
    /// Bid levels from best (highest price) to worst, `(price, volume)`.
    pub bids: Vec<(Price, Quantity)>,
    /// Ask levels from best (lowest price) to worst, `(price, volume)`.
    pub asks: Vec<(Price, Quantity)>,
}

impl OrderBook {
    /// Walks the bid index from the maximum price toward the minimum and
    /// the ask index from the minimum toward the maximum, yielding up to
    /// `depth` levels on each side as `(price, volume)` pairs.
    ///
    /// Read-only: no change record is emitted and `current_version()` does
    /// not advance.
    pub fn snapshot(&self, depth: usize) -> BookSnapshot {
        BookSnapshot {
            bids: self
                .bids
                .levels_best_first()
                .take(depth)
                .map(|level| (level.price(), level.total_volume()))
                .collect(),
            asks: self
                .asks
                .levels_best_first()
                .take(depth)
                .map(|level| (level.price(), level.total_volume()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instrument::Instrument;
    use crate::types::{Order, Side};

    #[test]
    fn snapshot_orders_bids_descending_and_asks_ascending() {
        let mut book = OrderBook::new(Instrument::new("BTC/USD", 1));
        book.submit(Order::limit(1, Side::Buy, 100, 5)).unwrap();
        book.submit(Order::limit(2, Side::Buy, 102, 3)).unwrap();
        book.submit(Order::limit(3, Side::Sell, 110, 4)).unwrap();
        book.submit(Order::limit(4, Side::Sell, 108, 6)).unwrap();

        let snap = book.snapshot(10);
        assert_eq!(snap.bids, vec![(102, 3), (100, 5)]);
        assert_eq!(snap.asks, vec![(108, 6), (110, 4)]);
    }

    #[test]
    fn snapshot_respects_depth_limit() {
        let mut book = OrderBook::new(Instrument::new("BTC/USD", 1));
        for (id, price) in [(1, 100), (2, 101), (3, 102)] {
            book.submit(Order::limit(id, Side::Buy, price, 1)).unwrap();
        }
        let snap = book.snapshot(2);
        assert_eq!(snap.bids, vec![(102, 1), (101, 1)]);
    }

    #[test]
    fn snapshot_is_read_only() {
        let mut book = OrderBook::new(Instrument::new("BTC/USD", 1));
        book.submit(Order::limit(1, Side::Buy, 100, 5)).unwrap();
        let before = book.current_version();
        let _ = book.snapshot(5);
        assert_eq!(book.current_version(), before);
    }
}
