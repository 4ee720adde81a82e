//! The `OrderBook`: the per-instrument matching engine (C6) tying together
//! the price indices (C4), price levels (C3), resting-order arena (C2),
//! order registry (C5) and change log (C7).

use crate::arena::{Arena, SlotIdx};
use crate::change_log::{ChangeLog, ChangeRecord};
use crate::instrument::Instrument;
use crate::side_index::{Extremum, SideIndex};
use crate::types::{OrderId, Price};
use std::collections::HashMap;

/// A single-instrument limit order book.
///
/// `OrderBook` is a single-writer, serially-executed state machine (spec
/// §5): every mutating call (`submit`, `cancel`, `modify`) is defined as
/// an atomic event applied in submission order. Nothing inside uses locks
/// or atomics, because nothing inside needs to — serializing concurrent
/// callers (a thread-per-instrument shard, a mutex, or a single-producer
/// queue feeding a dedicated engine thread) is the embedder's
/// responsibility, not this type's. `OrderBook` is `Send` (it owns no
/// thread-unsafe handles) so an embedder can freely move one onto its
/// owning thread, but it is not `Sync` in spirit: do not call its mutating
/// methods from two threads without external synchronization.
pub struct OrderBook {
    pub(super) instrument: Instrument,
    /// Bid side price levels (buy orders), best = maximum price.
    pub(super) bids: SideIndex,
    /// Ask side price levels (sell orders), best = minimum price.
    pub(super) asks: SideIndex,
    /// Backing storage for every resting order currently in the book
    /// (C2/C3 intrusive FIFO storage).
    pub(super) arena: Arena,
    /// Order registry (C5): id -> arena slot, for O(1) cancel/modify.
    pub(super) registry: HashMap<OrderId, SlotIdx>,
    pub(super) changes: ChangeLog,
    pub(super) next_arrival_seq: u64,
}

impl OrderBook {
    /// Creates an empty order book for `instrument`.
    pub fn new(instrument: Instrument) -> Self {
        tracing::trace!(symbol = instrument.symbol(), "creating order book");
        OrderBook {
            instrument,
            bids: SideIndex::new(Extremum::Max),
            asks: SideIndex::new(Extremum::Min),
            arena: Arena::new(),
            registry: HashMap::new(),
            changes: ChangeLog::new(),
            next_arrival_seq: 0,
        }
    }

    /// The instrument this book trades.
    pub fn instrument(&self) -> &Instrument {
        &self.instrument
    }

    /// O(1) peek of both sides' best price.
    pub fn best_bid_ask(&self) -> (Option<Price>, Option<Price>) {
        (self.bids.best_price(), self.asks.best_price())
    }

    /// The current value of the monotonic change-log version counter.
    /// Equals the total number of mutations applied since construction.
    pub fn current_version(&self) -> u64 {
        self.changes.current_version()
    }

    /// All change records with `version > since`, in order.
    pub fn updates_since(&self, since: u64) -> Vec<ChangeRecord> {
        self.changes.updates_since(since)
    }

    /// Discards the buffered change records. Does not reset
    /// `current_version()` — a consumer that has caught up may call this
    /// to free memory and resume `updates_since` from the version it last
    /// saw; a consumer that skips ahead of cleared history must instead
    /// request a fresh `snapshot` and resume from its returned version.
    pub fn clear_changes(&mut self) {
        self.changes.clear();
    }

    /// Total number of resting orders on each side, `(bids, asks)`.
    pub fn order_count(&self) -> (usize, usize) {
        (
            self.bids.levels_best_first().map(|l| l.order_count() as usize).sum(),
            self.asks.levels_best_first().map(|l| l.order_count() as usize).sum(),
        )
    }

    /// Resting volume at an exact `(side, price)`, or 0 if no level exists
    /// there. O(log L).
    pub fn depth_at(&self, side: crate::types::Side, price: Price) -> crate::types::Quantity {
        let index = match side {
            crate::types::Side::Buy => &self.bids,
            crate::types::Side::Sell => &self.asks,
        };
        index.get(price).map(|l| l.total_volume()).unwrap_or(0)
    }

    /// Mid price: the arithmetic mean of the best bid and best ask, or
    /// `None` if either side is empty.
    pub fn mid_price(&self) -> Option<f64> {
        match self.best_bid_ask() {
            (Some(bid), Some(ask)) => Some((bid as f64 + ask as f64) / 2.0),
            _ => None,
        }
    }

    /// Spread: best ask minus best bid, or `None` if either side is
    /// empty.
    pub fn spread(&self) -> Option<Price> {
        match self.best_bid_ask() {
            (Some(bid), Some(ask)) => Some(ask.saturating_sub(bid)),
            _ => None,
        }
    }
}
