//! # Limit Order Book Matching Engine
//!
//! A single-instrument limit order book: an ordered price index per side,
//! FIFO price levels enforcing price-time priority, a matching algorithm
//! for market and limit orders, and a versioned change log for downstream
//! consumers.
//!
//! ## Scope
//!
//! This crate is the core matching engine for **one instrument**. It does
//! not implement:
//!
//! - a multi-instrument **manager** that routes `symbol -> OrderBook` and
//!   fans out `(snapshot, version)` / `(updates_since, version)` to
//!   subscribers (subscribe -> initial snapshot -> incremental stream ->
//!   unsubscribe, with incrementals guaranteed to start at `version + 1`);
//! - any RPC/wire transport, client session lifecycle, or the
//!   `OrderBookUpdate{symbol, is_snapshot, bids, asks, changes, version}`
//!   message schema;
//! - persistence, crash recovery, replication, configuration loading, CLI,
//!   or metrics shipping.
//!
//! Those are external collaborators this crate is designed to slot into —
//! an embedder owns one [`OrderBook`] per instrument (sharded, since
//! matching is inherently sequential per book) and builds the
//! subscription/RPC surface on top of `snapshot`, `updates_since` and
//! `current_version`.
//!
//! ## Order types
//!
//! Only **market** and **limit**, day time-in-force. No stop, iceberg,
//! pegged, GTD, or hidden orders; no self-trade prevention, auction
//! phases, circuit breakers, or fees.
//!
//! ## Example
//!
//! ```
//! use orderbook_engine::prelude::*;
//!
//! let mut book = OrderBook::new(Instrument::new("BTC/USD", 1));
//! book.submit(Order::limit(1, Side::Sell, 10_050, 10)).unwrap();
//! let (id, fills) = book.submit(Order::limit(2, Side::Buy, 10_050, 10)).unwrap();
//! assert_eq!(id, 2);
//! assert_eq!(fills.len(), 1);
//! assert_eq!(book.best_bid_ask(), (None, None));
//! ```

mod arena;
mod change_log;
mod instrument;
mod orderbook;
mod price_level;
mod side_index;
mod types;

pub use change_log::{ChangeAction, ChangeRecord};
pub use instrument::Instrument;
pub use orderbook::{BookSnapshot, CancelError, ModifyError, OrderBook, SubmitError};
pub use types::{Fill, Order, OrderId, OrderKind, Price, Quantity, Side};

/// Common imports for embedders wiring an [`OrderBook`] into a larger
/// system, mirroring the teacher crate's own `prelude` module.
pub mod prelude {
    pub use crate::{
        BookSnapshot, CancelError, ChangeAction, ChangeRecord, Fill, Instrument, ModifyError,
        Order, OrderBook, OrderId, OrderKind, Price, Quantity, Side, SubmitError,
    };
}
