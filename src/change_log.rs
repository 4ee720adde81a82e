//! Monotonic change log (C7): every mutation appends one versioned record.

use crate::types::{OrderId, Price, Quantity, Side};
use serde::{Deserialize, Serialize};

/// The kind of mutation a [`ChangeRecord`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeAction {
    /// A new resting order was added to the book.
    Add,
    /// A resting order's quantity changed in place (`modify`).
    Update,
    /// A resting order was removed without trading (`cancel`).
    Delete,
    /// A resting order was fully consumed by an incoming taker.
    Fill,
    /// A resting order was partially consumed and remains resting, or an
    /// incoming market order under-filled and its residual was dropped.
    PartialFill,
}

/// A single entry in the book's change log. `version` is a total order:
/// it starts at 0 and increments by exactly 1 per mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRecord {
    /// Monotonic sequence number of this mutation.
    pub version: u64,
    /// What kind of mutation this record describes.
    pub action: ChangeAction,
    /// The side affected — the resting order's side for `Add`/`Update`/
    /// `Delete`/`Fill`/`PartialFill` at a level, or the taker's side for a
    /// market order's terminal partial-fill summary record.
    pub side: Side,
    /// The price level affected. Absent for a market order's terminal
    /// partial-fill summary record, since market orders carry no price.
    pub price: Option<Price>,
    /// The quantity this record describes: the resting order's new
    /// quantity for `Update`, the quantity removed for `Delete`, the
    /// quantity traded for `Fill`/`PartialFill` at a resting order, or the
    /// total filled quantity for a market order's summary record.
    pub quantity: Quantity,
    /// The order id this record is about (resting order id, or the
    /// taker's own id for a market order's summary record).
    pub id: Option<OrderId>,
}

/// An append-only, versioned log of book mutations.
#[derive(Default)]
pub(crate) struct ChangeLog {
    records: Vec<ChangeRecord>,
    version: u64,
}

impl ChangeLog {
    pub(crate) fn new() -> Self {
        ChangeLog {
            records: Vec::new(),
            version: 0,
        }
    }

    pub(crate) fn current_version(&self) -> u64 {
        self.version
    }

    /// Appends a new record, advancing `version`.
    pub(crate) fn push(
        &mut self,
        action: ChangeAction,
        side: Side,
        price: Option<Price>,
        quantity: Quantity,
        id: Option<OrderId>,
    ) {
        self.version += 1;
        self.records.push(ChangeRecord {
            version: self.version,
            action,
            side,
            price,
            quantity,
            id,
        });
    }

    /// All records with `version > since`, in order. Records are stored in
    /// ascending version order, so a partition point gives this in
    /// O(log n + k) rather than a full scan.
    pub(crate) fn updates_since(&self, since: u64) -> Vec<ChangeRecord> {
        let start = self.records.partition_point(|r| r.version <= since);
        self.records[start..].to_vec()
    }

    /// Discards all buffered records. Does not reset `version` — a
    /// consumer that is caught up may free this memory and later resume
    /// `updates_since` from the version it last saw.
    pub(crate) fn clear(&mut self) {
        self.records.clear();
    }
}
