//! Primitive value types shared across the order book.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A fixed-point price, expressed as an integer count of the instrument's
/// smallest tick. All comparisons and arithmetic on `Price` are exact —
/// there is no floating point anywhere in the matching path.
pub type Price = u64;

/// A non-negative order quantity.
pub type Quantity = u64;

/// Caller-assigned unique order identifier. Uniqueness across the lifetime
/// of an `OrderBook` is the caller's responsibility; the engine never
/// reuses or reassigns an id.
pub type OrderId = u64;

/// Which side of the book an order rests on or trades against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// A buy order: rests in the bid index, best price is the maximum.
    Buy,
    /// A sell order: rests in the ask index, best price is the minimum.
    Sell,
}

impl Side {
    /// The opposite side, i.e. the side an incoming order of this side
    /// matches against.
    pub fn opposite(self) -> Side {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "buy"),
            Side::Sell => write!(f, "sell"),
        }
    }
}

/// The kind of an incoming order. Only market and limit orders exist in
/// this engine (no stop, iceberg, pegged, GTD, or hidden orders).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderKind {
    /// Executes immediately against the best available opposing liquidity
    /// and never rests; any residual is dropped.
    Market,
    /// Executes against crossing opposing liquidity on entry and rests any
    /// residual at `price`.
    Limit,
}

impl fmt::Display for OrderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderKind::Market => write!(f, "market"),
            OrderKind::Limit => write!(f, "limit"),
        }
    }
}

/// An incoming order as submitted by a caller. `price` is required for
/// `Limit` orders and must be `None` for `Market` orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order {
    /// Caller-assigned unique identifier.
    pub id: OrderId,
    /// Buy or sell.
    pub side: Side,
    /// Market or limit.
    pub kind: OrderKind,
    /// Limit price; `None` for market orders.
    pub price: Option<Price>,
    /// Quantity requested; must be greater than zero.
    pub quantity: Quantity,
}

impl Order {
    /// Builds a limit order.
    pub fn limit(id: OrderId, side: Side, price: Price, quantity: Quantity) -> Self {
        Order {
            id,
            side,
            kind: OrderKind::Limit,
            price: Some(price),
            quantity,
        }
    }

    /// Builds a market order.
    pub fn market(id: OrderId, side: Side, quantity: Quantity) -> Self {
        Order {
            id,
            side,
            kind: OrderKind::Market,
            price: None,
            quantity,
        }
    }
}

/// A single trade produced by matching: the resting order that was hit,
/// how much of it was consumed, and the price the trade executed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fill {
    /// Id of the resting order that absorbed this quantity.
    pub resting_id: OrderId,
    /// Quantity traded against `resting_id`.
    pub filled_qty: Quantity,
    /// Price the trade executed at — always the resting order's level
    /// price, never the taker's limit price.
    pub executed_price: Price,
}
