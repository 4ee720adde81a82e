//! Error types for the three mutating operations. Each kind is closed and
//! recoverable by the caller (spec §7); none of them are ever raised by
//! internal engine bugs, only by caller input, so `submit`/`cancel`/
//! `modify` never panic on externally supplied data.
//!
//! Matching the teacher crate's own idiom (`orderbook::error::OrderBookError`
//! and `orderbook::sequencer::error::JournalError`): a hand-written `enum`
//! plus manual `Display`/`Error` impls, rather than a `thiserror` derive —
//! see DESIGN.md for why this crate does not depend on `thiserror` at all.

use std::fmt;

/// Errors raised by [`crate::OrderBook::submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SubmitError {
    /// `quantity` was zero.
    InvalidQuantity,
    /// A limit order's price was missing or not a positive multiple of
    /// the instrument's tick size.
    InvalidTickSize,
    /// The order's kind was not market or limit.
    InvalidOrderType,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::InvalidQuantity => write!(f, "order quantity must be greater than zero"),
            SubmitError::InvalidTickSize => {
                write!(f, "limit price must be a positive multiple of the tick size")
            }
            SubmitError::InvalidOrderType => write!(f, "order kind must be market or limit"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// Errors raised by [`crate::OrderBook::cancel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum CancelError {
    /// No resting order with the given id exists.
    OrderNotFound,
}

impl fmt::Display for CancelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CancelError::OrderNotFound => write!(f, "order not found"),
        }
    }
}

impl std::error::Error for CancelError {}

/// Errors raised by [`crate::OrderBook::modify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ModifyError {
    /// No resting order with the given id exists.
    OrderNotFound,
    /// `new_quantity` was zero.
    InvalidQuantity,
}

impl fmt::Display for ModifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModifyError::OrderNotFound => write!(f, "order not found"),
            ModifyError::InvalidQuantity => write!(f, "new quantity must be greater than zero"),
        }
    }
}

impl std::error::Error for ModifyError {}
