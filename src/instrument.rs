//! Instrument descriptor: symbol identity and tick-size validity.

use crate::types::Price;

/// Identifies a traded instrument and the minimum price increment valid
/// orders on it must respect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instrument {
    symbol: String,
    tick_size: Price,
}

impl Instrument {
    /// Creates an instrument descriptor. `tick_size` must be greater than
    /// zero — a zero tick size would make every positive price "valid"
    /// and divide-by-zero the modulus check below, so the constructor
    /// guards against it up front rather than at every `is_valid_price`
    /// call.
    ///
    /// # Panics
    /// Panics if `tick_size` is zero. This is a construction-time
    /// programming error, not a runtime condition callers are expected to
    /// recover from — it is caught here rather than threaded through
    /// `submit`'s error type.
    pub fn new(symbol: impl Into<String>, tick_size: Price) -> Self {
        assert!(tick_size > 0, "tick_size must be greater than zero");
        Instrument {
            symbol: symbol.into(),
            tick_size,
        }
    }

    /// The instrument's symbol.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The minimum price increment.
    pub fn tick_size(&self) -> Price {
        self.tick_size
    }

    /// A price is valid when it is a positive, exact multiple of the tick
    /// size. Arithmetic is exact integer arithmetic; there is no floating
    /// point involved.
    pub fn is_valid_price(&self, price: Price) -> bool {
        price > 0 && price % self.tick_size == 0
    }
}
