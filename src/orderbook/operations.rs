//! Public mutating operations: `submit`, `cancel`, `modify` (spec §4.2.1).

use super::book::OrderBook;
use super::error::{CancelError, ModifyError, SubmitError};
use crate::change_log::ChangeAction;
use crate::types::{Fill, Order, OrderId, OrderKind, Quantity, Side};

impl OrderBook {
    /// Validates and dispatches an incoming order.
    ///
    /// Preconditions are checked in order; the first failing one aborts
    /// without any state change:
    /// 1. `order.quantity > 0`
    /// 2. `order.kind` is `Market` or `Limit`
    /// 3. if `Limit`: `order.price` is present and a valid tick-size
    ///    multiple for this book's instrument
    ///
    /// # Errors
    /// See [`SubmitError`].
    pub fn submit(&mut self, order: Order) -> Result<(OrderId, Vec<Fill>), SubmitError> {
        if order.quantity == 0 {
            return Err(SubmitError::InvalidQuantity);
        }
        match order.kind {
            OrderKind::Market | OrderKind::Limit => {}
        }
        if order.kind == OrderKind::Limit {
            match order.price {
                Some(price) if self.instrument.is_valid_price(price) => {}
                _ => return Err(SubmitError::InvalidTickSize),
            }
        }

        tracing::trace!(
            id = order.id,
            side = %order.side,
            kind = %order.kind,
            quantity = order.quantity,
            "submitting order"
        );

        Ok(match order.kind {
            OrderKind::Limit => self.process_limit(order),
            OrderKind::Market => self.process_market(order),
        })
    }

    /// Cancels a resting order. If its level becomes empty, the level is
    /// removed from the side index. Emits one `Delete` change record.
    ///
    /// # Errors
    /// [`CancelError::OrderNotFound`] if no resting order with this id
    /// exists.
    pub fn cancel(&mut self, id: OrderId) -> Result<(), CancelError> {
        let slot = self.registry.remove(&id).ok_or(CancelError::OrderNotFound)?;
        let (side, price, quantity) = {
            let order = self.arena.get(slot);
            (order.side, order.price, order.quantity)
        };
        let index = match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        };
        let level = index.get_mut(price).expect("registry entry must have a live level");
        level.unlink(&mut self.arena, slot);
        let empty = level.is_empty();
        self.arena.remove(slot);
        if empty {
            index.remove_level(price);
        }

        tracing::trace!(id, "cancelled order");
        self.changes.push(ChangeAction::Delete, side, Some(price), quantity, Some(id));
        Ok(())
    }

    /// Amends a resting order's quantity in place, preserving its price
    /// and id (spec §4.2.1: quantity-only amend).
    ///
    /// A decrease keeps time priority and just shrinks the resting
    /// quantity. An increase loses time priority: the order is moved to
    /// the tail of its level's FIFO. Either way this never matches, even
    /// if the new state would cross the opposite side — `modify` is
    /// defined as a rest-side amend only; a price change is `cancel` +
    /// `submit`.
    ///
    /// # Errors
    /// [`ModifyError::InvalidQuantity`] if `new_quantity == 0`.
    /// [`ModifyError::OrderNotFound`] if no resting order with this id
    /// exists.
    pub fn modify(&mut self, id: OrderId, new_quantity: Quantity) -> Result<OrderId, ModifyError> {
        if new_quantity == 0 {
            return Err(ModifyError::InvalidQuantity);
        }
        let slot = *self.registry.get(&id).ok_or(ModifyError::OrderNotFound)?;
        let (side, price, old_quantity) = {
            let order = self.arena.get(slot);
            (order.side, order.price, order.quantity)
        };
        let index = match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        };
        let level = index.get_mut(price).expect("registry entry must have a live level");

        if new_quantity <= old_quantity {
            self.arena.get_mut(slot).quantity = new_quantity;
            level.decrease_volume(old_quantity - new_quantity);
        } else {
            level.unlink(&mut self.arena, slot);
            self.arena.get_mut(slot).quantity = new_quantity;
            level.push_tail_existing(&mut self.arena, slot);
        }

        tracing::trace!(id, new_quantity, "modified order");
        self.changes.push(ChangeAction::Update, side, Some(price), new_quantity, Some(id));
        Ok(id)
    }
}
