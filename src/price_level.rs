//! Resting orders (C2) and price levels (C3): the intrusive FIFO queue
//! that holds resting liquidity at a single (side, price).

use crate::arena::{Arena, SlotIdx};
use crate::types::{Fill, OrderId, Price, Quantity, Side};

/// A limit order that did not fully match on entry and is now resting in
/// a price level's FIFO queue.
pub(crate) struct RestingOrder {
    pub(crate) id: OrderId,
    pub(crate) side: Side,
    pub(crate) price: Price,
    pub(crate) quantity: Quantity,
    /// Monotonic arrival sequence assigned at submission; breaks ties in
    /// FIFO order within a level.
    pub(crate) arrival_seq: u64,
    pub(crate) prev: Option<SlotIdx>,
    pub(crate) next: Option<SlotIdx>,
}

/// All resting orders at a single (side, price). The level owns its FIFO:
/// removing the last order from it is the signal for the side index to
/// drop the level entirely.
pub(crate) struct PriceLevel {
    price: Price,
    total_volume: Quantity,
    order_count: u32,
    head: Option<SlotIdx>,
    tail: Option<SlotIdx>,
}

impl PriceLevel {
    pub(crate) fn new(price: Price) -> Self {
        PriceLevel {
            price,
            total_volume: 0,
            order_count: 0,
            head: None,
            tail: None,
        }
    }

    pub(crate) fn price(&self) -> Price {
        self.price
    }

    pub(crate) fn total_volume(&self) -> Quantity {
        self.total_volume
    }

    pub(crate) fn order_count(&self) -> u32 {
        self.order_count
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.order_count == 0
    }

    /// Shrinks the level's aggregate volume by `delta` without touching
    /// the FIFO — used by `modify` when a resting order's quantity is
    /// decreased in place and keeps its position/time priority.
    pub(crate) fn decrease_volume(&mut self, delta: Quantity) {
        self.total_volume -= delta;
    }

    /// Appends a brand-new resting order to the tail of the FIFO,
    /// allocating a fresh arena slot for it.
    pub(crate) fn push_tail_new(&mut self, arena: &mut Arena, order: RestingOrder) -> SlotIdx {
        let quantity = order.quantity;
        let idx = arena.insert(order);
        self.attach_tail(arena, idx);
        self.total_volume += quantity;
        self.order_count += 1;
        idx
    }

    /// Detaches `idx` from wherever it sits in the FIFO (head, tail, or
    /// middle) in O(1), adjusting aggregates by the node's current
    /// quantity. The slot itself is left in the arena — the caller decides
    /// whether to free it (cancel, full fill) or re-splice it (modify
    /// increase).
    pub(crate) fn unlink(&mut self, arena: &mut Arena, idx: SlotIdx) {
        let (prev, next, quantity) = {
            let node = arena.get(idx);
            (node.prev, node.next, node.quantity)
        };
        match prev {
            Some(p) => arena.get_mut(p).next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => arena.get_mut(n).prev = prev,
            None => self.tail = prev,
        }
        let node = arena.get_mut(idx);
        node.prev = None;
        node.next = None;
        self.total_volume -= quantity;
        self.order_count -= 1;
    }

    /// Re-attaches an existing slot (already unlinked) at the tail,
    /// without touching the arena's free list. Used by `modify` when a
    /// quantity increase loses time priority and must go to the back of
    /// the queue.
    pub(crate) fn push_tail_existing(&mut self, arena: &mut Arena, idx: SlotIdx) {
        let quantity = arena.get(idx).quantity;
        self.attach_tail(arena, idx);
        self.total_volume += quantity;
        self.order_count += 1;
    }

    fn attach_tail(&mut self, arena: &mut Arena, idx: SlotIdx) {
        arena.get_mut(idx).prev = self.tail;
        arena.get_mut(idx).next = None;
        match self.tail {
            Some(t) => arena.get_mut(t).next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
    }

    /// Walks the FIFO from head, consuming up to `requested` quantity.
    /// Fully-consumed resting orders are detached and their arena slots
    /// freed; their ids are appended to `fully_filled` so the caller can
    /// drop them from the order registry. Returns the quantity still
    /// unfilled (0 if `requested` was fully satisfied).
    pub(crate) fn match_against(
        &mut self,
        arena: &mut Arena,
        mut requested: Quantity,
        fills: &mut Vec<Fill>,
        fully_filled: &mut Vec<OrderId>,
    ) -> Quantity {
        while requested > 0 {
            let Some(head_idx) = self.head else {
                break;
            };
            let (id, available) = {
                let node = arena.get(head_idx);
                (node.id, node.quantity)
            };
            let traded = requested.min(available);
            arena.get_mut(head_idx).quantity -= traded;
            self.total_volume -= traded;
            requested -= traded;
            fills.push(Fill {
                resting_id: id,
                filled_qty: traded,
                executed_price: self.price,
            });

            if arena.get(head_idx).quantity == 0 {
                // order_count/total_volume for the detach itself: total_volume
                // was already decremented above for the traded amount, and
                // the node's remaining quantity is 0, so unlink's further
                // subtraction of 0 is a no-op; only order_count changes here.
                let next = arena.get(head_idx).next;
                self.head = next;
                match next {
                    Some(n) => arena.get_mut(n).prev = None,
                    None => self.tail = None,
                }
                self.order_count -= 1;
                arena.remove(head_idx);
                fully_filled.push(id);
            } else {
                break;
            }
        }
        requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_order(id: OrderId, quantity: Quantity, seq: u64) -> RestingOrder {
        RestingOrder {
            id,
            side: Side::Buy,
            price: 100,
            quantity,
            arrival_seq: seq,
            prev: None,
            next: None,
        }
    }

    #[test]
    fn fifo_preserves_arrival_order_through_match() {
        let mut arena = Arena::new();
        let mut level = PriceLevel::new(100);
        level.push_tail_new(&mut arena, new_order(1, 5, 0));
        level.push_tail_new(&mut arena, new_order(2, 5, 1));
        assert_eq!(level.total_volume(), 10);
        assert_eq!(level.order_count(), 2);

        let mut fills = Vec::new();
        let mut fully_filled = Vec::new();
        let remaining = level.match_against(&mut arena, 7, &mut fills, &mut fully_filled);

        assert_eq!(remaining, 0);
        assert_eq!(fully_filled, vec![1]);
        assert_eq!(
            fills,
            vec![
                Fill { resting_id: 1, filled_qty: 5, executed_price: 100 },
                Fill { resting_id: 2, filled_qty: 2, executed_price: 100 },
            ]
        );
        assert_eq!(level.total_volume(), 3);
        assert_eq!(level.order_count(), 1);
    }

    #[test]
    fn unlink_from_middle_preserves_remaining_fifo_order() {
        let mut arena = Arena::new();
        let mut level = PriceLevel::new(100);
        let a = level.push_tail_new(&mut arena, new_order(1, 5, 0));
        let b = level.push_tail_new(&mut arena, new_order(2, 5, 1));
        let _c = level.push_tail_new(&mut arena, new_order(3, 5, 2));

        level.unlink(&mut arena, b);
        assert_eq!(level.order_count(), 2);
        assert_eq!(level.total_volume(), 10);

        let mut fills = Vec::new();
        let mut fully_filled = Vec::new();
        level.match_against(&mut arena, 10, &mut fills, &mut fully_filled);
        assert_eq!(fully_filled, vec![1, 3]);
        let _ = a;
    }

    #[test]
    fn push_tail_existing_moves_order_to_back_of_queue() {
        let mut arena = Arena::new();
        let mut level = PriceLevel::new(100);
        let a = level.push_tail_new(&mut arena, new_order(1, 5, 0));
        level.push_tail_new(&mut arena, new_order(2, 5, 1));

        level.unlink(&mut arena, a);
        arena.get_mut(a).quantity = 8;
        level.push_tail_existing(&mut arena, a);

        assert_eq!(level.total_volume(), 13);
        let mut fills = Vec::new();
        let mut fully_filled = Vec::new();
        level.match_against(&mut arena, 13, &mut fills, &mut fully_filled);
        assert_eq!(fully_filled, vec![2, 1]);
    }
}
