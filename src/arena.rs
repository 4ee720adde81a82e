//! Slot arena backing the intrusive FIFO queues inside each price level.
//!
//! Resting orders are stored in a single `Vec` of slots, indexed by
//! [`SlotIdx`]. Each [`super::price_level::PriceLevel`] is the unique owner
//! of a doubly-linked chain of slots (its FIFO); links are plain indices
//! into this arena rather than pointers, so there are no cycles to worry
//! about and no unsafe code is needed (spec design note: "arena-allocated
//! slots with indices (no cycles, trivially safe)").

use crate::price_level::RestingOrder;

/// An index into the arena. Opaque to callers outside this crate's
/// `orderbook` module; stored in the order registry for O(1) lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct SlotIdx(usize);

enum Slot {
    Occupied(RestingOrder),
    Free(Option<usize>),
}

/// A growable, freelist-backed arena of [`RestingOrder`] slots.
#[derive(Default)]
pub(crate) struct Arena {
    slots: Vec<Slot>,
    free_head: Option<usize>,
}

impl Arena {
    pub(crate) fn new() -> Self {
        Arena {
            slots: Vec::new(),
            free_head: None,
        }
    }

    /// Inserts a resting order, reusing a freed slot if one is available.
    pub(crate) fn insert(&mut self, order: RestingOrder) -> SlotIdx {
        match self.free_head {
            Some(idx) => {
                let next_free = match &self.slots[idx] {
                    Slot::Free(next) => *next,
                    Slot::Occupied(_) => unreachable!("free list points at an occupied slot"),
                };
                self.free_head = next_free;
                self.slots[idx] = Slot::Occupied(order);
                SlotIdx(idx)
            }
            None => {
                self.slots.push(Slot::Occupied(order));
                SlotIdx(self.slots.len() - 1)
            }
        }
    }

    /// Removes and returns the order at `idx`, returning the slot to the
    /// free list.
    ///
    /// # Panics
    /// Panics if `idx` does not currently refer to an occupied slot —
    /// that would indicate a bookkeeping bug elsewhere in the engine
    /// (a registry entry outliving its slot), not a caller error.
    pub(crate) fn remove(&mut self, idx: SlotIdx) -> RestingOrder {
        let slot = std::mem::replace(&mut self.slots[idx.0], Slot::Free(self.free_head));
        self.free_head = Some(idx.0);
        match slot {
            Slot::Occupied(order) => order,
            Slot::Free(_) => panic!("arena slot {} was already free", idx.0),
        }
    }

    pub(crate) fn get(&self, idx: SlotIdx) -> &RestingOrder {
        match &self.slots[idx.0] {
            Slot::Occupied(order) => order,
            Slot::Free(_) => panic!("arena slot {} is free", idx.0),
        }
    }

    pub(crate) fn get_mut(&mut self, idx: SlotIdx) -> &mut RestingOrder {
        match &mut self.slots[idx.0] {
            Slot::Occupied(order) => order,
            Slot::Free(_) => panic!("arena slot {} is free", idx.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Side;

    fn order(id: u64) -> RestingOrder {
        RestingOrder {
            id,
            side: Side::Buy,
            price: 100,
            quantity: 1,
            arrival_seq: id,
            prev: None,
            next: None,
        }
    }

    #[test]
    fn freed_slots_are_reused() {
        let mut arena = Arena::new();
        let a = arena.insert(order(1));
        let b = arena.insert(order(2));
        arena.remove(a);
        let c = arena.insert(order(3));
        // The freed slot from `a` should be reused for `c`.
        assert_eq!(c, a);
        assert_eq!(arena.get(b).id, 2);
        assert_eq!(arena.get(c).id, 3);
    }
}
