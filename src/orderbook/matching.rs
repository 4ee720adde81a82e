//! The core matching routines (§4.2.2-§4.2.4): walking the opposing side
//! in price order, consuming resting orders in arrival order, and
//! emitting change records for every fill and rest.

use super::book::OrderBook;
use crate::change_log::ChangeAction;
use crate::price_level::RestingOrder;
use crate::types::{Fill, Order, OrderId, Price, Quantity, Side};

impl OrderBook {
    /// Runs the match loop for an incoming order of `side` against the
    /// opposing side, honoring `price_limit` (limit orders: stop once the
    /// opposing best price no longer crosses; market orders: `None`,
    /// always cross into the best available level). Returns the fills
    /// produced and the quantity still unfilled when the loop stops.
    ///
    /// This is match-at-level (spec §4.2.4) driven from the book level:
    /// for each opposing level in best-first order, consume as much of
    /// `remaining` as that level can absorb, emit a Fill/PartialFill
    /// change record per resting order touched, and drop any level that
    /// empties out.
    fn run_match_loop(
        &mut self,
        side: Side,
        mut remaining: Quantity,
        price_limit: Option<Price>,
    ) -> (Vec<Fill>, Quantity) {
        let opposite = side.opposite();
        let mut all_fills = Vec::new();

        while remaining > 0 {
            let opp_index = match opposite {
                Side::Buy => &self.bids,
                Side::Sell => &self.asks,
            };
            let Some(best_price) = opp_index.best_price() else {
                break;
            };
            if let Some(limit) = price_limit {
                let crosses = match side {
                    Side::Buy => best_price <= limit,
                    Side::Sell => best_price >= limit,
                };
                if !crosses {
                    break;
                }
            }

            let opp_index_mut = match opposite {
                Side::Buy => &mut self.bids,
                Side::Sell => &mut self.asks,
            };
            let level = opp_index_mut
                .get_mut(best_price)
                .expect("best_price always names a present level");

            let mut fills = Vec::new();
            let mut fully_filled = Vec::new();
            remaining = level.match_against(&mut self.arena, remaining, &mut fills, &mut fully_filled);
            let level_empty = level.is_empty();

            for fill in &fills {
                let action = if fully_filled.contains(&fill.resting_id) {
                    ChangeAction::Fill
                } else {
                    ChangeAction::PartialFill
                };
                self.changes.push(
                    action,
                    opposite,
                    Some(best_price),
                    fill.filled_qty,
                    Some(fill.resting_id),
                );
            }
            for id in &fully_filled {
                self.registry.remove(id);
            }
            all_fills.extend(fills);

            if level_empty {
                let opp_index_mut = match opposite {
                    Side::Buy => &mut self.bids,
                    Side::Sell => &mut self.asks,
                };
                opp_index_mut.remove_level(best_price);
            }

            // `match_against` only returns a nonzero `remaining` when it
            // ran the level dry (every order it held was fully consumed);
            // otherwise the loop above already drove `remaining` to 0 and
            // the `while` condition ends this loop on its own.
        }

        (all_fills, remaining)
    }

    /// Limit order processing (spec §4.2.2): match against crossing
    /// opposing levels, then rest any residual at the order's own price.
    pub(super) fn process_limit(&mut self, order: Order) -> (OrderId, Vec<Fill>) {
        let price = order.price.expect("validated: limit orders carry a price");
        let (fills, remaining) = self.run_match_loop(order.side, order.quantity, Some(price));

        if remaining > 0 {
            let arrival_seq = self.next_arrival_seq;
            self.next_arrival_seq += 1;
            let resting = RestingOrder {
                id: order.id,
                side: order.side,
                price,
                quantity: remaining,
                arrival_seq,
                prev: None,
                next: None,
            };
            let index = match order.side {
                Side::Buy => &mut self.bids,
                Side::Sell => &mut self.asks,
            };
            let level = index.get_or_insert(price);
            let slot = level.push_tail_new(&mut self.arena, resting);
            self.registry.insert(order.id, slot);
            self.changes.push(
                ChangeAction::Add,
                order.side,
                Some(price),
                remaining,
                Some(order.id),
            );
        }

        (order.id, fills)
    }

    /// Market order processing (spec §4.2.3): match against the best
    /// available liquidity with no price gate; never rests. An under-fill
    /// is reported via a terminal `PartialFill` change record carrying the
    /// filled portion, with `price = None` since market orders carry no
    /// price.
    pub(super) fn process_market(&mut self, order: Order) -> (OrderId, Vec<Fill>) {
        let (fills, remaining) = self.run_match_loop(order.side, order.quantity, None);

        if remaining > 0 {
            let filled_total = order.quantity - remaining;
            self.changes.push(
                ChangeAction::PartialFill,
                order.side,
                None,
                filled_total,
                Some(order.id),
            );
        }

        (order.id, fills)
    }
}
