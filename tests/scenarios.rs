//! End-to-end scenarios S1-S7, tick_size = 0.01 (represented as 1 cent-tick
//! -> prices are whole numbers of ticks, so `100.50` is written `10_050`).

use orderbook_engine::{CancelError, Instrument, Order, OrderBook, Side, SubmitError};

fn book() -> OrderBook {
    OrderBook::new(Instrument::new("TEST", 1))
}

#[test]
fn s1_basic_cross() {
    let mut b = book();
    b.submit(Order::limit(1, Side::Sell, 10_050, 10)).unwrap();
    let (id, fills) = b.submit(Order::limit(2, Side::Buy, 10_050, 10)).unwrap();

    assert_eq!(id, 2);
    assert_eq!(fills.len(), 1);
    assert_eq!(fills[0].resting_id, 1);
    assert_eq!(fills[0].filled_qty, 10);
    assert_eq!(fills[0].executed_price, 10_050);
    assert_eq!(b.best_bid_ask(), (None, None));
    assert_eq!(b.order_count(), (0, 0));
    assert_eq!(b.current_version(), 2);
}

#[test]
fn s2_partial_fill_then_rest() {
    let mut b = book();
    b.submit(Order::limit(1, Side::Sell, 10_050, 10)).unwrap();
    let (_, fills) = b.submit(Order::limit(2, Side::Buy, 10_050, 15)).unwrap();

    assert_eq!(fills.len(), 1);
    assert_eq!(fills[0], orderbook_engine::Fill { resting_id: 1, filled_qty: 10, executed_price: 10_050 });

    let snap = b.snapshot(10);
    assert_eq!(snap.bids, vec![(10_050, 5)]);
    assert!(snap.asks.is_empty());
    assert_eq!(b.order_count(), (1, 0));
}

#[test]
fn s3_market_walks_multiple_levels() {
    let mut b = book();
    b.submit(Order::limit(1, Side::Sell, 10_050, 10)).unwrap();
    b.submit(Order::limit(2, Side::Sell, 10_060, 5)).unwrap();

    let (_, fills) = b.submit(Order::market(3, Side::Buy, 15)).unwrap();
    assert_eq!(
        fills,
        vec![
            orderbook_engine::Fill { resting_id: 1, filled_qty: 10, executed_price: 10_050 },
            orderbook_engine::Fill { resting_id: 2, filled_qty: 5, executed_price: 10_060 },
        ]
    );
    assert_eq!(b.best_bid_ask(), (None, None));
}

#[test]
fn s4_market_under_fill_reports_partial_and_drops_residual() {
    let mut b = book();
    b.submit(Order::limit(1, Side::Sell, 10_050, 10)).unwrap();

    let (id, fills) = b.submit(Order::market(2, Side::Buy, 15)).unwrap();
    assert_eq!(fills, vec![orderbook_engine::Fill { resting_id: 1, filled_qty: 10, executed_price: 10_050 }]);
    assert_eq!(b.best_bid_ask(), (None, None));

    let updates = b.updates_since(0);
    let partial = updates
        .iter()
        .find(|c| c.action == orderbook_engine::ChangeAction::PartialFill && c.id == Some(2))
        .expect("a partial_fill record for the market order's under-fill");
    assert_eq!(partial.price, None);
    assert_eq!(partial.quantity, 10);
    assert_eq!(id, 2);
}

#[test]
fn s4b_market_order_with_zero_fill_still_emits_partial_fill() {
    let mut b = book();
    let (_id, fills) = b.submit(Order::market(1, Side::Buy, 5)).unwrap();
    assert!(fills.is_empty());

    let updates = b.updates_since(0);
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].action, orderbook_engine::ChangeAction::PartialFill);
    assert_eq!(updates[0].quantity, 0);
}

#[test]
fn s5_cancel_by_id() {
    let mut b = book();
    b.submit(Order::limit(1, Side::Buy, 10_050, 10)).unwrap();
    b.cancel(1).unwrap();

    assert_eq!(b.order_count(), (0, 0));
    assert_eq!(b.best_bid_ask(), (None, None));
    let updates = b.updates_since(0);
    assert_eq!(updates.len(), 2);
    assert_eq!(updates[0].action, orderbook_engine::ChangeAction::Add);
    assert_eq!(updates[1].action, orderbook_engine::ChangeAction::Delete);
    assert_eq!(b.current_version(), 2);

    assert_eq!(b.cancel(1), Err(CancelError::OrderNotFound));
}

#[test]
fn s6_modify_increase_loses_priority() {
    let mut b = book();
    b.submit(Order::limit(1, Side::Buy, 100, 5)).unwrap();
    b.submit(Order::limit(2, Side::Buy, 100, 5)).unwrap();
    b.modify(1, 8).unwrap();

    assert_eq!(b.depth_at(Side::Buy, 100), 13);

    // id 1 lost priority; a crossing sell for 5 should hit id 2 first.
    let (_, fills) = b.submit(Order::limit(3, Side::Sell, 100, 5)).unwrap();
    assert_eq!(fills.len(), 1);
    assert_eq!(fills[0].resting_id, 2);
}

#[test]
fn s7_invalid_tick_size_leaves_state_unchanged() {
    let mut b = book();
    let before_version = b.current_version();
    let err = b.submit(Order::limit(1, Side::Buy, 10_051, 10)).unwrap_err();
    assert_eq!(err, SubmitError::InvalidTickSize);
    assert_eq!(b.current_version(), before_version);
    assert_eq!(b.best_bid_ask(), (None, None));
}

#[test]
fn invalid_quantity_is_rejected_without_mutating_state() {
    let mut b = book();
    assert_eq!(
        b.submit(Order::limit(1, Side::Buy, 100, 0)).unwrap_err(),
        SubmitError::InvalidQuantity
    );
    assert_eq!(b.current_version(), 0);
}

#[test]
fn modify_unknown_id_reports_not_found() {
    let mut b = book();
    assert_eq!(
        b.modify(42, 5).unwrap_err(),
        orderbook_engine::ModifyError::OrderNotFound
    );
}

#[test]
fn modify_zero_quantity_is_rejected() {
    let mut b = book();
    b.submit(Order::limit(1, Side::Buy, 100, 5)).unwrap();
    assert_eq!(
        b.modify(1, 0).unwrap_err(),
        orderbook_engine::ModifyError::InvalidQuantity
    );
}
