//! Demonstrates polling the change log the way a subscription fan-out
//! would: take a baseline version, mutate the book, then fetch only the
//! records a subscriber hasn't seen yet.

use orderbook_engine::prelude::*;

fn main() {
    tracing_subscriber::fmt::init();

    let mut book = OrderBook::new(Instrument::new("ETH/USD", 1));
    book.submit(Order::limit(1, Side::Buy, 3_000, 5)).unwrap();
    let watermark = book.current_version();

    book.submit(Order::limit(2, Side::Buy, 3_001, 2)).unwrap();
    book.cancel(1).unwrap();

    let updates = book.updates_since(watermark);
    println!("{} updates since version {watermark}:", updates.len());
    for change in &updates {
        println!(
            "  v{} {:?} {} price={:?} qty={} id={:?}",
            change.version, change.action, change.side, change.price, change.quantity, change.id
        );
    }

    println!("serialized: {}", serde_json::to_string(&updates).unwrap());

    book.clear_changes();
    assert!(book.updates_since(0).is_empty());
    assert_eq!(book.current_version(), watermark + 2);
}
