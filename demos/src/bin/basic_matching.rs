//! Demonstrates a resting sell being crossed by an incoming buy, and the
//! resulting top-of-book / snapshot state.

use orderbook_engine::prelude::*;

fn main() {
    tracing_subscriber::fmt::init();

    let mut book = OrderBook::new(Instrument::new("BTC/USD", 1));

    book.submit(Order::limit(1, Side::Sell, 10_050, 10)).unwrap();
    book.submit(Order::limit(2, Side::Sell, 10_060, 5)).unwrap();
    println!("resting asks: {:?}", book.snapshot(10).asks);

    let (id, fills) = book.submit(Order::market(3, Side::Buy, 12)).unwrap();
    println!("order {id} fills: {fills:?}");
    println!("best bid/ask after market buy: {:?}", book.best_bid_ask());
    println!("remaining asks: {:?}", book.snapshot(10).asks);
}
