//! Converting fields and whole records with serde.
//!
//! Run with: cargo run --example typed_records

use csvline::{from_str, parse_as, to_string, try_parse_as, Dialect};
use serde::{Deserialize, Serialize};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
enum Status {
    Pending,
    Shipped,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Order {
    id: u32,
    customer: String,
    total: f64,
    status: Status,
    note: Option<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let scores: Vec<u8> = parse_as("10, 20 ,30", Dialect::Normal)?;
    println!("Scores: {:?}", scores);

    // Unconvertible fields fall back to the default
    let lenient: Vec<i32> = try_parse_as("1,two,3", Dialect::Normal);
    println!("Lenient: {:?}", lenient);

    let order = Order {
        id: 7,
        customer: "Ortiz, Ana".to_string(),
        total: 99.5,
        status: Status::Shipped,
        note: None,
    };

    let line = to_string(&order, Dialect::Normal)?;
    println!("\nOrder as a record: {}", line);

    let back: Order = from_str(&line, Dialect::Normal)?;
    println!("Back again: {:?}", back);
    assert_eq!(back, order);

    // Tuples work as anonymous records
    let (name, count, active): (String, i64, bool) = from_str("widget,12,true", Dialect::Strict)?;
    println!("\nTuple: {} x{} active={}", name, count, active);

    if let Err(err) = from_str::<Order, _>("7,Ana,cheap,Pending,", Dialect::Normal) {
        println!("Bad record: {}", err);
    }

    Ok(())
}
