//! Parsing and formatting a single CSV line.
//!
//! Run with: cargo run --example simple

use csvline::{format, parse, Dialect};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let line = "Plate,\"Ortiz, Ana\",,  42 ";

    let fields = parse(line, Dialect::Normal);
    println!("Parsed {} fields from {:?}:", fields.len(), line);
    for (i, field) in fields.iter().enumerate() {
        println!("  [{}] {:?}", i, field);
    }

    // Fields holding the delimiter come back quoted
    let rebuilt = format(&fields, Dialect::Normal)?;
    println!("\nFormatted back: {}", rebuilt);
    assert_eq!(parse(&rebuilt, Dialect::Normal), fields);

    // Numbers and other scalars format through serde
    let numbers = format([3.5, -1.0, 12.25], Dialect::Normal)?;
    println!("Numbers: {}", numbers);

    Ok(())
}
