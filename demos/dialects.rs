//! Normal vs Strict dialects, and other delimiters.
//!
//! Run with: cargo run --example dialects

use csvline::{format, parse, CsvOptions, Delimiter, Dialect, Error as CsvError};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let fields = vec!["id", "name, full", "city"];

    println!("Normal:");
    println!("  {}", format(&fields, Dialect::Normal)?);

    println!("\nStrict:");
    match format(&fields, Dialect::Strict) {
        Ok(line) => println!("  {}", line),
        Err(CsvError::DialectViolation { index, field, .. }) => {
            println!("  field {} ({:?}) contains the delimiter", index, field)
        }
        Err(other) => return Err(other.into()),
    }

    // Strict never interprets quotes
    println!("\nParsing `a,\"b,c\"` in both dialects:");
    println!("  normal: {:?}", parse("a,\"b,c\"", Dialect::Normal));
    println!("  strict: {:?}", parse("a,\"b,c\"", Dialect::Strict));

    // With a tab delimiter commas are ordinary text
    let tabs = CsvOptions::strict().with_delimiter(Delimiter::Tab);
    let line = format(&fields, &tabs)?;
    println!("\nStrict, tab-delimited: {:?}", line);
    println!("  back: {:?}", parse(&line, &tabs));

    let pipes = CsvOptions::new().with_delimiter(Delimiter::Pipe);
    println!("\nPipe-delimited: {}", format(["a|b", "c"], &pipes)?);

    // Quote fields with surrounding whitespace so it survives parsing
    let padded = CsvOptions::new().with_quote_whitespace(true);
    let line = format(["  indented", "plain"], &padded)?;
    println!("\nWhitespace quoting: {}", line);
    println!("  back: {:?}", parse(&line, &padded));

    Ok(())
}
