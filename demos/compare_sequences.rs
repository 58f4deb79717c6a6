//! Comparing sequences and the small iterator helpers.
//!
//! Run with: cargo run --example compare_sequences

use csvline::seq::{element_at_or_default, except, remove_from_end};
use csvline::{compare, compare_by, parse_as, Dialect};
use std::cmp::Ordering;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let left: Vec<u32> = parse_as("1,2,3,4", Dialect::Normal)?;
    let right: Vec<u32> = parse_as("1,2,3,4,5", Dialect::Normal)?;

    println!("{:?} vs {:?}: {:?}", left, right, compare(left.iter().copied(), right.iter().copied()));

    // Zero is the default for u32, so it ends both sequences
    let outcome = compare([1, 0, 9], [1, 0, 7]);
    println!("[1, 0, 9] vs [1, 0, 7]: {:?}", outcome);
    assert_eq!(outcome, Ordering::Equal);

    let case_insensitive = |a: &&str, b: &&str| a.to_lowercase().cmp(&b.to_lowercase());
    println!(
        "case-insensitive [\"Ab\", \"c\"] vs [\"ab\", \"C\"]: {:?}",
        compare_by(["Ab", "c"], ["ab", "C"], case_insensitive)
    );

    println!("\nelement 1 of {:?}: {}", left, element_at_or_default(left.iter().copied(), 1));
    println!("element 9 of {:?}: {}", left, element_at_or_default(left.iter().copied(), 9));
    println!(
        "{:?} except 2: {:?}",
        left,
        except(left.iter().copied(), &2).collect::<Vec<_>>()
    );
    println!("{:?} minus last two: {:?}", right, remove_from_end(right.clone(), 2));

    Ok(())
}
