//! Property-based tests for the parse/format invariants.

use proptest::prelude::*;
use csvline::{compare, format, parse, CsvOptions, Delimiter, Dialect};
use std::cmp::Ordering;

// Any text without a double quote. A record of exactly one empty field is
// excluded: it formats to the empty line, which parses to zero fields.
fn record() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[^\"]{0,12}", 0..8)
        .prop_filter("single empty field", |fields| fields != &[String::new()])
}

fn delimiter() -> impl Strategy<Value = Delimiter> {
    prop_oneof![
        Just(Delimiter::Comma),
        Just(Delimiter::Tab),
        Just(Delimiter::Pipe),
    ]
}

proptest! {
    #[test]
    fn prop_normal_roundtrip(fields in record(), delimiter in delimiter()) {
        let options = CsvOptions::new().with_delimiter(delimiter);
        let line = format(&fields, &options).unwrap();
        prop_assert_eq!(parse(&line, &options), fields);
    }

    #[test]
    fn prop_normal_roundtrip_quoting_whitespace(fields in record()) {
        let options = CsvOptions::new().with_quote_whitespace(true);
        let line = format(&fields, &options).unwrap();
        prop_assert_eq!(parse(&line, &options), fields);
    }

    #[test]
    fn prop_strict_field_count(line in "[a-z,]{1,40}") {
        let expected = line.matches(',').count() + 1;
        prop_assert_eq!(parse(&line, Dialect::Strict).len(), expected);
    }

    #[test]
    fn prop_strict_rejects_exactly_delimited_values(fields in record()) {
        let has_delimiter = fields.iter().any(|f| f.contains(','));
        prop_assert_eq!(format(&fields, Dialect::Strict).is_err(), has_delimiter);
    }

    #[test]
    fn prop_no_delimiter_is_single_field(text in "[^,\"]{1,30}") {
        prop_assert_eq!(parse(&text, Dialect::Normal), vec![text.clone()]);
        prop_assert_eq!(parse(&text, Dialect::Strict), vec![text]);
    }

    #[test]
    fn prop_compare_is_reflexive(v in prop::collection::vec(1u32..100, 0..10)) {
        prop_assert_eq!(compare(v.clone(), v), Ordering::Equal);
    }

    #[test]
    fn prop_compare_is_antisymmetric(
        a in prop::collection::vec(1i64..50, 0..6),
        b in prop::collection::vec(1i64..50, 0..6),
    ) {
        prop_assert_eq!(compare(a.clone(), b.clone()), compare(b, a).reverse());
    }
}
