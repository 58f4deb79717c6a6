//! # csvline
//!
//! Single-line CSV parsing and formatting with two quoting dialects, plus a
//! handful of sequence utilities.
//!
//! ## Dialects
//!
//! - **Normal**: fields containing the delimiter are wrapped in double quotes;
//!   quoted fields may hold delimiters and surrounding whitespace.
//! - **Strict**: fields are never quoted and may not contain the delimiter.
//!
//! See [`dialect`] for the exact rules.
//!
//! ## Quick Start
//!
//! ```rust
//! use csvline::{format, parse, Dialect};
//!
//! let fields = parse("a,\"b,c\",,d", Dialect::Normal);
//! assert_eq!(fields, vec!["a", "b,c", "", "d"]);
//!
//! let line = format(&fields, Dialect::Normal).unwrap();
//! assert_eq!(line, "a,\"b,c\",,d");
//!
//! assert!(format(&fields, Dialect::Strict).is_err());
//! ```
//!
//! ### Typed fields and records
//!
//! ```rust
//! use csvline::{from_str, parse_as, to_string, Dialect};
//! use serde::{Deserialize, Serialize};
//!
//! let numbers: Vec<i32> = parse_as("1, 2 ,3", Dialect::Normal).unwrap();
//! assert_eq!(numbers, vec![1, 2, 3]);
//!
//! #[derive(Serialize, Deserialize, Debug, PartialEq)]
//! struct Point { x: i32, y: i32, label: String }
//!
//! let point = Point { x: 1, y: -2, label: "origin, shifted".to_string() };
//! let line = to_string(&point, Dialect::Normal).unwrap();
//! assert_eq!(line, "1,-2,\"origin, shifted\"");
//! assert_eq!(from_str::<Point, _>(&line, Dialect::Normal).unwrap(), point);
//! ```
//!
//! ### Comparing sequences
//!
//! ```rust
//! use csvline::compare;
//! use std::cmp::Ordering;
//!
//! assert_eq!(compare([1, 2, 3, 4], [1, 2, 3, 4, 5]), Ordering::Less);
//! ```
//!
//! ## Limitations
//!
//! - One line per record: a quoted field cannot span lines.
//! - No escape for a double quote inside a quoted field; values containing
//!   `"` do not survive a round trip.
//! - No header handling.
//!
//! ## Logging
//!
//! Parsing and formatting emit `tracing` events at `trace` level, failures
//! and fallbacks at `debug`. Install a subscriber to see them.

pub mod convert;
pub mod de;
pub mod dialect;
pub mod error;
pub mod options;
pub mod reader;
pub mod seq;
pub mod ser;
pub mod writer;

pub use convert::{cast_as, convert_to, try_convert_to};
pub use de::{FieldDeserializer, RecordDeserializer};
pub use dialect::{Dialect, SplitRule};
pub use error::{Error, Result};
pub use options::{CsvOptions, Delimiter};
pub use reader::Fields;
pub use seq::{compare, compare_by, compare_opt};
pub use ser::{FieldSerializer, RecordSerializer};
pub use writer::RecordWriter;

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Lazily splits `source` into fields.
///
/// Empty input yields no fields. The iterator borrows from `source`; clone
/// it to enumerate again.
///
/// # Examples
///
/// ```rust
/// use csvline::{fields, Dialect};
///
/// let mut it = fields(",,x", Dialect::Normal);
/// assert_eq!(it.next(), Some(""));
/// assert_eq!(it.next(), Some(""));
/// assert_eq!(it.next(), Some("x"));
/// assert_eq!(it.next(), None);
/// ```
pub fn fields<O>(source: &str, options: O) -> Fields<'_>
where
    O: Into<CsvOptions>,
{
    Fields::new(source, options.into().split_rule())
}

/// Parses one line into its fields.
///
/// # Examples
///
/// ```rust
/// use csvline::{parse, Dialect};
///
/// assert!(parse("", Dialect::Normal).is_empty());
/// assert_eq!(parse("test,,,empty,entries", Dialect::Normal),
///            vec!["test", "", "", "empty", "entries"]);
/// assert_eq!(parse("\"a,b\",c", Dialect::Strict), vec!["\"a", "b\"", "c"]);
/// ```
#[must_use]
pub fn parse<O>(source: &str, options: O) -> Vec<String>
where
    O: Into<CsvOptions>,
{
    parse_with(source, options, str::to_owned)
}

/// Parses one line, applying `transform` to every field in order.
///
/// # Examples
///
/// ```rust
/// use csvline::{parse_with, Dialect};
///
/// let lengths = parse_with("a,bb,\"c,cc\"", Dialect::Normal, str::len);
/// assert_eq!(lengths, vec![1, 2, 4]);
/// ```
pub fn parse_with<O, T, F>(source: &str, options: O, transform: F) -> Vec<T>
where
    O: Into<CsvOptions>,
    F: FnMut(&str) -> T,
{
    let options = options.into();
    let record: Vec<T> = fields(source, &options).map(transform).collect();
    trace!(dialect = %options.dialect, fields = record.len(), "parsed record");
    record
}

/// Parses one line, converting every field into `T`.
///
/// # Errors
///
/// Returns [`Error::ConversionFailure`] for the first field that is not a valid `T`.
///
/// # Examples
///
/// ```rust
/// use csvline::{parse_as, Dialect};
///
/// let flags: Vec<bool> = parse_as("true,FALSE, true", Dialect::Normal).unwrap();
/// assert_eq!(flags, vec![true, false, true]);
/// assert!(parse_as::<u8, _>("1,x", Dialect::Normal).is_err());
/// ```
pub fn parse_as<'a, T, O>(source: &'a str, options: O) -> Result<Vec<T>>
where
    T: Deserialize<'a>,
    O: Into<CsvOptions>,
{
    let options = options.into();
    let record = fields(source, &options)
        .map(convert_to::<T>)
        .collect::<Result<Vec<T>>>()?;
    trace!(dialect = %options.dialect, fields = record.len(), "parsed typed record");
    Ok(record)
}

/// Parses one line, converting every field into `T` and substituting
/// `T::default()` for fields that do not convert.
///
/// # Examples
///
/// ```rust
/// use csvline::{try_parse_as, Dialect};
///
/// let numbers: Vec<i64> = try_parse_as("4,four,,-4", Dialect::Normal);
/// assert_eq!(numbers, vec![4, 0, 0, -4]);
/// ```
#[must_use]
pub fn try_parse_as<'a, T, O>(source: &'a str, options: O) -> Vec<T>
where
    T: Deserialize<'a> + Default,
    O: Into<CsvOptions>,
{
    let options = options.into();
    let record: Vec<T> = fields(source, &options)
        .map(try_convert_to::<T>)
        .collect();
    trace!(dialect = %options.dialect, fields = record.len(), "parsed typed record");
    record
}

/// [`parse`] for a possibly-absent line.
///
/// # Errors
///
/// Returns [`Error::NullSource`] if `source` is `None`.
///
/// # Examples
///
/// ```rust
/// use csvline::{parse_opt, Dialect, Error};
///
/// assert_eq!(parse_opt(None, Dialect::Normal), Err(Error::NullSource));
/// assert_eq!(parse_opt(Some(""), Dialect::Normal), Ok(vec![]));
/// ```
pub fn parse_opt<O>(source: Option<&str>, options: O) -> Result<Vec<String>>
where
    O: Into<CsvOptions>,
{
    let source = source.ok_or(Error::NullSource)?;
    Ok(parse(source, options))
}

/// Deserializes one line into a tuple, struct or `Vec`.
///
/// # Errors
///
/// Returns an error if a field does not convert, or if the record has more
/// or fewer fields than `T` expects.
///
/// # Examples
///
/// ```rust
/// use csvline::{from_str, Dialect};
///
/// let (id, name, active): (u32, String, bool) =
///     from_str("12,\"Lee, Ann\",true", Dialect::Normal).unwrap();
/// assert_eq!((id, name.as_str(), active), (12, "Lee, Ann", true));
/// ```
pub fn from_str<'a, T, O>(source: &'a str, options: O) -> Result<T>
where
    T: Deserialize<'a>,
    O: Into<CsvOptions>,
{
    let mut deserializer = RecordDeserializer::new(fields(source, options));
    let value = T::deserialize(&mut deserializer)?;
    deserializer.end()?;
    Ok(value)
}

/// Formats a sequence of scalar values as one line.
///
/// Each value is turned into text by [`FieldSerializer`]: `Display`-like for
/// numbers and booleans, the empty field for `None`.
///
/// # Errors
///
/// Returns [`Error::DialectViolation`] if a value contains the delimiter under
/// the `Strict` dialect, or [`Error::UnsupportedType`] for a compound value.
///
/// # Examples
///
/// ```rust
/// use csvline::{format, Dialect};
///
/// assert_eq!(format([Some(1), None, Some(3)], Dialect::Normal).unwrap(), "1,,3");
/// assert_eq!(format(Vec::<String>::new(), Dialect::Normal).unwrap(), "");
/// ```
pub fn format<I, O>(source: I, options: O) -> Result<String>
where
    I: IntoIterator,
    I::Item: Serialize,
    O: Into<CsvOptions>,
{
    let mut writer = RecordWriter::new(options.into());
    for item in source {
        let field = item.serialize(FieldSerializer)?;
        writer.write_field(&field)?;
    }
    Ok(writer.finish())
}

/// Formats a sequence as one line, using `selector` to produce each field.
///
/// # Errors
///
/// Returns [`Error::DialectViolation`] if a selected field contains the
/// delimiter under the `Strict` dialect.
///
/// # Examples
///
/// ```rust
/// use csvline::{format_with, Dialect};
///
/// let line = format_with([1.5, 2.25], Dialect::Normal, |v| format!("{v:.2}")).unwrap();
/// assert_eq!(line, "1.50,2.25");
/// ```
pub fn format_with<I, O, F, S>(source: I, options: O, mut selector: F) -> Result<String>
where
    I: IntoIterator,
    O: Into<CsvOptions>,
    F: FnMut(I::Item) -> S,
    S: AsRef<str>,
{
    let mut writer = RecordWriter::new(options.into());
    for item in source {
        writer.write_field(selector(item).as_ref())?;
    }
    Ok(writer.finish())
}

/// [`format`] for a possibly-absent sequence.
///
/// # Errors
///
/// Returns [`Error::NullSource`] if `source` is `None`, otherwise as [`format`].
pub fn format_opt<I, O>(source: Option<I>, options: O) -> Result<String>
where
    I: IntoIterator,
    I::Item: Serialize,
    O: Into<CsvOptions>,
{
    let source = source.ok_or(Error::NullSource)?;
    format(source, options)
}

/// Serializes a tuple, struct or sequence of scalars as one line.
///
/// # Errors
///
/// Returns an error if a field cannot be written under the dialect or a
/// member is itself a compound value.
///
/// # Examples
///
/// ```rust
/// use csvline::{to_string, CsvOptions, Delimiter};
///
/// let options = CsvOptions::new().with_delimiter(Delimiter::Tab);
/// assert_eq!(to_string(&("a", 1, true), options).unwrap(), "a\t1\ttrue");
/// ```
pub fn to_string<T, O>(value: &T, options: O) -> Result<String>
where
    T: ?Sized + Serialize,
    O: Into<CsvOptions>,
{
    let mut serializer = RecordSerializer::new(options.into());
    value.serialize(&mut serializer)?;
    Ok(serializer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Reading {
        sensor: String,
        value: f64,
        ok: bool,
    }

    #[test]
    fn test_parse_format_roundtrip() {
        let record = vec!["a", " b ", "c,d", "", "e f"];
        let line = format(&record, Dialect::Normal).unwrap();
        assert_eq!(parse(&line, Dialect::Normal), record);
    }

    #[test]
    fn test_struct_roundtrip() {
        let reading = Reading {
            sensor: "north, upper".to_string(),
            value: 21.5,
            ok: true,
        };
        let line = to_string(&reading, Dialect::Normal).unwrap();
        let back: Reading = from_str(&line, Dialect::Normal).unwrap();
        assert_eq!(reading, back);
    }

    #[test]
    fn test_struct_strict_violation() {
        let reading = Reading {
            sensor: "north, upper".to_string(),
            value: 21.5,
            ok: true,
        };
        let err = to_string(&reading, Dialect::Strict).unwrap_err();
        assert!(matches!(err, Error::DialectViolation { index: 0, .. }));
    }

    #[test]
    fn test_from_str_wrong_length() {
        assert!(from_str::<(u8, u8), _>("1", Dialect::Normal).is_err());
        assert!(from_str::<(u8, u8), _>("1,2,3", Dialect::Normal).is_err());
    }

    #[test]
    fn test_parse_with_transform_sees_unquoted_text() {
        let upper = parse_with("a,\"b,c\"", Dialect::Normal, str::to_uppercase);
        assert_eq!(upper, vec!["A", "B,C"]);
    }

    #[test]
    fn test_format_opt_null() {
        assert_eq!(
            format_opt(None::<Vec<&str>>, Dialect::Normal),
            Err(Error::NullSource)
        );
        assert_eq!(format_opt(Some(["x"]), Dialect::Strict).unwrap(), "x");
    }

    #[test]
    fn test_options_by_reference() {
        let options = CsvOptions::new().with_delimiter(Delimiter::Pipe);
        assert_eq!(parse("a|b", &options), vec!["a", "b"]);
        assert_eq!(format(["a", "b"], &options).unwrap(), "a|b");
    }
}
