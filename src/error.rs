//! Error types for CSV parsing, formatting and sequence comparison.
//!
//! ## Error Categories
//!
//! - **Null arguments**: a required input was absent ([`Error::NullSource`],
//!   [`Error::NullCompareTo`]). Only reachable through the `*_opt` entry points,
//!   since a plain `&str` or slice can never be absent.
//! - **Dialect violations**: a value cannot be written under the requested
//!   dialect (a delimiter inside a `Strict` field).
//! - **Conversion failures**: a token could not be coerced into the requested type.
//! - **Unsupported types**: a compound value was handed to a single-field serializer.
//!
//! ## Examples
//!
//! ```rust
//! use csvline::{format, Dialect, Error};
//!
//! let err = format(["a", "b,c"], Dialect::Strict).unwrap_err();
//! assert!(matches!(err, Error::DialectViolation { index: 1, .. }));
//! assert!(err.to_string().contains("b,c"));
//! ```

use std::fmt;
use thiserror::Error;

use crate::dialect::Dialect;

/// Represents all possible errors raised by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The source string or sequence was absent
    #[error("argument `source` is null")]
    NullSource,

    /// The sequence to compare against was absent
    #[error("argument `compare_to` is null")]
    NullCompareTo,

    /// A field cannot be represented in the requested dialect
    #[error("{dialect} dialect does not support nested delimiters (field {index}: {field:?})")]
    DialectViolation {
        dialect: Dialect,
        index: usize,
        field: String,
    },

    /// A token could not be converted into the requested type
    #[error("cannot convert {value:?} to {target}: {reason}")]
    ConversionFailure {
        value: String,
        target: String,
        reason: String,
    },

    /// Unsupported type for a single field
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a dialect violation for the field at `index`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use csvline::{Dialect, Error};
    ///
    /// let err = Error::dialect_violation(Dialect::Strict, 2, "x,y");
    /// assert!(err.to_string().contains("field 2"));
    /// ```
    pub fn dialect_violation(dialect: Dialect, index: usize, field: &str) -> Self {
        Error::DialectViolation {
            dialect,
            index,
            field: field.to_string(),
        }
    }

    /// Creates a conversion failure for `value` targeting the type named `target`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use csvline::Error;
    ///
    /// let err = Error::conversion("abc", "i32", "invalid digit found in string");
    /// assert!(err.to_string().contains("i32"));
    /// ```
    pub fn conversion<T: fmt::Display>(value: &str, target: &str, reason: T) -> Self {
        Error::ConversionFailure {
            value: value.to_string(),
            target: target.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates an unsupported type error for values that do not fit in one field.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_messages_name_argument() {
        assert!(Error::NullSource.to_string().contains("source"));
        assert!(Error::NullCompareTo.to_string().contains("compare_to"));
    }

    #[test]
    fn test_dialect_violation_identifies_field() {
        let err = Error::dialect_violation(Dialect::Strict, 3, "a,b");
        let msg = err.to_string();
        assert!(msg.starts_with("strict"));
        assert!(msg.contains("field 3"));
        assert!(msg.contains("\"a,b\""));
    }
}
