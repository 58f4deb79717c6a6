//! Quoting dialects and the splitting rule each one implies.
//!
//! # Normal
//!
//! Fields may be wrapped in double quotes. A quoted field may contain the
//! delimiter and leading or trailing whitespace; the quotes are stripped when
//! parsing and added back when formatting a field that contains the delimiter.
//!
//! ```text
//! a,"b,c", d      ->  ["a", "b,c", " d"]
//! ```
//!
//! There is no escape for a double quote inside a quoted field.
//!
//! # Strict
//!
//! Fields are never quoted. Every delimiter is a field boundary and a value
//! containing the delimiter cannot be formatted at all.
//!
//! ```text
//! a,"b,c"         ->  ["a", "\"b", "c\""]
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::options::Delimiter;
use crate::Error;

/// The quote character recognised by the [`Dialect::Normal`] dialect.
pub const QUOTE: char = '"';

/// CSV quoting dialect.
///
/// # Examples
///
/// ```rust
/// use csvline::Dialect;
///
/// assert_eq!(Dialect::default(), Dialect::Normal);
/// assert_eq!("strict".parse::<Dialect>().unwrap(), Dialect::Strict);
/// assert_eq!(Dialect::Normal.to_string(), "normal");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Quote fields that contain the delimiter.
    #[default]
    Normal,
    /// Never quote; the delimiter is forbidden inside values.
    Strict,
}

/// How a line is cut into fields: the delimiter and, optionally, the quote
/// character that suspends it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplitRule {
    pub delimiter: char,
    pub quote: Option<char>,
}

impl SplitRule {
    /// Returns true if `c` opens a quoted field under this rule.
    #[must_use]
    pub fn is_quote(&self, c: char) -> bool {
        self.quote == Some(c)
    }
}

impl Dialect {
    /// Looks up the splitting rule for this dialect.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use csvline::{Delimiter, Dialect};
    ///
    /// let rule = Dialect::Normal.split_rule(Delimiter::Pipe);
    /// assert_eq!(rule.delimiter, '|');
    /// assert_eq!(rule.quote, Some('"'));
    /// assert_eq!(Dialect::Strict.split_rule(Delimiter::Comma).quote, None);
    /// ```
    #[must_use]
    pub const fn split_rule(self, delimiter: Delimiter) -> SplitRule {
        let delimiter = delimiter.as_char();
        match self {
            Dialect::Normal => SplitRule {
                delimiter,
                quote: Some(QUOTE),
            },
            Dialect::Strict => SplitRule {
                delimiter,
                quote: None,
            },
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Dialect::Normal => "normal",
            Dialect::Strict => "strict",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(Dialect::Normal),
            "strict" => Ok(Dialect::Strict),
            _ => Err(Error::conversion(s, "Dialect", "expected `normal` or `strict`")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_follow_delimiter() {
        for delimiter in [Delimiter::Comma, Delimiter::Tab, Delimiter::Pipe] {
            assert_eq!(Dialect::Normal.split_rule(delimiter).delimiter, delimiter.as_char());
            assert_eq!(Dialect::Strict.split_rule(delimiter).delimiter, delimiter.as_char());
        }
    }

    #[test]
    fn test_only_normal_recognises_quotes() {
        assert!(Dialect::Normal.split_rule(Delimiter::Comma).is_quote('"'));
        assert!(!Dialect::Strict.split_rule(Delimiter::Comma).is_quote('"'));
        assert!(!Dialect::Normal.split_rule(Delimiter::Comma).is_quote('\''));
    }

    #[test]
    fn test_parse_dialect_names() {
        assert_eq!(" Normal ".parse::<Dialect>().unwrap(), Dialect::Normal);
        assert_eq!("STRICT".parse::<Dialect>().unwrap(), Dialect::Strict);
        assert!(matches!(
            "loose".parse::<Dialect>(),
            Err(Error::ConversionFailure { .. })
        ));
    }
}
