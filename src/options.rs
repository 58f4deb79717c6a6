//! Configuration options for parsing and formatting.
//!
//! - [`CsvOptions`]: main configuration struct
//! - [`Delimiter`]: field separator (comma, tab, or pipe)
//!
//! Every entry point accepts `impl Into<CsvOptions>`, so a bare [`Dialect`]
//! works wherever options are expected.
//!
//! ## Examples
//!
//! ```rust
//! use csvline::{format, parse, CsvOptions, Delimiter, Dialect};
//!
//! // Dialect only: comma delimiter
//! assert_eq!(parse("a,b", Dialect::Normal), vec!["a", "b"]);
//!
//! // Pipe delimiter
//! let options = CsvOptions::new().with_delimiter(Delimiter::Pipe);
//! assert_eq!(format(["a,1", "b|2"], options).unwrap(), "a,1|\"b|2\"");
//! ```

use serde::{Deserialize, Serialize};

use crate::dialect::{Dialect, SplitRule};

/// Field delimiter.
///
/// # Examples
///
/// ```rust
/// use csvline::Delimiter;
///
/// assert_eq!(Delimiter::Comma.as_char(), ',');
/// assert_eq!(Delimiter::Tab.as_str(), "\t");
/// assert_eq!(Delimiter::Pipe.as_str(), "|");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
}

impl Delimiter {
    #[must_use]
    pub const fn as_char(&self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
        }
    }

    /// Returns the string representation of this delimiter.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Delimiter::Comma => ",",
            Delimiter::Tab => "\t",
            Delimiter::Pipe => "|",
        }
    }
}

/// Configuration for parsing and formatting a record.
///
/// # Examples
///
/// ```rust
/// use csvline::{CsvOptions, Delimiter, Dialect};
///
/// // Normal dialect, comma delimiter
/// let options = CsvOptions::new();
///
/// // Strict dialect
/// let options = CsvOptions::strict();
/// assert_eq!(options.dialect, Dialect::Strict);
///
/// // Custom configuration
/// let options = CsvOptions::new()
///     .with_delimiter(Delimiter::Tab)
///     .with_quote_whitespace(true);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvOptions {
    pub dialect: Dialect,
    pub delimiter: Delimiter,
    /// Also quote fields with leading or trailing whitespace when formatting
    /// in the `Normal` dialect. Off by default.
    pub quote_whitespace: bool,
}

impl CsvOptions {
    /// Creates default options (Normal dialect, comma delimiter, no whitespace quoting).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use csvline::{CsvOptions, Dialect};
    ///
    /// let options = CsvOptions::new();
    /// assert_eq!(options.dialect, Dialect::Normal);
    /// assert!(!options.quote_whitespace);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for the `Strict` dialect.
    #[must_use]
    pub fn strict() -> Self {
        CsvOptions {
            dialect: Dialect::Strict,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Sets the field delimiter.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use csvline::{parse, CsvOptions, Delimiter};
    ///
    /// let options = CsvOptions::new().with_delimiter(Delimiter::Tab);
    /// assert_eq!(parse("a\tb,c", options), vec!["a", "b,c"]);
    /// ```
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Quotes fields that start or end with whitespace, so they survive a
    /// round trip through tools that trim unquoted fields.
    ///
    /// Only affects formatting in the `Normal` dialect.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use csvline::{format, CsvOptions};
    ///
    /// let options = CsvOptions::new().with_quote_whitespace(true);
    /// assert_eq!(format([" a", "b"], options).unwrap(), "\" a\",b");
    /// ```
    #[must_use]
    pub fn with_quote_whitespace(mut self, quote_whitespace: bool) -> Self {
        self.quote_whitespace = quote_whitespace;
        self
    }

    /// The splitting rule for the configured dialect and delimiter.
    #[must_use]
    pub fn split_rule(&self) -> SplitRule {
        self.dialect.split_rule(self.delimiter)
    }
}

impl From<Dialect> for CsvOptions {
    fn from(dialect: Dialect) -> Self {
        CsvOptions::new().with_dialect(dialect)
    }
}

impl From<&CsvOptions> for CsvOptions {
    fn from(options: &CsvOptions) -> Self {
        options.clone()
    }
}
