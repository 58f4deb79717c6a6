//! Building a single line from fields.
//!
//! [`RecordWriter`] applies the dialect's quoting rule to each field as it is
//! written and joins the results with the delimiter.
//!
//! ```rust
//! use csvline::{CsvOptions, RecordWriter};
//!
//! let mut writer = RecordWriter::new(CsvOptions::new());
//! writer.write_field("plain").unwrap();
//! writer.write_field("has,comma").unwrap();
//! assert_eq!(writer.finish(), "plain,\"has,comma\"");
//! ```

use tracing::{debug, trace};

use crate::dialect::{Dialect, SplitRule};
use crate::{CsvOptions, Error, Result};

/// Accumulates formatted fields for one record.
#[derive(Debug)]
pub struct RecordWriter {
    options: CsvOptions,
    rule: SplitRule,
    output: String,
    count: usize,
}

impl RecordWriter {
    pub fn new(options: CsvOptions) -> Self {
        RecordWriter {
            rule: options.split_rule(),
            options,
            output: String::new(),
            count: 0,
        }
    }

    /// Number of fields written so far.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.count
    }

    fn needs_quotes(&self, field: &str) -> bool {
        if field.contains(self.rule.delimiter) {
            return true;
        }
        self.options.quote_whitespace
            && (field.starts_with(char::is_whitespace) || field.ends_with(char::is_whitespace))
    }

    /// Appends one field, quoting it if the dialect calls for it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DialectViolation`] if the field contains the delimiter
    /// under the `Strict` dialect. The writer is left unchanged in that case.
    pub fn write_field(&mut self, field: &str) -> Result<()> {
        let quote = match (self.options.dialect, self.rule.quote) {
            (Dialect::Strict, _) if field.contains(self.rule.delimiter) => {
                debug!(index = self.count, field, "delimiter inside strict field");
                return Err(Error::dialect_violation(
                    self.options.dialect,
                    self.count,
                    field,
                ));
            }
            (Dialect::Normal, Some(quote)) if self.needs_quotes(field) => Some(quote),
            _ => None,
        };

        if self.count > 0 {
            self.output.push(self.rule.delimiter);
        }
        match quote {
            Some(q) => {
                self.output.reserve(field.len() + 2);
                self.output.push(q);
                self.output.push_str(field);
                self.output.push(q);
            }
            None => self.output.push_str(field),
        }
        self.count += 1;
        Ok(())
    }

    /// Consumes the writer and returns the formatted line.
    pub fn finish(self) -> String {
        trace!(
            dialect = %self.options.dialect,
            fields = self.count,
            "formatted record"
        );
        self.output
    }
}
