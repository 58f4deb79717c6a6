//! Splitting a single line into fields.
//!
//! [`Fields`] walks the line once, tracking whether the current field was
//! opened with a quote. Tokens borrow from the input; nothing is unescaped
//! because the quote has no escape sequence in either dialect.
//!
//! ```rust
//! use csvline::{fields, Dialect};
//!
//! let line = r#"id,"Smith, John",,"#;
//! let tokens: Vec<&str> = fields(line, Dialect::Normal).collect();
//! assert_eq!(tokens, vec!["id", "Smith, John", "", ""]);
//! ```

use std::iter::FusedIterator;

use crate::dialect::SplitRule;

/// Lazy iterator over the fields of one line.
///
/// Cloning restarts from the clone point, so a fresh clone of a newly
/// created `Fields` enumerates the whole line again.
#[derive(Clone, Debug)]
pub struct Fields<'a> {
    input: &'a str,
    rule: SplitRule,
    position: usize,
    finished: bool,
}

/// Where one raw field ends and how it was quoted, relative to the field start.
struct Span {
    end: usize,
    delimited: bool,
    opening: Option<usize>,
    closing: Option<usize>,
}

impl<'a> Fields<'a> {
    /// Creates an iterator over `input` split according to `rule`.
    ///
    /// An empty input has no fields at all rather than one empty field.
    #[must_use]
    pub fn new(input: &'a str, rule: SplitRule) -> Self {
        Fields {
            input,
            rule,
            position: 0,
            finished: input.is_empty(),
        }
    }

    /// The part of the line not yet consumed.
    #[must_use]
    pub fn remainder(&self) -> &'a str {
        if self.finished {
            ""
        } else {
            &self.input[self.position..]
        }
    }

    fn scan_field(&self, rest: &str) -> Span {
        let mut chars = rest.char_indices();
        let mut opening = None;
        if let Some(c) = rest.chars().next() {
            if self.rule.is_quote(c) {
                chars.next();
                opening = Some(c.len_utf8());
            }
        }

        let mut in_quotes = opening.is_some();
        let mut closing = None;
        for (i, c) in chars {
            if in_quotes {
                if self.rule.is_quote(c) {
                    in_quotes = false;
                    closing = Some(i);
                }
            } else if c == self.rule.delimiter {
                return Span {
                    end: i,
                    delimited: true,
                    opening,
                    closing,
                };
            }
        }

        Span {
            end: rest.len(),
            delimited: false,
            opening,
            closing,
        }
    }
}

impl<'a> Iterator for Fields<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.finished {
            return None;
        }

        let rest = &self.input[self.position..];
        let span = self.scan_field(rest);
        let raw = &rest[..span.end];

        let token = match (span.opening, span.closing) {
            (None, _) => raw,
            // opening and closing quotes share a width, so `close + open` is the field end
            (Some(open), Some(close)) if close + open == raw.len() => &raw[open..close],
            // "content"trailing: not a well-formed quoted field, keep it verbatim
            (Some(_), Some(_)) => raw,
            // unterminated: runs to the end of the line
            (Some(open), None) => &raw[open..],
        };

        if span.delimited {
            self.position += span.end + self.rule.delimiter.len_utf8();
        } else {
            self.finished = true;
        }
        Some(token)
    }
}

impl FusedIterator for Fields<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Delimiter, Dialect};

    fn normal(input: &str) -> Vec<&str> {
        Fields::new(input, Dialect::Normal.split_rule(Delimiter::Comma)).collect()
    }

    fn strict(input: &str) -> Vec<&str> {
        Fields::new(input, Dialect::Strict.split_rule(Delimiter::Comma)).collect()
    }

    #[test]
    fn test_empty_input_has_no_fields() {
        assert!(normal("").is_empty());
        assert!(strict("").is_empty());
    }

    #[test]
    fn test_lone_delimiter_is_two_empty_fields() {
        assert_eq!(normal(","), vec!["", ""]);
        assert_eq!(strict(","), vec!["", ""]);
    }

    #[test]
    fn test_leading_delimiters() {
        assert_eq!(normal(",a"), vec!["", "a"]);
        assert_eq!(normal(",,a"), vec!["", "", "a"]);
        assert_eq!(normal(",,,a"), vec!["", "", "", "a"]);
    }

    #[test]
    fn test_quoted_field_keeps_delimiters() {
        assert_eq!(normal("\"a,b\",c"), vec!["a,b", "c"]);
        assert_eq!(normal("c,\"a,b\""), vec!["c", "a,b"]);
    }

    #[test]
    fn test_empty_quoted_field() {
        assert_eq!(normal("\"\",x"), vec!["", "x"]);
    }

    #[test]
    fn test_unterminated_quote_runs_to_end() {
        assert_eq!(normal("a,\"b,c"), vec!["a", "b,c"]);
        assert_eq!(normal("\""), vec![""]);
    }

    #[test]
    fn test_text_after_closing_quote_is_verbatim() {
        assert_eq!(normal("\"a\"b,c"), vec!["\"a\"b", "c"]);
    }

    #[test]
    fn test_interior_quote_is_literal() {
        assert_eq!(normal("ab\"c,d"), vec!["ab\"c", "d"]);
    }

    #[test]
    fn test_strict_ignores_quotes() {
        assert_eq!(strict("\"a,b\",c"), vec!["\"a", "b\"", "c"]);
    }

    #[test]
    fn test_iterator_adapters_drive_next() {
        let rule = Dialect::Normal.split_rule(Delimiter::Comma);
        let offsets: Vec<usize> = Fields::new("ab,\"c,d\",e", rule)
            .scan(0, |total, field| {
                *total += field.len();
                Some(*total)
            })
            .collect();
        assert_eq!(offsets, vec![2, 5, 6]);
    }

    #[test]
    fn test_multibyte_content() {
        assert_eq!(normal("é,\"ü,ß\",ñ"), vec!["é", "ü,ß", "ñ"]);
    }

    #[test]
    fn test_clone_restarts_enumeration() {
        let rule = Dialect::Normal.split_rule(Delimiter::Comma);
        let mut fields = Fields::new("a,b,c", rule);
        let fresh = fields.clone();
        assert_eq!(fields.next(), Some("a"));
        assert_eq!(fields.remainder(), "b,c");
        assert_eq!(fresh.count(), 3);
        assert_eq!(fields.count(), 2);
    }
}
