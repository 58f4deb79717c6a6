//! Serde deserialization from fields and records.
//!
//! - [`FieldDeserializer`] coerces the text of one field into a scalar. It is
//!   the default transform of [`parse_as`](crate::parse_as) and backs
//!   [`convert_to`](crate::convert_to).
//! - [`RecordDeserializer`] presents a whole line as a sequence, so tuples,
//!   tuple structs, structs (fields in declaration order) and `Vec`s can be
//!   read from one record.
//!
//! ## Scalar rules
//!
//! | Target | Accepted text |
//! |--------|---------------|
//! | `bool` | `true` / `false`, any case, surrounding whitespace ignored |
//! | integers, floats | `str::parse` after trimming surrounding whitespace |
//! | `char` | exactly one character |
//! | `&str`, `String` | the field verbatim |
//! | `Option<T>` | empty field is `None`, anything else is `Some` |
//! | unit enum variant | the variant name, surrounding whitespace ignored |
//!
//! ```rust
//! use csvline::{from_str, Dialect};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Row { id: u32, name: String, score: Option<f64> }
//!
//! let row: Row = from_str("7,\"Doe, Jane\",", Dialect::Normal).unwrap();
//! assert_eq!(row, Row { id: 7, name: "Doe, Jane".to_string(), score: None });
//! ```

use std::fmt::Display;
use std::str::FromStr;

use serde::de::{self, IntoDeserializer};

use crate::reader::Fields;
use crate::{Error, Result};

/// Deserializer over the text of a single field.
#[derive(Clone, Copy, Debug)]
pub struct FieldDeserializer<'de> {
    input: &'de str,
}

impl<'de> FieldDeserializer<'de> {
    pub fn new(input: &'de str) -> Self {
        FieldDeserializer { input }
    }

    fn parse_trimmed<T>(&self, target: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.input
            .trim()
            .parse::<T>()
            .map_err(|e| Error::conversion(self.input, target, e))
    }

    fn parse_bool(&self) -> Result<bool> {
        let trimmed = self.input.trim();
        if trimmed.eq_ignore_ascii_case("true") {
            Ok(true)
        } else if trimmed.eq_ignore_ascii_case("false") {
            Ok(false)
        } else {
            Err(Error::conversion(
                self.input,
                "bool",
                "expected `true` or `false`",
            ))
        }
    }

    fn nested(&self, kind: &str) -> Error {
        Error::conversion(self.input, kind, "a single field holds only scalar values")
    }
}

macro_rules! deserialize_number {
    ($($method:ident => $visit:ident: $ty:ty),* $(,)?) => {
        $(
            fn $method<V>(self, visitor: V) -> Result<V::Value>
            where
                V: de::Visitor<'de>,
            {
                visitor.$visit(self.parse_trimmed::<$ty>(stringify!($ty))?)
            }
        )*
    };
}

impl<'de> de::Deserializer<'de> for FieldDeserializer<'de> {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_borrowed_str(self.input)
    }

    fn deserialize_bool<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_bool(self.parse_bool()?)
    }

    deserialize_number! {
        deserialize_i8 => visit_i8: i8,
        deserialize_i16 => visit_i16: i16,
        deserialize_i32 => visit_i32: i32,
        deserialize_i64 => visit_i64: i64,
        deserialize_i128 => visit_i128: i128,
        deserialize_u8 => visit_u8: u8,
        deserialize_u16 => visit_u16: u16,
        deserialize_u32 => visit_u32: u32,
        deserialize_u64 => visit_u64: u64,
        deserialize_u128 => visit_u128: u128,
        deserialize_f32 => visit_f32: f32,
        deserialize_f64 => visit_f64: f64,
    }

    fn deserialize_char<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        let mut chars = self.input.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => visitor.visit_char(c),
            _ => Err(Error::conversion(
                self.input,
                "char",
                "expected a single character",
            )),
        }
    }

    fn deserialize_str<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_borrowed_str(self.input)
    }

    fn deserialize_string<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_borrowed_str(self.input)
    }

    fn deserialize_bytes<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_borrowed_bytes(self.input.as_bytes())
    }

    fn deserialize_byte_buf<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_bytes(visitor)
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        if self.input.is_empty() {
            visitor.visit_none()
        } else {
            visitor.visit_some(self)
        }
    }

    fn deserialize_unit<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        if self.input.is_empty() {
            visitor.visit_unit()
        } else {
            Err(Error::conversion(self.input, "()", "expected an empty field"))
        }
    }

    fn deserialize_unit_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_unit(visitor)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_seq<V>(self, _visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        Err(self.nested("sequence"))
    }

    fn deserialize_tuple<V>(self, _len: usize, _visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        Err(self.nested("tuple"))
    }

    fn deserialize_tuple_struct<V>(
        self,
        name: &'static str,
        _len: usize,
        _visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        Err(self.nested(name))
    }

    fn deserialize_map<V>(self, _visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        Err(self.nested("map"))
    }

    fn deserialize_struct<V>(
        self,
        name: &'static str,
        _fields: &'static [&'static str],
        _visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        Err(self.nested(name))
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        let variant: de::value::StrDeserializer<'_, Error> = self.input.trim().into_deserializer();
        visitor.visit_enum(variant)
    }

    fn deserialize_identifier<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_str(visitor)
    }

    fn deserialize_ignored_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_unit()
    }
}

/// Deserializer presenting one line as a sequence of fields.
///
/// Created via [`RecordDeserializer::new`] from a [`Fields`] iterator.
#[derive(Clone, Debug)]
pub struct RecordDeserializer<'de> {
    fields: Fields<'de>,
    index: usize,
}

impl<'de> RecordDeserializer<'de> {
    pub fn new(fields: Fields<'de>) -> Self {
        RecordDeserializer { fields, index: 0 }
    }

    /// Fails if fields remain that the target type did not consume.
    ///
    /// # Errors
    ///
    /// Returns an error naming the number of unread fields.
    pub fn end(&self) -> Result<()> {
        match self.fields.clone().count() {
            0 => Ok(()),
            n => Err(Error::custom(format!(
                "record has {n} unexpected trailing field(s) after field {}",
                self.index
            ))),
        }
    }
}

impl<'de> de::Deserializer<'de> for &mut RecordDeserializer<'de> {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_seq(self)
    }

    serde::forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf option unit unit_struct newtype_struct seq tuple
        tuple_struct map struct enum identifier ignored_any
    }
}

impl<'de> de::SeqAccess<'de> for &mut RecordDeserializer<'de> {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.fields.next() {
            Some(field) => {
                self.index += 1;
                seed.deserialize(FieldDeserializer::new(field)).map(Some)
            }
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.fields.clone().count())
    }
}
