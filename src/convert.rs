//! Scalar coercion of field text into typed values.
//!
//! ```rust
//! use csvline::{convert_to, try_convert_to};
//!
//! assert_eq!(convert_to::<i32>(" 12 ").unwrap(), 12);
//! assert!(convert_to::<i32>("twelve").is_err());
//! assert_eq!(try_convert_to::<i32>("twelve"), 0);
//! ```

use std::any::{type_name, Any};

use serde::Deserialize;
use tracing::debug;

use crate::de::FieldDeserializer;
use crate::{Error, Result};

/// Converts the text of one field into `T`.
///
/// # Errors
///
/// Returns [`Error::ConversionFailure`] if `value` is not a valid `T`.
pub fn convert_to<'de, T>(value: &'de str) -> Result<T>
where
    T: Deserialize<'de>,
{
    T::deserialize(FieldDeserializer::new(value)).map_err(|err| match err {
        Error::Custom(reason) => Error::conversion(value, type_name::<T>(), reason),
        other => other,
    })
}

/// Converts the text of one field into `T`, falling back to `T::default()`.
#[must_use]
pub fn try_convert_to<'de, T>(value: &'de str) -> T
where
    T: Deserialize<'de> + Default,
{
    convert_to(value).unwrap_or_else(|err| {
        debug!(error = %err, "conversion failed, using default");
        T::default()
    })
}

/// Views a type-erased value as a `T`, or `None` if it holds something else.
///
/// ```rust
/// use csvline::cast_as;
/// use std::any::Any;
///
/// let boxed: Box<dyn Any> = Box::new(String::from("id"));
/// assert_eq!(cast_as::<String>(boxed.as_ref()).map(String::as_str), Some("id"));
/// assert!(cast_as::<u32>(boxed.as_ref()).is_none());
/// ```
#[must_use]
pub fn cast_as<T: Any>(value: &dyn Any) -> Option<&T> {
    value.downcast_ref::<T>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize, Debug, PartialEq, Default)]
    enum Shape {
        #[default]
        Circle,
        Square,
    }

    #[test]
    fn test_convert_scalars() {
        assert_eq!(convert_to::<u16>("65535").unwrap(), u16::MAX);
        assert!(convert_to::<bool>("True").unwrap());
        assert_eq!(convert_to::<String>("a b").unwrap(), "a b");
    }

    #[test]
    fn test_serde_errors_become_conversion_failures() {
        let err = convert_to::<Shape>("Hexagon").unwrap_err();
        match err {
            Error::ConversionFailure { value, target, .. } => {
                assert_eq!(value, "Hexagon");
                assert!(target.ends_with("Shape"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_try_convert_falls_back_to_default() {
        assert_eq!(try_convert_to::<Shape>("Square"), Shape::Square);
        assert_eq!(try_convert_to::<Shape>("Hexagon"), Shape::Circle);
        assert_eq!(try_convert_to::<f32>(""), 0.0);
        assert_eq!(try_convert_to::<Option<u8>>("x"), None);
    }

    #[test]
    fn test_cast_as_matches_exact_type() {
        let values: Vec<Box<dyn Any>> =
            vec![Box::new(3u8), Box::new(Shape::Square), Box::new("x")];

        assert_eq!(cast_as::<u8>(values[0].as_ref()), Some(&3));
        assert_eq!(cast_as::<u16>(values[0].as_ref()), None);
        assert_eq!(cast_as::<Shape>(values[1].as_ref()), Some(&Shape::Square));
        assert_eq!(cast_as::<&str>(values[2].as_ref()), Some(&"x"));
        assert_eq!(cast_as::<String>(values[2].as_ref()), None);
    }
}
