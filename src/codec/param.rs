//! Conversion between path segments and typed placeholder values.

use std::fmt::Display;
use std::str::FromStr;

use crate::error::DecodeError;

/// A type that can occupy a placeholder slot.
///
/// Implemented for every type with a canonical, lossless string form: its
/// `FromStr` and `Display` implementations must agree so that
/// `decode(&v.encode()) == Ok(v)`. This covers `String`, the integer types,
/// `bool`, `char` and the float types (except NaN, which never compares
/// equal).
///
/// `bool` accepts exactly `"true"` and `"false"`. Integers accept an optional
/// sign followed by decimal digits; whitespace and out-of-range values fail.
pub trait PathParam: Sized + 'static {
    /// Decode a single path segment.
    fn decode(segment: &str) -> Result<Self, DecodeError>;

    /// Encode into a path segment.
    fn encode(&self) -> String;

    /// Short type name used in descriptions and errors.
    fn type_name() -> &'static str {
        short_type_name(std::any::type_name::<Self>())
    }
}

impl<T> PathParam for T
where
    T: FromStr + Display + 'static,
    T::Err: Display,
{
    fn decode(segment: &str) -> Result<Self, DecodeError> {
        segment.parse::<T>().map_err(|e| DecodeError {
            type_name: <T as PathParam>::type_name(),
            raw: segment.to_string(),
            reason: e.to_string(),
        })
    }

    fn encode(&self) -> String {
        self.to_string()
    }
}

/// Strip the module path from a type name.
///
/// `alloc::string::String` becomes `String`. Names with generic arguments,
/// tuples, arrays or references are returned unchanged.
pub fn short_type_name(full: &'static str) -> &'static str {
    if full.contains(|c: char| matches!(c, '<' | '(' | '[' | '&')) {
        return full;
    }
    match full.rfind("::") {
        Some(index) => &full[index + 2..],
        None => full,
    }
}
