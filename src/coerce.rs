//! Conversion of protocol values into native Rust values.
//!
//! Only a fixed set of SMI types has a native mapping. Anything else is
//! rejected with [`Error::UnsupportedType`] rather than guessed at.
//!
//! | Protocol type                     | Native            |
//! |-----------------------------------|-------------------|
//! | OctetString                       | [`NativeValue::Str`]   |
//! | TimeTicks                         | [`NativeValue::Float`] (raw tick count) |
//! | Integer, Counter32, Gauge32       | [`NativeValue::Int`]   |
//!
//! TimeTicks keep the raw hundredths-of-a-second count; they are not
//! converted to seconds.

use crate::error::{Error, Result};
use crate::value::Value;

/// A coerced value: string, integer or floating point.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum NativeValue {
    Str(String),
    Int(i64),
    Float(f64),
}

impl NativeValue {
    /// Borrow the string, if this is a [`NativeValue::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            NativeValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Get the integer, if this is a [`NativeValue::Int`].
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            NativeValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the float, if this is a [`NativeValue::Float`].
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            NativeValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Name of the native type, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            NativeValue::Str(_) => "string",
            NativeValue::Int(_) => "integer",
            NativeValue::Float(_) => "float",
        }
    }
}

impl std::fmt::Display for NativeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NativeValue::Str(s) => write!(f, "{:?}", s),
            NativeValue::Int(v) => write!(f, "{}", v),
            NativeValue::Float(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for NativeValue {
    fn from(s: &str) -> Self {
        NativeValue::Str(s.to_owned())
    }
}

impl From<String> for NativeValue {
    fn from(s: String) -> Self {
        NativeValue::Str(s)
    }
}

impl From<i64> for NativeValue {
    fn from(v: i64) -> Self {
        NativeValue::Int(v)
    }
}

impl From<i32> for NativeValue {
    fn from(v: i32) -> Self {
        NativeValue::Int(i64::from(v))
    }
}

impl From<u32> for NativeValue {
    fn from(v: u32) -> Self {
        NativeValue::Int(i64::from(v))
    }
}

impl From<f64> for NativeValue {
    fn from(v: f64) -> Self {
        NativeValue::Float(v)
    }
}

/// Types that can be turned into a [`NativeValue`].
///
/// Implemented for protocol values (fallible) and for the native types
/// themselves, which pass through unchanged.
pub trait Coerce {
    /// Convert into a native value.
    fn coerce(self) -> Result<NativeValue>;
}

impl Coerce for &Value {
    fn coerce(self) -> Result<NativeValue> {
        match self {
            // ISO-8859-1: one char per byte, so binary strings (MACs,
            // bitmaps) stay distinct and reversible.
            Value::OctetString(data) => Ok(NativeValue::Str(
                data.iter().map(|&b| char::from(b)).collect(),
            )),
            Value::TimeTicks(ticks) => Ok(NativeValue::Float(f64::from(*ticks))),
            Value::Integer(v) => Ok(NativeValue::Int(i64::from(*v))),
            Value::Counter32(v) | Value::Gauge32(v) => Ok(NativeValue::Int(i64::from(*v))),
            other => Err(Error::unsupported(other.type_name())),
        }
    }
}

impl Coerce for Value {
    fn coerce(self) -> Result<NativeValue> {
        (&self).coerce()
    }
}

impl Coerce for NativeValue {
    fn coerce(self) -> Result<NativeValue> {
        Ok(self)
    }
}

impl Coerce for String {
    fn coerce(self) -> Result<NativeValue> {
        Ok(NativeValue::Str(self))
    }
}

impl Coerce for &str {
    fn coerce(self) -> Result<NativeValue> {
        Ok(NativeValue::from(self))
    }
}

impl Coerce for i32 {
    fn coerce(self) -> Result<NativeValue> {
        Ok(NativeValue::from(self))
    }
}

impl Coerce for i64 {
    fn coerce(self) -> Result<NativeValue> {
        Ok(NativeValue::Int(self))
    }
}

impl Coerce for u32 {
    fn coerce(self) -> Result<NativeValue> {
        Ok(NativeValue::from(self))
    }
}

impl Coerce for f64 {
    fn coerce(self) -> Result<NativeValue> {
        Ok(NativeValue::Float(self))
    }
}

/// Convert a value into its native equivalent.
///
/// # Examples
///
/// ```
/// use quicksnmp::{NativeValue, Value, coerce};
///
/// assert_eq!(coerce(&Value::Gauge32(7)).unwrap(), NativeValue::Int(7));
/// assert_eq!(coerce(&Value::TimeTicks(250)).unwrap(), NativeValue::Float(250.0));
/// assert!(coerce(&Value::Null).is_err());
/// ```
pub fn coerce(value: impl Coerce) -> Result<NativeValue> {
    value.coerce()
}
