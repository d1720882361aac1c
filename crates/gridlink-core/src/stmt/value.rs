use super::Type;
use crate::{Error, Result};

/// A runtime value, one case per wire-representable type.
///
/// The closed set of variants gives the codec an exhaustive match in both
/// directions; there is no reflective dispatch anywhere.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// 32-bit float
    F32(f32),

    /// 64-bit float
    F64(f64),

    /// String value
    String(String),

    /// Opaque bytes; also carries large binary/character objects
    Bytes(Vec<u8>),

    /// Milliseconds since the epoch. Covers date, time and timestamp
    /// columns; on the wire this is an 8-byte big-endian bytes field.
    Timestamp(i64),

    /// Arbitrary precision integer as big-endian two's-complement bytes,
    /// the raw wire representation.
    Decimal(Vec<u8>),

    /// A list of values of the same type (a repeated wire field)
    List(Vec<Value>),

    /// Null value
    #[default]
    Null,
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn expect_string(&self) -> &str {
        match self {
            Self::String(v) => v,
            _ => panic!("expected `String`; actual={self:#?}"),
        }
    }

    pub fn to_bool(self) -> Result<bool> {
        match self {
            Self::Bool(v) => Ok(v),
            _ => Err(Error::decode(format!("cannot convert value to bool: {self:?}"))),
        }
    }

    pub fn to_i64(self) -> Result<i64> {
        match self {
            Self::I32(v) => Ok(v as i64),
            Self::I64(v) => Ok(v),
            _ => Err(Error::decode(format!("cannot convert value to i64: {self:?}"))),
        }
    }

    pub fn is_a(&self, ty: &Type) -> bool {
        match self {
            Self::Null => true,
            Self::Bool(_) => matches!(ty, Type::Bool),
            Self::I32(_) => matches!(ty, Type::I32),
            Self::I64(_) => matches!(ty, Type::I64),
            Self::F32(_) => matches!(ty, Type::F32),
            Self::F64(_) => matches!(ty, Type::F64),
            Self::String(_) => matches!(ty, Type::String),
            Self::Bytes(_) => matches!(ty, Type::Bytes),
            Self::Timestamp(_) => matches!(ty, Type::Timestamp),
            Self::Decimal(_) => matches!(ty, Type::Decimal),
            Self::List(items) => match ty {
                Type::List(item_ty) => items.iter().all(|item| item.is_a(item_ty)),
                _ => false,
            },
        }
    }

    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Self {
        Self::I32(src)
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Self {
        Self::I64(src)
    }
}

impl From<f32> for Value {
    fn from(src: f32) -> Self {
        Self::F32(src)
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Self {
        Self::F64(src)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(src: Vec<u8>) -> Self {
        Self::Bytes(src)
    }
}

impl From<Vec<Value>> for Value {
    fn from(src: Vec<Value>) -> Self {
        Self::List(src)
    }
}
