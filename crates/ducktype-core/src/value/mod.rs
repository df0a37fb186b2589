//! Typed query values and their textual rendering.
//!
//! Values are what a result cell holds after the engine's cast; the
//! renderer formats them under a [`TypeInfo`] the way the engine's
//! VARCHAR cast does.

mod interval;
mod render;
mod temporal;

#[cfg(test)]
mod tests;

use crate::type_info::TypeInfo;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;

// re-exports
pub use interval::Interval;
pub use render::{RenderError, RenderErrorKind, Renderer, render};

///
/// Value
///
/// Null  → SQL NULL, valid under every descriptor.
/// Timestamp values are UTC instants; TIMESTAMPTZ shifts them by the
/// configured session offset when rendered.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    HugeInt(i128),
    Float(f32),
    Double(f64),
    Decimal(Decimal),
    Date(NaiveDate),
    Time(NaiveTime),
    Timestamp(NaiveDateTime),
    Interval(Interval),
    Text(String),
    Blob(Vec<u8>),
    Uuid(u128),
    Enum(String),
    List(Vec<Value>),
    Struct(Vec<(String, Value)>),
    Map(Vec<(Value, Value)>),
}

impl Value {
    ///
    /// CONSTRUCTORS
    ///

    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn enum_member(name: impl Into<String>) -> Self {
        Self::Enum(name.into())
    }

    /// Build a decimal from mantissa and scale, e.g. `(400, 2)` is `4.00`.
    #[must_use]
    pub fn decimal(mantissa: i64, scale: u32) -> Self {
        Self::Decimal(Decimal::new(mantissa, scale))
    }

    pub fn list(items: impl IntoIterator<Item = Self>) -> Self {
        Self::List(items.into_iter().collect())
    }

    pub fn structure<K: Into<String>>(fields: impl IntoIterator<Item = (K, Self)>) -> Self {
        Self::Struct(
            fields
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        )
    }

    pub fn map(entries: impl IntoIterator<Item = (Self, Self)>) -> Self {
        Self::Map(entries.into_iter().collect())
    }

    ///
    /// INSPECTION
    ///

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Stable value-variant label for diagnostics.
    #[must_use]
    pub const fn kind_label(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Bool(_) => "Bool",
            Self::Int(_) => "Int",
            Self::UInt(_) => "UInt",
            Self::HugeInt(_) => "HugeInt",
            Self::Float(_) => "Float",
            Self::Double(_) => "Double",
            Self::Decimal(_) => "Decimal",
            Self::Date(_) => "Date",
            Self::Time(_) => "Time",
            Self::Timestamp(_) => "Timestamp",
            Self::Interval(_) => "Interval",
            Self::Text(_) => "Text",
            Self::Blob(_) => "Blob",
            Self::Uuid(_) => "Uuid",
            Self::Enum(_) => "Enum",
            Self::List(_) => "List",
            Self::Struct(_) => "Struct",
            Self::Map(_) => "Map",
        }
    }

    /// Return whether the value can be read as `info`.
    ///
    /// Shares its rules with the renderer but ignores the depth limit.
    #[must_use]
    pub fn conforms_to(&self, info: &TypeInfo) -> bool {
        Renderer::unbounded().render(self, info).is_ok()
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Self::UInt(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Interval> for Value {
    fn from(value: Interval) -> Self {
        Self::Interval(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
