use crate::{
    type_info::{DecimalDetails, TypeDetails, TypeInfo},
    value::{
        Value,
        temporal::{format_date, format_time, format_timestamp, format_utc_offset},
    },
};
use chrono::{NaiveDateTime, TimeDelta};
use ducktype_config::RenderConfig;
use ducktype_primitives::TypeTag;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use thiserror::Error as ThisError;

// rust_decimal keeps at most 28 fractional digits; wider scales are zero-padded
const MAX_NATIVE_SCALE: u32 = 28;

///
/// RenderError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum RenderError {
    #[error("cannot render {found} value as {expected}")]
    TypeMismatch {
        expected: String,
        found: &'static str,
    },

    #[error("value {value} is out of range for {tag}")]
    ValueOutOfRange { tag: TypeTag, value: String },

    #[error("decimal {value} does not fit DECIMAL({width},{scale})")]
    DecimalOverflow { value: String, width: u8, scale: u8 },

    #[error("'{member}' is not a member of {expected}")]
    UnknownEnumMember { member: String, expected: String },

    #[error("array expects {expected} elements, found {found}")]
    ArrayLengthMismatch { expected: u32, found: usize },

    #[error("struct field {index}: expected '{expected}', found '{found}'")]
    StructFieldMismatch {
        index: usize,
        expected: String,
        found: String,
    },

    #[error("map key at index {index} is NULL")]
    NullMapKey { index: usize },

    #[error("value nesting exceeds render depth limit {max_depth}")]
    DepthLimitExceeded { max_depth: usize },
}

impl RenderError {
    #[must_use]
    pub const fn kind(&self) -> RenderErrorKind {
        match self {
            Self::TypeMismatch { .. } => RenderErrorKind::TypeMismatch,
            Self::ValueOutOfRange { .. } => RenderErrorKind::ValueOutOfRange,
            Self::DecimalOverflow { .. } => RenderErrorKind::DecimalOverflow,
            Self::UnknownEnumMember { .. } => RenderErrorKind::UnknownEnumMember,
            Self::ArrayLengthMismatch { .. } => RenderErrorKind::ArrayLengthMismatch,
            Self::StructFieldMismatch { .. } => RenderErrorKind::StructFieldMismatch,
            Self::NullMapKey { .. } => RenderErrorKind::NullMapKey,
            Self::DepthLimitExceeded { .. } => RenderErrorKind::DepthLimitExceeded,
        }
    }

    fn mismatch(info: &TypeInfo, value: &Value) -> Self {
        Self::TypeMismatch {
            expected: info.to_string(),
            found: value.kind_label(),
        }
    }
}

///
/// RenderErrorKind
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum RenderErrorKind {
    TypeMismatch,
    ValueOutOfRange,
    DecimalOverflow,
    UnknownEnumMember,
    ArrayLengthMismatch,
    StructFieldMismatch,
    NullMapKey,
    DepthLimitExceeded,
}

impl RenderErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TypeMismatch => "type_mismatch",
            Self::ValueOutOfRange => "value_out_of_range",
            Self::DecimalOverflow => "decimal_overflow",
            Self::UnknownEnumMember => "unknown_enum_member",
            Self::ArrayLengthMismatch => "array_length_mismatch",
            Self::StructFieldMismatch => "struct_field_mismatch",
            Self::NullMapKey => "null_map_key",
            Self::DepthLimitExceeded => "depth_limit_exceeded",
        }
    }
}

impl fmt::Display for RenderErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render `value` under `info` with the default configuration.
pub fn render(value: &Value, info: &TypeInfo) -> Result<String, RenderError> {
    Renderer::default().render(value, info)
}

///
/// Renderer
///
/// Formats values the way the engine's VARCHAR cast does:
/// `[a, b]` for lists, `{'k': v}` for structs, `{k=v}` for maps, bare
/// strings, and decimals padded to their declared scale.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    #[must_use]
    pub const fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub(super) const fn unbounded() -> Self {
        Self::new(RenderConfig::new(usize::MAX, 0))
    }

    #[must_use]
    pub const fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn render(&self, value: &Value, info: &TypeInfo) -> Result<String, RenderError> {
        log::trace!("rendering {} as {info}", value.kind_label());

        let mut out = String::new();
        self.write_value(&mut out, value, info, 1)?;

        Ok(out)
    }

    fn write_value(
        &self,
        out: &mut String,
        value: &Value,
        info: &TypeInfo,
        depth: usize,
    ) -> Result<(), RenderError> {
        if depth > self.config.max_depth {
            return Err(RenderError::DepthLimitExceeded {
                max_depth: self.config.max_depth,
            });
        }

        if value.is_null() {
            out.push_str("NULL");
            return Ok(());
        }

        match info.details() {
            TypeDetails::Primitive(tag) => self.write_primitive(out, value, *tag, info),
            TypeDetails::Decimal(decimal) => write_decimal(out, value, decimal, info),
            TypeDetails::Enum(members) => match value {
                Value::Enum(name) if members.contains(name) => {
                    out.push_str(name);
                    Ok(())
                }
                Value::Enum(name) => Err(RenderError::UnknownEnumMember {
                    member: name.clone(),
                    expected: info.to_string(),
                }),
                _ => Err(RenderError::mismatch(info, value)),
            },
            TypeDetails::List(list) => match value {
                Value::List(items) => self.write_items(out, items, list.child(), depth),
                _ => Err(RenderError::mismatch(info, value)),
            },
            TypeDetails::Array(array) => match value {
                Value::List(items) if items.len() == array.size() as usize => {
                    self.write_items(out, items, array.child(), depth)
                }
                Value::List(items) => Err(RenderError::ArrayLengthMismatch {
                    expected: array.size(),
                    found: items.len(),
                }),
                _ => Err(RenderError::mismatch(info, value)),
            },
            TypeDetails::Struct(record) => {
                let Value::Struct(fields) = value else {
                    return Err(RenderError::mismatch(info, value));
                };
                let expected = record.fields();

                if fields.len() != expected.len() {
                    let index = fields.len().min(expected.len());
                    return Err(RenderError::StructFieldMismatch {
                        index,
                        expected: expected
                            .get(index)
                            .map_or_else(|| "(none)".to_string(), |f| f.name().to_string()),
                        found: fields
                            .get(index)
                            .map_or_else(|| "(none)".to_string(), |(name, _)| name.clone()),
                    });
                }

                out.push('{');
                for (index, (field, (name, child))) in expected.iter().zip(fields).enumerate() {
                    if field.name() != name {
                        return Err(RenderError::StructFieldMismatch {
                            index,
                            expected: field.name().to_string(),
                            found: name.clone(),
                        });
                    }
                    if index > 0 {
                        out.push_str(", ");
                    }
                    push_quoted(out, name);
                    out.push_str(": ");
                    self.write_value(out, child, field.info(), depth + 1)?;
                }
                out.push('}');

                Ok(())
            }
            TypeDetails::Map(map) => {
                let Value::Map(entries) = value else {
                    return Err(RenderError::mismatch(info, value));
                };

                out.push('{');
                for (index, (key, entry)) in entries.iter().enumerate() {
                    if key.is_null() {
                        return Err(RenderError::NullMapKey { index });
                    }
                    if index > 0 {
                        out.push_str(", ");
                    }
                    self.write_value(out, key, map.key(), depth + 1)?;
                    out.push('=');
                    self.write_value(out, entry, map.value(), depth + 1)?;
                }
                out.push('}');

                Ok(())
            }
        }
    }

    fn write_items(
        &self,
        out: &mut String,
        items: &[Value],
        child: &TypeInfo,
        depth: usize,
    ) -> Result<(), RenderError> {
        out.push('[');
        for (index, item) in items.iter().enumerate() {
            if index > 0 {
                out.push_str(", ");
            }
            self.write_value(out, item, child, depth + 1)?;
        }
        out.push(']');

        Ok(())
    }

    fn write_primitive(
        &self,
        out: &mut String,
        value: &Value,
        tag: TypeTag,
        info: &TypeInfo,
    ) -> Result<(), RenderError> {
        match (tag, value) {
            (TypeTag::Boolean, Value::Bool(b)) => out.push_str(if *b { "true" } else { "false" }),

            (TypeTag::TinyInt, Value::Int(n)) => push_ranged::<i8, _>(out, tag, *n)?,
            (TypeTag::SmallInt, Value::Int(n)) => push_ranged::<i16, _>(out, tag, *n)?,
            (TypeTag::Integer, Value::Int(n)) => push_ranged::<i32, _>(out, tag, *n)?,
            (TypeTag::BigInt, Value::Int(n)) => out.push_str(&n.to_string()),
            (TypeTag::UTinyInt, Value::UInt(n)) => push_ranged::<u8, _>(out, tag, *n)?,
            (TypeTag::USmallInt, Value::UInt(n)) => push_ranged::<u16, _>(out, tag, *n)?,
            (TypeTag::UInteger, Value::UInt(n)) => push_ranged::<u32, _>(out, tag, *n)?,
            (TypeTag::UBigInt, Value::UInt(n)) => out.push_str(&n.to_string()),
            (TypeTag::HugeInt, Value::HugeInt(n)) => out.push_str(&n.to_string()),
            (TypeTag::HugeInt, Value::Int(n)) => out.push_str(&n.to_string()),
            (TypeTag::HugeInt, Value::UInt(n)) => out.push_str(&n.to_string()),

            (TypeTag::Float, Value::Float(x)) => push_f32(out, *x),
            (TypeTag::Double, Value::Double(x)) => push_f64(out, *x),
            (TypeTag::Double, Value::Float(x)) => push_f64(out, f64::from(*x)),

            (TypeTag::Date, Value::Date(date)) => out.push_str(&format_date(*date)),
            (TypeTag::Time, Value::Time(time)) => out.push_str(&format_time(*time, 6)),
            (
                TypeTag::Timestamp
                | TypeTag::TimestampS
                | TypeTag::TimestampMs
                | TypeTag::TimestampNs,
                Value::Timestamp(ts),
            ) => {
                let digits = tag.fractional_digits().unwrap_or(6);
                out.push_str(&format_timestamp(*ts, digits));
            }
            (TypeTag::TimestampTz, Value::Timestamp(ts)) => self.push_timestamp_tz(out, *ts)?,
            (TypeTag::Interval, Value::Interval(interval)) => out.push_str(&interval.to_string()),

            (TypeTag::Varchar, Value::Text(s)) => out.push_str(s),
            (TypeTag::Blob, Value::Blob(bytes)) => push_blob(out, bytes),
            (TypeTag::Uuid, Value::Uuid(uuid)) => push_uuid(out, *uuid),

            _ => return Err(RenderError::mismatch(info, value)),
        }

        Ok(())
    }

    fn push_timestamp_tz(&self, out: &mut String, ts: NaiveDateTime) -> Result<(), RenderError> {
        let offset = self.config.utc_offset_minutes;
        let shifted = TimeDelta::try_minutes(i64::from(offset))
            .and_then(|delta| ts.checked_add_signed(delta))
            .ok_or_else(|| RenderError::ValueOutOfRange {
                tag: TypeTag::TimestampTz,
                value: ts.to_string(),
            })?;

        out.push_str(&format_timestamp(shifted, 6));
        out.push_str(&format_utc_offset(offset));

        Ok(())
    }
}

fn push_ranged<T, N>(out: &mut String, tag: TypeTag, n: N) -> Result<(), RenderError>
where
    T: TryFrom<N>,
    N: Copy + ToString,
{
    if T::try_from(n).is_err() {
        return Err(RenderError::ValueOutOfRange {
            tag,
            value: n.to_string(),
        });
    }

    out.push_str(&n.to_string());

    Ok(())
}

fn push_f32(out: &mut String, x: f32) {
    if x.is_nan() {
        out.push_str("nan");
    } else if x.is_infinite() {
        out.push_str(if x.is_sign_negative() { "-inf" } else { "inf" });
    } else {
        push_finite(out, &format!("{x:e}"), || x.to_string());
    }
}

fn push_f64(out: &mut String, x: f64) {
    if x.is_nan() {
        out.push_str("nan");
    } else if x.is_infinite() {
        out.push_str(if x.is_sign_negative() { "-inf" } else { "inf" });
    } else {
        push_finite(out, &format!("{x:e}"), || x.to_string());
    }
}

// Shortest round-trip digits; exponents outside [-4, 16) switch to `1.5e+20`.
fn push_finite(out: &mut String, scientific: &str, plain: impl FnOnce() -> String) {
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        out.push_str(scientific);
        return;
    };
    let exponent: i32 = exponent.parse().unwrap_or_default();

    if (-4..16).contains(&exponent) {
        out.push_str(&plain());
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        out.push_str(&format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs()));
    }
}

// Round half away from zero to the declared scale, then zero-pad.
fn write_decimal(
    out: &mut String,
    value: &Value,
    decimal: &DecimalDetails,
    info: &TypeInfo,
) -> Result<(), RenderError> {
    let raw = match value {
        Value::Decimal(d) => *d,
        Value::Int(n) => Decimal::from(*n),
        Value::UInt(n) => Decimal::from(*n),
        _ => return Err(RenderError::mismatch(info, value)),
    };

    let scale = u32::from(decimal.scale());
    let kept = scale.min(MAX_NATIVE_SCALE);
    let mut rounded = raw.round_dp_with_strategy(kept, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(kept);

    let limit = 10i128
        .checked_pow(u32::from(decimal.integral_digits()))
        .and_then(|bound| Decimal::try_from_i128_with_scale(bound, 0).ok());
    if let Some(limit) = limit
        && rounded.abs().trunc() >= limit
    {
        return Err(RenderError::DecimalOverflow {
            value: raw.to_string(),
            width: decimal.width(),
            scale: decimal.scale(),
        });
    }

    let text = rounded.to_string();
    let fraction_len = text.split_once('.').map_or(0, |(_, fraction)| fraction.len());
    out.push_str(&text);

    let missing = (scale as usize).saturating_sub(fraction_len);
    if missing > 0 {
        if fraction_len == 0 {
            out.push('.');
        }
        out.extend(std::iter::repeat_n('0', missing));
    }

    Ok(())
}

// Printable ASCII passes through; everything else becomes `\xHH`.
fn push_blob(out: &mut String, bytes: &[u8]) {
    for &byte in bytes {
        if (32..=126).contains(&byte) && !matches!(byte, b'\\' | b'\'' | b'"') {
            out.push(char::from(byte));
        } else {
            out.push_str(&format!("\\x{byte:02X}"));
        }
    }
}

fn push_uuid(out: &mut String, uuid: u128) {
    let hex = format!("{uuid:032x}");

    out.push_str(&format!(
        "{}-{}-{}-{}-{}",
        &hex[0..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..32]
    ));
}

fn push_quoted(out: &mut String, s: &str) {
    out.push('\'');
    for c in s.chars() {
        if c == '\'' {
            out.push('\'');
        }
        out.push(c);
    }
    out.push('\'');
}
