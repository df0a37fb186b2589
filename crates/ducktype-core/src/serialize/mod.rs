//! CBOR persistence for descriptors and other serde types.
//!
//! Decoding a [`TypeInfo`](crate::type_info::TypeInfo) goes through its
//! validating constructors, so a payload that decodes is always a
//! descriptor the constructors would have produced.

mod cbor;


use serde::{Serialize, de::DeserializeOwned};
use std::fmt;
use thiserror::Error as ThisError;

///
/// CONSTANTS
///

/// Default decode bound for [`deserialize`].
pub const MAX_DESCRIPTOR_BYTES: usize = 64 * 1024;

///
/// SerializeError
///
/// Encoding fails only for descriptors too deep to persist; decoding fails
/// on oversized input, malformed CBOR, or a payload the descriptor
/// constructors reject.
///

#[derive(Debug, ThisError)]
pub enum SerializeError {
    #[error("cannot encode payload: {0}")]
    Encode(String),

    #[error("cannot decode payload: {0}")]
    Decode(String),

    #[error("payload of {len} bytes exceeds the {max_bytes}-byte decode bound")]
    PayloadTooLarge { len: usize, max_bytes: usize },
}

impl SerializeError {
    #[must_use]
    pub const fn kind(&self) -> SerializeErrorKind {
        match self {
            Self::Encode(_) => SerializeErrorKind::Encode,
            Self::Decode(_) => SerializeErrorKind::Decode,
            Self::PayloadTooLarge { .. } => SerializeErrorKind::PayloadTooLarge,
        }
    }
}

///
/// SerializeErrorKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SerializeErrorKind {
    Encode,
    Decode,
    PayloadTooLarge,
}

impl SerializeErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Encode => "encode",
            Self::Decode => "decode",
            Self::PayloadTooLarge => "payload_too_large",
        }
    }
}

impl fmt::Display for SerializeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Encode `value` as CBOR.
pub fn serialize<T>(value: &T) -> Result<Vec<u8>, SerializeError>
where
    T: Serialize,
{
    cbor::serialize(value)
}

/// Decode CBOR written by [`serialize`], refusing payloads over
/// [`MAX_DESCRIPTOR_BYTES`].
pub fn deserialize<T>(bytes: &[u8]) -> Result<T, SerializeError>
where
    T: DeserializeOwned,
{
    cbor::deserialize_bounded(bytes, MAX_DESCRIPTOR_BYTES)
}

/// Decode CBOR written by [`serialize`] under a caller-chosen byte bound.
pub fn deserialize_bounded<T>(bytes: &[u8], max_bytes: usize) -> Result<T, SerializeError>
where
    T: DeserializeOwned,
{
    cbor::deserialize_bounded(bytes, max_bytes)
}
