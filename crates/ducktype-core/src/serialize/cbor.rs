use crate::serialize::SerializeError;
use serde::{Serialize, de::DeserializeOwned};
use serde_cbor::{from_slice, to_vec};
use std::panic::{AssertUnwindSafe, catch_unwind};

pub(super) fn serialize<T>(value: &T) -> Result<Vec<u8>, SerializeError>
where
    T: Serialize,
{
    to_vec(value).map_err(|err| SerializeError::Encode(err.to_string()))
}

/// Decode at most `max_bytes` of CBOR.
///
/// The length is checked before any parsing, and a panic inside the
/// decoder comes back as [`SerializeError::Decode`].
pub(super) fn deserialize_bounded<T>(bytes: &[u8], max_bytes: usize) -> Result<T, SerializeError>
where
    T: DeserializeOwned,
{
    if bytes.len() > max_bytes {
        return Err(SerializeError::PayloadTooLarge {
            len: bytes.len(),
            max_bytes,
        });
    }

    match catch_unwind(AssertUnwindSafe(|| from_slice(bytes))) {
        Ok(decoded) => decoded.map_err(|err| SerializeError::Decode(err.to_string())),
        Err(_) => Err(SerializeError::Decode("decoder panicked".to_string())),
    }
}
