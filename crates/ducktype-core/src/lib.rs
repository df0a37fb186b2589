//! Core runtime for ducktype: column type descriptors, typed values, the
//! value renderer, and descriptor persistence.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod error;
pub mod serialize;
pub mod type_info;
pub mod value;

pub use error::Error;

// test
#[cfg(test)]
pub(crate) mod test_support;

// registry re-export so callers need a single dependency
pub use ducktype_primitives as primitives;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, serializers, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        type_info::{TypeDetails, TypeInfo},
        value::{Interval, Renderer, Value},
    };
    pub use ducktype_primitives::TypeTag;
}
