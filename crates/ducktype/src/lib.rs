//! ## Crate layout
//! - `config`: TOML-backed render configuration.
//! - `core`: column type descriptors, values, the renderer, and CBOR persistence.
//! - `primitives`: the type-tag registry shared by every layer.
//!
//! The `prelude` module carries the vocabulary most callers need to
//! describe a column and render a cell.

pub use ducktype_config as config;
pub use ducktype_core as core;
pub use ducktype_primitives as primitives;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use crate::core::Error;

///
/// Prelude
///

pub mod prelude {
    pub use crate::config::{Config, RenderConfig};
    pub use crate::core::{
        prelude::*,
        serialize::{deserialize, serialize},
        type_info::TypeInfoError,
        value::{RenderError, render},
    };
}
