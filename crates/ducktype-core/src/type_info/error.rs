use ducktype_primitives::TypeTag;
use std::fmt;
use thiserror::Error as ThisError;

///
/// TypeInfoError
///
/// Rejection reasons for descriptor construction.
/// A failed constructor never yields a partially-built descriptor.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum TypeInfoError {
    #[error("type {tag} cannot be built as a primitive descriptor")]
    InvalidTag { tag: TypeTag },

    #[error("unknown type tag '{name}'")]
    UnknownTag { name: String },

    #[error("invalid decimal bounds: width {width}, scale {scale} (width must be 1..={max}, scale 0..=width)", max = super::MAX_DECIMAL_WIDTH)]
    InvalidDecimalBounds { width: u8, scale: u8 },

    #[error("enum member '{name}' appears at positions {first} and {second}")]
    DuplicateEnumMember {
        name: String,
        first: usize,
        second: usize,
    },

    #[error("enum must declare at least one member")]
    EmptyEnum,

    #[error("{context} name at position {index} is empty")]
    EmptyName {
        context: NameContext,
        index: usize,
    },

    #[error("struct needs matching, non-empty children and names (got {children} children, {names} names)")]
    ArityMismatch { children: usize, names: usize },

    #[error("struct field '{name}' appears at positions {first} and {second}")]
    DuplicateStructField {
        name: String,
        first: usize,
        second: usize,
    },

    #[error("array size {size} is outside 1..={max}", max = super::MAX_ARRAY_SIZE)]
    InvalidArraySize { size: u32 },

    #[error("{tag} descriptor is malformed: {reason}")]
    InvalidChildDescriptor { tag: TypeTag, reason: String },

    #[error("descriptor depth {depth} exceeds persistable depth {max}", max = super::MAX_PERSISTED_DEPTH)]
    NestingTooDeep { depth: usize },
}

impl TypeInfoError {
    /// Return a stable error kind independent of message text.
    #[must_use]
    pub const fn kind(&self) -> TypeInfoErrorKind {
        match self {
            Self::InvalidTag { .. } | Self::UnknownTag { .. } => TypeInfoErrorKind::InvalidTag,
            Self::InvalidDecimalBounds { .. } => TypeInfoErrorKind::InvalidDecimalBounds,
            Self::DuplicateEnumMember { .. } => TypeInfoErrorKind::DuplicateEnumMember,
            Self::EmptyEnum => TypeInfoErrorKind::EmptyEnum,
            Self::EmptyName { .. } => TypeInfoErrorKind::EmptyName,
            Self::ArityMismatch { .. } => TypeInfoErrorKind::ArityMismatch,
            Self::DuplicateStructField { .. } => TypeInfoErrorKind::DuplicateStructField,
            Self::InvalidArraySize { .. } => TypeInfoErrorKind::InvalidArraySize,
            Self::InvalidChildDescriptor { .. } => TypeInfoErrorKind::InvalidChildDescriptor,
            Self::NestingTooDeep { .. } => TypeInfoErrorKind::NestingTooDeep,
        }
    }
}

///
/// TypeInfoErrorKind
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TypeInfoErrorKind {
    InvalidTag,
    InvalidDecimalBounds,
    DuplicateEnumMember,
    EmptyEnum,
    EmptyName,
    ArityMismatch,
    DuplicateStructField,
    InvalidArraySize,
    InvalidChildDescriptor,
    NestingTooDeep,
}

impl TypeInfoErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidTag => "invalid_tag",
            Self::InvalidDecimalBounds => "invalid_decimal_bounds",
            Self::DuplicateEnumMember => "duplicate_enum_member",
            Self::EmptyEnum => "empty_enum",
            Self::EmptyName => "empty_name",
            Self::ArityMismatch => "arity_mismatch",
            Self::DuplicateStructField => "duplicate_struct_field",
            Self::InvalidArraySize => "invalid_array_size",
            Self::InvalidChildDescriptor => "invalid_child_descriptor",
            Self::NestingTooDeep => "nesting_too_deep",
        }
    }
}

impl fmt::Display for TypeInfoErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// NameContext
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NameContext {
    EnumMember,
    StructField,
}

impl fmt::Display for NameContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EnumMember => f.write_str("enum member"),
            Self::StructField => f.write_str("struct field"),
        }
    }
}
