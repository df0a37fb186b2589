//! Closed registry of engine type tags.
//!
//! Every tag the engine can report lives in one macro-driven table
//! (`type_tag_registry_entries!`), so the wire code, display name and
//! construction class of a tag can never drift apart.

#[macro_use]
mod macros;

#[cfg(test)]
mod tests;

use std::fmt;

///
/// TypeTag
///
/// Engine column type identifier.
///
/// IMPORTANT:
/// Discriminants are the engine's wire ids and must never be renumbered.
///

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum TypeTag {
    Invalid = 0,
    Boolean = 1,
    TinyInt = 2,
    SmallInt = 3,
    Integer = 4,
    BigInt = 5,
    UTinyInt = 6,
    USmallInt = 7,
    UInteger = 8,
    UBigInt = 9,
    Float = 10,
    Double = 11,
    Timestamp = 12,
    Date = 13,
    Time = 14,
    Interval = 15,
    HugeInt = 16,
    Varchar = 17,
    Blob = 18,
    Decimal = 19,
    TimestampS = 20,
    TimestampMs = 21,
    TimestampNs = 22,
    Enum = 23,
    List = 24,
    Struct = 25,
    Map = 26,
    Uuid = 27,
    Union = 28,
    Bit = 29,
    TimeTz = 30,
    TimestampTz = 31,
    UHugeInt = 32,
    Array = 33,
    Any = 34,
    VarInt = 35,
    SqlNull = 36,
}

impl TypeTag {
    /// Return the full registry entry for one tag.
    #[must_use]
    pub const fn metadata(self) -> TypeTagMetadata {
        type_tag_registry!(metadata_from_registry, self)
    }

    /// Resolve a wire id back to its tag.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        type_tag_registry!(from_code_from_registry, code)
    }

    /// Resolve a canonical display name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_TYPE_TAGS
            .iter()
            .copied()
            .find(|tag| tag.name().eq_ignore_ascii_case(name))
    }

    /// Stable wire id.
    #[must_use]
    pub const fn code(self) -> u8 {
        self.metadata().code
    }

    /// Canonical display name, used for diagnostics only.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.metadata().name
    }

    #[must_use]
    pub const fn class(self) -> TypeTagClass {
        self.metadata().class
    }

    /// Return whether a descriptor can be built from the bare tag.
    #[must_use]
    pub const fn is_primitive(self) -> bool {
        matches!(self.class(), TypeTagClass::Primitive)
    }

    /// Return whether the tag needs a composite constructor.
    #[must_use]
    pub const fn is_composite(self) -> bool {
        matches!(self.class(), TypeTagClass::Composite)
    }

    /// Return whether any descriptor can carry this tag.
    #[must_use]
    pub const fn is_supported(self) -> bool {
        !matches!(self.class(), TypeTagClass::Unsupported)
    }

    /// Fractional-second digits kept by time-of-day tags.
    #[must_use]
    pub const fn fractional_digits(self) -> Option<u32> {
        match self {
            Self::TimestampS => Some(0),
            Self::TimestampMs => Some(3),
            Self::Time | Self::Timestamp | Self::TimestampTz => Some(6),
            Self::TimestampNs => Some(9),
            _ => None,
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

///
/// TypeTagMetadata
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TypeTagMetadata {
    pub code: u8,
    pub name: &'static str,
    pub class: TypeTagClass,
}

///
/// TypeTagClass
///
/// How a descriptor for the tag is obtained.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TypeTagClass {
    /// Built directly from the tag.
    Primitive,
    /// Needs parameters or children (decimal, enum, list, array, struct, map).
    Composite,
    /// Registered by the engine but not exposed through descriptors.
    Unsupported,
}

/// Ordered list of all tags in registry order.
pub const ALL_TYPE_TAGS: [TypeTag; 37] = type_tag_registry!(all_tags_from_registry);

/// Iterate the tags accepted by the primitive descriptor factory.
pub fn primitive_tags() -> impl Iterator<Item = TypeTag> {
    ALL_TYPE_TAGS.into_iter().filter(|tag| tag.is_primitive())
}

/// Iterate the tags that require a composite constructor.
pub fn composite_tags() -> impl Iterator<Item = TypeTag> {
    ALL_TYPE_TAGS.into_iter().filter(|tag| tag.is_composite())
}
