use crate::type_info::TypeInfo;
use ducktype_primitives::TypeTag;
use std::{
    hash::{Hash, Hasher},
    mem,
};

///
/// TypeDetails
///
/// Kind-specific payload of a descriptor. Each composite carries exactly
/// the parameters its kind needs, so a decimal without width or a map
/// without a value type cannot be represented.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum TypeDetails {
    Primitive(TypeTag),
    Decimal(DecimalDetails),
    Enum(EnumDetails),
    List(ListDetails),
    Array(ArrayDetails),
    Struct(StructDetails),
    Map(MapDetails),
}

impl TypeDetails {
    #[must_use]
    pub const fn tag(&self) -> TypeTag {
        match self {
            Self::Primitive(tag) => *tag,
            Self::Decimal(_) => TypeTag::Decimal,
            Self::Enum(_) => TypeTag::Enum,
            Self::List(_) => TypeTag::List,
            Self::Array(_) => TypeTag::Array,
            Self::Struct(_) => TypeTag::Struct,
            Self::Map(_) => TypeTag::Map,
        }
    }

    /// Compare kind and parameters, ignoring child descriptors.
    pub(super) fn shallow_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Primitive(a), Self::Primitive(b)) => a == b,
            (Self::Decimal(a), Self::Decimal(b)) => a == b,
            (Self::Enum(a), Self::Enum(b)) => a == b,
            (Self::List(_), Self::List(_)) | (Self::Map(_), Self::Map(_)) => true,
            (Self::Array(a), Self::Array(b)) => a.size == b.size,
            (Self::Struct(a), Self::Struct(b)) => a.names().eq(b.names()),
            _ => false,
        }
    }

    /// Hash kind and parameters, ignoring child descriptors.
    pub(super) fn hash_shallow<H: Hasher>(&self, state: &mut H) {
        self.tag().hash(state);

        match self {
            Self::Primitive(_) | Self::List(_) | Self::Map(_) => {}
            Self::Decimal(decimal) => decimal.hash(state),
            Self::Enum(members) => members.names.hash(state),
            Self::Array(array) => array.size.hash(state),
            Self::Struct(record) => {
                record.fields.len().hash(state);
                for field in &record.fields {
                    field.name.hash(state);
                }
            }
        }
    }

    /// Move the child descriptors out, leaving a childless placeholder.
    pub(super) fn take_children(&mut self) -> Vec<TypeInfo> {
        match mem::replace(self, Self::Primitive(TypeTag::Invalid)) {
            Self::List(list) => vec![list.child],
            Self::Array(array) => vec![array.child],
            Self::Struct(record) => record.fields.into_iter().map(|field| field.info).collect(),
            Self::Map(map) => vec![map.key, map.value],
            leaf => {
                *self = leaf;
                Vec::new()
            }
        }
    }
}

///
/// DecimalDetails
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct DecimalDetails {
    width: u8,
    scale: u8,
}

impl DecimalDetails {
    pub(super) const fn new(width: u8, scale: u8) -> Self {
        Self { width, scale }
    }

    /// Total number of significant digits.
    #[must_use]
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Digits after the decimal point.
    #[must_use]
    pub const fn scale(&self) -> u8 {
        self.scale
    }

    /// Digits available before the decimal point.
    #[must_use]
    pub const fn integral_digits(&self) -> u8 {
        self.width - self.scale
    }
}

///
/// EnumDetails
///
/// Member names in ordinal order.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct EnumDetails {
    names: Vec<String>,
}

impl EnumDetails {
    pub(super) const fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    // construction rejects empty enums, kept for clippy's len_without_is_empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Zero-based ordinal of a member.
    #[must_use]
    pub fn ordinal(&self, name: &str) -> Option<u32> {
        self.names
            .iter()
            .position(|member| member == name)
            .and_then(|index| u32::try_from(index).ok())
    }

    #[must_use]
    pub fn name_at(&self, ordinal: u32) -> Option<&str> {
        let index = usize::try_from(ordinal).ok()?;

        self.names.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|member| member == name)
    }
}

///
/// ListDetails
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ListDetails {
    child: TypeInfo,
}

impl ListDetails {
    pub(super) const fn new(child: TypeInfo) -> Self {
        Self { child }
    }

    #[must_use]
    pub const fn child(&self) -> &TypeInfo {
        &self.child
    }
}

///
/// ArrayDetails
///
/// Fixed-size list.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ArrayDetails {
    child: TypeInfo,
    size: u32,
}

impl ArrayDetails {
    pub(super) const fn new(child: TypeInfo, size: u32) -> Self {
        Self { child, size }
    }

    #[must_use]
    pub const fn child(&self) -> &TypeInfo {
        &self.child
    }

    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }
}

///
/// StructDetails
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct StructDetails {
    fields: Vec<StructField>,
}

impl StructDetails {
    pub(super) const fn new(fields: Vec<StructField>) -> Self {
        Self { fields }
    }

    /// Fields in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[StructField] {
        &self.fields
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&StructField> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(StructField::name)
    }
}

///
/// StructField
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct StructField {
    name: String,
    info: TypeInfo,
}

impl StructField {
    pub(super) const fn new(name: String, info: TypeInfo) -> Self {
        Self { name, info }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn info(&self) -> &TypeInfo {
        &self.info
    }
}

///
/// MapDetails
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct MapDetails {
    key: TypeInfo,
    value: TypeInfo,
}

impl MapDetails {
    pub(super) const fn new(key: TypeInfo, value: TypeInfo) -> Self {
        Self { key, value }
    }

    #[must_use]
    pub const fn key(&self) -> &TypeInfo {
        &self.key
    }

    #[must_use]
    pub const fn value(&self) -> &TypeInfo {
        &self.value
    }
}
