//! Type descriptors for engine column types.
//!
//! A [`TypeInfo`] is built once through a validating constructor and never
//! changes afterwards. Composite descriptors hold their children behind an
//! `Arc`, so one descriptor can be reused under any number of parents and
//! shared freely across threads.

mod details;
mod error;
mod raw;
mod sql;


use ducktype_primitives::TypeTag;
use serde::{Deserialize, Serialize, Serializer, ser::Error as _};
use std::{
    collections::BTreeMap,
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

// re-exports
pub use details::{
    ArrayDetails, DecimalDetails, EnumDetails, ListDetails, MapDetails, StructDetails,
    StructField, TypeDetails,
};
pub use error::{NameContext, TypeInfoError, TypeInfoErrorKind};
pub use raw::RawTypeInfo;

///
/// CONSTANTS
///

/// Widest decimal the engine stores.
pub const MAX_DECIMAL_WIDTH: u8 = 38;

/// Largest fixed-size array the engine accepts.
pub const MAX_ARRAY_SIZE: u32 = 100_000;

/// Deepest descriptor that can be persisted. Construction itself is
/// unbounded; this keeps encoded payloads inside the decoders' own
/// recursion limits.
pub const MAX_PERSISTED_DEPTH: usize = 32;

///
/// TypeInfo
///
/// Immutable, cheaply cloneable column type descriptor.
///
/// Equality, hashing, `Display` and drop walk the tree with an explicit
/// worklist, so nesting depth never turns into call-stack depth.
///

#[derive(Clone, Deserialize)]
#[serde(try_from = "RawTypeInfo")]
pub struct TypeInfo {
    details: Arc<TypeDetails>,
}

impl TypeInfo {
    fn from_details(details: TypeDetails) -> Self {
        Self {
            details: Arc::new(details),
        }
    }

    ///
    /// CONSTRUCTORS
    ///

    /// Build a descriptor for a tag that takes no parameters.
    pub fn primitive(tag: TypeTag) -> Result<Self, TypeInfoError> {
        if !tag.is_primitive() {
            log::debug!("rejected primitive descriptor for {tag} ({:?})", tag.class());
            return Err(TypeInfoError::InvalidTag { tag });
        }

        Ok(Self::from_details(TypeDetails::Primitive(tag)))
    }

    /// Build a fixed-point descriptor.
    ///
    /// `width` must be in `1..=38` and `scale` in `0..=width`.
    pub fn decimal(width: u8, scale: u8) -> Result<Self, TypeInfoError> {
        if width == 0 || width > MAX_DECIMAL_WIDTH || scale > width {
            log::debug!("rejected DECIMAL({width},{scale})");
            return Err(TypeInfoError::InvalidDecimalBounds { width, scale });
        }

        Ok(Self::from_details(TypeDetails::Decimal(
            DecimalDetails::new(width, scale),
        )))
    }

    /// Build an enum descriptor; the first name gets ordinal 0.
    pub fn enumeration<S: AsRef<str>>(names: &[S]) -> Result<Self, TypeInfoError> {
        if names.is_empty() {
            log::debug!("rejected ENUM without members");
            return Err(TypeInfoError::EmptyEnum);
        }

        let names = validate_names(names, NameContext::EnumMember)?;

        Ok(Self::from_details(TypeDetails::Enum(EnumDetails::new(
            names,
        ))))
    }

    /// Build a variable-length list of `child`.
    ///
    /// Every descriptor is a valid element type, so this cannot fail.
    #[must_use]
    pub fn list(child: &Self) -> Self {
        log::trace!("built LIST of {child}");

        Self::from_details(TypeDetails::List(ListDetails::new(child.clone())))
    }

    /// Build a fixed-size array of `child`.
    pub fn array(child: &Self, size: u32) -> Result<Self, TypeInfoError> {
        if size == 0 || size > MAX_ARRAY_SIZE {
            log::debug!("rejected {child}[{size}]");
            return Err(TypeInfoError::InvalidArraySize { size });
        }

        Ok(Self::from_details(TypeDetails::Array(ArrayDetails::new(
            child.clone(),
            size,
        ))))
    }

    /// Build a struct from parallel child/name sequences.
    ///
    /// Field order follows input order. Field names must be non-empty and
    /// unique within this struct; nested structs may reuse them.
    pub fn structure<S: AsRef<str>>(children: &[Self], names: &[S]) -> Result<Self, TypeInfoError> {
        if children.is_empty() || children.len() != names.len() {
            log::debug!(
                "rejected STRUCT with {} children and {} names",
                children.len(),
                names.len()
            );
            return Err(TypeInfoError::ArityMismatch {
                children: children.len(),
                names: names.len(),
            });
        }

        let names = validate_names(names, NameContext::StructField)?;
        let fields = names
            .into_iter()
            .zip(children.iter().cloned())
            .map(|(name, info)| StructField::new(name, info))
            .collect::<Vec<_>>();

        log::trace!("built STRUCT with {} fields", fields.len());

        Ok(Self::from_details(TypeDetails::Struct(
            StructDetails::new(fields),
        )))
    }

    /// Build a map from `key` to `value`. Cannot fail.
    #[must_use]
    pub fn map(key: &Self, value: &Self) -> Self {
        log::trace!("built MAP({key}, {value})");

        Self::from_details(TypeDetails::Map(MapDetails::new(
            key.clone(),
            value.clone(),
        )))
    }

    ///
    /// INTROSPECTION
    ///

    #[must_use]
    pub fn tag(&self) -> TypeTag {
        self.details.tag()
    }

    #[must_use]
    pub fn details(&self) -> &TypeDetails {
        &self.details
    }

    /// Direct children in order: element, struct fields, or key then value.
    #[must_use]
    pub fn children(&self) -> Vec<&Self> {
        match self.details() {
            TypeDetails::Primitive(_) | TypeDetails::Decimal(_) | TypeDetails::Enum(_) => {
                Vec::new()
            }
            TypeDetails::List(list) => vec![list.child()],
            TypeDetails::Array(array) => vec![array.child()],
            TypeDetails::Struct(record) => record.fields().iter().map(StructField::info).collect(),
            TypeDetails::Map(map) => vec![map.key(), map.value()],
        }
    }

    /// Return whether the descriptor references child descriptors.
    #[must_use]
    pub fn is_nested(&self) -> bool {
        matches!(
            self.details(),
            TypeDetails::List(_) | TypeDetails::Array(_) | TypeDetails::Struct(_) | TypeDetails::Map(_)
        )
    }

    /// Height of the descriptor tree; leaves count as 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 1)];

        while let Some((info, level)) = pending.pop() {
            deepest = deepest.max(level);
            pending.extend(info.children().into_iter().map(|child| (child, level + 1)));
        }

        deepest
    }

    /// Return whether both handles point at the same allocation.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.details, &other.details)
    }

    #[must_use]
    pub fn as_decimal(&self) -> Option<&DecimalDetails> {
        match self.details() {
            TypeDetails::Decimal(details) => Some(details),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_enum(&self) -> Option<&EnumDetails> {
        match self.details() {
            TypeDetails::Enum(details) => Some(details),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&ListDetails> {
        match self.details() {
            TypeDetails::List(details) => Some(details),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&ArrayDetails> {
        match self.details() {
            TypeDetails::Array(details) => Some(details),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_struct(&self) -> Option<&StructDetails> {
        match self.details() {
            TypeDetails::Struct(details) => Some(details),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_map(&self) -> Option<&MapDetails> {
        match self.details() {
            TypeDetails::Map(details) => Some(details),
            _ => None,
        }
    }
}

impl PartialEq for TypeInfo {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];

        while let Some((a, b)) = pending.pop() {
            if a.ptr_eq(b) {
                continue;
            }
            if !a.details.shallow_eq(&b.details) {
                return false;
            }
            pending.extend(a.children().into_iter().zip(b.children()));
        }

        true
    }
}

impl Eq for TypeInfo {}

impl Hash for TypeInfo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut pending = vec![self];

        while let Some(info) = pending.pop() {
            info.details.hash_shallow(state);
            pending.extend(info.children().into_iter().rev());
        }
    }
}

impl fmt::Debug for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeInfo")
            .field(&format_args!("{self}"))
            .finish()
    }
}

impl Drop for TypeInfo {
    fn drop(&mut self) {
        // unlink uniquely owned children one level at a time
        let Some(details) = Arc::get_mut(&mut self.details) else {
            return;
        };
        let mut pending = details.take_children();

        while let Some(mut child) = pending.pop() {
            if let Some(details) = Arc::get_mut(&mut child.details) {
                pending.extend(details.take_children());
            }
        }
    }
}

impl Serialize for TypeInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RawTypeInfo::try_from(self)
            .map_err(S::Error::custom)?
            .serialize(serializer)
    }
}

// Reject empty and repeated names, keeping input order.
fn validate_names<S: AsRef<str>>(
    names: &[S],
    context: NameContext,
) -> Result<Vec<String>, TypeInfoError> {
    let mut seen: BTreeMap<&str, usize> = BTreeMap::new();

    for (index, name) in names.iter().enumerate() {
        let name = name.as_ref();

        if name.is_empty() {
            log::debug!("rejected empty {context} name at position {index}");
            return Err(TypeInfoError::EmptyName { context, index });
        }

        if let Some(first) = seen.insert(name, index) {
            log::debug!("rejected duplicate {context} '{name}'");
            let name = name.to_string();

            return Err(match context {
                NameContext::EnumMember => TypeInfoError::DuplicateEnumMember {
                    name,
                    first,
                    second: index,
                },
                NameContext::StructField => TypeInfoError::DuplicateStructField {
                    name,
                    first,
                    second: index,
                },
            });
        }
    }

    Ok(names.iter().map(|name| name.as_ref().to_string()).collect())
}
