use crate::type_info::{MAX_PERSISTED_DEPTH, TypeDetails, TypeInfo, TypeInfoError};
use ducktype_primitives::TypeTag;
use serde::{Deserialize, Serialize};

///
/// RawTypeInfo
///
/// Unvalidated wire shape of a descriptor. Converting back into a
/// [`TypeInfo`] re-runs the validating constructors, so a stored payload
/// can never produce a descriptor the constructors would reject.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RawTypeInfo {
    pub tag: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub names: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Self>,
}

impl RawTypeInfo {
    fn leaf(tag: TypeTag) -> Self {
        Self {
            tag: tag.name().to_string(),
            width: None,
            scale: None,
            size: None,
            names: Vec::new(),
            children: Vec::new(),
        }
    }

    // Recursion is bounded by the depth check in `try_from`.
    fn mirror(info: &TypeInfo) -> Self {
        let mut raw = Self::leaf(info.tag());

        match info.details() {
            TypeDetails::Primitive(_) => {}
            TypeDetails::Decimal(decimal) => {
                raw.width = Some(decimal.width());
                raw.scale = Some(decimal.scale());
            }
            TypeDetails::Enum(members) => raw.names = members.names().to_vec(),
            TypeDetails::List(list) => raw.children = vec![Self::mirror(list.child())],
            TypeDetails::Array(array) => {
                raw.size = Some(array.size());
                raw.children = vec![Self::mirror(array.child())];
            }
            TypeDetails::Struct(record) => {
                raw.names = record.names().map(str::to_string).collect();
                raw.children = record
                    .fields()
                    .iter()
                    .map(|field| Self::mirror(field.info()))
                    .collect();
            }
            TypeDetails::Map(map) => {
                raw.children = vec![Self::mirror(map.key()), Self::mirror(map.value())];
            }
        }

        raw
    }

    // Reject payload fields the tag does not use.
    fn expect_shape(&self, tag: TypeTag, shape: Shape) -> Result<(), TypeInfoError> {
        let malformed = |reason: String| TypeInfoError::InvalidChildDescriptor { tag, reason };

        if !shape.width_scale && (self.width.is_some() || self.scale.is_some()) {
            return Err(malformed("unexpected width/scale".to_string()));
        }
        if !shape.size && self.size.is_some() {
            return Err(malformed("unexpected size".to_string()));
        }
        if !shape.names && !self.names.is_empty() {
            return Err(malformed(format!("unexpected {} names", self.names.len())));
        }
        if let Some(children) = shape.children
            && self.children.len() != children
        {
            return Err(malformed(format!(
                "expected {children} children, found {}",
                self.children.len()
            )));
        }

        Ok(())
    }
}

///
/// Shape
///
/// Payload fields a tag may carry; `children: None` accepts any count.
///

#[derive(Clone, Copy, Debug)]
struct Shape {
    width_scale: bool,
    size: bool,
    names: bool,
    children: Option<usize>,
}

impl Shape {
    const fn leaf() -> Self {
        Self {
            width_scale: false,
            size: false,
            names: false,
            children: Some(0),
        }
    }

    const fn nested(children: usize) -> Self {
        Self {
            children: Some(children),
            ..Self::leaf()
        }
    }
}

impl TryFrom<&TypeInfo> for RawTypeInfo {
    type Error = TypeInfoError;

    fn try_from(info: &TypeInfo) -> Result<Self, Self::Error> {
        let depth = info.depth();
        if depth > MAX_PERSISTED_DEPTH {
            log::debug!("refused to persist descriptor of depth {depth}");
            return Err(TypeInfoError::NestingTooDeep { depth });
        }

        Ok(Self::mirror(info))
    }
}

impl TryFrom<RawTypeInfo> for TypeInfo {
    type Error = TypeInfoError;

    fn try_from(raw: RawTypeInfo) -> Result<Self, Self::Error> {
        let tag = TypeTag::from_name(&raw.tag).ok_or_else(|| TypeInfoError::UnknownTag {
            name: raw.tag.clone(),
        })?;

        match tag {
            TypeTag::Decimal => {
                raw.expect_shape(
                    tag,
                    Shape {
                        width_scale: true,
                        ..Shape::leaf()
                    },
                )?;
                let (Some(width), Some(scale)) = (raw.width, raw.scale) else {
                    return Err(TypeInfoError::InvalidChildDescriptor {
                        tag,
                        reason: "missing width or scale".to_string(),
                    });
                };

                Self::decimal(width, scale)
            }
            TypeTag::Enum => {
                raw.expect_shape(
                    tag,
                    Shape {
                        names: true,
                        ..Shape::leaf()
                    },
                )?;

                Self::enumeration(raw.names.as_slice())
            }
            TypeTag::List => {
                raw.expect_shape(tag, Shape::nested(1))?;
                let [child] = into_children::<1>(raw.children)?;

                Ok(Self::list(&child))
            }
            TypeTag::Array => {
                raw.expect_shape(
                    tag,
                    Shape {
                        size: true,
                        ..Shape::nested(1)
                    },
                )?;
                let size = raw.size.ok_or_else(|| TypeInfoError::InvalidChildDescriptor {
                    tag,
                    reason: "missing size".to_string(),
                })?;
                let [child] = into_children::<1>(raw.children)?;

                Self::array(&child, size)
            }
            TypeTag::Struct => {
                raw.expect_shape(
                    tag,
                    Shape {
                        names: true,
                        children: None,
                        ..Shape::leaf()
                    },
                )?;
                let children = raw
                    .children
                    .into_iter()
                    .map(Self::try_from)
                    .collect::<Result<Vec<_>, _>>()?;

                Self::structure(&children, raw.names.as_slice())
            }
            TypeTag::Map => {
                raw.expect_shape(tag, Shape::nested(2))?;
                let [key, value] = into_children::<2>(raw.children)?;

                Ok(Self::map(&key, &value))
            }
            _ => {
                raw.expect_shape(tag, Shape::leaf())?;

                Self::primitive(tag)
            }
        }
    }
}

// Convert an arity-checked child list into validated descriptors.
fn into_children<const N: usize>(raw: Vec<RawTypeInfo>) -> Result<[TypeInfo; N], TypeInfoError> {
    let children = raw
        .into_iter()
        .map(TypeInfo::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    let found = children.len();

    children
        .try_into()
        .map_err(|_| TypeInfoError::InvalidChildDescriptor {
            tag: TypeTag::Invalid,
            reason: format!("expected {N} children, found {found}"),
        })
}
