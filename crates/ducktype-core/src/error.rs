use crate::{
    serialize::SerializeError,
    type_info::{TypeInfoError, TypeInfoErrorKind},
    value::{RenderError, RenderErrorKind},
};
use derive_more::Display;
use thiserror::Error as ThisError;

///
/// Error
///
/// Crate-level error with a stable classification.
/// Subsystem errors convert into it so callers can match on `class`
/// without knowing which layer failed.
///

#[derive(Debug, ThisError)]
#[error("{message}")]
pub struct Error {
    pub class: ErrorClass,
    pub origin: ErrorOrigin,
    pub message: String,

    /// The subsystem error this was built from, if any.
    pub detail: Option<ErrorDetail>,
}

impl Error {
    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}:{}: {}", self.origin, self.class, self.message)
    }
}

impl From<TypeInfoError> for Error {
    fn from(err: TypeInfoError) -> Self {
        let class = match &err {
            TypeInfoError::InvalidTag { tag } if !tag.is_supported() => ErrorClass::Unsupported,
            _ if err.kind() == TypeInfoErrorKind::InvalidChildDescriptor => ErrorClass::Corruption,
            TypeInfoError::NestingTooDeep { .. } => ErrorClass::Limit,
            _ => ErrorClass::InvalidArgument,
        };

        Self {
            class,
            origin: ErrorOrigin::TypeInfo,
            message: err.to_string(),
            detail: Some(ErrorDetail::TypeInfo(err)),
        }
    }
}

impl From<RenderError> for Error {
    fn from(err: RenderError) -> Self {
        let class = match err.kind() {
            RenderErrorKind::TypeMismatch
            | RenderErrorKind::StructFieldMismatch
            | RenderErrorKind::ArrayLengthMismatch => ErrorClass::TypeMismatch,
            RenderErrorKind::UnknownEnumMember | RenderErrorKind::NullMapKey => {
                ErrorClass::InvalidArgument
            }
            RenderErrorKind::ValueOutOfRange
            | RenderErrorKind::DecimalOverflow
            | RenderErrorKind::DepthLimitExceeded => ErrorClass::Limit,
        };

        Self {
            class,
            origin: ErrorOrigin::Render,
            message: err.to_string(),
            detail: Some(ErrorDetail::Render(err)),
        }
    }
}

impl From<SerializeError> for Error {
    fn from(err: SerializeError) -> Self {
        let class = match &err {
            SerializeError::Encode(_) | SerializeError::PayloadTooLarge { .. } => ErrorClass::Limit,
            SerializeError::Decode(_) => ErrorClass::Corruption,
        };

        Self {
            class,
            origin: ErrorOrigin::Serialize,
            message: err.to_string(),
            detail: Some(ErrorDetail::Serialize(err)),
        }
    }
}

///
/// ErrorDetail
///

#[derive(Debug, ThisError)]
pub enum ErrorDetail {
    #[error("{0}")]
    TypeInfo(TypeInfoError),

    #[error("{0}")]
    Render(RenderError),

    #[error("{0}")]
    Serialize(SerializeError),
}

///
/// ErrorClass
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum ErrorClass {
    #[display("invalid_argument")]
    InvalidArgument,
    #[display("type_mismatch")]
    TypeMismatch,
    #[display("unsupported")]
    Unsupported,
    #[display("corruption")]
    Corruption,
    #[display("limit")]
    Limit,
}

///
/// ErrorOrigin
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum ErrorOrigin {
    #[display("type_info")]
    TypeInfo,
    #[display("render")]
    Render,
    #[display("serialize")]
    Serialize,
}
