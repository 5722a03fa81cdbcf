use super::Error;

/// Error when a value type or storage type name has no entry in the type map.
///
/// This occurs when:
/// - A field is declared with a value type that has no storage column type
/// - A field is declared with a storage type name nothing maps to
///
/// These are raised while declaring a model, before any statement runs.
#[derive(Debug)]
pub(super) struct UnsupportedTypeError {
    name: Box<str>,
}

impl std::error::Error for UnsupportedTypeError {}

impl core::fmt::Display for UnsupportedTypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsupported type: {}", self.name)
    }
}

impl Error {
    pub fn unsupported_type(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedType(UnsupportedTypeError {
            name: name.into().into(),
        }))
    }

    /// Returns `true` if this error is an unsupported type error.
    pub fn is_unsupported_type(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedType(_))
    }
}
