use super::Error;
use crate::stmt::Type;

/// Error when a value assigned to a field is not of the field's declared type.
#[derive(Debug)]
pub(super) struct InvalidFieldValueError {
    field: Box<str>,
    expected: Type,
}

impl std::error::Error for InvalidFieldValueError {}

impl core::fmt::Display for InvalidFieldValueError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "received wrong value type for field {}, expected {:?}",
            self.field, self.expected
        )
    }
}

impl Error {
    /// Creates an invalid field value error naming the field and the type it expects.
    pub fn invalid_field_value(field: impl Into<String>, expected: Type) -> Error {
        Error::from(super::ErrorKind::InvalidFieldValue(InvalidFieldValueError {
            field: field.into().into(),
            expected,
        }))
    }

    /// Returns `true` if this error is an invalid field value error.
    pub fn is_invalid_field_value(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidFieldValue(_))
    }
}
