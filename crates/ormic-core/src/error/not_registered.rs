use super::Error;

/// Error when a model operation is invoked before the model was added to a
/// database handler.
#[derive(Debug)]
pub(super) struct NotRegisteredError {
    model: Box<str>,
}

impl std::error::Error for NotRegisteredError {}

impl core::fmt::Display for NotRegisteredError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "model `{}` has not been added to any database",
            self.model
        )
    }
}

impl Error {
    pub fn not_registered(model: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::NotRegistered(NotRegisteredError {
            model: model.into().into(),
        }))
    }

    /// Returns `true` if this error is a not registered error.
    pub fn is_not_registered(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NotRegistered(_))
    }
}
