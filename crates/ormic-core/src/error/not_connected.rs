use super::Error;

/// Error when a storage operation is attempted before the database handler
/// has a connection.
#[derive(Debug)]
pub(super) struct NotConnectedError;

impl std::error::Error for NotConnectedError {}

impl core::fmt::Display for NotConnectedError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("this database handler isn't connected to a database")
    }
}

impl Error {
    pub fn not_connected() -> Error {
        Error::from(super::ErrorKind::NotConnected(NotConnectedError))
    }

    /// Returns `true` if this error is a not connected error.
    pub fn is_not_connected(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NotConnected(_))
    }
}
