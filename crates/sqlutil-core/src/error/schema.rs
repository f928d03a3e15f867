use super::Error;

/// Error when a record description is invalid.
///
/// This occurs when:
/// - A record declares no persisted columns
/// - A field carries an expression without a column name
/// - Two fields map to the same column
/// - A builder names a column (id, conflict, key) the record does not declare as writable
/// - A statement is invoked with an instance of a different type than it was prepared for
///
/// These errors surface at registration or statement preparation and are never retried.
#[derive(Debug)]
pub(super) struct SchemaError {
    message: Box<str>,
}

impl std::error::Error for SchemaError {}

impl core::fmt::Display for SchemaError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid schema: {}", self.message)
    }
}

impl Error {
    /// Creates a schema error.
    pub fn schema(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Schema(SchemaError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a schema error.
    pub fn is_schema(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Schema(_))
    }
}
