use super::Error;

/// Error when a value read back from the database does not have the
/// expected shape.
///
/// This occurs when:
/// - A `RETURNING` clause yields no row
/// - The returned row has the wrong number of columns
/// - The returned value has an unexpected type, or is null
///
/// These point at a mismatch between the declared record and the table, not a transient
/// condition.
#[derive(Debug)]
pub(super) struct ScanError {
    message: Box<str>,
}

impl std::error::Error for ScanError {}

impl core::fmt::Display for ScanError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "scan failed: {}", self.message)
    }
}

impl Error {
    /// Creates a scan error.
    pub fn scan(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Scan(ScanError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a scan error.
    pub fn is_scan(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Scan(_))
    }
}
