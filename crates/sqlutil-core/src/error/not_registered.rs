use super::Error;

/// Error when a type is used before it was registered.
#[derive(Debug)]
pub(super) struct NotRegisteredError {
    type_name: Box<str>,
}

impl std::error::Error for NotRegisteredError {}

impl core::fmt::Display for NotRegisteredError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "type `{}` is not registered", self.type_name)
    }
}

impl Error {
    /// Creates an error for a lookup of the unregistered type `type_name`.
    pub fn not_registered(type_name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::NotRegistered(NotRegisteredError {
            type_name: type_name.into().into(),
        }))
    }

    /// Returns `true` if this error is a not-registered error.
    pub fn is_not_registered(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NotRegistered(_))
    }
}
