use super::{Error, ErrorKind};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failure reported by an [`Executor`](crate::Executor) implementation:
/// a constraint violation, a lost connection, a rejected parameter.
#[derive(Debug)]
pub(super) struct DriverError {
    cause: BoxError,
}

impl DriverError {
    /// The driver's error followed by each of its sources.
    fn causes(&self) -> impl Iterator<Item = &(dyn std::error::Error + 'static)> {
        let first: &(dyn std::error::Error + 'static) = self.cause.as_ref();
        std::iter::successors(Some(first), |err| err.source())
    }
}

impl std::error::Error for DriverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.cause.as_ref())
    }
}

impl core::fmt::Display for DriverError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        for (i, err) in self.causes().enumerate() {
            if i > 0 {
                f.write_str(": ")?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

impl Error {
    /// Wraps an error raised by an executor or its database client.
    pub fn driver(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(ErrorKind::Driver(DriverError {
            cause: Box::new(err),
        }))
    }

    pub fn is_driver(&self) -> bool {
        matches!(self.kind(), ErrorKind::Driver(_))
    }

    /// Returns the executor's own error if this is a driver error of type
    /// `T`. Only this error is inspected, not its cause; use
    /// [`Error::root`] to reach a wrapped driver error.
    pub fn driver_error<T>(&self) -> Option<&T>
    where
        T: std::error::Error + 'static,
    {
        match self.kind() {
            ErrorKind::Driver(err) => err.cause.downcast_ref(),
            _ => None,
        }
    }
}
