use super::Error;

/// Error when the executor fails to run a generated statement.
///
/// The executor's own error is kept as the cause, so the rendered message
/// reads `insert into `items` failed: <driver message>`.
#[derive(Debug)]
pub(super) struct ExecutionError {
    operation: &'static str,
    table: Box<str>,
}

impl std::error::Error for ExecutionError {}

impl core::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let preposition = match self.operation {
            "update" => "of",
            "select" => "from",
            _ => "into",
        };
        write!(
            f,
            "{} {} `{}` failed",
            self.operation, preposition, self.table
        )
    }
}

impl Error {
    /// Creates an execution error for `operation` against `table`.
    ///
    /// Attach it to the executor's error with [`Error::context`].
    pub fn execution(operation: &'static str, table: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Execution(ExecutionError {
            operation,
            table: table.into().into(),
        }))
    }

    /// Returns `true` if this error is an execution error.
    pub fn is_execution(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Execution(_))
    }
}
