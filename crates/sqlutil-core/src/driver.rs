use crate::{
    async_trait,
    stmt::{Statement, Value, ValueRecord},
    Result,
};

use std::fmt::Debug;

/// The boundary between generated statements and a database connection.
///
/// Implementations run one statement per call and never retry. Pooling,
/// transactions and timeouts belong to the implementation, not to callers
/// of this trait.
#[async_trait]
pub trait Executor: Debug + Send + Sync + 'static {
    /// Executes a statement and returns the number of affected rows.
    async fn execute(&self, op: Operation<'_>) -> Result<u64>;

    /// Executes a statement and returns its first row, if any.
    async fn query_row(&self, op: Operation<'_>) -> Result<Option<ValueRecord>>;
}

/// A statement ready to run: its shape, its rendered SQL and the values
/// bound to its positional parameters.
#[derive(Debug, Clone, Copy)]
pub struct Operation<'a> {
    /// Structured statement the SQL was rendered from
    pub stmt: &'a Statement,

    /// Rendered SQL text with `$n` placeholders
    pub sql: &'a str,

    /// Parameter values, `params[0]` binds `$1`
    pub params: &'a [Value],
}

impl<'a> Operation<'a> {
    pub fn new(stmt: &'a Statement, sql: &'a str, params: &'a [Value]) -> Self {
        debug_assert_eq!(
            stmt.param_count(),
            params.len(),
            "parameter count does not match statement; sql={sql}"
        );
        Self { stmt, sql, params }
    }
}
