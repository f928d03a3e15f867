//! Prepared insert, upsert and update statements.
//!
//! A [`MutationBuilder`] resolves the record's columns once and renders the
//! statement text when a terminal method is called. The returned statement
//! only binds the instance's current field values and runs.

mod insert;
pub use insert::Insert;

mod insert_generated;
pub use insert_generated::InsertGenerated;

mod update;
pub use update::Update;

mod upsert;
pub use upsert::Upsert;

use crate::{
    record::{AnyRecord, AsRecord},
    Column, Error, Executor, Identifier, Operation, Registry, Result, Type, TypeEntry, Value,
    ValueRecord,
};

use async_trait::async_trait;
use sqlutil_core::stmt::Statement;
use sqlutil_sql::Serializer;
use std::sync::Arc;

/// Column used as the row identifier unless [`MutationBuilder::id_column`]
/// says otherwise.
pub const DEFAULT_ID_COLUMN: &str = "id";

/// A prepared statement that writes one instance and returns its key.
#[async_trait]
pub trait StatementFn: core::fmt::Debug + Send + Sync {
    /// Binds `record`'s field values, runs the statement and returns the
    /// written row's key.
    async fn call(&self, record: &dyn AnyRecord) -> Result<Identifier>;

    /// The rendered SQL.
    fn sql(&self) -> &str;
}

/// Prepares mutation statements for one record type and table.
#[derive(Debug, Clone)]
pub struct MutationBuilder {
    entry: Arc<TypeEntry>,
    table: String,
    id_column: String,
}

impl Registry {
    /// Starts preparing mutations of `table` for the type of `sample`.
    ///
    /// `sample` is only used for its type.
    pub fn mutation<V>(&self, sample: &V, table: impl Into<String>) -> Result<MutationBuilder>
    where
        V: AsRecord + ?Sized,
    {
        Ok(MutationBuilder {
            entry: self.lookup(sample)?,
            table: table.into(),
            id_column: DEFAULT_ID_COLUMN.to_string(),
        })
    }
}

impl MutationBuilder {
    /// Sets the column that identifies a row.
    pub fn id_column(mut self, column: impl Into<String>) -> Self {
        self.id_column = column.into();
        self
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn entry(&self) -> &Arc<TypeEntry> {
        &self.entry
    }

    /// Finds a column the statement is allowed to write.
    fn writable(&self, name: &str, role: &str) -> Result<&Column> {
        let Some(column) = self.entry.column(name) else {
            return Err(Error::schema(format!(
                "{role} column `{name}` is not declared by `{}`",
                self.entry.type_name()
            )));
        };

        if !column.is_writable() {
            return Err(Error::schema(format!(
                "{role} column `{name}` of `{}` is computed and cannot be written",
                self.entry.type_name()
            )));
        }

        Ok(column)
    }

    fn prepare(
        &self,
        exec: Arc<dyn Executor>,
        stmt: impl Into<Statement>,
        fields: Vec<usize>,
    ) -> Prepared {
        Prepared::new(self.entry.clone(), exec, stmt.into(), fields)
    }
}

/// Shape, text and parameter layout shared by every mutation.
#[derive(Debug)]
struct Prepared {
    entry: Arc<TypeEntry>,
    exec: Arc<dyn Executor>,
    stmt: Statement,
    sql: String,

    /// Declaration index of the field bound to each positional parameter
    fields: Vec<usize>,
}

impl Prepared {
    fn new(
        entry: Arc<TypeEntry>,
        exec: Arc<dyn Executor>,
        stmt: Statement,
        fields: Vec<usize>,
    ) -> Prepared {
        let sql = Serializer::postgresql().serialize(&stmt);

        tracing::debug!(
            operation = stmt.operation(),
            table = stmt.table(),
            sql = %sql,
            "prepared statement"
        );

        Prepared {
            entry,
            exec,
            stmt,
            sql,
            fields,
        }
    }

    /// Reads the parameter values from `record`.
    fn bind(&self, record: &dyn AnyRecord) -> Result<Vec<Value>> {
        let ty = record.record_type();

        if ty != self.entry.ty {
            return Err(Error::schema(format!(
                "statement prepared for `{}` cannot bind `{}`",
                self.entry.type_name(),
                ty.name()
            )));
        }

        Ok(self
            .fields
            .iter()
            .map(|&field| record.field_value(field))
            .collect())
    }

    fn operation<'a>(&'a self, params: &'a [Value]) -> Operation<'a> {
        tracing::trace!(
            operation = self.stmt.operation(),
            table = self.stmt.table(),
            params = params.len(),
            "executing statement"
        );

        Operation::new(&self.stmt, &self.sql, params)
    }

    async fn execute(&self, params: &[Value]) -> Result<u64> {
        self.exec
            .execute(self.operation(params))
            .await
            .map_err(|err| self.execution_error(err))
    }

    async fn query_row(&self, params: &[Value]) -> Result<Option<ValueRecord>> {
        self.exec
            .query_row(self.operation(params))
            .await
            .map_err(|err| self.execution_error(err))
    }

    fn execution_error(&self, err: Error) -> Error {
        err.context(Error::execution(self.stmt.operation(), self.stmt.table()))
    }

    /// Extracts the single `RETURNING` value of `row`, converted to the
    /// returned column's type.
    fn read_back(&self, row: Option<ValueRecord>) -> Result<Value> {
        let Some(returning) = self.stmt.returning() else {
            return Err(Error::scan(format!(
                "{} into `{}` has no RETURNING clause",
                self.stmt.operation(),
                self.stmt.table()
            )));
        };

        let Some(row) = row else {
            return Err(Error::scan(format!(
                "{} into `{}` returned no row",
                self.stmt.operation(),
                self.stmt.table()
            )));
        };

        let mut fields = row.into_vec();

        if fields.len() != 1 {
            return Err(Error::scan(format!(
                "expected 1 returned column, got {}",
                fields.len()
            )));
        }

        conform(fields.remove(0), returning.ty, &returning.column)
    }
}

/// Converts a returned value to the declared column type. Integers may
/// come back at a different width than declared.
fn conform(value: Value, ty: Type, column: &str) -> Result<Value> {
    if value.is_a(&ty) {
        return Ok(value);
    }

    let converted = match (ty, &value) {
        (Type::I16, _) => value.as_i64().and_then(|v| i16::try_from(v).ok()).map(Value::I16),
        (Type::I32, _) => value.as_i64().and_then(|v| i32::try_from(v).ok()).map(Value::I32),
        (Type::I64, _) => value.as_i64().map(Value::I64),
        (Type::Uuid, Value::Bytes(bytes)) => uuid::Uuid::from_slice(bytes).ok().map(Value::Uuid),
        _ => None,
    };

    converted.ok_or_else(|| {
        Error::scan(format!(
            "returned `{column}` is {}, expected {ty}",
            value.type_name()
        ))
    })
}
