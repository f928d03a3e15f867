use super::{MutationBuilder, Prepared, StatementFn};
use crate::{
    record::{AnyRecord, AsRecord},
    Error, Executor, Identifier, Result, Value,
};

use async_trait::async_trait;
use sqlutil_core::stmt::{self, Returning};
use std::sync::Arc;

/// `INSERT` that leaves the id to the database and reads it back.
#[derive(Debug)]
pub struct InsertGenerated {
    prepared: Prepared,
}

impl MutationBuilder {
    /// Prepares an `INSERT` of every writable column except the id, which
    /// the database generates and returns.
    ///
    /// The id column must hold an integer.
    pub fn insert_generated(&self, exec: Arc<dyn Executor>) -> Result<InsertGenerated> {
        let id = self.writable(&self.id_column, "id")?;

        if !id.ty.is_integer() {
            return Err(Error::schema(format!(
                "generated id column `{}` of `{}` must be an integer, found {}",
                id.name,
                self.entry.type_name(),
                id.ty
            )));
        }

        let (columns, fields): (Vec<_>, Vec<_>) = self
            .entry
            .writable_columns()
            .filter(|column| column.name != id.name)
            .map(|column| (column.name.clone(), column.field))
            .unzip();

        if columns.is_empty() {
            return Err(Error::schema(format!(
                "`{}` has no columns to insert besides the generated id",
                self.entry.type_name()
            )));
        }

        let stmt = stmt::Insert {
            table: self.table.clone(),
            columns,
            on_conflict: None,
            returning: Some(Returning {
                column: id.name.clone(),
                ty: stmt::Type::I64,
            }),
        };

        Ok(InsertGenerated {
            prepared: self.prepare(exec, stmt, fields),
        })
    }
}

impl InsertGenerated {
    /// Inserts `value` and returns the generated key as a
    /// [`Value::I64`]. The instance's id field is ignored.
    pub async fn exec<V>(&self, value: &V) -> Result<Identifier>
    where
        V: AsRecord + ?Sized,
    {
        self.run(value.as_record()).await
    }

    pub fn sql(&self) -> &str {
        &self.prepared.sql
    }

    async fn run(&self, record: &dyn AnyRecord) -> Result<Identifier> {
        let params = self.prepared.bind(record)?;
        let row = self.prepared.query_row(&params).await?;
        let key = self.prepared.read_back(row)?;

        debug_assert!(matches!(key, Value::I64(_)));
        Ok(Identifier::Returned(key))
    }
}

#[async_trait]
impl StatementFn for InsertGenerated {
    async fn call(&self, record: &dyn AnyRecord) -> Result<Identifier> {
        self.run(record).await
    }

    fn sql(&self) -> &str {
        InsertGenerated::sql(self)
    }
}
