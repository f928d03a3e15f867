use super::{MutationBuilder, Prepared, StatementFn};
use crate::{
    record::{AnyRecord, AsRecord},
    Error, Executor, Identifier, Result,
};

use async_trait::async_trait;
use sqlutil_core::stmt;
use std::sync::Arc;

/// `UPDATE` of the row whose key column matches the instance.
#[derive(Debug)]
pub struct Update {
    prepared: Prepared,
}

impl MutationBuilder {
    /// Prepares an `UPDATE ... WHERE key = $n` assigning every other
    /// writable column.
    pub fn update(&self, exec: Arc<dyn Executor>, key: &str) -> Result<Update> {
        let key = self.writable(key, "key")?;

        let (columns, mut fields): (Vec<_>, Vec<_>) = self
            .entry
            .writable_columns()
            .filter(|column| column.name != key.name)
            .map(|column| (column.name.clone(), column.field))
            .unzip();

        if columns.is_empty() {
            return Err(Error::schema(format!(
                "`{}` has no columns to update besides `{}`",
                self.entry.type_name(),
                key.name
            )));
        }

        fields.push(key.field);

        let stmt = stmt::Update {
            table: self.table.clone(),
            columns,
            key: key.name.clone(),
        };

        Ok(Update {
            prepared: self.prepare(exec, stmt, fields),
        })
    }
}

impl Update {
    /// Writes `value` over the matching row and returns its key.
    ///
    /// Matching no row is not an error.
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
        let mut params = self.prepared.bind(record)?;
        let rows = self.prepared.execute(&params).await?;

        tracing::trace!(rows, table = self.prepared.stmt.table(), "updated rows");

        // The key is always bound last.
        let key = params.pop().unwrap_or_default();
        Ok(Identifier::Supplied(key))
    }
}

#[async_trait]
impl StatementFn for Update {
    async fn call(&self, record: &dyn AnyRecord) -> Result<Identifier> {
        self.run(record).await
    }

    fn sql(&self) -> &str {
        Update::sql(self)
    }
}
