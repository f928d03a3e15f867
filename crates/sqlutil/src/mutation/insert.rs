use super::{MutationBuilder, Prepared, StatementFn};
use crate::{
    record::{AnyRecord, AsRecord},
    Executor, Identifier, Result,
};

use async_trait::async_trait;
use sqlutil_core::stmt;
use std::sync::Arc;

/// `INSERT` of every writable column. The key is taken from the instance.
#[derive(Debug)]
pub struct Insert {
    prepared: Prepared,

    /// Position of the id value in the parameter list
    id_param: usize,
}

impl MutationBuilder {
    /// Prepares an `INSERT` of every writable column.
    ///
    /// The returned key is the instance's own id field; nothing is read
    /// back from the database.
    pub fn insert(&self, exec: Arc<dyn Executor>) -> Result<Insert> {
        self.writable(&self.id_column, "id")?;

        let (columns, fields): (Vec<_>, Vec<_>) = self
            .entry
            .writable_columns()
            .map(|column| (column.name.clone(), column.field))
            .unzip();

        let stmt = stmt::Insert {
            table: self.table.clone(),
            columns,
            on_conflict: None,
            returning: None,
        };

        // Checked writable above, so the id is among the columns.
        let id_param = stmt.param_index(&self.id_column).unwrap_or_default();

        Ok(Insert {
            prepared: self.prepare(exec, stmt, fields),
            id_param,
        })
    }
}

impl Insert {
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
        self.prepared.execute(&params).await?;
        Ok(Identifier::Supplied(params.swap_remove(self.id_param)))
    }
}

#[async_trait]
impl StatementFn for Insert {
    async fn call(&self, record: &dyn AnyRecord) -> Result<Identifier> {
        self.run(record).await
    }

    fn sql(&self) -> &str {
        Insert::sql(self)
    }
}
