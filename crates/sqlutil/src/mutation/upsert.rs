use super::{MutationBuilder, Prepared, StatementFn};
use crate::{
    record::{AnyRecord, AsRecord},
    Executor, Identifier, Result,
};

use async_trait::async_trait;
use sqlutil_core::stmt::{self, OnConflict, Returning};
use std::sync::Arc;

/// `INSERT ... ON CONFLICT DO UPDATE` that returns the key of the row it
/// inserted or updated.
#[derive(Debug)]
pub struct Upsert {
    prepared: Prepared,
}

impl MutationBuilder {
    /// Prepares an upsert keyed on the unique column `conflict`.
    ///
    /// On conflict every writable column other than `conflict` and the id
    /// is overwritten with the proposed value. The existing row keeps its
    /// key, which is read back, so an update returns that row's id rather
    /// than the instance's.
    pub fn upsert(&self, exec: Arc<dyn Executor>, conflict: &str) -> Result<Upsert> {
        let id = self.writable(&self.id_column, "id")?;
        let target = self.writable(conflict, "conflict")?;

        let (columns, fields): (Vec<_>, Vec<_>) = self
            .entry
            .writable_columns()
            .map(|column| (column.name.clone(), column.field))
            .unzip();

        let mut update: Vec<_> = columns
            .iter()
            .filter(|column| **column != target.name && **column != id.name)
            .cloned()
            .collect();

        // `DO UPDATE SET` needs at least one assignment, or no row is
        // returned on conflict.
        if update.is_empty() {
            update.push(target.name.clone());
        }

        let stmt = stmt::Insert {
            table: self.table.clone(),
            columns,
            on_conflict: Some(OnConflict {
                target: target.name.clone(),
                update,
            }),
            returning: Some(Returning {
                column: id.name.clone(),
                ty: id.ty,
            }),
        };

        Ok(Upsert {
            prepared: self.prepare(exec, stmt, fields),
        })
    }
}

impl Upsert {
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
        Ok(Identifier::Returned(self.prepared.read_back(row)?))
    }
}

#[async_trait]
impl StatementFn for Upsert {
    async fn call(&self, record: &dyn AnyRecord) -> Result<Identifier> {
        self.run(record).await
    }

    fn sql(&self) -> &str {
        Upsert::sql(self)
    }
}
