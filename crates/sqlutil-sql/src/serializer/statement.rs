use super::{
    column::{Assign, Excluded, Param, Qualified},
    comma, Formatter, ToSql,
};

use sqlutil_core::stmt::{Insert, OnConflict, Returning, Select, Statement, Update};

impl ToSql for &Statement {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            Statement::Select(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &Select {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table = self.table.as_str();
        let projection = self
            .projection
            .iter()
            .map(|projection| Qualified { table, projection });

        if self.projection.is_empty() {
            // PostgreSQL accepts an empty target list.
            fmt!(f, "SELECT FROM " table);
        } else {
            fmt!(f, "SELECT " comma(projection) " FROM " table);
        }

        if let Some(remainder) = &self.remainder {
            fmt!(f, " " remainder);
        }
    }
}

impl ToSql for &Insert {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table = &self.table;
        let columns = self.columns.iter();
        let values = self.columns.iter().map(|_| Param);

        fmt!(
            f, "INSERT INTO " table " (" comma(columns) ") VALUES (" comma(values) ")"
            self.on_conflict.as_ref() self.returning.as_ref()
        );
    }
}

impl ToSql for &OnConflict {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let target = &self.target;
        let update = self.update.iter().map(|column| Excluded(column));

        fmt!(f, " ON CONFLICT (" target ") DO UPDATE SET " comma(update));
    }
}

impl ToSql for &Returning {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let column = &self.column;
        fmt!(f, " RETURNING " column);
    }
}

impl ToSql for &Update {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table = &self.table;
        let assignments = self.columns.iter().map(|column| Assign(column));
        let key = &self.key;

        fmt!(f, "UPDATE " table " SET " comma(assignments) " WHERE " key " = " Param);
    }
}
