use crate::{record::RecordType, SelectorFn, Type};

use sqlutil_core::stmt::{self, Projection};

/// A persisted field: where its value comes from and how it is projected.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Column name
    pub name: String,

    /// SQL expression projected as `name`; such columns are read-only
    pub expression: Option<String>,

    /// Declaration position of the source field
    pub field: usize,

    /// Position among the record's columns
    pub ordinal: usize,

    /// Value type of the source field
    pub ty: Type,

    /// True when the source field is optional
    pub nullable: bool,
}

impl Column {
    /// Returns `true` if the column is written by INSERT and UPDATE.
    pub fn is_writable(&self) -> bool {
        self.expression.is_none()
    }

    pub(crate) fn projection(&self) -> Projection {
        match &self.expression {
            Some(expr) => Projection::Expr {
                expr: expr.clone(),
                name: self.name.clone(),
            },
            None => Projection::Column {
                name: self.name.clone(),
            },
        }
    }
}

/// Cached description of one registered type.
pub struct TypeEntry {
    pub(crate) ty: RecordType,
    pub(crate) table: String,
    pub(crate) columns: Vec<Column>,
    pub(crate) selector: Option<SelectorFn>,
}

impl TypeEntry {
    /// Fully qualified name of the registered type.
    pub fn type_name(&self) -> &'static str {
        self.ty.name()
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// Columns in declaration order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// Columns written by INSERT and UPDATE, in declaration order.
    pub fn writable_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|column| column.is_writable())
    }

    pub fn selector(&self) -> Option<SelectorFn> {
        self.selector
    }

    pub fn has_selector(&self) -> bool {
        self.selector.is_some()
    }

    /// Builds the generic `SELECT` shape over `table`.
    pub(crate) fn select_stmt(&self, omit: &crate::Omit, remainder: &str) -> stmt::Select {
        stmt::Select {
            table: self.table.clone(),
            projection: self
                .columns
                .iter()
                .filter(|column| !omit.contains(&column.name))
                .map(Column::projection)
                .collect(),
            remainder: (!remainder.is_empty()).then(|| remainder.to_string()),
        }
    }
}

impl core::fmt::Debug for TypeEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TypeEntry")
            .field("type_name", &self.ty.name())
            .field("table", &self.table)
            .field("columns", &self.columns)
            .field("selector", &self.selector.is_some())
            .finish()
    }
}
