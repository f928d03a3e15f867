use crate::{record::AsRecord, Registry, Result, TypeEntry};

use indexmap::IndexSet;
use sqlutil_core::stmt::Statement;
use sqlutil_sql::Serializer;

/// Column names left out of a generated `SELECT` projection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Omit {
    columns: IndexSet<String>,
}

impl Omit {
    /// An empty set: every column is projected.
    pub fn none() -> Omit {
        Omit::default()
    }

    pub fn insert(&mut self, column: impl Into<String>) -> bool {
        self.columns.insert(column.into())
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.contains(column)
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Column names in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Omit {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Omit {
            columns: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for Omit {
    fn from(columns: [S; N]) -> Self {
        columns.into_iter().collect()
    }
}

/// Generates the `SELECT` statement for a registered type.
///
/// A type with a selector gets exactly what the selector returns, errors
/// included. Otherwise every column not in `omit` is projected, plain
/// columns as `table.name` and computed ones as `expression AS name`, and a
/// non-empty `remainder` is appended after a single space. `remainder` is
/// trusted SQL and is not inspected.
pub fn generate(entry: &TypeEntry, omit: &Omit, remainder: &str) -> Result<String> {
    if let Some(selector) = entry.selector() {
        return selector(omit, remainder);
    }

    let stmt = Statement::Select(entry.select_stmt(omit, remainder));
    Ok(Serializer::postgresql().serialize(&stmt))
}

/// Generates the `SELECT` statement for the type of `value`, using the
/// process-wide registry.
pub fn select<V>(value: &V, omit: &Omit, remainder: &str) -> Result<String>
where
    V: AsRecord + ?Sized,
{
    Registry::global().select(value, omit, remainder)
}

impl Registry {
    /// Generates the `SELECT` statement for the type of `value`.
    pub fn select<V>(&self, value: &V, omit: &Omit, remainder: &str) -> Result<String>
    where
        V: AsRecord + ?Sized,
    {
        let entry = self.lookup(value)?;
        generate(&entry, omit, remainder)
    }
}
