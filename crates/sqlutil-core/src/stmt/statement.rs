use super::{Insert, Returning, Select, Update};

/// A statement shape, computed once from a record description and rendered
/// to SQL by a serializer.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Select(Select),
    Insert(Insert),
    Update(Update),
}

impl Statement {
    /// Table the statement reads from or writes to.
    pub fn table(&self) -> &str {
        match self {
            Self::Select(stmt) => &stmt.table,
            Self::Insert(stmt) => &stmt.table,
            Self::Update(stmt) => &stmt.table,
        }
    }

    /// Short operation name, as used in error context.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::Select(_) => "select",
            Self::Insert(Insert {
                on_conflict: Some(_),
                ..
            }) => "upsert",
            Self::Insert(_) => "insert",
            Self::Update(_) => "update",
        }
    }

    /// Number of positional parameters the statement expects.
    pub fn param_count(&self) -> usize {
        match self {
            Self::Select(_) => 0,
            Self::Insert(stmt) => stmt.columns.len(),
            Self::Update(stmt) => stmt.columns.len() + 1,
        }
    }

    pub fn returning(&self) -> Option<&Returning> {
        match self {
            Self::Insert(stmt) => stmt.returning.as_ref(),
            _ => None,
        }
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Self::Select(value)
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Self::Update(value)
    }
}
