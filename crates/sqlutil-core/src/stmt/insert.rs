use super::Type;

/// An `INSERT` of a single row.
///
/// Parameters are bound positionally, one per entry in `columns`.
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    /// Target table
    pub table: String,

    /// Columns written, in declaration order
    pub columns: Vec<String>,

    /// Optional `ON CONFLICT ... DO UPDATE` clause
    pub on_conflict: Option<OnConflict>,

    /// Optional `RETURNING` clause
    pub returning: Option<Returning>,
}

/// `ON CONFLICT (target) DO UPDATE SET col = EXCLUDED.col, ...`
#[derive(Debug, Clone, PartialEq)]
pub struct OnConflict {
    /// Column whose unique constraint triggers the update
    pub target: String,

    /// Columns overwritten from the proposed row
    pub update: Vec<String>,
}

/// `RETURNING column`, with the type the read-back value must have.
#[derive(Debug, Clone, PartialEq)]
pub struct Returning {
    pub column: String,
    pub ty: Type,
}

impl Insert {
    /// Position of `column` in the parameter list.
    pub fn param_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }
}
