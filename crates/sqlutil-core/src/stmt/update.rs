/// An `UPDATE` of the row selected by a key column.
///
/// Parameters are bound positionally: one per entry in `columns`, followed
/// by the key value.
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    /// Target table
    pub table: String,

    /// Columns assigned, in declaration order
    pub columns: Vec<String>,

    /// Column compared against the last parameter in the `WHERE` clause
    pub key: String,
}

impl Update {
    /// Position of the key value in the parameter list.
    pub fn key_param_index(&self) -> usize {
        self.columns.len()
    }
}
