/// A `SELECT` over a single table.
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    /// Table listed in the `FROM` clause
    pub table: String,

    /// Projected columns, in declaration order
    pub projection: Vec<Projection>,

    /// Literal SQL appended after the `FROM` clause (`WHERE ...`, `ORDER BY ...`)
    pub remainder: Option<String>,
}

/// One item of a `SELECT` projection list.
#[derive(Debug, Clone, PartialEq)]
pub enum Projection {
    /// A plain column, qualified by the table: `table.name`
    Column { name: String },

    /// A computed column: `expr AS name`
    Expr { expr: String, name: String },
}
