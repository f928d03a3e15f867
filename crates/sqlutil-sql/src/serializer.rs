#[macro_use]
mod fmt;
use fmt::ToSql;

mod column;

mod delim;
use delim::{comma, period};

mod params;
pub use params::Placeholder;

mod statement;

use sqlutil_core::stmt::Statement;

/// Serialize a statement to a PostgreSQL string.
///
/// Placeholders are written as `$1, $2, ...` in the order the statement
/// binds its parameters. Identifiers and expressions are written verbatim.
#[derive(Debug, Default)]
pub struct Serializer {
    _priv: (),
}

struct Formatter<'a> {
    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Number of placeholders written so far
    params: usize,
}

impl Serializer {
    pub fn postgresql() -> Serializer {
        Serializer { _priv: () }
    }

    /// Renders `stmt`. No trailing semicolon is written so callers can embed
    /// the text or append to it.
    pub fn serialize(&self, stmt: &Statement) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            dst: &mut ret,
            params: 0,
        };

        stmt.to_sql(&mut fmt);

        debug_assert_eq!(
            fmt.params,
            stmt.param_count(),
            "placeholder count does not match statement"
        );

        ret
    }
}

impl Formatter<'_> {
    fn placeholder(&mut self) -> Placeholder {
        self.params += 1;
        Placeholder(self.params)
    }
}
