use super::{period, Formatter, ToSql};

use sqlutil_core::stmt::Projection;

/// A projection item together with the table it is qualified by.
pub(super) struct Qualified<'a> {
    pub(super) table: &'a str,
    pub(super) projection: &'a Projection,
}

impl ToSql for Qualified<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self.projection {
            Projection::Column { name } => {
                fmt!(f, period([self.table, name.as_str()]));
            }
            Projection::Expr { expr, name } => {
                fmt!(f, expr " AS " name);
            }
        }
    }
}

/// `column = <placeholder>`
pub(super) struct Assign<'a>(pub(super) &'a str);

impl ToSql for Assign<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let placeholder = f.placeholder();
        fmt!(f, self.0 " = " placeholder);
    }
}

/// `column = EXCLUDED.column`
pub(super) struct Excluded<'a>(pub(super) &'a str);

impl ToSql for Excluded<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, self.0 " = " period(["EXCLUDED", self.0]));
    }
}

/// The next positional parameter.
pub(super) struct Param;

impl ToSql for Param {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let placeholder = f.placeholder();
        placeholder.to_sql(f);
    }
}
