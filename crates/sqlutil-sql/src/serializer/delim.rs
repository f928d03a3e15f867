use super::{Formatter, ToSql};

/// Items written one after another with `sep` between each pair.
pub(super) struct Delimited<L> {
    items: L,
    sep: &'static str,
}

/// `a, b, c`
pub(super) fn comma<L>(items: L) -> Delimited<L> {
    Delimited { items, sep: ", " }
}

/// `schema.table.column`
pub(super) fn period<L>(items: L) -> Delimited<L> {
    Delimited { items, sep: "." }
}

impl<L> ToSql for Delimited<L>
where
    L: IntoIterator,
    L::Item: ToSql,
{
    fn to_sql(self, f: &mut Formatter<'_>) {
        let mut items = self.items.into_iter();

        if let Some(first) = items.next() {
            first.to_sql(f);
        }

        for item in items {
            fmt!(f, self.sep item);
        }
    }
}
