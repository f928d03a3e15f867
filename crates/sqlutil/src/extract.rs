use crate::{Column, Error, Result, Shape};

use indexmap::IndexSet;

/// Derives the column list of a record from its shape.
///
/// Fields without a column name are skipped. The result keeps declaration
/// order, and calling it twice on the same shape yields the same columns.
pub fn extract(type_name: &str, shape: &Shape) -> Result<Vec<Column>> {
    if shape.fields.is_empty() {
        return Err(Error::schema(format!(
            "`{type_name}` is not a record with named fields"
        )));
    }

    let mut columns = Vec::new();
    let mut seen = IndexSet::new();

    for (index, field) in shape.fields.iter().enumerate() {
        let Some(name) = field.column else {
            if field.expression.is_some() {
                return Err(Error::schema(format!(
                    "`{type_name}::{}` has an expression but no column name",
                    field.name
                )));
            }
            continue;
        };

        if name.is_empty() {
            return Err(Error::schema(format!(
                "`{type_name}::{}` has an empty column name",
                field.name
            )));
        }

        if field.expression.is_some_and(str::is_empty) {
            return Err(Error::schema(format!(
                "`{type_name}::{}` has an empty expression",
                field.name
            )));
        }

        let Some(ty) = field.ty else {
            return Err(Error::schema(format!(
                "`{type_name}::{}` maps to column `{name}` but has no column type",
                field.name
            )));
        };

        if !seen.insert(name) {
            return Err(Error::schema(format!(
                "`{type_name}` maps more than one field to column `{name}`"
            )));
        }

        columns.push(Column {
            name: name.to_string(),
            expression: field.expression.map(str::to_string),
            field: index,
            ordinal: columns.len(),
            ty,
            nullable: field.nullable,
        });
    }

    if columns.is_empty() {
        return Err(Error::schema(format!(
            "`{type_name}` declares no columns"
        )));
    }

    Ok(columns)
}
