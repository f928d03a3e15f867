use super::{Column, Diagnostics};

#[derive(Debug)]
pub(crate) struct Field {
    /// Declaration position of the field
    pub(crate) index: usize,

    /// Field name
    pub(crate) ident: syn::Ident,

    /// Field type
    pub(crate) ty: syn::Type,

    /// Column mapping; `None` for fields that are not persisted
    pub(crate) column: Option<Column>,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field, index: usize) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "`Record` fields must be named"));
        };

        let mut diag = Diagnostics::default();
        let mut column = None;

        for attr in &field.attrs {
            if !attr.path().is_ident("column") {
                continue;
            }

            if column.is_some() {
                diag.push(syn::Error::new_spanned(
                    attr,
                    "duplicate #[column] attribute",
                ));
                continue;
            }

            column = diag.take(Column::from_ast(attr));
        }

        diag.finish()?;

        Ok(Field {
            index,
            ident: ident.clone(),
            ty: field.ty.clone(),
            column,
        })
    }
}
