use super::{Diagnostics, Field, ModelAttr};

#[derive(Debug)]
pub(crate) struct Model {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// All declared fields, persisted or not
    pub(crate) fields: Vec<Field>,

    /// Struct-level options
    pub(crate) attr: ModelAttr,
}

impl Model {
    pub(crate) fn from_ast(ast: &syn::DeriveInput) -> syn::Result<Self> {
        let syn::Data::Struct(data) = &ast.data else {
            return Err(syn::Error::new_spanned(
                &ast.ident,
                "`Record` can only be derived for structs",
            ));
        };

        let syn::Fields::Named(node) = &data.fields else {
            return Err(syn::Error::new_spanned(
                &data.fields,
                "`Record` fields must be named",
            ));
        };

        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "generic records are not supported",
            ));
        }

        let mut attr = ModelAttr::default();
        let mut fields = vec![];
        let mut diag = Diagnostics::default();

        diag.take(attr.populate_from_ast(&ast.attrs));

        for (index, node) in node.named.iter().enumerate() {
            fields.extend(diag.take(Field::from_ast(node, index)));
        }

        diag.finish()?;

        Ok(Model {
            ident: ast.ident.clone(),
            fields,
            attr,
        })
    }
}
