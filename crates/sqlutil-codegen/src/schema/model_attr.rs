#[derive(Debug, Default)]
pub(crate) struct ModelAttr {
    /// The type implements `Selector` and generates its own `SELECT`
    pub(crate) selector: bool,
}

impl ModelAttr {
    pub(super) fn populate_from_ast(&mut self, attrs: &[syn::Attribute]) -> syn::Result<()> {
        for attr in attrs {
            if !attr.path().is_ident("record") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("selector") {
                    if self.selector {
                        return Err(meta.error("duplicate `selector` option"));
                    }
                    self.selector = true;
                    Ok(())
                } else {
                    Err(meta.error("unsupported record option; expected `selector`"))
                }
            })?;
        }

        Ok(())
    }
}
