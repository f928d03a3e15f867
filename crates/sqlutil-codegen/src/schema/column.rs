/// Arguments of a `#[column(...)]` field attribute.
#[derive(Debug)]
pub(crate) struct Column {
    pub(crate) name: syn::LitStr,
    pub(crate) expr: Option<syn::LitStr>,
}

impl Column {
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<Column> {
        let args: ColumnArgs = attr.parse_args()?;

        let Some(name) = args.name else {
            let message = if args.expr.is_some() {
                "computed column requires a name: #[column(\"name\", expr = \"...\")]"
            } else {
                "expected a column name: #[column(\"name\")]"
            };
            return Err(syn::Error::new_spanned(attr, message));
        };

        if name.value().is_empty() {
            return Err(syn::Error::new_spanned(&name, "column name must not be empty"));
        }

        if let Some(expr) = &args.expr {
            if expr.value().trim().is_empty() {
                return Err(syn::Error::new_spanned(expr, "column expression must not be empty"));
            }
        }

        Ok(Column {
            name,
            expr: args.expr,
        })
    }
}

mod kw {
    syn::custom_keyword!(expr);
}

struct ColumnArgs {
    name: Option<syn::LitStr>,
    expr: Option<syn::LitStr>,
}

impl syn::parse::Parse for ColumnArgs {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let mut result = Self {
            name: None,
            expr: None,
        };

        // Allowed syntax:
        //
        // #[column("name")]
        // #[column("name", expr = "sql")]
        // #[column(expr = "sql", "name")]
        loop {
            let lookahead = input.lookahead1();

            if lookahead.peek(syn::LitStr) {
                if result.name.is_some() {
                    return Err(syn::Error::new(input.span(), "duplicate column name"));
                }
                result.name = Some(input.parse()?);
            } else if lookahead.peek(kw::expr) {
                if result.expr.is_some() {
                    return Err(syn::Error::new(input.span(), "duplicate column expression"));
                }
                let _expr_token: kw::expr = input.parse()?;
                let _eq_token: syn::Token![=] = input.parse()?;
                result.expr = Some(input.parse()?);
            } else {
                return Err(lookahead.error());
            }

            if input.is_empty() {
                break;
            }
            let _comma_token: syn::Token![,] = input.parse()?;
        }

        Ok(result)
    }
}
