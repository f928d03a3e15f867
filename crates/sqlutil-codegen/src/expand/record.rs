use super::Expand;
use crate::schema::Field;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_record_impl(&self) -> TokenStream {
        let sqlutil = &self.sqlutil;
        let ident = &self.model.ident;
        let field_defs = self.model.fields.iter().map(|field| self.expand_field_def(field));
        let field_arms = self
            .model
            .fields
            .iter()
            .filter_map(|field| self.expand_field_arm(field));
        let selector = self.expand_selector();

        quote! {
            impl #sqlutil::Record for #ident {
                fn shape() -> #sqlutil::Shape {
                    #sqlutil::Shape {
                        fields: vec![ #( #field_defs, )* ],
                    }
                }

                #selector

                fn field(&self, index: usize) -> #sqlutil::Value {
                    match index {
                        #( #field_arms )*
                        _ => #sqlutil::Value::Null,
                    }
                }
            }
        }
    }

    fn expand_field_def(&self, field: &Field) -> TokenStream {
        let sqlutil = &self.sqlutil;
        let name = field.ident.to_string();

        let Some(column) = &field.column else {
            return quote! {
                #sqlutil::FieldDef {
                    name: #name,
                    column: None,
                    expression: None,
                    ty: None,
                    nullable: false,
                }
            };
        };

        let ty = &field.ty;
        let column_name = &column.name;
        let expression = match &column.expr {
            Some(expr) => quote!(Some(#expr)),
            None => quote!(None),
        };

        quote! {
            #sqlutil::FieldDef {
                name: #name,
                column: Some(#column_name),
                expression: #expression,
                ty: Some(<#ty as #sqlutil::Primitive>::TYPE),
                nullable: <#ty as #sqlutil::Primitive>::NULLABLE,
            }
        }
    }

    /// Unannotated fields fall through to `Value::Null`.
    fn expand_field_arm(&self, field: &Field) -> Option<TokenStream> {
        field.column.as_ref()?;

        let sqlutil = &self.sqlutil;
        let index = field.index;
        let ident = &field.ident;
        let ty = &field.ty;

        Some(quote! {
            #index => <#ty as #sqlutil::Primitive>::to_value(&self.#ident),
        })
    }

    fn expand_selector(&self) -> TokenStream {
        let sqlutil = &self.sqlutil;

        if self.model.attr.selector {
            return quote! {
                fn selector() -> Option<#sqlutil::SelectorFn> {
                    Some(<Self as #sqlutil::Selector>::select_statement as #sqlutil::SelectorFn)
                }
            };
        }

        // Uses the type's `Selector` impl if one exists, `None` otherwise.
        quote! {
            fn selector() -> Option<#sqlutil::SelectorFn> {
                use #sqlutil::{HasSelector as _, NoSelector as _};
                (&&#sqlutil::Detect::<Self>::new()).detect_selector()
            }
        }
    }
}
