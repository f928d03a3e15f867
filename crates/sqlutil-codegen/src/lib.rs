mod expand;
mod schema;

use proc_macro2::TokenStream;

/// Expands `#[derive(Record)]` input into a `Record` implementation.
pub fn generate(input: TokenStream) -> syn::Result<TokenStream> {
    let item: syn::DeriveInput = syn::parse2(input)?;
    let model = schema::Model::from_ast(&item)?;

    Ok(expand::record(&model))
}
