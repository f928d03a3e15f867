mod record;

use crate::schema::Model;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The record being expanded
    model: &'a Model,

    /// Path prefix for sqlutil types
    sqlutil: TokenStream,
}

pub(super) fn record(model: &Model) -> TokenStream {
    let expand = Expand {
        model,
        sqlutil: quote!(_sqlutil::codegen_support),
    };

    wrap_in_const(expand.expand_record_impl())
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use sqlutil as _sqlutil;
            #code
        };
    }
}
