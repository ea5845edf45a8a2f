use proc_macro2::TokenStream;
use quote::quote;

pub mod attributes;
pub mod naming;

/// Path of the runtime crate as seen from generated code
pub fn runtime_path() -> TokenStream {
    quote!(::oversize_architecture)
}
