use proc_macro2::TokenStream;

pub mod module;
pub mod screen;
pub mod view;
pub mod view_model;

/// Flattens an expansion result into the tokens handed back to the compiler.
///
/// On failure the diagnostic is emitted followed by the untouched item, so the declaration
/// still exists and follow-up errors stay local to the misuse.
pub fn emit(result: syn::Result<TokenStream>, original: TokenStream) -> TokenStream {
    match result {
        Ok(tokens) => tokens,
        Err(err) => {
            let mut tokens = err.to_compile_error();
            tokens.extend(original);
            tokens
        }
    }
}
