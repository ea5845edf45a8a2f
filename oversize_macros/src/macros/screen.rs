//! `#[screen]` attribute macro.
//!
//! Generates static factories that assemble a screen from its view-state, view-model and
//! reducer. Positional arguments choose which factories exist:
//!
//! | arguments       | factories                     |
//! |-----------------|-------------------------------|
//! | none, unknown   | `build()`                     |
//! | `id`            | `build_with_id(id)`           |
//! | `default, id`   | `build()`, `build_with_id(id)`|

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Item, Result};

use crate::errors::ExpansionError;
use crate::generators::{BuildVariant, ScreenBuilderGenerator};
use crate::item_info::{DeclKind, Declaration};
use crate::utils::attributes::AttrArgs;

/// Implementation of the screen attribute macro
pub fn screen_attribute(attr: TokenStream, item: TokenStream) -> Result<TokenStream> {
    let args = AttrArgs::from_tokens(attr)?;
    let item: Item = syn::parse2(item)?;
    expand(&args, &item, Span::call_site())
}

pub fn expand(args: &AttrArgs, item: &Item, span: Span) -> Result<TokenStream> {
    let decl = Declaration::new(item);
    let item_struct = match (decl.kind, decl.as_struct()) {
        (DeclKind::Struct, Some(item_struct)) => item_struct,
        (
            DeclKind::Struct
            | DeclKind::Impl
            | DeclKind::TraitImpl
            | DeclKind::Enum
            | DeclKind::Other,
            _,
        ) => return Err(ExpansionError::ScreenNotStruct.into_syn(span)),
    };

    let factories = ScreenBuilderGenerator::new(item_struct, BuildVariant::resolve(args)).generate()?;
    Ok(quote! {
        #item_struct
        #factories
    })
}
