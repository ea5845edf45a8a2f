//! `#[module]` attribute macro.
//!
//! Binds the five collaborating types of a screen together by implementing `Module` for an
//! (uninhabited) enum. Type names are derived from a prefix: the `prefix = ".."` argument when
//! given, otherwise the enum name minus a trailing `Module`.
//!
//! ```rust,ignore
//! #[module]
//! pub enum ProductEditModule {}
//! // impl Module for ProductEditModule {
//! //     type Input = ProductEditInput;
//! //     type Output = ProductEditOutput;
//! //     type ViewState = ProductEditViewState;
//! //     type ViewModel = ProductEditViewModel;
//! //     type ViewScene = ProductEditView;
//! // }
//! ```

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Item, Result};

use crate::errors::ExpansionError;
use crate::generators::ModuleAliasGenerator;
use crate::item_info::{DeclKind, Declaration};
use crate::utils::attributes::{ArgValue, AttrArgs};
use crate::utils::naming::module_prefix;

/// Implementation of the module attribute macro
pub fn module_attribute(attr: TokenStream, item: TokenStream) -> Result<TokenStream> {
    let args = AttrArgs::from_tokens(attr)?;
    let item: Item = syn::parse2(item)?;
    expand(&args, &item, Span::call_site())
}

/// Explicit `prefix = "..."`; any other value falls back to the enum name
pub fn explicit_prefix(args: &AttrArgs) -> Option<String> {
    match args.value("prefix")? {
        ArgValue::Str(prefix) => Some(prefix),
        ArgValue::Type(_) | ArgValue::Unrecognized => None,
    }
}

pub fn expand(args: &AttrArgs, item: &Item, span: Span) -> Result<TokenStream> {
    let decl = Declaration::new(item);
    let item_enum = match (decl.kind, decl.as_enum()) {
        (DeclKind::Enum, Some(item_enum)) => item_enum,
        (
            DeclKind::Enum
            | DeclKind::Impl
            | DeclKind::TraitImpl
            | DeclKind::Struct
            | DeclKind::Other,
            _,
        ) => return Err(ExpansionError::ModuleNotEnum.into_syn(span)),
    };

    let enum_name = item_enum.ident.to_string();
    let prefix = explicit_prefix(args).unwrap_or_else(|| module_prefix(&enum_name).to_owned());
    let module_impl = ModuleAliasGenerator::new(item_enum, &prefix, span).generate()?;

    Ok(quote! {
        #item_enum
        #module_impl
    })
}
