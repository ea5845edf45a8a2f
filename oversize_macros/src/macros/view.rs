//! `#[view]` attribute macro.
//!
//! Adds the view-state and reducer storage to a view struct, typed through its module, plus a
//! matching `new(view_state, reducer)` constructor.
//!
//! ```rust,ignore
//! #[view(module = ProductEditModule)]
//! pub struct ProductEditView;
//! // pub struct ProductEditView {
//! //     pub view_state: Shared<<ProductEditModule as Module>::ViewState>,
//! //     pub reducer: Reducer<<ProductEditModule as Module>::ViewModel>,
//! // }
//! // impl View for ProductEditView { .. }
//! ```
//!
//! When `module` is missing or does not name a type the struct is emitted unchanged.

use proc_macro2::{Span, TokenStream};
use syn::{Fields, Item, Result};

use crate::errors::ExpansionError;
use crate::generators::{ViewScaffold, ViewScaffoldGenerator};
use crate::item_info::{DeclKind, Declaration};
use crate::utils::attributes::AttrArgs;

/// Implementation of the view attribute macro
pub fn view_attribute(attr: TokenStream, item: TokenStream) -> Result<TokenStream> {
    let args = AttrArgs::from_tokens(attr)?;
    let item: Item = syn::parse2(item)?;
    let (scaffold, item_struct) = scaffold(&args, &item, Span::call_site())?;
    Ok(scaffold.apply(item_struct.clone()))
}

pub fn scaffold<'a>(
    args: &AttrArgs,
    item: &'a Item,
    span: Span,
) -> Result<(ViewScaffold, &'a syn::ItemStruct)> {
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
        ) => return Err(ExpansionError::ViewNotStruct.into_syn(span)),
    };

    let outcome = ViewScaffoldGenerator::new(item_struct, args.value("module").as_ref()).generate()?;
    if !outcome.is_skipped() && matches!(item_struct.fields, Fields::Unnamed(_)) {
        return Err(ExpansionError::ViewTupleStruct.into_syn(span));
    }
    Ok((outcome, item_struct))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::view_scaffold::SkipReason;
    use pretty_assertions::assert_eq;
    use quote::quote;
    use syn::parse_quote;

    #[test]
    fn rejects_non_structs() {
        let items: Vec<Item> = vec![
            parse_quote!(pub enum ProductEditView {}),
            parse_quote!(impl ProductEditView {}),
        ];
        for item in items {
            let err = scaffold(&AttrArgs::default(), &item, Span::call_site()).unwrap_err();
            assert_eq!(err.to_string(), "#[view] can only be applied to structs");
        }
    }

    #[test]
    fn missing_module_is_a_silent_skip() {
        let item: Item = parse_quote!(pub struct ProductEditView;);
        let (outcome, _) = scaffold(&AttrArgs::default(), &item, Span::call_site()).unwrap();
        assert!(matches!(outcome, ViewScaffold::Skipped(SkipReason::UnresolvedModule)));

        let args = AttrArgs::from_tokens(quote!(module = 3)).unwrap();
        let (outcome, _) = scaffold(&args, &item, Span::call_site()).unwrap();
        assert!(outcome.is_skipped());
    }

    #[test]
    fn tuple_struct_with_module_is_rejected() {
        let item: Item = parse_quote!(pub struct ProductEditView(u8););
        let args = AttrArgs::from_tokens(quote!(module = ProductEditModule)).unwrap();
        let err = scaffold(&args, &item, Span::call_site()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "#[view] can only be applied to structs with named fields"
        );
    }

    #[test]
    fn member_access_and_bare_module_agree() {
        let item: Item = parse_quote!(pub struct ProductEditView;);
        let render = |args: TokenStream| {
            let args = AttrArgs::from_tokens(args).unwrap();
            let (outcome, item_struct) = scaffold(&args, &item, Span::call_site()).unwrap();
            outcome.apply(item_struct.clone()).to_string()
        };
        assert_eq!(
            render(quote!(module = ProductEditModule)),
            render(quote!(module = "ProductEditModule"))
        );
    }

    #[test]
    fn fields_then_constructor() {
        let item: Item = parse_quote!(pub struct ProductEditView;);
        let args = AttrArgs::from_tokens(quote!(module = ProductEditModule)).unwrap();
        let (outcome, item_struct) = scaffold(&args, &item, Span::call_site()).unwrap();
        let file: syn::File = syn::parse2(outcome.apply(item_struct.clone())).unwrap();
        assert_eq!(file.items.len(), 3);
        let Item::Impl(ctor) = &file.items[1] else {
            panic!("expected constructor impl");
        };
        let ctor = &ctor.items[0];
        let expected: syn::ImplItem = parse_quote! {
            pub fn new(
                view_state: ::oversize_architecture::Shared<<ProductEditModule as ::oversize_architecture::Module>::ViewState>,
                reducer: ::oversize_architecture::Reducer<<ProductEditModule as ::oversize_architecture::Module>::ViewModel>
            ) -> Self {
                Self {
                    view_state,
                    reducer,
                }
            }
        };
        assert_eq!(*ctor, expected);
    }

    #[test]
    fn deterministic() {
        let item: Item = parse_quote!(pub struct ProductEditView { title: String });
        let args = AttrArgs::from_tokens(quote!(module = ProductEditModule)).unwrap();
        let run = || {
            let (outcome, item_struct) = scaffold(&args, &item, Span::call_site()).unwrap();
            outcome.apply(item_struct.clone()).to_string()
        };
        assert_eq!(run(), run());
    }
}
