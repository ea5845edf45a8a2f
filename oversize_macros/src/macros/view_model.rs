//! `#[view_model]` attribute macro.
//!
//! Applied to the inherent impl block of a view-model. Every `pub` method whose name starts
//! with `on` becomes a variant of `<Name>Action`, and a `ViewModel` impl is generated whose
//! `handle_action` forwards each variant to its handler.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[view_model(module = ProductDetailModule)]
//! impl ProductDetailViewModel {
//!     pub async fn on_appear(&self) { .. }
//!     pub async fn on_rename(&self, name: String) { .. }
//!     pub async fn on_select(&self, #[positional] id: Uuid) { .. }
//!
//!     async fn load(&self) { .. } // private, not an action
//! }
//! ```
//!
//! # Generated Items
//!
//! - `pub enum ProductDetailViewModelAction { OnAppear, OnRename { name: String }, OnSelect(Uuid) }`
//! - `impl ViewModel for ProductDetailViewModel` with the dispatching `handle_action`
//! - With `module = ..` only: the `ProductDetailViewModel` struct itself (`state`, `input`,
//!   `output`), a `new(state, input, output)` constructor at the top of the impl block and an
//!   `impl StatefulViewModel` bound to the module's types
//!
//! # Parameter Rules
//!
//! - `name: T` is a labeled payload slot
//! - `#[positional] name: T` is a positional slot bound to `name`
//! - `_: T` (or any destructuring pattern) is a positional slot bound to `value`
//! - All-positional handlers produce tuple variants; anything else a struct variant

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{ImplItem, Item, Result, visit_mut::VisitMut};

use crate::errors::ExpansionError;
use crate::generators::view_model::{
    ActionEnumGenerator, DispatchGenerator, ViewModelScaffoldGenerator,
};
use crate::item_info::{DeclKind, Declaration};
use crate::utils::attributes::AttrArgs;
use crate::utils::naming::action_enum_name;
use crate::visitors::{ActionVisitor, PositionalStripper};

/// Implementation of the view_model attribute macro
pub fn view_model_attribute(attr: TokenStream, item: TokenStream) -> Result<TokenStream> {
    let args = AttrArgs::from_tokens(attr)?;
    let item: Item = syn::parse2(item)?;
    expand(&args, &item, Span::call_site())
}

pub fn expand(args: &AttrArgs, item: &Item, span: Span) -> Result<TokenStream> {
    let decl = Declaration::new(item);
    match decl.kind {
        DeclKind::Impl => {}
        DeclKind::TraitImpl | DeclKind::Struct | DeclKind::Enum | DeclKind::Other => {
            return Err(ExpansionError::ViewModelNotImpl.into_syn(span));
        }
    }
    let Some(item_impl) = decl.as_impl() else {
        return Err(ExpansionError::ViewModelNotImpl.into_syn(span));
    };
    let name = decl.name().map_err(|e| e.into_syn(span))?;

    // 1. Discover handlers (read-only pass)
    let actions = ActionVisitor::collect(item_impl);
    let enum_name = action_enum_name(name);

    // 2. Generate the action enum and its dispatch
    let action_enum = ActionEnumGenerator::new(&enum_name, &actions).generate();
    let dispatch = DispatchGenerator::new(item_impl, &enum_name, &actions).generate();

    // 3. Rewrite the impl block: strip helper attributes, add module scaffolding
    let mut rewritten = item_impl.clone();
    PositionalStripper.visit_item_impl_mut(&mut rewritten);

    let module = args.value("module").and_then(|value| value.as_type_path());
    let (view_model_struct, stateful_impl) = match &module {
        Some(module) => {
            let scaffold = ViewModelScaffoldGenerator::new(name, module);
            let constructor: ImplItem = scaffold.generate_constructor()?;
            rewritten.items.insert(0, constructor);
            (scaffold.generate_struct(), scaffold.generate_stateful_impl())
        }
        None => (TokenStream::new(), TokenStream::new()),
    };

    Ok(quote! {
        #view_model_struct
        #rewritten
        #action_enum
        #dispatch
        #stateful_impl
    })
}
