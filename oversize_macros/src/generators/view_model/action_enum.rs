use proc_macro2::{Ident, TokenStream};
use quote::quote;

use crate::item_info::{ActionMethod, ActionParam};

/// How an action variant carries its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadShape {
    /// No parameters
    Unit,
    /// Every parameter is positional: `OnSelect(Uuid)`
    Tuple,
    /// At least one labeled parameter: `OnRename { name: String }`
    Named,
}

impl PayloadShape {
    pub fn of(params: &[ActionParam]) -> Self {
        if params.is_empty() {
            PayloadShape::Unit
        } else if params.iter().all(ActionParam::is_positional) {
            PayloadShape::Tuple
        } else {
            PayloadShape::Named
        }
    }
}

/// Generator for the `<ViewModel>Action` enum mirroring the discovered handlers
pub struct ActionEnumGenerator<'a> {
    enum_name: &'a Ident,
    actions: &'a [ActionMethod],
}

impl<'a> ActionEnumGenerator<'a> {
    pub fn new(enum_name: &'a Ident, actions: &'a [ActionMethod]) -> Self {
        Self { enum_name, actions }
    }

    pub fn generate(&self) -> TokenStream {
        let enum_name = self.enum_name;
        let variants = self.actions.iter().map(Self::variant);

        quote! {
            pub enum #enum_name {
                #(#variants),*
            }
        }
    }

    fn variant(action: &ActionMethod) -> TokenStream {
        let variant = action.variant();
        match PayloadShape::of(&action.params) {
            PayloadShape::Unit => quote! { #variant },
            PayloadShape::Tuple => {
                let types = action.params.iter().map(|p| &p.ty);
                quote! { #variant(#(#types),*) }
            }
            PayloadShape::Named => {
                let fields = action.params.iter().map(|p| {
                    let name = p.binding();
                    let ty = &p.ty;
                    quote! { #name: #ty }
                });
                quote! { #variant { #(#fields),* } }
            }
        }
    }
}
