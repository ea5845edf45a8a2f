use proc_macro2::{Ident, TokenStream};
use quote::quote;
use syn::ItemImpl;

use super::action_enum::PayloadShape;
use crate::item_info::ActionMethod;
use crate::utils::runtime_path;

/// Generator for the `ViewModel` impl whose `handle_action` forwards each action to its handler
pub struct DispatchGenerator<'a> {
    item: &'a ItemImpl,
    enum_name: &'a Ident,
    actions: &'a [ActionMethod],
}

impl<'a> DispatchGenerator<'a> {
    pub fn new(item: &'a ItemImpl, enum_name: &'a Ident, actions: &'a [ActionMethod]) -> Self {
        Self {
            item,
            enum_name,
            actions,
        }
    }

    pub fn generate(&self) -> TokenStream {
        let runtime = runtime_path();
        let (impl_generics, _, where_clause) = self.item.generics.split_for_impl();
        let self_ty = &self.item.self_ty;
        let enum_name = self.enum_name;
        let arms = self.actions.iter().map(|action| self.arm(action));

        quote! {
            #[#runtime::__private::async_trait::async_trait]
            impl #impl_generics #runtime::ViewModel for #self_ty #where_clause {
                type Action = #enum_name;

                async fn handle_action(&self, action: Self::Action) {
                    match action {
                        #(#arms)*
                    }
                }
            }
        }
    }

    fn arm(&self, action: &ActionMethod) -> TokenStream {
        let enum_name = self.enum_name;
        let variant = action.variant();
        let method = &action.name;
        let bindings: Vec<Ident> = action.params.iter().map(|p| p.binding()).collect();

        let pattern = match PayloadShape::of(&action.params) {
            PayloadShape::Unit => quote! { #enum_name::#variant },
            PayloadShape::Tuple => quote! { #enum_name::#variant(#(#bindings),*) },
            PayloadShape::Named => quote! { #enum_name::#variant { #(#bindings),* } },
        };

        let call = quote! { self.#method(#(#bindings),*) };
        let call = if action.is_async {
            quote! { #call.await }
        } else {
            quote! { #call }
        };

        quote! {
            #pattern => {
                #call;
            }
        }
    }
}
