use proc_macro2::{Ident, TokenStream};
use quote::quote;
use syn::{ImplItem, Path, Result};

use crate::utils::runtime_path;

/// Generator for the state/input/output storage of a module-bound view-model
pub struct ViewModelScaffoldGenerator<'a> {
    name: &'a Ident,
    module: &'a Path,
}

impl<'a> ViewModelScaffoldGenerator<'a> {
    pub fn new(name: &'a Ident, module: &'a Path) -> Self {
        Self { name, module }
    }

    fn role(&self, role: &str) -> TokenStream {
        let runtime = runtime_path();
        let module = self.module;
        let role = Ident::new(role, proc_macro2::Span::call_site());
        quote! { <#module as #runtime::Module>::#role }
    }

    /// The view-model struct holding the shared state and the module's input and output
    pub fn generate_struct(&self) -> TokenStream {
        let runtime = runtime_path();
        let name = self.name;
        let view_state = self.role("ViewState");
        let input = self.role("Input");
        let output = self.role("Output");

        quote! {
            pub struct #name {
                pub state: #runtime::Shared<#view_state>,
                #[allow(dead_code)]
                input: ::core::option::Option<#input>,
                #[allow(dead_code)]
                output: ::core::option::Option<#output>,
            }
        }
    }

    /// `new(state, input, output)`, inserted ahead of the existing members
    pub fn generate_constructor(&self) -> Result<ImplItem> {
        let runtime = runtime_path();
        let view_state = self.role("ViewState");
        let input = self.role("Input");
        let output = self.role("Output");

        syn::parse2(quote! {
            pub fn new(
                state: #runtime::Shared<#view_state>,
                input: ::core::option::Option<#input>,
                output: ::core::option::Option<#output>,
            ) -> Self {
                Self {
                    state,
                    input,
                    output,
                }
            }
        })
    }

    /// `StatefulViewModel` impl tying the struct to the module's state, input and output
    pub fn generate_stateful_impl(&self) -> TokenStream {
        let runtime = runtime_path();
        let name = self.name;
        let view_state = self.role("ViewState");
        let input = self.role("Input");
        let output = self.role("Output");

        quote! {
            impl #runtime::StatefulViewModel for #name {
                type ViewState = #view_state;
                type Input = #input;
                type Output = #output;

                fn new(
                    state: #runtime::Shared<Self::ViewState>,
                    input: ::core::option::Option<Self::Input>,
                    output: ::core::option::Option<Self::Output>,
                ) -> Self {
                    Self {
                        state,
                        input,
                        output,
                    }
                }
            }
        }
    }
}
