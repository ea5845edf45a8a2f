use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::{ItemEnum, Result};

use crate::utils::naming::{Role, role_ident};
use crate::utils::runtime_path;

/// Generator for the `Module` impl binding the five role types of a module enum
pub struct ModuleAliasGenerator<'a> {
    item: &'a ItemEnum,
    prefix: &'a str,
    span: Span,
}

impl<'a> ModuleAliasGenerator<'a> {
    pub fn new(item: &'a ItemEnum, prefix: &'a str, span: Span) -> Self {
        Self { item, prefix, span }
    }

    pub fn generate(&self) -> Result<TokenStream> {
        let runtime = runtime_path();
        let name = &self.item.ident;
        let (impl_generics, ty_generics, where_clause) = self.item.generics.split_for_impl();

        let aliases = Role::ALL
            .iter()
            .map(|role| {
                let alias = format_ident!("{}", role.alias());
                let target = role_ident(self.prefix, *role, self.span)?;
                Ok(quote! { type #alias = #target; })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(quote! {
            impl #impl_generics #runtime::Module for #name #ty_generics #where_clause {
                #(#aliases)*
            }
        })
    }
}
