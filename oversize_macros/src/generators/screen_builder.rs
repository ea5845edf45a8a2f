use std::collections::BTreeSet;

use proc_macro2::{Span, TokenStream};
use quote::quote;
use strum::IntoEnumIterator;
use syn::{ItemStruct, Result};

use crate::utils::attributes::AttrArgs;
use crate::utils::naming::{Role, path_last_segment, role_ident, screen_stem};
use crate::utils::runtime_path;

/// Factory shapes a screen can ask for.
///
/// Declaration order is emission order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BuildVariant {
    /// `build()`
    Default,
    /// `build_with_id(id)`
    Id,
}

impl BuildVariant {
    /// Requested variants in emission order; falls back to `Default` when nothing is recognized.
    pub fn resolve(args: &AttrArgs) -> Vec<BuildVariant> {
        let requested: BTreeSet<BuildVariant> = args
            .positional()
            .filter_map(path_last_segment)
            .filter_map(|ident| ident.to_string().parse().ok())
            .collect();

        if requested.is_empty() {
            return vec![BuildVariant::Default];
        }
        BuildVariant::iter()
            .filter(|variant| requested.contains(variant))
            .collect()
    }
}

/// Generator for the static factories of a screen struct
pub struct ScreenBuilderGenerator<'a> {
    item: &'a ItemStruct,
    variants: Vec<BuildVariant>,
    log: bool,
}

impl<'a> ScreenBuilderGenerator<'a> {
    pub fn new(item: &'a ItemStruct, variants: Vec<BuildVariant>) -> Self {
        Self {
            item,
            variants,
            log: cfg!(feature = "log"),
        }
    }

    /// Toggle the log line at the top of each factory
    #[cfg(test)]
    pub fn with_log(mut self, log: bool) -> Self {
        self.log = log;
        self
    }

    pub fn generate(&self) -> Result<TokenStream> {
        let name = &self.item.ident;
        let (impl_generics, ty_generics, where_clause) = self.item.generics.split_for_impl();
        let methods = self
            .variants
            .iter()
            .map(|variant| self.factory(*variant))
            .collect::<Result<Vec<_>>>()?;

        Ok(quote! {
            impl #impl_generics #name #ty_generics #where_clause {
                #(#methods)*
            }
        })
    }

    fn factory(&self, variant: BuildVariant) -> Result<TokenStream> {
        let runtime = runtime_path();
        let name = self.item.ident.to_string();
        let stem = screen_stem(&name);
        let span = Span::call_site();
        let view_state = role_ident(stem, Role::ViewState, span)?;
        let view_model = role_ident(stem, Role::ViewModel, span)?;

        let (signature, log, view_state_init) = match variant {
            BuildVariant::Default => (
                quote! { pub fn build() -> Self },
                quote! { #runtime::__private::log::info!("Building {}", #name); },
                quote! { <#view_state as ::core::default::Default>::default() },
            ),
            BuildVariant::Id => (
                quote! { pub fn build_with_id(id: #runtime::__private::uuid::Uuid) -> Self },
                quote! { #runtime::__private::log::info!("Building {} for ID: {}", #name, id); },
                quote! { #view_state::with_id(id) },
            ),
        };
        let log = if self.log { log } else { TokenStream::new() };

        Ok(quote! {
            #signature {
                #log
                let view_state = #runtime::Shared::new(#view_state_init);
                let view_model = <#view_model as #runtime::StatefulViewModel>::new(
                    ::core::clone::Clone::clone(&view_state),
                    ::core::option::Option::None,
                    ::core::option::Option::None,
                );
                let reducer = #runtime::Reducer::new(view_model);
                <Self as #runtime::View>::new(view_state, reducer)
            }
        })
    }
}
