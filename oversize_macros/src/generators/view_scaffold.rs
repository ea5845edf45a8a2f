use proc_macro2::TokenStream;
use quote::quote;
use syn::{Fields, FieldsNamed, ItemStruct, Path, Result};

use crate::utils::attributes::ArgValue;
use crate::utils::runtime_path;

/// Why the view scaffold produced no members
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// `module = ..` missing, or not something that names a type
    UnresolvedModule,
}

/// Outcome of the view scaffold pass.
///
/// `Generated` carries the fields to append and the inherent constructor plus `View` impl.
///
/// An unresolved module is not an error: the struct is left untouched and no diagnostic is
/// raised. Keeping it a distinct outcome lets callers and tests tell it apart from a
/// successful expansion.
#[derive(Debug)]
pub enum ViewScaffold {
    Generated {
        fields: FieldsNamed,
        constructor: TokenStream,
    },
    Skipped(SkipReason),
}

impl ViewScaffold {
    pub fn is_skipped(&self) -> bool {
        matches!(self, ViewScaffold::Skipped(_))
    }

    /// Apply the outcome to the annotated struct, returning the tokens to emit.
    pub fn apply(self, mut item: ItemStruct) -> TokenStream {
        match self {
            ViewScaffold::Skipped(_) => quote! { #item },
            ViewScaffold::Generated {
                fields,
                constructor,
            } => {
                match &mut item.fields {
                    Fields::Named(existing) => existing.named.extend(fields.named),
                    Fields::Unit => {
                        item.fields = Fields::Named(fields);
                        item.semi_token = None;
                    }
                    // rejected before generation
                    Fields::Unnamed(_) => {}
                }
                quote! {
                    #item
                    #constructor
                }
            }
        }
    }
}

/// Generator for the view-state and reducer storage of a view
pub struct ViewScaffoldGenerator<'a> {
    item: &'a ItemStruct,
    module: Option<Path>,
}

impl<'a> ViewScaffoldGenerator<'a> {
    pub fn new(item: &'a ItemStruct, module: Option<&ArgValue>) -> Self {
        Self {
            item,
            module: module.and_then(ArgValue::as_type_path),
        }
    }

    pub fn generate(&self) -> Result<ViewScaffold> {
        let Some(module) = &self.module else {
            return Ok(ViewScaffold::Skipped(SkipReason::UnresolvedModule));
        };

        let runtime = runtime_path();
        let name = &self.item.ident;
        let (impl_generics, ty_generics, where_clause) = self.item.generics.split_for_impl();
        let view_state = quote! { #runtime::Shared<<#module as #runtime::Module>::ViewState> };
        let reducer = quote! { #runtime::Reducer<<#module as #runtime::Module>::ViewModel> };

        let fields: FieldsNamed = syn::parse2(quote! {
            {
                pub view_state: #view_state,
                pub reducer: #reducer
            }
        })?;

        // Fields declared by hand start from their `Default`
        let existing = self
            .item
            .fields
            .iter()
            .filter_map(|field| field.ident.as_ref());

        let init = quote! {
            Self {
                #(#existing: ::core::default::Default::default(),)*
                view_state,
                reducer,
            }
        };

        let constructor = quote! {
            impl #impl_generics #name #ty_generics #where_clause {
                pub fn new(view_state: #view_state, reducer: #reducer) -> Self {
                    #init
                }
            }

            impl #impl_generics #runtime::View for #name #ty_generics #where_clause {
                type ViewState = <#module as #runtime::Module>::ViewState;
                type ViewModel = <#module as #runtime::Module>::ViewModel;

                fn new(
                    view_state: #runtime::Shared<Self::ViewState>,
                    reducer: #runtime::Reducer<Self::ViewModel>,
                ) -> Self {
                    #init
                }
            }
        };

        Ok(ViewScaffold::Generated {
            fields,
            constructor,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use syn::parse_quote;

    fn field_names(item: &ItemStruct) -> Vec<String> {
        item.fields
            .iter()
            .filter_map(|f| f.ident.as_ref().map(ToString::to_string))
            .collect()
    }

    #[test]
    fn unresolved_module_is_skipped() {
        let item: ItemStruct = parse_quote!(pub struct ProductEditView;);
        for module in [None, Some(ArgValue::Unrecognized), Some(ArgValue::Str("1 + 1".into()))] {
            let outcome = ViewScaffoldGenerator::new(&item, module.as_ref()).generate().unwrap();
            assert!(outcome.is_skipped());
        }
    }

    #[test]
    fn skipped_leaves_struct_untouched() {
        let item: ItemStruct = parse_quote!(pub struct ProductEditView { title: String });
        let outcome = ViewScaffold::Skipped(SkipReason::UnresolvedModule);
        assert_eq!(outcome.apply(item.clone()).to_string(), quote!(#item).to_string());
    }

    #[test]
    fn unit_struct_gains_named_fields() {
        let item: ItemStruct = parse_quote!(pub struct ProductEditView;);
        let module = ArgValue::Type(parse_quote!(ProductEditModule));
        let outcome = ViewScaffoldGenerator::new(&item, Some(&module)).generate().unwrap();
        let file: syn::File = syn::parse2(outcome.apply(item)).unwrap();

        let syn::Item::Struct(generated) = &file.items[0] else {
            panic!("expected the view struct first");
        };
        assert_eq!(field_names(generated), ["view_state", "reducer"]);
        assert!(generated.semi_token.is_none());
        assert!(matches!(&file.items[1], syn::Item::Impl(i) if i.trait_.is_none()));
        assert!(matches!(&file.items[2], syn::Item::Impl(i) if i.trait_.is_some()));
    }

    #[test]
    fn existing_fields_are_kept_first() {
        let item: ItemStruct = parse_quote!(pub struct ProductEditView { title: String });
        let module = ArgValue::Str("ProductEditModule".into());
        let outcome = ViewScaffoldGenerator::new(&item, Some(&module)).generate().unwrap();
        let file: syn::File = syn::parse2(outcome.apply(item)).unwrap();

        let syn::Item::Struct(generated) = &file.items[0] else {
            panic!("expected the view struct first");
        };
        assert_eq!(field_names(generated), ["title", "view_state", "reducer"]);

        let items = &file.items;
        let rendered = quote!(#(#items)*).to_string();
        assert!(
            rendered.contains("title : :: core :: default :: Default :: default () ,"),
            "{rendered}"
        );
    }

    #[test]
    fn field_types_reference_module_roles() {
        let item: ItemStruct = parse_quote!(pub struct ProductEditView;);
        let module = ArgValue::Type(parse_quote!(edit::ProductEditModule));
        let ViewScaffold::Generated { fields, .. } =
            ViewScaffoldGenerator::new(&item, Some(&module)).generate().unwrap()
        else {
            panic!("module should resolve");
        };
        let types: Vec<syn::Type> = fields.named.iter().map(|f| f.ty.clone()).collect();
        let expected: Vec<syn::Type> = vec![
            parse_quote!(::oversize_architecture::Shared<<edit::ProductEditModule as ::oversize_architecture::Module>::ViewState>),
            parse_quote!(::oversize_architecture::Reducer<<edit::ProductEditModule as ::oversize_architecture::Module>::ViewModel>),
        ];
        assert_eq!(types, expected);
    }

    #[test]
    fn view_impl_uses_module_roles() {
        let item: ItemStruct = parse_quote!(pub struct ProductEditView;);
        let module = ArgValue::Type(parse_quote!(ProductEditModule));
        let outcome = ViewScaffoldGenerator::new(&item, Some(&module)).generate().unwrap();
        let file: syn::File = syn::parse2(outcome.apply(item)).unwrap();

        let syn::Item::Impl(view_impl) = &file.items[2] else {
            panic!("expected the View impl last");
        };
        let expected: syn::ItemImpl = parse_quote! {
            impl ::oversize_architecture::View for ProductEditView {
                type ViewState = <ProductEditModule as ::oversize_architecture::Module>::ViewState;
                type ViewModel = <ProductEditModule as ::oversize_architecture::Module>::ViewModel;

                fn new(
                    view_state: ::oversize_architecture::Shared<Self::ViewState>,
                    reducer: ::oversize_architecture::Reducer<Self::ViewModel>,
                ) -> Self {
                    Self {
                        view_state,
                        reducer,
                    }
                }
            }
        };
        assert_eq!(*view_impl, expected);
    }
}
