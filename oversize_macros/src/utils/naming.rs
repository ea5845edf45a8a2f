use heck::ToUpperCamelCase;
use proc_macro2::{Ident, Span};
use syn::Path;

// Naming conventions linking a module, screen or view-model to its collaborating types

/// Suffix carried by module enums (e.g. `ProductEditModule`)
pub const MODULE_SUFFIX: &str = "Module";

/// Suffix carried by screen structs (e.g. `ProductDetailScreen`)
pub const SCREEN_SUFFIX: &str = "Screen";

/// Prefix marking a method as an action handler
pub const ACTION_PREFIX: &str = "on";

/// The five roles a module binds together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Input,
    Output,
    ViewState,
    ViewModel,
    ViewScene,
}

impl Role {
    /// Fixed emission order for module aliases
    pub const ALL: [Role; 5] = [
        Role::Input,
        Role::Output,
        Role::ViewState,
        Role::ViewModel,
        Role::ViewScene,
    ];

    /// Associated type name inside the `Module` impl
    pub fn alias(self) -> &'static str {
        match self {
            Role::Input => "Input",
            Role::Output => "Output",
            Role::ViewState => "ViewState",
            Role::ViewModel => "ViewModel",
            Role::ViewScene => "ViewScene",
        }
    }

    /// Suffix appended to the stem to name the concrete type
    pub fn suffix(self) -> &'static str {
        match self {
            Role::ViewScene => "View",
            other => other.alias(),
        }
    }
}

/// Remove `suffix` from the end of `name`, or return `name` whole when it is absent.
pub fn strip_suffix_or_whole<'a>(name: &'a str, suffix: &str) -> &'a str {
    name.strip_suffix(suffix).unwrap_or(name)
}

/// Concrete type name for `role` built on `stem` (e.g. ProductEdit + ViewScene -> ProductEditView)
pub fn derive_type_name(stem: &str, role: Role) -> String {
    format!("{}{}", stem, role.suffix())
}

/// Derive the module prefix from the enum name (e.g. ProductEditModule -> ProductEdit)
pub fn module_prefix(enum_name: &str) -> &str {
    strip_suffix_or_whole(enum_name, MODULE_SUFFIX)
}

/// Derive the screen stem from the struct name (e.g. FooScreen -> Foo)
pub fn screen_stem(struct_name: &str) -> &str {
    strip_suffix_or_whole(struct_name, SCREEN_SUFFIX)
}

/// Generate the action enum name (e.g. ProductListViewModel -> ProductListViewModelAction)
pub fn action_enum_name(view_model: &Ident) -> Ident {
    quote::format_ident!("{}Action", view_model)
}

/// Generate an action variant name from a handler method (e.g. on_tap_save -> OnTapSave)
pub fn action_variant_name(method: &Ident) -> Ident {
    let name = method.to_string();
    let name = name.strip_prefix("r#").unwrap_or(&name);
    Ident::new(&name.to_upper_camel_case(), method.span())
}

/// Whether a method name carries the action prefix
pub fn has_action_prefix(method: &str) -> bool {
    method.starts_with(ACTION_PREFIX)
}

/// Generate an identifier for a derived type name, rejecting names that are not identifiers
pub fn type_ident(name: &str, span: Span) -> syn::Result<Ident> {
    let mut ident: Ident = syn::parse_str(name)
        .map_err(|_| syn::Error::new(span, format!("`{name}` is not a valid type name")))?;
    ident.set_span(span);
    Ok(ident)
}

/// Derived type identifier for `role` built on `stem`
pub fn role_ident(stem: &str, role: Role, span: Span) -> syn::Result<Ident> {
    type_ident(&derive_type_name(stem, role), span)
}

/// Extract the last segment from a path (e.g., foo::bar::Baz -> Baz)
pub fn path_last_segment(path: &Path) -> Option<&Ident> {
    path.segments.last().map(|seg| &seg.ident)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;
    use syn::parse_quote;

    #[test]
    fn module_prefix_strips_suffix() {
        assert_eq!(module_prefix("ProductEditModule"), "ProductEdit");
        assert_eq!(module_prefix("UserProfile"), "UserProfile");
        assert_eq!(module_prefix("Module"), "");
        assert_eq!(module_prefix("ModuleView"), "ModuleView");
    }

    #[test]
    fn screen_stem_strips_suffix() {
        assert_eq!(screen_stem("FooScreen"), "Foo");
        assert_eq!(screen_stem("Foo"), "Foo");
        assert_eq!(screen_stem("ScreenFoo"), "ScreenFoo");
    }

    #[test]
    fn role_table() {
        let names: Vec<_> = Role::ALL
            .iter()
            .map(|role| derive_type_name("ProductEdit", *role))
            .collect();
        assert_eq!(
            names,
            [
                "ProductEditInput",
                "ProductEditOutput",
                "ProductEditViewState",
                "ProductEditViewModel",
                "ProductEditView",
            ]
        );
        assert_eq!(Role::ViewScene.alias(), "ViewScene");
    }

    #[test]
    fn screen_stems_from_both_spellings() {
        for name in ["FooScreen", "Foo"] {
            let stem = screen_stem(name);
            assert_eq!(derive_type_name(stem, Role::ViewState), "FooViewState");
            assert_eq!(derive_type_name(stem, Role::ViewModel), "FooViewModel");
        }
    }

    #[test]
    fn action_names() {
        let vm: Ident = parse_quote!(ProductListViewModel);
        assert_eq!(action_enum_name(&vm), "ProductListViewModelAction");

        let method: Ident = parse_quote!(on_tap_save);
        assert_eq!(action_variant_name(&method), "OnTapSave");
        let method: Ident = parse_quote!(onAppear);
        assert_eq!(action_variant_name(&method), "OnAppear");
    }

    #[test]
    fn action_prefix() {
        assert!(has_action_prefix("on_appear"));
        assert!(has_action_prefix("onAppear"));
        assert!(!has_action_prefix("load_product"));
        assert!(!has_action_prefix("handle_on"));
    }

    #[test]
    fn type_idents() {
        let span = Span::call_site();
        assert_eq!(role_ident("Foo", Role::ViewScene, span).unwrap(), "FooView");
        assert_eq!(role_ident("", Role::Input, span).unwrap(), "Input");
        assert!(type_ident("My Name", span).is_err());
        assert!(type_ident("type", span).is_err());
    }

    quickcheck! {
        fn prop_suffix_round_trip(stem: String) -> bool {
            let name = format!("{stem}{MODULE_SUFFIX}");
            module_prefix(&name) == stem
        }

        fn prop_no_suffix_keeps_name(name: String) -> bool {
            name.ends_with(SCREEN_SUFFIX) || screen_stem(&name) == name
        }
    }
}
