use proc_macro2::Ident;
use syn::{FnArg, ImplItemFn, Pat, Type, Visibility};

use crate::utils::{attributes::has_attribute, naming};

/// Helper attribute marking a parameter as positional in the generated action payload
pub const POSITIONAL_ATTR: &str = "positional";

/// Binding used for a positional parameter that has no local name
pub const PLACEHOLDER_BINDING: &str = "value";

/// One parameter of an action handler.
#[derive(Debug, Clone)]
pub struct ActionParam {
    /// `None` is the wildcard label: the payload slot is positional
    pub label: Option<Ident>,
    pub local: Option<Ident>,
    pub ty: Type,
}

impl ActionParam {
    pub fn from_fn_arg(arg: &FnArg) -> Option<Self> {
        let FnArg::Typed(pat_type) = arg else {
            return None;
        };
        let ty = (*pat_type.ty).clone();
        let positional = has_attribute(&pat_type.attrs, POSITIONAL_ATTR);

        let param = match &*pat_type.pat {
            Pat::Ident(pat) if positional => ActionParam {
                label: None,
                local: Some(pat.ident.clone()),
                ty,
            },
            Pat::Ident(pat) => ActionParam {
                label: Some(pat.ident.clone()),
                local: Some(pat.ident.clone()),
                ty,
            },
            _ => ActionParam {
                label: None,
                local: None,
                ty,
            },
        };
        Some(param)
    }

    pub fn is_positional(&self) -> bool {
        self.label.is_none()
    }

    /// Local name the dispatch arm binds this payload slot to
    pub fn binding(&self) -> Ident {
        match (&self.label, &self.local) {
            (Some(label), _) => label.clone(),
            (None, Some(local)) => local.clone(),
            (None, None) => Ident::new(PLACEHOLDER_BINDING, proc_macro2::Span::call_site()),
        }
    }
}

/// An `on*` handler discovered on a view-model impl block.
#[derive(Debug, Clone)]
pub struct ActionMethod {
    pub name: Ident,
    pub is_async: bool,
    pub params: Vec<ActionParam>,
}

impl ActionMethod {
    pub fn from_fn(method: &ImplItemFn) -> Self {
        Self {
            name: method.sig.ident.clone(),
            is_async: method.sig.asyncness.is_some(),
            params: method
                .sig
                .inputs
                .iter()
                .filter_map(ActionParam::from_fn_arg)
                .collect(),
        }
    }

    pub fn variant(&self) -> Ident {
        naming::action_variant_name(&self.name)
    }
}

/// Whether a method takes part in action generation: `on` prefix and not private
pub fn is_action_method(method: &ImplItemFn) -> bool {
    let name = method.sig.ident.to_string();
    naming::has_action_prefix(&name) && !matches!(method.vis, Visibility::Inherited)
}
