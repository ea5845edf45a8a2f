use proc_macro2::Span;
use thiserror::Error;

/// Precondition failures raised by the expansion passes.
///
/// Every variant carries a fixed message; the span is supplied at conversion time so the
/// diagnostic lands on the attribute that triggered the expansion.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpansionError {
    #[error("#[module] can only be applied to enums")]
    ModuleNotEnum,
    #[error("#[view_model] can only be applied to impl blocks")]
    ViewModelNotImpl,
    #[error("#[view] can only be applied to structs")]
    ViewNotStruct,
    #[error("#[view] can only be applied to structs with named fields")]
    ViewTupleStruct,
    #[error("#[screen] can only be applied to structs")]
    ScreenNotStruct,
    #[error("expected a named self type")]
    UnnamedSelfType,
}

impl ExpansionError {
    pub fn into_syn(self, span: Span) -> syn::Error {
        syn::Error::new(span, self.to_string())
    }
}
