use proc_macro2::TokenStream;
use syn::{
    Attribute, Expr, Lit, Meta, Path, Result, Token,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
};

/// Utilities for parsing the arguments attached to the architecture attributes

/// Value recovered from a `name = value` argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    /// `prefix = "CustomName"`
    Str(String),
    /// `module = ProductEditModule` or `module = screens::edit::ProductEditModule`
    Type(Path),
    /// Anything else (numbers, calls, closures...)
    Unrecognized,
}

impl ArgValue {
    pub fn from_expr(expr: &Expr) -> Self {
        match expr {
            Expr::Lit(lit) => match &lit.lit {
                Lit::Str(s) => ArgValue::Str(s.value()),
                _ => ArgValue::Unrecognized,
            },
            Expr::Path(path) if path.qself.is_none() => ArgValue::Type(path.path.clone()),
            Expr::Group(group) => Self::from_expr(&group.expr),
            Expr::Paren(paren) => Self::from_expr(&paren.expr),
            _ => ArgValue::Unrecognized,
        }
    }

    /// Interpret the value as a type path; string literals are parsed as paths.
    pub fn as_type_path(&self) -> Option<Path> {
        match self {
            ArgValue::Type(path) => Some(path.clone()),
            ArgValue::Str(s) => syn::parse_str::<Path>(s).ok(),
            ArgValue::Unrecognized => None,
        }
    }
}

/// Comma separated attribute arguments: `#[attr(a, b = "x", c = Type)]`
#[derive(Debug, Default)]
pub struct AttrArgs {
    metas: Vec<Meta>,
}

impl Parse for AttrArgs {
    fn parse(input: ParseStream) -> Result<Self> {
        let metas = Punctuated::<Meta, Token![,]>::parse_terminated(input)?;
        Ok(AttrArgs {
            metas: metas.into_iter().collect(),
        })
    }
}

impl AttrArgs {
    pub fn from_tokens(tokens: TokenStream) -> Result<Self> {
        if tokens.is_empty() {
            return Ok(Self::default());
        }
        syn::parse2(tokens)
    }

    /// Value of the first `name = value` argument, if any
    pub fn value(&self, name: &str) -> Option<ArgValue> {
        self.metas.iter().find_map(|meta| match meta {
            Meta::NameValue(nv) if nv.path.is_ident(name) => Some(ArgValue::from_expr(&nv.value)),
            _ => None,
        })
    }

    /// Bare positional arguments (`default`, `id`, `BuildVariant::Id`)
    pub fn positional(&self) -> impl Iterator<Item = &Path> {
        self.metas.iter().filter_map(|meta| match meta {
            Meta::Path(path) => Some(path),
            _ => None,
        })
    }
}

/// Check if an attribute matches a given path (e.g., "positional")
pub fn is_attribute(attr: &Attribute, name: &str) -> bool {
    attr.path().is_ident(name)
}

/// Check if attributes contain a specific attribute
pub fn has_attribute(attrs: &[Attribute], name: &str) -> bool {
    attrs.iter().any(|attr| is_attribute(attr, name))
}

/// Remove an attribute from a list
pub fn remove_attribute(attrs: &mut Vec<Attribute>, name: &str) {
    attrs.retain(|attr| !is_attribute(attr, name));
}
