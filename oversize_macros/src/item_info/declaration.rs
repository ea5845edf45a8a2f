use proc_macro2::Ident;
use syn::{Item, ItemEnum, ItemImpl, ItemStruct, Type};

use crate::errors::ExpansionError;

/// Shape of the item an architecture attribute is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    /// Inherent `impl Type { .. }` block, the home of view-model handlers
    Impl,
    /// `impl Trait for Type { .. }`
    TraitImpl,
    Struct,
    Enum,
    Other,
}

impl DeclKind {
    pub fn of(item: &Item) -> Self {
        match item {
            Item::Impl(i) if i.trait_.is_some() => DeclKind::TraitImpl,
            Item::Impl(_) => DeclKind::Impl,
            Item::Struct(_) => DeclKind::Struct,
            Item::Enum(_) => DeclKind::Enum,
            _ => DeclKind::Other,
        }
    }
}

/// Borrowed handle over the annotated item for the duration of one expansion.
#[derive(Debug, Clone, Copy)]
pub struct Declaration<'ast> {
    pub kind: DeclKind,
    pub item: &'ast Item,
}

impl<'ast> Declaration<'ast> {
    pub fn new(item: &'ast Item) -> Self {
        Self {
            kind: DeclKind::of(item),
            item,
        }
    }

    /// Name of the declared (or extended) type
    pub fn name(&self) -> Result<&'ast Ident, ExpansionError> {
        match self.item {
            Item::Struct(s) => Ok(&s.ident),
            Item::Enum(e) => Ok(&e.ident),
            Item::Impl(i) => self_type_name(&i.self_ty).ok_or(ExpansionError::UnnamedSelfType),
            _ => Err(ExpansionError::UnnamedSelfType),
        }
    }

    pub fn as_impl(&self) -> Option<&'ast ItemImpl> {
        match (self.kind, self.item) {
            (DeclKind::Impl, Item::Impl(i)) => Some(i),
            _ => None,
        }
    }

    pub fn as_struct(&self) -> Option<&'ast ItemStruct> {
        match self.item {
            Item::Struct(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&'ast ItemEnum> {
        match self.item {
            Item::Enum(e) => Some(e),
            _ => None,
        }
    }
}

fn self_type_name(ty: &Type) -> Option<&Ident> {
    match ty {
        Type::Path(p) if p.qself.is_none() => p.path.segments.last().map(|seg| &seg.ident),
        Type::Group(g) => self_type_name(&g.elem),
        Type::Paren(p) => self_type_name(&p.elem),
        _ => None,
    }
}
