use syn::{
    ImplItem, ImplItemFn, ItemImpl, PatType,
    visit::Visit,
    visit_mut::{self, VisitMut},
};

use crate::item_info::{ActionMethod, action_method::POSITIONAL_ATTR, is_action_method};
use crate::utils::attributes::remove_attribute;

/// Collects the action handlers declared directly on an impl block.
///
/// Only the block's own `fn` items are inspected; nested items and method bodies are never
/// entered, so handlers of local helper types cannot leak into the action set.
#[derive(Default)]
pub struct ActionVisitor {
    pub actions: Vec<ActionMethod>,
}

impl<'ast> Visit<'ast> for ActionVisitor {
    fn visit_item_impl(&mut self, i: &'ast ItemImpl) {
        for item in &i.items {
            if let ImplItem::Fn(method) = item {
                self.visit_impl_item_fn(method);
            }
        }
    }

    fn visit_impl_item_fn(&mut self, i: &'ast ImplItemFn) {
        if is_action_method(i) {
            self.actions.push(ActionMethod::from_fn(i));
        }
    }
}

impl ActionVisitor {
    pub fn collect(item: &ItemImpl) -> Vec<ActionMethod> {
        let mut visitor = Self::default();
        visitor.visit_item_impl(item);
        visitor.actions
    }
}

/// Strips the `#[positional]` helper attribute from handler parameters before re-emission.
pub struct PositionalStripper;

impl VisitMut for PositionalStripper {
    fn visit_item_impl_mut(&mut self, i: &mut ItemImpl) {
        for item in &mut i.items {
            if let ImplItem::Fn(method) = item {
                for input in &mut method.sig.inputs {
                    self.visit_fn_arg_mut(input);
                }
            }
        }
    }

    fn visit_pat_type_mut(&mut self, i: &mut PatType) {
        remove_attribute(&mut i.attrs, POSITIONAL_ATTR);
        visit_mut::visit_pat_type_mut(self, i);
    }
}
