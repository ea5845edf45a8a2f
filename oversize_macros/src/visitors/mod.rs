pub mod action_visitor;

pub use action_visitor::{ActionVisitor, PositionalStripper};
