pub mod action_method;
pub mod declaration;

pub use action_method::{ActionMethod, ActionParam, is_action_method};
pub use declaration::{DeclKind, Declaration};
