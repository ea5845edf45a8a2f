pub mod module_aliases;
pub mod screen_builder;
pub mod view_model;
pub mod view_scaffold;

pub use module_aliases::ModuleAliasGenerator;
pub use screen_builder::{BuildVariant, ScreenBuilderGenerator};
pub use view_scaffold::{ViewScaffold, ViewScaffoldGenerator};
