pub mod action_enum;
pub mod dispatch;
pub mod scaffold;

pub use action_enum::ActionEnumGenerator;
pub use dispatch::DispatchGenerator;
pub use scaffold::ViewModelScaffoldGenerator;
