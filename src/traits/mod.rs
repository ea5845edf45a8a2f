pub mod module;
pub mod view;
pub mod view_model;
pub mod view_state;

// Re-export commonly used types
pub use module::Module;
pub use view::View;
pub use view_model::{StatefulViewModel, ViewModel};
pub use view_state::ViewState;
