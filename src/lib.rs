//! # Oversize Architecture
//!
//! A small state / view-model / view / module architecture for Rust UIs, plus attribute
//! macros that write the repetitive wiring.
//!
//! ## Pieces
//!
//! - **View state**: plain data, shared between a view and its view-model through [`Shared`]
//! - **View-model**: an impl block of `on*` handlers; [`view_model`] turns them into an action
//!   enum and a [`ViewModel`] implementation that dispatches to them
//! - **Module**: an uninhabited enum naming a screen's five types via [`Module`]
//! - **View / screen**: structs holding the state handle and a [`Reducer`], with constructors
//!   and `build` factories generated by [`view`] and [`screen`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use oversize_architecture::prelude::*;
//!
//! #[module]
//! pub enum CounterModule {}
//!
//! pub struct CounterInput;
//! pub struct CounterOutput;
//!
//! #[derive(Default)]
//! pub struct CounterViewState {
//!     pub count: i64,
//! }
//!
//! impl ViewState for CounterViewState {
//!     type Input = CounterInput;
//!     fn new(_input: Option<CounterInput>) -> Self {
//!         Self::default()
//!     }
//! }
//!
//! #[view_model(module = CounterModule)]
//! impl CounterViewModel {
//!     pub fn on_increment(&self, by: i64) {
//!         self.state.update(|state| state.count += by);
//!     }
//! }
//!
//! #[screen]
//! #[view(module = CounterModule)]
//! pub struct CounterView;
//!
//! # async fn run() -> ArchitectureResult<()> {
//! let view = CounterView::build();
//! view.reducer
//!     .dispatch(CounterViewModelAction::OnIncrement { by: 2 })?
//!     .await
//!     .ok();
//! assert_eq!(view.view_state.get(|state| state.count), 2);
//! # Ok(())
//! # }
//! ```

extern crate self as oversize_architecture;

pub mod callback;
pub mod error;
pub mod prelude;
pub mod reducer;
pub mod shared;
pub mod traits;

pub use callback::Callback;
pub use error::{ArchitectureError, ArchitectureResult};
pub use reducer::Reducer;
pub use shared::Shared;
pub use traits::{Module, StatefulViewModel, View, ViewModel, ViewState};

pub use oversize_macros::{module, screen, view, view_model};

// Hygienic paths for generated code
pub use oversize_deps::__private;

pub use oversize_deps::uuid::Uuid;
