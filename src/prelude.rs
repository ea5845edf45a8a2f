//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use oversize_architecture::prelude::*;
//! ```
//!
//! Brings in the runtime traits ([`Module`], [`View`], [`ViewModel`], [`StatefulViewModel`],
//! [`ViewState`]), the runtime types ([`Reducer`], [`Shared`], [`Callback`]), the four
//! attribute macros and [`Uuid`].

pub use crate::callback::Callback;
pub use crate::error::{ArchitectureError, ArchitectureResult};
pub use crate::reducer::Reducer;
pub use crate::shared::Shared;
pub use crate::traits::{Module, StatefulViewModel, View, ViewModel, ViewState};

pub use oversize_macros::{module, screen, view, view_model};

pub use oversize_deps::uuid::Uuid;
