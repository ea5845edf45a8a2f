//! # Oversize Dependencies
//!
//! This crate provides hygienic re-exports of all dependencies referenced by the code the
//! Oversize macros generate. Procedural macros can then name those crates without requiring
//! users to add them to their own manifests.
//!
//! This crate is an implementation detail and should not be used directly by end users.

pub mod __private {
    //! Re-exports of all dependencies used by generated macro code.
    //!
    //! Private re-exports for macro hygiene. Do not use directly.

    /// Boxed-future async trait methods (`ViewModel::handle_action`)
    pub use async_trait;

    /// Logging facade used by generated screen factories
    pub use log;

    /// Identifier type for `build_with_id`
    pub use uuid;
}

// Also provide direct access for convenience
pub use async_trait;
pub use log;
pub use uuid;
