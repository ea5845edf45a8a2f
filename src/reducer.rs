use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::error::{ArchitectureError, ArchitectureResult};
use crate::traits::ViewModel;

/// Sends actions from a view to its view-model.
///
/// Each dispatched action runs `handle_action` as its own task on the ambient tokio runtime.
/// Two dispatches carry no ordering guarantee; await the returned handle to sequence them.
pub struct Reducer<VM: ViewModel> {
    view_model: Arc<VM>,
}

impl<VM: ViewModel> Reducer<VM> {
    pub fn new(view_model: VM) -> Self {
        Self::from_arc(Arc::new(view_model))
    }

    pub fn from_arc(view_model: Arc<VM>) -> Self {
        Self { view_model }
    }

    pub fn view_model(&self) -> &Arc<VM> {
        &self.view_model
    }

    /// Spawns `handle_action(action)` on the current runtime.
    ///
    /// Fails with [`ArchitectureError::RuntimeUnavailable`] outside a tokio runtime.
    pub fn dispatch(&self, action: VM::Action) -> ArchitectureResult<JoinHandle<()>> {
        let handle = Handle::try_current().map_err(|_| ArchitectureError::RuntimeUnavailable)?;
        log::trace!(
            "Dispatching {} to {}",
            std::any::type_name::<VM::Action>(),
            std::any::type_name::<VM>()
        );
        let view_model = Arc::clone(&self.view_model);
        Ok(handle.spawn(async move { view_model.handle_action(action).await }))
    }
}

impl<VM: ViewModel> Clone for Reducer<VM> {
    fn clone(&self) -> Self {
        Self {
            view_model: Arc::clone(&self.view_model),
        }
    }
}

impl<VM: ViewModel> std::fmt::Debug for Reducer<VM> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reducer")
            .field("view_model", &std::any::type_name::<VM>())
            .finish()
    }
}
