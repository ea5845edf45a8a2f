use super::{ViewModel, ViewState};
use crate::reducer::Reducer;
use crate::shared::Shared;

/// A view holding its state handle and the reducer it sends actions through.
///
/// Implemented by `#[view(module = ..)]` with the module's view-state and view-model types.
pub trait View: Sized {
    type ViewState: ViewState;
    type ViewModel: ViewModel;

    fn new(view_state: Shared<Self::ViewState>, reducer: Reducer<Self::ViewModel>) -> Self;
}
