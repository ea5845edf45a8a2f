use async_trait::async_trait;

use super::ViewState;
use crate::shared::Shared;

/// Receives actions sent by a view.
///
/// Normally implemented by `#[view_model]`, which derives `Action` from the `on*` handlers of
/// an impl block and forwards each variant to its handler.
#[async_trait]
pub trait ViewModel: Send + Sync + 'static {
    type Action: Send + 'static;

    async fn handle_action(&self, action: Self::Action);
}

/// A view-model built from shared view state and its module's input and output.
///
/// `#[view_model(module = ..)]` implements this alongside the generated struct; hand-declared
/// view-models implement it themselves to take part in `Module::build` and `#[screen]`.
pub trait StatefulViewModel: ViewModel + Sized {
    type ViewState: ViewState;
    type Input;
    type Output;

    fn new(
        state: Shared<Self::ViewState>,
        input: Option<Self::Input>,
        output: Option<Self::Output>,
    ) -> Self;
}
