use super::{StatefulViewModel, View, ViewState};
use crate::reducer::Reducer;
use crate::shared::Shared;

/// Names the five collaborating types of one screen.
///
/// Implemented on an uninhabited enum by `#[module]`, which derives the associated types from
/// a shared prefix:
///
/// ```rust,ignore
/// #[module]
/// pub enum ProductEditModule {}
/// // Input     = ProductEditInput
/// // Output    = ProductEditOutput
/// // ViewState = ProductEditViewState
/// // ViewModel = ProductEditViewModel
/// // ViewScene = ProductEditView
/// ```
///
/// The bounds tie the view-model and the view to the module's view state, input and output.
pub trait Module {
    type Input;
    type Output;
    type ViewState: ViewState<Input = Self::Input>;
    type ViewModel: StatefulViewModel<
            ViewState = Self::ViewState,
            Input = Self::Input,
            Output = Self::Output,
        >;
    type ViewScene: View<ViewState = Self::ViewState, ViewModel = Self::ViewModel>;

    /// Assembles the view: state from `input`, a view-model sharing that state, a reducer
    /// around the view-model, then the view from state and reducer.
    fn build(input: Option<Self::Input>, output: Option<Self::Output>) -> Self::ViewScene
    where
        Self::Input: Clone,
    {
        let view_state = Shared::new(<Self::ViewState as ViewState>::new(input.clone()));
        let view_model = <Self::ViewModel as StatefulViewModel>::new(
            view_state.clone(),
            input,
            output,
        );
        <Self::ViewScene as View>::new(view_state, Reducer::new(view_model))
    }
}
