/// Data rendered by a view and mutated by its view-model.
///
/// A view state is constructed from the module's optional input. Screens built with
/// `#[screen]` additionally require `Default` (for `build()`) or an inherent
/// `with_id(Uuid) -> Self` (for `build_with_id`).
pub trait ViewState: Send + Sync + 'static {
    type Input;

    fn new(input: Option<Self::Input>) -> Self;
}
