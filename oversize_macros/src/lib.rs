use proc_macro::TokenStream;

use crate::macros::emit;

mod errors;
mod generators;
mod item_info;
mod macros;
mod utils;
mod visitors;

/// Generates the action enum and dispatch for a view-model impl block.
///
/// Every `pub` method whose name starts with `on` becomes a variant of `<Name>Action`, named
/// after the method in UpperCamelCase. A `ViewModel` implementation is generated whose
/// `handle_action` matches on the action and forwards its payload to the handler, awaiting it
/// when the handler is `async`.
///
/// # Arguments
///
/// - `module = SomeModule` - **Optional**. Also generates the view-model struct (`state`,
///   `input`, `output`), a `new(state, input, output)` constructor and an
///   `impl StatefulViewModel`, typed through the module's associated types. The struct must
///   not be declared by hand in that case.
///
/// # Parameters
///
/// - `name: T` - labeled, becomes field `name` of a struct variant
/// - `#[positional] name: T` - positional slot bound to `name`
/// - `_: T` - positional slot bound to `value`
///
/// A handler whose parameters are all positional produces a tuple variant.
///
/// # Examples
///
/// ```rust,ignore
/// use oversize_architecture::prelude::*;
///
/// #[view_model(module = ProductEditModule)]
/// impl ProductEditViewModel {
///     pub async fn on_appear(&self) {}
///     pub async fn on_rename(&self, name: String) {
///         self.state.update(|state| state.name = name);
///     }
///     pub fn on_select(&self, #[positional] index: usize) {}
///
///     async fn reload(&self) {} // not an action
/// }
/// // Generates:
/// // pub enum ProductEditViewModelAction {
/// //     OnAppear,
/// //     OnRename { name: String },
/// //     OnSelect(usize),
/// // }
/// ```
///
/// # Errors
///
/// Anything other than an inherent impl block is rejected with
/// `#[view_model] can only be applied to impl blocks`.
#[proc_macro_attribute]
pub fn view_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let item = proc_macro2::TokenStream::from(item);
    emit(
        macros::view_model::view_model_attribute(attr.into(), item.clone()),
        item,
    )
    .into()
}

/// Implements `Module` for an enum, binding a screen's five collaborating types.
///
/// The prefix is `prefix = ".."` when given, otherwise the enum name with a trailing `Module`
/// removed. The associated types are `<Prefix>Input`, `<Prefix>Output`, `<Prefix>ViewState`,
/// `<Prefix>ViewModel` and `<Prefix>View`.
///
/// ```rust,ignore
/// #[module]
/// pub enum ProductEditModule {}
///
/// #[module(prefix = "CustomName")]
/// pub enum ProductEditModule {} // CustomNameInput, CustomNameOutput, ...
/// ```
#[proc_macro_attribute]
pub fn module(attr: TokenStream, item: TokenStream) -> TokenStream {
    let item = proc_macro2::TokenStream::from(item);
    emit(macros::module::module_attribute(attr.into(), item.clone()), item).into()
}

/// Adds `view_state` and `reducer` fields, a `new(view_state, reducer)` constructor and an
/// `impl View` typed through the module.
///
/// Requires `module = SomeModule`; without a resolvable module the struct is left unchanged.
/// Unit structs become structs with named fields, existing named fields are kept in front.
///
/// ```rust,ignore
/// #[view(module = ProductEditModule)]
/// pub struct ProductEditView;
/// ```
#[proc_macro_attribute]
pub fn view(attr: TokenStream, item: TokenStream) -> TokenStream {
    let item = proc_macro2::TokenStream::from(item);
    emit(macros::view::view_attribute(attr.into(), item.clone()), item).into()
}

/// Generates `build()` and/or `build_with_id(id)` factories for a screen struct.
///
/// The stem is the struct name minus a trailing `Screen`. Factories construct
/// `<Stem>ViewState` (`Default` or `with_id`), hand a shared handle to the
/// `StatefulViewModel::new` of `<Stem>ViewModel`, wrap it in a `Reducer` and pass both to the
/// struct's `View::new`. Each factory logs through `log` when the `log` feature is on.
///
/// ```rust,ignore
/// #[screen(default, id)]
/// #[view(module = ProductDetailModule)]
/// pub struct ProductDetailScreen;
///
/// let screen = ProductDetailScreen::build_with_id(Uuid::new_v4());
/// ```
#[proc_macro_attribute]
pub fn screen(attr: TokenStream, item: TokenStream) -> TokenStream {
    let item = proc_macro2::TokenStream::from(item);
    emit(macros::screen::screen_attribute(attr.into(), item.clone()), item).into()
}
