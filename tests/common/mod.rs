// Sample screens shared by the integration tests
#![allow(dead_code)]

use oversize_architecture::prelude::*;

/// Initialise logging once per test binary
pub fn init_logging() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Trace)
        .try_init();
}

// ---------------------------------------------------------------------------
// Product detail: module-bound view-model, default + id factories
// ---------------------------------------------------------------------------

#[module]
pub enum ProductDetailModule {}

#[derive(Debug, Clone)]
pub struct ProductDetailInput {
    pub product_id: Uuid,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProductDetailOutput {
    Saved(Uuid),
    Closed,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ProductDetailViewState {
    pub product_id: Option<Uuid>,
    pub name: String,
    pub appeared: bool,
    pub selected: Option<usize>,
    pub dismissed_with: Option<ProductDetailOutput>,
    pub notes: Vec<(Uuid, String)>,
}

impl ProductDetailViewState {
    pub fn with_id(id: Uuid) -> Self {
        Self {
            product_id: Some(id),
            ..Self::default()
        }
    }
}

impl ViewState for ProductDetailViewState {
    type Input = ProductDetailInput;

    fn new(input: Option<ProductDetailInput>) -> Self {
        match input {
            Some(input) => Self::with_id(input.product_id),
            None => Self::default(),
        }
    }
}

#[view_model(module = ProductDetailModule)]
impl ProductDetailViewModel {
    pub async fn on_appear(&self) {
        tokio::task::yield_now().await;
        self.state.update(|state| state.appeared = true);
    }

    pub async fn on_rename(&self, name: String) {
        self.state.update(|state| state.name = name);
    }

    pub fn on_select(&self, #[positional] index: usize) {
        self.state.update(|state| state.selected = Some(index));
    }

    pub fn on_dismiss(&self, _: ProductDetailOutput) {
        self.state.update(|state| state.dismissed_with = Some(ProductDetailOutput::Closed));
    }

    pub async fn on_add_note(&self, author: Uuid, #[positional] text: String) {
        self.state.update(|state| state.notes.push((author, text)));
    }

    async fn on_reload(&self) {
        self.state.update(|state| state.appeared = false);
    }

    pub fn refresh(&self) {}
}

pub type ProductDetailView = ProductDetailScreen;

#[screen(default, id)]
#[view(module = ProductDetailModule)]
pub struct ProductDetailScreen;

// ---------------------------------------------------------------------------
// Catalog: explicit prefix, hand-declared view-model, id-only factory
// ---------------------------------------------------------------------------

#[module(prefix = "Catalog")]
pub enum ProductListModule {}

#[derive(Debug, Clone)]
pub struct CatalogInput;

pub struct CatalogOutput;

#[derive(Debug, Default, PartialEq)]
pub struct CatalogViewState {
    pub list_id: Option<Uuid>,
    pub items: Vec<String>,
}

impl CatalogViewState {
    pub fn with_id(id: Uuid) -> Self {
        Self {
            list_id: Some(id),
            items: Vec::new(),
        }
    }
}

impl ViewState for CatalogViewState {
    type Input = CatalogInput;

    fn new(_input: Option<CatalogInput>) -> Self {
        Self::default()
    }
}

pub struct CatalogViewModel {
    pub state: Shared<CatalogViewState>,
    pub picker: Option<Callback<String>>,
}

impl StatefulViewModel for CatalogViewModel {
    type ViewState = CatalogViewState;
    type Input = CatalogInput;
    type Output = CatalogOutput;

    fn new(
        state: Shared<CatalogViewState>,
        _input: Option<CatalogInput>,
        _output: Option<CatalogOutput>,
    ) -> Self {
        Self {
            state,
            picker: None,
        }
    }
}

#[view_model]
impl CatalogViewModel {
    pub fn on_add(&self, #[positional] item: String) {
        self.state.update(|state| state.items.push(item));
    }

    pub fn on_pick(&self, index: usize) {
        let picked = self.state.get(|state| state.items.get(index).cloned());
        if let (Some(picked), Some(callback)) = (picked, &self.picker) {
            callback.call(picked);
        }
    }

    pub fn on_clear(&self) {
        self.state.update(|state| state.items.clear());
    }
}

pub type CatalogView = CatalogScreen;

#[screen(id)]
#[view(module = ProductListModule)]
pub struct CatalogScreen {
    pub title: String,
}
