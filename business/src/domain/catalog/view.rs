use std::collections::BTreeSet;

use crate::domain::product::model::Product;
use crate::domain::product::value_objects::ProductId;

use super::filter::{distinct_categories, filter_by_text};

/// Which server query produced the current collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchMode {
    All,
    Search(String),
    Category(String),
}

impl FetchMode {
    /// Blank search terms and categories fall back to the full list.
    pub fn search(term: &str) -> Self {
        match term.trim() {
            "" => FetchMode::All,
            term => FetchMode::Search(term.to_string()),
        }
    }

    pub fn category(category: &str) -> Self {
        match category.trim() {
            "" => FetchMode::All,
            category => FetchMode::Category(category.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewStatus {
    Loading,
    Ready,
    Errored(String),
}

/// Handed out when a fetch starts; only the newest ticket may apply its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    mode: FetchMode,
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn mode(&self) -> &FetchMode {
        &self.mode
    }
}

/// Immutable copy of the view handed to presentation for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSnapshot {
    pub status: ViewStatus,
    pub mode: FetchMode,
    pub filter_text: String,
    pub categories: Vec<String>,
    pub visible: Vec<Product>,
    pub total: usize,
}

/// Client-side snapshot of the product catalog and its derived views.
#[derive(Debug, Clone)]
pub struct CatalogView {
    generation: u64,
    mode: FetchMode,
    status: ViewStatus,
    products: Vec<Product>,
    categories: BTreeSet<String>,
    filter_text: String,
}

impl Default for CatalogView {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogView {
    pub fn new() -> Self {
        Self {
            generation: 0,
            mode: FetchMode::All,
            status: ViewStatus::Loading,
            products: Vec::new(),
            categories: BTreeSet::new(),
            filter_text: String::new(),
        }
    }

    /// Enters `Loading` and supersedes any fetch still in flight.
    pub fn begin_fetch(&mut self, mode: FetchMode) -> FetchTicket {
        self.generation += 1;
        self.mode = mode.clone();
        self.status = ViewStatus::Loading;
        FetchTicket {
            generation: self.generation,
            mode,
        }
    }

    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Applies a fetch result. Returns `false` and changes nothing when the
    /// ticket has been superseded by a newer fetch.
    pub fn complete_fetch(
        &mut self,
        ticket: &FetchTicket,
        result: Result<Vec<Product>, String>,
    ) -> bool {
        if !self.is_current(ticket) {
            return false;
        }

        match result {
            Ok(products) => {
                if ticket.mode == FetchMode::All {
                    self.categories = distinct_categories(&products);
                }
                self.products = products;
                self.status = ViewStatus::Ready;
            }
            Err(message) => self.status = ViewStatus::Errored(message),
        }
        true
    }

    /// Stored trimmed, so a blank filter shows the whole collection.
    pub fn set_filter_text(&mut self, text: &str) {
        self.filter_text = text.trim().to_string();
    }

    /// Drops the product with `id`. Absent ids leave the collection untouched.
    pub fn remove(&mut self, id: ProductId) -> bool {
        match self.products.iter().position(|p| p.id == id) {
            Some(index) => {
                self.products.remove(index);
                true
            }
            None => false,
        }
    }

    /// Records a product the server just saved and adds its category.
    ///
    /// Only the full list is patched in place, replacing the product with the
    /// same id or appending it. Search and category results are left alone
    /// and `false` is returned: the caller refetches the current mode.
    pub fn apply_saved(&mut self, product: Product) -> bool {
        self.categories.insert(product.category.clone());
        if self.mode != FetchMode::All {
            return false;
        }
        match self.products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => *existing = product,
            None => self.products.push(product),
        }
        true
    }

    pub fn status(&self) -> &ViewStatus {
        &self.status
    }

    pub fn mode(&self) -> &FetchMode {
        &self.mode
    }

    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &BTreeSet<String> {
        &self.categories
    }

    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn visible(&self) -> Vec<&Product> {
        filter_by_text(&self.products, &self.filter_text)
    }

    pub fn snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            status: self.status.clone(),
            mode: self.mode.clone(),
            filter_text: self.filter_text.clone(),
            categories: self.categories.iter().cloned().collect(),
            visible: self.visible().into_iter().cloned().collect(),
            total: self.products.len(),
        }
    }
}
