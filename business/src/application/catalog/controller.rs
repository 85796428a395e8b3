use std::sync::Arc;

use tokio::sync::{Mutex, watch};

use crate::domain::catalog::view::{CatalogSnapshot, CatalogView, FetchMode, FetchTicket};
use crate::domain::logger::Logger;
use crate::domain::product::draft::ProductDraft;
use crate::domain::product::errors::ProductError;
use crate::domain::product::gateway::ProductGateway;
use crate::domain::product::model::Product;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use crate::domain::product::use_cases::filter_by_category::{
    FilterByCategoryParams, FilterByCategoryUseCase,
};
use crate::domain::product::use_cases::get_all::GetAllProductsUseCase;
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};
use crate::domain::product::use_cases::search::{SearchProductsParams, SearchProductsUseCase};
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use crate::domain::product::value_objects::{ProductId, ProductImage};

const LIST_FAILED: &str = "Failed to fetch products. Please check if your backend is running.";
const SEARCH_FAILED: &str = "Error searching products";
const CATEGORY_FAILED: &str = "Error filtering products by category";

/// Use cases the catalog controller drives.
pub struct CatalogUseCases {
    pub get_all: Arc<dyn GetAllProductsUseCase>,
    pub get_by_id: Arc<dyn GetProductByIdUseCase>,
    pub search: Arc<dyn SearchProductsUseCase>,
    pub filter_by_category: Arc<dyn FilterByCategoryUseCase>,
    pub create: Arc<dyn CreateProductUseCase>,
    pub update: Arc<dyn UpdateProductUseCase>,
    pub delete: Arc<dyn DeleteProductUseCase>,
}

/// Owns the catalog view and mediates every state-changing interaction.
///
/// The view lock is never held across a gateway call. Overlapping fetches
/// are resolved by generation: only the most recently started one is applied.
/// Confirmed deletes are patched into the view locally, as are saves while the
/// full list is shown. A save during a search or category view refetches it.
pub struct CatalogController {
    use_cases: CatalogUseCases,
    gateway: Arc<dyn ProductGateway>,
    logger: Arc<dyn Logger>,
    view: Mutex<CatalogView>,
    notifier: watch::Sender<CatalogSnapshot>,
}

impl CatalogController {
    pub fn new(
        use_cases: CatalogUseCases,
        gateway: Arc<dyn ProductGateway>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        let view = CatalogView::new();
        let (notifier, _) = watch::channel(view.snapshot());
        Self {
            use_cases,
            gateway,
            logger,
            view: Mutex::new(view),
            notifier,
        }
    }

    /// Receives a fresh snapshot after every applied change.
    pub fn subscribe(&self) -> watch::Receiver<CatalogSnapshot> {
        self.notifier.subscribe()
    }

    pub async fn snapshot(&self) -> CatalogSnapshot {
        self.view.lock().await.snapshot()
    }

    /// Reloads the full list. Also the retry path out of `Errored`.
    pub async fn refresh(&self) -> Result<(), ProductError> {
        self.load(FetchMode::All).await
    }

    /// Server-side search; a blank term reloads the full list.
    pub async fn search(&self, term: &str) -> Result<(), ProductError> {
        self.load(FetchMode::search(term)).await
    }

    /// Server-side category filter; a blank category reloads the full list.
    pub async fn filter_by_category(&self, category: &str) -> Result<(), ProductError> {
        self.load(FetchMode::category(category)).await
    }

    /// Narrows the visible list locally, without a request.
    pub async fn set_filter_text(&self, text: &str) {
        let mut view = self.view.lock().await;
        view.set_filter_text(text);
        self.publish(&view);
    }

    pub async fn product(&self, id: ProductId) -> Result<Product, ProductError> {
        self.use_cases
            .get_by_id
            .execute(GetProductByIdParams { id })
            .await
    }

    /// Deletes on the server, then drops the entry locally without refetching.
    pub async fn delete(&self, id: ProductId) -> Result<(), ProductError> {
        self.use_cases
            .delete
            .execute(DeleteProductParams { id })
            .await?;

        let mut view = self.view.lock().await;
        if !view.remove(id) {
            self.logger
                .debug(&format!("Deleted product {} was not in the current view", id));
        }
        self.publish(&view);
        Ok(())
    }

    pub async fn create(&self, draft: ProductDraft) -> Result<Product, ProductError> {
        let product = self
            .use_cases
            .create
            .execute(CreateProductParams { draft })
            .await?;
        self.reconcile(product.clone()).await;
        Ok(product)
    }

    pub async fn update(&self, id: ProductId, draft: ProductDraft) -> Result<Product, ProductError> {
        let product = self
            .use_cases
            .update
            .execute(UpdateProductParams { id, draft })
            .await?;
        self.reconcile(product.clone()).await;
        Ok(product)
    }

    pub fn image_url(&self, id: Option<ProductId>) -> Option<String> {
        self.gateway.image_url(id)
    }

    pub async fn has_image(&self, id: ProductId) -> bool {
        self.gateway.has_image(id).await
    }

    pub async fn download_image(&self, id: ProductId) -> Result<ProductImage, ProductError> {
        self.logger.info(&format!("Downloading image of product {}", id));
        Ok(self.gateway.download_image(id).await?)
    }

    async fn load(&self, mode: FetchMode) -> Result<(), ProductError> {
        let ticket = {
            let mut view = self.view.lock().await;
            let ticket = view.begin_fetch(mode);
            self.publish(&view);
            ticket
        };

        let result = self.fetch(&ticket).await;

        let mut view = self.view.lock().await;
        match result {
            Ok(products) => {
                if view.complete_fetch(&ticket, Ok(products)) {
                    self.publish(&view);
                } else {
                    self.discard(&ticket);
                }
                Ok(())
            }
            Err(err) => {
                let message = Self::failure_message(ticket.mode()).to_string();
                if view.complete_fetch(&ticket, Err(message)) {
                    self.logger
                        .error(&format!("Fetch {:?} failed: {:?}", ticket.mode(), err));
                    self.publish(&view);
                } else {
                    self.discard(&ticket);
                }
                Err(err)
            }
        }
    }

    async fn fetch(&self, ticket: &FetchTicket) -> Result<Vec<Product>, ProductError> {
        match ticket.mode() {
            FetchMode::All => self.use_cases.get_all.execute().await,
            FetchMode::Search(term) => {
                self.use_cases
                    .search
                    .execute(SearchProductsParams { term: term.clone() })
                    .await
            }
            FetchMode::Category(category) => {
                self.use_cases
                    .filter_by_category
                    .execute(FilterByCategoryParams {
                        category: category.clone(),
                    })
                    .await
            }
        }
    }

    /// Patches the full list in place; search and category results are fetched again.
    async fn reconcile(&self, product: Product) {
        let mode = {
            let mut view = self.view.lock().await;
            if view.apply_saved(product) {
                self.publish(&view);
                return;
            }
            view.mode().clone()
        };

        self.logger
            .debug(&format!("Refetching {:?} after a save", mode));
        // A failed refetch is recorded in the view as Errored.
        let _ = self.load(mode).await;
    }

    fn discard(&self, ticket: &FetchTicket) {
        self.logger.debug(&format!(
            "Discarding stale response for fetch #{} ({:?})",
            ticket.generation(),
            ticket.mode()
        ));
    }

    fn publish(&self, view: &CatalogView) {
        self.notifier.send_replace(view.snapshot());
    }

    fn failure_message(mode: &FetchMode) -> &'static str {
        match mode {
            FetchMode::All => LIST_FAILED,
            FetchMode::Search(_) => SEARCH_FAILED,
            FetchMode::Category(_) => CATEGORY_FAILED,
        }
    }
}
