use async_trait::async_trait;

use crate::domain::errors::GatewayError;

use super::draft::ValidDraft;
use super::model::Product;
use super::value_objects::{ProductId, ProductImage};

/// Port to the remote product catalog.
#[async_trait]
pub trait ProductGateway: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Product>, GatewayError>;
    async fn get_by_id(&self, id: ProductId) -> Result<Product, GatewayError>;
    async fn create(&self, draft: &ValidDraft) -> Result<Product, GatewayError>;
    async fn update(&self, id: ProductId, draft: &ValidDraft) -> Result<Product, GatewayError>;
    async fn remove(&self, id: ProductId) -> Result<(), GatewayError>;
    async fn search(&self, term: &str) -> Result<Vec<Product>, GatewayError>;
    async fn filter_by_category(&self, category: &str) -> Result<Vec<Product>, GatewayError>;
    /// Read-only existence check: failures are reported as `false`.
    async fn has_image(&self, id: ProductId) -> bool;
    async fn download_image(&self, id: ProductId) -> Result<ProductImage, GatewayError>;
    /// Pure derivation, never issues a request.
    fn image_url(&self, id: Option<ProductId>) -> Option<String>;
}
