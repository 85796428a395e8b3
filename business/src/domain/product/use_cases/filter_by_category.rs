use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct FilterByCategoryParams {
    pub category: String,
}

#[async_trait]
pub trait FilterByCategoryUseCase: Send + Sync {
    async fn execute(&self, params: FilterByCategoryParams)
    -> Result<Vec<Product>, ProductError>;
}
