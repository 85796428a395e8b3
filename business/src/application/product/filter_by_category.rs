use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::gateway::ProductGateway;
use crate::domain::product::model::Product;
use crate::domain::product::use_cases::filter_by_category::{
    FilterByCategoryParams, FilterByCategoryUseCase,
};

pub struct FilterByCategoryUseCaseImpl {
    pub gateway: Arc<dyn ProductGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl FilterByCategoryUseCase for FilterByCategoryUseCaseImpl {
    async fn execute(
        &self,
        params: FilterByCategoryParams,
    ) -> Result<Vec<Product>, ProductError> {
        self.logger
            .info(&format!("Fetching products in category: {}", params.category));
        let products = self.gateway.filter_by_category(&params.category).await?;
        self.logger.info(&format!(
            "Category '{}' holds {} products",
            params.category,
            products.len()
        ));
        Ok(products)
    }
}
