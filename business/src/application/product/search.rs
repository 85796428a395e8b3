use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::gateway::ProductGateway;
use crate::domain::product::model::Product;
use crate::domain::product::use_cases::search::{SearchProductsParams, SearchProductsUseCase};

pub struct SearchProductsUseCaseImpl {
    pub gateway: Arc<dyn ProductGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SearchProductsUseCase for SearchProductsUseCaseImpl {
    async fn execute(&self, params: SearchProductsParams) -> Result<Vec<Product>, ProductError> {
        let term = params.term.trim();
        self.logger.info(&format!("Searching products: {}", term));
        let products = self.gateway.search(term).await?;
        self.logger.info(&format!(
            "Search '{}' matched {} products",
            term,
            products.len()
        ));
        Ok(products)
    }
}
