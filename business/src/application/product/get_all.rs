use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::gateway::ProductGateway;
use crate::domain::product::model::Product;
use crate::domain::product::use_cases::get_all::GetAllProductsUseCase;

pub struct GetAllProductsUseCaseImpl {
    pub gateway: Arc<dyn ProductGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Product>, ProductError> {
        self.logger.info("Fetching all products");
        let products = self.gateway.list_all().await?;
        self.logger
            .info(&format!("Found {} products", products.len()));
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::GatewayError;
    use crate::test_support::{MockGateway, mock_logger, product};

    #[tokio::test]
    async fn should_return_all_products_when_requested() {
        let mut mock_gateway = MockGateway::new();
        mock_gateway.expect_list_all().returning(|| {
            Ok(vec![
                product(1, "Desk", "Furniture"),
                product(2, "Chair", "Furniture"),
            ])
        });

        let use_case = GetAllProductsUseCaseImpl {
            gateway: Arc::new(mock_gateway),
            logger: mock_logger(),
        };

        let products = use_case.execute().await.unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[1].name, "Chair");
    }

    #[tokio::test]
    async fn should_return_gateway_error_when_backend_is_down() {
        let mut mock_gateway = MockGateway::new();
        mock_gateway
            .expect_list_all()
            .returning(|| Err(GatewayError::Unreachable));

        let use_case = GetAllProductsUseCaseImpl {
            gateway: Arc::new(mock_gateway),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;
        assert!(matches!(
            result.unwrap_err(),
            ProductError::Gateway(GatewayError::Unreachable)
        ));
    }
}
