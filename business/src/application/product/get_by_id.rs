use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::gateway::ProductGateway;
use crate::domain::product::model::Product;
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};

pub struct GetProductByIdUseCaseImpl {
    pub gateway: Arc<dyn ProductGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> Result<Product, ProductError> {
        self.logger.info(&format!("Fetching product: {}", params.id));
        let product = self.gateway.get_by_id(params.id).await?;
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::GatewayError;
    use crate::domain::product::value_objects::ProductId;
    use crate::test_support::{MockGateway, mock_logger, product};

    #[tokio::test]
    async fn should_return_product_when_exists() {
        let mut mock_gateway = MockGateway::new();
        mock_gateway
            .expect_get_by_id()
            .withf(|id| id.get() == 5)
            .returning(|_| Ok(product(5, "Monitor", "Displays")));

        let use_case = GetProductByIdUseCaseImpl {
            gateway: Arc::new(mock_gateway),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductByIdParams {
                id: ProductId::new(5),
            })
            .await;

        assert_eq!(result.unwrap().name, "Monitor");
    }

    #[tokio::test]
    async fn should_return_not_found_when_product_does_not_exist() {
        let mut mock_gateway = MockGateway::new();
        mock_gateway
            .expect_get_by_id()
            .returning(|_| Err(GatewayError::NotFound));

        let use_case = GetProductByIdUseCaseImpl {
            gateway: Arc::new(mock_gateway),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductByIdParams {
                id: ProductId::new(404),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }
}
