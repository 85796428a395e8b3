use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::gateway::ProductGateway;
use crate::domain::product::model::Product;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub gateway: Arc<dyn ProductGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.draft.name));

        let draft = params.draft.validate().inspect_err(|errors| {
            self.logger.warn(&format!(
                "Product draft rejected before submission, invalid fields: {:?}",
                errors.fields()
            ))
        })?;

        let product = self.gateway.create(&draft).await?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::GatewayError;
    use crate::domain::product::draft::ProductDraft;
    use crate::test_support::{MockGateway, draft, mock_logger, product};

    #[tokio::test]
    async fn should_create_product_when_draft_is_valid() {
        let mut mock_gateway = MockGateway::new();
        mock_gateway
            .expect_create()
            .withf(|d| d.name() == "Mechanical Keyboard" && d.quantity() == 3)
            .times(1)
            .returning(|_| Ok(product(7, "Mechanical Keyboard", "Peripherals")));

        let use_case = CreateProductUseCaseImpl {
            gateway: Arc::new(mock_gateway),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                draft: draft("Mechanical Keyboard"),
            })
            .await;

        let created = result.unwrap();
        assert_eq!(created.id.get(), 7);
        assert_eq!(created.name, "Mechanical Keyboard");
    }

    #[tokio::test]
    async fn should_not_call_gateway_when_name_is_empty() {
        let mut mock_gateway = MockGateway::new();
        mock_gateway.expect_create().never();

        let use_case = CreateProductUseCaseImpl {
            gateway: Arc::new(mock_gateway),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                draft: ProductDraft {
                    name: "".to_string(),
                    ..draft("ignored")
                },
            })
            .await;

        match result.unwrap_err() {
            ProductError::Validation(errors) => assert_eq!(errors.fields(), vec!["name"]),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn should_surface_server_rejection_message() {
        let mut mock_gateway = MockGateway::new();
        mock_gateway
            .expect_create()
            .returning(|_| Err(GatewayError::rejected("Required part 'imgfile' is not present.")));

        let use_case = CreateProductUseCaseImpl {
            gateway: Arc::new(mock_gateway),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                draft: draft("Mouse"),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Rejected(ref m) if m == "Required part 'imgfile' is not present."
        ));
    }
}
