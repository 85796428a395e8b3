use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::gateway::ProductGateway;
use crate::domain::product::model::Product;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub gateway: Arc<dyn ProductGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger.info(&format!("Updating product: {}", params.id));

        let draft = params.draft.validate().inspect_err(|errors| {
            self.logger.warn(&format!(
                "Update of product {} rejected before submission, invalid fields: {:?}",
                params.id,
                errors.fields()
            ))
        })?;

        if draft.image().is_none() {
            self.logger
                .debug(&format!("Keeping existing image for product {}", params.id));
        }

        let product = self.gateway.update(params.id, &draft).await?;

        self.logger.info(&format!("Product updated: {}", product.id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::GatewayError;
    use crate::domain::product::draft::ProductDraft;
    use crate::domain::product::value_objects::{ProductId, ProductImage};
    use crate::test_support::{MockGateway, draft, mock_logger, product};

    #[tokio::test]
    async fn should_update_product_without_replacing_image() {
        let mut mock_gateway = MockGateway::new();
        mock_gateway
            .expect_update()
            .withf(|id, d| id.get() == 3 && d.image().is_none())
            .times(1)
            .returning(|_, _| Ok(product(3, "Renamed", "Peripherals")));

        let use_case = UpdateProductUseCaseImpl {
            gateway: Arc::new(mock_gateway),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: ProductId::new(3),
                draft: draft("Renamed"),
            })
            .await;

        assert_eq!(result.unwrap().name, "Renamed");
    }

    #[tokio::test]
    async fn should_send_replacement_image_when_attached() {
        let mut mock_gateway = MockGateway::new();
        mock_gateway
            .expect_update()
            .withf(|id, d| {
                *id == ProductId::new(4)
                    && d.image().map(|i| i.content_type()) == Some("image/png")
            })
            .returning(|_, _| Ok(product(4, "Lamp", "Home")));

        let use_case = UpdateProductUseCaseImpl {
            gateway: Arc::new(mock_gateway),
            logger: mock_logger(),
        };

        let image = ProductImage::new("lamp.png", "image/png", vec![137, 80, 78, 71]).unwrap();
        let result = use_case
            .execute(UpdateProductParams {
                id: ProductId::new(4),
                draft: ProductDraft {
                    image: Some(image),
                    ..draft("Lamp")
                },
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_reject_negative_quantity_before_submission() {
        let mut mock_gateway = MockGateway::new();
        mock_gateway.expect_update().never();

        let use_case = UpdateProductUseCaseImpl {
            gateway: Arc::new(mock_gateway),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: ProductId::new(4),
                draft: ProductDraft {
                    quantity: Some(-2),
                    ..draft("Lamp")
                },
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::Validation(_)));
    }

    #[tokio::test]
    async fn should_return_not_found_when_product_is_gone() {
        let mut mock_gateway = MockGateway::new();
        mock_gateway
            .expect_update()
            .returning(|_, _| Err(GatewayError::NotFound));

        let use_case = UpdateProductUseCaseImpl {
            gateway: Arc::new(mock_gateway),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: ProductId::new(99),
                draft: draft("Ghost"),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }
}
