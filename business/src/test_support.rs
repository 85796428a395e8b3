use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use mockall::mock;

use crate::domain::errors::GatewayError;
use crate::domain::logger::Logger;
use crate::domain::product::draft::{ProductDraft, ValidDraft};
use crate::domain::product::gateway::ProductGateway;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::{ProductId, ProductImage};

mock! {
    pub Gateway {}

    #[async_trait]
    impl ProductGateway for Gateway {
        async fn list_all(&self) -> Result<Vec<Product>, GatewayError>;
        async fn get_by_id(&self, id: ProductId) -> Result<Product, GatewayError>;
        async fn create(&self, draft: &ValidDraft) -> Result<Product, GatewayError>;
        async fn update(&self, id: ProductId, draft: &ValidDraft) -> Result<Product, GatewayError>;
        async fn remove(&self, id: ProductId) -> Result<(), GatewayError>;
        async fn search(&self, term: &str) -> Result<Vec<Product>, GatewayError>;
        async fn filter_by_category(&self, category: &str) -> Result<Vec<Product>, GatewayError>;
        async fn has_image(&self, id: ProductId) -> bool;
        async fn download_image(&self, id: ProductId) -> Result<ProductImage, GatewayError>;
        fn image_url(&self, id: Option<ProductId>) -> Option<String>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn product(id: u64, name: &str, category: &str) -> Product {
    Product::from_gateway(
        ProductId::new(id),
        name.to_string(),
        format!("{} description", name),
        "Acme".to_string(),
        category.to_string(),
        BigDecimal::from_str("19.99").unwrap(),
        5,
        true,
        None,
        None,
    )
}

pub fn draft(name: &str) -> ProductDraft {
    ProductDraft {
        name: name.to_string(),
        description: "Mechanical keyboard".to_string(),
        brand: "Keyforge".to_string(),
        category: "Peripherals".to_string(),
        price: Some(BigDecimal::from_str("129.00").unwrap()),
        quantity: Some(3),
        ..ProductDraft::default()
    }
}
