use bigdecimal::BigDecimal;
use chrono::NaiveDate;

use super::value_objects::{ImageMetadata, ProductId};

/// Client-side copy of a catalog product. The server owns the record.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub brand: String,
    pub category: String,
    pub price: BigDecimal,
    pub quantity: i64,
    pub available: bool,
    pub release_date: Option<NaiveDate>,
    pub image: Option<ImageMetadata>,
}

impl Product {
    /// Constructor for records received from the gateway (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_gateway(
        id: ProductId,
        name: String,
        description: String,
        brand: String,
        category: String,
        price: BigDecimal,
        quantity: i64,
        available: bool,
        release_date: Option<NaiveDate>,
        image: Option<ImageMetadata>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            brand,
            category,
            price,
            quantity,
            available,
            release_date,
            image,
        }
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }
}
