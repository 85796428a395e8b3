use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use num_traits::Zero;

use super::errors::{FieldError, ValidationErrors};
use super::model::Product;
use super::value_objects::ProductImage;

/// Editable product fields awaiting create or update submission.
///
/// `price` and `quantity` are optional so that an empty form field can be
/// told apart from an explicit value.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub brand: String,
    pub category: String,
    pub price: Option<BigDecimal>,
    pub quantity: Option<i64>,
    pub available: bool,
    pub release_date: Option<NaiveDate>,
    pub image: Option<ProductImage>,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            brand: String::new(),
            category: String::new(),
            price: None,
            quantity: None,
            available: true,
            release_date: None,
            image: None,
        }
    }
}

/// Prefills an edit form. The image is left empty, meaning "keep existing".
impl From<&Product> for ProductDraft {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            brand: product.brand.clone(),
            category: product.category.clone(),
            price: Some(product.price.clone()),
            quantity: Some(product.quantity),
            available: product.available,
            release_date: product.release_date,
            image: None,
        }
    }
}

impl ProductDraft {
    /// Checks every required field and reports all failures at once.
    pub fn validate(self) -> Result<ValidDraft, ValidationErrors> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError::NameRequired);
        }
        if self.description.trim().is_empty() {
            errors.push(FieldError::DescriptionRequired);
        }
        if self.brand.trim().is_empty() {
            errors.push(FieldError::BrandRequired);
        }
        if self.category.trim().is_empty() {
            errors.push(FieldError::CategoryRequired);
        }

        let price = match self.price {
            Some(price) if price > BigDecimal::zero() => Some(price),
            _ => {
                errors.push(FieldError::PriceNotPositive);
                None
            }
        };

        let quantity = match self.quantity {
            Some(quantity) if quantity >= 0 => Some(quantity),
            _ => {
                errors.push(FieldError::QuantityNegative);
                None
            }
        };

        match (price, quantity) {
            (Some(price), Some(quantity)) if errors.is_empty() => Ok(ValidDraft {
                name: self.name.trim().to_string(),
                description: self.description.trim().to_string(),
                brand: self.brand.trim().to_string(),
                category: self.category.trim().to_string(),
                price,
                quantity,
                available: self.available,
                release_date: self.release_date,
                image: self.image,
            }),
            _ => Err(ValidationErrors::new(errors)),
        }
    }
}

/// A draft that passed client-side validation. Only these reach the gateway.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidDraft {
    name: String,
    description: String,
    brand: String,
    category: String,
    price: BigDecimal,
    quantity: i64,
    available: bool,
    release_date: Option<NaiveDate>,
    image: Option<ProductImage>,
}

impl ValidDraft {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn price(&self) -> &BigDecimal {
        &self.price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn available(&self) -> bool {
        self.available
    }

    pub fn release_date(&self) -> Option<NaiveDate> {
        self.release_date
    }

    pub fn image(&self) -> Option<&ProductImage> {
        self.image.as_ref()
    }
}
