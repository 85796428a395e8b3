use crate::domain::errors::GatewayError;

/// A single client-side validation failure, tied to one draft field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("draft.name_required")]
    NameRequired,
    #[error("draft.description_required")]
    DescriptionRequired,
    #[error("draft.brand_required")]
    BrandRequired,
    #[error("draft.category_required")]
    CategoryRequired,
    #[error("draft.price_not_positive")]
    PriceNotPositive,
    #[error("draft.quantity_negative")]
    QuantityNegative,
    #[error("draft.image_unsupported_type")]
    ImageUnsupportedType(String),
    #[error("draft.image_too_large")]
    ImageTooLarge(usize),
}

impl FieldError {
    /// Name of the form field this error belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            FieldError::NameRequired => "name",
            FieldError::DescriptionRequired => "description",
            FieldError::BrandRequired => "brand",
            FieldError::CategoryRequired => "category",
            FieldError::PriceNotPositive => "price",
            FieldError::QuantityNegative => "quantity",
            FieldError::ImageUnsupportedType(_) | FieldError::ImageTooLarge(_) => "image",
        }
    }
}

/// Every field error found in one draft, in form order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("draft.invalid")]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn for_field(&self, field: &str) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field() == field)
    }

    pub fn fields(&self) -> Vec<&'static str> {
        self.0.iter().map(FieldError::field).collect()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.invalid_draft")]
    Validation(#[from] ValidationErrors),
    #[error("product.not_found")]
    NotFound,
    #[error("product.rejected")]
    Rejected(String),
    #[error("gateway.failure")]
    Gateway(GatewayError),
}

impl From<GatewayError> for ProductError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::NotFound => ProductError::NotFound,
            GatewayError::Rejected(message) => ProductError::Rejected(message),
            other => ProductError::Gateway(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_gateway_not_found_to_product_not_found() {
        let err: ProductError = GatewayError::NotFound.into();
        assert!(matches!(err, ProductError::NotFound));
    }

    #[test]
    fn should_surface_server_rejection_message() {
        let err: ProductError = GatewayError::rejected("Price is required").into();
        assert!(matches!(err, ProductError::Rejected(ref m) if m == "Price is required"));
    }

    #[test]
    fn should_keep_transport_failures_as_gateway_errors() {
        let err: ProductError = GatewayError::Unreachable.into();
        assert!(matches!(err, ProductError::Gateway(GatewayError::Unreachable)));
    }

    #[test]
    fn should_find_error_for_field() {
        let errors = ValidationErrors::new(vec![
            FieldError::NameRequired,
            FieldError::PriceNotPositive,
        ]);
        assert_eq!(errors.fields(), vec!["name", "price"]);
        assert_eq!(errors.for_field("price"), Some(&FieldError::PriceNotPositive));
        assert_eq!(errors.for_field("brand"), None);
    }
}
