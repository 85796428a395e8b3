use business::domain::errors::GatewayError;
use business::domain::product::errors::{FieldError, ProductError};
use business::domain::product::value_objects::MAX_IMAGE_BYTES;

use super::command::CommandError;
use super::form::FormError;

/// Turns an error code into the text shown at the prompt.
pub trait IntoConsoleMessage {
    fn into_console_message(self) -> String;
}

impl IntoConsoleMessage for FieldError {
    fn into_console_message(self) -> String {
        match self {
            FieldError::NameRequired => "Product name is required".to_string(),
            FieldError::DescriptionRequired => "Description is required".to_string(),
            FieldError::BrandRequired => "Brand is required".to_string(),
            FieldError::CategoryRequired => "Category is required".to_string(),
            FieldError::PriceNotPositive => "Price must be greater than 0".to_string(),
            FieldError::QuantityNegative => "Quantity must be 0 or greater".to_string(),
            FieldError::ImageUnsupportedType(_) => {
                "Please select a valid image file (JPEG, PNG, GIF, WebP)".to_string()
            }
            FieldError::ImageTooLarge(_) => format!(
                "Image size must be less than {}MB",
                MAX_IMAGE_BYTES / (1024 * 1024)
            ),
        }
    }
}

impl IntoConsoleMessage for GatewayError {
    fn into_console_message(self) -> String {
        match self {
            GatewayError::Unreachable => {
                "Could not reach the catalog API. Please check if your backend is running."
                    .to_string()
            }
            GatewayError::NotFound => "Product not found".to_string(),
            GatewayError::Status { status, message } if message.trim().is_empty() => {
                format!("Server responded with status {}", status)
            }
            GatewayError::Status { status, message } => {
                format!("Server responded with status {}: {}", status, message.trim())
            }
            GatewayError::Rejected(message) => rejected(message),
            GatewayError::InvalidRequest(message) => {
                format!("Could not build the request: {}", message)
            }
            GatewayError::InvalidResponse(_) => {
                "The catalog API sent a response that could not be read".to_string()
            }
        }
    }
}

impl IntoConsoleMessage for ProductError {
    fn into_console_message(self) -> String {
        match self {
            ProductError::Validation(errors) => errors
                .errors()
                .iter()
                .map(|e| format!("  {}: {}", e.field(), e.clone().into_console_message()))
                .collect::<Vec<_>>()
                .join("\n"),
            ProductError::NotFound => "Product not found".to_string(),
            ProductError::Rejected(message) => rejected(message),
            ProductError::Gateway(err) => err.into_console_message(),
        }
    }
}

impl IntoConsoleMessage for FormError {
    fn into_console_message(self) -> String {
        match self {
            FormError::UnknownField(field) => format!(
                "Unknown field '{}'. Fields: name, description, brand, category, price, quantity, available, release, image",
                field
            ),
            FormError::InvalidPrice(value) => format!("'{}' is not a valid price", value),
            FormError::InvalidQuantity(value) => format!("'{}' is not a whole number", value),
            FormError::InvalidBoolean(value) => {
                format!("'{}' is not yes/no for available", value)
            }
            FormError::InvalidDate(value) => {
                format!("'{}' is not a date, expected YYYY-MM-DD", value)
            }
            FormError::Image(err) => err.into_console_message(),
            FormError::UnreadableFile(reason) => format!("Could not read file {}", reason),
        }
    }
}

impl IntoConsoleMessage for CommandError {
    fn into_console_message(self) -> String {
        match self {
            CommandError::Empty => String::new(),
            CommandError::Unknown(name) => {
                format!("Unknown command '{}'. Type 'help' for the list.", name)
            }
            CommandError::MissingArgument(arg) => format!("Missing argument: {}", arg),
            CommandError::InvalidId(value) => format!("'{}' is not a product id", value),
            CommandError::InvalidField(value) => {
                format!("Expected key=value, got '{}'", value)
            }
            CommandError::UnclosedQuote => "Unclosed quote".to_string(),
        }
    }
}

fn rejected(message: String) -> String {
    match message.trim() {
        "" => "The server rejected the request".to_string(),
        message => message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::product::errors::ValidationErrors;

    #[test]
    fn should_list_every_invalid_field() {
        let err = ProductError::Validation(ValidationErrors::new(vec![
            FieldError::NameRequired,
            FieldError::PriceNotPositive,
        ]));

        assert_eq!(
            err.into_console_message(),
            "  name: Product name is required\n  price: Price must be greater than 0"
        );
    }

    #[test]
    fn should_describe_image_errors() {
        assert_eq!(
            FieldError::ImageUnsupportedType("application/pdf".to_string()).into_console_message(),
            "Please select a valid image file (JPEG, PNG, GIF, WebP)"
        );
        assert_eq!(
            FieldError::ImageTooLarge(6_000_000).into_console_message(),
            "Image size must be less than 5MB"
        );
    }

    #[test]
    fn should_show_server_rejection_message() {
        assert_eq!(
            ProductError::Rejected("Product name already exists".to_string())
                .into_console_message(),
            "Product name already exists"
        );
        assert_eq!(
            ProductError::Rejected(" ".to_string()).into_console_message(),
            "The server rejected the request"
        );
    }

    #[test]
    fn should_describe_transport_failures() {
        assert_eq!(
            ProductError::Gateway(GatewayError::status(400, "Product not Found"))
                .into_console_message(),
            "Server responded with status 400: Product not Found"
        );
        assert_eq!(
            GatewayError::status(503, "").into_console_message(),
            "Server responded with status 503"
        );
        assert!(
            GatewayError::unreachable()
                .into_console_message()
                .contains("backend is running")
        );
    }

    #[test]
    fn should_describe_form_errors() {
        assert_eq!(
            FormError::InvalidPrice("cheap".to_string()).into_console_message(),
            "'cheap' is not a valid price"
        );
        assert_eq!(
            FormError::Image(FieldError::ImageTooLarge(1)).into_console_message(),
            "Image size must be less than 5MB"
        );
    }
}
