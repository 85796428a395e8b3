use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::NaiveDate;

use business::domain::product::draft::ProductDraft;
use business::domain::product::errors::FieldError;
use business::domain::product::value_objects::{
    MAX_IMAGE_BYTES, ProductImage, content_type_for_extension,
};

use super::command::FieldAssignment;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("form.unknown_field")]
    UnknownField(String),
    #[error("form.invalid_price")]
    InvalidPrice(String),
    #[error("form.invalid_quantity")]
    InvalidQuantity(String),
    #[error("form.invalid_boolean")]
    InvalidBoolean(String),
    #[error("form.invalid_date")]
    InvalidDate(String),
    #[error("form.image")]
    Image(FieldError),
    #[error("form.unreadable_file")]
    UnreadableFile(String),
}

/// Applies typed `key=value` pairs to a draft.
///
/// Returns the path given for `image`, if any; the file is read separately
/// with [`load_image`]. An empty value clears optional fields.
pub fn apply_fields(
    draft: &mut ProductDraft,
    fields: &[FieldAssignment],
) -> Result<Option<PathBuf>, FormError> {
    let mut image_path = None;

    for (key, value) in fields {
        let value = value.trim();
        match key.as_str() {
            "name" => draft.name = value.to_string(),
            "description" | "desc" => draft.description = value.to_string(),
            "brand" => draft.brand = value.to_string(),
            "category" => draft.category = value.to_string(),
            "price" => draft.price = parse_optional(value, FormError::InvalidPrice)?,
            "quantity" | "qty" => draft.quantity = parse_optional(value, FormError::InvalidQuantity)?,
            "available" => draft.available = parse_bool(value)?,
            "release" | "release_date" | "releasedate" | "date" => {
                draft.release_date = match value {
                    "" => None,
                    text => Some(
                        NaiveDate::parse_from_str(text, "%Y-%m-%d")
                            .map_err(|_| FormError::InvalidDate(text.to_string()))?,
                    ),
                }
            }
            "image" => image_path = Some(PathBuf::from(value)).filter(|p| !p.as_os_str().is_empty()),
            other => return Err(FormError::UnknownField(other.to_string())),
        }
    }

    Ok(image_path)
}

fn parse_optional<T: FromStr>(
    value: &str,
    on_error: fn(String) -> FormError,
) -> Result<Option<T>, FormError> {
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<T>()
        .map(Some)
        .map_err(|_| on_error(value.to_string()))
}

fn parse_bool(value: &str) -> Result<bool, FormError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Ok(true),
        "false" | "no" | "n" | "0" => Ok(false),
        _ => Err(FormError::InvalidBoolean(value.to_string())),
    }
}

/// Reads an image file for upload, guessing its content type from the
/// extension. Oversized files are rejected before their bytes are read.
pub async fn load_image(path: &Path) -> Result<ProductImage, FormError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();
    let content_type = content_type_for_extension(extension).ok_or_else(|| {
        FormError::Image(FieldError::ImageUnsupportedType(extension.to_string()))
    })?;

    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|e| FormError::UnreadableFile(format!("{}: {}", path.display(), e)))?;
    let len = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
    if len > MAX_IMAGE_BYTES {
        return Err(FormError::Image(FieldError::ImageTooLarge(len)));
    }

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| FormError::UnreadableFile(format!("{}: {}", path.display(), e)))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());

    ProductImage::new(file_name, content_type, bytes).map_err(FormError::Image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use std::io::Write;

    fn assign(pairs: &[(&str, &str)]) -> Vec<FieldAssignment> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn should_fill_draft_from_fields() {
        let mut draft = ProductDraft::default();

        let image = apply_fields(
            &mut draft,
            &assign(&[
                ("name", " Desk Lamp "),
                ("description", "LED, dimmable"),
                ("brand", "Lumo"),
                ("category", "Home"),
                ("price", "34.50"),
                ("qty", "4"),
                ("available", "no"),
                ("release", "2024-03-09"),
            ]),
        )
        .unwrap();

        assert_eq!(image, None);
        assert_eq!(draft.name, "Desk Lamp");
        assert_eq!(draft.price, Some(BigDecimal::from_str("34.50").unwrap()));
        assert_eq!(draft.quantity, Some(4));
        assert!(!draft.available);
        assert_eq!(draft.release_date, NaiveDate::from_ymd_opt(2024, 3, 9));
    }

    #[test]
    fn should_clear_optional_fields_with_empty_value() {
        let mut draft = ProductDraft {
            price: Some(BigDecimal::from(3)),
            release_date: NaiveDate::from_ymd_opt(2020, 1, 1),
            ..ProductDraft::default()
        };

        apply_fields(&mut draft, &assign(&[("price", ""), ("date", "")])).unwrap();

        assert_eq!(draft.price, None);
        assert_eq!(draft.release_date, None);
    }

    #[test]
    fn should_return_image_path() {
        let mut draft = ProductDraft::default();
        let image = apply_fields(&mut draft, &assign(&[("image", "/tmp/lamp.png")])).unwrap();
        assert_eq!(image, Some(PathBuf::from("/tmp/lamp.png")));
    }

    #[test]
    fn should_reject_malformed_values() {
        let mut draft = ProductDraft::default();

        assert_eq!(
            apply_fields(&mut draft, &assign(&[("price", "cheap")])),
            Err(FormError::InvalidPrice("cheap".to_string()))
        );
        assert_eq!(
            apply_fields(&mut draft, &assign(&[("quantity", "1.5")])),
            Err(FormError::InvalidQuantity("1.5".to_string()))
        );
        assert_eq!(
            apply_fields(&mut draft, &assign(&[("available", "maybe")])),
            Err(FormError::InvalidBoolean("maybe".to_string()))
        );
        assert_eq!(
            apply_fields(&mut draft, &assign(&[("release", "09/03/2024")])),
            Err(FormError::InvalidDate("09/03/2024".to_string()))
        );
        assert_eq!(
            apply_fields(&mut draft, &assign(&[("colour", "red")])),
            Err(FormError::UnknownField("colour".to_string()))
        );
    }

    #[tokio::test]
    async fn should_load_png_image() {
        let mut file = tempfile::Builder::new().suffix(".PNG").tempfile().unwrap();
        file.write_all(&[0x89, b'P', b'N', b'G']).unwrap();

        let image = load_image(file.path()).await.unwrap();

        assert_eq!(image.content_type(), "image/png");
        assert_eq!(image.bytes(), &[0x89, b'P', b'N', b'G']);
    }

    #[tokio::test]
    async fn should_reject_unsupported_extension() {
        let file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();

        let result = load_image(file.path()).await;

        assert_eq!(
            result,
            Err(FormError::Image(FieldError::ImageUnsupportedType(
                "pdf".to_string()
            )))
        );
    }

    #[tokio::test]
    async fn should_reject_oversized_image() {
        let file = tempfile::Builder::new().suffix(".jpg").tempfile().unwrap();
        file.as_file().set_len((MAX_IMAGE_BYTES + 1) as u64).unwrap();

        let result = load_image(file.path()).await;

        assert_eq!(
            result,
            Err(FormError::Image(FieldError::ImageTooLarge(MAX_IMAGE_BYTES + 1)))
        );
    }

    #[tokio::test]
    async fn should_report_missing_file() {
        let result = load_image(Path::new("/nonexistent/lamp.png")).await;
        assert!(matches!(result, Err(FormError::UnreadableFile(_))));
    }
}
