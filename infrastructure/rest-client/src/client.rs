use std::time::Duration;

use reqwest::{Client, Url};

use business::domain::product::value_objects::ProductId;

#[derive(Debug, thiserror::Error)]
pub enum ClientConfigError {
    #[error("client.invalid_base_url")]
    InvalidBaseUrl(String),
    #[error("client.build")]
    Build(String),
}

/// Shared HTTP client for the catalog REST API.
pub struct CatalogApiClient {
    pub client: Client,
    base_url: Url,
}

impl CatalogApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientConfigError> {
        let base_url = Url::parse(base_url.trim())
            .map_err(|e| ClientConfigError::InvalidBaseUrl(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientConfigError::InvalidBaseUrl(base_url.to_string()));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientConfigError::Build(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    /// Returns `{base}/product`.
    pub fn products_url(&self) -> Url {
        self.endpoint(["product"])
    }

    /// Returns `{base}/product/{id}`.
    pub fn product_url(&self, id: ProductId) -> Url {
        self.endpoint(["product".to_string(), id.to_string()])
    }

    /// Returns `{base}/product/{id}/image`.
    pub fn image_url(&self, id: ProductId) -> Url {
        self.endpoint(["product".to_string(), id.to_string(), "image".to_string()])
    }

    /// Returns `{base}/product/search`; the keyword goes in the query string.
    pub fn search_url(&self) -> Url {
        self.endpoint(["product", "search"])
    }

    /// Returns `{base}/products/category/{category}` with the category
    /// percent-encoded as a single path segment.
    pub fn category_url(&self, category: &str) -> Url {
        self.endpoint(["products", "category", category])
    }

    fn endpoint<I>(&self, segments: I) -> Url
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut url = self.base_url.clone();
        // Checked in `new`: the base URL always has path segments.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> CatalogApiClient {
        CatalogApiClient::new(base, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn should_build_image_url_under_base_path() {
        let api = client("http://localhost:8081/api");
        assert_eq!(
            api.image_url(ProductId::new(7)).as_str(),
            "http://localhost:8081/api/product/7/image"
        );
    }

    #[test]
    fn should_ignore_trailing_slash_in_base_url() {
        let api = client("http://localhost:8081/api/");
        assert_eq!(
            api.product_url(ProductId::new(12)).as_str(),
            "http://localhost:8081/api/product/12"
        );
        assert_eq!(
            api.products_url().as_str(),
            "http://localhost:8081/api/product"
        );
    }

    #[test]
    fn should_encode_category_as_one_path_segment() {
        let api = client("http://localhost:8081/api");
        assert_eq!(
            api.category_url("Garden Tools/Outdoor").as_str(),
            "http://localhost:8081/api/products/category/Garden%20Tools%2FOutdoor"
        );
    }

    #[test]
    fn should_build_search_url() {
        let api = client("http://catalog.internal");
        assert_eq!(
            api.search_url().as_str(),
            "http://catalog.internal/product/search"
        );
    }

    #[test]
    fn should_keep_configured_base_url() {
        let api = client("https://catalog.example.com/api");
        assert_eq!(
            api.products_url().as_str(),
            "https://catalog.example.com/api/product"
        );
    }

    #[test]
    fn should_reject_unusable_base_url() {
        assert!(CatalogApiClient::new("not a url", Duration::from_secs(1)).is_err());
        assert!(CatalogApiClient::new("mailto:admin@example.com", Duration::from_secs(1)).is_err());
    }
}
