use std::sync::Arc;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{RequestBuilder, Response, StatusCode, header};

use business::domain::errors::GatewayError;
use business::domain::logger::Logger;
use business::domain::product::draft::ValidDraft;
use business::domain::product::gateway::ProductGateway;
use business::domain::product::model::Product;
use business::domain::product::value_objects::{ProductId, ProductImage};

use super::dto::{ProductDto, ProductPayload};
use crate::client::CatalogApiClient;

const PRODUCT_PART: &str = "prod";
const IMAGE_PART: &str = "imgfile";

/// `ProductGateway` backed by the catalog REST API.
pub struct ProductGatewayRest {
    api: CatalogApiClient,
    logger: Arc<dyn Logger>,
}

impl ProductGatewayRest {
    pub fn new(api: CatalogApiClient, logger: Arc<dyn Logger>) -> Self {
        Self { api, logger }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, GatewayError> {
        let response = request.send().await.map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::NOT_FOUND {
            return Err(GatewayError::NotFound);
        }

        let body = response.text().await.unwrap_or_default();
        let message = match body.trim() {
            "" => status.to_string(),
            text => text.to_string(),
        };
        self.logger
            .warn(&format!("Catalog API answered {}: {}", status, message));
        Err(GatewayError::status(status.as_u16(), message))
    }

    async fn fetch_list(&self, request: RequestBuilder) -> Result<Vec<Product>, GatewayError> {
        let response = self.send(request).await?;
        let dtos: Vec<ProductDto> = response
            .json()
            .await
            .map_err(|e| GatewayError::invalid_response(e.to_string()))?;
        Ok(dtos.into_iter().map(ProductDto::into_domain).collect())
    }

    async fn fetch_one(&self, request: RequestBuilder) -> Result<Product, GatewayError> {
        let response = self.send(request).await?;
        let dto: ProductDto = response
            .json()
            .await
            .map_err(|e| GatewayError::invalid_response(e.to_string()))?;
        Ok(dto.into_domain())
    }

    /// Create and update share this path: a refused draft comes back as the
    /// server's own message.
    async fn submit(&self, request: RequestBuilder) -> Result<Product, GatewayError> {
        self.fetch_one(request).await.map_err(|e| match e {
            GatewayError::Status { message, .. } => GatewayError::Rejected(message),
            other => other,
        })
    }

    fn multipart(payload: &ProductPayload<'_>, draft: &ValidDraft) -> Result<Form, GatewayError> {
        let json = serde_json::to_string(payload)
            .map_err(|e| GatewayError::invalid_request(e.to_string()))?;
        let product_part = Part::text(json)
            .mime_str("application/json")
            .map_err(|e| GatewayError::invalid_request(e.to_string()))?;

        let mut form = Form::new().part(PRODUCT_PART, product_part);
        if let Some(image) = draft.image() {
            let image_part = Part::bytes(image.bytes().to_vec())
                .file_name(image.file_name().to_string())
                .mime_str(image.content_type())
                .map_err(|e| GatewayError::invalid_request(e.to_string()))?;
            form = form.part(IMAGE_PART, image_part);
        }
        Ok(form)
    }

    fn transport_error(&self, err: reqwest::Error) -> GatewayError {
        self.logger
            .error(&format!("Catalog API request failed: {}", err));
        if err.is_decode() {
            GatewayError::invalid_response(err.to_string())
        } else if err.is_builder() {
            GatewayError::invalid_request(err.to_string())
        } else {
            GatewayError::Unreachable
        }
    }
}

#[async_trait]
impl ProductGateway for ProductGatewayRest {
    async fn list_all(&self) -> Result<Vec<Product>, GatewayError> {
        self.fetch_list(self.api.client.get(self.api.products_url()))
            .await
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Product, GatewayError> {
        self.fetch_one(self.api.client.get(self.api.product_url(id)))
            .await
    }

    async fn create(&self, draft: &ValidDraft) -> Result<Product, GatewayError> {
        let form = Self::multipart(&ProductPayload::for_create(draft), draft)?;
        self.submit(self.api.client.post(self.api.products_url()).multipart(form))
            .await
    }

    async fn update(&self, id: ProductId, draft: &ValidDraft) -> Result<Product, GatewayError> {
        let form = Self::multipart(&ProductPayload::for_update(id, draft), draft)?;
        self.submit(self.api.client.put(self.api.product_url(id)).multipart(form))
            .await
    }

    async fn remove(&self, id: ProductId) -> Result<(), GatewayError> {
        self.send(self.api.client.delete(self.api.product_url(id)))
            .await?;
        Ok(())
    }

    async fn search(&self, term: &str) -> Result<Vec<Product>, GatewayError> {
        let request = self
            .api
            .client
            .get(self.api.search_url())
            .query(&[("keyword", term)]);
        self.fetch_list(request).await
    }

    async fn filter_by_category(&self, category: &str) -> Result<Vec<Product>, GatewayError> {
        self.fetch_list(self.api.client.get(self.api.category_url(category)))
            .await
    }

    async fn has_image(&self, id: ProductId) -> bool {
        match self.api.client.head(self.api.image_url(id)).send().await {
            Ok(response) => response.status() == StatusCode::OK,
            Err(e) => {
                self.logger
                    .warn(&format!("Image check for product {} failed: {}", id, e));
                false
            }
        }
    }

    async fn download_image(&self, id: ProductId) -> Result<ProductImage, GatewayError> {
        let response = self
            .send(self.api.client.get(self.api.image_url(id)))
            .await?;

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| GatewayError::invalid_response(e.to_string()))?;

        Ok(ProductImage::from_server(
            format!("product-{}", id),
            content_type,
            bytes.to_vec(),
        ))
    }

    fn image_url(&self, id: Option<ProductId>) -> Option<String> {
        match id {
            Some(id) if id.is_assigned() => Some(self.api.image_url(id).to_string()),
            _ => {
                self.logger
                    .warn("Product ID is missing for image URL generation");
                None
            }
        }
    }
}
