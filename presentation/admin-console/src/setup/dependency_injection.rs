use std::sync::Arc;

use business::application::catalog::controller::{CatalogController, CatalogUseCases};
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::filter_by_category::FilterByCategoryUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::search::SearchProductsUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::domain::logger::Logger;
use business::domain::product::gateway::ProductGateway;
use logger::TracingLogger;
use rest_client::client::CatalogApiClient;
use rest_client::product::gateway::ProductGatewayRest;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub controller: Arc<CatalogController>,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        // Infrastructure adapters
        let api_client = CatalogApiClient::new(&config.api.base_url, config.api.timeout)?;
        let gateway: Arc<dyn ProductGateway> =
            Arc::new(ProductGatewayRest::new(api_client, logger.clone()));

        tracing::info!("Catalog API at {}", config.api.base_url);
        let controller = build_controller(gateway, logger);

        Ok(Self { controller })
    }
}

/// Wires the product use cases around one gateway and hands them to the controller.
pub fn build_controller(
    gateway: Arc<dyn ProductGateway>,
    logger: Arc<dyn Logger>,
) -> Arc<CatalogController> {
    let use_cases = CatalogUseCases {
        get_all: Arc::new(GetAllProductsUseCaseImpl {
            gateway: gateway.clone(),
            logger: logger.clone(),
        }),
        get_by_id: Arc::new(GetProductByIdUseCaseImpl {
            gateway: gateway.clone(),
            logger: logger.clone(),
        }),
        search: Arc::new(SearchProductsUseCaseImpl {
            gateway: gateway.clone(),
            logger: logger.clone(),
        }),
        filter_by_category: Arc::new(FilterByCategoryUseCaseImpl {
            gateway: gateway.clone(),
            logger: logger.clone(),
        }),
        create: Arc::new(CreateProductUseCaseImpl {
            gateway: gateway.clone(),
            logger: logger.clone(),
        }),
        update: Arc::new(UpdateProductUseCaseImpl {
            gateway: gateway.clone(),
            logger: logger.clone(),
        }),
        delete: Arc::new(DeleteProductUseCaseImpl {
            gateway: gateway.clone(),
            logger: logger.clone(),
        }),
    };

    Arc::new(CatalogController::new(use_cases, gateway, logger))
}
