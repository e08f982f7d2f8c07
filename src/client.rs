//! Blocking product client over a pluggable transport.

use tracing::{error, info};

use crate::api::{
    ApiRequest, ApiResponse, create_product_request, decode_created, decode_product_list,
    list_products_request,
};
use crate::config::ClientConfig;
use crate::error::CatalogError;
use crate::product::Product;

/// Performs one HTTP exchange.
///
/// Implementations map connection-level failures to
/// [`CatalogError::Network`] and return every received response,
/// including non-2xx ones, as an [`ApiResponse`].
pub trait Transport {
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse, CatalogError>;
}

/// List and create products against one backend.
pub struct ProductClient<T: Transport> {
    config: ClientConfig,
    transport: T,
}

impl<T: Transport> ProductClient<T> {
    pub fn new(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch every product, in the order the backend returns them.
    pub fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        let request = list_products_request(&self.config);
        info!(event = "catalog.api.list_started", url = %request.url);

        let result = self
            .transport
            .send(&request)
            .and_then(decode_product_list);

        match &result {
            Ok(products) => info!(event = "catalog.api.list_completed", count = products.len()),
            Err(e) => error!(
                event = "catalog.api.list_failed",
                error = %e,
                error_code = e.error_code()
            ),
        }
        result
    }

    /// Send one product to the backend.
    pub fn create_product(&self, product: &Product) -> Result<serde_json::Value, CatalogError> {
        let request = create_product_request(&self.config, product)?;
        info!(
            event = "catalog.api.create_started",
            url = %request.url,
            name = %product.name
        );

        let result = self.transport.send(&request).and_then(decode_created);

        match &result {
            Ok(_) => info!(event = "catalog.api.create_completed", name = %product.name),
            Err(e) => error!(
                event = "catalog.api.create_failed",
                error = %e,
                error_code = e.error_code()
            ),
        }
        result
    }
}
