//! Browser-side calls to the products endpoint.

use gloo::net::http::{Request, RequestBuilder};
use product_catalog::{
    ApiRequest, ApiResponse, CatalogError, ClientConfig, Method, Product, create_product_request,
    decode_created, decode_product_list, list_products_request,
};
use product_catalog::api::JSON_CONTENT_TYPE;

fn network_error(e: gloo::net::Error) -> CatalogError {
    CatalogError::Network {
        message: e.to_string(),
    }
}

/// Send a request with the browser's fetch. No timeout, no cancellation.
async fn send(request: ApiRequest) -> Result<ApiResponse, CatalogError> {
    let builder: RequestBuilder = match request.method {
        Method::Get => Request::get(&request.url),
        Method::Post => Request::post(&request.url),
    };

    let response = match request.body {
        Some(body) => {
            builder
                .header("Content-Type", JSON_CONTENT_TYPE)
                .body(body)
                .map_err(network_error)?
                .send()
                .await
        }
        None => builder.send().await,
    }
    .map_err(network_error)?;

    let status = response.status();
    let body = response.text().await.map_err(network_error)?;
    Ok(ApiResponse::new(status, body))
}

pub async fn list_products(config: &ClientConfig) -> Result<Vec<Product>, CatalogError> {
    decode_product_list(send(list_products_request(config)).await?)
}

pub async fn create_product(config: &ClientConfig, product: &Product) -> Result<(), CatalogError> {
    let request = create_product_request(config, product)?;
    decode_created(send(request).await?).map(|_| ())
}
