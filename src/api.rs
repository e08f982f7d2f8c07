//! Requests and responses for the products endpoint.
//!
//! Nothing here performs I/O. Callers build an [`ApiRequest`], send it with
//! whatever HTTP stack they have, and hand the [`ApiResponse`] back to the
//! matching decoder.

use std::fmt;

use crate::config::ClientConfig;
use crate::error::CatalogError;
use crate::product::Product;

pub const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTTP request ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    /// JSON body, if any.
    pub body: Option<String>,
}

/// Status and raw body of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    fn ensure_success(self) -> Result<Self, CatalogError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(CatalogError::Status {
                status: self.status,
                body: self.body,
            })
        }
    }
}

/// `GET <base_url>/products`
pub fn list_products_request(config: &ClientConfig) -> ApiRequest {
    ApiRequest {
        method: Method::Get,
        url: config.products_url(),
        body: None,
    }
}

/// `POST <base_url>/products` with the product as JSON.
pub fn create_product_request(
    config: &ClientConfig,
    product: &Product,
) -> Result<ApiRequest, CatalogError> {
    let body = serde_json::to_string(product).map_err(|e| CatalogError::Encode {
        message: e.to_string(),
    })?;

    Ok(ApiRequest {
        method: Method::Post,
        url: config.products_url(),
        body: Some(body),
    })
}

/// Decode the list response, keeping the backend's order.
///
/// A `null` body is how the backend reports an empty table.
pub fn decode_product_list(response: ApiResponse) -> Result<Vec<Product>, CatalogError> {
    let response = response.ensure_success()?;
    let products: Option<Vec<Product>> =
        serde_json::from_str(&response.body).map_err(|e| CatalogError::Decode {
            message: e.to_string(),
        })?;
    Ok(products.unwrap_or_default())
}

/// Decode the create response.
///
/// The payload only confirms success, so it is returned untyped.
pub fn decode_created(response: ApiResponse) -> Result<serde_json::Value, CatalogError> {
    let response = response.ensure_success()?;
    if response.body.trim().is_empty() {
        return Ok(serde_json::Value::Null);
    }
    serde_json::from_str(&response.body).map_err(|e| CatalogError::Decode {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_request() {
        let request = list_products_request(&ClientConfig::default());
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.url, "http://localhost:8084/products");
        assert!(request.body.is_none());
    }

    #[test]
    fn test_create_request_body() {
        let product = Product::new("Widget", "A widget", "9.99", "http://x/y.png");
        let request = create_product_request(&ClientConfig::default(), &product).unwrap();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url, "http://localhost:8084/products");

        let body: serde_json::Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "name": "Widget",
                "description": "A widget",
                "price": "9.99",
                "image_url": "http://x/y.png",
            })
        );
    }

    #[test]
    fn test_decode_list_preserves_order() {
        let body = r#"[
            {"id":2,"name":"B","description":"second","price":2,"image_url":""},
            {"id":1,"name":"A","description":"first","price":1.5,"image_url":""}
        ]"#;
        let products = decode_product_list(ApiResponse::new(200, body)).unwrap();
        let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
        assert_eq!(products[1].price, "1.5");
    }

    #[test]
    fn test_decode_list_null_is_empty() {
        let products = decode_product_list(ApiResponse::new(200, "null")).unwrap();
        assert!(products.is_empty());
    }

    #[test]
    fn test_decode_list_status_error() {
        let err = decode_product_list(ApiResponse::new(
            500,
            r#"{"error":"Failed to fetch products"}"#,
        ))
        .unwrap_err();
        match err {
            CatalogError::Status { status, body } => {
                assert_eq!(status, 500);
                assert!(body.contains("Failed to fetch products"));
            }
            other => panic!("Expected Status, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_list_malformed() {
        let err = decode_product_list(ApiResponse::new(200, "<html>")).unwrap_err();
        assert!(matches!(err, CatalogError::Decode { .. }));
    }

    #[test]
    fn test_decode_created_message() {
        let value = decode_created(ApiResponse::new(
            201,
            r#"{"message":"Product created successfully!"}"#,
        ))
        .unwrap();
        assert_eq!(value["message"], "Product created successfully!");
    }

    #[test]
    fn test_decode_created_empty_body() {
        let value = decode_created(ApiResponse::new(204, "")).unwrap();
        assert!(value.is_null());
    }

    #[test]
    fn test_decode_created_bad_request() {
        let err = decode_created(ApiResponse::new(400, "bad price")).unwrap_err();
        assert_eq!(err.error_code(), "CATALOG_HTTP_STATUS");
    }
}
