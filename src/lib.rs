//! # product-catalog
//!
//! Client side of a small product catalog: a creation form and a product
//! list backed by a REST service exposing `GET`/`POST /products`.
//!
//! The library stays free of I/O. [`api`] builds requests and decodes
//! responses, and [`ProductClient`] drives them through any [`Transport`].
//! The web front end reuses the same builders over the browser's fetch.
//!
//! ## Example
//!
//! ```
//! use product_catalog::{ClientConfig, FormField, ProductForm, create_product_request};
//!
//! let mut form = ProductForm::new();
//! form.set(FormField::Name, "Widget");
//! form.set(FormField::Price, "9.99");
//!
//! let request = create_product_request(&ClientConfig::default(), &form.to_product()).unwrap();
//! assert_eq!(request.url, "http://localhost:8084/products");
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod form;
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;
pub mod product;
#[cfg(not(target_arch = "wasm32"))]
pub mod transport;

pub use api::{
    ApiRequest, ApiResponse, Method, create_product_request, decode_created,
    decode_product_list, list_products_request,
};
pub use client::{ProductClient, Transport};
pub use config::{BASE_URL_ENV, ClientConfig, DEFAULT_BASE_URL};
pub use error::CatalogError;
pub use form::{CREATED_MESSAGE, FormField, ProductForm, SubmitOutcome};
#[cfg(not(target_arch = "wasm32"))]
pub use logging::init_logging;
pub use product::Product;
#[cfg(not(target_arch = "wasm32"))]
pub use transport::UreqTransport;
