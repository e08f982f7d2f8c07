//! Error types for catalog operations.

/// Errors produced while configuring the client, building requests,
/// talking to the backend, or decoding its responses.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("Invalid base URL '{url}': expected an http:// or https:// origin")]
    InvalidBaseUrl { url: String },

    #[error("Unknown form field '{name}'")]
    UnknownField { name: String },

    #[error("Failed to encode request body: {message}")]
    Encode { message: String },

    #[error("Request failed: {message}")]
    Network { message: String },

    #[error("Server responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response body: {message}")]
    Decode { message: String },
}

impl CatalogError {
    /// Stable code for programmatic handling and log fields.
    pub fn error_code(&self) -> &'static str {
        match self {
            CatalogError::InvalidBaseUrl { .. } => "CATALOG_INVALID_BASE_URL",
            CatalogError::UnknownField { .. } => "CATALOG_UNKNOWN_FIELD",
            CatalogError::Encode { .. } => "CATALOG_ENCODE_FAILED",
            CatalogError::Network { .. } => "CATALOG_NETWORK_ERROR",
            CatalogError::Status { .. } => "CATALOG_HTTP_STATUS",
            CatalogError::Decode { .. } => "CATALOG_DECODE_FAILED",
        }
    }

    /// Whether the error was caused by user input rather than the backend.
    pub fn is_user_error(&self) -> bool {
        match self {
            CatalogError::InvalidBaseUrl { .. } | CatalogError::UnknownField { .. } => true,

            CatalogError::Encode { .. }
            | CatalogError::Network { .. }
            | CatalogError::Status { .. }
            | CatalogError::Decode { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let error = CatalogError::Status {
            status: 500,
            body: r#"{"error":"Failed to create product"}"#.to_string(),
        };
        assert_eq!(
            error.to_string(),
            r#"Server responded with status 500: {"error":"Failed to create product"}"#
        );
        assert_eq!(error.error_code(), "CATALOG_HTTP_STATUS");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_user_errors() {
        let error = CatalogError::InvalidBaseUrl {
            url: "ftp://x".to_string(),
        };
        assert!(error.is_user_error());
        assert_eq!(error.error_code(), "CATALOG_INVALID_BASE_URL");

        let error = CatalogError::UnknownField {
            name: "sku".to_string(),
        };
        assert!(error.is_user_error());
        assert_eq!(error.to_string(), "Unknown form field 'sku'");
    }

    #[test]
    fn test_network_error_is_not_user_error() {
        let error = CatalogError::Network {
            message: "connection refused".to_string(),
        };
        assert!(!error.is_user_error());
        assert_eq!(error.to_string(), "Request failed: connection refused");
    }
}
