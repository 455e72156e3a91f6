//! Catalog error types

use thiserror::Error;

/// Errors that can occur while fetching tools from a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Network/HTTP error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog answered with a non-success status
    #[error("Explore API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Response body was not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Catalog could not be built from its configuration
    #[error("Invalid catalog configuration: {0}")]
    InvalidConfig(String),

    /// Other error
    #[error("{0}")]
    Other(String),
}

impl CatalogError {
    /// Create an API error
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;
