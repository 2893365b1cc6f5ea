//! Application-level error type for the storefront.
//!
//! Backend failures are usually absorbed where they happen (empty catalog,
//! inline message). `StorefrontError` covers what is left for the caller:
//! user actions that cannot be honored and rendering failures.

use seya_core::ProductId;
use thiserror::Error;

use crate::backend::ApiError;
use crate::config::ConfigError;

/// Errors surfaced by the storefront controller.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A backend call failed and the caller asked to see it.
    #[error("Backend error: {0}")]
    Api(#[from] ApiError),

    /// The product is not in the loaded catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Template rendering failed.
    #[error("Render error: {0}")]
    Render(#[from] askama::Error),
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;
