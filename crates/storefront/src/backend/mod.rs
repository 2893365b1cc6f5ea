//! SEYA backend API.
//!
//! # Architecture
//!
//! - [`Backend`] is the seam every component talks to; [`BackendClient`] is
//!   the `reqwest` implementation, tests substitute a mock.
//! - Every call returns a typed `Result<_, ApiError>`. Nothing here decides
//!   how a failure is presented; call sites pick their degradation policy.
//! - No caching, no retries and no request timeout.
//!
//! # Endpoints
//!
//! | Endpoint | Method | Used by |
//! |---|---|---|
//! | `/api/products` | GET | catalog |
//! | `/api/seed` | POST | catalog (empty fallback) |
//! | `/api/blog` | GET | blog |
//! | `/api/contact` | POST | contact form |
//! | `/api/checkout` | POST | checkout |

mod client;
pub mod types;

pub use client::BackendClient;
pub use types::{CheckoutItem, CheckoutRequest, CheckoutResponse};

use async_trait::async_trait;
use seya_core::{BlogPost, ContactSubmission, Product};
use thiserror::Error;

/// Errors that can occur when talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, ...).
    #[error("transport error: {0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("backend returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body did not have the expected shape.
    #[error("unexpected payload: {0}")]
    Payload(String),
}

impl ApiError {
    /// Returns the HTTP status for [`ApiError::Status`] errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(_) | Self::Payload(_) => None,
        }
    }
}

/// Operations the storefront needs from the backend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Backend: Send + Sync {
    /// `GET /api/products`.
    ///
    /// Fails with [`ApiError::Status`] on a non-success status.
    async fn list_products(&self) -> Result<Vec<Product>, ApiError>;

    /// `POST /api/seed`.
    ///
    /// The response is ignored; only a transport failure is an error.
    async fn seed(&self) -> Result<(), ApiError>;

    /// `GET /api/blog`.
    async fn list_blog_posts(&self) -> Result<Vec<BlogPost>, ApiError>;

    /// `POST /api/contact`.
    ///
    /// Fails with [`ApiError::Status`] on a non-success status.
    async fn submit_contact(&self, submission: &ContactSubmission) -> Result<(), ApiError>;

    /// `POST /api/checkout`.
    ///
    /// The status code is not consulted: any JSON object body is returned
    /// as a [`CheckoutResponse`].
    async fn create_checkout_session(
        &self,
        request: &CheckoutRequest,
    ) -> Result<CheckoutResponse, ApiError>;
}
