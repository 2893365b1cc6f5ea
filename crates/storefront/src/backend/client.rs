//! `reqwest` implementation of [`Backend`].

use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::{debug, instrument, warn};
use url::Url;

use seya_core::{BlogPost, ContactSubmission, Product};

use super::types::{CheckoutRequest, CheckoutResponse};
use super::{ApiError, Backend};

const PRODUCTS_PATH: &str = "/api/products";
const SEED_PATH: &str = "/api/seed";
const BLOG_PATH: &str = "/api/blog";
const CONTACT_PATH: &str = "/api/contact";
const CHECKOUT_PATH: &str = "/api/checkout";

/// HTTP client for the SEYA backend.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    /// Create a client for the backend rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(base_url: &Url) -> Result<Self, ApiError> {
        let client = Client::builder()
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
        })
    }

    /// Returns the backend base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait]
impl Backend for BackendClient {
    #[instrument(skip(self))]
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let response = self
            .client
            .get(self.endpoint(PRODUCTS_PATH))
            .send()
            .await
            .map_err(transport)?;

        let products: Vec<Product> = parse_json(ensure_success(response).await?).await?;
        debug!(count = products.len(), "Fetched products");
        Ok(products)
    }

    #[instrument(skip(self))]
    async fn seed(&self) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.endpoint(SEED_PATH))
            .send()
            .await
            .map_err(transport)?;

        debug!(status = response.status().as_u16(), "Seed request completed");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_blog_posts(&self) -> Result<Vec<BlogPost>, ApiError> {
        let response = self
            .client
            .get(self.endpoint(BLOG_PATH))
            .send()
            .await
            .map_err(transport)?;

        parse_json(ensure_success(response).await?).await
    }

    #[instrument(skip(self, submission), fields(email = %submission.email))]
    async fn submit_contact(&self, submission: &ContactSubmission) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.endpoint(CONTACT_PATH))
            .json(submission)
            .send()
            .await
            .map_err(transport)?;

        ensure_success(response).await?;
        Ok(())
    }

    #[instrument(skip(self, request), fields(items = request.items.len()))]
    async fn create_checkout_session(
        &self,
        request: &CheckoutRequest,
    ) -> Result<CheckoutResponse, ApiError> {
        let response = self
            .client
            .post(self.endpoint(CHECKOUT_PATH))
            .json(request)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            // The body still carries `detail`, so keep going.
            warn!(status = status.as_u16(), "Checkout endpoint returned an error status");
        }

        parse_json(response).await
    }
}

fn transport(error: reqwest::Error) -> ApiError {
    ApiError::Transport(error.to_string())
}

/// Turn a non-success response into [`ApiError::Status`].
async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

async fn parse_json<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json()
        .await
        .map_err(|e| ApiError::Payload(e.to_string()))
}
