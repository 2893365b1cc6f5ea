//! Catalog loading.
//!
//! # Flow
//!
//! 1. `GET /api/products`.
//! 2. Non-success status: the load fails.
//! 3. Empty list: `POST /api/seed` once, then `GET /api/products` again and
//!    take that answer as final, even if it is still empty.
//! 4. Non-empty list: use it.
//!
//! [`CatalogLoader::load`] reports failures as a typed error.
//! [`CatalogLoader::load_state`] applies the storefront's policy: log the
//! failure and show an empty catalog.

use seya_core::{Product, ProductId};
use tracing::{info, instrument, warn};

use crate::backend::{ApiError, Backend};

/// What the shop grid should show.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogState {
    /// The load has not finished yet.
    #[default]
    Loading,
    /// Products to display, possibly none.
    Ready(Vec<Product>),
    /// The load failed. Rendered like an empty catalog.
    Failed,
}

impl CatalogState {
    /// Products to display; empty while loading or after a failure.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        match self {
            Self::Ready(products) => products,
            Self::Loading | Self::Failed => &[],
        }
    }

    /// Look up a loaded product by id.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products().iter().find(|product| &product.id == id)
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Loads the product list, seeding the backend when it is empty.
#[derive(Debug)]
pub struct CatalogLoader<'a, B: ?Sized> {
    backend: &'a B,
}

impl<'a, B: Backend + ?Sized> CatalogLoader<'a, B> {
    #[must_use]
    pub const fn new(backend: &'a B) -> Self {
        Self { backend }
    }

    /// Fetch the catalog, seeding it once if the backend has no products.
    ///
    /// # Errors
    ///
    /// Returns the first [`ApiError`] from the initial fetch, the seed
    /// request or the refetch. Nothing is retried.
    #[instrument(skip(self))]
    pub async fn load(&self) -> Result<Vec<Product>, ApiError> {
        let products = self.backend.list_products().await?;
        if !products.is_empty() {
            return Ok(products);
        }

        info!("Catalog is empty, requesting seed");
        self.backend.seed().await?;
        self.backend.list_products().await
    }

    /// Fetch the catalog and collapse any failure into [`CatalogState::Failed`].
    pub async fn load_state(&self) -> CatalogState {
        match self.load().await {
            Ok(products) => CatalogState::Ready(products),
            Err(e) => {
                warn!(error = %e, "Failed to load catalog");
                CatalogState::Failed
            }
        }
    }

    /// Fetch the catalog, falling back to an empty one on failure.
    pub async fn load_or_empty(&self) -> Vec<Product> {
        match self.load_state().await {
            CatalogState::Ready(products) => products,
            CatalogState::Loading | CatalogState::Failed => Vec::new(),
        }
    }
}
