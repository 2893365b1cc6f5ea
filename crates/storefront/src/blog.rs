//! Blog listing.
//!
//! Blog posts are decoration: any failure leaves the section empty.

use seya_core::BlogPost;
use tracing::warn;

use crate::backend::{ApiError, Backend};

/// Loads blog posts from the backend.
#[derive(Debug)]
pub struct BlogLoader<'a, B: ?Sized> {
    backend: &'a B,
}

impl<'a, B: Backend + ?Sized> BlogLoader<'a, B> {
    #[must_use]
    pub const fn new(backend: &'a B) -> Self {
        Self { backend }
    }

    /// # Errors
    ///
    /// Returns the backend's [`ApiError`] unchanged.
    pub async fn load(&self) -> Result<Vec<BlogPost>, ApiError> {
        self.backend.list_blog_posts().await
    }

    /// Fetch posts, returning an empty list on any failure.
    pub async fn load_or_empty(&self) -> Vec<BlogPost> {
        self.load().await.unwrap_or_else(|e| {
            warn!(error = %e, "Failed to load blog posts");
            Vec::new()
        })
    }
}
