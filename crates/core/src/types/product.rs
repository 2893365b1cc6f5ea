//! Catalog records as served by the backend.

use serde::{Deserialize, Serialize};

use super::id::{BlogPostId, ProductId};
use super::price::Price;

/// A catalog product.
///
/// Read-only on the client. `category` and `images` default to empty when
/// the backend omits them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: Price,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Product {
    /// Returns the first image URL, if any.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// A blog post from `/api/blog`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: BlogPostId,
    pub title: String,
    #[serde(default)]
    pub content: String,
}
