//! Checkout wire types.

use serde::{Deserialize, Serialize};

use seya_core::{Price, ProductId};

/// One checkout entry. The cart has no quantity concept, so every line is
/// sent with `quantity: 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutItem {
    pub product_id: ProductId,
    pub title: String,
    pub quantity: u32,
    pub unit_price: Price,
    pub image: Option<String>,
}

/// Body of `POST /api/checkout`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub items: Vec<CheckoutItem>,
    pub success_url: String,
    pub cancel_url: String,
}

/// Checkout session response: a redirect `url`, or a `detail` explaining
/// why there is none.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl CheckoutResponse {
    /// The redirect URL, ignoring empty strings.
    #[must_use]
    pub fn redirect_url(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.is_empty())
    }

    /// The server-supplied detail, ignoring empty strings.
    #[must_use]
    pub fn detail_message(&self) -> Option<&str> {
        self.detail.as_deref().filter(|detail| !detail.is_empty())
    }
}
