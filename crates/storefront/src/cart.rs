//! Client-side cart.
//!
//! The cart is an append-only, ordered list of lines living in memory for
//! the length of a session. Adding the same product twice produces two
//! lines; there is no quantity merge, no removal and no clear.
//!
//! Views observe the cart through [`CartStore::subscribe`]. Every mutation
//! notifies all subscribers, in subscription order, after the change is
//! committed.

use seya_core::{Price, Product, ProductId};
use tracing::debug;

/// One product instance in the cart. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub id: ProductId,
    pub title: String,
    pub price: Price,
    pub image: Option<String>,
}

impl From<&Product> for CartLine {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            title: product.title.clone(),
            price: product.price,
            image: product.primary_image().map(str::to_owned),
        }
    }
}

/// Handle returned by [`CartStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&[CartLine])>;

/// The session's cart, owned by the application controller and lent out by
/// reference.
#[derive(Default)]
pub struct CartStore {
    lines: Vec<CartLine>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("lines", &self.lines)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

impl CartStore {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line for `product` at the end of the cart.
    pub fn add_line(&mut self, product: &Product) {
        self.lines.push(CartLine::from(product));
        debug!(product_id = %product.id, count = self.lines.len(), "Added cart line");
        self.notify();
    }

    /// Sum of all line prices.
    #[must_use]
    pub fn total(&self) -> Price {
        self.lines.iter().map(|line| line.price).sum()
    }

    /// Number of lines, not distinct products.
    #[must_use]
    pub fn count(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Register a callback run after every cart change.
    pub fn subscribe(&mut self, callback: impl FnMut(&[CartLine]) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscriber. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(subscription, _)| *subscription != id);
        self.subscribers.len() != before
    }

    fn notify(&mut self) {
        let Self {
            lines, subscribers, ..
        } = self;
        for (_, callback) in subscribers.iter_mut() {
            callback(lines.as_slice());
        }
    }
}
