//! Checkout initiation.
//!
//! Turns the cart into a checkout-session request, posts it, and either
//! sends the user to the payment page or shows a blocking message. Payment
//! itself happens entirely on the provider's hosted page.
//!
//! The cart is left untouched whatever happens. After a successful redirect
//! the page is gone anyway; after a failure the user keeps their lines.

use tracing::{info, instrument, warn};

use crate::backend::{Backend, CheckoutItem, CheckoutRequest};
use crate::cart::CartStore;

/// Shown when the backend answers without a redirect URL or a detail.
pub const PAYMENT_NOT_CONFIGURED: &str = "Stripe non configuré dans la démo";

/// Shown when the checkout call itself fails.
pub const PAYMENT_UNAVAILABLE: &str = "Paiement indisponible sur cette démo";

/// The page the storefront is displayed in.
///
/// `redirect` is a full navigation away from the storefront; `notify` is a
/// blocking message to the user.
pub trait Navigator {
    /// URL of the current page, used as both checkout callback URLs.
    fn current_location(&self) -> String;

    /// Leave the storefront for `url`.
    fn redirect(&mut self, url: &str);

    /// Show `message` to the user.
    fn notify(&mut self, message: &str);
}

/// How a checkout attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// The cart was empty; nothing was sent.
    Skipped,
    /// The user was sent to the checkout session.
    Redirected(String),
    /// The backend declined to create a session; the message was shown.
    Notified(String),
    /// The request failed; [`PAYMENT_UNAVAILABLE`] was shown.
    Unavailable,
}

/// Build the checkout request for `cart`: one item per line, quantity 1,
/// both callback URLs set to `location`.
#[must_use]
pub fn build_request(cart: &CartStore, location: &str) -> CheckoutRequest {
    CheckoutRequest {
        items: cart
            .lines()
            .iter()
            .map(|line| CheckoutItem {
                product_id: line.id.clone(),
                title: line.title.clone(),
                quantity: 1,
                unit_price: line.price,
                image: line.image.clone(),
            })
            .collect(),
        success_url: location.to_string(),
        cancel_url: location.to_string(),
    }
}

/// Starts checkout sessions for the cart.
#[derive(Debug)]
pub struct CheckoutInitiator<'a, B: ?Sized> {
    backend: &'a B,
}

impl<'a, B: Backend + ?Sized> CheckoutInitiator<'a, B> {
    #[must_use]
    pub const fn new(backend: &'a B) -> Self {
        Self { backend }
    }

    /// Request a checkout session for `cart` and act on the answer.
    ///
    /// Every failure ends in a message through `navigator`; nothing is
    /// retried.
    #[instrument(skip_all, fields(lines = cart.count()))]
    pub async fn checkout<N: Navigator + ?Sized>(
        &self,
        cart: &CartStore,
        navigator: &mut N,
    ) -> CheckoutOutcome {
        if cart.is_empty() {
            return CheckoutOutcome::Skipped;
        }

        let request = build_request(cart, &navigator.current_location());

        match self.backend.create_checkout_session(&request).await {
            Ok(response) => {
                if let Some(url) = response.redirect_url() {
                    info!(url, "Redirecting to checkout session");
                    navigator.redirect(url);
                    return CheckoutOutcome::Redirected(url.to_string());
                }

                let message = response
                    .detail_message()
                    .unwrap_or(PAYMENT_NOT_CONFIGURED)
                    .to_string();
                warn!(detail = %message, "Checkout session not created");
                navigator.notify(&message);
                CheckoutOutcome::Notified(message)
            }
            Err(e) => {
                warn!(error = %e, "Checkout request failed");
                navigator.notify(PAYMENT_UNAVAILABLE);
                CheckoutOutcome::Unavailable
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;
    use seya_core::{Price, Product, ProductId};

    use super::*;
    use crate::backend::{ApiError, CheckoutResponse, MockBackend};

    const PAGE: &str = "http://localhost:3000/#shop";

    #[derive(Debug, Default)]
    struct RecordingNavigator {
        redirects: Vec<String>,
        messages: Vec<String>,
    }

    impl Navigator for RecordingNavigator {
        fn current_location(&self) -> String {
            PAGE.to_string()
        }

        fn redirect(&mut self, url: &str) {
            self.redirects.push(url.to_string());
        }

        fn notify(&mut self, message: &str) {
            self.messages.push(message.to_string());
        }
    }

    fn product(id: &str, cents: i64, image: Option<&str>) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Item {id}"),
            price: Price::new(Decimal::new(cents, 2)),
            category: String::new(),
            images: image.map(str::to_string).into_iter().collect(),
        }
    }

    fn cart_with_two_lines() -> CartStore {
        let mut cart = CartStore::new();
        cart.add_line(&product("a", 4500, Some("a.jpg")));
        cart.add_line(&product("a", 4500, Some("a.jpg")));
        cart
    }

    fn respond(response: CheckoutResponse) -> MockBackend {
        let mut backend = MockBackend::new();
        backend
            .expect_create_checkout_session()
            .once()
            .returning(move |_| Ok(response.clone()));
        backend
    }

    #[tokio::test]
    async fn test_empty_cart_sends_nothing() {
        let mut backend = MockBackend::new();
        backend.expect_create_checkout_session().never();
        let mut navigator = RecordingNavigator::default();

        let outcome = CheckoutInitiator::new(&backend)
            .checkout(&CartStore::new(), &mut navigator)
            .await;

        assert_eq!(outcome, CheckoutOutcome::Skipped);
        assert!(navigator.redirects.is_empty());
        assert!(navigator.messages.is_empty());
    }

    #[tokio::test]
    async fn test_redirects_to_exact_url() {
        let backend = respond(CheckoutResponse {
            url: Some("https://pay.example/x".to_string()),
            detail: None,
        });
        let mut navigator = RecordingNavigator::default();

        let outcome = CheckoutInitiator::new(&backend)
            .checkout(&cart_with_two_lines(), &mut navigator)
            .await;

        assert_eq!(
            outcome,
            CheckoutOutcome::Redirected("https://pay.example/x".to_string())
        );
        assert_eq!(navigator.redirects, vec!["https://pay.example/x"]);
        assert!(navigator.messages.is_empty());
    }

    #[tokio::test]
    async fn test_detail_is_shown_verbatim() {
        let backend = respond(CheckoutResponse {
            url: None,
            detail: Some("no key".to_string()),
        });
        let mut navigator = RecordingNavigator::default();

        let outcome = CheckoutInitiator::new(&backend)
            .checkout(&cart_with_two_lines(), &mut navigator)
            .await;

        assert_eq!(outcome, CheckoutOutcome::Notified("no key".to_string()));
        assert_eq!(navigator.messages, vec!["no key"]);
        assert!(navigator.redirects.is_empty());
    }

    #[tokio::test]
    async fn test_missing_detail_uses_default_message() {
        let backend = respond(CheckoutResponse::default());
        let mut navigator = RecordingNavigator::default();

        CheckoutInitiator::new(&backend)
            .checkout(&cart_with_two_lines(), &mut navigator)
            .await;

        assert_eq!(navigator.messages, vec![PAYMENT_NOT_CONFIGURED]);
    }

    #[tokio::test]
    async fn test_request_failure_shows_unavailable() {
        let mut backend = MockBackend::new();
        backend
            .expect_create_checkout_session()
            .once()
            .returning(|_| Err(ApiError::Payload("expected value at line 1".to_string())));
        let mut navigator = RecordingNavigator::default();
        let cart = cart_with_two_lines();

        let outcome = CheckoutInitiator::new(&backend)
            .checkout(&cart, &mut navigator)
            .await;

        assert_eq!(outcome, CheckoutOutcome::Unavailable);
        assert_eq!(navigator.messages, vec![PAYMENT_UNAVAILABLE]);
        assert_eq!(cart.count(), 2);
    }

    #[tokio::test]
    async fn test_request_has_one_item_per_line() {
        let mut backend = MockBackend::new();
        backend
            .expect_create_checkout_session()
            .once()
            .withf(|request| {
                request.items.len() == 2
                    && request.items.iter().all(|item| {
                        item.quantity == 1
                            && item.product_id.as_str() == "a"
                            && item.image.as_deref() == Some("a.jpg")
                    })
                    && request.success_url == PAGE
                    && request.cancel_url == PAGE
            })
            .returning(|_| Ok(CheckoutResponse::default()));
        let mut navigator = RecordingNavigator::default();

        CheckoutInitiator::new(&backend)
            .checkout(&cart_with_two_lines(), &mut navigator)
            .await;
    }

    #[test]
    fn test_build_request_copies_prices() {
        let mut cart = CartStore::new();
        cart.add_line(&product("a", 1999, None));
        cart.add_line(&product("b", 500, None));

        let request = build_request(&cart, PAGE);

        let prices: Vec<Price> = request.items.iter().map(|item| item.unit_price).collect();
        assert_eq!(
            prices,
            vec![
                Price::new(Decimal::new(1999, 2)),
                Price::new(Decimal::new(500, 2))
            ]
        );
        assert_eq!(request.items[1].image, None);
    }
}
