//! Application controller.
//!
//! `Storefront` owns the backend client and the session's single
//! [`CartStore`], and lends them to the components that need them. Views
//! read state through the accessors and register for updates with
//! [`CartStore::subscribe`] / [`ContactForm::on_transition`].

use seya_core::{BlogPost, ContactSubmission, Product, ProductId};
use tracing::{debug, instrument};

use crate::backend::{Backend, BackendClient};
use crate::blog::BlogLoader;
use crate::cart::CartStore;
use crate::catalog::{CatalogLoader, CatalogState};
use crate::checkout::{CheckoutInitiator, CheckoutOutcome, Navigator};
use crate::config::StorefrontConfig;
use crate::contact::{ContactForm, SubmissionState};
use crate::error::{Result, StorefrontError};

/// Storefront session state.
#[derive(Debug)]
pub struct Storefront<B> {
    backend: B,
    cart: CartStore,
    catalog: CatalogState,
    blog: Vec<BlogPost>,
    contact: ContactForm,
}

impl Storefront<BackendClient> {
    /// Create a storefront talking to the configured backend.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &StorefrontConfig) -> Result<Self> {
        let backend = BackendClient::new(&config.backend_url)?;
        Ok(Self::new(backend))
    }
}

impl<B: Backend> Storefront<B> {
    /// Create a storefront with an empty cart and an unloaded catalog.
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            cart: CartStore::new(),
            catalog: CatalogState::Loading,
            blog: Vec::new(),
            contact: ContactForm::new(),
        }
    }

    /// Load the catalog and the blog, once per view activation.
    #[instrument(skip(self))]
    pub async fn mount(&mut self) {
        self.reload_catalog().await;
        self.blog = BlogLoader::new(&self.backend).load_or_empty().await;
        debug!(
            products = self.catalog.products().len(),
            posts = self.blog.len(),
            "Storefront mounted"
        );
    }

    /// Reload the catalog, falling back to an empty one on failure.
    pub async fn reload_catalog(&mut self) {
        self.catalog = CatalogState::Loading;
        self.catalog = CatalogLoader::new(&self.backend).load_state().await;
    }

    /// Look up a product in the loaded catalog.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.catalog.product(id)
    }

    /// Add one line for the catalog product `id`.
    ///
    /// # Errors
    ///
    /// Returns `ProductNotFound` if the product is not in the loaded catalog.
    pub fn add_to_cart(&mut self, id: &ProductId) -> Result<()> {
        let product = self
            .catalog
            .product(id)
            .ok_or_else(|| StorefrontError::ProductNotFound(id.clone()))?;

        self.cart.add_line(product);
        Ok(())
    }

    /// Start a checkout session for the current cart.
    pub async fn checkout<N: Navigator + ?Sized>(&self, navigator: &mut N) -> CheckoutOutcome {
        CheckoutInitiator::new(&self.backend)
            .checkout(&self.cart, navigator)
            .await
    }

    /// Fill the contact form with `fields` and submit it.
    pub async fn submit_contact(&mut self, fields: ContactSubmission) -> SubmissionState {
        self.contact.fill(fields);
        self.contact.submit(&self.backend).await
    }

    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    #[must_use]
    pub const fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// Mutable cart access, for registering subscribers.
    pub const fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    #[must_use]
    pub const fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    #[must_use]
    pub fn blog_posts(&self) -> &[BlogPost] {
        &self.blog
    }

    #[must_use]
    pub const fn contact(&self) -> &ContactForm {
        &self.contact
    }

    pub const fn contact_mut(&mut self) -> &mut ContactForm {
        &mut self.contact
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use rust_decimal::Decimal;
    use seya_core::{BlogPostId, Price};

    use super::*;
    use crate::backend::{ApiError, CheckoutResponse, MockBackend};

    fn catalog() -> Vec<Product> {
        vec![
            Product {
                id: ProductId::new("hoodie"),
                title: "Hoodie Noir".to_string(),
                price: Price::new(Decimal::new(6500, 2)),
                category: "Sweats".to_string(),
                images: vec!["https://img.example/hoodie?x=1".to_string()],
            },
            Product {
                id: ProductId::new("cap"),
                title: "Casquette Crème".to_string(),
                price: Price::new(Decimal::new(2500, 2)),
                category: "Accessoires".to_string(),
                images: vec![],
            },
        ]
    }

    fn mounted_backend() -> MockBackend {
        let mut backend = MockBackend::new();
        backend
            .expect_list_products()
            .once()
            .returning(|| Ok(catalog()));
        backend.expect_list_blog_posts().once().returning(|| {
            Ok(vec![BlogPost {
                id: BlogPostId::new("1"),
                title: "Drop".to_string(),
                content: String::new(),
            }])
        });
        backend
    }

    struct NullNavigator;

    impl Navigator for NullNavigator {
        fn current_location(&self) -> String {
            "http://localhost:3000/".to_string()
        }

        fn redirect(&mut self, _url: &str) {}

        fn notify(&mut self, _message: &str) {}
    }

    #[test]
    fn test_starts_loading() {
        let storefront = Storefront::new(MockBackend::new());
        assert!(storefront.catalog().is_loading());
        assert!(storefront.cart().is_empty());
    }

    #[tokio::test]
    async fn test_mount_loads_catalog_and_blog() {
        let mut storefront = Storefront::new(mounted_backend());

        storefront.mount().await;

        assert_eq!(storefront.catalog().products().len(), 2);
        assert_eq!(storefront.blog_posts().len(), 1);
    }

    #[tokio::test]
    async fn test_mount_survives_backend_outage() {
        let mut backend = MockBackend::new();
        backend
            .expect_list_products()
            .returning(|| Err(ApiError::Transport("refused".to_string())));
        backend
            .expect_list_blog_posts()
            .returning(|| Err(ApiError::Transport("refused".to_string())));
        let mut storefront = Storefront::new(backend);

        storefront.mount().await;

        assert_eq!(storefront.catalog(), &CatalogState::Failed);
        assert!(storefront.blog_posts().is_empty());
    }

    #[tokio::test]
    async fn test_add_to_cart_notifies_subscribers() {
        let mut storefront = Storefront::new(mounted_backend());
        storefront.mount().await;
        let badge = Rc::new(Cell::new(0));
        let sink = Rc::clone(&badge);
        storefront.cart_mut().subscribe(move |lines| sink.set(lines.len()));

        storefront.add_to_cart(&ProductId::new("hoodie")).unwrap();
        storefront.add_to_cart(&ProductId::new("cap")).unwrap();
        storefront.add_to_cart(&ProductId::new("hoodie")).unwrap();

        assert_eq!(badge.get(), 3);
        assert_eq!(
            storefront.cart().total().amount(),
            Decimal::new(15500, 2)
        );
    }

    #[tokio::test]
    async fn test_product_lookup_after_mount() {
        let mut storefront = Storefront::new(mounted_backend());
        assert!(storefront.product(&ProductId::new("cap")).is_none());

        storefront.mount().await;

        let cap = storefront.product(&ProductId::new("cap")).unwrap();
        assert_eq!(cap.title, "Casquette Crème");
        assert!(storefront.product(&ProductId::new("missing")).is_none());
    }

    #[tokio::test]
    async fn test_add_unknown_product_fails() {
        let mut storefront = Storefront::new(mounted_backend());
        storefront.mount().await;

        let err = storefront
            .add_to_cart(&ProductId::new("missing"))
            .unwrap_err();

        assert!(matches!(err, StorefrontError::ProductNotFound(id) if id.as_str() == "missing"));
        assert!(storefront.cart().is_empty());
    }

    #[tokio::test]
    async fn test_checkout_uses_owned_cart() {
        let mut backend = mounted_backend();
        backend
            .expect_create_checkout_session()
            .once()
            .withf(|request| request.items.len() == 1)
            .returning(|_| {
                Ok(CheckoutResponse {
                    url: Some("https://pay.example/session".to_string()),
                    detail: None,
                })
            });
        let mut storefront = Storefront::new(backend);
        storefront.mount().await;
        storefront.add_to_cart(&ProductId::new("cap")).unwrap();

        let outcome = storefront.checkout(&mut NullNavigator).await;

        assert_eq!(
            outcome,
            CheckoutOutcome::Redirected("https://pay.example/session".to_string())
        );
        assert_eq!(storefront.cart().count(), 1);
    }

    #[tokio::test]
    async fn test_submit_contact_goes_through_form() {
        let mut backend = MockBackend::new();
        backend.expect_submit_contact().once().returning(|_| Ok(()));
        let mut storefront = Storefront::new(backend);

        let state = storefront
            .submit_contact(ContactSubmission {
                name: "A".to_string(),
                email: "a@b.com".to_string(),
                subject: "S".to_string(),
                message: "M".to_string(),
            })
            .await;

        assert_eq!(state, SubmissionState::Success);
        assert!(storefront.contact().fields().is_blank());
    }
}
