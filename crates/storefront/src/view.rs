//! Static markup for the storefront page.
//!
//! The page is a pure function of the controller state: build a
//! [`PageTemplate`] from a [`Storefront`] and render it.

use askama::Template;

use seya_core::{BlogPost, Price, Product};

use crate::backend::Backend;
use crate::contact::{ContactForm, SubmissionState};
use crate::filters;
use crate::state::Storefront;

/// Image shown for products without one.
pub const PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1520975922203-b8ad5b1cfdf4";

/// Resizing parameters appended to product image URLs.
const IMAGE_PARAMS: &str = "auto=format&fit=crop&w=800&q=60";

/// Product card display data.
#[derive(Debug, Clone)]
pub struct ProductCard<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub price: Price,
    pub category: &'a str,
    pub image_src: String,
}

impl<'a> From<&'a Product> for ProductCard<'a> {
    fn from(product: &'a Product) -> Self {
        let image = product.primary_image().unwrap_or(PLACEHOLDER_IMAGE);
        Self {
            id: product.id.as_str(),
            title: &product.title,
            price: product.price,
            category: &product.category,
            image_src: sized_image(image),
        }
    }
}

/// Status line under the contact form.
#[derive(Debug, Clone, Copy)]
pub struct StatusView {
    pub class: &'static str,
    pub message: &'static str,
}

/// Contact form display data.
#[derive(Debug, Clone)]
pub struct ContactView<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub subject: &'a str,
    pub message: &'a str,
    pub button_label: &'static str,
    pub submit_disabled: bool,
    pub status: Option<StatusView>,
}

impl<'a> From<&'a ContactForm> for ContactView<'a> {
    fn from(form: &'a ContactForm) -> Self {
        let state = form.state();
        let fields = form.fields();
        Self {
            name: &fields.name,
            email: &fields.email,
            subject: &fields.subject,
            message: &fields.message,
            button_label: state.button_label(),
            submit_disabled: !form.can_submit(),
            status: state.status_message().map(|message| StatusView {
                class: if state == SubmissionState::Success {
                    "status-success"
                } else {
                    "status-error"
                },
                message,
            }),
        }
    }
}

/// The storefront page.
#[derive(Template)]
#[template(path = "page.html")]
pub struct PageTemplate<'a> {
    pub cart_count: usize,
    pub cart_total: Price,
    pub loading: bool,
    pub products: Vec<ProductCard<'a>>,
    pub posts: &'a [BlogPost],
    pub contact: ContactView<'a>,
}

impl<'a> PageTemplate<'a> {
    /// Snapshot the controller state for rendering.
    #[must_use]
    pub fn new<B: Backend>(storefront: &'a Storefront<B>) -> Self {
        let cart = storefront.cart();
        Self {
            cart_count: cart.count(),
            cart_total: cart.total(),
            loading: storefront.catalog().is_loading(),
            products: storefront
                .catalog()
                .products()
                .iter()
                .map(ProductCard::from)
                .collect(),
            posts: storefront.blog_posts(),
            contact: ContactView::from(storefront.contact()),
        }
    }
}

/// Render the full page for `storefront`.
///
/// # Errors
///
/// Returns an error if template rendering fails.
pub fn render_page<B: Backend>(storefront: &Storefront<B>) -> Result<String, askama::Error> {
    PageTemplate::new(storefront).render()
}

fn sized_image(url: &str) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}{IMAGE_PARAMS}")
}
