//! CLI subcommands.
//!
//! Each command writes its output to the writer it is given; logs go
//! through `tracing`.

pub mod blog;
pub mod catalog;
pub mod contact;
pub mod render;
pub mod shop;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub mod testing {
    //! In-memory backend for command tests.

    use std::sync::Mutex;

    use async_trait::async_trait;
    use rust_decimal::Decimal;
    use seya_core::{BlogPost, ContactSubmission, Price, Product, ProductId};
    use seya_storefront::backend::{ApiError, Backend, CheckoutRequest, CheckoutResponse};

    #[derive(Debug, Default)]
    pub struct StubBackend {
        pub products: Vec<Product>,
        pub posts: Vec<BlogPost>,
        pub contact_fails: bool,
        pub checkout: Option<CheckoutResponse>,
        pub contacts: Mutex<Vec<ContactSubmission>>,
        pub checkouts: Mutex<Vec<CheckoutRequest>>,
    }

    #[async_trait]
    impl Backend for StubBackend {
        async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
            Ok(self.products.clone())
        }

        async fn seed(&self) -> Result<(), ApiError> {
            Ok(())
        }

        async fn list_blog_posts(&self) -> Result<Vec<BlogPost>, ApiError> {
            Ok(self.posts.clone())
        }

        async fn submit_contact(&self, submission: &ContactSubmission) -> Result<(), ApiError> {
            if self.contact_fails {
                return Err(ApiError::Status {
                    status: 500,
                    message: "boom".to_string(),
                });
            }
            self.contacts.lock().unwrap().push(submission.clone());
            Ok(())
        }

        async fn create_checkout_session(
            &self,
            request: &CheckoutRequest,
        ) -> Result<CheckoutResponse, ApiError> {
            self.checkouts.lock().unwrap().push(request.clone());
            self.checkout
                .clone()
                .ok_or_else(|| ApiError::Transport("connection refused".to_string()))
        }
    }

    pub fn product(id: &str, title: &str, cents: i64) -> Product {
        Product {
            id: ProductId::new(id),
            title: title.to_string(),
            price: Price::new(Decimal::new(cents, 2)),
            category: "Sweats".to_string(),
            images: Vec::new(),
        }
    }
}
