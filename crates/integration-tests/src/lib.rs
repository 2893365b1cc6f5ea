//! End-to-end tests for the SEYA storefront.
//!
//! [`FakeBackend`] serves the five backend endpoints from canned replies on
//! an ephemeral port and records what it receives, so the tests drive the
//! real `BackendClient` over HTTP.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p seya-integration-tests
//! ```

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;
use seya_storefront::backend::BackendClient;
use seya_storefront::checkout::Navigator;
use tokio::task::JoinHandle;
use url::Url;

/// A canned HTTP answer.
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: StatusCode,
    pub body: String,
}

impl Reply {
    /// 200 with a JSON body.
    #[must_use]
    pub fn json(value: &Value) -> Self {
        Self {
            status: StatusCode::OK,
            body: value.to_string(),
        }
    }

    /// Any status with a raw body.
    #[must_use]
    pub fn raw(status: u16, body: impl Into<String>) -> Self {
        Self {
            status: StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            body: body.into(),
        }
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            self.body,
        )
            .into_response()
    }
}

/// Replies served by the fake backend.
#[derive(Debug, Clone)]
pub struct FakeConfig {
    /// `GET /api/products` before any seed.
    pub products: Reply,
    /// Catalog served by `GET /api/products` once `/api/seed` was called.
    pub seeded_products: Option<Value>,
    pub blog: Reply,
    pub contact: Reply,
    pub checkout: Reply,
}

impl Default for FakeConfig {
    fn default() -> Self {
        Self {
            products: Reply::json(&Value::Array(Vec::new())),
            seeded_products: None,
            blog: Reply::json(&Value::Array(Vec::new())),
            contact: Reply::raw(200, "{\"ok\":true}"),
            checkout: Reply::json(&Value::Object(serde_json::Map::new())),
        }
    }
}

#[derive(Debug)]
struct Shared {
    config: FakeConfig,
    catalog: Mutex<Reply>,
    product_requests: AtomicUsize,
    seed_requests: AtomicUsize,
    contact_bodies: Mutex<Vec<Value>>,
    checkout_bodies: Mutex<Vec<Value>>,
}

/// A backend double listening on `127.0.0.1`.
///
/// The server task is aborted on drop.
#[derive(Debug)]
pub struct FakeBackend {
    addr: SocketAddr,
    shared: Arc<Shared>,
    server: JoinHandle<()>,
}

impl FakeBackend {
    /// Bind an ephemeral port and start serving `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot be bound.
    pub async fn start(config: FakeConfig) -> std::io::Result<Self> {
        let shared = Arc::new(Shared {
            catalog: Mutex::new(config.products.clone()),
            config,
            product_requests: AtomicUsize::new(0),
            seed_requests: AtomicUsize::new(0),
            contact_bodies: Mutex::new(Vec::new()),
            checkout_bodies: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/api/products", get(products))
            .route("/api/seed", post(seed))
            .route("/api/blog", get(blog))
            .route("/api/contact", post(contact))
            .route("/api/checkout", post(checkout))
            .with_state(Arc::clone(&shared));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let server = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self {
            addr,
            shared,
            server,
        })
    }

    /// Base URL of the fake backend.
    ///
    /// # Errors
    ///
    /// Never fails for a bound socket address.
    pub fn url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&format!("http://{}", self.addr))
    }

    /// A real HTTP client pointed at this backend.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be built.
    pub fn client(&self) -> Result<BackendClient, Box<dyn std::error::Error>> {
        Ok(BackendClient::new(&self.url()?)?)
    }

    #[must_use]
    pub fn product_requests(&self) -> usize {
        self.shared.product_requests.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn seed_requests(&self) -> usize {
        self.shared.seed_requests.load(Ordering::SeqCst)
    }

    /// JSON bodies received on `/api/contact`, in order.
    #[must_use]
    pub fn contact_bodies(&self) -> Vec<Value> {
        lock(&self.shared.contact_bodies).clone()
    }

    /// JSON bodies received on `/api/checkout`, in order.
    #[must_use]
    pub fn checkout_bodies(&self) -> Vec<Value> {
        lock(&self.shared.checkout_bodies).clone()
    }
}

impl Drop for FakeBackend {
    fn drop(&mut self) {
        self.server.abort();
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

async fn products(State(shared): State<Arc<Shared>>) -> Reply {
    shared.product_requests.fetch_add(1, Ordering::SeqCst);
    lock(&shared.catalog).clone()
}

async fn seed(State(shared): State<Arc<Shared>>) -> StatusCode {
    shared.seed_requests.fetch_add(1, Ordering::SeqCst);
    if let Some(seeded) = &shared.config.seeded_products {
        *lock(&shared.catalog) = Reply::json(seeded);
    }
    StatusCode::OK
}

async fn blog(State(shared): State<Arc<Shared>>) -> Reply {
    shared.config.blog.clone()
}

async fn contact(State(shared): State<Arc<Shared>>, Json(body): Json<Value>) -> Reply {
    lock(&shared.contact_bodies).push(body);
    shared.config.contact.clone()
}

async fn checkout(State(shared): State<Arc<Shared>>, Json(body): Json<Value>) -> Reply {
    lock(&shared.checkout_bodies).push(body);
    shared.config.checkout.clone()
}

/// Navigator that records what the storefront asked of it.
#[derive(Debug, Clone)]
pub struct RecordingNavigator {
    pub location: String,
    pub redirects: Vec<String>,
    pub notices: Vec<String>,
}

impl RecordingNavigator {
    #[must_use]
    pub fn at(location: &str) -> Self {
        Self {
            location: location.to_string(),
            redirects: Vec::new(),
            notices: Vec::new(),
        }
    }
}

impl Navigator for RecordingNavigator {
    fn current_location(&self) -> String {
        self.location.clone()
    }

    fn redirect(&mut self, url: &str) {
        self.redirects.push(url.to_string());
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}

/// A catalog product as the backend serves it.
#[must_use]
pub fn product_json(id: &str, title: &str, price: f64) -> Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "price": price,
        "category": "Sweats",
        "images": [format!("https://img.example/{id}.jpg")],
    })
}
