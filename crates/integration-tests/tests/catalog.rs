//! Catalog loading and seed fallback over HTTP.

use serde_json::json;
use seya_core::ProductId;
use seya_integration_tests::{FakeBackend, FakeConfig, Reply, product_json};
use seya_storefront::Storefront;
use seya_storefront::catalog::{CatalogLoader, CatalogState};
use testresult::TestResult;

#[tokio::test]
async fn test_empty_backend_is_seeded_once() -> TestResult {
    let fake = FakeBackend::start(FakeConfig {
        seeded_products: Some(json!([
            product_json("hoodie", "Hoodie Noir", 65.0),
            product_json("cap", "Casquette Crème", 25.0),
        ])),
        ..FakeConfig::default()
    })
    .await?;
    let client = fake.client()?;

    let products = CatalogLoader::new(&client).load().await?;

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].id, ProductId::new("hoodie"));
    assert_eq!(fake.seed_requests(), 1);
    assert_eq!(fake.product_requests(), 2);
    Ok(())
}

#[tokio::test]
async fn test_populated_backend_is_not_seeded() -> TestResult {
    let fake = FakeBackend::start(FakeConfig {
        products: Reply::json(&json!([product_json("tee", "Tee Blanc", 35.0)])),
        ..FakeConfig::default()
    })
    .await?;
    let client = fake.client()?;

    let products = CatalogLoader::new(&client).load().await?;

    assert_eq!(products.len(), 1);
    assert_eq!(fake.seed_requests(), 0);
    assert_eq!(fake.product_requests(), 1);
    Ok(())
}

#[tokio::test]
async fn test_seed_that_adds_nothing_yields_empty_catalog() -> TestResult {
    let fake = FakeBackend::start(FakeConfig::default()).await?;
    let client = fake.client()?;

    let products = CatalogLoader::new(&client).load().await?;

    assert!(products.is_empty());
    assert_eq!(fake.seed_requests(), 1);
    Ok(())
}

#[tokio::test]
async fn test_error_status_fails_without_seeding() -> TestResult {
    let fake = FakeBackend::start(FakeConfig {
        products: Reply::raw(500, "{\"detail\":\"db down\"}"),
        ..FakeConfig::default()
    })
    .await?;
    let client = fake.client()?;

    let state = CatalogLoader::new(&client).load_state().await;

    assert_eq!(state, CatalogState::Failed);
    assert!(state.products().is_empty());
    assert_eq!(fake.seed_requests(), 0);
    Ok(())
}

#[tokio::test]
async fn test_numeric_ids_are_accepted() -> TestResult {
    let fake = FakeBackend::start(FakeConfig {
        products: Reply::json(&json!([{ "id": 7, "title": "Bob", "price": 19.9 }])),
        ..FakeConfig::default()
    })
    .await?;
    let mut storefront = Storefront::new(fake.client()?);

    storefront.reload_catalog().await;
    storefront.add_to_cart(&ProductId::new("7"))?;

    assert_eq!(storefront.cart().count(), 1);
    assert_eq!(storefront.cart().lines()[0].image, None);
    Ok(())
}
