//! Mounting the storefront and rendering the page against the fake backend.

use serde_json::json;
use seya_core::ProductId;
use seya_integration_tests::{FakeBackend, FakeConfig, Reply, product_json};
use seya_storefront::Storefront;
use seya_storefront::blog::BlogLoader;
use seya_storefront::view::render_page;
use testresult::TestResult;

#[tokio::test]
async fn test_blog_posts_are_listed() -> TestResult {
    let fake = FakeBackend::start(FakeConfig {
        blog: Reply::json(&json!([
            {"id": 1, "title": "Drop 03", "content": "Bleu nuit"},
            {"id": "2", "title": "Lookbook"},
        ])),
        ..FakeConfig::default()
    })
    .await?;
    let client = fake.client()?;

    let posts = BlogLoader::new(&client).load().await?;

    let titles: Vec<&str> = posts.iter().map(|post| post.title.as_str()).collect();
    assert_eq!(titles, ["Drop 03", "Lookbook"]);
    Ok(())
}

#[tokio::test]
async fn test_blog_outage_renders_placeholder() -> TestResult {
    let fake = FakeBackend::start(FakeConfig {
        products: Reply::json(&json!([product_json("hoodie", "Hoodie Noir", 65.0)])),
        blog: Reply::raw(503, "unavailable"),
        ..FakeConfig::default()
    })
    .await?;
    let mut storefront = Storefront::new(fake.client()?);

    storefront.mount().await;
    let html = render_page(&storefront)?;

    assert!(storefront.blog_posts().is_empty());
    assert!(html.contains("Bientôt des news…"));
    assert!(html.contains("Hoodie Noir"));
    Ok(())
}

#[tokio::test]
async fn test_rendered_page_after_seeding() -> TestResult {
    let fake = FakeBackend::start(FakeConfig {
        seeded_products: Some(json!([
            product_json("hoodie", "Hoodie Noir", 65.0),
            product_json("jogger", "Jogging Sable", 1249.9),
        ])),
        ..FakeConfig::default()
    })
    .await?;
    let mut storefront = Storefront::new(fake.client()?);

    storefront.mount().await;
    storefront.add_to_cart(&ProductId::new("jogger"))?;
    let html = render_page(&storefront)?;

    assert_eq!(fake.seed_requests(), 1);
    assert!(html.contains("Jogging Sable"));
    assert!(html.contains("jogger.jpg"));
    assert!(html.contains("1 article(s) — 1\u{202f}249,90\u{a0}€"));
    Ok(())
}
