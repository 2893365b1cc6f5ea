//! `seya render`: write the storefront page as static HTML.

use std::io::Write;
use std::path::Path;

use seya_storefront::Storefront;
use seya_storefront::backend::Backend;
use seya_storefront::config::StorefrontConfig;
use seya_storefront::error::StorefrontError;
use seya_storefront::view::render_page;
use tracing::info;

/// Mount the storefront and write the page to `output`, or to `out` when
/// no path is given.
///
/// # Errors
///
/// Returns an error if rendering or writing fails.
pub async fn run(
    config: &StorefrontConfig,
    output: Option<&Path>,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut storefront = Storefront::from_config(config)?;
    let html = mounted_page(&mut storefront).await?;

    match output {
        Some(path) => {
            tokio::fs::write(path, html.as_bytes()).await?;
            info!(path = %path.display(), bytes = html.len(), "Page written");
        }
        None => out.write_all(html.as_bytes())?,
    }
    Ok(())
}

async fn mounted_page<B: Backend>(
    storefront: &mut Storefront<B>,
) -> Result<String, StorefrontError> {
    storefront.mount().await;
    Ok(render_page(storefront)?)
}
