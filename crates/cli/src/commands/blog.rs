//! `seya blog`: list blog posts.

use std::io::Write;

use seya_core::BlogPost;
use seya_storefront::backend::BackendClient;
use seya_storefront::blog::BlogLoader;
use seya_storefront::config::StorefrontConfig;

/// Print every post, title first. An unreachable backend lists nothing.
///
/// # Errors
///
/// Returns an error if the backend client cannot be built or output fails.
pub async fn run(
    config: &StorefrontConfig,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let backend = BackendClient::new(&config.backend_url)?;
    let posts = BlogLoader::new(&backend).load_or_empty().await;
    write_posts(out, &posts)?;
    Ok(())
}

fn write_posts(out: &mut impl Write, posts: &[BlogPost]) -> std::io::Result<()> {
    if posts.is_empty() {
        return writeln!(out, "Bientôt des news…");
    }
    for post in posts {
        writeln!(out, "# {}", post.title)?;
        if !post.content.is_empty() {
            writeln!(out, "{}", post.content)?;
        }
        writeln!(out)?;
    }
    Ok(())
}
