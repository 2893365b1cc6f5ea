//! `seya catalog`: list the products.

use std::io::Write;

use seya_core::Product;
use seya_storefront::Storefront;
use seya_storefront::backend::Backend;
use seya_storefront::config::StorefrontConfig;
use seya_storefront::filters::format_eur;

/// Load the catalog and print one product per line.
///
/// # Errors
///
/// Returns an error if the backend client cannot be built or output fails.
pub async fn run(
    config: &StorefrontConfig,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut storefront = Storefront::from_config(config)?;
    list(&mut storefront, out).await?;
    Ok(())
}

pub async fn list<B: Backend>(
    storefront: &mut Storefront<B>,
    out: &mut impl Write,
) -> std::io::Result<()> {
    storefront.reload_catalog().await;
    write_products(out, storefront.catalog().products())
}

/// `id  title  price  category`, tab separated.
pub fn write_products(out: &mut impl Write, products: &[Product]) -> std::io::Result<()> {
    if products.is_empty() {
        return writeln!(out, "Aucun produit.");
    }
    for product in products {
        writeln!(
            out,
            "{}\t{}\t{}\t{}",
            product.id,
            product.title,
            format_eur(product.price.amount()),
            product.category
        )?;
    }
    Ok(())
}
