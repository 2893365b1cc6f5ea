//! `seya shop`: interactive shopping session.
//!
//! Reads one command per line:
//!
//! | Command | Effect |
//! |---|---|
//! | `list` | show the catalog |
//! | `add <product-id>` | add one line for the product |
//! | `cart` | show cart lines and total |
//! | `checkout` | start a checkout session |
//! | `quit` | leave |
//!
//! A successful checkout hands the user over to the payment page and ends
//! the session.

use std::io::Write;
use std::str::FromStr;

use seya_core::ProductId;
use seya_storefront::Storefront;
use seya_storefront::backend::Backend;
use seya_storefront::checkout::{CheckoutOutcome, Navigator};
use seya_storefront::config::StorefrontConfig;
use seya_storefront::error::StorefrontError;
use seya_storefront::filters::format_eur;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use super::catalog::write_products;

const HELP: &str = "Commandes : list, add <id>, cart, checkout, quit";

#[derive(Debug, Clone, PartialEq, Eq)]
enum ShopCommand {
    List,
    Add(ProductId),
    Cart,
    Checkout,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
enum ParseError {
    #[error("Commande inconnue : {0}")]
    Unknown(String),

    #[error("Usage : add <id>")]
    MissingProductId,
}

impl FromStr for ShopCommand {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let command = words.next().unwrap_or_default();

        match command {
            "list" | "ls" => Ok(Self::List),
            "add" => words
                .next()
                .map(|id| Self::Add(ProductId::new(id)))
                .ok_or(ParseError::MissingProductId),
            "cart" => Ok(Self::Cart),
            "checkout" | "pay" => Ok(Self::Checkout),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(ParseError::Unknown(other.to_string())),
        }
    }
}

/// Navigator for a terminal: redirects and messages are collected and
/// printed by the session loop.
#[derive(Debug, Default)]
pub struct TerminalNavigator {
    location: String,
    redirect: Option<String>,
    messages: Vec<String>,
}

impl TerminalNavigator {
    #[must_use]
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            ..Self::default()
        }
    }

    fn drain(&mut self, out: &mut impl Write) -> std::io::Result<()> {
        for message in self.messages.drain(..) {
            writeln!(out, "{message}")?;
        }
        if let Some(url) = &self.redirect {
            writeln!(out, "Redirection vers le paiement : {url}")?;
        }
        Ok(())
    }
}

impl Navigator for TerminalNavigator {
    fn current_location(&self) -> String {
        self.location.clone()
    }

    fn redirect(&mut self, url: &str) {
        self.redirect = Some(url.to_string());
    }

    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

/// Run a session against the configured backend.
///
/// # Errors
///
/// Returns an error if the backend client cannot be built or I/O fails.
pub async fn run<R>(
    config: &StorefrontConfig,
    input: R,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>>
where
    R: AsyncBufRead + Unpin,
{
    let mut storefront = Storefront::from_config(config)?;
    let mut navigator = TerminalNavigator::new(config.page_url.as_str());
    session(&mut storefront, &mut navigator, input, out).await?;
    Ok(())
}

async fn session<B, R>(
    storefront: &mut Storefront<B>,
    navigator: &mut TerminalNavigator,
    input: R,
    out: &mut impl Write,
) -> std::io::Result<()>
where
    B: Backend,
    R: AsyncBufRead + Unpin,
{
    storefront
        .cart_mut()
        .subscribe(|lines| debug!(count = lines.len(), "Cart updated"));
    storefront.mount().await;
    write_products(out, storefront.catalog().products())?;
    writeln!(out, "{HELP}")?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<ShopCommand>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "{e}")?;
                continue;
            }
        };

        match command {
            ShopCommand::List => write_products(out, storefront.catalog().products())?,
            ShopCommand::Add(id) => match storefront.add_to_cart(&id) {
                Ok(()) => write_cart_summary(out, storefront)?,
                Err(StorefrontError::ProductNotFound(id)) => {
                    writeln!(out, "Produit introuvable : {id}")?;
                }
                Err(e) => writeln!(out, "{e}")?,
            },
            ShopCommand::Cart => write_cart(out, storefront)?,
            ShopCommand::Checkout => {
                let outcome = storefront.checkout(navigator).await;
                navigator.drain(out)?;
                match outcome {
                    CheckoutOutcome::Skipped => writeln!(out, "Panier vide.")?,
                    CheckoutOutcome::Redirected(_) => return Ok(()),
                    CheckoutOutcome::Notified(_) | CheckoutOutcome::Unavailable => {}
                }
            }
            ShopCommand::Help => writeln!(out, "{HELP}")?,
            ShopCommand::Quit => return Ok(()),
        }
    }

    Ok(())
}

fn write_cart_summary<B: Backend>(
    out: &mut impl Write,
    storefront: &Storefront<B>,
) -> std::io::Result<()> {
    let cart = storefront.cart();
    writeln!(
        out,
        "{} article(s) — {}",
        cart.count(),
        format_eur(cart.total().amount())
    )
}

fn write_cart<B: Backend>(out: &mut impl Write, storefront: &Storefront<B>) -> std::io::Result<()> {
    let cart = storefront.cart();
    if cart.is_empty() {
        return writeln!(out, "Panier vide.");
    }
    for line in cart.lines() {
        writeln!(out, "- {}\t{}", line.title, format_eur(line.price.amount()))?;
    }
    write_cart_summary(out, storefront)
}
