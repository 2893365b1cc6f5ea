//! SEYA CLI - the storefront in a terminal.
//!
//! # Usage
//!
//! ```bash
//! # List the catalog (seeds the demo catalog on an empty backend)
//! seya catalog
//!
//! # Send a message through the contact form
//! seya contact --name "Awa" --email awa@seya.fr --subject "Taille" --message "..."
//!
//! # Interactive shopping session (list, add <id>, cart, checkout, quit)
//! seya shop
//!
//! # Write the static page
//! seya render --output index.html
//! ```
//!
//! # Environment Variables
//!
//! - `SEYA_BACKEND_URL` - Backend base URL (default `http://localhost:8000`)
//! - `SEYA_PAGE_URL` - Page URL used as checkout return URL
//! - `SENTRY_DSN` - Enables error tracking when set

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sentry::integrations::tracing as sentry_tracing;
use seya_storefront::config::StorefrontConfig;
use seya_storefront::error::StorefrontError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "seya")]
#[command(author, version, about = "SEYA storefront in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the product catalog
    Catalog,
    /// List blog posts
    Blog,
    /// Submit the contact form
    Contact(commands::contact::ContactArgs),
    /// Interactive shopping session on stdin
    Shop,
    /// Render the storefront page as HTML
    Render {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &StorefrontConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry.dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry
                .environment
                .clone()
                .map(std::borrow::Cow::Owned),
            sample_rate: config.sentry.sample_rate,
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Route warnings and errors to Sentry events, lower levels to breadcrumbs.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "seya_storefront=info,seya_cli=info".into());

    // stdout carries command output; logs go to stderr
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    // Sentry must be initialized before the tracing subscriber
    let config = StorefrontConfig::from_env().map_err(StorefrontError::from);
    let sentry_guard = config.as_ref().ok().and_then(init_sentry);
    init_tracing();

    let result = match config {
        Ok(config) => run(cli, &config).await,
        Err(e) => Err(e.into()),
    };

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        drop(sentry_guard);
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: &StorefrontConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Catalog => commands::catalog::run(config, &mut stdout).await?,
        Commands::Blog => commands::blog::run(config, &mut stdout).await?,
        Commands::Contact(args) => commands::contact::run(config, args, &mut stdout).await?,
        Commands::Shop => {
            let input = tokio::io::BufReader::new(tokio::io::stdin());
            commands::shop::run(config, input, &mut stdout).await?;
        }
        Commands::Render { output } => {
            commands::render::run(config, output.as_deref(), &mut stdout).await?;
        }
    }
    Ok(())
}
