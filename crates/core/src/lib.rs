//! SEYA Core - Shared types library.
//!
//! This crate provides the domain types shared by the SEYA components:
//! - `storefront` - Catalog, cart, checkout and contact logic
//! - `cli` - Command-line storefront session
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. The wire
//! shapes of the backend's products, blog posts and contact submissions live
//! here so every consumer agrees on them.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for ids, prices and emails, plus the
//!   catalog and contact records

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
