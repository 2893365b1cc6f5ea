//! SEYA Storefront library.
//!
//! Client-side logic of the SEYA shop: catalog loading with seed fallback,
//! the session cart, checkout-session initiation, the contact form state
//! machine and the blog listing, plus the static page rendering on top.
//!
//! # Architecture
//!
//! - [`backend`] - typed access to the remote API ([`backend::Backend`])
//! - [`catalog`], [`cart`], [`checkout`], [`contact`], [`blog`] - one
//!   component each, all generic over the backend
//! - [`state::Storefront`] - owns the backend and the cart, wires components
//! - [`view`] - askama page rendering
//!
//! Everything runs on one thread: state lives in plain owned values mutated
//! through `&mut`, and each network call is awaited before state changes.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod backend;
pub mod blog;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod contact;
pub mod error;
pub mod filters;
pub mod state;
pub mod view;

pub use state::Storefront;
