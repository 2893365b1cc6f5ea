//! Core types for the SEYA storefront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod contact;
pub mod email;
pub mod id;
pub mod price;
pub mod product;

pub use contact::ContactSubmission;
pub use email::{Email, EmailError};
pub use id::*;
pub use price::Price;
pub use product::{BlogPost, Product};
