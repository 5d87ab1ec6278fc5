//! Products domain module.
//!
//! This crate contains the catalogue's product records and category rules,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod product;
pub mod seed;

pub use orderdesk_core::ProductId;
pub use product::{Product, ProductCategory};
pub use seed::seed_products;
