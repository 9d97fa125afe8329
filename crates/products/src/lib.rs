//! Products domain module.
//!
//! This crate contains the product record and the ordered catalog, implemented
//! purely as deterministic domain logic (no IO, no storage).

pub mod catalog;
pub mod product;

pub use catalog::ProductCatalog;
pub use product::{Product, ProductRecord};
