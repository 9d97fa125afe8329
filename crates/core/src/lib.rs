//! `maloka-core` — shared record types for the point-of-sale domain.
//!
//! This crate contains **pure domain** primitives (no IO, no storage).

pub mod day;
pub mod error;
pub mod price;
pub mod value_object;

pub use day::SaleDay;
pub use error::{DomainError, DomainResult};
pub use price::Price;
pub use value_object::ValueObject;
