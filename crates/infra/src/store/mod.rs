//! Persistence boundary for the catalog and the sales ledger.
//!
//! Storage traits live in `trait.rs`; JSON files are the production backend
//! and the in-memory stores back tests.

pub mod in_memory;
pub mod json_file;
pub mod r#trait;

pub use in_memory::{InMemoryProductStore, InMemorySalesStore};
pub use json_file::{JsonFileProductStore, JsonFileSalesStore};
pub use r#trait::{ProductStore, SalesStore, StoreError};
