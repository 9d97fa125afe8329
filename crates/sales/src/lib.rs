//! Sales domain module.
//!
//! This crate contains the session cart and the day-keyed sales ledger,
//! implemented purely as deterministic domain logic (no IO, no storage).

pub mod cart;
pub mod ledger;

pub use cart::{Cart, CartState};
pub use ledger::{DailySales, SaleEntry, SaleEntryRecord, SalesLedger};
