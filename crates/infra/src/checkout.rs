//! Sale registration pipeline (application-level orchestration).
//!
//! ```text
//! Cart
//!   ↓
//! 1. Reject an empty cart (no mutation, no save)
//!   ↓
//! 2. Fold cart items into a copy of the ledger under `today`
//!   ↓
//! 3. Persist the full ledger (overwrite)
//!   ↓
//! 4. Commit the copy in memory
//! ```
//!
//! The ledger the caller holds only changes once the store accepted the write,
//! so a failed persist leaves memory and disk in agreement.

use thiserror::Error;

use maloka_core::{DomainError, Price, SaleDay};
use maloka_sales::{Cart, SalesLedger};

use crate::store::{SalesStore, StoreError};

#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Precondition or invariant failure; nothing was written.
    #[error("sale rejected: {0}")]
    Rejected(#[from] DomainError),

    /// The ledger could not be persisted; the in-memory ledger is unchanged.
    #[error("failed to persist sales ledger: {0}")]
    Store(#[from] StoreError),
}

impl CheckoutError {
    pub fn is_empty_cart(&self) -> bool {
        matches!(self, CheckoutError::Rejected(DomainError::EmptyCart))
    }
}

/// Record `cart` as sold on `today` and persist the whole ledger.
///
/// Returns the cart total. Every call rewrites the full store.
pub fn register_sale<S>(
    store: &S,
    ledger: &mut SalesLedger,
    cart: &Cart,
    today: SaleDay,
) -> Result<Price, CheckoutError>
where
    S: SalesStore + ?Sized,
{
    if cart.is_empty() {
        tracing::warn!(%today, "checkout attempted with an empty cart");
        return Err(DomainError::EmptyCart.into());
    }

    let mut next = ledger.clone();
    let total = next.record(cart, today)?;

    if let Err(err) = store.save(&next) {
        tracing::error!(%today, error = %err, "failed to persist sale");
        return Err(err.into());
    }

    *ledger = next;
    tracing::info!(%today, items = cart.len(), %total, "sale registered");
    Ok(total)
}
