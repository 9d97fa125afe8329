//! Day-keyed sales ledger.
//!
//! The ledger is the historical record of finalized sales, grouped by calendar
//! day and then by product name. It is a plain value; persisting it after each
//! registration is the job of the storage layer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use maloka_core::{DomainError, DomainResult, Price, SaleDay};

use crate::cart::Cart;

/// Wire shape of one ledger entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SaleEntryRecord {
    pub price: f64,
    pub quantity: u64,
}

/// Units of one product sold on one day, at the first price seen that day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SaleEntryRecord", into = "SaleEntryRecord")]
pub struct SaleEntry {
    price: Price,
    quantity: u32,
}

impl SaleEntry {
    /// A fresh entry for the first unit sold.
    pub fn first_sale(price: Price) -> Self {
        Self { price, quantity: 1 }
    }

    pub fn new(price: Price, quantity: u32) -> DomainResult<Self> {
        if quantity == 0 {
            return Err(DomainError::validation("sale quantity must be at least 1"));
        }
        Ok(Self { price, quantity })
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Value of this entry: price × quantity.
    pub fn subtotal(&self) -> Price {
        self.price.times(self.quantity)
    }

    fn increment(&mut self) -> DomainResult<()> {
        self.quantity = self
            .quantity
            .checked_add(1)
            .ok_or_else(|| DomainError::invariant("sale quantity overflow"))?;
        Ok(())
    }
}

impl TryFrom<SaleEntryRecord> for SaleEntry {
    type Error = DomainError;

    fn try_from(record: SaleEntryRecord) -> Result<Self, Self::Error> {
        let price = Price::new(record.price)?;
        let quantity = u32::try_from(record.quantity)
            .map_err(|_| DomainError::validation("sale quantity out of range"))?;
        SaleEntry::new(price, quantity)
    }
}

impl From<SaleEntry> for SaleEntryRecord {
    fn from(entry: SaleEntry) -> Self {
        Self {
            price: entry.price.amount(),
            quantity: u64::from(entry.quantity),
        }
    }
}

/// All sales of a single day, keyed by product name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DailySales {
    entries: BTreeMap<String, SaleEntry>,
}

impl DailySales {
    pub fn get(&self, name: &str) -> Option<&SaleEntry> {
        self.entries.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SaleEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Σ price × quantity over the day's entries.
    pub fn revenue(&self) -> Price {
        self.entries.values().map(SaleEntry::subtotal).sum()
    }

    /// Total units sold over the day.
    pub fn units(&self) -> u64 {
        self.entries.values().map(|e| u64::from(e.quantity)).sum()
    }

    fn record_unit(&mut self, name: &str, price: Price) -> DomainResult<()> {
        match self.entries.get_mut(name) {
            Some(entry) => entry.increment(),
            None => {
                self.entries.insert(name.to_string(), SaleEntry::first_sale(price));
                Ok(())
            }
        }
    }
}

/// Finalized sales grouped by calendar day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SalesLedger {
    days: BTreeMap<SaleDay, DailySales>,
}

impl SalesLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold the cart into the entries for `day`.
    ///
    /// Items are processed in cart order: a product already sold that day gets
    /// its quantity bumped by one and keeps its first-seen price; otherwise a
    /// new entry is created at the cart item's price. Returns the cart total.
    ///
    /// An empty cart is rejected with [`DomainError::EmptyCart`] and the ledger
    /// is left untouched; on any error the ledger is unchanged.
    pub fn record(&mut self, cart: &Cart, day: SaleDay) -> DomainResult<Price> {
        if cart.is_empty() {
            return Err(DomainError::EmptyCart);
        }

        let mut sales = self.days.get(&day).cloned().unwrap_or_default();
        for product in cart.items() {
            sales.record_unit(product.name(), product.price())?;
        }
        self.days.insert(day, sales);

        tracing::debug!(%day, items = cart.len(), "sale recorded in ledger");
        Ok(cart.total())
    }

    pub fn day(&self, day: &SaleDay) -> Option<&DailySales> {
        self.days.get(day)
    }

    /// Days with recorded sales, oldest first.
    pub fn days(&self) -> impl Iterator<Item = (&SaleDay, &DailySales)> {
        self.days.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
