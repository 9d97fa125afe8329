//! Ordered product catalog.

use serde::{Deserialize, Serialize};

use crate::product::Product;

/// The full set of sellable products, in display order.
///
/// Loaded once at startup. The sale flow only reads it; there is no stock
/// depletion. Serializes as a plain JSON array of product records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by its position in the catalog (list selection).
    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Append a product at the end of the catalog. Duplicates are allowed.
    pub fn push(&mut self, product: Product) {
        self.products.push(product);
    }

    pub fn into_products(self) -> Vec<Product> {
        self.products
    }
}

impl From<Vec<Product>> for ProductCatalog {
    fn from(products: Vec<Product>) -> Self {
        Self::new(products)
    }
}
