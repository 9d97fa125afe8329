use serde::{Deserialize, Serialize};

use maloka_core::{DomainError, DomainResult, Price};

/// Wire shape of a product in the product store.
///
/// Every field is required and unknown fields are rejected. Conversion into
/// [`Product`] only requires a finite price; stored names and prices are
/// taken as they are.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductRecord {
    pub name: String,
    pub brand: String,
    pub price: f64,
}

/// A sellable product.
///
/// Immutable once constructed. `name` is the key sales are aggregated under;
/// two products with the same name but different brands share ledger entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProductRecord", into = "ProductRecord")]
pub struct Product {
    name: String,
    brand: String,
    price: Price,
}

impl Product {
    /// A new catalog entry: the name must not be blank and the price must not
    /// be negative.
    pub fn new(name: impl Into<String>, brand: impl Into<String>, price: Price) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("product name must not be empty"));
        }
        if price.amount() < 0.0 {
            return Err(DomainError::validation(format!(
                "product '{name}': price must not be negative"
            )));
        }

        Ok(Self {
            name,
            brand: brand.into(),
            price,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn price(&self) -> Price {
        self.price
    }
}

impl TryFrom<ProductRecord> for Product {
    type Error = DomainError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        let price = Price::new(record.price).map_err(|e| match e {
            DomainError::Validation(reason) => {
                DomainError::validation(format!("product '{}': {reason}", record.name))
            }
            other => other,
        })?;

        Ok(Self {
            name: record.name,
            brand: record.brand,
            price,
        })
    }
}

impl From<Product> for ProductRecord {
    fn from(product: Product) -> Self {
        Self {
            name: product.name,
            brand: product.brand,
            price: product.price.amount(),
        }
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} ({}) - ${}", self.name, self.brand, self.price)
    }
}
