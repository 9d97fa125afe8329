use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use maloka_products::ProductCatalog;
use maloka_sales::SalesLedger;

/// Storage operation error.
///
/// These are **infrastructure errors** (IO, decoding) as opposed to domain
/// errors (validation, preconditions). A missing store is not an error: loads
/// return an empty collection instead.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Stored content exists but does not match the expected schema.
    #[error("malformed store at {location}: {reason}")]
    Malformed { location: String, reason: String },

    /// Reading or writing the backing file failed.
    #[error("io error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serializing in-memory state failed.
    #[error("failed to encode store contents: {0}")]
    Encode(#[from] serde_json::Error),
}

impl StoreError {
    pub fn malformed(location: impl Into<String>, reason: impl ToString) -> Self {
        Self::Malformed {
            location: location.into(),
            reason: reason.to_string(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Persistence boundary for the product catalog.
///
/// `save` always replaces the full content.
pub trait ProductStore: Send + Sync {
    fn load(&self) -> Result<ProductCatalog, StoreError>;
    fn save(&self, catalog: &ProductCatalog) -> Result<(), StoreError>;
}

/// Persistence boundary for the sales ledger.
///
/// `save` always replaces the full content; there is no incremental append.
pub trait SalesStore: Send + Sync {
    fn load(&self) -> Result<SalesLedger, StoreError>;
    fn save(&self, ledger: &SalesLedger) -> Result<(), StoreError>;
}

impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    fn load(&self) -> Result<ProductCatalog, StoreError> {
        (**self).load()
    }

    fn save(&self, catalog: &ProductCatalog) -> Result<(), StoreError> {
        (**self).save(catalog)
    }
}

impl<S> SalesStore for Arc<S>
where
    S: SalesStore + ?Sized,
{
    fn load(&self) -> Result<SalesLedger, StoreError> {
        (**self).load()
    }

    fn save(&self, ledger: &SalesLedger) -> Result<(), StoreError> {
        (**self).save(ledger)
    }
}
