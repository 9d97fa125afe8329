use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use maloka_products::ProductCatalog;
use maloka_sales::SalesLedger;

use super::r#trait::{ProductStore, SalesStore, StoreError};

const LOCATION: &str = "memory";

/// In-memory product store.
///
/// Intended for tests/dev. `None` models a store that was never written.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    catalog: RwLock<Option<ProductCatalog>>,
    saves: AtomicUsize,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(catalog: ProductCatalog) -> Self {
        Self {
            catalog: RwLock::new(Some(catalog)),
            saves: AtomicUsize::new(0),
        }
    }

    /// Number of successful `save` calls.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl ProductStore for InMemoryProductStore {
    fn load(&self) -> Result<ProductCatalog, StoreError> {
        let catalog = self
            .catalog
            .read()
            .map_err(|_| StoreError::malformed(LOCATION, "lock poisoned"))?;
        Ok(catalog.clone().unwrap_or_default())
    }

    fn save(&self, catalog: &ProductCatalog) -> Result<(), StoreError> {
        let mut slot = self
            .catalog
            .write()
            .map_err(|_| StoreError::malformed(LOCATION, "lock poisoned"))?;
        *slot = Some(catalog.clone());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// In-memory sales store.
///
/// Intended for tests/dev. Can be switched into a failing mode to exercise
/// write-failure paths.
#[derive(Debug, Default)]
pub struct InMemorySalesStore {
    ledger: RwLock<Option<SalesLedger>>,
    saves: AtomicUsize,
    failing: AtomicBool,
}

impl InMemorySalesStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ledger(ledger: SalesLedger) -> Self {
        Self {
            ledger: RwLock::new(Some(ledger)),
            ..Self::default()
        }
    }

    /// Number of successful `save` calls.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Make subsequent saves fail with an IO error (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Last saved ledger, if any.
    pub fn snapshot(&self) -> Option<SalesLedger> {
        self.ledger.read().ok().and_then(|l| l.clone())
    }
}

impl SalesStore for InMemorySalesStore {
    fn load(&self) -> Result<SalesLedger, StoreError> {
        let ledger = self
            .ledger
            .read()
            .map_err(|_| StoreError::malformed(LOCATION, "lock poisoned"))?;
        Ok(ledger.clone().unwrap_or_default())
    }

    fn save(&self, ledger: &SalesLedger) -> Result<(), StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::io(
                LOCATION,
                std::io::Error::other("simulated write failure"),
            ));
        }

        let mut slot = self
            .ledger
            .write()
            .map_err(|_| StoreError::malformed(LOCATION, "lock poisoned"))?;
        *slot = Some(ledger.clone());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwritten_stores_load_empty() {
        assert!(InMemoryProductStore::new().load().unwrap().is_empty());
        assert!(InMemorySalesStore::new().load().unwrap().is_empty());
    }

    #[test]
    fn failing_mode_rejects_saves() {
        let store = InMemorySalesStore::new();
        store.set_failing(true);
        assert!(matches!(
            store.save(&SalesLedger::default()),
            Err(StoreError::Io { .. })
        ));
        assert_eq!(store.save_count(), 0);

        store.set_failing(false);
        store.save(&SalesLedger::default()).unwrap();
        assert_eq!(store.save_count(), 1);
    }
}
