//! JSON file stores.
//!
//! Each store owns one file. Loads read the whole file; saves serialize the
//! whole collection to a temp file in the same directory and rename it over
//! the target, so a failed write never leaves a truncated store behind.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value as JsonValue;
use tempfile::NamedTempFile;

use maloka_products::ProductCatalog;
use maloka_sales::SalesLedger;

use super::r#trait::{ProductStore, SalesStore, StoreError};

/// Product catalog persisted as a JSON array of `{name, brand, price}`.
#[derive(Debug, Clone)]
pub struct JsonFileProductStore {
    path: PathBuf,
}

impl JsonFileProductStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProductStore for JsonFileProductStore {
    fn load(&self) -> Result<ProductCatalog, StoreError> {
        let Some(bytes) = read_optional(&self.path)? else {
            tracing::info!(path = %self.path.display(), "product store not found, starting with an empty catalog");
            return Ok(ProductCatalog::default());
        };

        let catalog: ProductCatalog = serde_json::from_slice(&bytes)
            .map_err(|e| StoreError::malformed(self.path.display().to_string(), e))?;

        tracing::info!(path = %self.path.display(), products = catalog.len(), "product catalog loaded");
        Ok(catalog)
    }

    fn save(&self, catalog: &ProductCatalog) -> Result<(), StoreError> {
        write_json_atomic(&self.path, catalog)?;
        tracing::info!(path = %self.path.display(), products = catalog.len(), "product catalog saved");
        Ok(())
    }
}

/// Sales ledger persisted as a JSON object `date -> name -> {price, quantity}`.
#[derive(Debug, Clone)]
pub struct JsonFileSalesStore {
    path: PathBuf,
}

impl JsonFileSalesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SalesStore for JsonFileSalesStore {
    fn load(&self) -> Result<SalesLedger, StoreError> {
        let Some(bytes) = read_optional(&self.path)? else {
            tracing::info!(path = %self.path.display(), "sales store not found, starting with an empty ledger");
            return Ok(SalesLedger::default());
        };

        let location = self.path.display().to_string();
        let value: JsonValue =
            serde_json::from_slice(&bytes).map_err(|e| StoreError::malformed(location.clone(), e))?;

        // A store whose top level is not an object is treated as empty.
        if !value.is_object() {
            tracing::warn!(path = %location, "sales store is not a JSON object, starting with an empty ledger");
            return Ok(SalesLedger::default());
        }

        let ledger: SalesLedger =
            serde_json::from_value(value).map_err(|e| StoreError::malformed(location, e))?;

        tracing::info!(path = %self.path.display(), days = ledger.days().count(), "sales ledger loaded");
        Ok(ledger)
    }

    fn save(&self, ledger: &SalesLedger) -> Result<(), StoreError> {
        write_json_atomic(&self.path, ledger)?;
        tracing::info!(path = %self.path.display(), "sales ledger saved");
        Ok(())
    }
}

/// Read the whole file, mapping "not found" to `None`.
fn read_optional(path: &Path) -> Result<Option<Vec<u8>>, StoreError> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(StoreError::io(path, err)),
    }
}

fn write_json_atomic<T>(path: &Path, value: &T) -> Result<(), StoreError>
where
    T: Serialize + ?Sized,
{
    let bytes = serde_json::to_vec_pretty(value)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&dir).map_err(|e| StoreError::io(&dir, e))?;

    let mut tmp = NamedTempFile::new_in(&dir).map_err(|e| StoreError::io(&dir, e))?;
    tmp.write_all(&bytes).map_err(|e| StoreError::io(tmp.path(), e))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| StoreError::io(tmp.path(), e))?;
    tmp.persist(path).map_err(|e| StoreError::io(path, e.error))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use maloka_core::{Price, SaleDay};
    use maloka_products::Product;
    use maloka_sales::Cart;

    fn product(name: &str, brand: &str, amount: f64) -> Product {
        Product::new(name, brand, Price::new(amount).unwrap()).unwrap()
    }

    #[test]
    fn missing_product_file_loads_empty_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileProductStore::new(dir.path().join("products.json"));

        assert!(store.load().unwrap().is_empty());
        assert!(store.load().unwrap().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn product_catalog_round_trips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileProductStore::new(dir.path().join("products.json"));
        let catalog = ProductCatalog::new(vec![
            product("Coffee", "Maloka", 4.5),
            product("Coffee", "Maloka", 4.5),
            product("Bread", "Home", 2.0),
        ]);

        store.save(&catalog).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded, catalog);

        store.save(&loaded).unwrap();
        assert_eq!(store.load().unwrap(), catalog);
    }

    #[test]
    fn reads_hand_written_product_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.json");
        fs::write(
            &path,
            r#"[{"name": "Arepa", "brand": "Doña", "price": 3}, {"name": "Tinto", "brand": "Juan", "price": 1.5}]"#,
        )
        .unwrap();

        let catalog = JsonFileProductStore::new(&path).load().unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0).unwrap().to_string(), "Arepa (Doña) - $3");
        assert_eq!(catalog.get(1).unwrap().price().amount(), 1.5);
    }

    #[test]
    fn invalid_product_records_are_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.json");
        fs::write(&path, r#"[{"name": "Arepa", "brand": "Doña", "price": "three"}]"#).unwrap();

        let err = JsonFileProductStore::new(&path).load().unwrap_err();
        assert!(matches!(err, StoreError::Malformed { .. }));
    }

    #[test]
    fn discount_lines_and_blank_names_load_and_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.json");
        fs::write(
            &path,
            r#"[{"name": "Discount", "brand": "Shop", "price": -2},
                {"name": "", "brand": "", "price": 0},
                {"name": "Arepa", "brand": "Doña", "price": 3}]"#,
        )
        .unwrap();
        let store = JsonFileProductStore::new(&path);

        let catalog = store.load().unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get(0).unwrap().price().amount(), -2.0);
        assert_eq!(catalog.get(1).unwrap().name(), "");

        store.save(&catalog).unwrap();
        assert_eq!(store.load().unwrap(), catalog);
    }

    #[test]
    fn negative_sale_prices_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sales.json");
        fs::write(&path, r#"{"2024-05-01": {"Discount": {"price": -2, "quantity": 3}}}"#).unwrap();

        let ledger = JsonFileSalesStore::new(&path).load().unwrap();
        let sales = ledger.day(&SaleDay::from_ymd(2024, 5, 1).unwrap()).unwrap();
        assert_eq!(sales.get("Discount").unwrap().price().amount(), -2.0);
        assert_eq!(sales.revenue().amount(), -6.0);
    }

    #[test]
    fn save_overwrites_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileProductStore::new(dir.path().join("products.json"));

        store
            .save(&ProductCatalog::new(vec![product("A", "x", 1.0), product("B", "y", 2.0)]))
            .unwrap();
        store
            .save(&ProductCatalog::new(vec![product("C", "z", 3.0)]))
            .unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.get(0).unwrap().name(), "C");
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileSalesStore::new(dir.path().join("nested/data/sales.json"));

        store.save(&SalesLedger::default()).unwrap();
        assert!(store.path().exists());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, b"plain file").unwrap();
        let store = JsonFileSalesStore::new(blocker.join("sales.json"));

        let err = store.save(&SalesLedger::default()).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }

    #[test]
    fn non_object_sales_store_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sales.json");

        for content in ["[]", "42", "\"text\"", "null"] {
            fs::write(&path, content).unwrap();
            let ledger = JsonFileSalesStore::new(&path).load().unwrap();
            assert!(ledger.is_empty(), "content {content} should load as empty");
        }
    }

    #[test]
    fn unparseable_sales_store_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sales.json");
        fs::write(&path, "{not json").unwrap();

        let err = JsonFileSalesStore::new(&path).load().unwrap_err();
        assert!(matches!(err, StoreError::Malformed { .. }));
    }

    #[test]
    fn invalid_sales_entries_are_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sales.json");
        fs::write(&path, r#"{"2024-05-01": {"A": {"price": 1}}}"#).unwrap();

        let err = JsonFileSalesStore::new(&path).load().unwrap_err();
        assert!(matches!(err, StoreError::Malformed { .. }));
    }

    #[test]
    fn sales_ledger_round_trips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileSalesStore::new(dir.path().join("sales.json"));

        let mut cart = Cart::new();
        cart.add(product("A", "x", 10.0));
        cart.add(product("B", "y", 0.5));
        let mut ledger = SalesLedger::new();
        ledger.record(&cart, SaleDay::from_ymd(2024, 5, 1).unwrap()).unwrap();
        ledger.record(&cart, SaleDay::from_ymd(2024, 5, 2).unwrap()).unwrap();

        store.save(&ledger).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded, ledger);

        store.save(&loaded).unwrap();
        assert_eq!(store.load().unwrap(), ledger);
    }
}
