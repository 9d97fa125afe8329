//! Application context and the operations the front end invokes.

use thiserror::Error;

use maloka_core::{DomainError, Price};
use maloka_infra::{
    CheckoutError, JsonFileProductStore, JsonFileSalesStore, ProductStore, SalesStore, StoreError,
    register_sale,
};
use maloka_products::{Product, ProductCatalog};
use maloka_sales::{Cart, SalesLedger};

use crate::clock::{Clock, SystemClock};
use crate::config::DesktopConfig;
use crate::types::{CartView, CheckoutReceipt, DailySalesView, ProductView};

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("no product at position {0}")]
    UnknownProduct(usize),

    #[error("the cart is empty")]
    EmptyCart,

    #[error(transparent)]
    Domain(DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl CommandError {
    /// The user can fix this without touching storage.
    pub fn is_precondition(&self) -> bool {
        match self {
            CommandError::UnknownProduct(_) | CommandError::EmptyCart => true,
            CommandError::Domain(err) => err.is_precondition(),
            CommandError::Store(_) => false,
        }
    }
}

impl From<DomainError> for CommandError {
    fn from(value: DomainError) -> Self {
        match value {
            DomainError::EmptyCart => CommandError::EmptyCart,
            other => CommandError::Domain(other),
        }
    }
}

impl From<CheckoutError> for CommandError {
    fn from(value: CheckoutError) -> Self {
        match value {
            CheckoutError::Rejected(err) => err.into(),
            CheckoutError::Store(err) => CommandError::Store(err),
        }
    }
}

/// Process-wide state: one catalog, one cart, one ledger.
///
/// Owned by the front end and passed to whatever needs it.
pub struct AppState {
    catalog: ProductCatalog,
    cart: Cart,
    ledger: SalesLedger,
    product_store: Box<dyn ProductStore>,
    sales_store: Box<dyn SalesStore>,
    clock: Box<dyn Clock>,
}

impl AppState {
    /// Open the JSON file stores named by `config`, using the host clock.
    pub fn open(config: &DesktopConfig) -> Result<Self, CommandError> {
        Self::load(
            Box::new(JsonFileProductStore::new(&config.products_path)),
            Box::new(JsonFileSalesStore::new(&config.sales_path)),
            Box::new(SystemClock),
        )
    }

    /// Load catalog and ledger from the given stores. The cart starts empty.
    pub fn load(
        product_store: Box<dyn ProductStore>,
        sales_store: Box<dyn SalesStore>,
        clock: Box<dyn Clock>,
    ) -> Result<Self, CommandError> {
        let catalog = product_store.load()?;
        let ledger = sales_store.load()?;

        tracing::info!(products = catalog.len(), "application state loaded");

        Ok(Self {
            catalog,
            cart: Cart::new(),
            ledger,
            product_store,
            sales_store,
            clock,
        })
    }

    /// All products, in catalog order.
    pub fn products(&self) -> Vec<ProductView> {
        self.catalog
            .iter()
            .enumerate()
            .map(|(index, product)| ProductView::new(index, product))
            .collect()
    }

    /// Put one unit of the product at `index` into the cart.
    pub fn add_to_cart(&mut self, index: usize) -> Result<ProductView, CommandError> {
        let product = self
            .catalog
            .get(index)
            .ok_or(CommandError::UnknownProduct(index))?;
        let view = ProductView::new(index, product);
        self.cart.add(product.clone());
        Ok(view)
    }

    pub fn cart(&self) -> CartView {
        CartView {
            items: self.cart.items().iter().map(Product::to_string).collect(),
            total: self.cart.total(),
        }
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
        tracing::debug!("cart cleared");
    }

    /// Register the cart as sold today, persist the ledger and empty the cart.
    ///
    /// On any error the cart and ledger are left as they were.
    pub fn finalize_sale(&mut self) -> Result<CheckoutReceipt, CommandError> {
        let day = self.clock.today();
        let items = self.cart.len();
        let total = register_sale(self.sales_store.as_ref(), &mut self.ledger, &self.cart, day)?;
        self.cart.clear();

        Ok(CheckoutReceipt { day, items, total })
    }

    /// Sales recorded for today (empty view when there are none).
    pub fn todays_sales(&self) -> DailySalesView {
        let day = self.clock.today();
        DailySalesView::new(day, self.ledger.day(&day))
    }

    /// Append a product to the catalog and persist the catalog.
    pub fn add_product(
        &mut self,
        name: &str,
        brand: &str,
        price: f64,
    ) -> Result<ProductView, CommandError> {
        let product = Product::new(name, brand, Price::non_negative(price)?)?;
        let view = ProductView::new(self.catalog.len(), &product);

        let mut next = self.catalog.clone();
        next.push(product);
        self.product_store.save(&next)?;
        self.catalog = next;

        tracing::info!(product = %view.label, "product added to catalog");
        Ok(view)
    }

    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    pub fn ledger(&self) -> &SalesLedger {
        &self.ledger
    }
}
