use maloka_core::Price;
use maloka_products::Product;

/// Cart lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartState {
    Empty,
    NonEmpty,
}

/// Products selected for the sale in progress.
///
/// Each entry is one unit; adding the same product twice sells two units.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<Product>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, product: Product) {
        tracing::debug!(product = %product, "added to cart");
        self.items.push(product);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of the prices of the current items, as captured when they were added.
    pub fn total(&self) -> Price {
        self.items.iter().map(Product::price).sum()
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn state(&self) -> CartState {
        if self.items.is_empty() {
            CartState::Empty
        } else {
            CartState::NonEmpty
        }
    }
}
