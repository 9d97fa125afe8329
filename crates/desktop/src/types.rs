//! View models handed to the presentation layer.
//!
//! These are plain data; all user-facing wording is left to the front end.

use maloka_core::{Price, SaleDay};
use maloka_products::Product;
use maloka_sales::DailySales;
use serde::Serialize;

/// A catalog entry as shown in the product list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductView {
    /// Zero-based position in the catalog; pass back to `add_to_cart`.
    pub index: usize,
    pub name: String,
    pub brand: String,
    pub price: Price,
    pub label: String,
}

impl ProductView {
    pub fn new(index: usize, product: &Product) -> Self {
        Self {
            index,
            name: product.name().to_string(),
            brand: product.brand().to_string(),
            price: product.price(),
            label: product.to_string(),
        }
    }
}

/// Current cart contents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartView {
    pub items: Vec<String>,
    pub total: Price,
}

/// Outcome of a finalized sale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutReceipt {
    pub day: SaleDay,
    pub items: usize,
    pub total: Price,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySalesLine {
    pub name: String,
    pub price: Price,
    pub quantity: u32,
    pub subtotal: Price,
}

/// One day's sales, by product name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySalesView {
    pub day: SaleDay,
    pub lines: Vec<DailySalesLine>,
    pub revenue: Price,
}

impl DailySalesView {
    pub fn new(day: SaleDay, sales: Option<&DailySales>) -> Self {
        let Some(sales) = sales else {
            return Self {
                day,
                lines: Vec::new(),
                revenue: Price::ZERO,
            };
        };

        Self {
            day,
            lines: sales
                .iter()
                .map(|(name, entry)| DailySalesLine {
                    name: name.to_string(),
                    price: entry.price(),
                    quantity: entry.quantity(),
                    subtotal: entry.subtotal(),
                })
                .collect(),
            revenue: sales.revenue(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maloka_sales::{Cart, SalesLedger};

    #[test]
    fn daily_view_serializes_for_the_front_end() {
        let day = SaleDay::from_ymd(2024, 9, 1).unwrap();
        let mut cart = Cart::new();
        cart.add(Product::new("Tinto", "Juan", Price::new(1.5).unwrap()).unwrap());
        cart.add(Product::new("Tinto", "Juan", Price::new(1.5).unwrap()).unwrap());
        let mut ledger = SalesLedger::new();
        ledger.record(&cart, day).unwrap();

        let view = DailySalesView::new(day, ledger.day(&day));
        assert_eq!(
            serde_json::to_value(&view).unwrap(),
            serde_json::json!({
                "day": "2024-09-01",
                "lines": [{"name": "Tinto", "price": 1.5, "quantity": 2, "subtotal": 3.0}],
                "revenue": 3.0
            })
        );
    }

    #[test]
    fn missing_day_gives_empty_view() {
        let day = SaleDay::from_ymd(2024, 9, 2).unwrap();
        let view = DailySalesView::new(day, None);
        assert!(view.is_empty());
        assert_eq!(view.revenue, Price::ZERO);
    }
}
