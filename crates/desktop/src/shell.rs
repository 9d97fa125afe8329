//! Line-oriented terminal front end.
//!
//! Stands in for the point-of-sale window: each input line is one user
//! action. All user-facing wording lives here; `AppState` only returns data
//! and errors.

use std::io::{self, BufRead, Write};

use crate::commands::{AppState, CommandError};

const HELP: &str = "\
commands:
  products                          list available products
  add <n>                           add product number <n> to the cart
  cart                              show the cart and its total
  clear                             empty the cart
  checkout                          finalize the sale
  sales                             show today's sales
  add-product <price> <brand> <name...>
                                    add a product to the catalog
  help                              show this help
  quit                              exit";

/// Parsed user action.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Products,
    Add(usize),
    Cart,
    Clear,
    Checkout,
    Sales,
    AddProduct {
        price: f64,
        brand: String,
        name: String,
    },
    Help,
    Quit,
}

impl ShellCommand {
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(None);
        };

        let command = match head.to_ascii_lowercase().as_str() {
            "products" | "ls" => ShellCommand::Products,
            "add" => {
                let n = words.next().ok_or("usage: add <n>")?;
                let n: usize = n
                    .parse()
                    .map_err(|_| format!("'{n}' is not a product number"))?;
                ShellCommand::Add(n)
            }
            "cart" => ShellCommand::Cart,
            "clear" => ShellCommand::Clear,
            "checkout" | "sell" => ShellCommand::Checkout,
            "sales" => ShellCommand::Sales,
            "add-product" => {
                const USAGE: &str = "usage: add-product <price> <brand> <name...>";
                let price = words.next().ok_or(USAGE)?;
                let price: f64 = price
                    .parse()
                    .map_err(|_| format!("'{price}' is not a price"))?;
                let brand = words.next().ok_or(USAGE)?.to_string();
                let name = words.collect::<Vec<_>>().join(" ");
                if name.is_empty() {
                    return Err(USAGE.to_string());
                }
                ShellCommand::AddProduct { price, brand, name }
            }
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            other => return Err(format!("unknown command '{other}' (try 'help')")),
        };

        Ok(Some(command))
    }
}

pub struct Shell<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Process input lines until `quit` or end of input.
    ///
    /// Only terminal IO failures are returned; command failures are reported
    /// to the user and the loop continues.
    pub fn run(&mut self, state: &mut AppState) -> io::Result<()> {
        writeln!(self.output, "Maloka point of sale. Type 'help' for commands.")?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(());
            }

            match ShellCommand::parse(&line) {
                Ok(None) => {}
                Ok(Some(ShellCommand::Quit)) => return Ok(()),
                Ok(Some(command)) => self.execute(state, command)?,
                Err(msg) => writeln!(self.output, "{msg}")?,
            }
        }
    }

    fn execute(&mut self, state: &mut AppState, command: ShellCommand) -> io::Result<()> {
        let out = &mut self.output;
        match command {
            ShellCommand::Products => {
                let products = state.products();
                if products.is_empty() {
                    writeln!(out, "No products stored.")?;
                }
                for p in products {
                    writeln!(out, "{:>3}. {}", p.index + 1, p.label)?;
                }
            }
            ShellCommand::Add(n) => {
                // Shown numbering is 1-based.
                match n.checked_sub(1).map(|i| state.add_to_cart(i)) {
                    Some(Ok(view)) => writeln!(out, "Added to cart: {}", view.label)?,
                    Some(Err(CommandError::UnknownProduct(_))) | None => {
                        writeln!(out, "No product number {n}.")?
                    }
                    Some(Err(err)) => writeln!(out, "Error: {err}")?,
                }
            }
            ShellCommand::Cart => {
                let cart = state.cart();
                if cart.items.is_empty() {
                    writeln!(out, "The cart is empty.")?;
                }
                for item in &cart.items {
                    writeln!(out, "  {item}")?;
                }
                writeln!(out, "Total: ${:.2}", cart.total.amount())?;
            }
            ShellCommand::Clear => {
                state.clear_cart();
                writeln!(out, "Cart emptied.")?;
            }
            ShellCommand::Checkout => match state.finalize_sale() {
                Ok(receipt) => writeln!(
                    out,
                    "Sale registered for {}.\nTotal: ${:.2}",
                    receipt.day,
                    receipt.total.amount()
                )?,
                Err(CommandError::EmptyCart) => {
                    writeln!(out, "Empty cart: there are no products in the cart.")?
                }
                Err(err) => writeln!(out, "Sale NOT registered: {err}")?,
            },
            ShellCommand::Sales => {
                let sales = state.todays_sales();
                if sales.is_empty() {
                    writeln!(out, "No sales registered for today.")?;
                } else {
                    for line in &sales.lines {
                        writeln!(out, "{} ${} x{}", line.name, line.price, line.quantity)?;
                    }
                    writeln!(out, "Revenue {}: ${:.2}", sales.day, sales.revenue.amount())?;
                }
            }
            ShellCommand::AddProduct { price, brand, name } => {
                match state.add_product(&name, &brand, price) {
                    Ok(view) => writeln!(out, "Added product {}. {}", view.index + 1, view.label)?,
                    Err(err) => writeln!(out, "Product NOT added: {err}")?,
                }
            }
            ShellCommand::Help => writeln!(out, "{HELP}")?,
            ShellCommand::Quit => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::sync::Arc;

    use maloka_core::{Price, SaleDay};
    use maloka_infra::{InMemoryProductStore, InMemorySalesStore};
    use maloka_products::{Product, ProductCatalog};

    use super::*;
    use crate::clock::FixedClock;

    fn state() -> AppState {
        let catalog = ProductCatalog::new(vec![
            Product::new("Arepa", "Doña", Price::new(3.0).unwrap()).unwrap(),
            Product::new("Tinto", "Juan", Price::new(1.5).unwrap()).unwrap(),
        ]);
        AppState::load(
            Box::new(Arc::new(InMemoryProductStore::with_catalog(catalog))),
            Box::new(Arc::new(InMemorySalesStore::new())),
            Box::new(FixedClock::new(SaleDay::from_ymd(2024, 8, 9).unwrap())),
        )
        .unwrap()
    }

    fn run(input: &str, state: &mut AppState) -> String {
        let mut output = Vec::new();
        Shell::new(Cursor::new(input.as_bytes()), &mut output)
            .run(state)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn parses_commands() {
        assert_eq!(ShellCommand::parse("  \n"), Ok(None));
        assert_eq!(ShellCommand::parse("add 2"), Ok(Some(ShellCommand::Add(2))));
        assert_eq!(
            ShellCommand::parse("add-product 2.5 Doña Pan de bono"),
            Ok(Some(ShellCommand::AddProduct {
                price: 2.5,
                brand: "Doña".to_string(),
                name: "Pan de bono".to_string(),
            }))
        );
        assert!(ShellCommand::parse("add two").is_err());
        assert!(ShellCommand::parse("add-product 1 brand").is_err());
        assert!(ShellCommand::parse("dance").is_err());
    }

    #[test]
    fn full_sale_session() {
        let mut state = state();
        let out = run("products\nadd 1\nadd 1\nadd 2\ncheckout\nsales\nquit\n", &mut state);

        assert!(out.contains("  1. Arepa (Doña) - $3"));
        assert!(out.contains("Added to cart: Tinto (Juan) - $1.5"));
        assert!(out.contains("Sale registered for 2024-08-09.\nTotal: $7.50"));
        assert!(out.contains("Arepa $3 x2"));
        assert!(out.contains("Tinto $1.5 x1"));
        assert!(out.contains("Revenue 2024-08-09: $7.50"));
    }

    #[test]
    fn empty_checkout_is_reported() {
        let mut state = state();
        let out = run("checkout\nsales\n", &mut state);

        assert!(out.contains("Empty cart"));
        assert!(out.contains("No sales registered for today."));
    }

    #[test]
    fn unknown_product_numbers_are_reported() {
        let mut state = state();
        let out = run("add 0\nadd 9\ncart\n", &mut state);

        assert!(out.contains("No product number 0."));
        assert!(out.contains("No product number 9."));
        assert!(out.contains("The cart is empty."));
    }

    #[test]
    fn clear_drops_cart_contents() {
        let mut state = state();
        let out = run("add 1\nclear\ncheckout\n", &mut state);

        assert!(out.contains("Cart emptied."));
        assert!(out.contains("Empty cart"));
        assert!(state.ledger().is_empty());
    }
}
