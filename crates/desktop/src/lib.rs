//! `maloka-desktop`
//!
//! **Responsibility:** application context and front end for the point of sale.
//!
//! This crate provides:
//! - `AppState`, owning the catalog, cart and ledger for the process
//! - Environment-based configuration
//! - A line-oriented terminal shell standing in for the GUI

pub mod clock;
pub mod commands;
pub mod config;
pub mod shell;
pub mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use commands::{AppState, CommandError};
pub use config::{ConfigError, DesktopConfig};
pub use shell::{Shell, ShellCommand};
pub use types::{CartView, CheckoutReceipt, DailySalesLine, DailySalesView, ProductView};
