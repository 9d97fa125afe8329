//! Infrastructure layer: JSON file persistence and sale registration.

pub mod checkout;
pub mod store;


pub use checkout::{CheckoutError, register_sale};
pub use store::{
    InMemoryProductStore, InMemorySalesStore, JsonFileProductStore, JsonFileSalesStore,
    ProductStore, SalesStore, StoreError,
};
