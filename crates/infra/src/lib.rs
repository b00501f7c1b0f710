//! `brewhall-infra` — storage and application services.
//!
//! The domain crates stay pure; this crate owns the transactional store and
//! the services that orchestrate multi-entity operations (order placement,
//! cancellation, ledger maintenance) against it.

pub mod services;
pub mod store;

pub use services::{
    CatalogService, InventoryService, InventoryView, OrderService, TaxRateService,
    UserDirectoryService,
};
pub use store::{CafeState, Database};
