//! Application services: one per domain area, all sharing the same
//! [`Database`](crate::store::Database) so multi-entity operations run as a
//! single transaction.

pub mod catalog;
pub mod inventory;
pub mod orders;
pub mod tax;
pub mod users;

pub use catalog::CatalogService;
pub use inventory::{InventoryService, InventoryView};
pub use orders::OrderService;
pub use tax::TaxRateService;
pub use users::UserDirectoryService;
